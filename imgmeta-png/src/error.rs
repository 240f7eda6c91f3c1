use imgmeta_common::math::MathError;
use miniz_oxide::inflate::DecompressError;

use crate::ChunkType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Unexpected end of file")]
    UnexpectedEof,
    #[error("Invalid magic bytes: {0:x?}")]
    InvalidMagicBytes(Vec<u8>),
    #[error("Unexpected end of chunk data")]
    UnexpectedEndOfChunkData,
    #[error("No {0:?} chunk")]
    MissingChunk(ChunkType),
    #[error("Chunk {0:?} with {1} bytes is too large")]
    ChunkTooLarge(ChunkType, usize),
    #[error("{0} metadata cannot be stored in PNG images")]
    UnsupportedMetadata(&'static str),
    #[error("Zlib decompression error: {0}")]
    Zlib(DecompressError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
}
