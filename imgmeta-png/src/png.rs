use std::io::Cursor;

use imgmeta_common::error::ErrorWithData;
use imgmeta_common::image::RawMetadata;
use imgmeta_common::math::*;
use imgmeta_common::prelude::*;
use imgmeta_common::read::ReadExt;

use crate::chunk::RawChunk;
use crate::*;

pub const MAGIC_BYTES: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10];

/// Upper limit for inflating compressed text chunks
pub const INFLATE_LIMIT: usize = 100 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Png {
    /// Raw data
    pub(crate) data: Vec<u8>,
    /// Chunks in the order in which they appear in the data
    pub(crate) chunks: Vec<RawChunk>,
}

impl Png {
    /// Returns PNG image representation
    ///
    /// * `data`: PNG image data starting with magic bytes
    pub fn new(data: Vec<u8>) -> std::result::Result<Self, ErrorWithData<Error>> {
        match Self::find_chunks(&data) {
            Ok(chunks) => Ok(Self { chunks, data }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    /// Checks if passed data have PNG magic bytes
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns all chunks
    pub fn chunks(&self) -> Vec<Chunk<'_>> {
        self.chunks.iter().map(|x| x.chunk(self)).collect()
    }

    /// Returns raw exif data if available
    ///
    /// Prefers the [`eXIf`](ChunkType::eXIf) chunk and uses the legacy text
    /// chunk with [`LEGACY_EXIF_KEYWORD`] as fallback.
    pub fn exif_data(&self, inflate_limit: usize) -> Option<Vec<u8>> {
        let chunks = self.chunks();

        if let Some(exif) = chunks.iter().find(|x| x.chunk_type() == ChunkType::eXIf) {
            Some(exif.chunk_data().to_vec())
        } else {
            chunks.iter().find_map(|x| x.legacy_exif(inflate_limit))
        }
    }

    /// Returns the XMP packet if available
    pub fn xmp_data(&self, inflate_limit: usize) -> Option<Vec<u8>> {
        self.chunks().iter().find_map(|x| x.xmp(inflate_limit))
    }

    /// Width and height from the `IHDR` chunk
    pub fn ihdr_dimensions(&self) -> Result<(u32, u32)> {
        let ihdr = self
            .chunks()
            .into_iter()
            .find(|x| x.chunk_type() == ChunkType::IHDR)
            .ok_or(Error::MissingChunk(ChunkType::IHDR))?;

        let mut cur = Cursor::new(ihdr.chunk_data());
        let width = cur.read_be_u32().map_err(|_| Error::UnexpectedEndOfChunkData)?;
        let height = cur.read_be_u32().map_err(|_| Error::UnexpectedEndOfChunkData)?;

        Ok((width, height))
    }

    /// Replaces the metadata chunks
    ///
    /// Existing chunks are updated in place, new ones are inserted before the
    /// first `IDAT` chunk. Legacy Exif chunks are dropped. PNG has no place
    /// for IPTC data.
    pub fn set_metadata(&mut self, metadata: &RawMetadata) -> Result<()> {
        if metadata.iptc.is_some() {
            return Err(Error::UnsupportedMetadata("IPTC"));
        }

        let mut exif = metadata
            .exif
            .as_deref()
            .map(|x| encode_chunk(ChunkType::eXIf, x))
            .transpose()?;
        let mut xmp = metadata
            .xmp
            .as_deref()
            .map(|x| encode_chunk(ChunkType::iTXt, &xmp_itxt(x)))
            .transpose()?;
        let mut exif_seen = false;
        let mut xmp_seen = false;

        let mut data = Vec::with_capacity(self.data.len());
        data.extend_from_slice(MAGIC_BYTES);

        let mut end = MAGIC_BYTES.len();
        for raw in &self.chunks {
            let chunk = raw.chunk(self);
            end = raw.data.end.safe_add(4)?;
            let complete = self
                .data
                .get(raw.pos..end)
                .ok_or(Error::UnexpectedEof)?;

            match chunk.chunk_type() {
                ChunkType::eXIf => {
                    if !exif_seen {
                        data.extend(exif.take().unwrap_or_default());
                    }
                    exif_seen = true;
                }
                ChunkType::iTXt if chunk.xmp(INFLATE_LIMIT).is_some() => {
                    if !xmp_seen {
                        data.extend(xmp.take().unwrap_or_default());
                    }
                    xmp_seen = true;
                }
                _ if chunk.is_legacy_exif() => {
                    tracing::debug!("Dropping legacy Exif chunk");
                }
                ChunkType::IDAT | ChunkType::IEND => {
                    data.extend(exif.take().unwrap_or_default());
                    data.extend(xmp.take().unwrap_or_default());
                    data.extend_from_slice(complete);
                }
                _ => data.extend_from_slice(complete),
            }
        }

        // Data after IEND
        data.extend_from_slice(self.data.get(end..).unwrap_or_default());

        self.chunks = Self::find_chunks(&data)?;
        self.data = data;

        Ok(())
    }

    /// List all chunks in the data
    fn find_chunks(data: &[u8]) -> Result<Vec<RawChunk>> {
        let mut cur = Cursor::new(data);

        let magic_bytes = cur
            .read_array::<8>()
            .map_err(|_| Error::UnexpectedEof)?;
        if magic_bytes.as_slice() != MAGIC_BYTES {
            return Err(Error::InvalidMagicBytes(magic_bytes.to_vec()));
        }

        let mut chunks = Vec::new();
        loop {
            let pos = cur.position().usize()?;
            // First 4 bytes are length
            let length = cur.read_be_u32().map_err(|_| Error::UnexpectedEof)?;
            // Next 4 bytes are chunk type
            let chunk_type = ChunkType::from(cur.read_be_u32().map_err(|_| Error::UnexpectedEof)?);

            // Next are the data
            let data_start = cur.position().usize()?;
            let data_end = data_start.safe_add(length.usize()?)?;
            cur.skip(length.into()).map_err(|_| Error::UnexpectedEof)?;

            // Last 4 bytes after the data are a CRC
            let crc = cur.read_array().map_err(|_| Error::UnexpectedEof)?;

            tracing::debug!("Chunk {chunk_type:?} at {pos} with {length} bytes");
            chunks.push(RawChunk {
                chunk_type,
                pos,
                data: data_start..data_end,
                crc,
            });

            if chunk_type == ChunkType::IEND {
                break;
            }
        }

        Ok(chunks)
    }
}

impl ImageFormat for Png {
    fn is_filetype(data: &[u8]) -> bool {
        Self::is_filetype(data)
    }

    fn mime_type() -> &'static str {
        "image/png"
    }
}

impl ImageMetadata for Png {
    fn exif(&self) -> Option<Vec<u8>> {
        self.exif_data(INFLATE_LIMIT)
    }

    fn xmp(&self) -> Option<Vec<u8>> {
        self.xmp_data(INFLATE_LIMIT)
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        self.ihdr_dimensions().ok()
    }
}
