use std::io::Cursor;
use std::ops::Range;

use imgmeta_common::read::{ReadExt, SliceExt};

use crate::{ChunkType, Error, Png, Result};

/// Keyword of legacy Exif data written by ImageMagick and exiftool
pub const LEGACY_EXIF_KEYWORD: &[u8] = b"Raw profile type exif";
/// Keyword of the `iTXt` chunk carrying XMP
pub const XMP_KEYWORD: &[u8] = b"XML:com.adobe.xmp";

const EXIF_PREFIX: &[u8] = b"Exif\0\0";

#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    pub(crate) chunk_type: ChunkType,
    pub(crate) data: &'a [u8],
    pub(crate) crc: [u8; 4],
    pub(crate) pos: usize,
}

/// Content of an [`iTXt`](ChunkType::iTXt) chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itxt<'a> {
    pub keyword: &'a [u8],
    pub compressed: bool,
    pub language: &'a [u8],
    pub translated_keyword: &'a [u8],
    /// UTF-8 text, inflated if it was compressed
    pub text: Vec<u8>,
}

impl<'a> Chunk<'a> {
    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    pub fn chunk_data(&self) -> &'a [u8] {
        self.data
    }

    /// Position of the length field
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn crc(&self) -> [u8; 4] {
        self.crc
    }

    pub fn crc_valid(&self) -> bool {
        crc(self.chunk_type, self.data) == self.crc
    }

    /// Keyword of text chunks
    pub fn keyword(&self) -> Result<&'a [u8]> {
        let len = self.data.iter().take_while(|x| **x != 0).count();

        self.data
            .get(..len)
            .ok_or(Error::UnexpectedEndOfChunkData)
    }

    /// Returns keyword and value of a [`tEXt`](ChunkType::tEXt) chunk
    pub fn text(&self) -> Result<(&'a [u8], &'a [u8])> {
        let mut cur = Cursor::new(self.data);
        let keyword = cur
            .slice_until(0)
            .map_err(|_| Error::UnexpectedEndOfChunkData)?;
        let text = cur
            .slice_to_end()
            .map_err(|_| Error::UnexpectedEndOfChunkData)?;

        Ok((keyword, text))
    }

    /// Keyword and value of a [`tEXt`](ChunkType::tEXt) chunk as strings
    ///
    /// `tEXt` chunks are Latin-1 encoded.
    pub fn text_string(&self) -> Result<(String, String)> {
        let (keyword, text) = self.text()?;
        let decode = |x: &[u8]| encoding_rs::WINDOWS_1252.decode_without_bom_handling(x).0.into_owned();

        Ok((decode(keyword), decode(text)))
    }

    /// Returns the content of a [`zTXt`](ChunkType::zTXt) chunk
    ///
    /// The first value is the keyword, the second is the decompressed data.
    pub fn ztxt(&self, inflate_limit: usize) -> Result<(&'a [u8], Vec<u8>)> {
        let (keyword, raw) = self.text()?;

        // Skip byte for compression method
        let raw = raw.get(1..).ok_or(Error::UnexpectedEndOfChunkData)?;

        let data = miniz_oxide::inflate::decompress_to_vec_zlib_with_limit(raw, inflate_limit)
            .map_err(Error::Zlib)?;

        Ok((keyword, data))
    }

    /// Returns the content of an [`iTXt`](ChunkType::iTXt) chunk
    pub fn itxt(&self, inflate_limit: usize) -> Result<Itxt<'a>> {
        let eod = |_| Error::UnexpectedEndOfChunkData;
        let mut cur = Cursor::new(self.data);

        let keyword = cur.slice_until(0).map_err(eod)?;
        let compressed = cur.read_byte().map_err(eod)? == 1;
        let _compression_method = cur.read_byte().map_err(eod)?;
        let language = cur.slice_until(0).map_err(eod)?;
        let translated_keyword = cur.slice_until(0).map_err(eod)?;
        let raw = cur.slice_to_end().map_err(eod)?;

        let text = if compressed {
            miniz_oxide::inflate::decompress_to_vec_zlib_with_limit(raw, inflate_limit)
                .map_err(Error::Zlib)?
        } else {
            raw.to_vec()
        };

        Ok(Itxt {
            keyword,
            compressed,
            language,
            translated_keyword,
            text,
        })
    }

    /// XMP packet if this is the XMP chunk
    pub fn xmp(&self, inflate_limit: usize) -> Option<Vec<u8>> {
        if self.chunk_type != ChunkType::iTXt || self.keyword().ok()? != XMP_KEYWORD {
            return None;
        }

        match self.itxt(inflate_limit) {
            Ok(itxt) => Some(itxt.text),
            Err(err) => {
                tracing::info!("Unreadable XMP chunk: {err}");
                None
            }
        }
    }

    pub fn is_legacy_exif(&self) -> bool {
        matches!(self.chunk_type, ChunkType::zTXt | ChunkType::tEXt)
            && self.keyword().is_ok_and(|x| x == LEGACY_EXIF_KEYWORD)
    }

    /// Returns the Exif data stored in a [`zTXt`](ChunkType::zTXt) or
    /// [`tEXt`](ChunkType::tEXt) chunk
    ///
    /// The text is `exif`, the data length and the hex encoded data
    /// separated by whitespace.
    pub fn legacy_exif(&self, inflate_limit: usize) -> Option<Vec<u8>> {
        if !self.is_legacy_exif() {
            return None;
        }

        let raw = if self.chunk_type == ChunkType::zTXt {
            self.ztxt(inflate_limit).ok()?.1
        } else {
            self.text().ok()?.1.to_vec()
        };

        let mut fields = raw.split(|x| x.is_ascii_whitespace()).filter(|x| !x.is_empty());

        if fields.next()? != b"exif" {
            return None;
        }
        // Length of the data
        fields.next()?;

        let hex_data: Vec<u8> = fields.flatten().copied().collect();
        let exif_with_prefix = hex::decode(hex_data).ok()?;

        exif_with_prefix
            .strip_prefix(EXIF_PREFIX)
            .map(|x| x.to_vec())
    }
}

/// Chunk location within [`Png`] data
#[derive(Debug, Clone)]
pub(crate) struct RawChunk {
    pub(crate) chunk_type: ChunkType,
    pub(crate) pos: usize,
    pub(crate) data: Range<usize>,
    pub(crate) crc: [u8; 4],
}

impl RawChunk {
    pub(crate) fn chunk<'a>(&self, png: &'a Png) -> Chunk<'a> {
        Chunk {
            chunk_type: self.chunk_type,
            data: png.data.get(self.data.clone()).unwrap_or_default(),
            crc: self.crc,
            pos: self.pos,
        }
    }
}

/// CRC over chunk type and data
pub fn crc(chunk_type: ChunkType, data: &[u8]) -> [u8; 4] {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&chunk_type.bytes());
    hasher.update(data);
    hasher.finalize().to_be_bytes()
}

/// Complete chunk with length, type, data and CRC
pub fn encode_chunk(chunk_type: ChunkType, data: &[u8]) -> Result<Vec<u8>> {
    let len = u32::try_from(data.len()).map_err(|_| Error::ChunkTooLarge(chunk_type, data.len()))?;

    let mut chunk = Vec::with_capacity(data.len().saturating_add(12));
    chunk.extend_from_slice(&len.to_be_bytes());
    chunk.extend_from_slice(&chunk_type.bytes());
    chunk.extend_from_slice(data);
    chunk.extend_from_slice(&crc(chunk_type, data));

    Ok(chunk)
}

/// Uncompressed XMP `iTXt` chunk data
pub fn xmp_itxt(xmp: &[u8]) -> Vec<u8> {
    let mut data = XMP_KEYWORD.to_vec();
    // Keyword terminator, no compression, compression method, empty language
    // and translated keyword
    data.extend_from_slice(&[0, 0, 0, 0, 0]);
    data.extend_from_slice(xmp);
    data
}
