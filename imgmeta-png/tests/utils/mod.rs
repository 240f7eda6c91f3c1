#![allow(dead_code)]

pub use imgmeta_common::image::RawMetadata;
pub use imgmeta_common::prelude::*;
pub use imgmeta_png::*;

pub const PIXELS: &[u8] = b"\x78\x9c\x63\x60\x00\x00\x00\x02\x00\x01";

pub fn chunk(chunk_type: ChunkType, data: &[u8]) -> Vec<u8> {
    encode_chunk(chunk_type, data).unwrap()
}

pub fn ihdr(width: u32, height: u32) -> Vec<u8> {
    let mut data = width.to_be_bytes().to_vec();
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[8, 0, 0, 0, 0]);
    chunk(ChunkType::IHDR, &data)
}

/// PNG with IHDR, the given chunks, IDAT and IEND
pub fn png(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut data = MAGIC_BYTES.to_vec();
    data.extend(ihdr(3, 2));
    for chunk in chunks {
        data.extend_from_slice(chunk);
    }
    data.extend(chunk(ChunkType::IDAT, PIXELS));
    data.extend(chunk(ChunkType::IEND, &[]));
    data
}

pub fn chunk_types(png: &Png) -> Vec<ChunkType> {
    png.chunks().iter().map(|x| x.chunk_type()).collect()
}

pub fn text(keyword: &[u8], text: &[u8]) -> Vec<u8> {
    chunk(ChunkType::tEXt, &[keyword, b"\0", text].concat())
}

/// Legacy Exif as written by ImageMagick
pub fn legacy_exif(exif: &[u8]) -> Vec<u8> {
    let hex_data = hex::encode([b"Exif\0\0".as_slice(), exif].concat());
    let mut text = format!("\nexif\n{:8}\n", exif.len() + 6);
    for line in hex_data.as_bytes().chunks(72) {
        text.push_str(std::str::from_utf8(line).unwrap());
        text.push('\n');
    }

    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(text.as_bytes(), 6);
    chunk(
        ChunkType::zTXt,
        &[LEGACY_EXIF_KEYWORD, b"\0\0", compressed.as_slice()].concat(),
    )
}
