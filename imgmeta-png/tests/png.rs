mod utils;

use pretty_assertions::assert_eq;
use utils::*;

#[test]
fn chunks() {
    let png = Png::new(png(&[text(b"Comment", b"hello")])).unwrap();

    assert_eq!(
        chunk_types(&png),
        vec![
            ChunkType::IHDR,
            ChunkType::tEXt,
            ChunkType::IDAT,
            ChunkType::IEND
        ]
    );
    assert!(png.chunks().iter().all(|x| x.crc_valid()));
    assert_eq!(png.chunks()[1].pos(), 8 + 25);
    assert_eq!(
        png.chunks()[1].text_string().unwrap(),
        ("Comment".to_string(), "hello".to_string())
    );
    assert_eq!(png.dimensions(), Some((3, 2)));
}

#[test]
fn latin1_text() {
    let png = Png::new(png(&[text(b"Author", b"J\xf6rg")])).unwrap();

    assert_eq!(png.chunks()[1].text_string().unwrap().1, "Jörg");
}

#[test]
fn chunk_type_names() {
    assert_eq!(format!("{:?}", ChunkType::eXIf), "eXIf");
    assert_eq!(ChunkType::iTXt.bytes(), *b"iTXt");
    assert!(ChunkType::tEXt.is_ancillary());
    assert!(!ChunkType::IDAT.is_ancillary());
    assert_eq!(ChunkType::from(u32::from_be_bytes(*b"sRGB")).bytes(), *b"sRGB");
}

#[test]
fn invalid_magic_bytes() {
    let err = Png::new(b"\xff\xd8\xff\xe0 not a png".to_vec()).unwrap_err();
    assert!(matches!(err.err(), Error::InvalidMagicBytes(_)));
}

#[test]
fn truncated() {
    let mut data = png(&[]);
    data.truncate(data.len() - 6);

    let err = Png::new(data).unwrap_err();
    assert!(matches!(err.err(), Error::UnexpectedEof));
}

#[test]
fn exif() {
    let png = Png::new(png(&[chunk(ChunkType::eXIf, b"MM\0*exif")])).unwrap();

    assert_eq!(png.exif(), Some(b"MM\0*exif".to_vec()));
    assert_eq!(png.xmp(), None);
}

#[test]
fn legacy_exif_fallback() {
    let png = Png::new(png(&[legacy_exif(b"II*\0legacy")])).unwrap();

    assert_eq!(png.exif(), Some(b"II*\0legacy".to_vec()));
    assert!(png.chunks()[1].is_legacy_exif());
}

#[test]
fn xmp() {
    let itxt = xmp_itxt(b"<x:xmpmeta/>");
    let png = Png::new(png(&[chunk(ChunkType::iTXt, &itxt)])).unwrap();

    assert_eq!(png.xmp(), Some(b"<x:xmpmeta/>".to_vec()));
}

#[test]
fn compressed_xmp() {
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(b"<x:xmpmeta/>", 6);
    let data = [XMP_KEYWORD, b"\0\x01\x00en\0\0", compressed.as_slice()].concat();
    let png = Png::new(png(&[chunk(ChunkType::iTXt, &data)])).unwrap();

    let itxt = png.chunks()[1].itxt(INFLATE_LIMIT).unwrap();
    assert!(itxt.compressed);
    assert_eq!(itxt.language, b"en");
    assert_eq!(png.xmp(), Some(b"<x:xmpmeta/>".to_vec()));
}

#[test]
fn inflate_limit() {
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&[b' '; 4096], 6);
    let data = [XMP_KEYWORD, b"\0\x01\x00\0\0", compressed.as_slice()].concat();
    let png = Png::new(png(&[chunk(ChunkType::iTXt, &data)])).unwrap();

    assert!(png.chunks()[1].itxt(100).is_err());
    assert_eq!(png.xmp_data(100), None);
}
