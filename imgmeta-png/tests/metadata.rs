mod utils;

use pretty_assertions::assert_eq;
use utils::*;

#[test]
fn insert_before_idat() {
    let mut png = Png::new(png(&[text(b"Comment", b"hello")])).unwrap();

    png.set_metadata(&RawMetadata {
        exif: Some(b"MM\0*".to_vec()),
        iptc: None,
        xmp: Some(b"<x/>".to_vec()),
    })
    .unwrap();

    assert_eq!(
        chunk_types(&png),
        vec![
            ChunkType::IHDR,
            ChunkType::tEXt,
            ChunkType::eXIf,
            ChunkType::iTXt,
            ChunkType::IDAT,
            ChunkType::IEND
        ]
    );
    assert!(png.chunks().iter().all(|x| x.crc_valid()));
    assert_eq!(png.exif(), Some(b"MM\0*".to_vec()));
    assert_eq!(png.xmp(), Some(b"<x/>".to_vec()));
}

#[test]
fn replace_in_place() {
    let xmp = chunk(ChunkType::iTXt, &xmp_itxt(b"<old/>"));
    let exif = chunk(ChunkType::eXIf, b"old");
    let mut png = Png::new(png(&[xmp, text(b"Comment", b"x"), exif])).unwrap();

    png.set_metadata(&RawMetadata {
        exif: Some(b"new".to_vec()),
        iptc: None,
        xmp: Some(b"<new/>".to_vec()),
    })
    .unwrap();

    assert_eq!(
        chunk_types(&png),
        vec![
            ChunkType::IHDR,
            ChunkType::iTXt,
            ChunkType::tEXt,
            ChunkType::eXIf,
            ChunkType::IDAT,
            ChunkType::IEND
        ]
    );
    assert_eq!(png.exif(), Some(b"new".to_vec()));
    assert_eq!(png.xmp(), Some(b"<new/>".to_vec()));
}

#[test]
fn remove() {
    let xmp = chunk(ChunkType::iTXt, &xmp_itxt(b"<old/>"));
    let mut png = Png::new(png(&[xmp, legacy_exif(b"MM\0*")])).unwrap();

    png.set_metadata(&RawMetadata::default()).unwrap();

    assert_eq!(
        chunk_types(&png),
        vec![ChunkType::IHDR, ChunkType::IDAT, ChunkType::IEND]
    );
    assert_eq!(png.exif(), None);
}

#[test]
fn legacy_exif_is_replaced() {
    let mut png = Png::new(png(&[legacy_exif(b"MM\0*old")])).unwrap();

    png.set_metadata(&RawMetadata {
        exif: Some(b"MM\0*new".to_vec()),
        iptc: None,
        xmp: None,
    })
    .unwrap();

    assert_eq!(
        chunk_types(&png),
        vec![
            ChunkType::IHDR,
            ChunkType::eXIf,
            ChunkType::IDAT,
            ChunkType::IEND
        ]
    );
    assert_eq!(png.exif(), Some(b"MM\0*new".to_vec()));
}

#[test]
fn pixel_data_unchanged() {
    let original = png(&[]);
    let mut png = Png::new(original.clone()).unwrap();

    png.set_metadata(&RawMetadata::default()).unwrap();

    assert_eq!(png.into_inner(), original);
}

#[test]
fn trailing_data_is_kept() {
    let mut data = png(&[]);
    data.extend_from_slice(b"trailer");
    let mut png = Png::new(data).unwrap();

    png.set_metadata(&RawMetadata {
        exif: Some(b"MM\0*".to_vec()),
        iptc: None,
        xmp: None,
    })
    .unwrap();

    assert!(png.into_inner().ends_with(b"IEND\xaeB`\x82trailer"));
}

#[test]
fn iptc_not_supported() {
    let original = png(&[]);
    let mut png = Png::new(original.clone()).unwrap();

    let err = png
        .set_metadata(&RawMetadata {
            exif: None,
            iptc: Some(vec![0x1C, 2, 0, 0, 0]),
            xmp: None,
        })
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedMetadata("IPTC")));
    assert_eq!(png.into_inner(), original);
}
