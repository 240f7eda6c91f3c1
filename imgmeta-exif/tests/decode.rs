mod utils;

use pretty_assertions::assert_eq;
use utils::*;

#[test]
fn decode_little_endian() {
    let exif = ExifData::decode(&camera_exif(ByteOrder::LittleEndian)).unwrap();

    assert_eq!(exif.byte_order(), ByteOrder::LittleEndian);
    assert_eq!(
        exif.keys()
            .into_iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>(),
        [
            "Exif.Image.Make",
            "Exif.Image.Model",
            "Exif.Image.Orientation",
            "Exif.Photo.ExposureTime",
            "Exif.Photo.FNumber",
            "Exif.Photo.ExifVersion",
            "Exif.Photo.UserComment",
        ]
    );

    assert_eq!(exif.make().as_deref(), Some("Acme"));
    assert_eq!(exif.model().as_deref(), Some("Model 1"));
    assert_eq!(
        exif.orientation(),
        imgmeta_common::orientation::Orientation::Rotation270
    );
}

#[test]
fn decode_big_endian() {
    let exif = ExifData::decode(&camera_exif(ByteOrder::BigEndian)).unwrap();

    assert_eq!(exif.byte_order(), ByteOrder::BigEndian);
    let exposure = exif.get(key("Exif.Photo.ExposureTime")).unwrap();
    assert_eq!(exposure.raw_value().unwrap(), "1/60");
    assert_eq!(exposure.human_value().unwrap(), "1/60 s");
}

#[test]
fn raw_and_human_values() {
    let exif = ExifData::decode(&camera_exif(ByteOrder::LittleEndian)).unwrap();

    let datum = exif.get(key("Exif.Image.Orientation")).unwrap();
    assert_eq!(datum.raw_value().unwrap(), "6");
    assert_eq!(datum.type_(), Type::Short);

    let datum = exif.get(key("Exif.Photo.FNumber")).unwrap();
    assert_eq!(datum.raw_value().unwrap(), "28/10");
    assert_eq!(datum.human_value().unwrap(), "F2.8");

    let datum = exif.get(key("Exif.Photo.ExifVersion")).unwrap();
    assert_eq!(datum.raw_value().unwrap(), "48 50 51 48");
    assert_eq!(datum.human_value().unwrap(), "2.30");

    let datum = exif.get(key("Exif.Photo.UserComment")).unwrap();
    assert_eq!(datum.raw_value().unwrap(), "charset=Ascii Hello");
    assert_eq!(datum.human_value().unwrap(), "charset=Ascii Hello");

    let info = datum.info();
    assert_eq!(info.name, "UserComment");
    assert_eq!(info.group_name, "Photo");
    assert_eq!(info.type_name, "Undefined");
}

#[test]
fn pointer_tags_are_not_entries() {
    let exif = ExifData::decode(&camera_exif(ByteOrder::LittleEndian)).unwrap();
    assert!(!exif.contains(key("Exif.Image.ExifTag")));
}

#[test]
fn unknown_tag() {
    let mut b = TiffBuilder::new(ByteOrder::LittleEndian);
    let value = b.short(7);
    b.ifd(&[(0xABCD, Type::Short, 1, value)]);
    let exif = ExifData::decode(&b.finish()).unwrap();

    let datum = exif.get(key("Exif.Image.0xabcd")).unwrap();
    assert_eq!(datum.type_(), Type::Short);
    assert_eq!(datum.raw_value().unwrap(), "7");
    assert_eq!(datum.info().name, "0xabcd");
    assert_eq!(datum.info().label, "");
}

#[test]
fn malformed_value_does_not_abort_decoding() {
    let mut b = TiffBuilder::new(ByteOrder::LittleEndian);
    b.ifd(&[
        (0x010F, Type::Ascii, 6, vec![0xFF, 0xFE, b'a', b'b', b'c', 0]),
        (0x0110, Type::Ascii, 6, b"Model\0".to_vec()),
    ]);
    let exif = ExifData::decode(&b.finish()).unwrap();

    assert_eq!(exif.len(), 2);
    let err = exif.get(key("Exif.Image.Make")).unwrap().raw_value().unwrap_err();
    match err {
        imgmeta_common::error::TagError::ValueDecode { key, raw, .. } => {
            assert_eq!(key, "Exif.Image.Make");
            assert_eq!(raw, vec![0xFF, 0xFE, b'a', b'b', b'c', 0]);
        }
        err => panic!("unexpected error {err:?}"),
    }

    // Raw bytes stay available
    assert_eq!(exif.get(key("Exif.Image.Make")).unwrap().data().len(), 6);
    assert_eq!(exif.model().as_deref(), Some("Model"));
}

#[test]
fn sub_ifd_loop() {
    let mut b = TiffBuilder::new(ByteOrder::LittleEndian);
    let ifd0 = b.ifd(&[
        (0x010F, Type::Ascii, 4, b"Abc\0".to_vec()),
        (0x8769, Type::Long, 1, vec![0; 4]),
    ]);
    // Exif IFD pointing at IFD0
    b.patch(ifd0.value_positions[1], ifd0.offset);
    let exif = ExifData::decode(&b.finish()).unwrap();

    assert_eq!(exif.keys(), vec![key("Exif.Image.Make")]);
}

#[test]
fn sub_ifd_outside_of_data() {
    let mut b = TiffBuilder::new(ByteOrder::LittleEndian);
    let ifd0 = b.ifd(&[
        (0x010F, Type::Ascii, 4, b"Abc\0".to_vec()),
        (0x8825, Type::Long, 1, vec![0; 4]),
    ]);
    b.patch(ifd0.value_positions[1], 10_000);
    let exif = ExifData::decode(&b.finish()).unwrap();

    assert_eq!(exif.make().as_deref(), Some("Abc"));
    assert_eq!(exif.len(), 1);
}

#[test]
fn broken_header() {
    assert!(matches!(
        ExifData::decode(b"XX*\0\x08\0\0\0"),
        Err(Error::UnknownByteOrder(_))
    ));
    assert!(matches!(
        ExifData::decode(b"II\x2b\0\x08\0\0\0"),
        Err(Error::MagicBytesWrong(43))
    ));
    assert!(ExifData::decode(b"II").is_err());
    assert!(matches!(
        ExifData::decode(b"II*\0\xff\0\0\0"),
        Err(Error::OffsetTooLarge)
    ));
}

#[test]
fn value_outside_of_data() {
    let mut b = TiffBuilder::new(ByteOrder::LittleEndian);
    let ifd0 = b.ifd(&[
        (0x010F, Type::Ascii, 4, b"Acm\0".to_vec()),
        (0x013B, Type::Ascii, 20, vec![b'a'; 20]),
    ]);
    b.patch(ifd0.value_positions[1], 0xFFFF);
    let exif = ExifData::decode(&b.finish()).unwrap();

    // Only the broken entry is skipped
    assert_eq!(exif.keys(), vec![key("Exif.Image.Make")]);
    assert_eq!(exif.make().as_deref(), Some("Acm"));
}

#[test]
fn thumbnail() {
    let thumbnail = b"\xff\xd8\xff\xd9".to_vec();

    let mut b = TiffBuilder::new(ByteOrder::BigEndian);
    let ifd0 = b.ifd(&[(0x010F, Type::Ascii, 4, b"Abc\0".to_vec())]);
    let ifd1 = b.ifd(&[
        (0x0103, Type::Short, 1, b.short(6)),
        (0x0201, Type::Long, 1, vec![0; 4]),
        (0x0202, Type::Long, 1, b.long(thumbnail.len() as u32)),
    ]);
    let offset = b.blob(&thumbnail);
    b.patch(ifd1.value_positions[1], offset);
    b.patch(ifd0.next_position, ifd1.offset);

    let exif = ExifData::decode(&b.finish()).unwrap();
    assert_eq!(exif.thumbnail(), Some(thumbnail.as_slice()));
    assert_eq!(
        exif.get(key("Exif.Thumbnail.Compression"))
            .unwrap()
            .raw_value()
            .unwrap(),
        "6"
    );

    // Without reading IFD1, as done for TIFF files
    let decoded = Decoder::new(
        &camera_exif(ByteOrder::LittleEndian),
        DecodeOptions {
            thumbnail_ifd: false,
        },
    )
    .decode()
    .unwrap();
    assert_eq!(decoded.next_ifd, 0);
    assert!(decoded.thumbnail.is_none());
}
