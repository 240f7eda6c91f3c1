mod utils;

use imgmeta_common::error::TagError;
use pretty_assertions::assert_eq;
use utils::*;

fn sorted_keys(exif: &ExifData) -> Vec<String> {
    let mut keys: Vec<_> = exif.keys().into_iter().map(|x| x.to_string()).collect();
    keys.sort();
    keys
}

fn assert_same_entries(a: &ExifData, b: &ExifData) {
    assert_eq!(sorted_keys(a), sorted_keys(b));
    for datum in a.iter() {
        assert_eq!(Some(datum), b.get(datum.key()).ok(), "{}", datum.key());
    }
}

#[test]
fn set_replaces_in_place() {
    let mut exif = ExifData::decode(&camera_exif(ByteOrder::LittleEndian)).unwrap();

    exif.set_raw_value(key("Exif.Image.Make"), "Zenith").unwrap();
    assert_eq!(exif.keys()[0], key("Exif.Image.Make"));
    assert_eq!(exif.make().as_deref(), Some("Zenith"));
    assert_eq!(exif.len(), 7);

    exif.set_raw_value(key("Exif.Image.Artist"), "Someone").unwrap();
    assert_eq!(exif.keys().last(), Some(&key("Exif.Image.Artist")));
    assert_eq!(
        exif.get(key("Exif.Image.Artist")).unwrap().type_(),
        Type::Ascii
    );
}

#[test]
fn set_keeps_type_of_existing_entry() {
    let mut b = TiffBuilder::new(ByteOrder::LittleEndian);
    let width = b.short(100);
    b.ifd(&[(0x0100, Type::Short, 1, width)]);
    let mut exif = ExifData::decode(&b.finish()).unwrap();

    exif.set_raw_value(key("Exif.Image.ImageWidth"), "200").unwrap();
    let datum = exif.get(key("Exif.Image.ImageWidth")).unwrap();
    assert_eq!(datum.type_(), Type::Short);
    assert_eq!(datum.value().unwrap(), Value::Short(vec![200]));

    // Registry type for new entries
    exif.set_raw_value(key("Exif.Image.ImageLength"), "300").unwrap();
    let datum = exif.get(key("Exif.Image.ImageLength")).unwrap();
    assert_eq!(datum.type_(), Type::Long);

    // Unknown tags are undefined
    exif.set_raw_value(key("Exif.Photo.0x1234"), "1 2 3").unwrap();
    let datum = exif.get(key("Exif.Photo.0x1234")).unwrap();
    assert_eq!(datum.type_(), Type::Undefined);
    assert_eq!(datum.data(), &[1, 2, 3]);
}

#[test]
fn invalid_values() {
    let mut exif = ExifData::new();

    assert!(matches!(
        exif.set_raw_value(key("Exif.Photo.ExposureTime"), "1/0"),
        Err(TagError::InvalidValue { .. })
    ));
    assert!(matches!(
        exif.set_raw_value(key("Exif.Image.Orientation"), "abc"),
        Err(TagError::InvalidValue { .. })
    ));
    assert!(matches!(
        exif.set_raw_value(key("Exif.Image.ExifTag"), "26"),
        Err(TagError::InvalidValue { .. })
    ));
    assert!(exif.is_empty());
}

#[test]
fn embedded_nul_and_empty_values() {
    let mut exif = ExifData::new();
    exif.set_value(key("Exif.Image.Make"), Value::Ascii(String::from("ab\0cd")))
        .unwrap();
    exif.set_value(key("Exif.Image.Software"), Value::Ascii(String::new()))
        .unwrap();
    exif.set_value(key("Exif.Photo.0x1234"), Value::Undefined(Vec::new()))
        .unwrap();

    let datum = exif.get(key("Exif.Image.Make")).unwrap();
    assert_eq!(datum.data(), b"ab\0cd\0");
    assert_eq!(datum.count(), 6);

    let reread = ExifData::decode(&exif.encode().unwrap()).unwrap();
    assert_same_entries(&exif, &reread);
    assert_eq!(reread.get(key("Exif.Photo.0x1234")).unwrap().count(), 0);
}

#[test]
fn encode_converts_byte_order() {
    let mut b = TiffBuilder::new(ByteOrder::BigEndian);
    let orientation = b.short(6);
    b.ifd(&[
        (0x010F, Type::Ascii, 6, b"Ac\0me\0".to_vec()),
        (0x0112, Type::Short, 1, orientation),
        (0x013B, Type::Ascii, 0, Vec::new()),
        (0x0131, Type::Ascii, 3, b"\xff\xfe\0".to_vec()),
    ]);
    let mut exif = ExifData::decode(&b.finish()).unwrap();
    assert_eq!(exif.len(), 4);

    exif.set_byte_order(ByteOrder::LittleEndian);
    let encoded = exif.encode().unwrap();
    assert_eq!(&encoded[..2], b"II");

    let reread = ExifData::decode(&encoded).unwrap();
    assert_eq!(reread.len(), 4);
    assert_eq!(
        reread.get(key("Exif.Image.Make")).unwrap().value().unwrap(),
        Value::Ascii(String::from("Ac\0me"))
    );
    assert_eq!(
        reread.get(key("Exif.Image.Orientation")).unwrap().value().unwrap(),
        Value::Short(vec![6])
    );
    assert_eq!(reread.get(key("Exif.Image.Artist")).unwrap().count(), 0);
    // Text that is not UTF-8 is copied as is
    assert_eq!(
        reread.get(key("Exif.Image.Software")).unwrap().data(),
        b"\xff\xfe\0"
    );
}

#[test]
fn encode_reports_unconvertible_entry() {
    let mut b = TiffBuilder::new(ByteOrder::BigEndian);
    let exposure = b.rational(1, 0);
    let exif_ifd_pointer = vec![0; 4];
    let ifd0 = b.ifd(&[
        (0x010F, Type::Ascii, 5, b"Acme\0".to_vec()),
        (0x8769, Type::Long, 1, exif_ifd_pointer),
    ]);
    let exif_ifd = b.ifd(&[(0x829A, Type::Rational, 1, exposure)]);
    b.patch(ifd0.value_positions[1], exif_ifd.offset);
    let mut exif = ExifData::decode(&b.finish()).unwrap();

    // Same byte order copies the stored bytes
    exif.encode().unwrap();

    exif.set_byte_order(ByteOrder::LittleEndian);
    let err = exif.encode().unwrap_err();
    assert!(
        matches!(
            err,
            Error::Tag(TagError::InvalidValue { ref key, .. }) if key == "Exif.Photo.ExposureTime"
        ),
        "{err:?}"
    );
}

#[test]
fn delete() {
    let mut exif = ExifData::decode(&camera_exif(ByteOrder::LittleEndian)).unwrap();

    let datum = exif.delete(key("Exif.Image.Model")).unwrap();
    assert_eq!(datum.raw_value().unwrap(), "Model 1");
    assert!(!exif.contains(key("Exif.Image.Model")));

    assert_eq!(
        exif.delete(key("Exif.Image.Model")),
        Err(TagError::KeyNotFound(String::from("Exif.Image.Model")))
    );
}

#[test]
fn comments() {
    let mut exif = ExifData::with_byte_order(ByteOrder::BigEndian);

    exif.set_raw_value(key("Exif.Photo.UserComment"), "charset=Unicode Grüße")
        .unwrap();
    let datum = exif.get(key("Exif.Photo.UserComment")).unwrap();
    assert_eq!(datum.type_(), Type::Undefined);
    assert_eq!(&datum.data()[..8], b"UNICODE\0");
    assert_eq!(&datum.data()[8..10], &[0, b'G']);
    assert_eq!(datum.raw_value().unwrap(), "charset=Unicode Grüße");

    exif.set_raw_value(key("Exif.Photo.UserComment"), "Hello").unwrap();
    let datum = exif.get(key("Exif.Photo.UserComment")).unwrap();
    assert_eq!(datum.data(), b"ASCII\0\0\0Hello");
    assert_eq!(datum.raw_value().unwrap(), "charset=Ascii Hello");

    assert!(matches!(
        exif.set_raw_value(key("Exif.Photo.UserComment"), "charset=Ascii Grüße"),
        Err(TagError::InvalidValue { .. })
    ));

    exif.set_raw_value(key("Exif.Image.XPTitle"), "Titel").unwrap();
    let datum = exif.get(key("Exif.Image.XPTitle")).unwrap();
    assert_eq!(datum.type_(), Type::Byte);
    assert_eq!(datum.data(), b"T\0i\0t\0e\0l\0\0\0");
    assert_eq!(datum.raw_value().unwrap(), "Titel");
    assert_eq!(datum.human_value().unwrap(), "Titel");
}

#[test]
fn encode_roundtrip() {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let exif = ExifData::decode(&camera_exif(order)).unwrap();
        let encoded = exif.encode().unwrap();
        assert_eq!(&encoded[..2], order.marker());

        let reread = ExifData::decode(&encoded).unwrap();
        assert_same_entries(&exif, &reread);
        assert_eq!(reread.byte_order(), order);
    }
}

#[test]
fn encode_new_store() {
    let mut exif = ExifData::new();
    exif.set_raw_value(key("Exif.GPSInfo.GPSLatitudeRef"), "N").unwrap();
    exif.set_raw_value(key("Exif.GPSInfo.GPSLatitude"), "52/1 32/1 37118/1000")
        .unwrap();
    exif.set_raw_value(key("Exif.GPSInfo.GPSLongitudeRef"), "W").unwrap();
    exif.set_raw_value(key("Exif.GPSInfo.GPSLongitude"), "13/1 23/1 679/1000")
        .unwrap();
    exif.set_raw_value(key("Exif.Iop.InteroperabilityIndex"), "R98").unwrap();
    exif.set_raw_value(key("Exif.Image.Make"), "Acme").unwrap();

    let reread = ExifData::decode(&exif.encode().unwrap()).unwrap();
    assert_same_entries(&exif, &reread);

    let location = reread.gps_location().unwrap();
    assert_eq!(location.geo_uri(), "geo:52.543644,-13.383522");
    assert_eq!(
        reread
            .get(key("Exif.GPSInfo.GPSLatitude"))
            .unwrap()
            .human_value()
            .unwrap(),
        "52 deg 32' 37.12\""
    );
}

#[test]
fn encode_empty() {
    let exif = ExifData::new();
    let encoded = exif.encode().unwrap();
    assert_eq!(encoded, b"II*\0\x08\0\0\0\0\0\0\0\0\0");
    assert!(ExifData::decode(&encoded).unwrap().is_empty());
}

#[test]
fn thumbnail_roundtrip() {
    let mut exif = ExifData::decode(&camera_exif(ByteOrder::LittleEndian)).unwrap();
    exif.set_raw_value(key("Exif.Thumbnail.Compression"), "6").unwrap();
    exif.set_thumbnail(Some(b"\xff\xd8\xff\xd9".to_vec()));

    let reread = ExifData::decode(&exif.encode().unwrap()).unwrap();
    assert_eq!(reread.thumbnail(), Some(b"\xff\xd8\xff\xd9".as_slice()));
    assert!(reread.contains(key("Exif.Thumbnail.JPEGInterchangeFormatLength")));

    // Offsets are removed with the thumbnail
    let mut exif = reread;
    exif.set_thumbnail(None);
    let reread = ExifData::decode(&exif.encode().unwrap()).unwrap();
    assert_eq!(reread.thumbnail(), None);
    assert!(!reread.contains(key("Exif.Thumbnail.JPEGInterchangeFormat")));
    assert!(reread.contains(key("Exif.Thumbnail.Compression")));
}

fn maker_note_exif(maker_note_offset: u32) -> Vec<u8> {
    let mut b = TiffBuilder::new(ByteOrder::LittleEndian);
    let ifd0 = b.ifd(&[
        (0x010F, Type::Ascii, 5, b"Acme\0".to_vec()),
        (0x8769, Type::Long, 1, vec![0; 4]),
    ]);
    let exif_ifd = b.ifd(&[(0x927C, Type::Undefined, 16, vec![0; 16])]);
    b.patch(ifd0.value_positions[1], exif_ifd.offset);

    b.buf.resize(maker_note_offset as usize, 0);
    let offset = b.blob(b"Nikon\0maker note");
    b.patch(exif_ifd.value_positions[0], offset);
    b.finish()
}

#[test]
fn maker_note_keeps_offset() {
    let exif = ExifData::decode(&maker_note_exif(200)).unwrap();
    let maker_note = exif.get(key("Exif.Photo.MakerNote")).unwrap();
    assert_eq!(maker_note.origin(), Some(200));

    let reread = ExifData::decode(&exif.encode().unwrap()).unwrap();
    let maker_note = reread.get(key("Exif.Photo.MakerNote")).unwrap();
    assert_eq!(maker_note.origin(), Some(200));
    assert_eq!(maker_note.data(), b"Nikon\0maker note");
}

#[test]
fn maker_note_moved_when_overlapping() {
    let mut exif = ExifData::decode(&maker_note_exif(200)).unwrap();
    exif.set_raw_value(key("Exif.Image.Artist"), &"x".repeat(300))
        .unwrap();

    let reread = ExifData::decode(&exif.encode().unwrap()).unwrap();
    let maker_note = reread.get(key("Exif.Photo.MakerNote")).unwrap();
    assert_ne!(maker_note.origin(), Some(200));
    assert_eq!(maker_note.data(), b"Nikon\0maker note");
}

#[test]
fn encode_into_tiff() {
    let mut b = TiffBuilder::new(ByteOrder::BigEndian);
    let strip = b"pixel data".to_vec();
    let ifd0 = b.ifd(&[
        (0x0100, Type::Long, 1, b.long(10)),
        (0x0111, Type::Long, 1, vec![0; 4]),
        (0x0117, Type::Long, 1, b.long(strip.len() as u32)),
    ]);
    let page2 = b.ifd(&[(0x0100, Type::Long, 1, b.long(5))]);
    b.patch(ifd0.next_position, page2.offset);
    let strip_offset = b.blob(&strip);
    b.patch(ifd0.value_positions[1], strip_offset);
    let tiff = b.finish();

    let decoded = Decoder::new(
        &tiff,
        DecodeOptions {
            thumbnail_ifd: false,
        },
    )
    .decode()
    .unwrap();
    assert_eq!(decoded.next_ifd, page2.offset);
    let next_ifd = decoded.next_ifd;
    let mut exif = ExifData::from(decoded);
    exif.set_raw_value(key("Exif.Image.Artist"), "Someone").unwrap();

    let xmp = Datum::new(
        key("Exif.Image.XMLPacket"),
        &Value::Byte(b"<x:xmpmeta/>".to_vec()),
        ByteOrder::BigEndian,
    )
    .unwrap();

    let written = exif.encode_into(tiff.clone(), &[xmp], next_ifd).unwrap();
    // Existing data is kept, only the header offset changes
    assert_eq!(&written[8..tiff.len()], &tiff[8..]);
    assert!(written.len() > tiff.len());

    let decoded = Decoder::new(
        &written,
        DecodeOptions {
            thumbnail_ifd: false,
        },
    )
    .decode()
    .unwrap();
    assert_eq!(decoded.next_ifd, page2.offset);

    let reread = ExifData::from(decoded);
    assert_eq!(
        reread
            .get(key("Exif.Image.StripOffsets"))
            .unwrap()
            .value()
            .unwrap()
            .as_u32(),
        Some(strip_offset)
    );
    assert_eq!(
        reread
            .get(key("Exif.Image.XMLPacket"))
            .unwrap()
            .data(),
        b"<x:xmpmeta/>"
    );
    assert_eq!(
        reread
            .get(key("Exif.Image.Artist"))
            .unwrap()
            .raw_value()
            .unwrap(),
        "Someone"
    );

    assert!(matches!(
        ExifData::new().encode_into(tiff, &[], 0),
        Err(Error::ByteOrderMismatch)
    ));
}
