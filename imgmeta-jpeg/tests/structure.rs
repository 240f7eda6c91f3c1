mod utils;

use pretty_assertions::assert_eq;
use utils::*;

#[test]
fn segments() {
    let data = jpeg(&[jfif(), app1(EXIF_IDENTIFIER_STRING, b"MM\0*")]);
    let jpeg = Jpeg::new(data).unwrap();

    assert_eq!(
        markers(&jpeg),
        vec![
            Marker::SOI,
            Marker::APP0,
            Marker::APP1,
            Marker::SOF0,
            Marker::SOS
        ]
    );
    assert_eq!(jpeg.segments()[1].pos(), 2);
    assert_eq!(jpeg.segments()[1].data(), b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0");
    assert_eq!(jpeg.entropy_coded_data(), SCAN);
    assert_eq!(jpeg.exif_data(), Some(b"MM\0*".as_slice()));
    assert_eq!(jpeg.xmp_data(), None);
}

#[test]
fn dimensions() {
    let jpeg = Jpeg::new(jpeg(&[])).unwrap();

    let sof = jpeg.sof().unwrap();
    assert_eq!(sof.precision, 8);
    assert_eq!(sof.components.len(), 1);
    assert_eq!(jpeg.dimensions(), Some((640, 480)));
}

#[test]
fn fill_bytes() {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xFF];
    data.extend(jpeg(&[]).split_off(2));

    let jpeg = Jpeg::new(data).unwrap();
    assert_eq!(markers(&jpeg), vec![Marker::SOI, Marker::SOF0, Marker::SOS]);
}

#[test]
fn filetype() {
    assert!(Jpeg::is_filetype(&jpeg(&[])));
    assert!(!Jpeg::is_filetype(b"\x89PNG\r\n\x1a\n"));
    assert_eq!(<Jpeg as ImageFormat>::mime_type(), "image/jpeg");
}

#[test]
fn not_a_jpeg() {
    let err = Jpeg::new(b"GIF89a".to_vec()).unwrap_err();
    assert!(matches!(err.err(), Error::NoStartOfImage));
    assert_eq!(err.into_inner(), b"GIF89a");
}

#[test]
fn truncated_segment() {
    let mut data = vec![0xFF, 0xD8];
    data.extend_from_slice(&[0xFF, 0xE1, 0x00, 0x20, b'E']);

    let err = Jpeg::new(data).unwrap_err();
    assert!(matches!(err.err(), Error::SegmentEof(Marker::APP1)));
}

#[test]
fn missing_scan() {
    let data = vec![0xFF, 0xD8, 0xFF, 0xD9];

    let err = Jpeg::new(data).unwrap_err();
    assert!(matches!(err.err(), Error::NoStartOfScan));
}

#[test]
fn garbage_between_segments() {
    let mut data = vec![0xFF, 0xD8, 0x00];
    data.extend(sos());

    let err = Jpeg::new(data).unwrap_err();
    assert!(matches!(err.err(), Error::MarkerExpected(2)));
}

#[test]
fn marker_kinds() {
    assert!(Marker::SOF2.is_sof());
    assert!(!Marker::DHT.is_sof());
    assert!(Marker::RST3.is_standalone());
    assert!(Marker::APP13.is_app());
    assert_eq!(Marker::from(0xED), Marker::APP13);
}
