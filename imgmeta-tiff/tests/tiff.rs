mod utils;

use pretty_assertions::assert_eq;
use utils::*;

#[test]
fn read() {
    let tiff = Tiff::new(sample(ByteOrder::LittleEndian).data).unwrap();

    let exif = tiff.exif_data().unwrap();
    assert_eq!(exif.make().as_deref(), Some("Acme"));
    assert!(!exif.contains(key("Exif.Image.XMLPacket")));
    assert!(!exif.contains(key("Exif.Image.IPTCNAA")));
    assert!(exif.contains(key("Exif.Image.StripOffsets")));

    assert_eq!(tiff.xmp_data().unwrap().as_deref(), Some(XMP));
    assert_eq!(tiff.iptc_data().unwrap().as_deref(), Some(IPTC));
    assert_eq!(tiff.dimensions(), Some((2, 2)));
    assert_eq!(tiff.byte_order(), ByteOrder::LittleEndian);
}

#[test]
fn filetype() {
    let sample = sample(ByteOrder::BigEndian);
    assert!(Tiff::is_filetype(&sample.data));
    assert!(!Tiff::is_filetype(b"\xff\xd8\xff"));
    assert_eq!(<Tiff as ImageFormat>::mime_type(), "image/tiff");
}

#[test]
fn invalid() {
    let err = Tiff::new(b"II*\0\xff\xff\xff\x00".to_vec()).unwrap_err();
    assert!(matches!(err.err(), Error::Exif(_)));
}

#[test]
fn write_appends() {
    let sample = sample(ByteOrder::LittleEndian);
    let mut tiff = Tiff::new(sample.data.clone()).unwrap();

    let mut exif = tiff.exif_data().unwrap();
    exif.set_raw_value(key("Exif.Image.Make"), "Zenith").unwrap();
    tiff.set_metadata(&exif, Some(b"<new/>"), None).unwrap();

    let data = tiff.into_inner();
    // Only the IFD0 offset in the header changes
    assert_eq!(data[..4], sample.data[..4]);
    assert_eq!(data[8..sample.data.len()], sample.data[8..]);
    assert_eq!(&data[8..12], PIXELS);

    let tiff = Tiff::new(data).unwrap();
    let exif = tiff.exif_data().unwrap();
    assert_eq!(exif.make().as_deref(), Some("Zenith"));
    assert_eq!(
        exif.get(key("Exif.Image.StripOffsets"))
            .unwrap()
            .raw_value()
            .unwrap(),
        "8"
    );
    assert_eq!(tiff.xmp_data().unwrap().as_deref(), Some(b"<new/>".as_slice()));
    assert_eq!(tiff.iptc_data().unwrap(), None);
    assert_eq!(tiff.decode().unwrap().next_ifd, sample.page2);
}

#[test]
fn image_structure_is_kept() {
    let mut tiff = Tiff::new(sample(ByteOrder::BigEndian).data).unwrap();

    tiff.set_metadata(&ExifData::new(), None, Some(IPTC)).unwrap();

    let tiff = Tiff::new(tiff.into_inner()).unwrap();
    let exif = tiff.exif_data().unwrap();
    assert_eq!(tiff.dimensions(), Some((2, 2)));
    assert!(exif.contains(key("Exif.Image.StripByteCounts")));
    assert_eq!(exif.make(), None);
    assert_eq!(tiff.iptc_data().unwrap().as_deref(), Some(IPTC));
}

#[test]
fn byte_order_is_converted() {
    let mut tiff = Tiff::new(sample(ByteOrder::BigEndian).data).unwrap();

    let mut exif = ExifData::with_byte_order(ByteOrder::LittleEndian);
    exif.set_raw_value(key("Exif.Image.Orientation"), "6").unwrap();
    tiff.set_metadata(&exif, None, None).unwrap();

    let data = tiff.into_inner();
    assert!(data.starts_with(b"MM\0*"));
    let tiff = Tiff::new(data).unwrap();
    assert_eq!(
        tiff.exif_data()
            .unwrap()
            .get(key("Exif.Image.Orientation"))
            .unwrap()
            .raw_value()
            .unwrap(),
        "6"
    );
}

#[test]
fn header_points_to_original_ifd0() {
    let sample = sample(ByteOrder::LittleEndian);
    assert_eq!(&sample.data[4..8], &sample.ifd0.to_le_bytes());
}
