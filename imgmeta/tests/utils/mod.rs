#![allow(dead_code)]

pub use imgmeta::exif::{Datum, ExifData, Value};
pub use imgmeta::iptc::IptcData;
pub use imgmeta::xmp::XmpData;
pub use imgmeta::*;
pub use imgmeta_common::exif::ByteOrder;

/// Entropy-coded data with a stuffed byte and a restart marker
pub const SCAN: &[u8] = &[0x12, 0xFF, 0x00, 0x34, 0xFF, 0xD0, 0x56, 0xFF, 0xD9];
pub const PNG_PIXELS: &[u8] = b"\x78\x9c\x63\x60\x00\x00\x00\x02\x00\x01";
pub const TIFF_PIXELS: &[u8] = b"PIXL";

pub const EXIF_IDENTIFIER: &[u8] = b"Exif\0\0";
pub const XMP_IDENTIFIER: &[u8] = b"http://ns.adobe.com/xap/1.0/\0";

pub fn exif(entries: &[(&str, &str)]) -> ExifData {
    let mut exif = ExifData::new();
    for (key, value) in entries {
        exif.set_raw_value(key.parse().unwrap(), value).unwrap();
    }
    exif
}

pub fn iptc(entries: &[(&str, &[&str])]) -> IptcData {
    let mut iptc = IptcData::new();
    for (key, values) in entries {
        iptc.set_raw_values(key.parse().unwrap(), values).unwrap();
    }
    iptc
}

pub fn xmp(entries: &[(&str, &str)]) -> XmpData {
    let mut xmp = XmpData::new();
    for (key, value) in entries {
        xmp.set_text(key.parse().unwrap(), value).unwrap();
    }
    xmp
}

pub fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0xFF, marker];
    data.extend_from_slice(&(payload.len() as u16 + 2).to_be_bytes());
    data.extend_from_slice(payload);
    data
}

pub fn jfif() -> Vec<u8> {
    segment(0xE0, b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0")
}

pub fn exif_segment(exif: &ExifData) -> Vec<u8> {
    segment(0xE1, &[EXIF_IDENTIFIER, exif.encode().unwrap().as_slice()].concat())
}

pub fn xmp_segment(xmp: &XmpData) -> Vec<u8> {
    segment(0xE1, &[XMP_IDENTIFIER, xmp.encode().unwrap().as_slice()].concat())
}

/// 8BIM resource with empty name
pub fn resource(id: u16, data: &[u8]) -> imgmeta::iptc::irb::Resource {
    imgmeta::iptc::irb::Resource::new(id, data.to_vec())
}

pub fn photoshop_segment(resources: &[imgmeta::iptc::irb::Resource]) -> Vec<u8> {
    let data = imgmeta::iptc::irb::encode(resources).unwrap();
    segment(0xED, &[imgmeta::iptc::irb::PHOTOSHOP_HEADER, data.as_slice()].concat())
}

pub fn iptc_segment(iptc: &IptcData) -> Vec<u8> {
    photoshop_segment(&[resource(0x0404, &iptc.encode().unwrap())])
}

/// JPEG from SOI, the given segments, a frame header, scan header and scan
pub fn jpeg_sized(width: u16, height: u16, segments: &[Vec<u8>]) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    for segment in segments {
        data.extend_from_slice(segment);
    }

    let mut sof = vec![8];
    sof.extend_from_slice(&height.to_be_bytes());
    sof.extend_from_slice(&width.to_be_bytes());
    sof.extend_from_slice(&[1, 1, 0x11, 0]);
    data.extend(segment(0xC0, &sof));
    data.extend(segment(0xDA, &[1, 1, 0, 0, 0x3F, 0]));
    data.extend_from_slice(SCAN);
    data
}

pub fn jpeg(segments: &[Vec<u8>]) -> Vec<u8> {
    jpeg_sized(640, 480, segments)
}

/// Scan data starting at the first start of scan marker
pub fn jpeg_scan(data: &[u8]) -> &[u8] {
    let pos = data.windows(2).position(|x| x == [0xFF, 0xDA]).unwrap();
    &data[pos..]
}

pub fn png_chunk(chunk_type: imgmeta::png::ChunkType, data: &[u8]) -> Vec<u8> {
    imgmeta::png::encode_chunk(chunk_type, data).unwrap()
}

/// PNG of 3x2 pixels with the given chunks before the image data
pub fn png(chunks: &[Vec<u8>]) -> Vec<u8> {
    use imgmeta::png::ChunkType;

    let mut ihdr = 3_u32.to_be_bytes().to_vec();
    ihdr.extend_from_slice(&2_u32.to_be_bytes());
    ihdr.extend_from_slice(&[8, 0, 0, 0, 0]);

    let mut data = imgmeta::png::MAGIC_BYTES.to_vec();
    data.extend(png_chunk(ChunkType::IHDR, &ihdr));
    for chunk in chunks {
        data.extend_from_slice(chunk);
    }
    data.extend(png_chunk(ChunkType::IDAT, PNG_PIXELS));
    data.extend(png_chunk(ChunkType::IEND, &[]));
    data
}

/// Little endian TIFF of 2x2 pixels with strips at offset 8
pub fn tiff(exif: &ExifData) -> Vec<u8> {
    let order = ByteOrder::LittleEndian;
    let mut base = order.marker().to_vec();
    base.extend_from_slice(&order.u16_bytes(42));
    base.extend_from_slice(&[0; 4]);
    base.extend_from_slice(TIFF_PIXELS);

    let entry = |key: &str, value: Value| Datum::new(key.parse().unwrap(), &value, order).unwrap();
    let structure = [
        entry("Exif.Image.ImageWidth", Value::Short(vec![2])),
        entry("Exif.Image.ImageLength", Value::Short(vec![2])),
        entry("Exif.Image.StripOffsets", Value::Long(vec![8])),
        entry("Exif.Image.StripByteCounts", Value::Long(vec![4])),
    ];

    let mut exif = exif.clone();
    exif.set_byte_order(order);
    exif.encode_into(base, &structure, 0).unwrap()
}

/// Smallest JPEG with a frame header
pub fn thumbnail(width: u16, height: u16) -> Vec<u8> {
    jpeg_sized(width, height, &[])
}

pub fn read(data: Vec<u8>) -> Image {
    let mut image = Image::from_bytes(data).unwrap();
    image.read_metadata().unwrap();
    image
}

/// Writes and opens a new session on the result
pub fn reread(mut image: Image) -> Image {
    image.write_metadata().unwrap();
    read(image.into_inner())
}
