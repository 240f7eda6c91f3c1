#![allow(dead_code)]

pub use imgmeta_common::image::RawMetadata;
pub use imgmeta_common::prelude::*;
pub use imgmeta_jpeg::*;

/// Entropy-coded data with a stuffed byte and a restart marker
pub const SCAN: &[u8] = &[0x12, 0xFF, 0x00, 0x34, 0xFF, 0xD0, 0x56, 0xFF, 0xD9];

pub fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0xFF, marker];
    data.extend_from_slice(&(payload.len() as u16 + 2).to_be_bytes());
    data.extend_from_slice(payload);
    data
}

pub fn jfif() -> Vec<u8> {
    segment(0xE0, b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0")
}

pub fn sof(width: u16, height: u16) -> Vec<u8> {
    let mut payload = vec![8];
    payload.extend_from_slice(&height.to_be_bytes());
    payload.extend_from_slice(&width.to_be_bytes());
    payload.extend_from_slice(&[1, 1, 0x11, 0]);
    segment(0xC0, &payload)
}

pub fn sos() -> Vec<u8> {
    segment(0xDA, &[1, 1, 0, 0, 0x3F, 0])
}

pub fn app1(identifier: &[u8], payload: &[u8]) -> Vec<u8> {
    segment(0xE1, &[identifier, payload].concat())
}

pub fn app13(resources: &[u8]) -> Vec<u8> {
    segment(0xED, &[b"Photoshop 3.0\0".as_slice(), resources].concat())
}

/// 8BIM resource with empty name
pub fn resource(id: u16, data: &[u8]) -> Vec<u8> {
    let mut res = b"8BIM".to_vec();
    res.extend_from_slice(&id.to_be_bytes());
    res.extend_from_slice(&[0, 0]);
    res.extend_from_slice(&(data.len() as u32).to_be_bytes());
    res.extend_from_slice(data);
    if data.len() % 2 == 1 {
        res.push(0);
    }
    res
}

/// JPEG from SOI, the given segments, a frame header, scan header and scan
pub fn jpeg(segments: &[Vec<u8>]) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    for segment in segments {
        data.extend_from_slice(segment);
    }
    data.extend(sof(640, 480));
    data.extend(sos());
    data.extend_from_slice(SCAN);
    data
}

pub fn markers(jpeg: &Jpeg) -> Vec<Marker> {
    jpeg.segments().iter().map(|x| x.marker()).collect()
}
