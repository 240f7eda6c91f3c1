#![allow(dead_code)]

use imgmeta_common::iptc::DataSet;

pub fn key(s: &str) -> DataSet {
    s.parse().unwrap()
}

/// Dataset with standard length field
pub fn dataset(record: u8, number: u8, value: &[u8]) -> Vec<u8> {
    let mut data = vec![0x1C, record, number];
    data.extend_from_slice(&u16::try_from(value.len()).unwrap().to_be_bytes());
    data.extend_from_slice(value);
    data
}

/// Image resource with empty name
pub fn resource(id: u16, data: &[u8]) -> Vec<u8> {
    let mut out = b"8BIM".to_vec();
    out.extend_from_slice(&id.to_be_bytes());
    out.extend_from_slice(&[0, 0]);
    out.extend_from_slice(&u32::try_from(data.len()).unwrap().to_be_bytes());
    out.extend_from_slice(data);
    if data.len() % 2 == 1 {
        out.push(0);
    }
    out
}

/// Record version, a caption and two keywords
pub fn sample_iim() -> Vec<u8> {
    [
        dataset(2, 0, &[0, 4]),
        dataset(2, 120, b"A caption"),
        dataset(2, 25, b"sea"),
        dataset(2, 25, b"sky"),
    ]
    .concat()
}
