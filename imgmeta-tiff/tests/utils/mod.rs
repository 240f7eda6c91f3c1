#![allow(dead_code)]

pub use imgmeta_common::exif::{ByteOrder, Ifd, TagIfd, Type};
pub use imgmeta_common::prelude::*;
pub use imgmeta_exif::ExifData;
pub use imgmeta_tiff::*;

pub const PIXELS: &[u8] = b"PIXL";
pub const XMP: &[u8] = b"<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"/>";
pub const IPTC: &[u8] = &[0x1C, 2, 0, 0, 2, 0, 4];

pub struct Sample {
    pub data: Vec<u8>,
    pub ifd0: u32,
    pub page2: u32,
}

/// Two page TIFF with strips at offset 8
pub fn sample(order: ByteOrder) -> Sample {
    let short = |v: u16| order.u16_bytes(v).to_vec();
    let long = |v: u32| order.u32_bytes(v).to_vec();

    let mut data = order.marker().to_vec();
    data.extend_from_slice(&order.u16_bytes(42));
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(PIXELS);

    let ifd0 = ifd(
        order,
        &mut data,
        &[
            (0x0100, Type::Short, 1, short(2)),
            (0x0101, Type::Short, 1, short(2)),
            (0x010F, Type::Ascii, 5, b"Acme\0".to_vec()),
            (0x0111, Type::Long, 1, long(8)),
            (0x0117, Type::Long, 1, long(4)),
            (0x02BC, Type::Byte, XMP.len() as u32, XMP.to_vec()),
            (0x83BB, Type::Undefined, IPTC.len() as u32, IPTC.to_vec()),
        ],
    );
    let page2 = ifd(order, &mut data, &[(0x0100, Type::Short, 1, short(1))]);

    data[4..8].copy_from_slice(&order.u32_bytes(ifd0.0));
    data[ifd0.1..ifd0.1 + 4].copy_from_slice(&order.u32_bytes(page2.0));

    Sample {
        data,
        ifd0: ifd0.0,
        page2: page2.0,
    }
}

/// Writes an IFD and its out-of-line values, returns its offset and the
/// position of its next IFD field
fn ifd(order: ByteOrder, buf: &mut Vec<u8>, entries: &[(u16, Type, u32, Vec<u8>)]) -> (u32, usize) {
    if buf.len() % 2 == 1 {
        buf.push(0);
    }
    let offset = buf.len();
    let mut data_pos = offset + 2 + entries.len() * 12 + 4;
    let mut out_of_line = Vec::new();

    buf.extend_from_slice(&order.u16_bytes(entries.len() as u16));
    for (tag, type_, count, data) in entries {
        buf.extend_from_slice(&order.u16_bytes(*tag));
        buf.extend_from_slice(&order.u16_bytes(type_.u16()));
        buf.extend_from_slice(&order.u32_bytes(*count));
        if data.len() <= 4 {
            let mut value = data.clone();
            value.resize(4, 0);
            buf.extend_from_slice(&value);
        } else {
            buf.extend_from_slice(&order.u32_bytes(data_pos as u32));
            data_pos += data.len() + data.len() % 2;
            out_of_line.push(data.clone());
        }
    }
    let next_position = buf.len();
    buf.extend_from_slice(&[0; 4]);

    for data in out_of_line {
        buf.extend_from_slice(&data);
        if data.len() % 2 == 1 {
            buf.push(0);
        }
    }

    (offset as u32, next_position)
}

pub fn key(s: &str) -> TagIfd {
    s.parse().unwrap()
}
