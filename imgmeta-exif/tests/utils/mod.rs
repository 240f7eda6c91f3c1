#![allow(dead_code)]

pub use imgmeta_common::exif::{ByteOrder, Ifd, Tag, TagIfd, Type};
pub use imgmeta_exif::*;

/// Writes TIFF structures entry by entry
pub struct TiffBuilder {
    pub order: ByteOrder,
    pub buf: Vec<u8>,
}

pub struct Written {
    pub offset: u32,
    /// Position of the value field of each entry, in entry order
    pub value_positions: Vec<usize>,
    pub next_position: usize,
}

impl TiffBuilder {
    pub fn new(order: ByteOrder) -> Self {
        let mut buf = order.marker().to_vec();
        buf.extend_from_slice(&order.u16_bytes(42));
        buf.extend_from_slice(&order.u32_bytes(8));
        Self { order, buf }
    }

    pub fn short(&self, v: u16) -> Vec<u8> {
        self.order.u16_bytes(v).to_vec()
    }

    pub fn long(&self, v: u32) -> Vec<u8> {
        self.order.u32_bytes(v).to_vec()
    }

    pub fn rational(&self, n: u32, d: u32) -> Vec<u8> {
        let mut data = self.long(n);
        data.extend(self.long(d));
        data
    }

    /// Writes an IFD at the end, values longer than four bytes follow it
    pub fn ifd(&mut self, entries: &[(u16, Type, u32, Vec<u8>)]) -> Written {
        if self.buf.len() % 2 == 1 {
            self.buf.push(0);
        }
        let offset = self.buf.len() as u32;
        let mut data_pos = offset as usize + 2 + entries.len() * 12 + 4;
        let mut out_of_line = Vec::new();
        let mut value_positions = Vec::new();

        self.buf
            .extend_from_slice(&self.order.u16_bytes(entries.len() as u16));
        for (tag, type_, count, data) in entries {
            self.buf.extend_from_slice(&self.order.u16_bytes(*tag));
            self.buf.extend_from_slice(&self.order.u16_bytes(type_.u16()));
            self.buf.extend_from_slice(&self.order.u32_bytes(*count));
            value_positions.push(self.buf.len());
            if data.len() <= 4 {
                let mut value = data.clone();
                value.resize(4, 0);
                self.buf.extend_from_slice(&value);
            } else {
                self.buf
                    .extend_from_slice(&self.order.u32_bytes(data_pos as u32));
                data_pos += data.len() + data.len() % 2;
                out_of_line.push(data.clone());
            }
        }
        let next_position = self.buf.len();
        self.buf.extend_from_slice(&[0; 4]);

        for data in out_of_line {
            self.buf.extend_from_slice(&data);
            if data.len() % 2 == 1 {
                self.buf.push(0);
            }
        }

        Written {
            offset,
            value_positions,
            next_position,
        }
    }

    /// Appends raw data and returns its offset
    pub fn blob(&mut self, data: &[u8]) -> u32 {
        let offset = self.buf.len() as u32;
        self.buf.extend_from_slice(data);
        offset
    }

    pub fn patch(&mut self, pos: usize, value: u32) {
        let bytes = self.order.u32_bytes(value);
        self.buf[pos..pos + 4].copy_from_slice(&bytes);
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

pub fn key(s: &str) -> TagIfd {
    s.parse().unwrap()
}

/// IFD0 with make, orientation and a pointer to an Exif IFD with exposure
/// time and user comment
pub fn camera_exif(order: ByteOrder) -> Vec<u8> {
    let mut b = TiffBuilder::new(order);
    let orientation = b.short(6);
    let ifd0 = b.ifd(&[
        (0x010F, Type::Ascii, 5, b"Acme\0".to_vec()),
        (0x0110, Type::Ascii, 8, b"Model 1\0".to_vec()),
        (0x0112, Type::Short, 1, orientation),
        (0x8769, Type::Long, 1, vec![0; 4]),
    ]);

    let mut comment = b"ASCII\0\0\0".to_vec();
    comment.extend_from_slice(b"Hello");
    let exposure = b.rational(1, 60);
    let f_number = b.rational(28, 10);
    let exif_ifd = b.ifd(&[
        (0x829A, Type::Rational, 1, exposure),
        (0x829D, Type::Rational, 1, f_number),
        (0x9000, Type::Undefined, 4, b"0230".to_vec()),
        (0x9286, Type::Undefined, comment.len() as u32, comment),
    ]);

    b.patch(ifd0.value_positions[3], exif_ifd.offset);
    b.finish()
}
