use std::io::Cursor;

use imgmeta_common::read::ReadExt;

use crate::{Error, Marker};

/// Frame header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sof {
    /// Sample precision in bits
    pub precision: u8,
    /// Number of lines
    pub height: u16,
    /// Number of samples per line
    pub width: u16,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    pub id: u8,
    pub horizontal_sampling: u8,
    pub vertical_sampling: u8,
    /// Quantization table destination selector
    pub quantization_table: u8,
}

impl Sof {
    pub fn from_data(data: &[u8]) -> Result<Self, Error> {
        let eof = |_| Error::SegmentEof(Marker::SOF0);
        let mut cur = Cursor::new(data);

        let precision = cur.read_byte().map_err(eof)?;
        let height = cur.read_be_u16().map_err(eof)?;
        let width = cur.read_be_u16().map_err(eof)?;
        let n_components = cur.read_byte().map_err(eof)?;

        let mut components = Vec::with_capacity(n_components.into());
        for _ in 0..n_components {
            let [id, sampling, quantization_table] = cur.read_array().map_err(eof)?;
            components.push(Component {
                id,
                horizontal_sampling: sampling >> 4,
                vertical_sampling: sampling & 0x0F,
                quantization_table,
            });
        }

        Ok(Self {
            precision,
            height,
            width,
            components,
        })
    }
}
