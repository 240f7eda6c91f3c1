//! IPTC-IIM dataset stream
//!
//! Every dataset starts with the tag marker `0x1C`, followed by record number,
//! dataset number, a big endian length and the value. Lengths with the high
//! bit set announce an extended length of up to four bytes.

use std::io::Cursor;

use imgmeta_common::iptc::DataSet;
use imgmeta_common::math::*;
use imgmeta_common::read::{ReadExt, SliceExt};

use crate::error::{Error, Result};

pub const TAG_MARKER: u8 = 0x1C;

const EXTENDED: u16 = 0x8000;
const MAX_STANDARD_LEN: usize = 0x7FFF;

/// Reads all datasets in stream order
///
/// Reading stops at the first byte that is not a tag marker, which usually is
/// padding.
pub fn decode(data: &[u8]) -> Result<Vec<(DataSet, Vec<u8>)>> {
    let mut cursor = Cursor::new(data);
    let mut datasets = Vec::new();

    loop {
        let pos = cursor.position();
        let Ok(marker) = cursor.read_byte() else {
            break;
        };

        if marker != TAG_MARKER {
            if marker != 0 {
                tracing::info!("Stopping at unexpected byte {marker:#04x} at position {pos}");
            }
            break;
        }

        let record = cursor.read_byte()?;
        let number = cursor.read_byte()?;
        let len = read_len(&mut cursor)?;

        let value = cursor
            .slice(len)
            .map_err(|_| Error::DataSetEof { record, number })?;
        tracing::debug!("Dataset {record}:{number} with {len} bytes");

        datasets.push((DataSet::new(record, number), value.to_vec()));
    }

    Ok(datasets)
}

fn read_len(cursor: &mut Cursor<&[u8]>) -> Result<usize> {
    let len = cursor.read_be_u16()?;
    if len & EXTENDED == 0 {
        return Ok(len.into());
    }

    let n_bytes = len & !EXTENDED;
    if n_bytes > 4 {
        return Err(Error::ExtendedLength(n_bytes));
    }

    let mut len = 0_usize;
    for _ in 0..n_bytes {
        len = len.safe_mul(256)?.safe_add(cursor.read_byte()?.into())?;
    }

    Ok(len)
}

pub fn encode<'a>(datasets: impl IntoIterator<Item = (DataSet, &'a [u8])>) -> Result<Vec<u8>> {
    let mut data = Vec::new();

    for (dataset, value) in datasets {
        data.push(TAG_MARKER);
        data.push(dataset.record);
        data.push(dataset.number);

        if value.len() <= MAX_STANDARD_LEN {
            data.extend_from_slice(&value.len().u16()?.to_be_bytes());
        } else {
            let len = value
                .len()
                .u32()
                .map_err(|_| Error::DataSetTooLarge(value.len()))?;
            data.extend_from_slice(&(EXTENDED | 4).to_be_bytes());
            data.extend_from_slice(&len.to_be_bytes());
        }

        data.extend_from_slice(value);
    }

    Ok(data)
}
