use std::io::{Cursor, Seek};

use crate::math::*;

/// Big endian reading helpers for container and segment parsers
pub trait ReadExt: std::io::BufRead + std::io::Seek {
    fn read_array<const T: usize>(&mut self) -> Result<[u8; T], ReadError> {
        let buf = &mut [0; T];
        self.read_exact(buf)?;
        Ok(*buf)
    }

    fn read_byte(&mut self) -> Result<u8, ReadError> {
        Ok(self.read_array::<1>()?[0])
    }

    fn read_be_u16(&mut self) -> Result<u16, ReadError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    fn read_be_u32(&mut self) -> Result<u32, ReadError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Skips `n` bytes, failing if that would leave the data
    fn skip(&mut self, n: u64) -> Result<(), ReadError> {
        let pos = self.stream_position()?;
        let end = self.seek(std::io::SeekFrom::End(0))?;
        let target = pos.safe_add(n)?;
        if target > end {
            return Err(ReadError::Io(std::io::ErrorKind::UnexpectedEof.into()));
        }
        self.seek(std::io::SeekFrom::Start(target))?;
        Ok(())
    }
}

impl<T: AsRef<[u8]>> ReadExt for Cursor<T> {}

pub trait SliceExt<'a>: std::io::BufRead + std::io::Seek {
    fn slice(&mut self, len: usize) -> Result<&'a [u8], ReadError>;
    fn slice_until(&mut self, byte: u8) -> Result<&'a [u8], ReadError>;
    fn slice_to_end(&mut self) -> Result<&'a [u8], ReadError>;
}

impl<'a> SliceExt<'a> for Cursor<&'a [u8]> {
    /// Read `len` bytes and return them as slice
    ///
    /// ```
    /// # use std::io::Cursor;
    /// # use imgmeta_common::read::*;
    /// let mut s = Cursor::new(b"8BIM\x04\x04".as_slice());
    /// assert_eq!(s.slice(4).unwrap(), b"8BIM");
    /// assert!(s.slice(3).is_err());
    /// ```
    fn slice(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        let start = self.position().usize()?;
        let end = start.safe_add(len)?;
        let data: &'a [u8] = *self.get_ref();
        let slice = data.get(start..end).ok_or(ReadError::EndOfData)?;
        self.set_position(end.u64()?);
        Ok(slice)
    }

    /// Read until `byte` and return as slice
    ///
    /// ```
    /// # use std::io::Cursor;
    /// # use imgmeta_common::read::*;
    /// let mut s = Cursor::new(b"XML:com.adobe.xmp\0\0\0".as_slice());
    /// assert_eq!(s.slice_until(b'\0').unwrap(), b"XML:com.adobe.xmp");
    /// ```
    fn slice_until(&mut self, byte: u8) -> Result<&'a [u8], ReadError> {
        let start = self.position().usize()?;
        let data: &'a [u8] = *self.get_ref();
        let rest = data.get(start..).ok_or(ReadError::EndOfData)?;
        let len = rest.iter().take_while(|x| **x != byte).count();
        if len == rest.len() {
            return Err(ReadError::EndOfData);
        }

        self.set_position(start.safe_add(len)?.safe_add(1)?.u64()?);

        rest.get(..len).ok_or(ReadError::EndOfData)
    }

    /// Read until end and return as slice
    fn slice_to_end(&mut self) -> Result<&'a [u8], ReadError> {
        let start = self.position().usize()?;
        let data: &'a [u8] = *self.get_ref();
        let rest = data.get(start..).ok_or(ReadError::EndOfData)?;

        self.seek(std::io::SeekFrom::End(0))?;

        Ok(rest)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unexpected end of data")]
    EndOfData,
}
