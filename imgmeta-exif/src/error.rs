use imgmeta_common::error::TagError;
use imgmeta_common::exif::{Ifd, Type};
use imgmeta_common::math::MathError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Unknown byte order marker {0:x?}")]
    UnknownByteOrder([u8; 2]),
    #[error("Expected magic number 42, found {0}")]
    MagicBytesWrong(u16),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Unexpected end of data while reading the byte order")]
    ByteOrderEof,
    #[error("Unexpected end of data while reading the magic number")]
    MagicBytesEof,
    #[error("Unexpected end of data while reading the number of entries in IFD {0:?}")]
    IfdNumEntriesEof(Ifd),
    #[error("Unexpected end of data while reading an IFD entry")]
    EntryEof,
    #[error("Value of entry is outside of the data")]
    LookupEof,
    #[error("Data size for {count} values of type {type_:?} is too large")]
    DataSizeTooLarge { type_: Type, count: u32 },
    #[error("Offset does not fit into the Exif structure")]
    OffsetTooLarge,
    #[error("Byte order of existing data does not match")]
    ByteOrderMismatch,
    #[error("Tag: {0}")]
    Tag(#[from] TagError),
}

pub(crate) trait ResultExt<T> {
    fn e(self, err: Error) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E> {
    fn e(self, err: Error) -> Result<T> {
        self.map_err(|_| err)
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn e(self, err: Error) -> Result<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(err),
        }
    }
}
