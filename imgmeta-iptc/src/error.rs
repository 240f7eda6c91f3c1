use imgmeta_common::error::TagError;
use imgmeta_common::math::MathError;
use imgmeta_common::read::ReadError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("Dataset {record}:{number} exceeds the available data")]
    DataSetEof { record: u8, number: u8 },
    #[error("Extended dataset length of {0} bytes is not supported")]
    ExtendedLength(u16),
    #[error("Value of {0} bytes is too large for a dataset")]
    DataSetTooLarge(usize),
    #[error("Image resource is missing its '8BIM' signature")]
    ResourceSignature,
    #[error("Image resource {0:#06x} exceeds the available data")]
    ResourceEof(u16),
    #[error("Image resource of {0} bytes is too large")]
    ResourceTooLarge(usize),
    #[error("Tag: {0}")]
    Tag(#[from] TagError),
}
