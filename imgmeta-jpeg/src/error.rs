use imgmeta_common::math::MathError;
use imgmeta_common::read::ReadError;

use crate::Marker;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Data do not start with a start of image marker")]
    NoStartOfImage,
    #[error("Expected a marker at position {0}")]
    MarkerExpected(usize),
    #[error("Unexpected end of data in segment {0:?}")]
    SegmentEof(Marker),
    #[error("Invalid length {1} of segment {0:?}")]
    SegmentLength(Marker, u16),
    #[error("Segment {0:?} with {1} bytes of payload exceeds the segment size limit")]
    SegmentTooLarge(Marker, usize),
    #[error("No frame header found")]
    NoFrameHeader,
    #[error("No start of scan before the end of data")]
    NoStartOfScan,
    #[error("Unexpected end of data")]
    UnexpectedEof,
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("Image resources: {0}")]
    Iptc(#[from] imgmeta_iptc::Error),
}
