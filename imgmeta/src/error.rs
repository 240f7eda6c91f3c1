use imgmeta_common::error::TagError;
use imgmeta_common::registry::Standard;

use crate::Origin;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of image sessions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Metadata have not been read")]
    MetadataNotRead,
    #[error("Key '{0}' not found")]
    KeyNotFound(String),
    #[error("Invalid key '{0}'")]
    InvalidKey(String),
    #[error("Tag '{0}' is not repeatable")]
    NonRepeatableTag(String),
    #[error("Unknown namespace prefix '{0}'")]
    UnknownNamespacePrefix(String),
    #[error("Failed to decode value of '{key}': {reason}")]
    ValueDecode {
        key: String,
        raw: Vec<u8>,
        reason: String,
    },
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
    #[error("Unknown container type")]
    UnknownContainerType,
    #[error("{} metadata cannot be stored in {mime_type} images", .standard.name())]
    UnsupportedMetadataForFormat {
        standard: Standard,
        mime_type: &'static str,
    },
    #[error("Cannot open {origin}: {source}")]
    CannotOpen {
        origin: Origin,
        #[source]
        source: CodecError,
    },
    #[error("Reading metadata from {origin} failed: {source}")]
    ReadFailed {
        origin: Origin,
        #[source]
        source: CodecError,
    },
    #[error("Writing to {origin} failed: {source}")]
    WriteFailed {
        origin: Origin,
        #[source]
        source: CodecError,
    },
    #[error("Preview {index} requested, but there are only {len} previews")]
    PreviewOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Replaces the origin of I/O failures
    pub(crate) fn at(self, origin: &Origin) -> Self {
        match self {
            Self::CannotOpen { source, .. } => Self::CannotOpen {
                origin: origin.clone(),
                source,
            },
            Self::ReadFailed { source, .. } => Self::ReadFailed {
                origin: origin.clone(),
                source,
            },
            Self::WriteFailed { source, .. } => Self::WriteFailed {
                origin: origin.clone(),
                source,
            },
            err => err,
        }
    }
}

impl From<TagError> for Error {
    fn from(err: TagError) -> Self {
        match err {
            TagError::InvalidKey(key) => Self::InvalidKey(key),
            TagError::KeyNotFound(key) => Self::KeyNotFound(key),
            TagError::NonRepeatableTag(key) => Self::NonRepeatableTag(key),
            TagError::UnknownNamespacePrefix(prefix) => Self::UnknownNamespacePrefix(prefix),
            TagError::ValueDecode { key, raw, reason } => Self::ValueDecode { key, raw, reason },
            TagError::InvalidValue { key, reason } => Self::InvalidValue { key, reason },
            err => Self::InvalidValue {
                key: String::new(),
                reason: err.to_string(),
            },
        }
    }
}

/// Underlying failure of the container and metadata codecs
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "jpeg")]
    #[error("JPEG: {0}")]
    Jpeg(#[from] imgmeta_jpeg::Error),
    #[cfg(feature = "png")]
    #[error("PNG: {0}")]
    Png(#[from] imgmeta_png::Error),
    #[cfg(feature = "tiff")]
    #[error("TIFF: {0}")]
    Tiff(#[from] imgmeta_tiff::Error),
    #[error("Exif: {0}")]
    Exif(#[from] imgmeta_exif::Error),
    #[error("IPTC: {0}")]
    Iptc(#[from] imgmeta_iptc::Error),
    #[error("XMP: {0}")]
    Xmp(#[from] imgmeta_xmp::Error),
}
