//! Interfaces shared by the container crates

pub trait ImageFormat {
    /// Usually checks if data start with correct magic bytes
    fn is_filetype(data: &[u8]) -> bool;

    fn mime_type() -> &'static str;
}

/// Read access to the metadata blocks of a container
pub trait ImageMetadata {
    /// TIFF structure starting with the byte order marker
    fn exif(&self) -> Option<Vec<u8>> {
        None
    }

    /// XMP packet
    fn xmp(&self) -> Option<Vec<u8>> {
        None
    }

    /// IPTC-IIM dataset stream
    fn iptc(&self) -> Option<Vec<u8>> {
        None
    }

    /// Width and height in pixels
    fn dimensions(&self) -> Option<(u32, u32)> {
        None
    }
}

/// Encoded metadata blocks handed to a container for writing
///
/// `None` removes the respective block from the container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMetadata {
    pub exif: Option<Vec<u8>>,
    pub iptc: Option<Vec<u8>>,
    pub xmp: Option<Vec<u8>>,
}
