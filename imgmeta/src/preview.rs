use std::path::{Path, PathBuf};

use crate::container::{Container, Metadata};
use crate::{CodecError, Error, Origin, Result};

/// Photoshop thumbnail resource
const PHOTOSHOP_THUMBNAIL: u16 = 0x040C;
/// Size of the header in front of the JFIF data of a thumbnail resource
const PHOTOSHOP_THUMBNAIL_HEADER: usize = 28;
/// Thumbnail format `kJpegRGB`
const PHOTOSHOP_THUMBNAIL_JPEG: u32 = 1;

/// Embedded image that is shown instead of the full image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    mime_type: &'static str,
    extension: &'static str,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Preview {
    fn jpeg(data: Vec<u8>, dimensions: Option<(u32, u32)>) -> Self {
        let (width, height) = dimensions.unwrap_or_default();
        Self {
            mime_type: "image/jpeg",
            extension: ".jpg",
            width,
            height,
            data,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// File extension including the leading dot
    pub fn extension(&self) -> &'static str {
        self.extension
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Width in pixels, zero if unknown
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels, zero if unknown
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Writes the preview to `path` with the extension appended
    ///
    /// Returns the path of the written file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let mut path = path.as_ref().as_os_str().to_owned();
        path.push(self.extension);
        let path = PathBuf::from(path);

        std::fs::write(&path, &self.data).map_err(|err| Error::WriteFailed {
            origin: Origin::File(path.clone()),
            source: CodecError::Io(err),
        })?;

        Ok(path)
    }
}

/// Previews sorted by increasing size
pub(crate) fn previews(container: &Container, metadata: &Metadata) -> Vec<Preview> {
    let mut previews = Vec::new();

    if let Some(thumbnail) = metadata.exif.thumbnail() {
        if thumbnail.starts_with(&[0xFF, 0xD8]) {
            previews.push(Preview::jpeg(thumbnail.to_vec(), jpeg_dimensions(thumbnail)));
        } else {
            tracing::info!("Exif thumbnail is not a JPEG image");
        }
    }

    previews.extend(photoshop_thumbnail(container));

    previews.sort_by_key(Preview::size);
    previews
}

#[cfg(feature = "jpeg")]
fn jpeg_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    use imgmeta_common::prelude::*;

    let jpeg = imgmeta_jpeg::Jpeg::new(data.to_vec()).ok()?;
    jpeg.dimensions()
}

#[cfg(not(feature = "jpeg"))]
fn jpeg_dimensions(_data: &[u8]) -> Option<(u32, u32)> {
    None
}

#[cfg(feature = "jpeg")]
fn photoshop_thumbnail(container: &Container) -> Option<Preview> {
    use imgmeta_iptc::irb;

    let Container::Jpeg(jpeg) = container else {
        return None;
    };

    let resources = match irb::decode(&jpeg.photoshop_data()?) {
        Ok(resources) => resources,
        Err(err) => {
            tracing::info!("Unreadable image resources: {err}");
            return None;
        }
    };
    let resource = resources.iter().find(|x| x.id == PHOTOSHOP_THUMBNAIL)?;

    let header = resource.data.get(..PHOTOSHOP_THUMBNAIL_HEADER)?;
    let field = |pos: usize| -> Option<u32> {
        let bytes = header.get(pos..pos.checked_add(4)?)?;
        Some(u32::from_be_bytes(bytes.try_into().ok()?))
    };

    if field(0)? != PHOTOSHOP_THUMBNAIL_JPEG {
        tracing::debug!("Skipping raw Photoshop thumbnail");
        return None;
    }

    let data = resource.data.get(PHOTOSHOP_THUMBNAIL_HEADER..)?.to_vec();
    Some(Preview::jpeg(data, field(4).zip(field(8))))
}

#[cfg(not(feature = "jpeg"))]
fn photoshop_thumbnail(_container: &Container) -> Option<Preview> {
    None
}
