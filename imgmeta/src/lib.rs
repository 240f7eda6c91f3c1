//! Read and write EXIF, IPTC and XMP metadata of JPEG, PNG and TIFF images
//!
//! ```no_run
//! use imgmeta::{Image, MetadataTag};
//!
//! let mut image = Image::open("photo.jpg")?;
//! image.read_metadata()?;
//!
//! for key in image.exif_keys()? {
//!     let tag = image.exif_tag(&key)?;
//!     println!("{}: {}", tag.label(), tag.human_value);
//! }
//!
//! image.set_iptc_tag_values("Iptc.Application2.Keywords", &["sea", "sky"])?;
//! image.write_metadata()?;
//! # Ok::<(), imgmeta::Error>(())
//! ```

mod container;
mod error;
mod image;
mod preview;
mod tag;

pub use container::Container;
pub use error::{CodecError, Error, Result};
pub use image::{CopyOptions, Image, Origin};
pub use imgmeta_common::geography::Location;
pub use imgmeta_common::key::Key;
pub use imgmeta_common::registry::{Standard, TagInfo};
pub use preview::Preview;
pub use tag::{ExifTag, IptcTag, MetadataTag, Tag, XmpTag};

pub use imgmeta_exif as exif;
pub use imgmeta_iptc as iptc;
#[cfg(feature = "jpeg")]
pub use imgmeta_jpeg as jpeg;
#[cfg(feature = "png")]
pub use imgmeta_png as png;
#[cfg(feature = "tiff")]
pub use imgmeta_tiff as tiff;
pub use imgmeta_xmp as xmp;

static_assertions::assert_impl_all!(Image: Send, Sync);
static_assertions::assert_impl_all!(Error: Send, Sync);

/// Version of the tag registry as `(major, minor, patch)`
pub fn version() -> (u16, u16, u16) {
    imgmeta_common::registry::VERSION
}

/// Registry information on a key of any standard
///
/// ```
/// let info = imgmeta::tag_info("Exif.Image.Make").unwrap();
/// assert_eq!(info.label, "Manufacturer");
/// ```
pub fn tag_info(key: &str) -> Result<TagInfo> {
    let key: Key = key.parse()?;
    let info = imgmeta_common::registry::lookup(key.standard(), &key.to_string())?;

    Ok(info)
}
