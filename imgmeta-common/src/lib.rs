//! Keys, tag registry and value types shared by the imgmeta crates

pub mod datetime;
pub mod error;
pub mod exif;
pub mod geography;
pub mod image;
pub mod iptc;
pub mod key;
pub mod math;
pub mod orientation;
pub mod rational;
pub mod read;
pub mod registry;
pub mod utils;
pub mod xmp;

pub use registry::exif::field;

pub mod prelude {
    pub use super::image::{ImageFormat, ImageMetadata};
}
