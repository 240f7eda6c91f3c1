//! EXIF store with IFD decoder and encoder
//!
//! ```
//! # use imgmeta_exif::ExifData;
//! let mut exif = ExifData::new();
//! exif.set_raw_value("Exif.Image.Make".parse().unwrap(), "Acme").unwrap();
//!
//! let data = exif.encode().unwrap();
//! let exif = ExifData::decode(&data).unwrap();
//! assert_eq!(exif.make().as_deref(), Some("Acme"));
//! ```

mod data;
pub mod decode;
mod encode;
pub mod error;
pub mod print;
pub mod text;
mod value;

pub use data::{Datum, ExifData};
pub use decode::{DecodeOptions, Decoded, Decoder};
pub use error::{Error, Result};
pub use imgmeta_common::field;
pub use value::{Encoded, Value};
