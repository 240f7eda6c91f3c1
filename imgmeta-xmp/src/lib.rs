//! Reading and editing of XMP packets
//!
//! ```
//! # use imgmeta_xmp::XmpData;
//! let mut xmp = XmpData::new();
//! xmp.set_text("Xmp.dc.title".parse().unwrap(), "Sunset").unwrap();
//!
//! let xmp = XmpData::decode(&xmp.encode().unwrap()).unwrap();
//! assert_eq!(xmp.title().as_deref(), Some("Sunset"));
//! ```

mod data;
pub mod error;
mod packet;
mod tree;
mod value;

pub use data::{Datum, XmpData};
pub use error::{Error, Result};
pub use value::{check, check_scalar, ArrayKind, XmpValue, X_DEFAULT};
