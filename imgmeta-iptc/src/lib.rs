//! IPTC-IIM datasets, Photoshop image resources and the IPTC store
//!
//! ```
//! # use imgmeta_iptc::IptcData;
//! let mut iptc = IptcData::new();
//! let keywords = "Iptc.Application2.Keywords".parse().unwrap();
//! iptc.set_raw_values(keywords, &["sea", "sky"]).unwrap();
//!
//! let iptc = IptcData::decode(&iptc.encode().unwrap()).unwrap();
//! assert_eq!(iptc.keywords(), ["sea", "sky"]);
//! ```

mod data;
pub mod error;
pub mod iim;
pub mod irb;
mod value;

pub use data::{Datum, IptcData};
pub use error::{Error, Result};
pub use value::Value;
