//! PNG chunk structure
//!
//! Exif is read from `eXIf` or, as fallback, from the legacy text chunk
//! written by ImageMagick. XMP is read from the `iTXt` chunk with keyword
//! `XML:com.adobe.xmp`.

mod chunk;
mod chunk_type;
mod error;
mod png;

pub use chunk::*;
pub use chunk_type::*;
pub use error::*;
pub use png::*;
