//! Static tables describing known tags
//!
//! The tables are indexed lazily on first use and never change afterward.

mod macros;

pub mod exif;
pub mod iptc;
pub mod xmp;

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub use exif::{ExifTagInfo, Print, TextEncoding, EXIF_TAGS};
pub use iptc::{IptcDataSetInfo, IPTC_DATASETS};
pub use xmp::{XmpPropertyInfo, NAMESPACES, XMP_PROPERTIES};

use crate::error::TagError;
use crate::exif::{Ifd, Tag, TagIfd};
use crate::iptc::{record_info, DataSet};
use crate::key::{ExifKey, IptcKey, XmpKey};
use crate::xmp::Namespace;

/// Version of the tables as `(major, minor, patch)`
pub const VERSION: (u16, u16, u16) = (0, 3, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Standard {
    Exif,
    Iptc,
    Xmp,
}

impl Standard {
    pub fn name(self) -> &'static str {
        match self {
            Self::Exif => "Exif",
            Self::Iptc => "Iptc",
            Self::Xmp => "Xmp",
        }
    }
}

/// Registry information on a tag, independent of the standard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub standard: Standard,
    pub name: String,
    pub label: String,
    pub description: String,
    /// Declared type, see [`crate::exif::Type::name`],
    /// [`crate::iptc::IptcType::name`] and [`crate::xmp::XmpType::name`]
    pub type_name: String,
    /// Always `false` for Exif and XMP
    pub repeatable: bool,
    pub group_name: String,
    pub group_description: String,
}

static EXIF_BY_TAG: Lazy<HashMap<TagIfd, &'static ExifTagInfo>> = Lazy::new(|| {
    EXIF_TAGS
        .iter()
        .map(|x| (TagIfd::new(x.tag, x.ifd), x))
        .collect()
});

type ByName<T> = HashMap<&'static str, &'static T>;

static EXIF_BY_NAME: Lazy<HashMap<Ifd, ByName<ExifTagInfo>>> = Lazy::new(|| {
    let mut map: HashMap<Ifd, ByName<ExifTagInfo>> = HashMap::new();
    for x in EXIF_TAGS {
        map.entry(x.ifd).or_default().insert(x.name, x);
    }
    map
});

static IPTC_BY_DATASET: Lazy<HashMap<DataSet, &'static IptcDataSetInfo>> =
    Lazy::new(|| IPTC_DATASETS.iter().map(|x| (x.dataset, x)).collect());

static IPTC_BY_NAME: Lazy<HashMap<u8, ByName<IptcDataSetInfo>>> = Lazy::new(|| {
    let mut map: HashMap<u8, ByName<IptcDataSetInfo>> = HashMap::new();
    for x in IPTC_DATASETS {
        map.entry(x.dataset.record).or_default().insert(x.name, x);
    }
    map
});

static XMP_BY_NAME: Lazy<HashMap<&'static str, ByName<XmpPropertyInfo>>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, ByName<XmpPropertyInfo>> = HashMap::new();
    for x in XMP_PROPERTIES {
        map.entry(x.prefix).or_default().insert(x.name, x);
    }
    map
});

static NAMESPACE_BY_PREFIX: Lazy<HashMap<&'static str, &'static Namespace>> =
    Lazy::new(|| NAMESPACES.iter().map(|x| (x.prefix, x)).collect());

static NAMESPACE_BY_URI: Lazy<HashMap<&'static str, &'static Namespace>> =
    Lazy::new(|| NAMESPACES.iter().map(|x| (x.uri, x)).collect());

pub fn exif_tag(tag: TagIfd) -> Option<&'static ExifTagInfo> {
    EXIF_BY_TAG.get(&tag).copied()
}

pub fn exif_tag_by_name(ifd: Ifd, name: &str) -> Option<&'static ExifTagInfo> {
    EXIF_BY_NAME.get(&ifd)?.get(name).copied()
}

pub fn iptc_dataset(dataset: DataSet) -> Option<&'static IptcDataSetInfo> {
    IPTC_BY_DATASET.get(&dataset).copied()
}

pub fn iptc_dataset_by_name(record: u8, name: &str) -> Option<&'static IptcDataSetInfo> {
    IPTC_BY_NAME.get(&record)?.get(name).copied()
}

pub fn xmp_property(prefix: &str, name: &str) -> Option<&'static XmpPropertyInfo> {
    XMP_BY_NAME.get(prefix)?.get(name).copied()
}

pub fn namespace_by_prefix(prefix: &str) -> Option<&'static Namespace> {
    NAMESPACE_BY_PREFIX.get(prefix).copied()
}

pub fn namespace_by_uri(uri: &str) -> Option<&'static Namespace> {
    NAMESPACE_BY_URI.get(uri).copied()
}

/// Looks up the registry entry for a key in its canonical string form
///
/// Unknown but well formed Exif and IPTC keys yield an `Undefined` entry.
/// XMP keys need a registered namespace prefix.
///
/// ```
/// # use imgmeta_common::registry::*;
/// let info = lookup(Standard::Iptc, "Iptc.Application2.Keywords").unwrap();
/// assert!(info.repeatable);
/// assert_eq!(info.group_name, "Application2");
/// ```
pub fn lookup(standard: Standard, key: &str) -> Result<TagInfo, TagError> {
    match standard {
        Standard::Exif => Ok(exif_info(key.parse()?)),
        Standard::Iptc => Ok(iptc_info(key.parse()?)),
        Standard::Xmp => {
            let key: XmpKey = key.parse()?;
            if namespace_by_prefix(&key.prefix).is_none() {
                return Err(TagError::UnknownNamespacePrefix(key.prefix));
            }
            Ok(xmp_info(&key))
        }
    }
}

pub fn exif_info(key: ExifKey) -> TagInfo {
    let ifd = key.ifd;
    let (name, label, description, type_name) = match exif_tag(key) {
        Some(info) => (
            info.name.to_string(),
            info.label.to_string(),
            info.description.to_string(),
            info.type_.name(),
        ),
        None => (
            crate::key::unknown_name(key.tag.0),
            String::new(),
            String::new(),
            crate::exif::Type::Undefined.name(),
        ),
    };

    TagInfo {
        standard: Standard::Exif,
        name,
        label,
        description,
        type_name: type_name.to_string(),
        repeatable: false,
        group_name: ifd.group_name().to_string(),
        group_description: ifd.group_description().to_string(),
    }
}

pub fn iptc_info(key: IptcKey) -> TagInfo {
    let (group_name, group_description) = record_info(key.record)
        .map(|x| (x.name.to_string(), x.description.to_string()))
        .unwrap_or_else(|| (crate::key::unknown_name(key.record.into()), String::new()));

    let (name, label, description, type_name, repeatable) = match iptc_dataset(key) {
        Some(info) => (
            info.name.to_string(),
            info.title.to_string(),
            info.description.to_string(),
            info.type_.name(),
            info.repeatable,
        ),
        None => (
            crate::key::unknown_name(key.number.into()),
            String::new(),
            String::new(),
            crate::iptc::IptcType::Undefined.name(),
            true,
        ),
    };

    TagInfo {
        standard: Standard::Iptc,
        name,
        label,
        description,
        type_name: type_name.to_string(),
        repeatable,
        group_name,
        group_description,
    }
}

/// Registry entry of an XMP key, unknown properties are `Undefined`
pub fn xmp_info(key: &XmpKey) -> TagInfo {
    let (label, description, type_name) = match xmp_property(&key.prefix, &key.property) {
        Some(info) => (
            info.title.to_string(),
            info.description.to_string(),
            info.type_.name(),
        ),
        None => (
            String::new(),
            String::new(),
            crate::xmp::XmpType::Undefined.name(),
        ),
    };

    let group_description = namespace_by_prefix(&key.prefix)
        .map(|x| x.description.to_string())
        .unwrap_or_default();

    TagInfo {
        standard: Standard::Xmp,
        name: key.property.clone(),
        label,
        description,
        type_name,
        repeatable: false,
        group_name: key.prefix.clone(),
        group_description,
    }
}

/// Declared type of an Exif tag, `Undefined` for unknown tags
pub fn exif_type(key: TagIfd) -> crate::exif::Type {
    exif_tag(key)
        .map(|x| x.type_)
        .unwrap_or(crate::exif::Type::Undefined)
}

/// Whether the pointer tag is managed by the IFD encoder
pub fn is_pointer(tag: Tag, ifd: Ifd) -> bool {
    tag.exif_specific_ifd(ifd).is_some()
}
