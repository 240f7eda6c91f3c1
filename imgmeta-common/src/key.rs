//! Keys in their canonical string form
//!
//! - Exif: `Exif.<Group>.<Name>`, for example `Exif.Image.Make`
//! - IPTC: `Iptc.<Record>.<Dataset>`, for example `Iptc.Application2.Keywords`
//! - XMP: `Xmp.<prefix>.<Property>`, for example `Xmp.dc.title`
//!
//! Tags and datasets without registry entry use a hexadecimal name like
//! `Exif.Image.0xc7a1`.

use std::fmt;
use std::str::FromStr;

use crate::error::TagError;
use crate::exif::{Ifd, Tag, TagIfd};
use crate::iptc::{record_by_name, record_info, DataSet};
use crate::registry::{self, Standard};

pub type ExifKey = TagIfd;
pub type IptcKey = DataSet;

/// Key of an XMP property
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmpKey {
    pub prefix: String,
    pub property: String,
}

impl XmpKey {
    pub fn new(prefix: impl ToString, property: impl ToString) -> Self {
        Self {
            prefix: prefix.to_string(),
            property: property.to_string(),
        }
    }
}

/// Key of any of the three standards
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Exif(ExifKey),
    Iptc(IptcKey),
    Xmp(XmpKey),
}

impl Key {
    pub fn standard(&self) -> Standard {
        match self {
            Self::Exif(_) => Standard::Exif,
            Self::Iptc(_) => Standard::Iptc,
            Self::Xmp(_) => Standard::Xmp,
        }
    }
}

/// Name for tags that are not in the registry
pub fn unknown_name(number: u16) -> String {
    format!("0x{number:04x}")
}

fn parse_unknown_name(s: &str) -> Option<u16> {
    let hex = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
    if hex.is_empty() || hex.len() > 4 {
        return None;
    }
    u16::from_str_radix(hex, 16).ok()
}

/// Splits `<Standard>.<Group>.<Name>` and checks the standard
fn split_key<'a>(s: &'a str, standard: &str) -> Result<(&'a str, &'a str), TagError> {
    let invalid = || TagError::InvalidKey(s.to_string());

    let mut parts = s.splitn(3, '.');
    if parts.next() != Some(standard) {
        return Err(invalid());
    }
    let group = parts.next().filter(|x| !x.is_empty()).ok_or_else(invalid)?;
    let name = parts.next().filter(|x| !x.is_empty()).ok_or_else(invalid)?;

    Ok((group, name))
}

impl fmt::Display for TagIfd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let group = self.ifd.group_name();
        match registry::exif_tag(*self) {
            Some(info) => write!(f, "Exif.{group}.{}", info.name),
            None => write!(f, "Exif.{group}.{}", unknown_name(self.tag.0)),
        }
    }
}

impl FromStr for TagIfd {
    type Err = TagError;

    /// ```
    /// # use imgmeta_common::exif::*;
    /// let key: TagIfd = "Exif.Photo.FNumber".parse().unwrap();
    /// assert_eq!(key, TagIfd::new(Tag(0x829D), Ifd::Exif));
    /// assert_eq!(key.to_string(), "Exif.Photo.FNumber");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (group, name) = split_key(s, "Exif")?;
        let ifd = Ifd::from_group_name(group).ok_or_else(|| TagError::InvalidKey(s.to_string()))?;

        if let Some(info) = registry::exif_tag_by_name(ifd, name) {
            return Ok(TagIfd::new(info.tag, ifd));
        }

        parse_unknown_name(name)
            .map(|tag| TagIfd::new(Tag(tag), ifd))
            .ok_or_else(|| TagError::InvalidKey(s.to_string()))
    }
}

impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = match record_info(self.record) {
            Some(info) => info.name.to_string(),
            None => unknown_name(self.record.into()),
        };
        match registry::iptc_dataset(*self) {
            Some(info) => write!(f, "Iptc.{record}.{}", info.name),
            None => write!(f, "Iptc.{record}.{}", unknown_name(self.number.into())),
        }
    }
}

impl FromStr for DataSet {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TagError::InvalidKey(s.to_string());
        let (record_name, name) = split_key(s, "Iptc")?;

        let record = match record_by_name(record_name) {
            Some(info) => info.number,
            None => parse_unknown_name(record_name)
                .and_then(|x| u8::try_from(x).ok())
                .ok_or_else(invalid)?,
        };

        if let Some(info) = registry::iptc_dataset_by_name(record, name) {
            return Ok(info.dataset);
        }

        let number = parse_unknown_name(name)
            .and_then(|x| u8::try_from(x).ok())
            .ok_or_else(invalid)?;

        Ok(DataSet::new(record, number))
    }
}

fn is_xml_name(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

impl fmt::Display for XmpKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Xmp.{}.{}", self.prefix, self.property)
    }
}

impl FromStr for XmpKey {
    type Err = TagError;

    /// The namespace prefix is not resolved here
    ///
    /// ```
    /// # use imgmeta_common::key::XmpKey;
    /// let key: XmpKey = "Xmp.dc.title".parse().unwrap();
    /// assert_eq!(key.prefix, "dc");
    /// assert!("Xmp.dc".parse::<XmpKey>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, property) = split_key(s, "Xmp")?;

        if !is_xml_name(prefix) || prefix.contains('.') || !is_xml_name(property) {
            return Err(TagError::InvalidKey(s.to_string()));
        }

        Ok(Self::new(prefix, property))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exif(key) => key.fmt(f),
            Self::Iptc(key) => key.fmt(f),
            Self::Xmp(key) => key.fmt(f),
        }
    }
}

impl FromStr for Key {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some(("Exif", _)) => s.parse().map(Self::Exif),
            Some(("Iptc", _)) => s.parse().map(Self::Iptc),
            Some(("Xmp", _)) => s.parse().map(Self::Xmp),
            _ => Err(TagError::InvalidKey(s.to_string())),
        }
    }
}
