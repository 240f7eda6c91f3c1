use imgmeta_common::registry::Standard;
use imgmeta_xmp::XmpValue;

use crate::Result;

/// Registry information common to the tags of all standards
pub trait MetadataTag {
    /// Canonical key like `Exif.Image.Make`
    fn key(&self) -> &str;
    fn name(&self) -> &str;
    /// Short human readable name
    fn label(&self) -> &str;
    fn description(&self) -> &str;
    fn type_name(&self) -> &str;
    fn standard(&self) -> Standard;
}

/// Snapshot of an Exif entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExifTag {
    pub key: String,
    pub name: String,
    pub label: String,
    pub description: String,
    pub section_name: String,
    pub section_description: String,
    /// Type of the entry as stored, can differ from the declared type
    pub type_name: String,
    pub raw_value: String,
    /// Interpreted value like `1/60 s`
    pub human_value: String,
}

impl ExifTag {
    pub(crate) fn new(datum: &imgmeta_exif::Datum) -> Result<Self> {
        let info = datum.info();

        Ok(Self {
            key: datum.key().to_string(),
            name: info.name,
            label: info.label,
            description: info.description,
            section_name: info.group_name,
            section_description: info.group_description,
            type_name: datum.type_().name().to_string(),
            raw_value: datum.raw_value()?,
            human_value: datum.human_value()?,
        })
    }
}

/// Snapshot of all repetitions of an IPTC dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IptcTag {
    pub key: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub type_name: String,
    pub repeatable: bool,
    pub record_name: String,
    pub record_description: String,
    pub raw_values: Vec<String>,
}

impl IptcTag {
    pub(crate) fn new(
        key: imgmeta_common::key::IptcKey,
        datums: &[&imgmeta_iptc::Datum],
    ) -> Result<Self> {
        let info = imgmeta_common::registry::iptc_info(key);
        let raw_values = datums
            .iter()
            .map(|x| x.raw_value())
            .collect::<std::result::Result<_, _>>()?;

        Ok(Self {
            key: key.to_string(),
            name: info.name,
            title: info.label,
            description: info.description,
            type_name: info.type_name,
            repeatable: info.repeatable,
            record_name: info.group_name,
            record_description: info.group_description,
            raw_values,
        })
    }
}

/// Snapshot of an XMP property
#[derive(Debug, Clone, PartialEq)]
pub struct XmpTag {
    pub key: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub type_name: String,
    pub value: XmpValue,
    pub raw_value: String,
}

impl XmpTag {
    pub(crate) fn new(datum: &imgmeta_xmp::Datum) -> Result<Self> {
        let info = datum.info();
        let value = datum.value()?.clone();

        Ok(Self {
            key: datum.key().to_string(),
            name: info.name,
            title: info.label,
            description: info.description,
            type_name: info.type_name,
            raw_value: value.to_raw_string(),
            value,
        })
    }
}

/// Tag of any standard
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Exif(ExifTag),
    Iptc(IptcTag),
    Xmp(XmpTag),
}

impl Tag {
    fn inner(&self) -> &dyn MetadataTag {
        match self {
            Self::Exif(tag) => tag,
            Self::Iptc(tag) => tag,
            Self::Xmp(tag) => tag,
        }
    }
}

impl MetadataTag for Tag {
    fn key(&self) -> &str {
        self.inner().key()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn label(&self) -> &str {
        self.inner().label()
    }

    fn description(&self) -> &str {
        self.inner().description()
    }

    fn type_name(&self) -> &str {
        self.inner().type_name()
    }

    fn standard(&self) -> Standard {
        self.inner().standard()
    }
}

macro_rules! metadata_tag {
    ($tag:ty, $label:ident, $standard:ident) => {
        impl MetadataTag for $tag {
            fn key(&self) -> &str {
                &self.key
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn label(&self) -> &str {
                &self.$label
            }

            fn description(&self) -> &str {
                &self.description
            }

            fn type_name(&self) -> &str {
                &self.type_name
            }

            fn standard(&self) -> Standard {
                Standard::$standard
            }
        }
    };
}

metadata_tag!(ExifTag, label, Exif);
metadata_tag!(IptcTag, title, Iptc);
metadata_tag!(XmpTag, title, Xmp);
