use std::collections::BTreeMap;

use imgmeta_common::error::{TagError, ValueError};
use imgmeta_common::geography::{GpsCoordinate, Location};
use imgmeta_common::key::XmpKey;
use imgmeta_common::rational::URational;
use imgmeta_common::registry::{self, TagInfo};
use imgmeta_common::xmp::XmpType;

use crate::error::Result;
use crate::packet::{self, Property};
use crate::value::{self, ArrayKind, XmpValue};

/// One XMP property
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    key: XmpKey,
    property: Property,
}

impl Datum {
    pub fn key(&self) -> &XmpKey {
        &self.key
    }

    pub fn type_(&self) -> XmpType {
        declared_type(&self.key)
    }

    pub fn info(&self) -> TagInfo {
        registry::xmp_info(&self.key)
    }

    /// Value as found in the packet
    ///
    /// Structures can be listed and are written back, but have no value.
    pub fn value(&self) -> std::result::Result<&XmpValue, TagError> {
        match &self.property {
            Property::Value(value) => Ok(value),
            Property::Structure(element) => Err(ValueError::decode(
                element.text().as_bytes(),
                "structured properties are not supported",
            )
            .with_key(&self.key)),
        }
    }

    pub fn raw_value(&self) -> std::result::Result<String, TagError> {
        self.value().map(XmpValue::to_raw_string)
    }

    /// Value after checking it against the declared type
    pub fn typed_value(&self) -> std::result::Result<&XmpValue, TagError> {
        let value = self.value()?;

        value::check(self.type_(), value).map_err(|err| {
            ValueError::decode(value.to_raw_string().as_bytes(), err).with_key(&self.key)
        })?;

        Ok(value)
    }
}

fn declared_type(key: &XmpKey) -> XmpType {
    registry::xmp_property(&key.prefix, &key.property).map_or(XmpType::Undefined, |x| x.type_)
}

/// XMP store
///
/// Properties are unique per key and keep the order in which they were read
/// or added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmpData {
    entries: Vec<Datum>,
    /// Namespaces without registry entry by prefix
    namespaces: BTreeMap<String, String>,
}

impl XmpData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an XMP packet
    pub fn decode(data: &[u8]) -> Result<Self> {
        let packet = packet::parse(data)?;

        Ok(Self {
            entries: packet
                .properties
                .into_iter()
                .map(|(key, property)| Datum { key, property })
                .collect(),
            namespaces: packet.namespaces,
        })
    }

    /// Writes a complete XMP packet
    pub fn encode(&self) -> Result<Vec<u8>> {
        let properties: Vec<_> = self
            .entries
            .iter()
            .map(|x| (x.key.clone(), x.property.clone()))
            .collect();

        packet::serialize(&properties, &self.namespaces)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Datum> {
        self.entries.iter()
    }

    pub fn keys(&self) -> Vec<XmpKey> {
        self.entries.iter().map(|x| x.key.clone()).collect()
    }

    pub fn contains(&self, key: &XmpKey) -> bool {
        self.position(key).is_some()
    }

    /// Entry of a key, the prefix of the key has to be known
    pub fn get(&self, key: &XmpKey) -> std::result::Result<&Datum, TagError> {
        self.resolve(key)?;
        self.entries
            .iter()
            .find(|x| x.key == *key)
            .ok_or_else(|| TagError::KeyNotFound(key.to_string()))
    }

    /// Namespace URI of a prefix
    ///
    /// Registered namespaces and the custom namespaces of this store are
    /// known.
    pub fn namespace_uri(&self, prefix: &str) -> std::result::Result<&str, TagError> {
        registry::namespace_by_prefix(prefix)
            .map(|x| x.uri)
            .or_else(|| self.namespaces.get(prefix).map(String::as_str))
            .ok_or_else(|| TagError::UnknownNamespacePrefix(prefix.to_string()))
    }

    /// Checks that the prefix of the key is known
    pub fn resolve(&self, key: &XmpKey) -> std::result::Result<(), TagError> {
        self.namespace_uri(&key.prefix).map(|_| ())
    }

    /// Custom namespaces by prefix
    pub fn namespaces(&self) -> &BTreeMap<String, String> {
        &self.namespaces
    }

    /// Adds a namespace that is not in the registry
    pub fn register_namespace(
        &mut self,
        prefix: &str,
        uri: &str,
    ) -> std::result::Result<(), TagError> {
        if let Ok(existing) = self.namespace_uri(prefix) {
            if existing == uri {
                return Ok(());
            }
            return Err(ValueError::invalid(format!(
                "prefix is already bound to '{existing}'"
            ))
            .with_key(prefix));
        }

        self.namespaces.insert(prefix.to_string(), uri.to_string());
        Ok(())
    }

    /// Sets a value from its raw string form
    pub fn set_raw_value(&mut self, key: XmpKey, raw: &str) -> std::result::Result<(), TagError> {
        let value =
            XmpValue::from_raw_string(declared_type(&key), raw).map_err(|err| err.with_key(&key))?;
        self.set_value(key, value)
    }

    /// Sets a text value
    ///
    /// For array properties the text becomes the only item, for language
    /// alternatives the default.
    pub fn set_text(&mut self, key: XmpKey, text: &str) -> std::result::Result<(), TagError> {
        let type_ = declared_type(&key);
        let value = match type_ {
            XmpType::Bag(_) | XmpType::Seq(_) | XmpType::Alt(_) => XmpValue::Array {
                kind: ArrayKind::of(type_).unwrap_or(ArrayKind::Bag),
                items: vec![text.to_string()],
            },
            XmpType::LangAlt => {
                XmpValue::LangAlt(vec![(value::X_DEFAULT.to_string(), text.to_string())])
            }
            XmpType::Scalar(_) | XmpType::Undefined => XmpValue::Text(text.to_string()),
        };

        self.set_value(key, value)
    }

    /// Sets the items of an array property
    ///
    /// Properties without registry entry keep the kind of their existing
    /// array or become a bag.
    pub fn set_array(
        &mut self,
        key: XmpKey,
        items: Vec<String>,
    ) -> std::result::Result<(), TagError> {
        let kind = match declared_type(&key) {
            type_ @ (XmpType::Bag(_) | XmpType::Seq(_) | XmpType::Alt(_)) => {
                ArrayKind::of(type_).unwrap_or(ArrayKind::Bag)
            }
            XmpType::Undefined => match self.get(&key).map(|x| x.value()) {
                Ok(Ok(XmpValue::Array { kind, .. })) => *kind,
                _ => ArrayKind::Bag,
            },
            type_ => {
                return Err(ValueError::invalid(format!(
                    "cannot set an array for type '{}'",
                    type_.name()
                ))
                .with_key(&key))
            }
        };

        self.set_value(key, XmpValue::Array { kind, items })
    }

    /// Sets language alternatives, `x-default` is moved to the front
    pub fn set_lang_alt(
        &mut self,
        key: XmpKey,
        alternatives: Vec<(String, String)>,
    ) -> std::result::Result<(), TagError> {
        match declared_type(&key) {
            XmpType::LangAlt | XmpType::Undefined => {
                self.set_value(key, XmpValue::lang_alt(alternatives))
            }
            type_ => Err(ValueError::invalid(format!(
                "cannot set language alternatives for type '{}'",
                type_.name()
            ))
            .with_key(&key)),
        }
    }

    /// Sets a value after checking it against the declared type
    pub fn set_value(&mut self, key: XmpKey, value: XmpValue) -> std::result::Result<(), TagError> {
        self.resolve(&key)?;
        value::check(declared_type(&key), &value).map_err(|err| err.with_key(&key))?;
        if let XmpValue::LangAlt(alternatives) = &value {
            if alternatives.is_empty() {
                return Err(ValueError::invalid("no language alternatives").with_key(&key));
            }
        }

        let datum = Datum {
            key,
            property: Property::Value(value),
        };
        match self.position(&datum.key) {
            Some(pos) => {
                if let Some(existing) = self.entries.get_mut(pos) {
                    *existing = datum;
                }
            }
            None => self.entries.push(datum),
        }

        Ok(())
    }

    pub fn delete(&mut self, key: &XmpKey) -> std::result::Result<Datum, TagError> {
        self.resolve(key)?;
        let pos = self
            .position(key)
            .ok_or_else(|| TagError::KeyNotFound(key.to_string()))?;
        Ok(self.entries.remove(pos))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn make(&self) -> Option<String> {
        self.text("tiff", "Make")
    }

    pub fn model(&self) -> Option<String> {
        self.text("tiff", "Model")
    }

    pub fn creator(&self) -> Option<String> {
        self.text("dc", "creator")
    }

    pub fn title(&self) -> Option<String> {
        self.text("dc", "title")
    }

    pub fn f_number(&self) -> Option<f64> {
        if let Some(f_number) = self.rational("exif", "FNumber") {
            f_number.to_f64()
        } else {
            let aperture_apex = self.rational("exif", "ApertureValue")?.to_f64()?;
            Some(imgmeta_common::math::apex_to_f_number(aperture_apex))
        }
    }

    pub fn exposure_time(&self) -> Option<URational> {
        self.rational("exif", "ExposureTime")
    }

    pub fn focal_length(&self) -> Option<f64> {
        self.rational("exif", "FocalLength")?.to_f64()
    }

    pub fn iso_speed_rating(&self) -> Option<u32> {
        self.text("exifEX", "PhotographicSensitivity")
            .or_else(|| self.text("exif", "ISOSpeedRatings"))?
            .trim()
            .parse()
            .ok()
    }

    pub fn rating(&self) -> Option<i64> {
        self.text("xmp", "Rating")?.trim().parse().ok()
    }

    /// Location of capture in decimal degrees
    pub fn gps_location(&self) -> Option<Location> {
        let lat: GpsCoordinate = self.text("exif", "GPSLatitude")?.parse().ok()?;
        let lon: GpsCoordinate = self.text("exif", "GPSLongitude")?.parse().ok()?;

        Some(Location::new_from_coord(lat.to_coord(), lon.to_coord()))
    }

    #[cfg(feature = "chrono")]
    pub fn date_time_original(&self) -> Option<imgmeta_common::datetime::DateTime> {
        self.text("exif", "DateTimeOriginal")
            .or_else(|| self.text("xmp", "CreateDate"))?
            .parse::<imgmeta_common::datetime::XmpDate>()
            .ok()?
            .to_chrono()
    }

    fn position(&self, key: &XmpKey) -> Option<usize> {
        self.entries.iter().position(|x| x.key == *key)
    }

    fn text(&self, prefix: &str, property: &str) -> Option<String> {
        let datum = self.get(&XmpKey::new(prefix, property)).ok()?;
        datum.value().ok()?.first_text().map(ToString::to_string)
    }

    fn rational(&self, prefix: &str, property: &str) -> Option<URational> {
        self.text(prefix, property)?.parse().ok()
    }
}
