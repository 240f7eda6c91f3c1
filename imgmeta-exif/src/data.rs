use imgmeta_common::error::{TagError, ValueError};
use imgmeta_common::exif::{ByteOrder, Field, TagIfd, Type};
use imgmeta_common::field;
use imgmeta_common::geography::{LatRef, Location, LonRef};
use imgmeta_common::orientation::Orientation;
use imgmeta_common::rational::URational;
use imgmeta_common::registry::{self, Print, TagInfo, TextEncoding};

use crate::decode::{DecodeOptions, Decoded, Decoder};
use crate::error::Result;
use crate::text::{decode_utf16le, encode_utf16le, Comment};
use crate::Value;

/// One IFD entry
///
/// The payload is kept in its wire form and only decoded on access.
#[derive(Debug, Clone)]
pub struct Datum {
    key: TagIfd,
    type_: Type,
    count: u32,
    data: Vec<u8>,
    byte_order: ByteOrder,
    /// Offset of the out-of-line data in the structure it was read from
    origin: Option<u32>,
}

impl PartialEq for Datum {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.type_ == other.type_
            && self.count == other.count
            && self.data == other.data
            && self.byte_order == other.byte_order
    }
}

impl Datum {
    pub(crate) fn from_parts(
        key: TagIfd,
        type_: Type,
        count: u32,
        data: Vec<u8>,
        byte_order: ByteOrder,
        origin: Option<u32>,
    ) -> Self {
        Self {
            key,
            type_,
            count,
            data,
            byte_order,
            origin,
        }
    }

    pub fn new(key: TagIfd, value: &Value, byte_order: ByteOrder) -> std::result::Result<Self, TagError> {
        let encoded = value.encode(byte_order).map_err(|err| err.with_key(key))?;

        Ok(Self::from_parts(
            key,
            encoded.type_,
            encoded.count,
            encoded.data,
            byte_order,
            None,
        ))
    }

    pub fn key(&self) -> TagIfd {
        self.key
    }

    pub fn type_(&self) -> Type {
        self.type_
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Payload as stored in the IFD
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn origin(&self) -> Option<u32> {
        self.origin
    }

    pub fn info(&self) -> TagInfo {
        registry::exif_info(self.key)
    }

    pub fn value(&self) -> std::result::Result<Value, TagError> {
        Value::decode(self.type_, self.count, &self.data, self.byte_order)
            .map_err(|err| err.with_key(self.key))
    }

    /// String form of the value, text encodings are applied
    pub fn raw_value(&self) -> std::result::Result<String, TagError> {
        let decoded = match text_encoding(self.key) {
            TextEncoding::Comment => {
                Comment::decode(&self.data, self.byte_order).map(|x| x.to_string())
            }
            TextEncoding::Utf16Le => decode_utf16le(&self.data),
            TextEncoding::None => return self.value().map(|x| x.to_raw_string()),
        };

        decoded.map_err(|err| err.with_key(self.key))
    }

    /// Interpreted value like `1/60 s` or `F2.8`
    pub fn human_value(&self) -> std::result::Result<String, TagError> {
        let print = registry::exif_tag(self.key).map_or(Print::Value, |x| x.print);

        match print {
            Print::Comment | Print::Utf16 => self.raw_value(),
            print => Ok(crate::print::human_value(print, &self.value()?)),
        }
    }
}

fn text_encoding(key: TagIfd) -> TextEncoding {
    registry::exif_tag(key).map_or(TextEncoding::None, |x| x.text_encoding())
}

/// EXIF store
///
/// Entries are unique per key and keep the order in which they were read or
/// added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifData {
    byte_order: ByteOrder,
    entries: Vec<Datum>,
    thumbnail: Option<Vec<u8>>,
}

impl From<Decoded> for ExifData {
    fn from(decoded: Decoded) -> Self {
        let mut data = Self::with_byte_order(decoded.byte_order);
        for datum in decoded.entries {
            if data.contains(datum.key) {
                tracing::info!("Ignoring duplicate entry for {}", datum.key);
                continue;
            }
            data.entries.push(datum);
        }
        data.thumbnail = decoded.thumbnail;
        data
    }
}

impl ExifData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_byte_order(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..Self::default()
        }
    }

    /// Reads a TIFF structure including the thumbnail IFD
    pub fn decode(data: &[u8]) -> Result<Self> {
        Decoder::new(data, DecodeOptions::default())
            .decode()
            .map(Self::from)
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Byte order used when encoding
    ///
    /// Entries are converted when they are written.
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
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

    pub fn keys(&self) -> Vec<TagIfd> {
        self.entries.iter().map(|x| x.key).collect()
    }

    pub fn contains(&self, key: TagIfd) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: TagIfd) -> std::result::Result<&Datum, TagError> {
        self.entries
            .iter()
            .find(|x| x.key == key)
            .ok_or_else(|| TagError::KeyNotFound(key.to_string()))
    }

    /// Sets a value from its raw string form
    ///
    /// The type of an existing entry is kept. New entries get the type from
    /// the registry or `Undefined` for unknown tags.
    pub fn set_raw_value(&mut self, key: TagIfd, raw: &str) -> std::result::Result<(), TagError> {
        check_settable(key)?;
        let type_ = self.type_for(key);

        let (type_, data) = match text_encoding(key) {
            TextEncoding::Comment => {
                let comment: Comment = raw.parse().map_err(|err: ValueError| err.with_key(key))?;
                let data = comment
                    .encode(self.byte_order)
                    .map_err(|err| err.with_key(key))?;
                (byte_sized(type_), data)
            }
            TextEncoding::Utf16Le => (byte_sized(type_), encode_utf16le(raw)),
            TextEncoding::None => {
                let value = Value::from_raw_string(type_, raw).map_err(|err| err.with_key(key))?;
                return self.set_value(key, value);
            }
        };

        let count = u32::try_from(data.len())
            .map_err(|_| ValueError::invalid("value too large").with_key(key))?;
        self.insert(Datum::from_parts(key, type_, count, data, self.byte_order, None));
        Ok(())
    }

    /// Sets a typed value, replacing an existing entry in place
    pub fn set_value(&mut self, key: TagIfd, value: Value) -> std::result::Result<(), TagError> {
        check_settable(key)?;
        let datum = Datum::new(key, &value, self.byte_order)?;
        self.insert(datum);
        Ok(())
    }

    pub fn delete(&mut self, key: TagIfd) -> std::result::Result<Datum, TagError> {
        self.take(key)
            .ok_or_else(|| TagError::KeyNotFound(key.to_string()))
    }

    /// Removes an entry if it exists
    pub fn take(&mut self, key: TagIfd) -> Option<Datum> {
        let pos = self.position(key)?;
        Some(self.entries.remove(pos))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.thumbnail = None;
    }

    /// JPEG thumbnail from IFD1
    pub fn thumbnail(&self) -> Option<&[u8]> {
        self.thumbnail.as_deref()
    }

    pub fn set_thumbnail(&mut self, thumbnail: Option<Vec<u8>>) {
        self.thumbnail = thumbnail;
    }

    /// Image orientation
    ///
    /// Rotation and mirroring that have to be applied to show the image
    /// correctly
    pub fn orientation(&self) -> Orientation {
        self.u32(field::Orientation)
            .and_then(|x| u16::try_from(x).ok())
            .and_then(|x| Orientation::try_from(x).ok())
            .unwrap_or(Orientation::Id)
    }

    /// Camera manufacturer
    pub fn make(&self) -> Option<String> {
        self.string(field::Make)
    }

    /// Camera model
    pub fn model(&self) -> Option<String> {
        self.string(field::Model)
    }

    /// ISO
    pub fn iso_speed_rating(&self) -> Option<u32> {
        self.u32(field::ISOSpeedRatings)
    }

    /// Aperture
    pub fn f_number(&self) -> Option<f64> {
        self.rational(field::FNumber)?.to_f64()
    }

    /// Focal length in mm
    pub fn focal_length(&self) -> Option<f64> {
        self.rational(field::FocalLength)?.to_f64()
    }

    /// Exposure time in seconds
    ///
    /// The numerator is typically one, such that the value reads like
    /// "1/60 sec".
    pub fn exposure_time(&self) -> Option<URational> {
        self.rational(field::ExposureTime)
    }

    /// Location of capture in decimal degrees
    pub fn gps_location(&self) -> Option<Location> {
        let lat_ref = LatRef::try_from(self.string(field::GPSLatitudeRef)?.as_str()).ok()?;
        let lon_ref = LonRef::try_from(self.string(field::GPSLongitudeRef)?.as_str()).ok()?;
        let lat = self.deg_min_sec(field::GPSLatitude)?;
        let lon = self.deg_min_sec(field::GPSLongitude)?;

        Some(Location::from_ref_coord(lat_ref, lat, lon_ref, lon))
    }

    #[cfg(feature = "chrono")]
    pub fn date_time_original(&self) -> Option<imgmeta_common::datetime::DateTime> {
        let datetime = self.string(field::DateTimeOriginal)?;
        // `YYYY:MM:DD HH:MM:SS` to RFC 3339
        let mut datetime = datetime
            .trim()
            .replacen(':', "-", 2)
            .replacen(' ', "T", 1);

        // Add sub-seconds
        if let Some(subsec) = self.string(field::SubSecTimeOriginal) {
            // Some cameras write a leading NUL
            let subsec = subsec.trim().replace('\0', "");
            if !subsec.is_empty() {
                datetime.push('.');
                datetime.push_str(&subsec);
            }
        }

        let use_offset;

        // Add offset (timezone)
        if let Some(offset) = self.string(field::OffsetTimeOriginal) {
            datetime.push_str(offset.trim());
            use_offset = true;
        } else {
            // Add a offset to allow parser to work
            datetime.push('Z');
            use_offset = false;
        }

        let x = chrono::DateTime::parse_from_rfc3339(&datetime).ok()?;

        Some(if use_offset {
            imgmeta_common::datetime::DateTime::FixedOffset(x)
        } else {
            imgmeta_common::datetime::DateTime::Naive(x.naive_utc())
        })
    }

    pub(crate) fn entries(&self) -> &[Datum] {
        &self.entries
    }

    fn position(&self, key: TagIfd) -> Option<usize> {
        self.entries.iter().position(|x| x.key == key)
    }

    fn insert(&mut self, datum: Datum) {
        match self.position(datum.key) {
            Some(pos) => {
                if let Some(existing) = self.entries.get_mut(pos) {
                    *existing = datum;
                }
            }
            None => self.entries.push(datum),
        }
    }

    fn type_for(&self, key: TagIfd) -> Type {
        self.get(key)
            .map(|x| x.type_)
            .unwrap_or_else(|_| registry::exif_type(key))
    }

    fn value<T: Field>(&self, field: T) -> Option<Value> {
        self.get(field.into()).ok()?.value().ok()
    }

    fn u32<T: Field>(&self, field: T) -> Option<u32> {
        self.value(field)?.as_u32()
    }

    fn string<T: Field>(&self, field: T) -> Option<String> {
        self.value(field)?.as_str().map(ToString::to_string)
    }

    fn rational<T: Field>(&self, field: T) -> Option<URational> {
        self.value(field)?.as_rationals()?.first().copied()
    }

    fn deg_min_sec<T: Field>(&self, field: T) -> Option<(f64, f64, f64)> {
        let value = self.value(field)?;
        match value.as_rationals()? {
            [deg, min, sec] => Some((deg.to_f64()?, min.to_f64()?, sec.to_f64()?)),
            _ => None,
        }
    }
}

/// Pointer tags are generated when encoding
fn check_settable(key: TagIfd) -> std::result::Result<(), TagError> {
    if registry::is_pointer(key.tag, key.ifd) || is_thumbnail_offset(key) {
        return Err(TagError::InvalidValue {
            key: key.to_string(),
            reason: String::from("offsets are managed by the encoder"),
        });
    }
    Ok(())
}

fn is_thumbnail_offset(key: TagIfd) -> bool {
    key == TagIfd::from(field::JPEGInterchangeFormat)
        || key == TagIfd::from(field::JPEGInterchangeFormatLength)
}

/// Text encodings produce single bytes
fn byte_sized(type_: Type) -> Type {
    if type_.size() == 1 {
        type_
    } else {
        Type::Undefined
    }
}
