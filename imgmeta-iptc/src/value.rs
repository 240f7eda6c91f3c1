//! Typed values of datasets

use imgmeta_common::datetime::{IptcDate, IptcTime};
use imgmeta_common::error::ValueError;
use imgmeta_common::iptc::IptcType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    /// Big endian on the wire
    Short(u16),
    Date(IptcDate),
    Time(IptcTime),
    Undefined(Vec<u8>),
}

impl Value {
    pub fn type_(&self) -> IptcType {
        match self {
            Self::String(_) => IptcType::String,
            Self::Short(_) => IptcType::Short,
            Self::Date(_) => IptcType::Date,
            Self::Time(_) => IptcType::Time,
            Self::Undefined(_) => IptcType::Undefined,
        }
    }

    /// Decodes the wire form
    ///
    /// Strings that are not valid UTF-8 are read as ISO 8859-1.
    pub fn decode(type_: IptcType, data: &[u8]) -> Result<Self, ValueError> {
        Ok(match type_ {
            IptcType::String => Self::String(match std::str::from_utf8(data) {
                Ok(s) => s.to_string(),
                Err(_) => data.iter().map(|x| char::from(*x)).collect(),
            }),
            IptcType::Short => {
                let bytes: [u8; 2] = data
                    .try_into()
                    .map_err(|_| ValueError::decode(data, "expected two bytes"))?;
                Self::Short(u16::from_be_bytes(bytes))
            }
            IptcType::Date => {
                Self::Date(IptcDate::from_wire(data).map_err(|err| ValueError::decode(data, err))?)
            }
            IptcType::Time => {
                Self::Time(IptcTime::from_wire(data).map_err(|err| ValueError::decode(data, err))?)
            }
            IptcType::Undefined => Self::Undefined(data.to_vec()),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::String(s) => s.as_bytes().to_vec(),
            Self::Short(v) => v.to_be_bytes().to_vec(),
            Self::Date(date) => date.to_wire(),
            Self::Time(time) => time.to_wire(),
            Self::Undefined(v) => v.clone(),
        }
    }

    /// Parses the string form of the type
    ///
    /// ```
    /// # use imgmeta_iptc::Value;
    /// # use imgmeta_common::iptc::IptcType;
    /// let date = Value::from_raw_string(IptcType::Date, "2024-02-29").unwrap();
    /// assert_eq!(date.encode(), b"20240229");
    /// assert!(Value::from_raw_string(IptcType::Date, "2023-02-29").is_err());
    /// ```
    pub fn from_raw_string(type_: IptcType, s: &str) -> Result<Self, ValueError> {
        Ok(match type_ {
            IptcType::String => Self::String(s.to_string()),
            IptcType::Short => Self::Short(
                s.trim()
                    .parse()
                    .map_err(|_| ValueError::invalid(format!("'{s}' is not a valid number")))?,
            ),
            IptcType::Date => Self::Date(s.parse().map_err(ValueError::invalid)?),
            IptcType::Time => Self::Time(s.parse().map_err(ValueError::invalid)?),
            IptcType::Undefined => Self::Undefined(s.as_bytes().to_vec()),
        })
    }

    pub fn to_raw_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Short(v) => v.to_string(),
            Self::Date(date) => date.to_string(),
            Self::Time(time) => time.to_string(),
            Self::Undefined(v) => String::from_utf8_lossy(v).into_owned(),
        }
    }
}
