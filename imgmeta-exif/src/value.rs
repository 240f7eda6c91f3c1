//! Typed values of IFD entries
//!
//! The raw string form lists numbers separated by single spaces, rationals as
//! `n/d` and byte payloads as decimal values.

use imgmeta_common::error::ValueError;
use imgmeta_common::exif::{ByteOrder, Type};
use imgmeta_common::math::*;
use imgmeta_common::rational::{Rational, SRational, URational};
use imgmeta_common::utils::{bytes_to_decimal, decimal_to_bytes};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(Vec<u8>),
    /// Text without the terminating NUL
    Ascii(String),
    Short(Vec<u16>),
    Long(Vec<u32>),
    Rational(Vec<URational>),
    SByte(Vec<i8>),
    Undefined(Vec<u8>),
    SShort(Vec<i16>),
    SLong(Vec<i32>),
    SRational(Vec<SRational>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Utf8(String),
}

/// Bytes of one entry as stored in the IFD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub type_: Type,
    pub count: u32,
    pub data: Vec<u8>,
}

impl Value {
    pub fn type_(&self) -> Type {
        match self {
            Self::Byte(_) => Type::Byte,
            Self::Ascii(_) => Type::Ascii,
            Self::Short(_) => Type::Short,
            Self::Long(_) => Type::Long,
            Self::Rational(_) => Type::Rational,
            Self::SByte(_) => Type::SByte,
            Self::Undefined(_) => Type::Undefined,
            Self::SShort(_) => Type::SShort,
            Self::SLong(_) => Type::SLong,
            Self::SRational(_) => Type::SRational,
            Self::Float(_) => Type::Float,
            Self::Double(_) => Type::Double,
            Self::Utf8(_) => Type::Utf8,
        }
    }

    /// Decodes `count` components of `type_`
    ///
    /// Unknown types are treated like [`Type::Undefined`].
    pub fn decode(type_: Type, count: u32, data: &[u8], byte_order: ByteOrder) -> Result<Self, ValueError> {
        let expected = count
            .safe_mul(type_.size())
            .map_err(|err| ValueError::decode(data, err))?;
        if expected.usize().ok() != Some(data.len()) {
            return Err(ValueError::decode(
                data,
                format!(
                    "{} bytes for {count} values of type {}",
                    data.len(),
                    type_.name()
                ),
            ));
        }

        let u16s = || -> Vec<u16> {
            data.chunks_exact(2)
                .map(|x| byte_order.u16([x[0], x[1]]))
                .collect()
        };
        let u32s = || -> Vec<u32> {
            data.chunks_exact(4)
                .map(|x| byte_order.u32([x[0], x[1], x[2], x[3]]))
                .collect()
        };
        let u64s = || -> Vec<u64> {
            data.chunks_exact(8)
                .map(|x| {
                    let bytes: [u8; 8] = x.try_into().unwrap_or_default();
                    if byte_order.is_big_endian() {
                        u64::from_be_bytes(bytes)
                    } else {
                        u64::from_le_bytes(bytes)
                    }
                })
                .collect()
        };

        Ok(match type_ {
            Type::Byte => Self::Byte(data.to_vec()),
            Type::Ascii => Self::Ascii(decode_text(data)?),
            Type::Utf8 => Self::Utf8(decode_text(data)?),
            Type::Short => Self::Short(u16s()),
            Type::Long => Self::Long(u32s()),
            Type::Rational => Self::Rational(
                u32s()
                    .chunks_exact(2)
                    .map(|x| Rational::new(x[0], x[1]))
                    .collect(),
            ),
            Type::SByte => Self::SByte(data.iter().map(|x| i8::from_ne_bytes([*x])).collect()),
            Type::SShort => Self::SShort(
                u16s()
                    .into_iter()
                    .map(|x| i16::from_ne_bytes(x.to_ne_bytes()))
                    .collect(),
            ),
            Type::SLong => Self::SLong(u32s().into_iter().map(i32_from_bits).collect()),
            Type::SRational => Self::SRational(
                u32s()
                    .chunks_exact(2)
                    .map(|x| Rational::new(i32_from_bits(x[0]), i32_from_bits(x[1])))
                    .collect(),
            ),
            Type::Float => Self::Float(u32s().into_iter().map(f32::from_bits).collect()),
            Type::Double => Self::Double(u64s().into_iter().map(f64::from_bits).collect()),
            Type::Undefined | Type::Unknown(_) => Self::Undefined(data.to_vec()),
        })
    }

    /// Encodes into the IFD representation
    ///
    /// Text keeps embedded NUL bytes and gets a single terminating NUL. Values
    /// without components encode with a count of zero. Rationals with a zero
    /// denominator are rejected.
    pub fn encode(&self, byte_order: ByteOrder) -> Result<Encoded, ValueError> {
        let mut data = Vec::new();

        match self {
            Self::Byte(v) | Self::Undefined(v) => data.extend_from_slice(v),
            Self::Ascii(s) | Self::Utf8(s) => {
                data.extend_from_slice(s.as_bytes());
                data.push(0);
            }
            Self::Short(v) => v
                .iter()
                .for_each(|x| data.extend_from_slice(&byte_order.u16_bytes(*x))),
            Self::Long(v) => v
                .iter()
                .for_each(|x| data.extend_from_slice(&byte_order.u32_bytes(*x))),
            Self::Rational(v) => {
                for r in v {
                    if r.denominator == 0 {
                        return Err(ValueError::invalid("zero denominator"));
                    }
                    data.extend_from_slice(&byte_order.u32_bytes(r.numerator));
                    data.extend_from_slice(&byte_order.u32_bytes(r.denominator));
                }
            }
            Self::SByte(v) => data.extend(v.iter().map(|x| x.to_ne_bytes()[0])),
            Self::SShort(v) => v.iter().for_each(|x| {
                data.extend_from_slice(&byte_order.u16_bytes(u16::from_ne_bytes(x.to_ne_bytes())))
            }),
            Self::SLong(v) => v
                .iter()
                .for_each(|x| data.extend_from_slice(&byte_order.u32_bytes(i32_to_bits(*x)))),
            Self::SRational(v) => {
                for r in v {
                    if r.denominator == 0 {
                        return Err(ValueError::invalid("zero denominator"));
                    }
                    data.extend_from_slice(&byte_order.u32_bytes(i32_to_bits(r.numerator)));
                    data.extend_from_slice(&byte_order.u32_bytes(i32_to_bits(r.denominator)));
                }
            }
            Self::Float(v) => v
                .iter()
                .for_each(|x| data.extend_from_slice(&byte_order.u32_bytes(x.to_bits()))),
            Self::Double(v) => {
                for x in v {
                    if byte_order.is_big_endian() {
                        data.extend_from_slice(&x.to_bits().to_be_bytes());
                    } else {
                        data.extend_from_slice(&x.to_bits().to_le_bytes());
                    }
                }
            }
        }

        let type_ = self.type_();
        let count = data
            .len()
            .safe_div(type_.size().usize().map_err(ValueError::invalid)?)
            .and_then(|x| x.u32())
            .map_err(ValueError::invalid)?;

        Ok(Encoded { type_, count, data })
    }

    /// Parses the raw string form for the given type
    ///
    /// ```
    /// # use imgmeta_exif::Value;
    /// # use imgmeta_common::exif::Type;
    /// let value = Value::from_raw_string(Type::Short, "1 2 3").unwrap();
    /// assert_eq!(value, Value::Short(vec![1, 2, 3]));
    /// assert_eq!(value.to_raw_string(), "1 2 3");
    ///
    /// assert!(Value::from_raw_string(Type::Rational, "1/0").is_err());
    /// ```
    pub fn from_raw_string(type_: Type, s: &str) -> Result<Self, ValueError> {
        fn numbers<T: std::str::FromStr>(s: &str) -> Result<Vec<T>, ValueError> {
            let v = s
                .split_whitespace()
                .map(|x| {
                    x.parse()
                        .map_err(|_| ValueError::invalid(format!("'{x}' is not a valid number")))
                })
                .collect::<Result<Vec<T>, _>>()?;
            if v.is_empty() {
                return Err(ValueError::invalid("no value given"));
            }
            Ok(v)
        }

        fn rationals<T>(s: &str) -> Result<Vec<Rational<T>>, ValueError>
        where
            T: std::str::FromStr + Default + PartialEq,
        {
            let v = s
                .split_whitespace()
                .map(|x| x.parse().map_err(ValueError::invalid))
                .collect::<Result<Vec<_>, _>>()?;
            if v.is_empty() {
                return Err(ValueError::invalid("no value given"));
            }
            Ok(v)
        }

        let bytes = || {
            decimal_to_bytes(s)
                .filter(|x| !x.is_empty())
                .ok_or_else(|| ValueError::invalid("expected decimal byte values"))
        };

        Ok(match type_ {
            Type::Byte => Self::Byte(bytes()?),
            Type::Ascii => Self::Ascii(s.to_string()),
            Type::Utf8 => Self::Utf8(s.to_string()),
            Type::Short => Self::Short(numbers(s)?),
            Type::Long => Self::Long(numbers(s)?),
            Type::Rational => Self::Rational(rationals(s)?),
            Type::SByte => Self::SByte(numbers(s)?),
            Type::SShort => Self::SShort(numbers(s)?),
            Type::SLong => Self::SLong(numbers(s)?),
            Type::SRational => Self::SRational(rationals(s)?),
            Type::Float => Self::Float(numbers(s)?),
            Type::Double => Self::Double(numbers(s)?),
            Type::Undefined | Type::Unknown(_) => Self::Undefined(bytes()?),
        })
    }

    pub fn to_raw_string(&self) -> String {
        fn join<T: ToString>(v: &[T]) -> String {
            v.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        }

        match self {
            Self::Byte(v) | Self::Undefined(v) => bytes_to_decimal(v),
            Self::Ascii(s) | Self::Utf8(s) => s.clone(),
            Self::Short(v) => join(v),
            Self::Long(v) => join(v),
            Self::Rational(v) => join(v),
            Self::SByte(v) => join(v),
            Self::SShort(v) => join(v),
            Self::SLong(v) => join(v),
            Self::SRational(v) => join(v),
            Self::Float(v) => join(v),
            Self::Double(v) => join(v),
        }
    }

    /// First component as integer
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Byte(v) | Self::Undefined(v) => v.first().map(|x| u32::from(*x)),
            Self::Short(v) => v.first().map(|x| u32::from(*x)),
            Self::Long(v) => v.first().copied(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Ascii(s) | Self::Utf8(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_rationals(&self) -> Option<&[URational]> {
        match self {
            Self::Rational(v) => Some(v),
            _ => None,
        }
    }
}

/// Strips trailing NUL bytes
fn decode_text(data: &[u8]) -> Result<String, ValueError> {
    let len = data.iter().rposition(|x| *x != 0).map_or(0, |x| x.saturating_add(1));
    let text = data.get(..len).unwrap_or_default();
    String::from_utf8(text.to_vec()).map_err(|err| ValueError::decode(data, err))
}

fn i32_from_bits(x: u32) -> i32 {
    i32::from_ne_bytes(x.to_ne_bytes())
}

fn i32_to_bits(x: i32) -> u32 {
    u32::from_ne_bytes(x.to_ne_bytes())
}
