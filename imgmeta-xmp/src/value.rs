//! Values of XMP properties and their string forms

use imgmeta_common::datetime::XmpDate;
use imgmeta_common::error::ValueError;
use imgmeta_common::geography::GpsCoordinate;
use imgmeta_common::rational::SRational;
use imgmeta_common::xmp::{XmpScalar, XmpType};

pub const X_DEFAULT: &str = "x-default";

/// Kind of an RDF container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    /// Unordered
    Bag,
    /// Ordered
    Seq,
    /// Alternatives
    Alt,
}

impl ArrayKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bag => "Bag",
            Self::Seq => "Seq",
            Self::Alt => "Alt",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "Bag" => Some(Self::Bag),
            "Seq" => Some(Self::Seq),
            "Alt" => Some(Self::Alt),
            _ => None,
        }
    }

    /// Container kind of a declared array type
    pub fn of(type_: XmpType) -> Option<Self> {
        match type_ {
            XmpType::Bag(_) => Some(Self::Bag),
            XmpType::Seq(_) => Some(Self::Seq),
            XmpType::Alt(_) => Some(Self::Alt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmpValue {
    Text(String),
    Array { kind: ArrayKind, items: Vec<String> },
    /// Alternatives by language, `x-default` comes first
    LangAlt(Vec<(String, String)>),
}

impl XmpValue {
    pub fn lang_alt(alternatives: Vec<(String, String)>) -> Self {
        let (mut default, other): (Vec<_>, Vec<_>) = alternatives
            .into_iter()
            .partition(|(lang, _)| lang == X_DEFAULT);
        default.extend(other);
        Self::LangAlt(default)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text, first array item or default language
    pub fn first_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Array { items, .. } => items.first().map(String::as_str),
            Self::LangAlt(alternatives) => alternatives.first().map(|(_, text)| text.as_str()),
        }
    }

    /// String form
    ///
    /// Array items are separated by `, ` and language alternatives are
    /// written as `lang="x-default" text, lang="de" Text`.
    pub fn to_raw_string(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Array { items, .. } => items.join(", "),
            Self::LangAlt(alternatives) => alternatives
                .iter()
                .map(|(lang, text)| format!("lang=\"{lang}\" {text}"))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Parses the string form for a declared type
    ///
    /// ```
    /// # use imgmeta_xmp::{ArrayKind, XmpValue};
    /// # use imgmeta_common::xmp::{XmpScalar, XmpType};
    /// let value = XmpValue::from_raw_string(XmpType::Bag(XmpScalar::Text), "a, b").unwrap();
    /// assert_eq!(
    ///     value,
    ///     XmpValue::Array {
    ///         kind: ArrayKind::Bag,
    ///         items: vec!["a".into(), "b".into()]
    ///     }
    /// );
    ///
    /// let value = XmpValue::from_raw_string(XmpType::LangAlt, "Title").unwrap();
    /// assert_eq!(value.to_raw_string(), r#"lang="x-default" Title"#);
    /// ```
    pub fn from_raw_string(type_: XmpType, s: &str) -> Result<Self, ValueError> {
        let value = match type_ {
            XmpType::Scalar(_) | XmpType::Undefined => Self::Text(s.to_string()),
            XmpType::Bag(_) | XmpType::Seq(_) | XmpType::Alt(_) => Self::Array {
                kind: ArrayKind::of(type_).unwrap_or(ArrayKind::Bag),
                items: if s.is_empty() {
                    Vec::new()
                } else {
                    s.split(", ").map(ToString::to_string).collect()
                },
            },
            XmpType::LangAlt => Self::lang_alt(parse_lang_alt(s)?),
        };

        check(type_, &value)?;
        Ok(value)
    }
}

fn parse_lang_alt(s: &str) -> Result<Vec<(String, String)>, ValueError> {
    let Some(rest) = s.strip_prefix("lang=\"") else {
        return Ok(vec![(X_DEFAULT.to_string(), s.to_string())]);
    };

    let parts: Vec<&str> = rest.split(", lang=\"").collect();
    parts
        .into_iter()
        .map(|part| {
            let (lang, text) = part
                .split_once("\" ")
                .or_else(|| part.strip_suffix('"').map(|lang| (lang, "")))
                .ok_or_else(|| ValueError::invalid(format!("invalid language alternative '{s}'")))?;
            Ok((lang.to_string(), text.to_string()))
        })
        .collect()
}

/// Checks a value against the declared type
pub fn check(type_: XmpType, value: &XmpValue) -> Result<(), ValueError> {
    match (type_, value) {
        (XmpType::Undefined, _) => Ok(()),
        (XmpType::Scalar(scalar), XmpValue::Text(text)) => check_scalar(scalar, text),
        (
            XmpType::Bag(scalar) | XmpType::Seq(scalar) | XmpType::Alt(scalar),
            XmpValue::Array { kind, items },
        ) if ArrayKind::of(type_) == Some(*kind) => items
            .iter()
            .try_for_each(|item| check_scalar(scalar, item)),
        (XmpType::LangAlt, XmpValue::LangAlt(alternatives)) => {
            if alternatives.is_empty() {
                Err(ValueError::invalid("no language alternatives"))
            } else {
                Ok(())
            }
        }
        _ => Err(ValueError::invalid(format!(
            "expected a value of type '{}'",
            type_.name()
        ))),
    }
}

/// Checks the string form of a scalar
pub fn check_scalar(scalar: XmpScalar, s: &str) -> Result<(), ValueError> {
    let valid = match scalar {
        XmpScalar::Integer => s.trim().parse::<i64>().is_ok(),
        XmpScalar::Real => s.trim().parse::<f64>().is_ok(),
        XmpScalar::Boolean => matches!(s, "True" | "False"),
        XmpScalar::Date => s.parse::<XmpDate>().is_ok(),
        XmpScalar::Rational => s.parse::<SRational>().is_ok(),
        XmpScalar::GpsCoordinate => s.parse::<GpsCoordinate>().is_ok(),
        XmpScalar::MimeType => s
            .split_once('/')
            .is_some_and(|(type_, subtype)| !type_.is_empty() && !subtype.is_empty()),
        XmpScalar::Text
        | XmpScalar::Uri
        | XmpScalar::ProperName
        | XmpScalar::Locale
        | XmpScalar::AgentName => true,
    };

    if valid {
        Ok(())
    } else {
        Err(ValueError::invalid(format!(
            "'{s}' is not a valid {}",
            scalar.name()
        )))
    }
}
