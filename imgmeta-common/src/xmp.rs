//! XMP namespaces and value types

pub const XML_NS_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const XML_NS_XML: &str = "http://www.w3.org/XML/1998/namespace";
pub const XML_NS_X: &str = "adobe:ns:meta/";

/// Scalar value types of XMP properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XmpScalar {
    Text,
    Integer,
    Real,
    Boolean,
    Date,
    Rational,
    GpsCoordinate,
    MimeType,
    Uri,
    ProperName,
    Locale,
    AgentName,
}

impl XmpScalar {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Integer => "Integer",
            Self::Real => "Real",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Rational => "Rational",
            Self::GpsCoordinate => "GPSCoordinate",
            Self::MimeType => "MIMEType",
            Self::Uri => "URI",
            Self::ProperName => "ProperName",
            Self::Locale => "Locale",
            Self::AgentName => "AgentName",
        }
    }
}

/// Declared type of an XMP property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XmpType {
    Scalar(XmpScalar),
    /// Unordered array
    Bag(XmpScalar),
    /// Ordered array
    Seq(XmpScalar),
    /// Alternative array
    Alt(XmpScalar),
    /// Alternatives by language
    LangAlt,
    /// Property without registry entry, shape is taken from the value
    Undefined,
}

impl XmpType {
    pub fn name(self) -> String {
        match self {
            Self::Scalar(s) => s.name().to_string(),
            Self::Bag(s) => format!("bag {}", s.name()),
            Self::Seq(s) => format!("seq {}", s.name()),
            Self::Alt(s) => format!("alt {}", s.name()),
            Self::LangAlt => String::from("Lang Alt"),
            Self::Undefined => String::from("Undefined"),
        }
    }

    /// Type of the individual items
    pub fn item(self) -> Option<XmpScalar> {
        match self {
            Self::Scalar(s) | Self::Bag(s) | Self::Seq(s) | Self::Alt(s) => Some(s),
            Self::LangAlt | Self::Undefined => None,
        }
    }
}

/// Registered XMP namespace
#[derive(Debug, Clone, Copy)]
pub struct Namespace {
    pub prefix: &'static str,
    pub uri: &'static str,
    pub description: &'static str,
}
