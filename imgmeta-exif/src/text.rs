//! Text encodings on top of `Undefined` and `Byte` entries

use std::fmt;
use std::str::FromStr;

use imgmeta_common::error::ValueError;
use imgmeta_common::exif::ByteOrder;

/// Character set of a comment like `UserComment`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Ascii,
    /// UTF-16 in the byte order of the Exif data
    Unicode,
    Jis,
    Undefined,
}

impl Charset {
    fn id(self) -> &'static [u8; 8] {
        match self {
            Self::Ascii => b"ASCII\0\0\0",
            Self::Unicode => b"UNICODE\0",
            Self::Jis => b"JIS\0\0\0\0\0",
            Self::Undefined => &[0; 8],
        }
    }

    fn from_id(id: &[u8]) -> Option<Self> {
        [Self::Ascii, Self::Unicode, Self::Jis, Self::Undefined]
            .into_iter()
            .find(|x| x.id() == id)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascii => "Ascii",
            Self::Unicode => "Unicode",
            Self::Jis => "Jis",
            Self::Undefined => "Undefined",
        })
    }
}

impl FromStr for Charset {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_matches('"') {
            "Ascii" => Ok(Self::Ascii),
            "Unicode" => Ok(Self::Unicode),
            "Jis" => Ok(Self::Jis),
            "Undefined" => Ok(Self::Undefined),
            other => Err(ValueError::invalid(format!("unknown charset '{other}'"))),
        }
    }
}

/// Comment with an 8 byte character set prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub charset: Charset,
    pub text: String,
}

impl Comment {
    pub fn decode(data: &[u8], byte_order: ByteOrder) -> Result<Self, ValueError> {
        let (id, text) = data
            .split_at_checked(8)
            .ok_or_else(|| ValueError::decode(data, "comment shorter than charset prefix"))?;
        let charset = Charset::from_id(id)
            .ok_or_else(|| ValueError::decode(data, "unknown charset prefix"))?;

        let text = match charset {
            Charset::Unicode => decode_utf16(text, byte_order)?,
            Charset::Ascii | Charset::Jis | Charset::Undefined => {
                let text = trim_nul(text);
                String::from_utf8(text.to_vec()).map_err(|err| ValueError::decode(data, err))?
            }
        };

        Ok(Self { charset, text })
    }

    pub fn encode(&self, byte_order: ByteOrder) -> Result<Vec<u8>, ValueError> {
        let mut data = self.charset.id().to_vec();
        match self.charset {
            Charset::Unicode => data.extend(encode_utf16(&self.text, byte_order)),
            Charset::Ascii => {
                if !self.text.is_ascii() {
                    return Err(ValueError::invalid("text is not ASCII"));
                }
                data.extend_from_slice(self.text.as_bytes());
            }
            Charset::Jis | Charset::Undefined => data.extend_from_slice(self.text.as_bytes()),
        }
        Ok(data)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "charset={} {}", self.charset, self.text)
    }
}

impl FromStr for Comment {
    type Err = ValueError;

    /// Parses `charset=<Charset> <text>`
    ///
    /// Without charset, ASCII text is stored as `Ascii` and anything else as
    /// `Unicode`.
    ///
    /// ```
    /// # use imgmeta_exif::text::*;
    /// let comment: Comment = "charset=Unicode Grüße".parse().unwrap();
    /// assert_eq!(comment.charset, Charset::Unicode);
    /// assert_eq!(comment.text, "Grüße");
    ///
    /// let comment: Comment = "Hello".parse().unwrap();
    /// assert_eq!(comment.to_string(), "charset=Ascii Hello");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("charset=") {
            let (charset, text) = rest.split_once(' ').unwrap_or((rest, ""));
            return Ok(Self {
                charset: charset.parse()?,
                text: text.to_string(),
            });
        }

        let charset = if s.is_ascii() {
            Charset::Ascii
        } else {
            Charset::Unicode
        };

        Ok(Self {
            charset,
            text: s.to_string(),
        })
    }
}

/// Decodes the Windows `XP*` tags
pub fn decode_utf16le(data: &[u8]) -> Result<String, ValueError> {
    decode_utf16(data, ByteOrder::LittleEndian)
}

/// Encodes text for the Windows `XP*` tags, including the terminating NUL
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut data = encode_utf16(text, ByteOrder::LittleEndian);
    data.extend_from_slice(&[0, 0]);
    data
}

fn decode_utf16(data: &[u8], byte_order: ByteOrder) -> Result<String, ValueError> {
    if data.len() % 2 != 0 {
        return Err(ValueError::decode(data, "odd number of bytes for UTF-16"));
    }

    let mut units: Vec<u16> = data
        .chunks_exact(2)
        .map(|x| byte_order.u16([x[0], x[1]]))
        .collect();
    while units.last() == Some(&0) {
        units.pop();
    }

    String::from_utf16(&units).map_err(|err| ValueError::decode(data, err))
}

fn encode_utf16(text: &str, byte_order: ByteOrder) -> Vec<u8> {
    text.encode_utf16()
        .flat_map(|x| byte_order.u16_bytes(x))
        .collect()
}

fn trim_nul(data: &[u8]) -> &[u8] {
    let len = data
        .iter()
        .rposition(|x| *x != 0)
        .map_or(0, |x| x.saturating_add(1));
    data.get(..len).unwrap_or_default()
}
