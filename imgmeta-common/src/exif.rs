//! Exif tag identifiers, IFDs and the TIFF type system

use crate::utils::convertible_enum;

/// Exif key: a tag number within an IFD
///
/// The canonical string form is `Exif.<Group>.<Name>`, see
/// [`crate::key`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagIfd {
    pub tag: Tag,
    pub ifd: Ifd,
}

impl TagIfd {
    pub const fn new(tag: Tag, ifd: Ifd) -> Self {
        Self { tag, ifd }
    }
}

impl<T: Field> From<T> for TagIfd {
    fn from(_value: T) -> Self {
        TagIfd {
            tag: T::TAG,
            ifd: T::IFD,
        }
    }
}

/// Exif field known at compile time
pub trait Field {
    const NAME: &'static str;
    const TAG: Tag;
    const IFD: Ifd;
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u16);

impl Tag {
    pub const MAKER_NOTE: Self = Self(0x927C);

    pub const EXIF_IFD_POINTER: Self = Self(0x8769);
    pub const GPS_INFO_IFD_POINTER: Self = Self(0x8825);
    pub const INTEROPERABILITY_IFD_POINTER: Self = Self(0xA005);

    pub const JPEG_INTERCHANGE_FORMAT: Self = Self(0x0201);
    pub const JPEG_INTERCHANGE_FORMAT_LENGTH: Self = Self(0x0202);

    pub const XML_PACKET: Self = Self(0x02BC);
    pub const IPTC_NAA: Self = Self(0x83BB);

    /// IFD a pointer tag leads to
    ///
    /// See 4.6.3 in v3.0 standard. The interoperability pointer is only
    /// valid inside the Exif IFD.
    pub fn exif_specific_ifd(&self, parent: Ifd) -> Option<Ifd> {
        match (*self, parent) {
            (Self::EXIF_IFD_POINTER, Ifd::Primary) => Some(Ifd::Exif),
            (Self::GPS_INFO_IFD_POINTER, Ifd::Primary) => Some(Ifd::Gps),
            (Self::INTEROPERABILITY_IFD_POINTER, Ifd::Exif) => Some(Ifd::Interoperability),
            _ => None,
        }
    }
}

/// Image file directory
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ifd {
    Primary,
    Thumbnail,
    Exif,
    Gps,
    Interoperability,
}

impl Ifd {
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Exif,
        Self::Gps,
        Self::Interoperability,
        Self::Thumbnail,
    ];

    /// Group name used in keys
    pub fn group_name(self) -> &'static str {
        match self {
            Self::Primary => "Image",
            Self::Thumbnail => "Thumbnail",
            Self::Exif => "Photo",
            Self::Gps => "GPSInfo",
            Self::Interoperability => "Iop",
        }
    }

    pub fn group_description(self) -> &'static str {
        match self {
            Self::Primary => "IFD0, primary image attributes",
            Self::Thumbnail => "IFD1, thumbnail image attributes",
            Self::Exif => "Exif IFD, photographic attributes",
            Self::Gps => "GPS IFD, location and time of capture",
            Self::Interoperability => "Interoperability IFD",
        }
    }

    pub fn from_group_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|x| x.group_name() == name)
    }

    /// Pointer tag in the parent IFD that leads to this IFD
    pub fn pointer(self) -> Option<(Ifd, Tag)> {
        match self {
            Self::Exif => Some((Self::Primary, Tag::EXIF_IFD_POINTER)),
            Self::Gps => Some((Self::Primary, Tag::GPS_INFO_IFD_POINTER)),
            Self::Interoperability => Some((Self::Exif, Tag::INTEROPERABILITY_IFD_POINTER)),
            Self::Primary | Self::Thumbnail => None,
        }
    }
}

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Data types of IFD entries
    pub enum Type {
        Byte = 1,
        Ascii = 2,
        Short = 3,
        Long = 4,
        Rational = 5,
        SByte = 6,
        Undefined = 7,
        SShort = 8,
        SLong = 9,
        SRational = 10,
        Float = 11,
        Double = 12,
        Utf8 = 129,
    }
);

impl Type {
    /// Size of one component in bytes
    pub fn size(self) -> u32 {
        match self {
            Self::Byte
            | Self::Ascii
            | Self::SByte
            | Self::Undefined
            | Self::Utf8
            | Self::Unknown(_) => 1,
            Self::Short | Self::SShort => 2,
            Self::Long | Self::SLong | Self::Float => 4,
            Self::Rational | Self::SRational | Self::Double => 8,
        }
    }

    pub fn u16(self) -> u16 {
        self.into()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Byte => "Byte",
            Self::Ascii => "Ascii",
            Self::Short => "Short",
            Self::Long => "Long",
            Self::Rational => "Rational",
            Self::SByte => "SByte",
            Self::Undefined => "Undefined",
            Self::SShort => "SShort",
            Self::SLong => "SLong",
            Self::SRational => "SRational",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Utf8 => "Utf8",
            Self::Unknown(_) => "Unknown",
        }
    }
}

/// Byte order of a TIFF structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    pub const LE_MAGIC: &'static [u8; 4] = b"II*\0";
    pub const BE_MAGIC: &'static [u8; 4] = b"MM\0*";

    /// Byte order from the first two bytes of a TIFF header
    pub fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match &marker {
            b"II" => Some(Self::LittleEndian),
            b"MM" => Some(Self::BigEndian),
            _ => None,
        }
    }

    pub fn marker(self) -> &'static [u8; 2] {
        match self {
            Self::LittleEndian => b"II",
            Self::BigEndian => b"MM",
        }
    }

    pub fn is_big_endian(self) -> bool {
        self == Self::BigEndian
    }

    pub fn u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::LittleEndian => u16::from_le_bytes(bytes),
            Self::BigEndian => u16::from_be_bytes(bytes),
        }
    }

    pub fn u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::LittleEndian => u32::from_le_bytes(bytes),
            Self::BigEndian => u32::from_be_bytes(bytes),
        }
    }

    pub fn u16_bytes(self, value: u16) -> [u8; 2] {
        match self {
            Self::LittleEndian => value.to_le_bytes(),
            Self::BigEndian => value.to_be_bytes(),
        }
    }

    pub fn u32_bytes(self, value: u32) -> [u8; 4] {
        match self {
            Self::LittleEndian => value.to_le_bytes(),
            Self::BigEndian => value.to_be_bytes(),
        }
    }
}
