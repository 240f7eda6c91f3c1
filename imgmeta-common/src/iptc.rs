//! IPTC-IIM records, datasets and value types

/// Key of an IPTC dataset
///
/// The canonical string form is `Iptc.<Record>.<Dataset>`, see
/// [`crate::key`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSet {
    pub record: u8,
    pub number: u8,
}

impl DataSet {
    pub const fn new(record: u8, number: u8) -> Self {
        Self { record, number }
    }
}

pub const ENVELOPE_RECORD: u8 = 1;
pub const APPLICATION_RECORD: u8 = 2;

/// Dataset 1:90, declares the character set of the other datasets
pub const CHARACTER_SET: DataSet = DataSet::new(ENVELOPE_RECORD, 90);

/// Escape sequence in [`CHARACTER_SET`] announcing UTF-8
pub const UTF8_CHARACTER_SET: &[u8] = b"\x1b%G";

/// Value types of IPTC datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IptcType {
    /// Binary number, big endian
    Short,
    String,
    /// `CCYYMMDD`
    Date,
    /// `HHMMSS±HHMM`
    Time,
    Undefined,
}

impl IptcType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::String => "String",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Undefined => "Undefined",
        }
    }
}

/// Record of the IIM model
#[derive(Debug, Clone, Copy)]
pub struct RecordInfo {
    pub number: u8,
    pub name: &'static str,
    pub description: &'static str,
}

pub static RECORDS: &[RecordInfo] = &[
    RecordInfo {
        number: ENVELOPE_RECORD,
        name: "Envelope",
        description: "IIM envelope record",
    },
    RecordInfo {
        number: APPLICATION_RECORD,
        name: "Application2",
        description: "IIM application record 2",
    },
];

pub fn record_info(number: u8) -> Option<&'static RecordInfo> {
    RECORDS.iter().find(|x| x.number == number)
}

pub fn record_by_name(name: &str) -> Option<&'static RecordInfo> {
    RECORDS.iter().find(|x| x.name == name)
}
