//! Date and time grammars of the metadata standards
//!
//! - IPTC-IIM stores dates as `CCYYMMDD` and times as `HHMMSS±HHMM`. Their
//!   string forms are `CCYY-MM-DD` and `HH:MM:SS±HH:MM`.
//! - XMP uses a subset of ISO 8601: `YYYY[-MM[-DD[Thh:mm[:ss[.s]]TZD]]]`.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid date or time '{input}': {reason}")]
pub struct DateTimeError {
    pub input: String,
    pub reason: &'static str,
}

impl DateTimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Time zone designator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Offset {
    /// `Z`
    Utc,
    /// Offset east of UTC in minutes
    Minutes(i16),
}

impl Offset {
    pub fn minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::Minutes(m) => m,
        }
    }

    fn write_colon(self, f: &mut fmt::Formatter<'_>, utc_as_z: bool) -> fmt::Result {
        if utc_as_z && self == Self::Utc {
            return f.write_str("Z");
        }
        let minutes = self.minutes();
        let sign = if minutes < 0 { '-' } else { '+' };
        let abs = minutes.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

/// Date of an IPTC dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IptcDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl IptcDate {
    /// Decodes the `CCYYMMDD` wire form
    ///
    /// ```
    /// # use imgmeta_common::datetime::IptcDate;
    /// let date = IptcDate::from_wire(b"20090512").unwrap();
    /// assert_eq!(date.to_string(), "2009-05-12");
    /// assert_eq!(date.to_wire(), b"20090512");
    /// ```
    pub fn from_wire(data: &[u8]) -> Result<Self, DateTimeError> {
        let s = std::str::from_utf8(data)
            .map_err(|_| DateTimeError::new(&String::from_utf8_lossy(data), "not ASCII"))?;
        if s.len() != 8 {
            return Err(DateTimeError::new(s, "expected CCYYMMDD"));
        }
        Self::from_parts(s, s.get(0..4), s.get(4..6), s.get(6..8))
    }

    pub fn to_wire(&self) -> Vec<u8> {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day).into_bytes()
    }

    fn from_parts(
        input: &str,
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
    ) -> Result<Self, DateTimeError> {
        let year = digits(input, year)?;
        let month = digits(input, month)?;
        let day = digits(input, day)?;

        validate_date(input, year, month, day)?;

        Ok(Self {
            year: year.try_into().map_err(|_| DateTimeError::new(input, "year"))?,
            month: month.try_into().map_err(|_| DateTimeError::new(input, "month"))?,
            day: day.try_into().map_err(|_| DateTimeError::new(input, "day"))?,
        })
    }

    #[cfg(feature = "chrono")]
    pub fn to_chrono(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), self.day.into())
    }
}

impl FromStr for IptcDate {
    type Err = DateTimeError;

    /// Parses `CCYY-MM-DD`, the wire form `CCYYMMDD` is accepted as well
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 8 {
            return Self::from_wire(s.as_bytes());
        }
        if s.len() != 10 || s.get(4..5) != Some("-") || s.get(7..8) != Some("-") {
            return Err(DateTimeError::new(s, "expected CCYY-MM-DD"));
        }
        Self::from_parts(s, s.get(0..4), s.get(5..7), s.get(8..10))
    }
}

impl fmt::Display for IptcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Time of an IPTC dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IptcTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Offset east of UTC in minutes
    pub offset: i16,
}

impl IptcTime {
    /// Decodes the `HHMMSS±HHMM` wire form
    ///
    /// ```
    /// # use imgmeta_common::datetime::IptcTime;
    /// let time = IptcTime::from_wire(b"143015-0130").unwrap();
    /// assert_eq!(time.to_string(), "14:30:15-01:30");
    /// assert_eq!(time.to_wire(), b"143015-0130");
    /// ```
    pub fn from_wire(data: &[u8]) -> Result<Self, DateTimeError> {
        let s = std::str::from_utf8(data)
            .map_err(|_| DateTimeError::new(&String::from_utf8_lossy(data), "not ASCII"))?;
        if s.len() != 11 {
            return Err(DateTimeError::new(s, "expected HHMMSS±HHMM"));
        }
        Self::from_parts(
            s,
            [s.get(0..2), s.get(2..4), s.get(4..6)],
            s.get(6..7),
            [s.get(7..9), s.get(9..11)],
        )
    }

    pub fn to_wire(&self) -> Vec<u8> {
        let sign = if self.offset < 0 { '-' } else { '+' };
        let abs = self.offset.unsigned_abs();
        format!(
            "{:02}{:02}{:02}{sign}{:02}{:02}",
            self.hour,
            self.minute,
            self.second,
            abs / 60,
            abs % 60
        )
        .into_bytes()
    }

    fn from_parts(
        input: &str,
        [hour, minute, second]: [Option<&str>; 3],
        sign: Option<&str>,
        [offset_hour, offset_minute]: [Option<&str>; 2],
    ) -> Result<Self, DateTimeError> {
        let hour = digits(input, hour)?;
        let minute = digits(input, minute)?;
        let second = digits(input, second)?;
        validate_time(input, hour, minute, second)?;

        let offset = offset(input, sign, offset_hour, offset_minute)?;

        Ok(Self {
            hour: hour.try_into().map_err(|_| DateTimeError::new(input, "hour"))?,
            minute: minute.try_into().map_err(|_| DateTimeError::new(input, "minute"))?,
            second: second.try_into().map_err(|_| DateTimeError::new(input, "second"))?,
            offset,
        })
    }

    #[cfg(feature = "chrono")]
    pub fn to_chrono(&self) -> Option<(chrono::NaiveTime, chrono::FixedOffset)> {
        let time = chrono::NaiveTime::from_hms_opt(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
        )?;
        let offset = chrono::FixedOffset::east_opt(i32::from(self.offset).checked_mul(60)?)?;
        Some((time, offset))
    }
}

impl FromStr for IptcTime {
    type Err = DateTimeError;

    /// Parses `HH:MM:SS±HH:MM` or `HH:MM:SS`, the wire form is accepted as well
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 11 && !s.contains(':') {
            return Self::from_wire(s.as_bytes());
        }
        if s.get(2..3) != Some(":") || s.get(5..6) != Some(":") {
            return Err(DateTimeError::new(s, "expected HH:MM:SS±HH:MM"));
        }
        let time = [s.get(0..2), s.get(3..5), s.get(6..8)];
        match s.len() {
            8 => Self::from_parts(s, time, Some("+"), [Some("00"), Some("00")]),
            14 if s.get(11..12) == Some(":") => {
                Self::from_parts(s, time, s.get(8..9), [s.get(9..11), s.get(12..14)])
            }
            _ => Err(DateTimeError::new(s, "expected HH:MM:SS±HH:MM")),
        }
    }
}

impl fmt::Display for IptcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        Offset::Minutes(self.offset).write_colon(f, false)
    }
}

/// XMP date with optional precision
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmpDate {
    pub year: u16,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub time: Option<XmpTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmpTime {
    pub hour: u8,
    pub minute: u8,
    pub second: Option<u8>,
    /// Decimal digits of the fraction of a second
    pub fraction: Option<String>,
    pub offset: Option<Offset>,
}

impl FromStr for XmpDate {
    type Err = DateTimeError;

    /// ```
    /// # use imgmeta_common::datetime::*;
    /// let date: XmpDate = "2009-05-12T10:30:05.25+02:00".parse().unwrap();
    /// assert_eq!(date.year, 2009);
    /// assert_eq!(date.time.as_ref().unwrap().fraction.as_deref(), Some("25"));
    /// assert_eq!(date.to_string(), "2009-05-12T10:30:05.25+02:00");
    ///
    /// assert_eq!("2009-05".parse::<XmpDate>().unwrap().to_string(), "2009-05");
    /// assert!("2009-13-01".parse::<XmpDate>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, time) = match s.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (s, None),
        };

        let mut parts = date.split('-');
        let year = digits(s, parts.next().filter(|x| x.len() == 4))?;
        let month = parts
            .next()
            .map(|x| digits(s, Some(x).filter(|x| x.len() == 2)))
            .transpose()?;
        let day = parts
            .next()
            .map(|x| digits(s, Some(x).filter(|x| x.len() == 2)))
            .transpose()?;
        if parts.next().is_some() {
            return Err(DateTimeError::new(s, "too many date components"));
        }

        if let Some(month) = month {
            validate_date(s, year, month, day.unwrap_or(1))?;
        }

        let time = match time {
            Some(time) if day.is_some() => Some(parse_xmp_time(s, time)?),
            Some(_) => return Err(DateTimeError::new(s, "time requires a full date")),
            None => None,
        };

        Ok(Self {
            year: year.try_into().map_err(|_| DateTimeError::new(s, "year"))?,
            month: month.map(u8::try_from).transpose().map_err(|_| DateTimeError::new(s, "month"))?,
            day: day.map(u8::try_from).transpose().map_err(|_| DateTimeError::new(s, "day"))?,
            time,
        })
    }
}

fn parse_xmp_time(input: &str, time: &str) -> Result<XmpTime, DateTimeError> {
    let (time, offset) = if let Some(time) = time.strip_suffix('Z') {
        (time, Some(Offset::Utc))
    } else if let Some(pos) = time.find(['+', '-']) {
        let (time, tzd) = time.split_at(pos);
        if tzd.len() != 6 || tzd.get(3..4) != Some(":") {
            return Err(DateTimeError::new(input, "invalid time zone designator"));
        }
        let minutes = offset(input, tzd.get(0..1), tzd.get(1..3), tzd.get(4..6))?;
        (time, Some(Offset::Minutes(minutes)))
    } else {
        (time, None)
    };

    let (time, fraction) = match time.split_once('.') {
        Some((time, fraction)) => {
            if fraction.is_empty() || !fraction.bytes().all(|x| x.is_ascii_digit()) {
                return Err(DateTimeError::new(input, "invalid fraction of a second"));
            }
            (time, Some(fraction.to_string()))
        }
        None => (time, None),
    };

    let mut parts = time.split(':');
    let hour = digits(input, parts.next().filter(|x| x.len() == 2))?;
    let minute = digits(input, parts.next().filter(|x| x.len() == 2))?;
    let second = parts
        .next()
        .map(|x| digits(input, Some(x).filter(|x| x.len() == 2)))
        .transpose()?;
    if parts.next().is_some() {
        return Err(DateTimeError::new(input, "too many time components"));
    }
    if fraction.is_some() && second.is_none() {
        return Err(DateTimeError::new(input, "fraction without seconds"));
    }
    validate_time(input, hour, minute, second.unwrap_or(0))?;

    Ok(XmpTime {
        hour: hour.try_into().map_err(|_| DateTimeError::new(input, "hour"))?,
        minute: minute.try_into().map_err(|_| DateTimeError::new(input, "minute"))?,
        second: second
            .map(u8::try_from)
            .transpose()
            .map_err(|_| DateTimeError::new(input, "second"))?,
        fraction,
        offset,
    })
}

impl fmt::Display for XmpDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{month:02}")?;
        }
        if let Some(day) = self.day {
            write!(f, "-{day:02}")?;
        }
        if let Some(time) = &self.time {
            write!(f, "T{:02}:{:02}", time.hour, time.minute)?;
            if let Some(second) = time.second {
                write!(f, ":{second:02}")?;
            }
            if let Some(fraction) = &time.fraction {
                write!(f, ".{fraction}")?;
            }
            if let Some(offset) = time.offset {
                offset.write_colon(f, true)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "chrono")]
impl XmpDate {
    /// Converts to a chrono date time if date and time are complete
    pub fn to_chrono(&self) -> Option<DateTime> {
        let date = chrono::NaiveDate::from_ymd_opt(
            self.year.into(),
            self.month?.into(),
            self.day?.into(),
        )?;
        let time = self.time.as_ref()?;
        let nanos = match &time.fraction {
            Some(fraction) => {
                let digits: String = fraction.chars().chain(std::iter::repeat('0')).take(9).collect();
                digits.parse().ok()?
            }
            None => 0,
        };
        let naive = date.and_hms_nano_opt(
            time.hour.into(),
            time.minute.into(),
            time.second.unwrap_or(0).into(),
            nanos,
        )?;

        Some(match time.offset {
            Some(offset) => {
                let offset = chrono::FixedOffset::east_opt(i32::from(offset.minutes()).checked_mul(60)?)?;
                DateTime::FixedOffset(naive.and_local_timezone(offset).single()?)
            }
            None => DateTime::Naive(naive),
        })
    }
}

/// Date time with or without known offset
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, PartialEq)]
pub enum DateTime {
    FixedOffset(chrono::DateTime<chrono::FixedOffset>),
    Naive(chrono::NaiveDateTime),
}

#[cfg(feature = "chrono")]
impl DateTime {
    /// Parses the Exif `YYYY:MM:DD HH:MM:SS` form
    ///
    /// Some writers use dashes or a `T` separator instead, which is accepted
    /// as well.
    pub fn from_exif(s: &str) -> Option<Self> {
        let s = s.trim_end_matches(['\0', ' ']);
        ["%Y:%m:%d %H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
            .into_iter()
            .find_map(|format| chrono::NaiveDateTime::parse_from_str(s, format).ok())
            .map(Self::Naive)
    }
}

#[cfg(feature = "chrono")]
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedOffset(d) => write!(f, "{}", d),
            Self::Naive(d) => write!(f, "{}", d),
        }
    }
}

fn digits(input: &str, s: Option<&str>) -> Result<u32, DateTimeError> {
    let s = s.ok_or_else(|| DateTimeError::new(input, "missing component"))?;
    if s.is_empty() || !s.bytes().all(|x| x.is_ascii_digit()) {
        return Err(DateTimeError::new(input, "expected digits"));
    }
    s.parse()
        .map_err(|_| DateTimeError::new(input, "number too large"))
}

fn offset(
    input: &str,
    sign: Option<&str>,
    hour: Option<&str>,
    minute: Option<&str>,
) -> Result<i16, DateTimeError> {
    let negative = match sign {
        Some("+") => false,
        Some("-") => true,
        _ => return Err(DateTimeError::new(input, "expected + or - before offset")),
    };
    let hour = digits(input, hour)?;
    let minute = digits(input, minute)?;
    if hour > 23 || minute > 59 {
        return Err(DateTimeError::new(input, "offset out of range"));
    }
    let out_of_range = || DateTimeError::new(input, "offset out of range");
    let minutes = hour
        .checked_mul(60)
        .and_then(|x| x.checked_add(minute))
        .and_then(|x| i16::try_from(x).ok())
        .ok_or_else(out_of_range)?;
    if negative {
        minutes.checked_neg().ok_or_else(out_of_range)
    } else {
        Ok(minutes)
    }
}

fn validate_date(input: &str, year: u32, month: u32, day: u32) -> Result<(), DateTimeError> {
    let leap_year = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap_year => 29,
        2 => 28,
        _ => return Err(DateTimeError::new(input, "month out of range")),
    };
    if !(1..=days).contains(&day) {
        return Err(DateTimeError::new(input, "day out of range"));
    }
    Ok(())
}

fn validate_time(input: &str, hour: u32, minute: u32, second: u32) -> Result<(), DateTimeError> {
    if hour > 23 || minute > 59 || second > 60 {
        return Err(DateTimeError::new(input, "time out of range"));
    }
    Ok(())
}
