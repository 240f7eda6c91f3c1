use std::fmt;
use std::str::FromStr;

/// Location in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: Coord,
    pub lon: Coord,
}

impl Location {
    pub fn new_from_coord(lat: Coord, lon: Coord) -> Self {
        Self { lat, lon }
    }

    /// Location from the Exif representation of reference and degrees,
    /// minutes, seconds
    pub fn from_ref_coord(
        lat_ref: LatRef,
        lat: (f64, f64, f64),
        lon_ref: LonRef,
        lon: (f64, f64, f64),
    ) -> Self {
        let lat = Coord::from_sign_deg_min_sec(lat_ref.as_sign(), lat);
        let lon = Coord::from_sign_deg_min_sec(lon_ref.as_sign(), lon);

        Self { lat, lon }
    }

    /// Location as `geo:` URI
    ///
    /// The precision of the coordinates is limited to six decimal places.
    ///
    /// ```
    /// # use imgmeta_common::geography::*;
    /// let loc = Location::from_ref_coord(
    ///     LatRef::North,
    ///     (52., 32., 37.118),
    ///     LonRef::East,
    ///     (13., 23., 0.679),
    /// );
    /// assert_eq!(loc.geo_uri(), "geo:52.543644,13.383522");
    /// ```
    pub fn geo_uri(&self) -> String {
        let lat = self.lat.0;
        let lon = self.lon.0;
        format!("geo:{lat:.6},{lon:.6}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord(pub f64);

impl Coord {
    /// Coordinate from degrees, minutes, seconds
    ///
    /// ```
    /// # use imgmeta_common::geography::*;
    /// let ang = Coord::from_deg_min_sec((-89., 24., 2.2));
    /// assert_eq!((ang.0 * 100_000.).round() / 100_000., -89.40061);
    /// ```
    pub fn from_deg_min_sec((deg, min, sec): (f64, f64, f64)) -> Self {
        let sign = if deg.is_sign_negative() { -1. } else { 1. };
        Coord(deg + sign * min / 60. + sign * sec / 60. / 60.)
    }

    pub fn from_sign_deg_min_sec(sign: f64, deg_min_sec: (f64, f64, f64)) -> Self {
        Self(sign * Self::from_deg_min_sec(deg_min_sec).0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatRef {
    North,
    South,
}

impl LatRef {
    pub fn as_sign(&self) -> f64 {
        match self {
            Self::North => 1.,
            Self::South => -1.,
        }
    }
}

impl TryFrom<&str> for LatRef {
    type Error = InvalidRef;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim_end_matches('\0') {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            v => Err(InvalidRef(v.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LonRef {
    East,
    West,
}

impl LonRef {
    pub fn as_sign(&self) -> f64 {
        match self {
            Self::East => 1.,
            Self::West => -1.,
        }
    }
}

impl TryFrom<&str> for LonRef {
    type Error = InvalidRef;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim_end_matches('\0') {
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            v => Err(InvalidRef(v.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid GPS reference: '{0}'")]
pub struct InvalidRef(pub String);

/// GPS coordinate in the XMP `GPSCoordinate` form
///
/// The string form is `DDD,MM,SSk` or `DDD,MM.mmk` where `k` is one of `N`,
/// `S`, `E`, `W`. Fractional minutes are converted to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsCoordinate {
    pub degrees: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid GPS coordinate '{0}'")]
pub struct InvalidGpsCoordinate(pub String);

impl GpsCoordinate {
    pub fn new(
        degrees: u8,
        minutes: u8,
        seconds: u8,
        direction: Direction,
    ) -> Result<Self, InvalidGpsCoordinate> {
        let max_degrees = match direction {
            Direction::North | Direction::South => 90,
            Direction::East | Direction::West => 180,
        };
        if degrees > max_degrees || minutes > 60 || seconds > 60 {
            return Err(InvalidGpsCoordinate(format!(
                "{degrees},{minutes},{seconds}{}",
                direction.as_char()
            )));
        }
        Ok(Self {
            degrees,
            minutes,
            seconds,
            direction,
        })
    }

    /// Signed decimal degrees
    pub fn to_coord(&self) -> Coord {
        let sign = match self.direction {
            Direction::North | Direction::East => 1.,
            Direction::South | Direction::West => -1.,
        };
        Coord::from_sign_deg_min_sec(
            sign,
            (
                self.degrees.into(),
                self.minutes.into(),
                self.seconds.into(),
            ),
        )
    }
}

impl FromStr for GpsCoordinate {
    type Err = InvalidGpsCoordinate;

    /// ```
    /// # use imgmeta_common::geography::*;
    /// let c: GpsCoordinate = "41,53,58N".parse().unwrap();
    /// assert_eq!(c.to_string(), "41,53,58N");
    ///
    /// let c: GpsCoordinate = "41,53.97W".parse().unwrap();
    /// assert_eq!(c.seconds, 58);
    /// assert!("95,00,00N".parse::<GpsCoordinate>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidGpsCoordinate(s.to_string());

        let direction = s
            .chars()
            .last()
            .and_then(Direction::from_char)
            .ok_or_else(invalid)?;
        let body = s.get(..s.len().saturating_sub(1)).ok_or_else(invalid)?;

        let (degrees, rest) = body.split_once(',').ok_or_else(invalid)?;
        let degrees = degrees.parse().map_err(|_| invalid())?;

        let (minutes, seconds) = if let Some((minutes, seconds)) = rest.split_once(',') {
            (
                minutes.parse().map_err(|_| invalid())?,
                seconds.parse().map_err(|_| invalid())?,
            )
        } else if let Some((minutes, fraction)) = rest.split_once('.') {
            let first_digits = fraction.get(..2.min(fraction.len())).ok_or_else(invalid)?;
            let hundredths: u32 = format!("{first_digits:0<2}").parse().map_err(|_| invalid())?;
            // Hundredths of a minute to whole seconds, rounded
            let seconds = hundredths
                .checked_mul(6)
                .and_then(|x| x.checked_add(5))
                .and_then(|x| x.checked_div(10))
                .and_then(|x| u8::try_from(x).ok())
                .ok_or_else(invalid)?;
            (minutes.parse().map_err(|_| invalid())?, seconds)
        } else {
            return Err(invalid());
        };

        Self::new(degrees, minutes, seconds, direction).map_err(|_| invalid())
    }
}

impl fmt::Display for GpsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}{}",
            self.degrees,
            self.minutes,
            self.seconds,
            self.direction.as_char()
        )
    }
}
