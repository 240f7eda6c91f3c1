use std::fmt;
use std::str::FromStr;

/// Rational number as stored in Exif and XMP
///
/// `PartialEq` compares numerator and denominator as stored. Use
/// [`Rational::is_equivalent`] to compare the values of two fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational<T> {
    pub numerator: T,
    pub denominator: T,
}

pub type URational = Rational<u32>;
pub type SRational = Rational<i32>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RationalError {
    #[error("Invalid format for a rational: '{0}'")]
    InvalidFormat(String),
    #[error("Denominator of a rational number cannot be zero")]
    ZeroDenominator,
}

impl<T> Rational<T> {
    pub const fn new(numerator: T, denominator: T) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl<T: Into<i64> + Copy> Rational<T> {
    /// Compares the reduced forms of two fractions
    ///
    /// ```
    /// # use imgmeta_common::rational::Rational;
    /// assert!(Rational::new(1_u32, 2).is_equivalent(&Rational::new(5, 10)));
    /// assert!(!Rational::new(1_u32, 2).is_equivalent(&Rational::new(1, 3)));
    /// ```
    pub fn is_equivalent(&self, other: &Self) -> bool {
        let (a, b): (i64, i64) = (self.numerator.into(), self.denominator.into());
        let (c, d): (i64, i64) = (other.numerator.into(), other.denominator.into());
        // Products of two i64 always fit into i128
        i128::from(a).checked_mul(i128::from(d)) == i128::from(c).checked_mul(i128::from(b))
    }
}

impl<T: Into<f64> + Copy> Rational<T> {
    /// Floating point approximation, `None` if the denominator is zero
    pub fn to_f64(&self) -> Option<f64> {
        let numerator: f64 = self.numerator.into();
        let denominator: f64 = self.denominator.into();
        if denominator == 0. {
            None
        } else {
            Some(numerator / denominator)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<T: FromStr + Default + PartialEq> FromStr for Rational<T> {
    type Err = RationalError;

    /// Parses `[-]numerator/denominator`
    ///
    /// ```
    /// # use imgmeta_common::rational::*;
    /// assert_eq!("-3/4".parse::<SRational>(), Ok(Rational::new(-3, 4)));
    /// assert_eq!("1/0".parse::<URational>(), Err(RationalError::ZeroDenominator));
    /// assert!("-1/2".parse::<URational>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RationalError::InvalidFormat(s.to_string());
        let (numerator, denominator) = s.trim().split_once('/').ok_or_else(invalid)?;

        let numerator = numerator.parse().map_err(|_| invalid())?;
        let denominator: T = denominator.parse().map_err(|_| invalid())?;

        if denominator == T::default() {
            return Err(RationalError::ZeroDenominator);
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }
}
