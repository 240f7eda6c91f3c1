//! Overflow checked arithmetic for offsets and lengths

/// Failed integer operation with the operands, if they fit into `i128`
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Offset arithmetic {0:?} + {1:?} overflowed")]
    AddFailed(Option<i128>, Option<i128>),
    #[error("Offset arithmetic {0:?} * {1:?} overflowed")]
    MulFailed(Option<i128>, Option<i128>),
    #[error("Offset arithmetic {0:?} / {1:?} is undefined")]
    DivFailed(Option<i128>, Option<i128>),
    #[error("Value {0:?} does not fit into the target integer type")]
    ConversionFailed(Option<i128>),
}

/// Offset expression that keeps the first failure
///
/// ```
/// # use imgmeta_common::math::Checked;
/// let offset = Checked::new(8_usize);
/// assert_eq!((offset + 2_usize + 4_usize).check().unwrap(), 14);
/// assert!((Checked::new(usize::MAX) + 1_usize).check().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Checked<T>(Result<T, MathError>);

impl<T> Checked<T> {
    pub fn new(val: T) -> Self {
        Self(Ok(val))
    }

    pub fn check(self) -> Result<T, MathError> {
        self.0
    }
}

impl<T> From<T> for Checked<T> {
    fn from(val: T) -> Self {
        Self::new(val)
    }
}

/// Shadows the given variables with [`Checked`] versions
///
/// ```
/// use imgmeta_common::math::checked;
///
/// let pos = 4_usize;
/// checked![pos];
/// assert_eq!((pos + 2_usize).check().unwrap(), 6);
/// ```
#[macro_export]
macro_rules! checked [
    ($($v:ident$(,)?)*) => {
        $( let $v = $crate::math::Checked::new($v); )*
    };
];

pub use checked;

pub trait SafeAdd: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
}

pub trait SafeMul: Sized {
    fn safe_mul(self, rhs: Self) -> Result<Self, MathError>;
}

/// Fails for a zero divisor
pub trait SafeDiv: Sized {
    fn safe_div(self, rhs: Self) -> Result<Self, MathError>;
}

macro_rules! safe_ops {
    ($($t:ty),*) => {$(
        impl SafeAdd for $t {
            fn safe_add(self, rhs: $t) -> Result<$t, MathError> {
                self.checked_add(rhs)
                    .ok_or(MathError::AddFailed(self.try_into().ok(), rhs.try_into().ok()))
            }
        }

        impl SafeMul for $t {
            fn safe_mul(self, rhs: $t) -> Result<$t, MathError> {
                self.checked_mul(rhs)
                    .ok_or(MathError::MulFailed(self.try_into().ok(), rhs.try_into().ok()))
            }
        }

        impl SafeDiv for $t {
            fn safe_div(self, rhs: $t) -> Result<$t, MathError> {
                self.checked_div(rhs)
                    .ok_or(MathError::DivFailed(self.try_into().ok(), rhs.try_into().ok()))
            }
        }

        impl<R: Into<Checked<$t>>> std::ops::Add<R> for Checked<$t> {
            type Output = Self;

            fn add(self, rhs: R) -> Self {
                let rhs: Self = rhs.into();
                Self(self.0.and_then(|x| x.safe_add(rhs.0?)))
            }
        }
    )*};
}

safe_ops!(u16, u32, u64, usize);

macro_rules! to_int {
    ($trait:ident, $f:ident, [$($from:ty),*]) => {
        pub trait $trait: Sized + TryInto<$f> + TryInto<i128> + Copy {
            fn $f(self) -> Result<$f, MathError> {
                self.try_into()
                    .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
            }
        }

        $(impl $trait for $from {})*
    };
}

to_int!(ToU16, u16, [u32, u64, usize]);
to_int!(ToU32, u32, [u16, u64, usize]);
to_int!(ToU64, u64, [u16, u32, usize]);
to_int!(ToUsize, usize, [u16, u32, u64]);

/// Fill byte needed after `len` bytes to keep the next item on an even offset
///
/// ```
/// # use imgmeta_common::math::padding_even;
/// assert_eq!(padding_even(7), 1);
/// assert_eq!(padding_even(8), 0);
/// ```
pub fn padding_even(len: usize) -> usize {
    len % 2
}

/// F-number for an APEX aperture value
pub fn apex_to_f_number(apex: f64) -> f64 {
    std::f64::consts::SQRT_2.powf(apex)
}
