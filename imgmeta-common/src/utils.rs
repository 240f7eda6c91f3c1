/// Adds conversions `from` and `into` integer to enums
///
/// Takes an enum that must have a `#[repr()]` as first meta field and assigns a
/// value to all enum variants.
///
/// ```
/// # use imgmeta_common::utils::convertible_enum;
/// convertible_enum!(
///     #[repr(u8)]
///     #[derive(Debug, PartialEq)]
///     pub enum Test {
///         Val1 = 1,
///         Val2 = 2,
///     }
/// );
/// let int: u8 = Test::Val2.into();
/// assert_eq!(int, 2);
/// assert_eq!(Test::from(2), Test::Val2);
/// assert_eq!(Test::from(3), Test::Unknown(3));
/// ```
#[macro_export]
macro_rules! convertible_enum {
    (#[repr($type:ty)]$(#[$meta:meta])* $visibility:vis enum $enum_name:ident {
        $($(#[$variant_meta:meta])* $variant_name:ident = $variant_value:expr,)*
    }) => {
        #[repr($type)]
        $(#[$meta])*
        $visibility enum $enum_name {
            $($(#[$variant_meta])* $variant_name = $variant_value,)*
            Unknown($type)
        }

        impl std::convert::From<$type> for $enum_name {
            fn from(v: $type) -> Self {
                match v {
                    $($variant_value => Self::$variant_name,)*
                    other => Self::Unknown(other),
                }
            }
        }

        impl std::convert::From<$enum_name> for $type {
            fn from(v: $enum_name) -> $type {
                match v {
                    $($enum_name::$variant_name => $variant_value,)*
                    $enum_name::Unknown(other) => other,
                }
            }
        }
    }
}

pub use convertible_enum;

/// Formats bytes as decimal values separated by spaces
///
/// ```
/// # use imgmeta_common::utils::bytes_to_decimal;
/// assert_eq!(bytes_to_decimal(b"0221"), "48 50 50 49");
/// ```
pub fn bytes_to_decimal(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses bytes given as decimal values separated by whitespace
///
/// ```
/// # use imgmeta_common::utils::decimal_to_bytes;
/// assert_eq!(decimal_to_bytes("48 50 50 49 ").unwrap(), b"0221");
/// assert!(decimal_to_bytes("48 256").is_none());
/// ```
pub fn decimal_to_bytes(s: &str) -> Option<Vec<u8>> {
    s.split_ascii_whitespace().map(|x| x.parse().ok()).collect()
}
