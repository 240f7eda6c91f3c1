macro_rules! name_or_ident {
    ($name:literal ; $id:ident) => {
        $name
    };
    (; $id:ident) => {
        stringify!($id)
    };
}

macro_rules! print_or_value {
    () => {
        $crate::registry::exif::Print::Value
    };
    ($print:ident) => {
        $crate::registry::exif::Print::$print
    };
}

/// Generates the Exif tag table and a [`Field`](crate::exif::Field) marker
/// per tag
///
/// Tags that share a name with a tag in another IFD get a distinct marker
/// identifier and their key name given as `Ident = "Name"`.
macro_rules! make_exif_tags {
    ($(
        $(#[$attr:meta])*
        ($tag:literal, $id:ident $(= $name:literal)?, $ifd:ident, $ty:ident, $label:literal, $desc:literal $(, print = $print:ident)?)
    ),*$(,)?) => {
        pub static EXIF_TAGS: &[ExifTagInfo] = &[
            $(
                ExifTagInfo {
                    tag: $crate::exif::Tag($tag),
                    ifd: $crate::exif::Ifd::$ifd,
                    name: $crate::registry::macros::name_or_ident!($($name)? ; $id),
                    label: $label,
                    description: $desc,
                    type_: $crate::exif::Type::$ty,
                    print: $crate::registry::macros::print_or_value!($($print)?),
                },
            )*
        ];

        /// Exif fields as types
        pub mod field {
            $(
                $(#[$attr])*
                #[derive(Copy, Clone, Debug)]
                pub struct $id;

                impl $crate::exif::Field for $id {
                    const NAME: &'static str = $crate::registry::macros::name_or_ident!($($name)? ; $id);
                    const TAG: $crate::exif::Tag = $crate::exif::Tag($tag);
                    const IFD: $crate::exif::Ifd = $crate::exif::Ifd::$ifd;
                }
            )*
        }
    };
}

macro_rules! repeatable {
    (R) => {
        true
    };
    (NR) => {
        false
    };
}

macro_rules! make_iptc_datasets {
    ($(
        ($record:literal, $number:literal, $name:ident, $title:literal, $ty:ident, $repeat:ident, $min:literal, $max:literal, $desc:literal)
    ),*$(,)?) => {
        pub static IPTC_DATASETS: &[IptcDataSetInfo] = &[
            $(
                IptcDataSetInfo {
                    dataset: $crate::iptc::DataSet::new($record, $number),
                    name: stringify!($name),
                    title: $title,
                    description: $desc,
                    type_: $crate::iptc::IptcType::$ty,
                    repeatable: $crate::registry::macros::repeatable!($repeat),
                    min_len: $min,
                    max_len: $max,
                },
            )*
        ];
    };
}

macro_rules! make_xmp_properties {
    ($(
        ($prefix:literal, $name:ident, $title:literal, $ty:expr, $desc:literal)
    ),*$(,)?) => {
        pub static XMP_PROPERTIES: &[XmpPropertyInfo] = &[
            $(
                XmpPropertyInfo {
                    prefix: $prefix,
                    name: stringify!($name),
                    title: $title,
                    description: $desc,
                    type_: $ty,
                },
            )*
        ];
    };
}

pub(crate) use {
    make_exif_tags, make_iptc_datasets, make_xmp_properties, name_or_ident, print_or_value,
    repeatable,
};
