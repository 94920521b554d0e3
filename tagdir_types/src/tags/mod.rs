//! Tag tables for every [`DirectoryKind`].
//!
//! # `tags`
//!
//! Each directory kind has one or more tag enums, generated by the
//! `tag_table!` macro. An enum knows each tag's ID, its label, and (for
//! standard tags) the types it's normally stored with.
//!
//! The engine doesn't use the enums directly when reading. Instead, it asks
//! [`info`] or [`label`], which look tags up in a process-wide map built on
//! first use.
//!
//! ## Adding new tags
//!
//! Find the `tag_table!` call for the directory kind and add a listing:
//!
//! ```no_compile
//! tag_table!(enum NotRealTag => DirectoryKind::NotReal,
//!     // ...snip!
//!
//!     YourNewTag = 0x1000 => {
//!         name: "Your New Tag",
//!         types: &[Pt::Ascii],
//!     },
//! );
//! ```
//!
//! `types` may be left out. Vendor tags usually don't list them.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::{kind::DirectoryKind, primitives::PrimitiveTy};

/// Expands to the listed types, or nothing.
macro_rules! expected_types {
    () => {
        &[]
    };
    ($types:expr) => {
        $types
    };
}

/// Creates a tag enum for a directory kind.
///
/// Tag IDs must be unique within one call, but may repeat across calls.
macro_rules! tag_table {
    (enum $enum_name:ident => $kind:expr,
        $( $key_ident:ident = $key_tag:literal => {
            name: $tag_name:expr,
            $( types: $types:expr, )?
        },
    )+) => {
        #[doc = concat!("Known tags for `", stringify!($kind), "`.")]
        #[repr(u16)]
        #[non_exhaustive]
        #[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
        pub enum $enum_name {
            $(
              $key_ident = $key_tag,
            )+
        }

        impl $enum_name {
            /// Every tag in this table.
            pub const ALL: &'static [Self] = &[ $( Self::$key_ident, )+ ];

            /// Returns the directory kind this table describes.
            pub const fn kind() -> $crate::kind::DirectoryKind {
                $kind
            }

            /// Returns this tag's ID.
            pub const fn tag_id(&self) -> u16 {
                *self as u16
            }

            /// Grabs the tag's human-readable label.
            pub const fn tag_name(&self) -> &'static str {
                match self {
                    $( Self::$key_ident => $tag_name, )+
                }
            }

            /// Returns the type(s) this tag is normally stored with.
            ///
            /// Empty when the table doesn't say.
            pub const fn types(&self) -> &'static [$crate::primitives::PrimitiveTy] {
                match self {
                    $( Self::$key_ident => $crate::tags::expected_types!($($types)?), )+
                }
            }

            pub(crate) fn infos() -> impl Iterator<Item = (u16, $crate::tags::TagInfo)> {
                Self::ALL.iter().map(|t| {
                    (
                        t.tag_id(),
                        $crate::tags::TagInfo {
                            name: t.tag_name(),
                            types: t.types(),
                        },
                    )
                })
            }
        }

        impl core::convert::TryFrom<u16> for $enum_name {
            type Error = ();

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                match value {
                    $( $key_tag => Ok($enum_name::$key_ident), )+
                    _ => Err(()),
                }
            }
        }
    }
}

pub(crate) use {expected_types, tag_table};

pub mod canon;
pub mod exif;
pub mod fujifilm;
pub mod nikon;
pub mod olympus;
pub mod panasonic;
pub mod pentax;
pub mod sony;

/// What's known about one tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagInfo {
    /// The tag's label.
    pub name: &'static str,

    /// The types it's normally stored with. Empty when unknown.
    pub types: &'static [PrimitiveTy],
}

static TABLES: LazyLock<FxHashMap<DirectoryKind, FxHashMap<u16, TagInfo>>> =
    LazyLock::new(|| {
        let mut tables: FxHashMap<DirectoryKind, FxHashMap<u16, TagInfo>> = FxHashMap::default();

        let mut add = |kind: DirectoryKind, infos: &mut dyn Iterator<Item = (u16, TagInfo)>| {
            tables.entry(kind).or_default().extend(infos);
        };

        add(DirectoryKind::Ifd0, &mut exif::Ifd0Tag::infos());
        add(DirectoryKind::Exif, &mut exif::ExifTag::infos());
        add(DirectoryKind::Gps, &mut exif::GpsTag::infos());
        add(DirectoryKind::Interop, &mut exif::InteropTag::infos());

        add(DirectoryKind::Canon, &mut canon::CanonTag::infos());
        add(DirectoryKind::Canon, &mut canon::CanonCameraSettingsTag::infos());
        add(DirectoryKind::Canon, &mut canon::CanonFocalLengthTag::infos());
        add(DirectoryKind::Canon, &mut canon::CanonShotInfoTag::infos());
        add(DirectoryKind::Canon, &mut canon::CanonPanoramaTag::infos());
        add(DirectoryKind::Canon, &mut canon::CanonAfInfoTag::infos());

        add(DirectoryKind::Nikon1, &mut nikon::NikonType1Tag::infos());
        add(DirectoryKind::Nikon2, &mut nikon::NikonType2Tag::infos());

        add(DirectoryKind::Olympus, &mut olympus::OlympusTag::infos());
        add(
            DirectoryKind::OlympusEquipment,
            &mut olympus::OlympusEquipmentTag::infos(),
        );
        add(
            DirectoryKind::OlympusCameraSettings,
            &mut olympus::OlympusCameraSettingsTag::infos(),
        );

        add(DirectoryKind::Panasonic, &mut panasonic::PanasonicTag::infos());
        add(DirectoryKind::Sony, &mut sony::SonyTag::infos());
        add(DirectoryKind::Fujifilm, &mut fujifilm::FujifilmTag::infos());
        add(DirectoryKind::Pentax, &mut pentax::PentaxTag::infos());

        tables
    });

/// Every known tag for a directory kind.
///
/// Kinds without a table (like the Olympus raw development IFD) give an
/// empty map.
pub fn table(kind: DirectoryKind) -> &'static FxHashMap<u16, TagInfo> {
    static EMPTY: LazyLock<FxHashMap<u16, TagInfo>> = LazyLock::new(FxHashMap::default);

    TABLES.get(&kind.table_kind()).unwrap_or(&EMPTY)
}

/// Looks up what's known about a tag in a directory kind.
pub fn info(kind: DirectoryKind, tag: u16) -> Option<&'static TagInfo> {
    table(kind).get(&tag)
}

/// Looks up a tag's label in a directory kind.
///
/// ```
/// use tagdir_types::{kind::DirectoryKind, tags::label};
///
/// assert_eq!(label(DirectoryKind::Ifd0, 0x010F), Some("Make"));
/// assert_eq!(label(DirectoryKind::Thumbnail, 0x010F), Some("Make"));
/// assert_eq!(label(DirectoryKind::Canon, 0xC101), Some("Macro Mode"));
/// assert_eq!(label(DirectoryKind::Gps, 0x7777), None);
/// ```
pub fn label(kind: DirectoryKind, tag: u16) -> Option<&'static str> {
    info(kind, tag).map(|i| i.name)
}

#[cfg(test)]
mod tests {
    use super::{info, label, table};
    use crate::{kind::DirectoryKind, primitives::PrimitiveTy};

    #[test]
    fn tables_are_built_for_every_vendor() {
        for kind in [
            DirectoryKind::Ifd0,
            DirectoryKind::Exif,
            DirectoryKind::Gps,
            DirectoryKind::Interop,
            DirectoryKind::Canon,
            DirectoryKind::Nikon1,
            DirectoryKind::Nikon2,
            DirectoryKind::Olympus,
            DirectoryKind::OlympusEquipment,
            DirectoryKind::OlympusCameraSettings,
            DirectoryKind::Panasonic,
            DirectoryKind::Sony,
            DirectoryKind::Fujifilm,
            DirectoryKind::Pentax,
        ] {
            assert!(!table(kind).is_empty(), "no table for {kind:?}");
        }
    }

    #[test]
    fn same_id_different_kinds() {
        // 0x0001 means something else everywhere
        assert_eq!(label(DirectoryKind::Gps, 0x0001), Some("GPS Latitude Ref"));
        assert_eq!(label(DirectoryKind::Interop, 0x0001), Some("Interoperability Index"));
        assert_eq!(
            label(DirectoryKind::Canon, 0x0001),
            Some("Camera Settings Array")
        );
    }

    #[test]
    fn standard_tags_know_their_types() {
        let orientation = info(DirectoryKind::Ifd0, 0x0112).unwrap();
        assert_eq!(orientation.types, &[PrimitiveTy::Short]);
    }

    #[test]
    fn tableless_kinds_are_empty() {
        assert!(table(DirectoryKind::OlympusFocusInfo).is_empty());
    }
}
