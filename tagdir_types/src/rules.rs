//! Structural rules attached to directory kinds: which tags point at other
//! directories, and which array tags get split apart.

use crate::kind::DirectoryKind;

/// A tag whose value is the offset of another directory.
///
/// A pointer stored with a numeric type holds one offset per element
/// (`SubIFDs` may hold several). A pointer stored as `UNDEFINED` is the
/// directory itself, starting at the value's own data offset.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct PointerRule {
    pub tag: u16,
    pub target: DirectoryKind,
}

/// An array tag that is replaced by one scalar tag per element.
///
/// Element `i` becomes tag `offset + i`.
///
/// ```
/// use tagdir_types::{kind::DirectoryKind, rules::SplitRule};
///
/// let rule: &SplitRule = DirectoryKind::Canon
///     .split_rules()
///     .iter()
///     .find(|r| r.tag == 0x0001)
///     .unwrap();
///
/// assert_eq!(rule.offset, 0xC100);
/// assert_eq!(rule.tag_for(4), Some(0xC104));
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct SplitRule {
    pub tag: u16,
    pub offset: u16,
}

impl SplitRule {
    /// The synthetic tag for element `index`, if it fits in a `u16`.
    pub fn tag_for(&self, index: usize) -> Option<u16> {
        u16::try_from(index)
            .ok()
            .and_then(|i| self.offset.checked_add(i))
    }
}

pub(crate) const IFD0_POINTERS: &[PointerRule] = &[
    PointerRule {
        tag: 0x8769,
        target: DirectoryKind::Exif,
    },
    PointerRule {
        tag: 0x8825,
        target: DirectoryKind::Gps,
    },
    PointerRule {
        tag: 0x014A,
        target: DirectoryKind::SubIfd,
    },
];

pub(crate) const EXIF_POINTERS: &[PointerRule] = &[PointerRule {
    tag: 0xA005,
    target: DirectoryKind::Interop,
}];

pub(crate) const OLYMPUS_POINTERS: &[PointerRule] = &[
    PointerRule {
        tag: 0x2010,
        target: DirectoryKind::OlympusEquipment,
    },
    PointerRule {
        tag: 0x2020,
        target: DirectoryKind::OlympusCameraSettings,
    },
    PointerRule {
        tag: 0x2030,
        target: DirectoryKind::OlympusRawDevelopment,
    },
    PointerRule {
        tag: 0x2040,
        target: DirectoryKind::OlympusImageProcessing,
    },
    PointerRule {
        tag: 0x2050,
        target: DirectoryKind::OlympusFocusInfo,
    },
];

pub(crate) const CANON_SPLITS: &[SplitRule] = &[
    // camera settings
    SplitRule {
        tag: 0x0001,
        offset: 0xC100,
    },
    // focal length
    SplitRule {
        tag: 0x0002,
        offset: 0xC200,
    },
    // shot info
    SplitRule {
        tag: 0x0004,
        offset: 0xC400,
    },
    // panorama
    SplitRule {
        tag: 0x0005,
        offset: 0xC500,
    },
    // af info
    SplitRule {
        tag: 0x0012,
        offset: 0xD200,
    },
];
