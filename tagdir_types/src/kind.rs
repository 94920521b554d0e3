//! Every kind of directory the engine knows how to read.

use crate::rules::{PointerRule, SplitRule};

/// A kind of directory.
///
/// The kind decides three things: the name and tag labels a directory
/// shows, which of its tags point at other directories, and which of its
/// array tags are split into individual tags.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum DirectoryKind {
    /// The first IFD in a TIFF blob. Describes the main image.
    Ifd0,

    /// The Exif SubIFD, pointed to by IFD0.
    Exif,

    /// GPS info, pointed to by IFD0.
    Gps,

    /// Interoperability info, pointed to by the Exif SubIFD.
    Interop,

    /// IFD1 and anything chained after it. Usually the thumbnail.
    Thumbnail,

    /// One of the TIFF `SubIFDs`, often a full-size raw image.
    SubIfd,

    Canon,
    Nikon1,
    Nikon2,
    Olympus,
    OlympusEquipment,
    OlympusCameraSettings,
    OlympusRawDevelopment,
    OlympusImageProcessing,
    OlympusFocusInfo,
    Panasonic,
    Sony,
    Fujifilm,
    Pentax,
}

impl DirectoryKind {
    /// All kinds, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Ifd0,
        Self::Exif,
        Self::Gps,
        Self::Interop,
        Self::Thumbnail,
        Self::SubIfd,
        Self::Canon,
        Self::Nikon1,
        Self::Nikon2,
        Self::Olympus,
        Self::OlympusEquipment,
        Self::OlympusCameraSettings,
        Self::OlympusRawDevelopment,
        Self::OlympusImageProcessing,
        Self::OlympusFocusInfo,
        Self::Panasonic,
        Self::Sony,
        Self::Fujifilm,
        Self::Pentax,
    ];

    /// The human-readable directory name.
    ///
    /// ```
    /// use tagdir_types::kind::DirectoryKind;
    ///
    /// assert_eq!(DirectoryKind::Exif.name(), "Exif SubIFD");
    /// assert_eq!(DirectoryKind::Canon.name(), "Canon Makernote");
    /// ```
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ifd0 => "Exif IFD0",
            Self::Exif => "Exif SubIFD",
            Self::Gps => "GPS",
            Self::Interop => "Interoperability",
            Self::Thumbnail => "Exif Thumbnail",
            Self::SubIfd => "TIFF SubIFD",
            Self::Canon => "Canon Makernote",
            Self::Nikon1 => "Nikon Makernote",
            Self::Nikon2 => "Nikon Makernote",
            Self::Olympus => "Olympus Makernote",
            Self::OlympusEquipment => "Olympus Equipment",
            Self::OlympusCameraSettings => "Olympus Camera Settings",
            Self::OlympusRawDevelopment => "Olympus Raw Development",
            Self::OlympusImageProcessing => "Olympus Image Processing",
            Self::OlympusFocusInfo => "Olympus Focus Info",
            Self::Panasonic => "Panasonic Makernote",
            Self::Sony => "Sony Makernote",
            Self::Fujifilm => "Fujifilm Makernote",
            Self::Pentax => "Pentax Makernote",
        }
    }

    /// Whether this directory lives inside a maker note.
    pub const fn is_maker_note(&self) -> bool {
        !matches!(
            self,
            Self::Ifd0 | Self::Exif | Self::Gps | Self::Interop | Self::Thumbnail | Self::SubIfd
        )
    }

    /// The kind whose tag table this kind shares.
    ///
    /// IFD1 and TIFF SubIFDs hold the same tags as IFD0.
    pub const fn table_kind(&self) -> Self {
        match self {
            Self::Thumbnail | Self::SubIfd => Self::Ifd0,
            other => *other,
        }
    }

    /// The kind of directory found at this directory's next-IFD pointer.
    ///
    /// Only the main IFD chain is followed. Everything else ignores its
    /// next pointer.
    pub const fn follower(&self) -> Option<Self> {
        match self {
            Self::Ifd0 | Self::Thumbnail => Some(Self::Thumbnail),
            _ => None,
        }
    }

    /// Tags in this directory that point at other directories.
    pub const fn pointer_rules(&self) -> &'static [PointerRule] {
        use crate::rules::{IFD0_POINTERS, EXIF_POINTERS, OLYMPUS_POINTERS};

        match self {
            Self::Ifd0 | Self::Thumbnail => IFD0_POINTERS,
            Self::Exif => EXIF_POINTERS,
            Self::Olympus => OLYMPUS_POINTERS,
            _ => &[],
        }
    }

    /// Array tags in this directory that get split into one tag per
    /// element.
    pub const fn split_rules(&self) -> &'static [SplitRule] {
        match self {
            Self::Canon => crate::rules::CANON_SPLITS,
            _ => &[],
        }
    }

    /// The tag holding a maker note blob, if this directory can have one.
    pub const fn maker_note_tag(&self) -> Option<u16> {
        match self {
            Self::Exif => Some(0x927C),
            _ => None,
        }
    }
}

impl core::fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::DirectoryKind;

    #[test]
    fn only_the_main_chain_has_followers() {
        for kind in DirectoryKind::ALL {
            let expected = matches!(kind, DirectoryKind::Ifd0 | DirectoryKind::Thumbnail);
            assert_eq!(kind.follower().is_some(), expected, "{kind:?}");
        }
    }

    #[test]
    fn thumbnail_shares_ifd0_table() {
        assert_eq!(DirectoryKind::Thumbnail.table_kind(), DirectoryKind::Ifd0);
        assert_eq!(DirectoryKind::Gps.table_kind(), DirectoryKind::Gps);
    }

    #[test]
    fn pointer_targets_are_distinct_from_their_source() {
        for kind in DirectoryKind::ALL {
            for rule in kind.pointer_rules() {
                assert_ne!(rule.target, *kind, "{kind:?} points at itself");
            }
        }
    }
}
