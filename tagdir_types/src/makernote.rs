//! Maker note layouts, as data.
//!
//! A maker note is an opaque `UNDEFINED` blob in the Exif SubIFD. Most
//! vendors put an IFD inside it, but each one frames that IFD differently:
//! some add an ASCII signature, some embed a whole TIFF header, and they
//! disagree on what value offsets are relative to.
//!
//! Each [`MakerNoteLayout`] describes one of those framings. The engine
//! picks one with [`identify`] and follows its rules.

use crate::{kind::DirectoryKind, primitives::ByteOrder};

/// Where the maker note's IFD starts, relative to the start of the maker
/// note.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum IfdStart {
    /// The IFD starts this many bytes in.
    Fixed(usize),

    /// A full TIFF header (byte order, magic number, first-IFD offset)
    /// sits this many bytes in. The IFD is wherever the header says.
    EmbeddedTiffHeader(usize),

    /// A four-byte offset sits this many bytes in. The IFD starts that
    /// many bytes after the start of the maker note.
    PointerAt(usize),
}

/// What value offsets inside the maker note are relative to.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum OffsetBase {
    /// The outer TIFF header, like every standard IFD.
    Tiff,

    /// The first byte of the maker note.
    MakerNote,

    /// The embedded TIFF header (see [`IfdStart::EmbeddedTiffHeader`]).
    EmbeddedHeader,
}

/// How sure we are about a layout's [`OffsetBase`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum BaseRule {
    Known(OffsetBase),

    /// Files in the wild disagree. The engine uses `assumed` and records a
    /// warning on the directory it produces.
    Ambiguous { assumed: OffsetBase },
}

impl BaseRule {
    /// The base to actually use.
    pub const fn base(&self) -> OffsetBase {
        match self {
            Self::Known(base) | Self::Ambiguous { assumed: base } => *base,
        }
    }

    pub const fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }
}

/// Which byte order the maker note's IFD uses.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ByteOrderRule {
    /// Same as the Exif SubIFD holding the maker note.
    Inherit,

    /// Always this order, no matter the outer TIFF.
    Fixed(ByteOrder),

    /// An `II` or `MM` marker sits this many bytes in.
    MarkerAt(usize),
}

/// One way a vendor frames the IFD inside its maker note.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MakerNoteLayout {
    /// The kind of directory this maker note holds.
    pub kind: DirectoryKind,

    /// Prefixes the maker note may start with. Any one of them matches.
    pub signatures: &'static [&'static [u8]],

    /// Prefixes of the camera's `Make` tag (upper case). Only used for
    /// layouts without signatures.
    pub makes: &'static [&'static str],

    pub ifd_start: IfdStart,
    pub base: BaseRule,
    pub byte_order: ByteOrderRule,
}

impl MakerNoteLayout {
    /// Checks the maker note's leading bytes against this layout's
    /// signatures.
    pub fn matches_signature(&self, maker_note: &[u8]) -> bool {
        self.signatures.iter().any(|sig| maker_note.starts_with(sig))
    }

    /// Checks a `Make` value against this layout's make prefixes.
    pub fn matches_make(&self, make: &str) -> bool {
        let make = make.trim().to_ascii_uppercase();
        self.signatures.is_empty() && self.makes.iter().any(|m| make.starts_with(m))
    }
}

use {BaseRule as Br, ByteOrderRule as Bo, DirectoryKind as K, IfdStart as Is, OffsetBase as Ob};

/// Every layout we know, in match order.
pub static LAYOUTS: &[MakerNoteLayout] = &[
    MakerNoteLayout {
        kind: K::Nikon1,
        signatures: &[b"Nikon\0\x01\0"],
        makes: &[],
        ifd_start: Is::Fixed(8),
        base: Br::Known(Ob::Tiff),
        byte_order: Bo::Inherit,
    },
    MakerNoteLayout {
        kind: K::Nikon2,
        signatures: &[b"Nikon\0\x02"],
        makes: &[],
        ifd_start: Is::EmbeddedTiffHeader(10),
        base: Br::Known(Ob::EmbeddedHeader),
        byte_order: Bo::MarkerAt(10),
    },
    MakerNoteLayout {
        kind: K::Olympus,
        signatures: &[b"OLYMPUS\0"],
        makes: &[],
        ifd_start: Is::Fixed(12),
        base: Br::Known(Ob::MakerNote),
        byte_order: Bo::MarkerAt(8),
    },
    MakerNoteLayout {
        kind: K::Olympus,
        signatures: &[b"OLYMP\0", b"EPSON\0", b"AGFA \0"],
        makes: &[],
        ifd_start: Is::Fixed(8),
        base: Br::Known(Ob::Tiff),
        byte_order: Bo::Inherit,
    },
    MakerNoteLayout {
        kind: K::Panasonic,
        signatures: &[b"Panasonic\0\0\0"],
        makes: &[],
        ifd_start: Is::Fixed(12),
        base: Br::Known(Ob::Tiff),
        byte_order: Bo::Inherit,
    },
    MakerNoteLayout {
        kind: K::Sony,
        signatures: &[b"SONY DSC \0\0\0", b"SONY CAM \0\0\0"],
        makes: &[],
        ifd_start: Is::Fixed(12),
        base: Br::Known(Ob::Tiff),
        byte_order: Bo::Inherit,
    },
    MakerNoteLayout {
        kind: K::Fujifilm,
        signatures: &[b"FUJIFILM"],
        makes: &[],
        ifd_start: Is::PointerAt(8),
        base: Br::Known(Ob::MakerNote),
        byte_order: Bo::Fixed(ByteOrder::Little),
    },
    MakerNoteLayout {
        kind: K::Pentax,
        signatures: &[b"AOC\0"],
        makes: &[],
        ifd_start: Is::Fixed(6),
        base: Br::Ambiguous {
            assumed: Ob::MakerNote,
        },
        byte_order: Bo::Inherit,
    },
    // headerless, so these go by `Make`
    MakerNoteLayout {
        kind: K::Nikon2,
        signatures: &[],
        makes: &["NIKON"],
        ifd_start: Is::Fixed(0),
        base: Br::Known(Ob::Tiff),
        byte_order: Bo::Inherit,
    },
    MakerNoteLayout {
        kind: K::Canon,
        signatures: &[],
        makes: &["CANON"],
        ifd_start: Is::Fixed(0),
        base: Br::Known(Ob::Tiff),
        byte_order: Bo::Inherit,
    },
    MakerNoteLayout {
        kind: K::Sony,
        signatures: &[],
        makes: &["SONY"],
        ifd_start: Is::Fixed(0),
        base: Br::Known(Ob::Tiff),
        byte_order: Bo::Inherit,
    },
    MakerNoteLayout {
        kind: K::Pentax,
        signatures: &[],
        makes: &["PENTAX", "ASAHI"],
        ifd_start: Is::Fixed(0),
        base: Br::Known(Ob::Tiff),
        byte_order: Bo::Inherit,
    },
];

/// Picks the layout for a maker note.
///
/// Signatures win over `Make`, so a Nikon-signed note inside a file
/// claiming some other make is still read as Nikon.
///
/// ```
/// use tagdir_types::{kind::DirectoryKind, makernote::identify};
///
/// let nikon = identify(b"Nikon\0\x02\x10\0\0MM\0\x2a\0\0\0\x08", None).unwrap();
/// assert_eq!(nikon.kind, DirectoryKind::Nikon2);
///
/// let canon = identify(&[0, 3, 0, 1], Some("Canon")).unwrap();
/// assert_eq!(canon.kind, DirectoryKind::Canon);
///
/// assert!(identify(b"\0\0\0\0", Some("Leica")).is_none());
/// ```
pub fn identify(maker_note: &[u8], make: Option<&str>) -> Option<&'static MakerNoteLayout> {
    LAYOUTS
        .iter()
        .find(|layout| layout.matches_signature(maker_note))
        .or_else(|| {
            let make = make?;
            LAYOUTS.iter().find(|layout| layout.matches_make(make))
        })
}

#[cfg(test)]
mod tests {
    use super::{BaseRule, IfdStart, OffsetBase, identify};
    use crate::kind::DirectoryKind;

    #[test]
    fn olympus_two_beats_olympus_one() {
        // `OLYMPUS\0` also starts with `OLYMP`, but isn't `OLYMP\0`
        let layout = identify(b"OLYMPUS\0II\x03\0", None).unwrap();
        assert_eq!(layout.ifd_start, IfdStart::Fixed(12));
        assert_eq!(layout.base, BaseRule::Known(OffsetBase::MakerNote));

        let layout = identify(b"OLYMP\0\x01\0", None).unwrap();
        assert_eq!(layout.ifd_start, IfdStart::Fixed(8));
    }

    #[test]
    fn signature_wins_over_make() {
        let layout = identify(b"FUJIFILM\x0c\0\0\0", Some("Canon")).unwrap();
        assert_eq!(layout.kind, DirectoryKind::Fujifilm);
    }

    #[test]
    fn make_is_case_insensitive_and_trimmed() {
        let layout = identify(&[0; 8], Some("  NIKON CORPORATION ")).unwrap();
        assert_eq!(layout.kind, DirectoryKind::Nikon2);

        let layout = identify(&[0; 8], Some("Asahi Optical Co.,Ltd")).unwrap();
        assert_eq!(layout.kind, DirectoryKind::Pentax);
    }

    #[test]
    fn pentax_aoc_is_ambiguous() {
        let layout = identify(b"AOC\0MM\0\x01", Some("PENTAX")).unwrap();
        assert!(layout.base.is_ambiguous());
        assert_eq!(layout.base.base(), OffsetBase::MakerNote);
    }

    #[test]
    fn nothing_matches() {
        assert!(identify(b"", None).is_none());
        assert!(identify(b"Leica\0", Some("LEICA")).is_none());
    }
}
