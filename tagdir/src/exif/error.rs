use tagdir_types::{kind::DirectoryKind, makernote::OffsetBase, primitives::PrimitiveTy};

/// This type describes the result of reading the TIFF header.
///
/// If it's the `Err` variant, there's no Exif data at all. Everything past
/// the header is reported per-directory instead. See [`DirectoryError`].
pub type ExifFatalResult<T> = Result<T, ExifFatalError>;

/// The TIFF header was unusable, so no directories could be read.
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub enum ExifFatalError {
    /// The input was too short to provide a byte order marker.
    NoByteOrderMarker { len: usize },

    /// The byte order marker was weird - it's not one of the two expected
    /// values (in ASCII, should be either `II` or `MM`).
    WeirdByteOrderMarker { found: [u8; 2] },

    /// Didn't find the TIFF magic number.
    NoTiffMagicNumber,

    /// The magic number indexes had a weird value. It's not TIFF's.
    MagicNumberWasntTiff { found: u16 },

    /// No TIFF header offset was found.
    NoTiffHeaderOffset,

    /// The header offset would place us inside the header.
    HeaderOffsetBeforeHeader { offset: u32 },

    /// The header offset points past the end of the blob.
    NotEnoughDataForHeaderOffset { offset: u32, len: usize },
}

impl core::fmt::Display for ExifFatalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoByteOrderMarker { len } => {
                write!(f, "No byte order marker was found. len: `{len}`")
            }
            Self::WeirdByteOrderMarker { found } => match core::str::from_utf8(found.as_slice()) {
                Ok(found_utf8_bom) => {
                    write!(f, "Got a weird byte-order marker: `{found_utf8_bom}`")
                }
                Err(_) => write!(f, "Got a weird byte-order marker - wasn't ASCII: {found:?}"),
            },

            Self::NoTiffMagicNumber => {
                f.write_str("No TIFF magic number found - the slice was likely cut short.")
            }
            Self::MagicNumberWasntTiff { found } => {
                write!(f, "Magic number was not TIFF! got: `{found}`")
            }
            Self::NoTiffHeaderOffset => f.write_str("No TIFF header offset was found."),
            Self::HeaderOffsetBeforeHeader { offset } => write!(
                f,
                "TIFF header offset asked us to move before the end of the header. \
                Likely a broken file - cannot continue parsing. offset: `{offset}`"
            ),
            Self::NotEnoughDataForHeaderOffset { offset, len } => write!(
                f,
                "TIFF header offset points past the end of the blob. \
                offset: `{offset}`, blob len: `{len}`"
            ),
        }
    }
}

impl core::error::Error for ExifFatalError {}

/// A random-access or sequential read ran off the end of the blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OuttaData {
    /// Where the read started.
    pub index: usize,

    /// How many bytes it wanted.
    pub wanted: usize,

    /// How long the blob is.
    pub len: usize,
}

impl core::fmt::Display for OuttaData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Ran out of data. Wanted `{}` bytes at index `{}`, but the blob is `{}` bytes long.",
            self.wanted, self.index, self.len
        )
    }
}

impl core::error::Error for OuttaData {}

/// Something went wrong inside a directory, but reading carried on.
///
/// These are stored on the [`Directory`](crate::exif::Directory) they
/// happened in, in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectoryError {
    /// The tag the problem is about, if any.
    pub tag: Option<u16>,

    pub kind: DirectoryErrorKind,
}

impl DirectoryError {
    pub(crate) fn on_tag(tag: u16, kind: DirectoryErrorKind) -> Self {
        Self {
            tag: Some(tag),
            kind,
        }
    }

    pub(crate) fn on_directory(kind: DirectoryErrorKind) -> Self {
        Self { tag: None, kind }
    }
}

impl core::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.tag {
            Some(tag) => write!(f, "tag `{tag:#06x}`: {}", self.kind),
            None => self.kind.fmt(f),
        }
    }
}

impl core::error::Error for DirectoryError {}

/// Broad groups of [`DirectoryErrorKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorFamily {
    /// Bytes weren't where the directory said they'd be.
    Structural,

    /// An entry's type code or size made no sense.
    Type,

    /// A pointer led back to a directory we'd already read.
    Cycle,

    /// A maker note couldn't be identified or framed.
    MakerNote,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DirectoryErrorKind {
    //
    // structural
    /// The directory didn't say how many entries it has.
    NoEntryCount { offset: usize },

    /// The entry table ran past the end of the blob.
    EntriesTruncated { declared: u16, read: u16 },

    /// An entry's value lies (partly) outside the blob.
    ValueOutOfBounds { offset: u64, len: u64, blob_len: usize },

    /// A pointer tag points outside the blob.
    PointerOutOfBounds { target: DirectoryKind, offset: u64 },

    //
    // type
    /// Encountered an unknown type code.
    UnknownType { code: u16 },

    /// `size * count` doesn't fit in memory, let alone the blob.
    ValueTooLarge { ty: PrimitiveTy, count: u32 },

    //
    // cycle
    /// A pointer led to a directory that was already read.
    Cycle { target: DirectoryKind, offset: usize },

    /// Reading stopped after this many directories.
    TooManyDirectories { limit: usize },

    //
    // maker notes
    /// The maker note didn't match any known layout. Its bytes are kept.
    UnrecognizedMakerNote { make: Option<String> },

    /// Files disagree on what this maker note's offsets are relative to.
    AmbiguousOffsetBase { assumed: OffsetBase },

    /// The maker note's framing (signature, embedded header, or pointer)
    /// was broken.
    BadMakerNoteHeader { reason: &'static str },
}

impl DirectoryErrorKind {
    /// The family this error belongs to.
    pub fn family(&self) -> ErrorFamily {
        match self {
            Self::NoEntryCount { .. }
            | Self::EntriesTruncated { .. }
            | Self::ValueOutOfBounds { .. }
            | Self::PointerOutOfBounds { .. } => ErrorFamily::Structural,

            Self::UnknownType { .. } | Self::ValueTooLarge { .. } => ErrorFamily::Type,

            Self::Cycle { .. } | Self::TooManyDirectories { .. } => ErrorFamily::Cycle,

            Self::UnrecognizedMakerNote { .. }
            | Self::AmbiguousOffsetBase { .. }
            | Self::BadMakerNoteHeader { .. } => ErrorFamily::MakerNote,
        }
    }

    /// Whether this is only a warning. The directory's data is still
    /// complete.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedMakerNote { .. } | Self::AmbiguousOffsetBase { .. }
        )
    }
}

impl core::fmt::Display for DirectoryErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoEntryCount { offset } => write!(
                f,
                "Directory didn't say how many entries it has. offset: `{offset}`"
            ),
            Self::EntriesTruncated { declared, read } => write!(
                f,
                "Directory entries were cut short. declared: `{declared}`, read: `{read}`"
            ),
            Self::ValueOutOfBounds {
                offset,
                len,
                blob_len,
            } => write!(
                f,
                "Value lies outside the blob. offset: `{offset}`, len: `{len}`, blob len: `{blob_len}`"
            ),
            Self::PointerOutOfBounds { target, offset } => write!(
                f,
                "Pointer to {target} lies outside the blob. offset: `{offset}`"
            ),

            Self::UnknownType { code } => write!(f, "Unknown type code: `{code}`"),
            Self::ValueTooLarge { ty, count } => write!(
                f,
                "Value is impossibly large. ty: `{ty:?}`, count: `{count}`"
            ),

            Self::Cycle { target, offset } => write!(
                f,
                "Pointer to {target} at offset `{offset}` was already visited. Skipping."
            ),
            Self::TooManyDirectories { limit } => {
                write!(f, "Stopped after reading `{limit}` directories.")
            }

            Self::UnrecognizedMakerNote { make } => match make {
                Some(make) => write!(f, "Unrecognized maker note for make `{make}`."),
                None => f.write_str("Unrecognized maker note."),
            },
            Self::AmbiguousOffsetBase { assumed } => write!(
                f,
                "Maker note offsets may be relative to either the TIFF header \
                or the maker note. Assumed: `{assumed:?}`"
            ),
            Self::BadMakerNoteHeader { reason } => write!(f, "Bad maker note header: {reason}"),
        }
    }
}
