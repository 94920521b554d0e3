/// A JPEG's segments couldn't be walked far enough to find its Exif.
///
/// Positions count from the start of the file.
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub enum JpegError {
    /// The file didn't open with `FF D8`.
    NoStartOfImage,

    /// Expected a marker's `0xFF` here.
    NotAMarker { at: usize, found: u8 },

    /// The file ended partway through the marker starting here.
    TruncatedMarker { at: usize },

    /// A segment's length was less than the two bytes it takes up itself.
    LengthTooShort { code: u8, len: u16 },

    /// A segment's payload ran past the end of the file.
    TruncatedSegment {
        code: u8,

        /// Payload bytes the length field asked for.
        wanted: usize,
        left: usize,
    },
}

impl core::fmt::Display for JpegError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoStartOfImage => f.write_str("Not a JPEG: no `SOI` marker at the start."),
            Self::NotAMarker { at, found } => {
                write!(f, "Expected a JPEG marker at `{at}`, but found `{found:#04x}`.")
            }
            Self::TruncatedMarker { at } => {
                write!(f, "JPEG ended inside the marker at `{at}`.")
            }
            Self::LengthTooShort { code, len } => write!(
                f,
                "JPEG segment `{code:#04x}` claimed a length of `{len}`, \
                which can't even hold the length itself."
            ),
            Self::TruncatedSegment { code, wanted, left } => write!(
                f,
                "JPEG segment `{code:#04x}` wanted `{wanted}` bytes, \
                but only `{left}` were left."
            ),
        }
    }
}

impl core::error::Error for JpegError {}
