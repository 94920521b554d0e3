use crate::{
    exif::error::ExifFatalError,
    providers::{jpeg::JpegError, tiff::NotTiff},
};

/// Why [`crate::read`] couldn't hand back any Exif.
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub enum ReadError {
    /// The file wasn't any format we know how to take apart.
    UnknownContainer,

    /// The file looked like a JPEG, but its markers were broken.
    Jpeg(JpegError),

    /// The file was fine, but carried no Exif.
    NoExif,

    /// The Exif's TIFF header was unusable.
    Exif(ExifFatalError),
}

impl core::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::UnknownContainer => {
                f.write_str("The file's format wasn't recognized. Supported: JPEG, TIFF.")
            }
            ReadError::Jpeg(e) => write!(f, "Failed to read the JPEG container. err: {e}"),
            ReadError::NoExif => f.write_str("The file has no Exif metadata."),
            ReadError::Exif(e) => write!(f, "Failed to parse Exif. err: {e}"),
        }
    }
}

impl core::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ReadError::Jpeg(e) => Some(e),
            ReadError::Exif(e) => Some(e),
            ReadError::UnknownContainer | ReadError::NoExif => None,
        }
    }
}

impl From<ExifFatalError> for ReadError {
    fn from(value: ExifFatalError) -> Self {
        Self::Exif(value)
    }
}

impl From<JpegError> for ReadError {
    fn from(value: JpegError) -> Self {
        Self::Jpeg(value)
    }
}

// only reachable if the TIFF magic number check and the provider disagree
impl From<NotTiff> for ReadError {
    fn from(_: NotTiff) -> Self {
        Self::UnknownContainer
    }
}
