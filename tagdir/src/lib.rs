//! # `tagdir`
//!
//! A library to decode the TIFF tag directories that carry Exif metadata,
//! including the vendor "maker note" directories cameras hide inside them.
//!
//! ## Usage
//!
//! ```
//! use tagdir::{Exif, kind::DirectoryKind};
//!
//! // a big-endian TIFF blob with one IFD0 entry: Orientation = 6
//! let blob: &[u8] = &[
//!     b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08,
//!     0x00, 0x01,
//!     0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x06, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00,
//! ];
//!
//! let exif = Exif::new(blob).unwrap();
//! let ifd0 = exif.directory(DirectoryKind::Ifd0).unwrap();
//!
//! assert_eq!(ifd0.get_u32(0x0112), Some(6));
//! assert_eq!(ifd0.label(0x0112), Some("Orientation"));
//! assert_eq!(
//!     tagdir::describe::describe(ifd0, 0x0112).as_deref(),
//!     Some("Right side, top (Rotate 90 CW)"),
//! );
//! ```
//!
//! ## Errors
//!
//! Only a broken TIFF header stops decoding. Every other problem (a value
//! pointing past the end, a directory pointing at itself, a maker note we
//! don't recognize) is recorded on the directory where it was found, and
//! reading carries on.

#![forbid(unsafe_code)]

use crate::exif::error::ExifFatalResult;

pub mod describe;
pub mod error;
pub mod exif;
pub mod magic_number;
pub mod providers;

pub use error::ReadError;
pub use exif::{Directory, Exif, ReadOptions, error::ExifFatalError};
pub use magic_number::{detect, open};
pub use tagdir_types::{kind, makernote, primitives, tags, value};

/// A media file that may carry Exif.
///
/// Each file format is a "provider" - it'll yield its metadata through parsing.
pub trait MetadataProvider: Clone + core::fmt::Debug + Sized + Send + Sync {
    /// An error that can occur when calling [`MetadataProvider::new`].
    type ConstructionError: Clone
        + core::fmt::Debug
        + PartialEq
        + PartialOrd
        + core::error::Error
        + Sized
        + Send
        + Sync;

    /// Checks whether the input looks like this kind of file.
    fn magic_number(input: &[u8]) -> bool;

    /// Takes the media file apart, finding its Exif payload.
    fn new(input: &impl AsRef<[u8]>)
    -> Result<Self, <Self as MetadataProvider>::ConstructionError>;

    /// The raw TIFF blob carrying this file's Exif, if there is one.
    fn tiff_payload(&self) -> Option<&[u8]>;

    /// Parses the file's Exif.
    ///
    /// This returns `None` if the file has no Exif metadata.
    ///
    /// # Errors
    ///
    /// This only returns an error when the TIFF header itself is broken.
    fn exif(&self) -> Option<ExifFatalResult<Exif>> {
        self.exif_with(&ReadOptions::default())
    }

    /// Like [`MetadataProvider::exif`], with options.
    fn exif_with(&self, options: &ReadOptions) -> Option<ExifFatalResult<Exif>> {
        let tiff = self.tiff_payload()?;
        Some(Exif::with_options(tiff, options).inspect_err(|e| {
            log::error!("Failed to parse Exif! err: {e}");
        }))
    }
}

/// Finds the Exif in a JPEG or TIFF file and decodes it.
pub fn read(input: &impl AsRef<[u8]>) -> Result<Exif, ReadError> {
    read_with(input, &ReadOptions::default())
}

/// Like [`read`], with options.
pub fn read_with(input: &impl AsRef<[u8]>, options: &ReadOptions) -> Result<Exif, ReadError> {
    let exif = open(input)?
        .exif_with(options)
        .ok_or(ReadError::NoExif)?;
    Ok(exif?)
}

/// Internal utility methods.
pub(crate) mod util {
    /// Helper function to initialize the logger for testing.
    #[cfg(test)]
    pub fn logger() {
        _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::max())
            .format_file(true)
            .format_line_number(true)
            .try_init();
    }
}
