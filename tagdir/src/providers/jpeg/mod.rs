//! JPEG is an older image format designed with old-school compression in mind.
//!
//! Its Exif lives in an `APP1` segment, right after an `Exif\0\0` signature.

use crate::MetadataProvider;

mod error;
mod parse;

pub use error::JpegError;

/// A JPEG file.
#[derive(Clone, Debug)]
pub struct Jpeg {
    /// The TIFF blob from the first Exif `APP1` segment.
    exif: Option<Vec<u8>>,
}

impl MetadataProvider for Jpeg {
    type ConstructionError = JpegError;

    fn magic_number(input: &[u8]) -> bool {
        parse::magic_number(input)
    }

    fn new(
        input: &impl AsRef<[u8]>,
    ) -> Result<Self, <Self as MetadataProvider>::ConstructionError> {
        let exif = parse::find_exif(input.as_ref())?.map(<[u8]>::to_vec);
        Ok(Self { exif })
    }

    fn tiff_payload(&self) -> Option<&[u8]> {
        self.exif.as_deref()
    }
}
