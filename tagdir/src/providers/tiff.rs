//! TIFF files (and the raw formats built on them) are their own Exif
//! payload.

use crate::MetadataProvider;

/// A TIFF file.
#[derive(Clone, Debug)]
pub struct Tiff {
    blob: Vec<u8>,
}

/// A file that didn't start with a TIFF header.
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub struct NotTiff;

impl core::fmt::Display for NotTiff {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("The file didn't start with a TIFF header (`II*\\0` or `MM\\0*`).")
    }
}

impl core::error::Error for NotTiff {}

impl MetadataProvider for Tiff {
    type ConstructionError = NotTiff;

    fn magic_number(input: &[u8]) -> bool {
        input.starts_with(b"II*\0") || input.starts_with(b"MM\0*")
    }

    fn new(
        input: &impl AsRef<[u8]>,
    ) -> Result<Self, <Self as MetadataProvider>::ConstructionError> {
        let input = input.as_ref();
        if !Self::magic_number(input) {
            log::error!("Not a TIFF file!");
            return Err(NotTiff);
        }

        Ok(Self {
            blob: input.to_vec(),
        })
    }

    fn tiff_payload(&self) -> Option<&[u8]> {
        Some(&self.blob)
    }
}
