//! # Providers
//!
//! Providers represent a source of Exif, like a JPEG file, or a TIFF-based
//! raw file.
//!
//! Each provider has a struct with a `MetadataProvider` implementation. This
//! allows a consistent interface for obtaining metadata from different media
//! sources.

pub mod jpeg;
pub mod tiff;
