//! Picks a container format by looking at a file's first few bytes.
//!
//! ```
//! use tagdir::magic_number::{Container, MagicNumber};
//!
//! // a TIFF header, with no IFDs after it
//! let file: &[u8] = b"II*\0\x08\0\0\0";
//!
//! // `detect` only looks at the magic number
//! assert_eq!(tagdir::detect(&file), Some(MagicNumber::Tiff));
//!
//! // `open` also takes the file apart
//! let container: Container = tagdir::open(&file).unwrap();
//! assert_eq!(container.magic_number(), MagicNumber::Tiff);
//! assert!(container.exif().unwrap().unwrap().directories.is_empty());
//! ```

use crate::{
    MetadataProvider as _, ReadError,
    exif::{Exif, ReadOptions, error::ExifFatalResult},
    providers::{jpeg::Jpeg, tiff::Tiff},
};

/// Builds [`MagicNumber`], [`Container`], [`detect`] and [`open`] from a
/// list of providers.
///
/// Each provider is named by its type, which doubles as the variant name.
/// Earlier providers win when more than one magic number matches.
macro_rules! containers {
    ($($provider:ident),+ $(,)?) => {
        /// A container format we know how to find Exif in.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum MagicNumber {
            $($provider,)+
        }

        /// A file that's been taken apart by its provider.
        #[derive(Clone, Debug)]
        pub enum Container {
            $($provider($provider),)+
        }

        impl MagicNumber {
            /// Same as [`detect`].
            pub fn new(input: &impl AsRef<[u8]>) -> Option<Self> {
                detect(input)
            }
        }

        impl Container {
            pub fn magic_number(&self) -> MagicNumber {
                match self {
                    $(Self::$provider(_) => MagicNumber::$provider,)+
                }
            }

            /// The raw TIFF blob inside the file, if it has one.
            pub fn tiff_payload(&self) -> Option<&[u8]> {
                match self {
                    $(Self::$provider(p) => p.tiff_payload(),)+
                }
            }
        }

        $(
            impl From<$provider> for Container {
                fn from(value: $provider) -> Self {
                    Self::$provider(value)
                }
            }
        )+

        /// Finds a file's container format from its magic number alone.
        pub fn detect(input: &impl AsRef<[u8]>) -> Option<MagicNumber> {
            let input = input.as_ref();
            $(
                if $provider::magic_number(input) {
                    log::trace!("Magic number matched `{}`.", stringify!($provider));
                    return Some(MagicNumber::$provider);
                }
            )+

            log::debug!("No container format matched.");
            None
        }

        /// Detects a file's container format, then takes the file apart.
        ///
        /// # Errors
        ///
        /// [`ReadError::UnknownContainer`] when nothing matched, or the
        /// provider's own error when the file was broken.
        pub fn open(input: &impl AsRef<[u8]>) -> Result<Container, ReadError> {
            match detect(input).ok_or(ReadError::UnknownContainer)? {
                $(
                    MagicNumber::$provider => $provider::new(input)
                        .map(Container::$provider)
                        .map_err(|e| {
                            log::error!("`{}` provider failed: {e}", stringify!($provider));
                            ReadError::from(e)
                        }),
                )+
            }
        }
    };
}

containers!(Jpeg, Tiff);

impl Container {
    /// Decodes the file's Exif with the default options.
    ///
    /// `None` means the container had no Exif at all.
    pub fn exif(&self) -> Option<ExifFatalResult<Exif>> {
        self.exif_with(&ReadOptions::default())
    }

    /// Like [`Container::exif`], with options.
    pub fn exif_with(&self, options: &ReadOptions) -> Option<ExifFatalResult<Exif>> {
        let tiff = self.tiff_payload()?;
        Some(Exif::with_options(tiff, options))
    }
}
