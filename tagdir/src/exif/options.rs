/// Knobs for reading Exif.
///
/// ```
/// use tagdir::exif::ReadOptions;
///
/// let options = ReadOptions::default()
///     .maker_notes(false)
///     .max_directories(16);
///
/// assert!(!options.reads_maker_notes());
/// assert!(options.splits_arrays());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReadOptions {
    maker_notes: bool,
    split_arrays: bool,
    max_directories: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            maker_notes: true,
            split_arrays: true,
            max_directories: 256,
        }
    }
}

impl ReadOptions {
    /// Whether to look inside maker notes. When off, the maker note stays a
    /// raw byte blob in the Exif SubIFD.
    pub fn maker_notes(mut self, yes: bool) -> Self {
        self.maker_notes = yes;
        self
    }

    /// Whether to split vendor array tags into one tag per element.
    pub fn split_arrays(mut self, yes: bool) -> Self {
        self.split_arrays = yes;
        self
    }

    /// Stop after reading this many directories.
    pub fn max_directories(mut self, limit: usize) -> Self {
        self.max_directories = limit;
        self
    }

    pub fn reads_maker_notes(&self) -> bool {
        self.maker_notes
    }

    pub fn splits_arrays(&self) -> bool {
        self.split_arrays
    }

    pub fn directory_limit(&self) -> usize {
        self.max_directories
    }
}
