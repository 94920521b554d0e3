//! Exif is a media metadata format primarily used by cameras.
//!
//! It lives in a TIFF structure: a short header, then a web of IFDs (Image
//! File Directories) that point at each other. Each IFD entry carries a tag
//! ID, a primitive type, a count, and either the value itself or an offset
//! to it.
//!
//! Vendors hide their own IFDs inside the Exif maker note, each framed a
//! little differently. Those are found through the layout table in
//! [`tagdir_types::makernote`].
//!
//! Reading never gives up after the header. Broken entries, bad pointers,
//! and loops are recorded on the directory where they were found.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tagdir_types::{kind::DirectoryKind, makernote::identify, primitives::ByteOrder};

use self::{
    error::{DirectoryError, DirectoryErrorKind, ExifFatalError, ExifFatalResult},
    ifd::{DirectoryRead, read_directory},
    reader::ByteCursor,
};

pub use self::{directory::Directory, options::ReadOptions};

mod directory;
pub mod error;
mod ifd;
mod makernote;
mod options;
pub mod reader;
mod split;
mod value;

/// The TIFF header is a byte order marker, a magic number, and the offset of
/// IFD0.
const HEADER_LEN: usize = 8;

/// Extracted information from an Exif metadata block.
#[derive(Clone, Debug, PartialEq)]
pub struct Exif {
    /// The byte order of the TIFF header.
    pub byte_order: ByteOrder,

    /// Every directory found, in the order it was read (breadth-first).
    pub directories: Vec<Directory>,
}

impl Exif {
    /// Parses the given TIFF blob with the default [`ReadOptions`].
    pub fn new(blob: &[u8]) -> ExifFatalResult<Self> {
        Self::with_options(blob, &ReadOptions::default())
    }

    /// Parses the given TIFF blob.
    ///
    /// Only a broken TIFF header is fatal. Everything after that is
    /// recorded on the directories themselves.
    pub fn with_options(blob: &[u8], options: &ReadOptions) -> ExifFatalResult<Self> {
        let byte_order = parse_blob_byte_order(blob)?;
        let cursor = ByteCursor::new(blob, byte_order);

        parse_tiff_magic_number(&cursor)?;
        let first_ifd = parse_tiff_header_offset(&cursor)?;

        let mut walk = Walk {
            cursor,
            options,
            queue: VecDeque::new(),
            visited: FxHashSet::default(),
            directories: Vec::new(),
        };

        // if there are no IFDs, do an early return
        if first_ifd as usize == blob.len() {
            log::trace!("There's no more input. Assuming there are zero IFDs.");
            return Ok(Self {
                byte_order,
                directories: walk.directories,
            });
        }

        walk.queue.push_back(Pending {
            kind: DirectoryKind::Ifd0,
            offset: u64::from(first_ifd),
            base: 0,
            order: byte_order,
            referrer: None,
            notes: Vec::new(),
        });
        walk.run();

        Ok(Self {
            byte_order,
            directories: walk.directories,
        })
    }

    /// The first directory of a kind.
    pub fn directory(&self, kind: DirectoryKind) -> Option<&Directory> {
        self.directories.iter().find(|d| d.kind() == kind)
    }

    /// Every directory of a kind, in reading order.
    pub fn directories_of(&self, kind: DirectoryKind) -> impl Iterator<Item = &Directory> {
        self.directories.iter().filter(move |d| d.kind() == kind)
    }

    /// The camera maker, from IFD0's `Make` tag.
    pub fn make(&self) -> Option<String> {
        self.directory(DirectoryKind::Ifd0)?.get_string(0x010F)
    }

    /// Every tag in every directory as `(directory name, tag label,
    /// description)`.
    pub fn describe_all(&self) -> Vec<(&'static str, String, String)> {
        self.directories
            .iter()
            .flat_map(|d| {
                d.iter().filter_map(move |(tag, _)| {
                    let description = crate::describe::describe(d, tag)?;
                    Some((d.name(), d.label_or_unknown(tag), description))
                })
            })
            .collect()
    }
}

/// Finds the byte order of the Exif blob.
fn parse_blob_byte_order(blob: &[u8]) -> ExifFatalResult<ByteOrder> {
    log::trace!("Looking for the BOM bytes...");
    let Some(marker) = blob.first_chunk::<2>() else {
        log::error!("Couldn't find byte order marker!");
        return Err(ExifFatalError::NoByteOrderMarker { len: blob.len() });
    };

    match ByteOrder::from_marker(*marker) {
        Some(order) => Ok(order).inspect(|o| log::trace!("Byte order is: {o:?}")),

        // found a weird bom!
        None => {
            let e = ExifFatalError::WeirdByteOrderMarker { found: *marker };
            log::error!("Couldn't parse out Exif! err: {e}");
            Err(e)
        }
    }
}

/// Ensures we're working with the correct kind of file.
fn parse_tiff_magic_number(cursor: &ByteCursor) -> ExifFatalResult<()> {
    log::trace!("Getting magic number...");
    let magic_number = cursor.u16_at(2).map_err(|_| {
        log::error!("Couldn't find TIFF magic number!");
        ExifFatalError::NoTiffMagicNumber
    })?;

    if magic_number != 42 {
        log::error!("Magic number wasn't for TIFF. got: `{magic_number}`");
        return Err(ExifFatalError::MagicNumberWasntTiff {
            found: magic_number,
        });
    }

    log::trace!("Magic number was good!");
    Ok(())
}

/// Grabs the offset of IFD0, from the start of the blob.
fn parse_tiff_header_offset(cursor: &ByteCursor) -> ExifFatalResult<u32> {
    let offset = cursor.u32_at(4).map_err(|_| {
        log::error!("Didn't find a TIFF header offset!");
        ExifFatalError::NoTiffHeaderOffset
    })?;
    log::trace!("found offset: `{offset}`");

    if (offset as usize) < HEADER_LEN {
        log::error!("Exif blob placed offset inside the header! Can't continue parsing.");
        return Err(ExifFatalError::HeaderOffsetBeforeHeader { offset });
    }

    if offset as usize > cursor.len() {
        log::error!("Exif blob placed offset past the end! Can't continue parsing.");
        return Err(ExifFatalError::NotEnoughDataForHeaderOffset {
            offset,
            len: cursor.len(),
        });
    }

    Ok(offset)
}

/// A directory waiting to be read.
#[derive(Debug)]
struct Pending {
    kind: DirectoryKind,

    /// Relative to `base`.
    offset: u64,
    base: usize,
    order: ByteOrder,

    /// Index of the directory that pointed here.
    referrer: Option<usize>,

    /// Errors to record on the directory once it's read.
    notes: Vec<DirectoryError>,
}

/// Breadth-first traversal state.
struct Walk<'a> {
    cursor: ByteCursor<'a>,
    options: &'a ReadOptions,
    queue: VecDeque<Pending>,

    /// Absolute offsets of every directory already read.
    visited: FxHashSet<usize>,

    directories: Vec<Directory>,
}

impl Walk<'_> {
    fn run(&mut self) {
        while let Some(pending) = self.queue.pop_front() {
            if self.directories.len() >= self.options.directory_limit() {
                let limit = self.options.directory_limit();
                log::warn!("Hit the directory limit of `{limit}`. Stopping.");
                self.record_on(
                    pending.referrer,
                    DirectoryError::on_directory(DirectoryErrorKind::TooManyDirectories { limit }),
                );
                self.queue.clear();
                break;
            }

            self.visit(pending);
        }
    }

    /// Records an error on a directory that's already been read.
    fn record_on(&mut self, index: Option<usize>, error: DirectoryError) {
        match index.and_then(|i| self.directories.get_mut(i)) {
            Some(directory) => directory.record(error),
            None => log::error!("Error with nowhere to go: {error}"),
        }
    }

    fn visit(&mut self, pending: Pending) {
        let Pending {
            kind,
            offset,
            base,
            order,
            referrer,
            notes,
        } = pending;

        // make sure it's in the blob at all
        let start = match usize::try_from(base as u64 + offset) {
            Ok(start) if start < self.cursor.len() => start,
            _ => {
                self.record_on(
                    referrer,
                    DirectoryError::on_directory(DirectoryErrorKind::PointerOutOfBounds {
                        target: kind,
                        offset,
                    }),
                );
                return;
            }
        };

        // ...and that we haven't been here before
        if !self.visited.insert(start) {
            self.record_on(
                referrer,
                DirectoryError::on_directory(DirectoryErrorKind::Cycle {
                    target: kind,
                    offset: start,
                }),
            );
            return;
        }

        log::debug!("Reading {kind} at `{start}` (base `{base}`, {order:?})...");
        let DirectoryRead {
            mut directory,
            next,
            pointers,
            maker_note,
        } = read_directory(&self.cursor.with_order(order), start, base, kind);

        for note in notes {
            directory.record(note);
        }

        if self.options.splits_arrays() {
            split::split_arrays(&mut directory);
        }

        let index = self.directories.len();
        self.directories.push(directory);

        // queue everything it points to
        for pointer in pointers {
            log::trace!(
                "{kind} tag `{:#06x}` points to {} at `{}`.",
                pointer.tag,
                pointer.target,
                pointer.offset
            );
            self.queue.push_back(Pending {
                kind: pointer.target,
                offset: pointer.offset,
                base,
                order,
                referrer: Some(index),
                notes: Vec::new(),
            });
        }

        if let Some(span) = maker_note {
            if self.options.reads_maker_notes() {
                self.queue_maker_note(index, span, base, order);
            } else {
                log::trace!("Not reading the maker note, as asked.");
            }
        }

        match (next, kind.follower()) {
            (Some(next), Some(follower)) => self.queue.push_back(Pending {
                kind: follower,
                offset: u64::from(next),
                base,
                order,
                referrer: Some(index),
                notes: Vec::new(),
            }),
            (Some(next), None) => {
                log::trace!("Ignoring {kind}'s next-IFD pointer (`{next}`).")
            }
            (None, _) => (),
        }
    }

    /// Identifies a maker note and queues its IFD.
    fn queue_maker_note(&mut self, index: usize, span: ifd::Span, base: usize, order: ByteOrder) {
        let make = self
            .directories
            .iter()
            .find(|d| d.kind() == DirectoryKind::Ifd0)
            .and_then(|d| d.get_string(0x010F));

        let note = self
            .cursor
            .bytes_at(span.start, span.len)
            .unwrap_or_default();
        let Some(layout) = identify(note, make.as_deref()) else {
            self.record_on(
                Some(index),
                DirectoryError::on_tag(
                    0x927C,
                    DirectoryErrorKind::UnrecognizedMakerNote { make },
                ),
            );
            return;
        };

        let cursor = self.cursor.with_order(order);
        let located = match makernote::locate(&cursor, span, layout, base) {
            Ok(located) => located,
            Err(e) => {
                // still hand back an (empty) directory for the maker note
                let mut directory = Directory::new(layout.kind, span.start, order);
                directory.record(DirectoryError::on_directory(e));
                self.directories.push(directory);
                return;
            }
        };

        let mut notes = Vec::new();
        if layout.base.is_ambiguous() {
            notes.push(DirectoryError::on_directory(
                DirectoryErrorKind::AmbiguousOffsetBase {
                    assumed: layout.base.base(),
                },
            ));
        }

        self.queue.push_back(Pending {
            kind: located.kind,
            offset: located.ifd_at.saturating_sub(located.base) as u64,
            base: located.base,
            order: located.order,
            referrer: Some(index),
            notes,
        });
    }
}

#[cfg(test)]
mod tests {
    use tagdir_types::primitives::ByteOrder;

    use super::{
        Exif, error::ExifFatalError, parse_blob_byte_order, parse_tiff_header_offset,
        parse_tiff_magic_number, reader::ByteCursor,
    };
    use crate::util::logger;

    /// Checks that we're able to parse byte order properly.
    #[test]
    fn byte_order() {
        logger();

        assert_eq!(parse_blob_byte_order(b"II"), Ok(ByteOrder::Little));
        assert_eq!(parse_blob_byte_order(b"MM"), Ok(ByteOrder::Big));
        assert_eq!(
            parse_blob_byte_order(b"other"),
            Err(ExifFatalError::WeirdByteOrderMarker { found: *b"ot" }),
            "other strings aren't indicative of byte order"
        );
        assert_eq!(
            parse_blob_byte_order(b"I"),
            Err(ExifFatalError::NoByteOrderMarker { len: 1 })
        );
    }

    /// Checks if we can parse the TIFF header correctly.
    #[test]
    fn tiff_header() {
        logger();

        let mut backing_bytes = Vec::new();
        backing_bytes.extend_from_slice(b"II");
        backing_bytes.extend_from_slice(42_u16.to_le_bytes().as_slice());
        backing_bytes.extend_from_slice(8_u32.to_le_bytes().as_slice());

        let cursor = ByteCursor::new(&backing_bytes, ByteOrder::Little);
        assert_eq!(parse_tiff_magic_number(&cursor), Ok(()));
        assert_eq!(parse_tiff_header_offset(&cursor), Ok(8));

        // the same bytes read big-endian aren't TIFF
        let cursor = cursor.with_order(ByteOrder::Big);
        assert_eq!(
            parse_tiff_magic_number(&cursor),
            Err(ExifFatalError::MagicNumberWasntTiff { found: 0x2a00 })
        );
    }

    /// Ensures that headers with weird offsets (i.e. < 8) fail to parse.
    #[test]
    fn tiff_header_offset_inside_header() {
        logger();

        for offset in [0_u32, 7] {
            let mut backing_bytes = Vec::new();
            backing_bytes.extend_from_slice(b"MM");
            backing_bytes.extend_from_slice(42_u16.to_be_bytes().as_slice());
            backing_bytes.extend_from_slice(offset.to_be_bytes().as_slice());

            assert_eq!(
                Exif::new(&backing_bytes),
                Err(ExifFatalError::HeaderOffsetBeforeHeader { offset })
            );
        }
    }

    #[test]
    fn no_ifds() {
        logger();

        let mut backing_bytes = Vec::new();
        backing_bytes.extend_from_slice(b"II");
        backing_bytes.extend_from_slice(42_u16.to_le_bytes().as_slice());
        backing_bytes.extend_from_slice(8_u32.to_le_bytes().as_slice());

        let exif = Exif::new(&backing_bytes).unwrap();
        assert!(exif.directories.is_empty());
    }

    #[test]
    fn parses_minimal_exif() {
        logger();

        let mut backing_bytes = Vec::new();
        backing_bytes.extend_from_slice(b"II");
        backing_bytes.extend_from_slice(42_u16.to_le_bytes().as_slice());
        backing_bytes.extend_from_slice(9_u32.to_le_bytes().as_slice());
        backing_bytes.push(u8::MAX); // push a junk byte! should be ignored.

        // there's only one field in this IFD
        backing_bytes.extend_from_slice(1_u16.to_le_bytes().as_slice());
        backing_bytes.extend_from_slice(0x0100_u16.to_le_bytes().as_slice());
        backing_bytes.extend_from_slice(3_u16.to_le_bytes().as_slice());
        backing_bytes.extend_from_slice(1_u32.to_le_bytes().as_slice());
        backing_bytes.extend_from_slice(1920_u16.to_le_bytes().as_slice());
        backing_bytes.extend_from_slice(0_u16.to_le_bytes().as_slice());

        // no other IFDs are after this one
        backing_bytes.extend_from_slice(0_u32.to_le_bytes().as_slice());

        let exif = Exif::new(&backing_bytes).unwrap();
        assert_eq!(exif.byte_order, ByteOrder::Little);
        assert_eq!(exif.directories.len(), 1);

        let ifd0 = &exif.directories[0];
        assert_eq!(ifd0.name(), "Exif IFD0");
        assert_eq!(ifd0.offset(), 9);
        assert_eq!(ifd0.get_u32(0x0100), Some(1920));
        assert!(!ifd0.has_errors());
    }
}
