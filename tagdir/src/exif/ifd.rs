use tagdir_types::{kind::DirectoryKind, tags};

use super::{
    directory::Directory,
    error::{DirectoryError, DirectoryErrorKind},
    reader::ByteCursor,
    value::{Entry, RawEntry, decode_entry},
};

/// Each entry is 12 bytes: tag, type, count, and value-or-offset.
const ENTRY_LEN: usize = 12;

/// A pointer from one directory to another, found while reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SubIfdPointer {
    /// The tag the pointer was stored under.
    pub tag: u16,
    pub target: DirectoryKind,

    /// Relative to the directory's base.
    pub offset: u64,
}

/// Where a maker note's bytes sit in the blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub len: usize,
}

/// Everything reading one directory produced.
///
/// The reader never follows pointers itself. It hands them back so the
/// caller can decide what to visit.
#[derive(Debug)]
pub(crate) struct DirectoryRead {
    pub directory: Directory,

    /// The raw next-IFD pointer, relative to the base. `None` when it's zero
    /// or missing.
    pub next: Option<u32>,

    pub pointers: Vec<SubIfdPointer>,
    pub maker_note: Option<Span>,
}

/// Reads the directory whose entry count sits at `start`.
///
/// Value offsets are relative to `base`. This always returns a directory,
/// even when the blob is cut short or an entry is garbage; problems are
/// recorded on the directory instead.
pub(crate) fn read_directory(
    cursor: &ByteCursor,
    start: usize,
    base: usize,
    kind: DirectoryKind,
) -> DirectoryRead {
    let mut read = DirectoryRead {
        directory: Directory::new(kind, start, cursor.order()),
        next: None,
        pointers: Vec::new(),
        maker_note: None,
    };

    let Ok(declared) = cursor.u16_at(start) else {
        read.directory
            .record(DirectoryError::on_directory(DirectoryErrorKind::NoEntryCount {
                offset: start,
            }));
        return read;
    };

    if declared == 0 {
        log::warn!("{kind} at `{start}` has zero entries.");
    }

    log::trace!("Reading `{declared}` entries for {kind}...");
    for i in 0..declared {
        let entry_at = start + 2 + ENTRY_LEN * usize::from(i);

        let Some(raw) = RawEntry::read(cursor, entry_at) else {
            // the rest of the table is gone, and the next pointer with it
            read.directory.record(DirectoryError::on_directory(
                DirectoryErrorKind::EntriesTruncated { declared, read: i },
            ));
            return read;
        };

        match decode_entry(cursor, &raw, base) {
            Ok(entry) => accept(&mut read, entry, base),
            Err(e) => read.directory.record(DirectoryError::on_tag(raw.tag, e)),
        }
    }
    log::trace!("Completed entries for {kind}!");

    let next_at = start + 2 + ENTRY_LEN * usize::from(declared);
    read.next = match cursor.u32_at(next_at) {
        Ok(0) => None,
        Ok(next) => Some(next),
        Err(_) => {
            log::debug!("{kind} at `{start}` has no next-IFD pointer.");
            None
        }
    };

    read
}

/// Stores a decoded entry, noting any pointers it holds.
fn accept(read: &mut DirectoryRead, entry: Entry, base: usize) {
    let kind = read.directory.kind();
    let Entry {
        tag,
        value,
        data_at,
    } = entry;

    if let Some(info) = tags::info(kind, tag)
        && !info.types.is_empty()
        && !info.types.contains(&value.ty())
    {
        log::warn!(
            "{kind} tag `{}` had type `{:?}`, expected one of `{:?}`. Keeping it anyway.",
            info.name,
            value.ty(),
            info.types
        );
    }

    for rule in kind.pointer_rules().iter().filter(|r| r.tag == tag) {
        if value.ty().is_bytes() {
            // the directory is the value itself
            log::trace!("{kind} tag `{tag:#06x}` holds a {} inline.", rule.target);
            read.pointers.push(SubIfdPointer {
                tag,
                target: rule.target,
                offset: data_at.saturating_sub(base) as u64,
            });
            continue;
        }

        let Some(offsets) = value.as_i64_array() else {
            log::warn!("{kind} pointer tag `{tag:#06x}` wasn't numeric. Not following it.");
            continue;
        };

        for offset in offsets {
            match u64::try_from(offset) {
                Ok(0) | Err(_) => {
                    log::debug!("{kind} pointer tag `{tag:#06x}` held `{offset}`. Skipping.")
                }
                Ok(offset) => read.pointers.push(SubIfdPointer {
                    tag,
                    target: rule.target,
                    offset,
                }),
            }
        }
    }

    if kind.maker_note_tag() == Some(tag) && value.ty().is_bytes() {
        read.maker_note = Some(Span {
            start: data_at,
            len: value.count(),
        });
    }

    if read.directory.insert(tag, value).is_some() {
        log::debug!("{kind} had tag `{tag:#06x}` more than once. Keeping the last.");
    }
}
