//! Finds the IFD inside a maker note by following its layout.

use tagdir_types::{
    kind::DirectoryKind,
    makernote::{ByteOrderRule, IfdStart, MakerNoteLayout, OffsetBase},
    primitives::ByteOrder,
};

use super::{error::DirectoryErrorKind, ifd::Span, reader::ByteCursor};

/// Where to read a maker note's IFD from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Located {
    pub kind: DirectoryKind,

    /// The IFD's entry count, from the start of the blob.
    pub ifd_at: usize,

    /// What the IFD's value offsets are relative to.
    pub base: usize,

    pub order: ByteOrder,
}

fn bad(reason: &'static str) -> DirectoryErrorKind {
    DirectoryErrorKind::BadMakerNoteHeader { reason }
}

/// Applies a layout to the maker note at `span`.
///
/// `tiff_base` is the base of the directory holding the maker note.
pub(crate) fn locate(
    cursor: &ByteCursor,
    span: Span,
    layout: &MakerNoteLayout,
    tiff_base: usize,
) -> Result<Located, DirectoryErrorKind> {
    let note = cursor
        .bytes_at(span.start, span.len)
        .map_err(|_| bad("maker note lies outside the blob"))?;

    let order = match layout.byte_order {
        ByteOrderRule::Inherit => cursor.order(),
        ByteOrderRule::Fixed(order) => order,
        ByteOrderRule::MarkerAt(n) => {
            let marker: [u8; 2] = note
                .get(n..n + 2)
                .and_then(|m| m.try_into().ok())
                .ok_or(bad("maker note too short for its byte order marker"))?;
            ByteOrder::from_marker(marker).ok_or(bad("maker note has a weird byte order marker"))?
        }
    };
    let reader = cursor.with_order(order);

    let (ifd_at, header_at) = match layout.ifd_start {
        IfdStart::Fixed(n) => (span.start + n, None),

        IfdStart::EmbeddedTiffHeader(n) => {
            let header_at = span.start + n;
            let magic = reader
                .u16_at(header_at + 2)
                .map_err(|_| bad("embedded TIFF header was cut short"))?;
            if magic != 42 {
                log::warn!("Embedded TIFF header had magic number `{magic}`.");
                return Err(bad("embedded TIFF header has the wrong magic number"));
            }
            let offset = reader
                .u32_at(header_at + 4)
                .map_err(|_| bad("embedded TIFF header has no IFD offset"))?;

            (header_at + offset as usize, Some(header_at))
        }

        IfdStart::PointerAt(n) => {
            if n + 4 > span.len {
                return Err(bad("maker note too short for its IFD pointer"));
            }
            let offset = reader
                .u32_at(span.start + n)
                .map_err(|_| bad("maker note too short for its IFD pointer"))?;

            (span.start + offset as usize, None)
        }
    };

    let base = match layout.base.base() {
        OffsetBase::Tiff => tiff_base,
        OffsetBase::MakerNote => span.start,
        OffsetBase::EmbeddedHeader => header_at.unwrap_or(span.start),
    };

    log::debug!(
        "{} maker note: IFD at `{ifd_at}`, base `{base}`, order `{order:?}`.",
        layout.kind
    );
    Ok(Located {
        kind: layout.kind,
        ifd_at,
        base,
        order,
    })
}
