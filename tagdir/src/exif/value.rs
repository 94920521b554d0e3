//! Decodes one IFD entry's value.

use tagdir_types::{
    primitives::{Primitive, PrimitiveTy, Rational, SRational},
    value::{EncodedText, TagValue, TextEncoding},
};

use super::{
    error::{DirectoryErrorKind, OuttaData},
    reader::ByteCursor,
};

/// One 12-byte IFD entry, before its value is decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RawEntry {
    pub tag: u16,
    pub type_code: u16,
    pub count: u32,

    /// Where the 4-byte value-or-offset field sits in the blob.
    pub field_at: usize,
}

impl RawEntry {
    /// Reads the entry at `index`. `None` if the blob ends first.
    pub fn read(cursor: &ByteCursor, index: usize) -> Option<Self> {
        let mut c = *cursor;
        c.seek(index).ok()?;

        let tag = c.read_u16().ok()?;
        let type_code = c.read_u16().ok()?;
        let count = c.read_u32().ok()?;
        let field_at = c.position();
        c.read_bytes(4).ok()?;

        Some(Self {
            tag,
            type_code,
            count,
            field_at,
        })
    }
}

/// A decoded entry.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Entry {
    pub tag: u16,
    pub value: TagValue,

    /// Where the value's data starts in the blob. For inline values, that's
    /// the value field itself.
    pub data_at: usize,
}

/// Decodes an entry's value.
///
/// Offsets are relative to `base`. Anything wrong with the entry is returned
/// as an error for the caller to record; the entry is then skipped.
pub(crate) fn decode_entry(
    cursor: &ByteCursor,
    raw: &RawEntry,
    base: usize,
) -> Result<Entry, DirectoryErrorKind> {
    let ty = PrimitiveTy::try_from(raw.type_code).map_err(|_| {
        log::warn!("Encountered unknown field type: `{}`", raw.type_code);
        DirectoryErrorKind::UnknownType {
            code: raw.type_code,
        }
    })?;

    let size = u32::from(ty.size_bytes())
        .checked_mul(raw.count)
        .ok_or(DirectoryErrorKind::ValueTooLarge {
            ty,
            count: raw.count,
        })?;
    log::trace!("total size for field: `{size}`");

    // small values live right in the entry
    let data_at: usize = if size <= 4 {
        raw.field_at
    } else {
        let offset = cursor
            .u32_at(raw.field_at)
            .map_err(|e| out_of_bounds(e, size))?;
        let absolute = base as u64 + u64::from(offset);
        log::trace!("Value is at offset `{offset}` (absolute `{absolute}`).");

        match usize::try_from(absolute) {
            Ok(at) if cursor.contains(at, size as usize) => at,
            _ => {
                return Err(DirectoryErrorKind::ValueOutOfBounds {
                    offset: absolute,
                    len: size.into(),
                    blob_len: cursor.len(),
                });
            }
        }
    };

    let value = decode_value(cursor, ty, raw.count, data_at).map_err(|e| out_of_bounds(e, size))?;

    Ok(Entry {
        tag: raw.tag,
        value,
        data_at,
    })
}

fn out_of_bounds(e: OuttaData, size: u32) -> DirectoryErrorKind {
    DirectoryErrorKind::ValueOutOfBounds {
        offset: e.index as u64,
        len: size.into(),
        blob_len: e.len,
    }
}

fn decode_value(
    cursor: &ByteCursor,
    ty: PrimitiveTy,
    count: u32,
    at: usize,
) -> Result<TagValue, OuttaData> {
    if count == 0 {
        log::trace!("There are no stored primitives in this field.");
        return Ok(TagValue::Empty(ty));
    }

    let unit = usize::from(ty.size_bytes());
    let count = count as usize;

    if ty == PrimitiveTy::Ascii {
        let bytes = cursor.bytes_at(at, count)?.to_vec();
        return Ok(TagValue::Text(EncodedText {
            bytes,
            encoding: TextEncoding::Ascii,
        }));
    }

    // a lone byte is a number like any other
    if ty.is_bytes() && count > 1 {
        let bytes = cursor.bytes_at(at, count)?.to_vec();
        return Ok(TagValue::Bytes { bytes, ty });
    }

    let mut list = (0..count)
        .map(|i| read_primitive(cursor, ty, at + i * unit))
        .collect::<Result<Vec<Primitive>, OuttaData>>()?;

    Ok(match list.len() {
        1 => TagValue::Scalar(list.remove(0)),
        _ => TagValue::Array { list, ty },
    })
}

/// Reads one numeric primitive.
fn read_primitive(cursor: &ByteCursor, ty: PrimitiveTy, at: usize) -> Result<Primitive, OuttaData> {
    Ok(match ty {
        PrimitiveTy::Byte | PrimitiveTy::Ascii => Primitive::Byte(cursor.u8_at(at)?),
        PrimitiveTy::Undefined => Primitive::Undefined(cursor.u8_at(at)?),
        PrimitiveTy::SByte => Primitive::SByte(cursor.i8_at(at)?),
        PrimitiveTy::Short => Primitive::Short(cursor.u16_at(at)?),
        PrimitiveTy::SShort => Primitive::SShort(cursor.i16_at(at)?),
        PrimitiveTy::Long | PrimitiveTy::Ifd => Primitive::Long(cursor.u32_at(at)?),
        PrimitiveTy::SLong => Primitive::SLong(cursor.i32_at(at)?),
        PrimitiveTy::Rational => Primitive::Rational(Rational {
            numerator: cursor.u32_at(at)?,
            denominator: cursor.u32_at(at + 4)?,
        }),
        PrimitiveTy::SRational => Primitive::SRational(SRational {
            numerator: cursor.i32_at(at)?,
            denominator: cursor.i32_at(at + 4)?,
        }),
        PrimitiveTy::Float => Primitive::Float(cursor.f32_at(at)?),
        PrimitiveTy::Double => Primitive::Double(cursor.f64_at(at)?),
    })
}
