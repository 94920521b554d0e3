//! Human-readable descriptions of tag values.
//!
//! Each directory kind with anything interesting to say has a table of
//! [`Descriptor`]s, keyed by tag ID. Tags without an entry (or whose
//! descriptor gives up) fall back to a generic rendering of the value.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use tagdir_types::{kind::DirectoryKind, value::TagValue};

use crate::exif::Directory;

mod canon;
mod exif;
mod fujifilm;
mod nikon;
mod olympus;
mod panasonic;
mod pentax;
mod sony;

/// Turns a tag into text.
#[derive(Clone, Copy, Debug)]
pub enum Descriptor {
    /// Only needs the tag's own value.
    Value(fn(&TagValue) -> Option<String>),

    /// Needs other tags (or the byte order) of the same directory, like GPS
    /// coordinates and their hemisphere.
    Directory(fn(&Directory) -> Option<String>),
}

/// Descriptors for one directory kind.
pub type DescriptorTable = FxHashMap<u16, Descriptor>;

/// Builds a [`DescriptorTable`] for a `LazyLock`.
pub(crate) fn table(entries: &[(u16, Descriptor)]) -> DescriptorTable {
    entries.iter().copied().collect()
}

/// Grabs the descriptor table for a directory kind, if it has one.
pub fn descriptors(kind: DirectoryKind) -> Option<&'static DescriptorTable> {
    let table: &'static LazyLock<DescriptorTable> = match kind.table_kind() {
        DirectoryKind::Ifd0 => &exif::IFD0,
        DirectoryKind::Exif => &exif::EXIF,
        DirectoryKind::Gps => &exif::GPS,
        DirectoryKind::Interop => &exif::INTEROP,
        DirectoryKind::Canon => &canon::CANON,
        DirectoryKind::Nikon1 => &nikon::TYPE1,
        DirectoryKind::Nikon2 => &nikon::TYPE2,
        DirectoryKind::Olympus => &olympus::OLYMPUS,
        DirectoryKind::OlympusEquipment => &olympus::EQUIPMENT,
        DirectoryKind::OlympusCameraSettings => &olympus::CAMERA_SETTINGS,
        DirectoryKind::Panasonic => &panasonic::PANASONIC,
        DirectoryKind::Sony => &sony::SONY,
        DirectoryKind::Fujifilm => &fujifilm::FUJIFILM,
        DirectoryKind::Pentax => &pentax::PENTAX,
        _ => return None,
    };

    Some(&**table)
}

/// Describes one tag of a directory.
///
/// Returns `None` only when the tag is missing or its value renders to
/// nothing at all.
pub fn describe(directory: &Directory, tag: u16) -> Option<String> {
    let value = directory.get(tag)?;

    let described = descriptors(directory.kind())
        .and_then(|table| table.get(&tag))
        .and_then(|descriptor| match descriptor {
            Descriptor::Value(f) => f(value),
            Descriptor::Directory(f) => f(directory),
        });

    described.or_else(|| generic(value))
}

/// Text as text, rationals as `n/d`, arrays space-separated, and long byte
/// runs as a count.
pub fn generic(value: &TagValue) -> Option<String> {
    let rendered = value.to_string();
    let rendered = rendered.trim();
    (!rendered.is_empty()).then(|| rendered.to_owned())
}

/// Looks a whole-number value up in a list of names.
///
/// Values missing from the list come back as `Unknown (n)`.
pub(crate) fn lookup(value: &TagValue, names: &[(i64, &str)]) -> Option<String> {
    let v = value.as_i64()?;
    Some(name_of(v, names))
}

/// Like [`lookup`], but for the first element of an array.
pub(crate) fn lookup_first(value: &TagValue, names: &[(i64, &str)]) -> Option<String> {
    let v = *value.as_i64_array()?.first()?;
    Some(name_of(v, names))
}

pub(crate) fn name_of(v: i64, names: &[(i64, &str)]) -> String {
    names
        .iter()
        .find(|(n, _)| *n == v)
        .map(|(_, name)| (*name).to_owned())
        .unwrap_or_else(|| format!("Unknown ({v})"))
}

/// Looks a (trimmed) text value up in a list of names.
pub(crate) fn lookup_text(value: &TagValue, names: &[(&str, &str)]) -> Option<String> {
    let text = value.as_string()?;
    let text = text.trim();
    Some(
        names
            .iter()
            .find(|(t, _)| *t == text)
            .map(|(_, name)| (*name).to_owned())
            .unwrap_or_else(|| format!("Unknown ({text})")),
    )
}

/// Names each set bit, in list order.
pub(crate) fn flags<'n>(v: i64, bits: &[(i64, &'n str)]) -> Vec<&'n str> {
    bits.iter()
        .filter(|(mask, _)| v & mask != 0)
        .map(|(_, name)| *name)
        .collect()
}

/// Reinterprets an unsigned 16-bit value as signed.
pub(crate) fn signed16(v: i64) -> i64 {
    i64::from((v as u16) as i16)
}

/// Canon stores EV in 32nds, with thirds rounded to `0x0c` and `0x14`.
pub(crate) fn canon_ev(v: i64) -> f64 {
    let v = signed16(v);
    let sign = if v < 0 { -1.0 } else { 1.0 };
    let v = v.abs();

    let frac = v & 0x1f;
    let whole = (v - frac) as f64;
    let frac = match frac {
        0x0c => 32.0 / 3.0,
        0x14 => 64.0 / 3.0,
        f => f as f64,
    };

    sign * (whole + frac) / 32.0
}

/// At most two decimal places, with trailing zeros trimmed.
pub(crate) fn decimal(f: f64) -> String {
    let s = format!("{f:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" => "0".to_owned(),
        s => s.to_owned(),
    }
}

/// Exposure value, signed: `+0.33 EV`.
pub(crate) fn ev(v: f64) -> String {
    match decimal(v).as_str() {
        "0" => "0 EV".to_owned(),
        d if v > 0.0 => format!("+{d} EV"),
        d => format!("{d} EV"),
    }
}

pub(crate) fn fnumber(f: f64) -> String {
    format!("f/{f:.1}")
}

/// Shutter speed, as a fraction when it's under a second.
pub(crate) fn exposure_time(seconds: f64) -> Option<String> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }

    Some(match seconds < 1.0 {
        true => format!("1/{:.0} sec", (1.0 / seconds).round()),
        false => format!("{} sec", decimal(seconds)),
    })
}

/// APEX aperture value to f-number.
pub(crate) fn apex_aperture(av: f64) -> f64 {
    2_f64.powf(av / 2.0)
}

/// APEX time value to seconds.
pub(crate) fn apex_time(tv: f64) -> f64 {
    2_f64.powf(-tv)
}

/// Four ASCII digits as a version number (`0230` → `2.30`).
///
/// Anything else is joined with dots, byte by byte.
pub(crate) fn version(value: &TagValue) -> Option<String> {
    let bytes = value.as_bytes()?;

    if bytes.len() == 4 && bytes.iter().all(u8::is_ascii_digit) {
        let major: u32 = core::str::from_utf8(&bytes[..2]).ok()?.parse().ok()?;
        let minor = core::str::from_utf8(&bytes[2..]).ok()?;
        return Some(format!("{major}.{minor}"));
    }

    Some(
        bytes
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join("."),
    )
}

/// Each element of a numeric value as a float.
pub(crate) fn floats(value: &TagValue) -> Option<Vec<f64>> {
    value.primitives().iter().map(|p| p.as_f64()).collect()
}

/// Three rationals as degrees, minutes, and seconds.
pub(crate) fn dms(value: &TagValue) -> Option<String> {
    let [d, m, s] = floats(value)?[..] else {
        return None;
    };
    Some(format!("{}° {}' {}\"", decimal(d), decimal(m), decimal(s)))
}

/// `min-max mm f/min-max`, from four rationals.
pub(crate) fn lens_range(value: &TagValue) -> Option<String> {
    let [short, long, wide, narrow] = floats(value)?[..] else {
        return None;
    };

    let focal = match short == long {
        true => format!("{}mm", decimal(short)),
        false => format!("{}-{}mm", decimal(short), decimal(long)),
    };
    let aperture = match wide == narrow {
        true => format!("f/{}", decimal(wide)),
        false => format!("f/{}-{}", decimal(wide), decimal(narrow)),
    };

    Some(format!("{focal} {aperture}"))
}

/// The UTF-16LE strings Windows writes into IFD0, no matter the byte order.
pub(crate) fn xp_string(value: &TagValue) -> Option<String> {
    let bytes = value.as_bytes()?;
    tagdir_types::value::TextEncoding::Utf16Le
        .decode(bytes)
        .ok()
        .map(|s| s.trim().to_owned())
}
