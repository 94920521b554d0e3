//! A decoded directory and the accessors callers read it through.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone as _, Timelike as _};
use tagdir_types::{
    kind::DirectoryKind,
    primitives::{ByteOrder, Rational, SRational},
    tags,
    value::{CoercionError, TagValue, TextEncoding},
};

use super::error::DirectoryError;

/// One decoded IFD.
///
/// Tags are kept in ID order. Errors are kept in the order they were hit,
/// and never stop the rest of the directory from being read.
#[derive(Clone, Debug, PartialEq)]
pub struct Directory {
    kind: DirectoryKind,
    offset: usize,
    byte_order: ByteOrder,
    tags: BTreeMap<u16, TagValue>,
    errors: Vec<DirectoryError>,
}

impl Directory {
    pub(crate) fn new(kind: DirectoryKind, offset: usize, byte_order: ByteOrder) -> Self {
        Self {
            kind,
            offset,
            byte_order,
            tags: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    pub fn kind(&self) -> DirectoryKind {
        self.kind
    }

    /// The directory's human-readable name, like `"Exif SubIFD"`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Where the directory's entry count sits, from the start of the TIFF
    /// blob.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn tags(&self) -> &BTreeMap<u16, TagValue> {
        &self.tags
    }

    /// Every tag, in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &TagValue)> {
        self.tags.iter().map(|(tag, value)| (*tag, value))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: u16) -> bool {
        self.tags.contains_key(&tag)
    }

    /// The label for a tag in this kind of directory, if it's known.
    pub fn label(&self, tag: u16) -> Option<&'static str> {
        tags::label(self.kind, tag)
    }

    /// The label for a tag, or a placeholder naming its ID.
    pub fn label_or_unknown(&self, tag: u16) -> String {
        match self.label(tag) {
            Some(label) => label.to_owned(),
            None => format!("Unknown tag ({tag:#06x})"),
        }
    }

    pub fn errors(&self) -> &[DirectoryError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Each error as a `(label, message)` pair. Errors that aren't about a
    /// specific tag use the directory's name as their label.
    pub fn error_messages(&self) -> Vec<(String, String)> {
        self.errors
            .iter()
            .map(|e| {
                let label = match e.tag {
                    Some(tag) => self.label_or_unknown(tag),
                    None => self.name().to_owned(),
                };
                (label, e.kind.to_string())
            })
            .collect()
    }

    pub(crate) fn insert(&mut self, tag: u16, value: TagValue) -> Option<TagValue> {
        self.tags.insert(tag, value)
    }

    pub(crate) fn remove(&mut self, tag: u16) -> Option<TagValue> {
        self.tags.remove(&tag)
    }

    /// Stores an error, logging it on the way in.
    pub(crate) fn record(&mut self, error: DirectoryError) {
        if error.kind.is_warning() {
            log::warn!("{}: {error}", self.name());
        } else {
            log::error!("{}: {error}", self.name());
        }
        self.errors.push(error);
    }

    //
    // accessors
    //

    pub fn get(&self, tag: u16) -> Option<&TagValue> {
        self.tags.get(&tag)
    }

    pub fn try_get(&self, tag: u16) -> Result<&TagValue, CoercionError> {
        self.get(tag).ok_or(CoercionError::MissingTag { tag })
    }

    pub fn try_u32(&self, tag: u16) -> Result<u32, CoercionError> {
        self.try_get(tag)?.try_u32()
    }

    pub fn get_u32(&self, tag: u16) -> Option<u32> {
        self.try_u32(tag).ok()
    }

    pub fn try_i32(&self, tag: u16) -> Result<i32, CoercionError> {
        self.try_get(tag)?.try_i32()
    }

    pub fn get_i32(&self, tag: u16) -> Option<i32> {
        self.try_i32(tag).ok()
    }

    pub fn try_i64(&self, tag: u16) -> Result<i64, CoercionError> {
        self.try_get(tag)?.try_i64()
    }

    pub fn get_i64(&self, tag: u16) -> Option<i64> {
        self.try_i64(tag).ok()
    }

    pub fn try_i64_array(&self, tag: u16) -> Result<Vec<i64>, CoercionError> {
        self.try_get(tag)?.try_i64_array()
    }

    pub fn get_i64_array(&self, tag: u16) -> Option<Vec<i64>> {
        self.try_i64_array(tag).ok()
    }

    pub fn try_u16_array(&self, tag: u16) -> Result<Vec<u16>, CoercionError> {
        self.try_i64_array(tag)?
            .into_iter()
            .map(|value| u16::try_from(value).map_err(|_| CoercionError::OutOfRange { value }))
            .collect()
    }

    pub fn get_u16_array(&self, tag: u16) -> Option<Vec<u16>> {
        self.try_u16_array(tag).ok()
    }

    pub fn try_rational(&self, tag: u16) -> Result<Rational, CoercionError> {
        self.try_get(tag)?.try_rational()
    }

    pub fn get_rational(&self, tag: u16) -> Option<Rational> {
        self.try_rational(tag).ok()
    }

    pub fn try_srational(&self, tag: u16) -> Result<SRational, CoercionError> {
        self.try_get(tag)?.try_srational()
    }

    pub fn get_srational(&self, tag: u16) -> Option<SRational> {
        self.try_srational(tag).ok()
    }

    pub fn try_f64(&self, tag: u16) -> Result<f64, CoercionError> {
        self.try_get(tag)?.try_f64()
    }

    pub fn get_f64(&self, tag: u16) -> Option<f64> {
        self.try_f64(tag).ok()
    }

    pub fn get_bytes(&self, tag: u16) -> Option<&[u8]> {
        self.get(tag)?.as_bytes()
    }

    pub fn try_string(&self, tag: u16) -> Result<String, CoercionError> {
        self.try_get(tag)?.try_string(None)
    }

    pub fn get_string(&self, tag: u16) -> Option<String> {
        self.try_string(tag).ok()
    }

    /// Reads a string, ignoring the encoding the value declares.
    pub fn get_string_with(&self, tag: u16, encoding: TextEncoding) -> Option<String> {
        self.get(tag)?.try_string(Some(encoding)).ok()
    }

    pub fn try_comment(&self, tag: u16) -> Result<String, CoercionError> {
        self.try_get(tag)?.try_comment(self.byte_order)
    }

    /// Reads an Exif comment (an 8-byte character code, then text).
    pub fn get_comment(&self, tag: u16) -> Option<String> {
        self.try_comment(tag).ok()
    }

    pub fn try_date(&self, tag: u16) -> Result<NaiveDateTime, CoercionError> {
        let text = self.try_string(tag)?;
        parse_date(&text).ok_or(CoercionError::Unparseable {
            text,
            wanted: "a date",
        })
    }

    /// Reads an Exif date, like `2024:06:01 12:30:00`.
    pub fn get_date(&self, tag: u16) -> Option<NaiveDateTime> {
        self.try_date(tag).ok()
    }

    /// Reads a date, then adds the fraction of a second stored in a
    /// `SubSecTime`-style tag. A missing or broken sub-second tag is
    /// ignored.
    pub fn get_date_with_subsec(&self, date_tag: u16, subsec_tag: u16) -> Option<NaiveDateTime> {
        let date = self.get_date(date_tag)?;

        let Some(nanos) = self.get_string(subsec_tag).and_then(|s| parse_subsec(&s)) else {
            return Some(date);
        };

        Some(date.with_nanosecond(nanos).unwrap_or(date))
    }

    /// Reads a date, then pins it to the UTC offset stored in an
    /// `OffsetTime`-style tag, like `+09:00`.
    pub fn get_offset_date(&self, date_tag: u16, offset_tag: u16) -> Option<DateTime<FixedOffset>> {
        let date = self.get_date(date_tag)?;
        let offset = parse_offset(&self.get_string(offset_tag)?)?;
        offset.from_local_datetime(&date).single()
    }
}

/// Exif dates use colons in the date part. Some writers use dashes or a
/// `T`, and some leave out the time.
fn parse_date(text: &str) -> Option<NaiveDateTime> {
    const FORMATS: &[&str] = &[
        "%Y:%m:%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y:%m:%d %H:%M",
        "%Y-%m-%d %H:%M",
    ];
    let text = text.trim();

    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
        .or_else(|| {
            ["%Y:%m:%d", "%Y-%m-%d"]
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `"5"` is half a second, `"05"` a twentieth.
fn parse_subsec(text: &str) -> Option<u32> {
    let digits: String = text.trim().chars().take(9).collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let padded = format!("{digits:0<9}");
    padded.parse().ok()
}

/// `+HH:MM` or `-HH:MM`.
fn parse_offset(text: &str) -> Option<FixedOffset> {
    let text = text.trim();
    let (sign, rest) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':')?;
    let hours: i32 = hours.parse().ok().filter(|h| (0..=23).contains(h))?;
    let minutes: i32 = minutes.parse().ok().filter(|m| (0..=59).contains(m))?;
    let seconds = hours * 3600 + minutes * 60;

    FixedOffset::east_opt(sign * seconds)
}
