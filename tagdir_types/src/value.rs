//! Decoded tag values and the coercions callers use to read them.
//!
//! Every coercion comes in two flavors. The `try_*` methods say why a value
//! couldn't be read as the requested type; the plain ones just give `None`.

use crate::primitives::{ByteOrder, Primitive, PrimitiveTy, Rational, SRational};

/// The value stored under one tag.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub enum TagValue {
    /// The entry declared a count of zero.
    Empty(PrimitiveTy),

    /// Exactly one numeric primitive.
    Scalar(Primitive),

    /// More than one numeric primitive.
    Array {
        /// The actual list of primitives.
        list: Vec<Primitive>,

        /// The type of primitive we're storing.
        ty: PrimitiveTy,
    },

    /// A run of `Byte`, `SByte` or `Undefined` data.
    Bytes {
        /// The raw bytes, in file order.
        bytes: Vec<u8>,

        /// Which of the byte types this came from.
        ty: PrimitiveTy,
    },

    /// An `Ascii` payload, kept as raw bytes until someone asks for a string.
    Text(EncodedText),
}

/// Text exactly as it was stored, plus the encoding it claims to use.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct EncodedText {
    pub bytes: Vec<u8>,
    pub encoding: TextEncoding,
}

/// Encodings we know how to turn into a `String`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum TextEncoding {
    /// 7-bit ASCII. Invalid bytes fall back to Latin-1 rather than failing,
    /// since plenty of cameras write UTF-8 or Latin-1 into ASCII fields.
    Ascii,
    Latin1,
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    /// The UTF-16 variant matching a byte order.
    pub const fn utf16(order: ByteOrder) -> Self {
        match order {
            ByteOrder::Little => Self::Utf16Le,
            ByteOrder::Big => Self::Utf16Be,
        }
    }

    /// Reads the 8-byte character code that prefixes Exif comments.
    ///
    /// `UNICODE` comments follow the byte order of the surrounding TIFF
    /// data. An all-zero (undefined) code is treated as ASCII. `JIS` isn't
    /// supported, so it gives `None`.
    ///
    /// ```
    /// use tagdir_types::{primitives::ByteOrder, value::TextEncoding};
    ///
    /// assert_eq!(
    ///     TextEncoding::from_comment_marker(b"UNICODE\0", ByteOrder::Big),
    ///     Some(TextEncoding::Utf16Be),
    /// );
    /// assert_eq!(
    ///     TextEncoding::from_comment_marker(b"ASCII\0\0\0", ByteOrder::Big),
    ///     Some(TextEncoding::Ascii),
    /// );
    /// assert_eq!(TextEncoding::from_comment_marker(b"JIS\0\0\0\0\0", ByteOrder::Big), None);
    /// ```
    pub fn from_comment_marker(marker: &[u8; 8], order: ByteOrder) -> Option<Self> {
        match marker {
            b"ASCII\0\0\0" | [0, 0, 0, 0, 0, 0, 0, 0] => Some(Self::Ascii),
            b"UNICODE\0" => Some(Self::utf16(order)),
            _ => None,
        }
    }

    /// Decodes `bytes`, stopping at the first NUL character.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, CoercionError> {
        match self {
            Self::Ascii => {
                let bytes = until_nul(bytes);
                Ok(match core::str::from_utf8(bytes) {
                    Ok(s) => s.to_owned(),
                    Err(_) => bytes.iter().copied().map(char::from).collect(),
                })
            }
            Self::Latin1 => Ok(until_nul(bytes).iter().copied().map(char::from).collect()),
            Self::Utf8 => core::str::from_utf8(until_nul(bytes))
                .map(ToOwned::to_owned)
                .map_err(|_| CoercionError::BadText { encoding: *self }),
            Self::Utf16Le | Self::Utf16Be => decode_utf16(bytes, *self),
        }
    }
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|b| *b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// A byte order mark, when present, beats the requested endianness.
fn decode_utf16(bytes: &[u8], encoding: TextEncoding) -> Result<String, CoercionError> {
    let (little, bytes) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (encoding == TextEncoding::Utf16Le, bytes),
    };

    let units = bytes
        .chunks_exact(2)
        .map(|pair| match little {
            true => u16::from_le_bytes([pair[0], pair[1]]),
            false => u16::from_be_bytes([pair[0], pair[1]]),
        })
        .take_while(|unit| *unit != 0);

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| CoercionError::BadText { encoding })
}

/// Why a value couldn't be read as the requested type.
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub enum CoercionError {
    /// The directory doesn't have this tag.
    MissingTag { tag: u16 },

    /// The entry has no values at all.
    Empty,

    /// A single value was requested, but there are several.
    NotScalar { count: usize },

    /// The stored type can't be turned into the requested one.
    WrongType {
        found: PrimitiveTy,
        wanted: &'static str,
    },

    /// The value doesn't fit in the requested integer type.
    OutOfRange { value: i64 },

    /// A rational had a zero denominator.
    ZeroDenominator,

    /// The bytes weren't valid in the given encoding.
    BadText { encoding: TextEncoding },

    /// Text was stored, but it didn't hold the requested kind of value.
    Unparseable { text: String, wanted: &'static str },

    /// The text uses a character code we don't decode.
    UnsupportedEncoding { marker: [u8; 8] },
}

impl core::fmt::Display for CoercionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingTag { tag } => write!(f, "No value for tag `{tag:#06x}`."),
            Self::Empty => f.write_str("The entry holds zero values."),
            Self::NotScalar { count } => write!(
                f,
                "Asked for a single value, but the entry holds `{count}` of them."
            ),
            Self::WrongType { found, wanted } => {
                write!(f, "Can't read a `{found:?}` value as {wanted}.")
            }
            Self::OutOfRange { value } => {
                write!(f, "Value `{value}` doesn't fit the requested integer type.")
            }
            Self::ZeroDenominator => f.write_str("Rational has a zero denominator."),
            Self::BadText { encoding } => write!(f, "Text wasn't valid `{encoding:?}`."),
            Self::Unparseable { text, wanted } => {
                write!(f, "Text `{text}` couldn't be read as {wanted}.")
            }
            Self::UnsupportedEncoding { marker } => write!(
                f,
                "Unsupported character code: `{}`",
                String::from_utf8_lossy(marker).trim_end_matches('\0')
            ),
        }
    }
}

impl core::error::Error for CoercionError {}

impl TagValue {
    /// Which primitive type the value was stored as.
    pub fn ty(&self) -> PrimitiveTy {
        match self {
            TagValue::Empty(ty) => *ty,
            TagValue::Scalar(p) => p.ty(),
            TagValue::Array { ty, .. } | TagValue::Bytes { ty, .. } => *ty,
            TagValue::Text(_) => PrimitiveTy::Ascii,
        }
    }

    /// How many primitives are present.
    pub fn count(&self) -> usize {
        match self {
            TagValue::Empty(_) => 0,
            TagValue::Scalar(_) => 1,
            TagValue::Array { list, .. } => list.len(),
            TagValue::Bytes { bytes, .. } => bytes.len(),
            TagValue::Text(t) => t.bytes.len(),
        }
    }

    /// Every numeric primitive in the value, in order.
    ///
    /// Byte runs are expanded into one primitive per byte. Text yields
    /// nothing.
    pub fn primitives(&self) -> Vec<Primitive> {
        match self {
            TagValue::Empty(_) | TagValue::Text(_) => Vec::new(),
            TagValue::Scalar(p) => vec![*p],
            TagValue::Array { list, .. } => list.clone(),
            TagValue::Bytes { bytes, ty } => bytes
                .iter()
                .map(|b| match ty {
                    PrimitiveTy::SByte => Primitive::SByte(*b as i8),
                    PrimitiveTy::Undefined => Primitive::Undefined(*b),
                    _ => Primitive::Byte(*b),
                })
                .collect(),
        }
    }

    /// The single primitive stored here.
    fn try_single(&self) -> Result<Primitive, CoercionError> {
        match self {
            TagValue::Scalar(p) => Ok(*p),
            TagValue::Empty(_) => Err(CoercionError::Empty),
            TagValue::Bytes { bytes, .. } if bytes.len() == 1 => Ok(self.primitives()[0]),
            TagValue::Array { list, .. } => Err(CoercionError::NotScalar { count: list.len() }),
            TagValue::Bytes { bytes, .. } => Err(CoercionError::NotScalar { count: bytes.len() }),
            TagValue::Text(_) => Err(CoercionError::WrongType {
                found: PrimitiveTy::Ascii,
                wanted: "a number",
            }),
        }
    }

    /// Reads the value as one whole number.
    ///
    /// Numeric text (as some cameras store ISO speeds) parses too.
    pub fn try_i64(&self) -> Result<i64, CoercionError> {
        if let TagValue::Text(_) = self {
            let text = self.try_string(None)?;
            return text.trim().parse::<i64>().map_err(|_| CoercionError::Unparseable {
                text,
                wanted: "an integer",
            });
        }

        let p = self.try_single()?;
        p.as_i64().ok_or(CoercionError::WrongType {
            found: p.ty(),
            wanted: "an integer",
        })
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.try_i64().ok()
    }

    pub fn try_i32(&self) -> Result<i32, CoercionError> {
        let value = self.try_i64()?;
        i32::try_from(value).map_err(|_| CoercionError::OutOfRange { value })
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.try_i32().ok()
    }

    pub fn try_u32(&self) -> Result<u32, CoercionError> {
        let value = self.try_i64()?;
        u32::try_from(value).map_err(|_| CoercionError::OutOfRange { value })
    }

    pub fn as_u32(&self) -> Option<u32> {
        self.try_u32().ok()
    }

    /// Reads every primitive as a whole number.
    pub fn try_i64_array(&self) -> Result<Vec<i64>, CoercionError> {
        if let TagValue::Text(_) = self {
            return Err(CoercionError::WrongType {
                found: PrimitiveTy::Ascii,
                wanted: "integers",
            });
        }

        self.primitives()
            .iter()
            .map(|p| {
                p.as_i64().ok_or(CoercionError::WrongType {
                    found: p.ty(),
                    wanted: "integers",
                })
            })
            .collect()
    }

    pub fn as_i64_array(&self) -> Option<Vec<i64>> {
        self.try_i64_array().ok()
    }

    /// Reads the value as an unsigned rational. Whole numbers become `n/1`.
    pub fn try_rational(&self) -> Result<Rational, CoercionError> {
        match self.try_single()? {
            Primitive::Rational(r) => Ok(r),
            p => match p.as_i64().map(u32::try_from) {
                Some(Ok(numerator)) => Ok(Rational {
                    numerator,
                    denominator: 1,
                }),
                _ => Err(CoercionError::WrongType {
                    found: p.ty(),
                    wanted: "a rational",
                }),
            },
        }
    }

    pub fn as_rational(&self) -> Option<Rational> {
        self.try_rational().ok()
    }

    /// Reads the value as a signed rational. Whole numbers become `n/1`.
    pub fn try_srational(&self) -> Result<SRational, CoercionError> {
        match self.try_single()? {
            Primitive::SRational(r) => Ok(r),
            Primitive::Rational(r) => match (i32::try_from(r.numerator), i32::try_from(r.denominator)) {
                (Ok(numerator), Ok(denominator)) => Ok(SRational {
                    numerator,
                    denominator,
                }),
                _ => Err(CoercionError::OutOfRange {
                    value: r.numerator.into(),
                }),
            },
            p => match p.as_i64().map(i32::try_from) {
                Some(Ok(numerator)) => Ok(SRational {
                    numerator,
                    denominator: 1,
                }),
                _ => Err(CoercionError::WrongType {
                    found: p.ty(),
                    wanted: "a signed rational",
                }),
            },
        }
    }

    pub fn as_srational(&self) -> Option<SRational> {
        self.try_srational().ok()
    }

    /// Reads the value as a float, dividing rationals.
    pub fn try_f64(&self) -> Result<f64, CoercionError> {
        if let TagValue::Text(_) = self {
            let text = self.try_string(None)?;
            return text.trim().parse::<f64>().map_err(|_| CoercionError::Unparseable {
                text,
                wanted: "a number",
            });
        }

        let p = self.try_single()?;
        match p {
            Primitive::Rational(Rational { denominator: 0, .. })
            | Primitive::SRational(SRational { denominator: 0, .. }) => {
                Err(CoercionError::ZeroDenominator)
            }
            _ => p.as_f64().ok_or(CoercionError::WrongType {
                found: p.ty(),
                wanted: "a number",
            }),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.try_f64().ok()
    }

    /// The raw bytes of a byte run or a text value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TagValue::Bytes { bytes, .. } => Some(bytes),
            TagValue::Text(t) => Some(&t.bytes),
            _ => None,
        }
    }

    /// Reads the value as a string.
    ///
    /// `encoding` overrides the encoding the value declares. Byte runs are
    /// decoded too (defaulting to ASCII), and numbers are rendered the way
    /// [`Display`](core::fmt::Display) renders them.
    pub fn try_string(&self, encoding: Option<TextEncoding>) -> Result<String, CoercionError> {
        match self {
            TagValue::Text(t) => encoding.unwrap_or(t.encoding).decode(&t.bytes),
            TagValue::Bytes { bytes, .. } => encoding.unwrap_or(TextEncoding::Ascii).decode(bytes),
            TagValue::Empty(_) => Err(CoercionError::Empty),
            TagValue::Scalar(_) | TagValue::Array { .. } => Ok(self.to_string()),
        }
    }

    pub fn as_string(&self) -> Option<String> {
        self.try_string(None).ok()
    }

    /// Reads an Exif-style comment: an 8-byte character code, then the text.
    ///
    /// `order` is the byte order of the surrounding TIFF data, which
    /// `UNICODE` comments without a byte order mark follow.
    pub fn try_comment(&self, order: ByteOrder) -> Result<String, CoercionError> {
        let bytes = self.as_bytes().ok_or(CoercionError::WrongType {
            found: self.ty(),
            wanted: "a comment",
        })?;

        let Some((marker, text)) = bytes.split_first_chunk::<8>() else {
            // too short to carry a character code. treat it as plain text
            return TextEncoding::Ascii.decode(bytes).map(|s| s.trim().to_owned());
        };

        let encoding = TextEncoding::from_comment_marker(marker, order)
            .ok_or(CoercionError::UnsupportedEncoding { marker: *marker })?;
        encoding.decode(text).map(|s| s.trim().to_owned())
    }

    pub fn as_comment(&self, order: ByteOrder) -> Option<String> {
        self.try_comment(order).ok()
    }
}

impl core::fmt::Display for TagValue {
    /// A generic rendering: text as text, everything else space-separated.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TagValue::Empty(_) => Ok(()),
            TagValue::Scalar(p) => write!(f, "{p}"),
            TagValue::Text(t) => match t.encoding.decode(&t.bytes) {
                Ok(s) => f.write_str(&s),
                Err(_) => write!(f, "[{} bytes of text]", t.bytes.len()),
            },
            TagValue::Bytes { bytes, .. } if bytes.len() > 16 => {
                write!(f, "[{} bytes]", bytes.len())
            }
            TagValue::Array { .. } | TagValue::Bytes { .. } => {
                let mut first = true;
                for p in self.primitives() {
                    if !first {
                        f.write_str(" ")?;
                    }
                    first = false;
                    write!(f, "{p}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(EncodedText {
            bytes: value.as_bytes().to_vec(),
            encoding: TextEncoding::Ascii,
        })
    }
}

impl From<Primitive> for TagValue {
    fn from(value: Primitive) -> Self {
        TagValue::Scalar(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoercionError, EncodedText, TagValue, TextEncoding};
    use crate::primitives::{ByteOrder, Primitive, PrimitiveTy, Rational};

    #[test]
    fn integers_from_arrays_are_absent() {
        let v = TagValue::Array {
            list: vec![Primitive::Short(1), Primitive::Short(2)],
            ty: PrimitiveTy::Short,
        };
        assert_eq!(v.as_i64(), None);
        assert_eq!(v.try_i64(), Err(CoercionError::NotScalar { count: 2 }));
        assert_eq!(v.as_i64_array(), Some(vec![1, 2]));
    }

    #[test]
    fn rationals_divide_and_zero_denominators_are_absent() {
        let good = TagValue::Scalar(Primitive::Rational(Rational {
            numerator: 28,
            denominator: 10,
        }));
        assert_eq!(good.as_f64(), Some(2.8));

        let bad = TagValue::Scalar(Primitive::Rational(Rational {
            numerator: 28,
            denominator: 0,
        }));
        assert_eq!(bad.as_f64(), None);
        assert_eq!(bad.try_f64(), Err(CoercionError::ZeroDenominator));
    }

    #[test]
    fn integers_promote_to_rationals() {
        let v = TagValue::Scalar(Primitive::Short(4));
        assert_eq!(
            v.as_rational(),
            Some(Rational {
                numerator: 4,
                denominator: 1
            })
        );
    }

    #[test]
    fn ascii_stops_at_nul() {
        let v = TagValue::Text(EncodedText {
            bytes: b"Canon EOS\0\0junk".to_vec(),
            encoding: TextEncoding::Ascii,
        });
        assert_eq!(v.as_string().as_deref(), Some("Canon EOS"));
    }

    #[test]
    fn numeric_text_reads_as_integer() {
        let v = TagValue::from(" 400 ");
        assert_eq!(v.as_i64(), Some(400));
        assert!(TagValue::from("abc").as_i64().is_none());
    }

    #[test]
    fn utf16_comments() {
        let mut bytes = b"UNICODE\0".to_vec();
        for unit in "héllo".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        let v = TagValue::Bytes {
            bytes,
            ty: PrimitiveTy::Undefined,
        };
        assert_eq!(v.as_comment(ByteOrder::Big).as_deref(), Some("héllo"));

        // the same bytes read as little-endian give different text
        assert_ne!(v.as_comment(ByteOrder::Little).as_deref(), Some("héllo"));
    }

    #[test]
    fn utf16_byte_order_mark_wins() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "xp".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(
            TextEncoding::Utf16Be.decode(&bytes).as_deref(),
            Ok("xp"),
            "BOM says little-endian"
        );
    }

    #[test]
    fn jis_comments_are_unsupported() {
        let v = TagValue::Bytes {
            bytes: b"JIS\0\0\0\0\0abc".to_vec(),
            ty: PrimitiveTy::Undefined,
        };
        assert!(matches!(
            v.try_comment(ByteOrder::Big),
            Err(CoercionError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn single_undefined_byte_is_an_integer() {
        let v = TagValue::Bytes {
            bytes: vec![7],
            ty: PrimitiveTy::Undefined,
        };
        assert_eq!(v.as_i64(), Some(7));

        let s = TagValue::Bytes {
            bytes: vec![0xFF],
            ty: PrimitiveTy::SByte,
        };
        assert_eq!(s.as_i64(), Some(-1));
    }
}
