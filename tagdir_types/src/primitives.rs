//! The building blocks of every IFD entry: byte order, type codes, and the
//! primitives those type codes describe.

/// Each TIFF blob starts with a byte order marker.
///
/// It's either `II` (Intel, for little-endian) or `MM` (Motorola, for
/// big-endian). Every directory is read in exactly one byte order, and any
/// IFD it points to inherits it unless a maker note says otherwise.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum ByteOrder {
    /// `II` for Intel, little-endian.
    Little,

    /// `MM` for Motorola. Big-endian.
    Big,
}

impl ByteOrder {
    /// Reads a two-byte marker (`II` or `MM`).
    ///
    /// ```
    /// use tagdir_types::primitives::ByteOrder;
    ///
    /// assert_eq!(ByteOrder::from_marker(*b"MM"), Some(ByteOrder::Big));
    /// assert_eq!(ByteOrder::from_marker(*b"II"), Some(ByteOrder::Little));
    /// assert_eq!(ByteOrder::from_marker(*b"XX"), None);
    /// ```
    pub const fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match marker {
            [b'I', b'I'] => Some(Self::Little),
            [b'M', b'M'] => Some(Self::Big),
            _ => None,
        }
    }

    /// The two-byte marker for this byte order.
    pub const fn marker(&self) -> [u8; 2] {
        match self {
            Self::Little => *b"II",
            Self::Big => *b"MM",
        }
    }
}

/// The type code found in each IFD entry.
#[repr(u16)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum PrimitiveTy {
    Byte = 1,
    Ascii = 2,
    Short = 3,
    Long = 4,
    Rational = 5,
    SByte = 6,
    Undefined = 7,
    SShort = 8,
    SLong = 9,
    SRational = 10,
    Float = 11,
    Double = 12,

    /// An offset to another IFD. Read exactly like a `Long`.
    Ifd = 13,
}

impl PrimitiveTy {
    /// Grabs the primitive type's size in bytes.
    ///
    /// ```
    /// use tagdir_types::primitives::PrimitiveTy;
    ///
    /// let slong: PrimitiveTy = PrimitiveTy::SLong;
    /// assert_eq!(slong.size_bytes(), 4_u8);
    /// assert_eq!(PrimitiveTy::Double.size_bytes(), 8_u8);
    /// ```
    pub const fn size_bytes(&self) -> u8 {
        match self {
            PrimitiveTy::Byte | PrimitiveTy::Ascii | PrimitiveTy::SByte | PrimitiveTy::Undefined => {
                1_u8
            }
            PrimitiveTy::Short | PrimitiveTy::SShort => 2_u8,
            PrimitiveTy::Long | PrimitiveTy::SLong | PrimitiveTy::Float | PrimitiveTy::Ifd => 4_u8,
            PrimitiveTy::Rational | PrimitiveTy::SRational | PrimitiveTy::Double => 8_u8,
        }
    }

    /// Whether values of this type are raw bytes rather than numbers.
    pub const fn is_bytes(&self) -> bool {
        matches!(
            self,
            PrimitiveTy::Byte | PrimitiveTy::SByte | PrimitiveTy::Undefined
        )
    }
}

impl TryFrom<u16> for PrimitiveTy {
    type Error = ();

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Byte),
            2 => Ok(Self::Ascii),
            3 => Ok(Self::Short),
            4 => Ok(Self::Long),
            5 => Ok(Self::Rational),
            6 => Ok(Self::SByte),
            7 => Ok(Self::Undefined),
            8 => Ok(Self::SShort),
            9 => Ok(Self::SLong),
            10 => Ok(Self::SRational),
            11 => Ok(Self::Float),
            12 => Ok(Self::Double),
            13 => Ok(Self::Ifd),

            _ => Err(()),
        }
    }
}

/// One decoded primitive.
///
/// Text is never stored as a primitive; see
/// [`TagValue::Text`](crate::value::TagValue::Text).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Primitive {
    Byte(u8),
    SByte(i8),
    Undefined(u8),
    Short(u16),
    SShort(i16),
    Long(u32),
    SLong(i32),
    Rational(Rational),
    SRational(SRational),
    Float(f32),
    Double(f64),
}

impl Primitive {
    /// Grabs the type describing this primitive.
    pub fn ty(&self) -> PrimitiveTy {
        match self {
            Primitive::Byte(_) => PrimitiveTy::Byte,
            Primitive::SByte(_) => PrimitiveTy::SByte,
            Primitive::Undefined(_) => PrimitiveTy::Undefined,
            Primitive::Short(_) => PrimitiveTy::Short,
            Primitive::SShort(_) => PrimitiveTy::SShort,
            Primitive::Long(_) => PrimitiveTy::Long,
            Primitive::SLong(_) => PrimitiveTy::SLong,
            Primitive::Rational(_) => PrimitiveTy::Rational,
            Primitive::SRational(_) => PrimitiveTy::SRational,
            Primitive::Float(_) => PrimitiveTy::Float,
            Primitive::Double(_) => PrimitiveTy::Double,
        }
    }

    /// The primitive as a whole number, if it is one.
    ///
    /// Rationals only qualify when they divide evenly.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Primitive::Byte(v) | Primitive::Undefined(v) => Some(v.into()),
            Primitive::SByte(v) => Some(v.into()),
            Primitive::Short(v) => Some(v.into()),
            Primitive::SShort(v) => Some(v.into()),
            Primitive::Long(v) => Some(v.into()),
            Primitive::SLong(v) => Some(v.into()),
            Primitive::Rational(r) => (r.denominator != 0
                && r.numerator % r.denominator == 0)
                .then(|| i64::from(r.numerator / r.denominator)),
            Primitive::SRational(r) => (r.denominator != 0
                && r.numerator.checked_rem(r.denominator) == Some(0))
            .then(|| i64::from(r.numerator) / i64::from(r.denominator)),
            Primitive::Float(_) | Primitive::Double(_) => None,
        }
    }

    /// The primitive as a float. Rationals with a zero denominator yield
    /// `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Primitive::Rational(r) => r.to_f64(),
            Primitive::SRational(r) => r.to_f64(),
            Primitive::Float(v) => Some(v.into()),
            Primitive::Double(v) => Some(v),
            other => other.as_i64().map(|v| v as f64),
        }
    }
}

impl core::fmt::Display for Primitive {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Primitive::Byte(v) | Primitive::Undefined(v) => write!(f, "{v}"),
            Primitive::SByte(v) => write!(f, "{v}"),
            Primitive::Short(v) => write!(f, "{v}"),
            Primitive::SShort(v) => write!(f, "{v}"),
            Primitive::Long(v) => write!(f, "{v}"),
            Primitive::SLong(v) => write!(f, "{v}"),
            Primitive::Rational(r) => write!(f, "{r}"),
            Primitive::SRational(r) => write!(f, "{r}"),
            Primitive::Float(v) => write!(f, "{v}"),
            Primitive::Double(v) => write!(f, "{v}"),
        }
    }
}

/// A fraction that can't be negative.
///
/// Both the numerator (top number) and denominator (bottom number) are
/// stored exactly as found in the file.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    /// Divides the numerator by the denominator.
    ///
    /// ```
    /// use tagdir_types::primitives::Rational;
    ///
    /// let half = Rational { numerator: 1, denominator: 2 };
    /// assert_eq!(half.to_f64(), Some(0.5));
    ///
    /// let broken = Rational { numerator: 1, denominator: 0 };
    /// assert_eq!(broken.to_f64(), None);
    /// ```
    pub fn to_f64(&self) -> Option<f64> {
        (self.denominator != 0).then(|| f64::from(self.numerator) / f64::from(self.denominator))
    }
}

impl core::fmt::Display for Rational {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A signed fraction.
///
/// Both the numerator (top number) and denominator (bottom number) can be
/// negative.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SRational {
    /// Divides the numerator by the denominator. A zero denominator yields
    /// `None`.
    pub fn to_f64(&self) -> Option<f64> {
        (self.denominator != 0).then(|| f64::from(self.numerator) / f64::from(self.denominator))
    }
}

impl core::fmt::Display for SRational {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
