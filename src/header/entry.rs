//! src/header/entry.rs
//!
//! Typed header entries with fixed-width little-endian encodings.
//!
//! The supported scalar kinds form a closed set; encode and decode are
//! exact inverses per kind, and the encoded width depends only on the
//! kind, never on the value.

use crate::error::{PhrasecryptError, Result};

use rust_decimal::Decimal;

/// The closed set of scalar kinds a header entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Byte,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    /// Unicode scalar value, stored in 4 bytes.
    Char,
    F32,
    F64,
    /// 128-bit decimal (flags/lo/mid/hi word quadruple), stored in 16 bytes.
    Decimal,
    Bool,
}

impl EntryKind {
    /// Encoded width in bytes. Fixed per kind, independent of the value.
    pub const fn width(self) -> usize {
        match self {
            EntryKind::Byte | EntryKind::Bool => 1,
            EntryKind::I16 | EntryKind::U16 => 2,
            EntryKind::I32 | EntryKind::U32 | EntryKind::Char | EntryKind::F32 => 4,
            EntryKind::I64 | EntryKind::U64 | EntryKind::F64 => 8,
            EntryKind::Decimal => 16,
        }
    }
}

/// A scalar value tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryValue {
    Byte(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    Char(char),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Bool(bool),
}

impl EntryValue {
    /// The kind this value belongs to.
    pub const fn kind(&self) -> EntryKind {
        match self {
            EntryValue::Byte(_) => EntryKind::Byte,
            EntryValue::I16(_) => EntryKind::I16,
            EntryValue::U16(_) => EntryKind::U16,
            EntryValue::I32(_) => EntryKind::I32,
            EntryValue::U32(_) => EntryKind::U32,
            EntryValue::I64(_) => EntryKind::I64,
            EntryValue::U64(_) => EntryKind::U64,
            EntryValue::Char(_) => EntryKind::Char,
            EntryValue::F32(_) => EntryKind::F32,
            EntryValue::F64(_) => EntryKind::F64,
            EntryValue::Decimal(_) => EntryKind::Decimal,
            EntryValue::Bool(_) => EntryKind::Bool,
        }
    }

    /// The zero value of `kind`, used for schema placeholders.
    pub fn zero(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Byte => EntryValue::Byte(0),
            EntryKind::I16 => EntryValue::I16(0),
            EntryKind::U16 => EntryValue::U16(0),
            EntryKind::I32 => EntryValue::I32(0),
            EntryKind::U32 => EntryValue::U32(0),
            EntryKind::I64 => EntryValue::I64(0),
            EntryKind::U64 => EntryValue::U64(0),
            EntryKind::Char => EntryValue::Char('\0'),
            EntryKind::F32 => EntryValue::F32(0.0),
            EntryKind::F64 => EntryValue::F64(0.0),
            EntryKind::Decimal => EntryValue::Decimal(Decimal::ZERO),
            EntryKind::Bool => EntryValue::Bool(false),
        }
    }

    /// Encode to exactly `self.kind().width()` little-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            EntryValue::Byte(v) => vec![*v],
            EntryValue::I16(v) => v.to_le_bytes().to_vec(),
            EntryValue::U16(v) => v.to_le_bytes().to_vec(),
            EntryValue::I32(v) => v.to_le_bytes().to_vec(),
            EntryValue::U32(v) => v.to_le_bytes().to_vec(),
            EntryValue::I64(v) => v.to_le_bytes().to_vec(),
            EntryValue::U64(v) => v.to_le_bytes().to_vec(),
            EntryValue::Char(v) => (*v as u32).to_le_bytes().to_vec(),
            EntryValue::F32(v) => v.to_le_bytes().to_vec(),
            EntryValue::F64(v) => v.to_le_bytes().to_vec(),
            EntryValue::Decimal(v) => v.serialize().to_vec(),
            EntryValue::Bool(v) => vec![u8::from(*v)],
        }
    }

    /// Decode `bytes` as a value of `kind`.
    ///
    /// The slice length must equal `kind.width()` exactly; anything else
    /// is a format error. A char that is not a valid Unicode scalar value
    /// is also rejected. A bool decodes any non-zero byte as `true`.
    pub fn from_bytes(kind: EntryKind, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != kind.width() {
            return Err(PhrasecryptError::Format(format!(
                "{:?} entry requires exactly {} bytes, got {}",
                kind,
                kind.width(),
                bytes.len()
            )));
        }

        let value = match kind {
            EntryKind::Byte => EntryValue::Byte(bytes[0]),
            EntryKind::I16 => EntryValue::I16(i16::from_le_bytes(fixed(bytes))),
            EntryKind::U16 => EntryValue::U16(u16::from_le_bytes(fixed(bytes))),
            EntryKind::I32 => EntryValue::I32(i32::from_le_bytes(fixed(bytes))),
            EntryKind::U32 => EntryValue::U32(u32::from_le_bytes(fixed(bytes))),
            EntryKind::I64 => EntryValue::I64(i64::from_le_bytes(fixed(bytes))),
            EntryKind::U64 => EntryValue::U64(u64::from_le_bytes(fixed(bytes))),
            EntryKind::Char => {
                let scalar = u32::from_le_bytes(fixed(bytes));
                let c = char::from_u32(scalar).ok_or_else(|| {
                    PhrasecryptError::Format(format!(
                        "{scalar:#x} is not a valid Unicode scalar value"
                    ))
                })?;
                EntryValue::Char(c)
            }
            EntryKind::F32 => EntryValue::F32(f32::from_le_bytes(fixed(bytes))),
            EntryKind::F64 => EntryValue::F64(f64::from_le_bytes(fixed(bytes))),
            EntryKind::Decimal => EntryValue::Decimal(Decimal::deserialize(fixed(bytes))),
            EntryKind::Bool => EntryValue::Bool(bytes[0] != 0),
        };

        Ok(value)
    }
}

/// Copy a checked slice into the fixed array `from_le_bytes` wants.
fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
    bytes.try_into().expect("length checked by caller")
}

/// A named, typed header field.
///
/// The kind is fixed at construction; both mutation paths
/// ([`set_entry_bytes`](HeaderEntry::set_entry_bytes) and
/// [`set_value`](HeaderEntry::set_value)) preserve it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderEntry {
    name: String,
    value: EntryValue,
}

impl HeaderEntry {
    /// Create an entry from a name and a concrete value.
    pub fn new(name: impl Into<String>, value: EntryValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Create a zero-valued entry of `kind`, for use in parse schemas.
    pub fn placeholder(name: impl Into<String>, kind: EntryKind) -> Self {
        Self::new(name, EntryValue::zero(kind))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &EntryValue {
        &self.value
    }

    pub fn kind(&self) -> EntryKind {
        self.value.kind()
    }

    /// Encoded width in bytes.
    pub fn width(&self) -> usize {
        self.kind().width()
    }

    /// The entry's encoded bytes.
    pub fn entry_bytes(&self) -> Vec<u8> {
        self.value.to_bytes()
    }

    /// Replace the value by decoding `bytes` against the entry's kind.
    pub fn set_entry_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.value = EntryValue::from_bytes(self.kind(), bytes)?;
        Ok(())
    }

    /// Replace the value directly. The new value must be of the same
    /// kind as the existing one; entries are never resized.
    pub fn set_value(&mut self, value: EntryValue) -> Result<()> {
        if value.kind() != self.kind() {
            return Err(PhrasecryptError::Argument(format!(
                "cannot assign a {:?} value to a {:?} entry",
                value.kind(),
                self.kind()
            )));
        }
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(value: EntryValue) {
        let bytes = value.to_bytes();
        assert_eq!(bytes.len(), value.kind().width());
        assert_eq!(EntryValue::from_bytes(value.kind(), &bytes).unwrap(), value);
    }

    #[test]
    fn boundary_values_roundtrip() {
        roundtrip(EntryValue::Byte(0));
        roundtrip(EntryValue::Byte(u8::MAX));
        roundtrip(EntryValue::I16(i16::MIN));
        roundtrip(EntryValue::U16(u16::MAX));
        roundtrip(EntryValue::I32(-1));
        roundtrip(EntryValue::U32(u32::MAX));
        roundtrip(EntryValue::I64(i64::MIN));
        roundtrip(EntryValue::U64(u64::MAX));
        roundtrip(EntryValue::Char('\0'));
        roundtrip(EntryValue::Char('€'));
        roundtrip(EntryValue::Char('𝄞'));
        roundtrip(EntryValue::F32(f32::MIN_POSITIVE));
        roundtrip(EntryValue::F64(-0.0));
        roundtrip(EntryValue::Decimal(Decimal::MAX));
        roundtrip(EntryValue::Decimal(Decimal::new(-123456789, 4)));
        roundtrip(EntryValue::Bool(true));
        roundtrip(EntryValue::Bool(false));
    }

    #[test]
    fn wrong_width_rejected() {
        let err = EntryValue::from_bytes(EntryKind::I32, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, PhrasecryptError::Format(_)));

        // The 16-byte decimal width is a hard requirement.
        let err = EntryValue::from_bytes(EntryKind::Decimal, &[0u8; 15]).unwrap_err();
        assert!(matches!(err, PhrasecryptError::Format(_)));
        let err = EntryValue::from_bytes(EntryKind::Decimal, &[0u8; 17]).unwrap_err();
        assert!(matches!(err, PhrasecryptError::Format(_)));
    }

    #[test]
    fn invalid_char_scalar_rejected() {
        // 0xD800 is a surrogate, not a scalar value.
        let err = EntryValue::from_bytes(EntryKind::Char, &0xD800u32.to_le_bytes()).unwrap_err();
        assert!(matches!(err, PhrasecryptError::Format(_)));
    }

    #[test]
    fn bool_decodes_nonzero_as_true() {
        assert_eq!(
            EntryValue::from_bytes(EntryKind::Bool, &[0x7F]).unwrap(),
            EntryValue::Bool(true)
        );
        assert_eq!(
            EntryValue::from_bytes(EntryKind::Bool, &[0]).unwrap(),
            EntryValue::Bool(false)
        );
    }

    #[test]
    fn little_endian_layout() {
        assert_eq!(EntryValue::U32(0x0102_0304).to_bytes(), [4, 3, 2, 1]);
        assert_eq!(EntryValue::I16(0x0102).to_bytes(), [2, 1]);
    }

    #[test]
    fn placeholder_and_mutation() {
        let mut entry = HeaderEntry::placeholder("Count", EntryKind::U32);
        assert_eq!(entry.value(), &EntryValue::U32(0));
        assert_eq!(entry.width(), 4);

        entry.set_entry_bytes(&42u32.to_le_bytes()).unwrap();
        assert_eq!(entry.value(), &EntryValue::U32(42));

        entry.set_value(EntryValue::U32(7)).unwrap();
        assert_eq!(entry.value(), &EntryValue::U32(7));

        // Kind is fixed for the entry's lifetime.
        let err = entry.set_value(EntryValue::I64(7)).unwrap_err();
        assert!(matches!(err, PhrasecryptError::Argument(_)));
    }
}
