//! The two-kind tagged value model of the flat store.
//!
//! The store reports which kind a value is; decoding branches on that tag,
//! never on the key. The only exception is the `Count` singleton, which is
//! defined by convention to always be the uint kind - that convention lives
//! in the model layer, not here.

use crate::CodecError;

/// The two native value kinds of the flat store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Uint,
    Bytes,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Uint => f.write_str("uint"),
            ValueKind::Bytes => f.write_str("bytes"),
        }
    }
}

/// A single flat-store value: an unsigned 64-bit integer or a byte string.
///
/// Also used for operation arguments, so that argument encoding and stored
/// values share one representation (indices in particular must always use
/// the fixed-width uint form, never decimal text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    Uint(u64),
    Bytes(Vec<u8>),
}

impl SlotValue {
    /// Which of the two kinds this value is.
    pub fn kind(&self) -> ValueKind {
        match self {
            SlotValue::Uint(_) => ValueKind::Uint,
            SlotValue::Bytes(_) => ValueKind::Bytes,
        }
    }

    /// Interpret a byte-string value as UTF-8 text.
    pub fn as_text(&self) -> Result<&str, CodecError> {
        match self {
            SlotValue::Bytes(bytes) => Ok(std::str::from_utf8(bytes)?),
            SlotValue::Uint(_) => Err(CodecError::WrongKind {
                expected: ValueKind::Bytes,
                found: ValueKind::Uint,
            }),
        }
    }

    /// Interpret an integer value.
    pub fn as_uint(&self) -> Result<u64, CodecError> {
        match self {
            SlotValue::Uint(v) => Ok(*v),
            SlotValue::Bytes(_) => Err(CodecError::WrongKind {
                expected: ValueKind::Uint,
                found: ValueKind::Bytes,
            }),
        }
    }

    /// The raw wire form used for operation arguments: byte strings as-is,
    /// integers as 8-byte big-endian.
    pub fn to_wire_bytes(&self) -> Vec<u8> {
        match self {
            SlotValue::Uint(v) => v.to_be_bytes().to_vec(),
            SlotValue::Bytes(bytes) => bytes.clone(),
        }
    }
}

impl From<u64> for SlotValue {
    fn from(v: u64) -> Self {
        SlotValue::Uint(v)
    }
}

impl From<&str> for SlotValue {
    fn from(v: &str) -> Self {
        SlotValue::Bytes(v.as_bytes().to_vec())
    }
}

impl From<String> for SlotValue {
    fn from(v: String) -> Self {
        SlotValue::Bytes(v.into_bytes())
    }
}

impl From<Vec<u8>> for SlotValue {
    fn from(v: Vec<u8>) -> Self {
        SlotValue::Bytes(v)
    }
}
