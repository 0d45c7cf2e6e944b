//! Flat-key layout: `prefix || "_" || big-endian u64` for indexed fields,
//! raw UTF-8 for singleton keys.
//!
//! This layout is the on-store wire format of an existing deployment and
//! must be reproduced byte-for-byte: prefixes `Name`, `Qty`, `Category`,
//! `Note`, each followed by `_` and an 8-byte big-endian slot index, plus
//! the singleton `Count` key with no suffix.

use bytes::Bytes;

/// The singleton key holding the number of live records.
pub const COUNT_KEY: &[u8] = b"Count";

const SEPARATOR: u8 = b'_';
const INDEX_WIDTH: usize = 8;

/// The four per-record field prefixes.
///
/// Only these prefixes use the indexed layout; the encoder always appends
/// the fixed 8-byte suffix for them, which keeps decoding unambiguous
/// against plain keys like `Count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPrefix {
    Name,
    Qty,
    Category,
    Note,
}

impl FieldPrefix {
    /// All prefixes, in record-field order.
    pub const ALL: [FieldPrefix; 4] = [
        FieldPrefix::Name,
        FieldPrefix::Qty,
        FieldPrefix::Category,
        FieldPrefix::Note,
    ];

    /// The prefix bytes as they appear on the store, without the separator.
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            FieldPrefix::Name => b"Name",
            FieldPrefix::Qty => b"Qty",
            FieldPrefix::Category => b"Category",
            FieldPrefix::Note => b"Note",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldPrefix::Name => "Name",
            FieldPrefix::Qty => "Qty",
            FieldPrefix::Category => "Category",
            FieldPrefix::Note => "Note",
        }
    }

    fn from_bytes(bytes: &[u8]) -> Option<FieldPrefix> {
        match bytes {
            b"Name" => Some(FieldPrefix::Name),
            b"Qty" => Some(FieldPrefix::Qty),
            b"Category" => Some(FieldPrefix::Category),
            b"Note" => Some(FieldPrefix::Note),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of decoding a flat key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedKey {
    /// An indexed field key produced by [`encode`].
    Field { prefix: FieldPrefix, index: u64 },
    /// Anything else: the `Count` singleton, or a key owned by some other
    /// tenant of the same flat space.
    Plain(Bytes),
}

/// Encode an indexed field key: `prefix || "_" || u64::to_be_bytes(index)`.
pub fn encode(prefix: FieldPrefix, index: u64) -> Bytes {
    let prefix = prefix.as_bytes();
    let mut key = Vec::with_capacity(prefix.len() + 1 + INDEX_WIDTH);
    key.extend_from_slice(prefix);
    key.push(SEPARATOR);
    key.extend_from_slice(&index.to_be_bytes());
    Bytes::from(key)
}

/// Encode a singleton key as its raw UTF-8 name.
pub fn encode_plain(name: &str) -> Bytes {
    Bytes::copy_from_slice(name.as_bytes())
}

/// Decode a flat key back into a (prefix, index) pair or a plain name.
///
/// A key is an indexed field key only if it is longer than 8 bytes, ends
/// with a big-endian u64, has the separator byte just before it, and the
/// remainder matches one of the four known prefixes. Everything else comes
/// back as [`DecodedKey::Plain`] - decoding never fails.
pub fn decode(key: &[u8]) -> DecodedKey {
    match decode_field(key) {
        Some((prefix, index)) => DecodedKey::Field { prefix, index },
        None => DecodedKey::Plain(Bytes::copy_from_slice(key)),
    }
}

fn decode_field(key: &[u8]) -> Option<(FieldPrefix, u64)> {
    if key.len() <= INDEX_WIDTH {
        return None;
    }
    let (head, tail) = key.split_at(key.len() - INDEX_WIDTH);
    let (&separator, prefix_bytes) = head.split_last()?;
    if separator != SEPARATOR {
        return None;
    }
    let prefix = FieldPrefix::from_bytes(prefix_bytes)?;
    let index = u64::from_be_bytes(tail.try_into().ok()?);
    Some((prefix, index))
}
