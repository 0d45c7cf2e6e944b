//! Error types for the codec layer.

use crate::value::ValueKind;

/// Errors produced while decoding flat-store values.
///
/// Key decoding never fails: a key that does not match the indexed-field
/// layout is reported as a plain key and left to higher layers to interpret
/// or ignore.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    /// A byte-string value was expected to hold UTF-8 text but does not.
    #[error("value is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    /// The stored value kind does not match what the caller asked for.
    #[error("expected a {expected} value, found {found}")]
    WrongKind {
        expected: ValueKind,
        found: ValueKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_kind_display() {
        let e = CodecError::WrongKind {
            expected: ValueKind::Uint,
            found: ValueKind::Bytes,
        };
        let display = format!("{}", e);
        assert!(display.contains("uint"));
        assert!(display.contains("bytes"));
    }
}
