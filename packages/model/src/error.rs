//! Error types for the model layer.

use slotlist_codec::{CodecError, FieldPrefix};

/// Errors while reconstructing list state from a snapshot.
///
/// Unknown keys are not errors - they are silently ignored so that other
/// tenants of the same flat space cannot break reads.
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    /// The `Count` singleton exists but is not an unsigned integer.
    #[error("count slot is malformed: {0}")]
    BadCount(#[source] CodecError),

    /// The `Count` singleton claims more live records than the store can hold.
    #[error("count {count} exceeds capacity {capacity}")]
    CountOutOfRange { count: u64, capacity: u64 },

    /// A field entry could not be decoded as UTF-8 text.
    #[error("field {prefix} at slot {index} is malformed: {source}")]
    BadField {
        prefix: FieldPrefix,
        index: u64,
        #[source]
        source: CodecError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotlist_codec::ValueKind;

    #[test]
    fn bad_field_display_names_prefix_and_slot() {
        let e = ModelError::BadField {
            prefix: FieldPrefix::Qty,
            index: 3,
            source: CodecError::WrongKind {
                expected: ValueKind::Bytes,
                found: ValueKind::Uint,
            },
        };
        let display = format!("{}", e);
        assert!(display.contains("Qty"));
        assert!(display.contains("3"));
    }
}
