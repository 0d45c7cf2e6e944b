//! The structured record stored at each slot.

use serde::{Deserialize, Serialize};

/// One shopping-list entry.
///
/// A record is identified only by its slot index, which is a position, not
/// a stable ID: after any Remove, an index can refer to a different logical
/// record than it did before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    /// Quantity, kept as a string to match the deployed field layout.
    pub qty: String,
    pub category: String,
    /// Optional free-form note; empty when unset.
    #[serde(default)]
    pub note: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        qty: impl Into<String>,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            qty: qty.into(),
            category: category.into(),
            note: note.into(),
        }
    }
}
