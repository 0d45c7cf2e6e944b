//! Slot store model: reconstructs the ordered record list from a snapshot
//! of flat key-value pairs.
//!
//! The flat store is owned by the external ledger service, so there is no
//! incremental cache here - every read re-derives the full list from a
//! fresh [`Snapshot`] via [`read_state`].
//!
//! # Example
//!
//! ```rust
//! use slotlist_model::{read_state, FlatEntry, Record, Snapshot};
//! use slotlist_codec::{key, FieldPrefix, SlotValue};
//!
//! let snapshot = Snapshot::from_entries(vec![
//!     FlatEntry::new(key::encode_plain("Count"), SlotValue::Uint(1)),
//!     FlatEntry::new(key::encode(FieldPrefix::Name, 0), SlotValue::from("Eggs")),
//!     FlatEntry::new(key::encode(FieldPrefix::Qty, 0), SlotValue::from("12")),
//!     FlatEntry::new(key::encode(FieldPrefix::Category, 0), SlotValue::from("Dairy")),
//!     FlatEntry::new(key::encode(FieldPrefix::Note, 0), SlotValue::from("Organic")),
//! ]);
//!
//! let state = read_state(&snapshot).unwrap();
//! assert_eq!(state.count, 1);
//! assert_eq!(state.items[0].name, "Eggs");
//! ```

mod error;
mod record;
mod snapshot;
mod state;

pub use error::ModelError;
pub use record::Record;
pub use snapshot::{FlatEntry, Snapshot};
pub use state::{read_state, ListState, CAPACITY};
