//! Raw snapshot types: what a full point-in-time read of the flat store
//! looks like before any decoding.

use bytes::Bytes;
use slotlist_codec::SlotValue;

/// One raw key-value pair from the flat store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    pub key: Bytes,
    pub value: SlotValue,
}

impl FlatEntry {
    pub fn new(key: impl Into<Bytes>, value: impl Into<SlotValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The full set of flat entries visible at a point in time.
///
/// The backing store imposes no order on its keys, and none is assumed
/// here; ordering is recovered from the indices encoded in the keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<FlatEntry>,
}

impl Snapshot {
    pub fn from_entries(entries: Vec<FlatEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlatEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<FlatEntry> for Snapshot {
    fn from_iter<I: IntoIterator<Item = FlatEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
