//! Pure reconstruction of the ordered record list from a flat snapshot.

use serde::Serialize;
use slotlist_codec::{key, DecodedKey, COUNT_KEY};

use crate::{FlatEntry, ModelError, Record, Snapshot};

/// Maximum number of live records the reference deployment can hold.
///
/// The flat store has a fixed number of slots: four field entries per
/// record plus the `Count` singleton.
pub const CAPACITY: u64 = 10;

/// The decoded list: the live count and the records at `[0, count)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListState {
    pub count: u64,
    pub items: Vec<Record>,
}

/// Rebuild the record list from a snapshot of flat entries.
///
/// Entries may arrive in any order. Field entries are placed sparsely by
/// their decoded index, then the result is sized strictly by the decoded
/// `Count` - never by the highest index observed - because slots at or
/// above `Count` are logically dead even when stale entries remain for
/// them. Keys that match neither a known field prefix nor `Count` are
/// silently ignored; the flat space may be shared with unrelated keys,
/// and tolerating them is part of the read contract.
pub fn read_state(snapshot: &Snapshot) -> Result<ListState, ModelError> {
    let mut count = 0u64;
    let mut items: Vec<Record> = Vec::new();

    for entry in snapshot.iter() {
        match key::decode(&entry.key) {
            DecodedKey::Plain(name) if name == COUNT_KEY => {
                count = entry.value.as_uint().map_err(ModelError::BadCount)?;
                if count > CAPACITY {
                    return Err(ModelError::CountOutOfRange {
                        count,
                        capacity: CAPACITY,
                    });
                }
            }
            DecodedKey::Plain(_) => {}
            DecodedKey::Field { prefix, index } => {
                // An index past the capacity cannot have been written by
                // the contract; treat it like any other foreign key.
                if index >= CAPACITY {
                    continue;
                }
                assign_field(&mut items, prefix, index, entry)?;
            }
        }
    }

    // Size strictly by count: drop stale tails, keep missing slots decodable.
    items.resize(count as usize, Record::default());

    Ok(ListState { count, items })
}

fn assign_field(
    items: &mut Vec<Record>,
    prefix: slotlist_codec::FieldPrefix,
    index: u64,
    entry: &FlatEntry,
) -> Result<(), ModelError> {
    let slot = index as usize;
    if items.len() <= slot {
        items.resize(slot + 1, Record::default());
    }

    let text = entry
        .value
        .as_text()
        .map_err(|source| ModelError::BadField {
            prefix,
            index,
            source,
        })?
        .to_string();

    use slotlist_codec::FieldPrefix::*;
    let record = &mut items[slot];
    match prefix {
        Name => record.name = text,
        Qty => record.qty = text,
        Category => record.category = text,
        Note => record.note = text,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotlist_codec::{FieldPrefix, SlotValue};

    fn field(prefix: FieldPrefix, index: u64, text: &str) -> FlatEntry {
        FlatEntry::new(key::encode(prefix, index), SlotValue::from(text))
    }

    fn count(n: u64) -> FlatEntry {
        FlatEntry::new(key::encode_plain("Count"), SlotValue::Uint(n))
    }

    fn record_entries(index: u64, record: &Record) -> Vec<FlatEntry> {
        vec![
            field(FieldPrefix::Name, index, &record.name),
            field(FieldPrefix::Qty, index, &record.qty),
            field(FieldPrefix::Category, index, &record.category),
            field(FieldPrefix::Note, index, &record.note),
        ]
    }

    #[test]
    fn empty_snapshot_reads_as_empty_list() {
        let state = read_state(&Snapshot::default()).unwrap();
        assert_eq!(state, ListState::default());
    }

    #[test]
    fn round_trip_single_record() {
        let record = Record::new("Eggs", "12", "Dairy", "Organic");
        let mut entries = record_entries(0, &record);
        entries.push(count(1));

        let state = read_state(&Snapshot::from_entries(entries)).unwrap();
        assert_eq!(state.count, 1);
        assert_eq!(state.items, vec![record]);
    }

    #[test]
    fn entry_order_does_not_matter() {
        let record = Record::new("Milk", "1", "Dairy", "Skimmed");
        let mut entries = record_entries(0, &record);
        entries.insert(0, count(1));
        entries.reverse();

        let state = read_state(&Snapshot::from_entries(entries)).unwrap();
        assert_eq!(state.items, vec![record]);
    }

    #[test]
    fn stale_entries_above_count_are_ignored() {
        // Snapshot after a Remove that left slot 2's entries behind.
        let kept = Record::new("Bread", "2", "Bakery", "Whole wheat");
        let stale = Record::new("Milk", "1", "Dairy", "");
        let mut entries = record_entries(0, &kept);
        entries.extend(record_entries(2, &stale));
        entries.push(count(1));

        let state = read_state(&Snapshot::from_entries(entries)).unwrap();
        assert_eq!(state.count, 1);
        assert_eq!(state.items, vec![kept]);
    }

    #[test]
    fn missing_slots_are_padded_with_defaults() {
        // Count claims two records but only slot 0 has entries.
        let record = Record::new("Eggs", "12", "Dairy", "");
        let mut entries = record_entries(0, &record);
        entries.push(count(2));

        let state = read_state(&Snapshot::from_entries(entries)).unwrap();
        assert_eq!(state.count, 2);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1], Record::default());
    }

    #[test]
    fn unknown_keys_are_silently_ignored() {
        let entries = vec![
            FlatEntry::new(key::encode_plain("Owner"), SlotValue::from("someone")),
            FlatEntry::new(key::encode_plain("Version"), SlotValue::Uint(3)),
            count(0),
        ];
        let state = read_state(&Snapshot::from_entries(entries)).unwrap();
        assert_eq!(state, ListState::default());
    }

    #[test]
    fn out_of_capacity_index_is_ignored() {
        let entries = vec![field(FieldPrefix::Name, CAPACITY + 5, "ghost"), count(0)];
        let state = read_state(&Snapshot::from_entries(entries)).unwrap();
        assert_eq!(state.count, 0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn non_uint_count_is_an_error() {
        let entries = vec![FlatEntry::new(
            key::encode_plain("Count"),
            SlotValue::from("2"),
        )];
        let err = read_state(&Snapshot::from_entries(entries)).unwrap_err();
        assert!(matches!(err, ModelError::BadCount(_)));
    }

    #[test]
    fn count_above_capacity_is_an_error() {
        let entries = vec![count(CAPACITY + 1)];
        let err = read_state(&Snapshot::from_entries(entries)).unwrap_err();
        assert!(matches!(err, ModelError::CountOutOfRange { .. }));
    }

    #[test]
    fn uint_field_value_is_an_error() {
        let entries = vec![
            FlatEntry::new(key::encode(FieldPrefix::Qty, 0), SlotValue::Uint(12)),
            count(1),
        ];
        let err = read_state(&Snapshot::from_entries(entries)).unwrap_err();
        assert!(matches!(
            err,
            ModelError::BadField {
                prefix: FieldPrefix::Qty,
                index: 0,
                ..
            }
        ));
    }

    #[test]
    fn list_state_serializes_for_the_api() {
        let state = ListState {
            count: 1,
            items: vec![Record::new("Eggs", "12", "Dairy", "Organic")],
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["items"][0]["name"], "Eggs");
    }
}
