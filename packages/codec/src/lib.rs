//! Codec layer for the flat slot store.
//!
//! The backing store is a flat key-value space with two native value kinds
//! (unsigned 64-bit integers and bounded byte strings) and no composite
//! types. This crate defines how structured list data maps onto that space:
//!
//! - [`key`]: deterministic encoding of a (field prefix, slot index) pair
//!   into a single flat key, and the inverse decode.
//! - [`value`]: the two-kind tagged value model and conversions to/from
//!   UTF-8 text and unsigned integers.
//!
//! No I/O and no list semantics live here - those belong in higher layers.

pub use bytes::Bytes;

mod error;
pub mod key;
mod value;

pub use error::CodecError;
pub use key::{DecodedKey, FieldPrefix, COUNT_KEY};
pub use value::{SlotValue, ValueKind};
