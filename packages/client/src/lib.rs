//! CRUD protocol over the flat slot store.
//!
//! [`ShoppingListClient`] is the top of the stack: it validates API
//! requests, builds tag-first operations, submits them through a
//! [`LedgerService`](slotlist_ledger::LedgerService), waits for
//! confirmation, and re-reads the store fresh - no state is cached
//! between calls.
//!
//! One logical operation is in flight at a time; callers issuing
//! concurrent mutations must serialize them, since index-based operations
//! are not commutative. Submission is at-most-once: a transport failure
//! before acknowledgement leaves the outcome unknown, and resubmitting
//! can double-apply. No retries happen here.

mod api;
mod client;
mod error;

pub use api::{AddRequest, ItemsResponse, MutationResponse, RemoveRequest, UpdateRequest};
pub use client::{ShoppingListClient, TAG_ADD, TAG_CLEAR_ALL, TAG_REMOVE, TAG_UPDATE};
pub use error::ClientError;
