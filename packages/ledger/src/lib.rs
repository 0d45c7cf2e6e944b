//! Ledger service layer.
//!
//! The flat store lives on an external, round-based ledger. This crate
//! defines the narrow interface this system consumes it through
//! ([`LedgerService`]), an HTTP implementation against a REST gateway
//! ([`HttpLedger`]), and the bounded confirmation-polling loop
//! ([`await_confirmation`]).
//!
//! Signing, fee calculation and consensus are the gateway's concern; an
//! [`Operation`] here is just a tag plus an ordered list of byte-string
//! and uint64 arguments addressed at one store.

mod error;
mod http_ledger;
mod traits;
mod types;
mod waiter;

pub use error::{ConfirmError, LedgerError};
pub use http_ledger::HttpLedger;
pub use traits::LedgerService;
pub use types::{Operation, OperationId, StoreId};
pub use waiter::{await_confirmation, ConfirmedOperation, DEFAULT_ROUND_BUDGET};
