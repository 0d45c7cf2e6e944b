//! Client-facing error taxonomy.

use slotlist_ledger::{ConfirmError, LedgerError};
use slotlist_model::ModelError;

/// Everything a CRUD call can fail with.
///
/// `Validation` is caller-correctable and raised before any ledger
/// interaction. `CapacityExceeded` and `IndexOutOfRange` are contract
/// rejections, surfaced with the contract's message verbatim.
/// `ConfirmationTimeout` is ambiguous: the operation may still confirm
/// after the budget ran out.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("list is at capacity: {message}")]
    CapacityExceeded { message: String },

    #[error("index {index} is out of range: {message}")]
    IndexOutOfRange { index: u64, message: String },

    #[error("operation {operation_id} not confirmed within {rounds} rounds")]
    ConfirmationTimeout { operation_id: String, rounds: u64 },

    #[error("confirmation wait for {operation_id} was cancelled")]
    Cancelled { operation_id: String },

    /// Submission or snapshot read failed before any ledger-side outcome
    /// was known.
    #[error("ledger transport failure: {0}")]
    Transport(#[from] LedgerError),

    /// The snapshot could not be decoded into list state.
    #[error("state decode failure: {0}")]
    State(#[from] ModelError),
}

impl From<ConfirmError> for ClientError {
    fn from(e: ConfirmError) -> Self {
        match e {
            ConfirmError::Timeout {
                operation_id,
                rounds,
            } => ClientError::ConfirmationTimeout {
                operation_id: operation_id.to_string(),
                rounds,
            },
            ConfirmError::Cancelled { operation_id } => ClientError::Cancelled {
                operation_id: operation_id.to_string(),
            },
            ConfirmError::Ledger(e) => ClientError::Transport(e),
        }
    }
}
