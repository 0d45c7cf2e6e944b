//! Error types for the ledger layer.

use crate::OperationId;

/// Errors talking to the ledger gateway.
#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    /// Transport failure before any ledger-side outcome is known.
    #[error("gateway transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid gateway URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The contract refused the operation (assertion failure on the
    /// ledger side). The message is surfaced verbatim.
    #[error("operation rejected: {message}")]
    Rejected { message: String },

    /// The gateway answered with an unexpected status.
    #[error("gateway returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The gateway answered 2xx but the body did not have the documented shape.
    #[error("malformed gateway response: {message}")]
    MalformedResponse { message: String },
}

/// Errors from the confirmation wait.
#[derive(thiserror::Error, Debug)]
pub enum ConfirmError {
    /// The round budget ran out without a confirmation. The outcome is
    /// ambiguous: the operation may still confirm later.
    #[error("operation {operation_id} not confirmed after {rounds} rounds")]
    Timeout {
        operation_id: OperationId,
        rounds: u64,
    },

    /// The caller's deadline passed between polls. The submitted operation
    /// is not withdrawn - only the wait stops.
    #[error("confirmation wait for {operation_id} cancelled by deadline")]
    Cancelled { operation_id: OperationId },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_names_operation_and_budget() {
        let e = ConfirmError::Timeout {
            operation_id: OperationId::new("TX9"),
            rounds: 4,
        };
        let display = format!("{}", e);
        assert!(display.contains("TX9"));
        assert!(display.contains("4 rounds"));
    }

    #[test]
    fn rejected_surfaces_contract_message() {
        let e = LedgerError::Rejected {
            message: "assert failed pc=142".to_string(),
        };
        assert!(format!("{}", e).contains("assert failed pc=142"));
    }
}
