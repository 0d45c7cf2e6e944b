//! The ledger service interface.

use slotlist_model::Snapshot;

use crate::{LedgerError, Operation, OperationId, StoreId};

/// The four ledger operations this system consumes, plus the per-round
/// blocking wait the confirmation loop is built on.
///
/// Implementations own transport, signing and fees. The trait takes
/// `&mut self` and is object-safe: `Box<dyn LedgerService>` works, and
/// tests supply in-memory fakes with scripted rounds and statuses.
pub trait LedgerService: Send + Sync {
    /// The latest round the ledger has committed.
    fn current_round(&mut self) -> Result<u64, LedgerError>;

    /// A full point-in-time read of one store's flat key-value pairs.
    fn flat_snapshot(&mut self, store_id: StoreId) -> Result<Snapshot, LedgerError>;

    /// Submit a mutating operation. At-most-once: a transport failure here
    /// leaves the outcome unknown, and resubmitting can double-apply.
    fn submit(&mut self, operation: &Operation) -> Result<OperationId, LedgerError>;

    /// The round a pending operation was confirmed in, if any yet.
    fn pending_status(&mut self, id: &OperationId) -> Result<Option<u64>, LedgerError>;

    /// Block until the ledger has advanced past `round`; returns the new
    /// current round.
    fn wait_for_round_after(&mut self, round: u64) -> Result<u64, LedgerError>;
}

// Blanket implementations for references and boxes

impl<T: LedgerService + ?Sized> LedgerService for &mut T {
    fn current_round(&mut self) -> Result<u64, LedgerError> {
        (*self).current_round()
    }

    fn flat_snapshot(&mut self, store_id: StoreId) -> Result<Snapshot, LedgerError> {
        (*self).flat_snapshot(store_id)
    }

    fn submit(&mut self, operation: &Operation) -> Result<OperationId, LedgerError> {
        (*self).submit(operation)
    }

    fn pending_status(&mut self, id: &OperationId) -> Result<Option<u64>, LedgerError> {
        (*self).pending_status(id)
    }

    fn wait_for_round_after(&mut self, round: u64) -> Result<u64, LedgerError> {
        (*self).wait_for_round_after(round)
    }
}

impl<T: LedgerService + ?Sized> LedgerService for Box<T> {
    fn current_round(&mut self) -> Result<u64, LedgerError> {
        self.as_mut().current_round()
    }

    fn flat_snapshot(&mut self, store_id: StoreId) -> Result<Snapshot, LedgerError> {
        self.as_mut().flat_snapshot(store_id)
    }

    fn submit(&mut self, operation: &Operation) -> Result<OperationId, LedgerError> {
        self.as_mut().submit(operation)
    }

    fn pending_status(&mut self, id: &OperationId) -> Result<Option<u64>, LedgerError> {
        self.as_mut().pending_status(id)
    }

    fn wait_for_round_after(&mut self, round: u64) -> Result<u64, LedgerError> {
        self.as_mut().wait_for_round_after(round)
    }
}
