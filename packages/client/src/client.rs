//! The CRUD state machine: validate, submit, confirm, re-read.

use std::time::Instant;

use slotlist_ledger::{
    await_confirmation, LedgerError, LedgerService, Operation, StoreId, DEFAULT_ROUND_BUDGET,
};
use slotlist_model::{read_state, ListState};

use crate::{AddRequest, ClientError, MutationResponse, RemoveRequest, UpdateRequest};

/// Operation tags as the contract dispatches them.
pub const TAG_ADD: &str = "Add";
pub const TAG_UPDATE: &str = "Update";
pub const TAG_REMOVE: &str = "Remove";
pub const TAG_CLEAR_ALL: &str = "ClearAll";

/// Client for one deployed shopping-list store.
///
/// Every mutation is a single atomic request from the caller's point of
/// view: submit, block on confirmation, then read a fresh snapshot. The
/// count and items are never cached, because the flat store is shared
/// external state that other agents may also modify.
pub struct ShoppingListClient<L> {
    ledger: L,
    store_id: StoreId,
    round_budget: u64,
    deadline: Option<Instant>,
}

impl<L: LedgerService> ShoppingListClient<L> {
    pub fn new(ledger: L, store_id: StoreId) -> Self {
        Self {
            ledger,
            store_id,
            round_budget: DEFAULT_ROUND_BUDGET,
            deadline: None,
        }
    }

    /// Override the confirmation round budget.
    pub fn with_round_budget(mut self, rounds: u64) -> Self {
        self.round_budget = rounds;
        self
    }

    /// Access the underlying ledger service.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Set a deadline after which confirmation waits are abandoned.
    ///
    /// This only stops the wait: an already-submitted operation cannot be
    /// withdrawn and may still take effect on the ledger.
    pub fn set_deadline(&mut self, deadline: Option<Instant>) {
        self.deadline = deadline;
    }

    /// `GET /items`: decode the current list from a fresh snapshot.
    pub fn items(&mut self) -> Result<ListState, ClientError> {
        let snapshot = self.ledger.flat_snapshot(self.store_id)?;
        tracing::debug!(entries = snapshot.len(), "read flat snapshot");
        Ok(read_state(&snapshot)?)
    }

    /// `POST /add`: append a record at index = current count.
    ///
    /// The capacity bound is enforced by the contract; a rejection
    /// surfaces as [`ClientError::CapacityExceeded`].
    pub fn add(&mut self, request: &AddRequest) -> Result<MutationResponse, ClientError> {
        request.validate()?;
        let operation = Operation::new(self.store_id, TAG_ADD)
            .arg_text(&request.name)
            .arg_text(&request.qty)
            .arg_text(&request.category)
            .arg_text(request.note_or_default());
        self.mutate(operation, Rejection::Capacity)
    }

    /// `POST /update`: replace the record at `index` in place.
    ///
    /// The index travels as a fixed-width uint argument; the contract
    /// enforces `index < count` and a rejection surfaces as
    /// [`ClientError::IndexOutOfRange`].
    pub fn update(&mut self, request: &UpdateRequest) -> Result<MutationResponse, ClientError> {
        request.validate()?;
        let operation = Operation::new(self.store_id, TAG_UPDATE)
            .arg_uint(request.index)
            .arg_text(&request.name)
            .arg_text(&request.qty)
            .arg_text(&request.category)
            .arg_text(request.note_or_default());
        self.mutate(operation, Rejection::Index(request.index))
    }

    /// `POST /remove`: delete the record at `index` and compact.
    ///
    /// After confirmation every record above `index` has shifted down by
    /// one; indices stay contiguous in `[0, count)`.
    pub fn remove(&mut self, request: &RemoveRequest) -> Result<MutationResponse, ClientError> {
        let operation = Operation::new(self.store_id, TAG_REMOVE).arg_uint(request.index);
        self.mutate(operation, Rejection::Index(request.index))
    }

    /// `POST /clear`: reset the count to zero in one operation.
    ///
    /// Observationally a no-op when the list is already empty.
    pub fn clear_all(&mut self) -> Result<MutationResponse, ClientError> {
        let operation = Operation::new(self.store_id, TAG_CLEAR_ALL);
        self.mutate(operation, Rejection::Verbatim)
    }

    fn mutate(
        &mut self,
        operation: Operation,
        rejection: Rejection,
    ) -> Result<MutationResponse, ClientError> {
        tracing::info!(tag = %operation.tag, store_id = operation.store_id, "submitting operation");

        let operation_id = match self.ledger.submit(&operation) {
            Ok(id) => id,
            Err(LedgerError::Rejected { message }) => return Err(rejection.classify(message)),
            Err(e) => return Err(ClientError::Transport(e)),
        };

        await_confirmation(
            &mut self.ledger,
            &operation_id,
            self.round_budget,
            self.deadline,
        )?;

        let state = self.items()?;
        tracing::info!(%operation_id, count = state.count, "operation confirmed");

        Ok(MutationResponse {
            operation_id: operation_id.to_string(),
            state,
        })
    }
}

/// How a contract rejection of the current operation is classified.
enum Rejection {
    /// Add past the capacity bound.
    Capacity,
    /// Update/Remove with an out-of-bounds index.
    Index(u64),
    /// No expected rejection; surface as a transport-level error.
    Verbatim,
}

impl Rejection {
    fn classify(self, message: String) -> ClientError {
        match self {
            Rejection::Capacity => ClientError::CapacityExceeded { message },
            Rejection::Index(index) => ClientError::IndexOutOfRange { index, message },
            Rejection::Verbatim => ClientError::Transport(LedgerError::Rejected { message }),
        }
    }
}
