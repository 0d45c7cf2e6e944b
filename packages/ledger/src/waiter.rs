//! Bounded confirmation polling against the round-based ledger.

use std::time::Instant;

use crate::{ConfirmError, LedgerService, OperationId};

/// Round budget the deployed client waits for before giving up.
pub const DEFAULT_ROUND_BUDGET: u64 = 4;

/// A successfully confirmed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmedOperation {
    /// The round the ledger finalized the operation in.
    pub confirmed_round: u64,
    /// How many status polls it took before confirmation was observed.
    pub polls: u64,
}

/// Poll the ledger until `operation_id` is confirmed or the round budget
/// is exhausted.
///
/// The loop reads the current round once, then performs at most
/// `max_rounds` status polls, blocking for one round advance between
/// polls. Confirmations can arrive delayed or not at all; exhausting the
/// budget yields [`ConfirmError::Timeout`], which is an ambiguous outcome,
/// not proof of failure.
///
/// `deadline` is checked between polls, making the wait cancellable even
/// though each per-round wait is itself a blocking gateway call. A
/// cancelled wait does not withdraw the submitted operation.
pub fn await_confirmation(
    mut ledger: impl LedgerService,
    operation_id: &OperationId,
    max_rounds: u64,
    deadline: Option<Instant>,
) -> Result<ConfirmedOperation, ConfirmError> {
    let mut round = ledger.current_round()?;
    tracing::debug!(%operation_id, round, max_rounds, "waiting for confirmation");

    for poll in 0..max_rounds {
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                tracing::warn!(%operation_id, poll, "confirmation wait cancelled");
                return Err(ConfirmError::Cancelled {
                    operation_id: operation_id.clone(),
                });
            }
        }

        if let Some(confirmed_round) = ledger.pending_status(operation_id)? {
            if confirmed_round > 0 {
                tracing::debug!(%operation_id, confirmed_round, "operation confirmed");
                return Ok(ConfirmedOperation {
                    confirmed_round,
                    polls: poll + 1,
                });
            }
        }

        // Only block for a round advance if another poll remains.
        if poll + 1 < max_rounds {
            round = ledger.wait_for_round_after(round)?;
        }
    }

    tracing::warn!(%operation_id, max_rounds, "confirmation budget exhausted");
    Err(ConfirmError::Timeout {
        operation_id: operation_id.clone(),
        rounds: max_rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LedgerError, Operation, StoreId};
    use slotlist_model::Snapshot;
    use std::time::Duration;

    /// Scripted ledger: confirms after a fixed number of status polls.
    struct ScriptedLedger {
        round: u64,
        polls: u64,
        waits: u64,
        confirm_after: Option<u64>,
    }

    impl ScriptedLedger {
        fn confirming_after(polls: u64) -> Self {
            Self {
                round: 100,
                polls: 0,
                waits: 0,
                confirm_after: Some(polls),
            }
        }

        fn never_confirming() -> Self {
            Self {
                round: 100,
                polls: 0,
                waits: 0,
                confirm_after: None,
            }
        }
    }

    impl LedgerService for ScriptedLedger {
        fn current_round(&mut self) -> Result<u64, LedgerError> {
            Ok(self.round)
        }

        fn flat_snapshot(&mut self, _store_id: StoreId) -> Result<Snapshot, LedgerError> {
            Ok(Snapshot::default())
        }

        fn submit(&mut self, _operation: &Operation) -> Result<OperationId, LedgerError> {
            Ok(OperationId::new("TX"))
        }

        fn pending_status(&mut self, _id: &OperationId) -> Result<Option<u64>, LedgerError> {
            self.polls += 1;
            match self.confirm_after {
                Some(after) if self.polls > after => Ok(Some(self.round)),
                _ => Ok(None),
            }
        }

        fn wait_for_round_after(&mut self, round: u64) -> Result<u64, LedgerError> {
            self.waits += 1;
            self.round = round + 1;
            Ok(self.round)
        }
    }

    #[test]
    fn immediate_confirmation_returns_on_first_poll() {
        let mut ledger = ScriptedLedger::confirming_after(0);
        let confirmed =
            await_confirmation(&mut ledger, &OperationId::new("TX"), 4, None).unwrap();
        assert_eq!(confirmed.polls, 1);
        assert_eq!(ledger.polls, 1);
    }

    #[test]
    fn delayed_confirmation_is_picked_up() {
        let mut ledger = ScriptedLedger::confirming_after(2);
        let confirmed =
            await_confirmation(&mut ledger, &OperationId::new("TX"), 4, None).unwrap();
        assert_eq!(confirmed.polls, 3);
        // Two round advances happened before the confirming poll.
        assert_eq!(confirmed.confirmed_round, 102);
    }

    #[test]
    fn timeout_after_exactly_max_rounds_polls() {
        let mut ledger = ScriptedLedger::never_confirming();
        let err =
            await_confirmation(&mut ledger, &OperationId::new("TX"), 4, None).unwrap_err();
        assert!(matches!(
            err,
            ConfirmError::Timeout {
                rounds: 4,
                ..
            }
        ));
        assert_eq!(ledger.polls, 4);
    }

    #[test]
    fn timeout_does_not_block_after_the_final_poll() {
        let mut ledger = ScriptedLedger::never_confirming();
        await_confirmation(&mut ledger, &OperationId::new("TX"), 4, None).unwrap_err();
        // One round wait between polls, none after the last one.
        assert_eq!(ledger.waits, 3);
    }

    #[test]
    fn elapsed_deadline_cancels_before_polling() {
        let mut ledger = ScriptedLedger::confirming_after(0);
        let deadline = Instant::now() - Duration::from_millis(1);
        let err = await_confirmation(&mut ledger, &OperationId::new("TX"), 4, Some(deadline))
            .unwrap_err();
        assert!(matches!(err, ConfirmError::Cancelled { .. }));
        assert_eq!(ledger.polls, 0);
    }

    #[test]
    fn works_through_a_boxed_ledger() {
        let mut ledger: Box<dyn LedgerService> =
            Box::new(ScriptedLedger::confirming_after(0));
        let confirmed =
            await_confirmation(&mut ledger, &OperationId::new("TX"), 4, None).unwrap();
        assert_eq!(confirmed.polls, 1);
    }
}
