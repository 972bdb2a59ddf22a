//! Single-flight action lock and the user-feedback port.
//!
//! # Design
//! - At most one mutating action runs at a time, page-wide; a second attempt
//!   is rejected synchronously, never queued.
//! - The busy flag is a plain `Cell`: it is checked and set before the first
//!   suspension point, so cooperative scheduling is the only guarantee the
//!   lock needs.
//! - Cleanup is an RAII guard, so the flag resets on every exit path; the
//!   flag drops before the modal clears.

use std::cell::Cell;
use std::future::Future;

use recurra_api_models::Contract;

use crate::core::store::ToastKind;

/// Error label returned when a second action is attempted while one is in
/// flight.
pub const BUSY_ERROR: &str = "busy";

/// Modal warning shown when an action supplies no text of its own.
pub const DEFAULT_BUSY_MESSAGE: &str =
    "Please wait while we update your subscription. Do not refresh or close this page.";

/// Uniform result of every mutating subscription action.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionOutcome {
    /// Whether the mutation succeeded end to end.
    pub ok: bool,
    /// Post-mutation contract snapshot when the refetch located one.
    pub contract: Option<Contract>,
    /// Failure detail for callers; never shown raw to the user.
    pub error: Option<String>,
}

impl ActionOutcome {
    /// A successful mutation, with the refetched snapshot when found.
    #[must_use]
    pub const fn success(contract: Option<Contract>) -> Self {
        Self {
            ok: true,
            contract,
            error: None,
        }
    }

    /// A failed mutation carrying its error label.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            contract: None,
            error: Some(error.into()),
        }
    }

    /// The synchronous rejection handed to overlapping attempts.
    #[must_use]
    pub fn busy() -> Self {
        Self::failure(BUSY_ERROR)
    }
}

/// Port through which the lock and the action handlers talk to the page.
pub trait Feedback {
    /// A blocking modal with `message` became visible.
    fn busy_shown(&self, message: &str);
    /// The blocking modal went away.
    fn busy_cleared(&self);
    /// Show a transient toast, replacing any visible one.
    fn toast(&self, kind: ToastKind, message: &str);
}

/// Page-wide single-flight lock for mutating actions.
#[derive(Debug, Default)]
pub struct ActionGate {
    busy: Cell<bool>,
}

impl ActionGate {
    /// A gate with the flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            busy: Cell::new(false),
        }
    }

    /// Whether an action is currently in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    fn acquire(&self) -> Option<BusyGuard<'_>> {
        if self.busy.get() {
            return None;
        }
        self.busy.set(true);
        Some(BusyGuard { gate: self })
    }

    /// Run `action` under the lock with a blocking modal up.
    ///
    /// Rejects with [`ActionOutcome::busy`] without invoking `action` when
    /// another action is already in flight. Otherwise the flag is set, the
    /// modal shown (with `modal_text` or the default warning), the action
    /// awaited, and then the flag reset and the modal cleared, in that
    /// order, on every exit path.
    pub async fn with_busy<F, Fut>(
        &self,
        feedback: &dyn Feedback,
        modal_text: Option<&str>,
        action: F,
    ) -> ActionOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ActionOutcome>,
    {
        let Some(guard) = self.acquire() else {
            return ActionOutcome::busy();
        };
        feedback.busy_shown(modal_text.unwrap_or(DEFAULT_BUSY_MESSAGE));
        let outcome = action().await;
        drop(guard);
        feedback.busy_cleared();
        outcome
    }
}

struct BusyGuard<'a> {
    gate: &'a ActionGate,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.set(false);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::testing::{FeedbackEvent, RecordingFeedback, poll_once};
    use std::future;
    use std::pin::pin;

    #[tokio::test]
    async fn flag_is_clear_before_and_after_success() {
        let gate = ActionGate::new();
        let feedback = RecordingFeedback::default();
        assert!(!gate.is_busy());
        let outcome = gate
            .with_busy(&feedback, None, || {
                future::ready(ActionOutcome::success(None))
            })
            .await;
        assert!(outcome.ok);
        assert!(!gate.is_busy());
    }

    #[tokio::test]
    async fn flag_is_clear_after_a_failed_action() {
        let gate = ActionGate::new();
        let feedback = RecordingFeedback::default();
        let outcome = gate
            .with_busy(&feedback, None, || {
                future::ready(ActionOutcome::failure("pause_failed"))
            })
            .await;
        assert!(!outcome.ok);
        assert_eq!(outcome.error.as_deref(), Some("pause_failed"));
        assert!(!gate.is_busy());
    }

    #[tokio::test]
    async fn modal_text_defaults_when_not_supplied() {
        let gate = ActionGate::new();
        let feedback = RecordingFeedback::default();
        gate.with_busy(&feedback, None, || {
            future::ready(ActionOutcome::success(None))
        })
        .await;
        gate.with_busy(&feedback, Some("Pausing."), || {
            future::ready(ActionOutcome::success(None))
        })
        .await;
        assert_eq!(
            *feedback.events.borrow(),
            vec![
                FeedbackEvent::BusyShown(DEFAULT_BUSY_MESSAGE.to_string()),
                FeedbackEvent::BusyCleared,
                FeedbackEvent::BusyShown("Pausing.".to_string()),
                FeedbackEvent::BusyCleared,
            ]
        );
    }

    #[test]
    fn second_overlapping_call_is_rejected_without_running() {
        let gate = ActionGate::new();
        let feedback = RecordingFeedback::default();

        let mut first = pin!(gate.with_busy(&feedback, None, future::pending::<ActionOutcome>));
        assert!(poll_once(first.as_mut()).is_pending());
        assert!(gate.is_busy());

        let invoked = Cell::new(false);
        let second = pin!(gate.with_busy(&feedback, None, || {
            invoked.set(true);
            future::ready(ActionOutcome::success(None))
        }));
        let outcome = match poll_once(second) {
            std::task::Poll::Ready(outcome) => outcome,
            std::task::Poll::Pending => panic!("rejection must be synchronous"),
        };
        assert!(!outcome.ok);
        assert_eq!(outcome.error.as_deref(), Some(BUSY_ERROR));
        assert!(!invoked.get());

        // only the first call ever reached the modal
        assert_eq!(
            *feedback.events.borrow(),
            vec![FeedbackEvent::BusyShown(DEFAULT_BUSY_MESSAGE.to_string())]
        );
    }

    #[test]
    fn dropping_an_in_flight_action_releases_the_flag() {
        let gate = ActionGate::new();
        let feedback = RecordingFeedback::default();
        {
            let mut first =
                pin!(gate.with_busy(&feedback, None, future::pending::<ActionOutcome>));
            assert!(poll_once(first.as_mut()).is_pending());
            assert!(gate.is_busy());
        }
        assert!(!gate.is_busy());
    }
}
