//! Contract mutation intents emitted by the detail screen.
//!
//! # Design
//! - Capture user intent separate from rendering; every future mutating
//!   action adds a variant here and an arm in `logic::run_action`.

/// A mutation the customer asked for on one contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractAction {
    /// Pause billing and deliveries for a number of days.
    Pause {
        /// How long the contract stays paused.
        days: u32,
    },
    /// Resume a paused contract.
    Resume {
        /// Days until billing resumes; the backend default is one.
        in_days: Option<u32>,
    },
}
