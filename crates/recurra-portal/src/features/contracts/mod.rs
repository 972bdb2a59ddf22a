//! Subscription contract feature: list/detail state and mutation flows.
//!
//! # Design
//! - Mutation orchestration runs behind the action gate and the feedback
//!   port, so every flow tests natively with mock transports.
//! - Views stay thin: they render snapshots and forward user intent.

pub mod actions;
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
