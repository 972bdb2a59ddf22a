#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Recurra customer portal: a browser-embedded panel for viewing and
//! mutating subscription contracts without a full page reload.
//!
//! The crate splits into a wasm-only shell (`app`, `components`, the feature
//! views) and pure control logic (`core`, `services`, the feature state and
//! orchestration modules) that compiles and tests natively.

pub mod core;
pub mod features;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod testing;
