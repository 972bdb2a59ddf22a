//! Pure control-layer modules: configuration, routing, the action gate, and
//! the page-wide feedback store. Everything here compiles and tests natively.

pub mod config;
pub mod gate;
pub mod routes;
pub mod store;
