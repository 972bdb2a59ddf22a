//! Shared singleton context for API access and the action gate.
//!
//! # Design
//! - Wire exactly one client and one gate per app boot; screens receive
//!   them through context instead of probing a shared namespace.

use std::rc::Rc;

use crate::core::config::PortalConfig;
use crate::core::gate::ActionGate;
use crate::services::api::{ApiClient, FetchTransport};

/// One-per-page wiring handed to every screen through context.
#[derive(Clone)]
pub(crate) struct PortalCtx {
    /// Singleton API client over the configured base path.
    pub api: Rc<ApiClient>,
    /// Page-wide single-flight lock.
    pub gate: Rc<ActionGate>,
}

impl PortalCtx {
    /// Wire the context once per app boot.
    pub(crate) fn new(config: &PortalConfig) -> Self {
        Self {
            api: Rc::new(ApiClient::new(
                config.endpoint.clone(),
                config.debug,
                Rc::new(FetchTransport),
            )),
            gate: Rc::new(ActionGate::new()),
        }
    }
}

impl PartialEq for PortalCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api) && Rc::ptr_eq(&self.gate, &other.gate)
    }
}
