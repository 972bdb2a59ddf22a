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
//! Shared HTTP DTOs for the Recurra subscription portal backend.
//!
//! These types describe the wire contract between the browser panel and the
//! hosted subscription proxy: the home payload with the customer's contract
//! list, and the pause/resume action bodies. The panel never mutates these
//! snapshots locally; it replaces them wholesale after a successful action.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Failure to derive the backend's numeric key from a contract identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GidError {
    /// The identifier carried no usable trailing path segment.
    #[error("contract identifier has no trailing path segment")]
    MissingSegment,
    /// The trailing segment is not a decimal number.
    #[error("contract identifier segment {0:?} is not numeric")]
    NotNumeric(String),
}

/// Opaque hierarchical identifier for a subscription contract.
///
/// Only the final path segment (the *short identifier*) is meaningful to the
/// pause/resume routes; everything before it is backend namespace.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ContractGid(String);

impl ContractGid {
    /// Wrap a raw global identifier string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The full identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final path segment, used as the backend's lookup key.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }

    /// The short identifier parsed as the backend's numeric key.
    ///
    /// # Errors
    ///
    /// Returns [`GidError`] when the identifier has no trailing segment or
    /// the segment is not a decimal number.
    pub fn numeric_id(&self) -> Result<u64, GidError> {
        let segment = self.short_id();
        if segment.is_empty() {
            return Err(GidError::MissingSegment);
        }
        segment
            .parse()
            .map_err(|_| GidError::NotNumeric(segment.to_string()))
    }
}

impl fmt::Display for ContractGid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContractGid {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ContractGid {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A customer's subscription contract as returned by the backend.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Contract {
    /// Global identifier.
    pub id: ContractGid,
    /// Backend status label (opaque to the panel beyond display/filtering).
    #[serde(default)]
    pub status: String,
    /// Display name of the subscribed product or plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Recurring price, pre-formatted by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// ISO currency code for the price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Next scheduled billing attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_billing_at: Option<DateTime<Utc>>,
    /// Human-readable delivery cadence, e.g. "every 30 days".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_interval: Option<String>,
}

impl Contract {
    /// The contract's short identifier (final gid path segment).
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.short_id()
    }

    /// Whether the backend reports this contract as cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status.eq_ignore_ascii_case("cancelled")
    }

    /// Whether the backend reports this contract as paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status.eq_ignore_ascii_case("paused")
    }
}

/// Customer identity fields surfaced on the portal home payload.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CustomerInfo {
    /// Given name for greetings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Account email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Aggregate contract counts surfaced on the portal home payload.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PortalSummary {
    /// Contracts currently active.
    #[serde(default)]
    pub active: u32,
    /// Contracts currently paused.
    #[serde(default)]
    pub paused: u32,
    /// Contracts cancelled.
    #[serde(default)]
    pub cancelled: u32,
}

/// Response body for the `home` read route.
///
/// The contract list has shipped under two field names; `contracts` wins when
/// both are present. Either list deserializes leniently: a malformed value
/// becomes an absent list rather than failing the whole payload.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct HomePayload {
    /// Whether the backend considers the request successful.
    #[serde(default)]
    pub ok: bool,
    /// Customer identity, when the session is recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerInfo>,
    /// Aggregate counts, when the backend computes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<PortalSummary>,
    /// Full contract list (current payloads).
    #[serde(
        default,
        deserialize_with = "lenient_contract_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub contracts: Option<Vec<Contract>>,
    /// Preview contract list (legacy payloads).
    #[serde(
        default,
        deserialize_with = "lenient_contract_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub contracts_preview: Option<Vec<Contract>>,
}

impl HomePayload {
    /// Resolve the contract list across both supported field names.
    #[must_use]
    pub fn contract_list(&self) -> Option<&[Contract]> {
        self.contracts
            .as_deref()
            .or(self.contracts_preview.as_deref())
    }
}

fn lenient_contract_list<'de, D>(deserializer: D) -> Result<Option<Vec<Contract>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Request body for `POST pause`.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PauseRequest {
    /// Backend numeric contract key (gid short identifier).
    pub contract_id: u64,
    /// Number of days the contract stays paused.
    pub pause_days: u32,
}

/// Request body for `POST resume`.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    /// Backend numeric contract key (gid short identifier).
    pub contract_id: u64,
    /// Days until billing resumes.
    pub resume_in_days: u32,
}

/// Response body shared by all mutation routes.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the mutation was applied. Absent means failure.
    #[serde(default)]
    pub ok: bool,
    /// Machine-readable failure label, e.g. `already_paused`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn short_id_is_final_path_segment() {
        let gid = ContractGid::from("gid://shop/SubscriptionContract/55");
        assert_eq!(gid.short_id(), "55");
        assert_eq!(gid.numeric_id(), Ok(55));
    }

    #[test]
    fn short_id_tolerates_trailing_slash_and_bare_ids() {
        assert_eq!(ContractGid::from("gid://shop/Contract/7/").short_id(), "7");
        assert_eq!(ContractGid::from("42").short_id(), "42");
        assert_eq!(ContractGid::from("42").numeric_id(), Ok(42));
    }

    #[test]
    fn numeric_id_rejects_non_numeric_segments() {
        let gid = ContractGid::from("gid://shop/Contract/abc");
        assert_eq!(
            gid.numeric_id(),
            Err(GidError::NotNumeric("abc".to_string()))
        );
        assert_eq!(ContractGid::from("").numeric_id(), Err(GidError::MissingSegment));
    }

    #[test]
    fn home_payload_resolves_both_list_field_names() {
        let current: HomePayload = serde_json::from_value(json!({
            "ok": true,
            "contracts": [{"id": "gid://shop/Contract/1", "status": "active"}],
        }))
        .unwrap();
        assert_eq!(current.contract_list().unwrap().len(), 1);

        let legacy: HomePayload = serde_json::from_value(json!({
            "ok": true,
            "contracts_preview": [{"id": "gid://shop/Contract/2", "status": "paused"}],
        }))
        .unwrap();
        assert_eq!(legacy.contract_list().unwrap()[0].short_id(), "2");
    }

    #[test]
    fn malformed_contract_list_becomes_absent() {
        let payload: HomePayload = serde_json::from_value(json!({
            "ok": true,
            "contracts": "not-a-list",
        }))
        .unwrap();
        assert!(payload.contract_list().is_none());
    }

    #[test]
    fn action_bodies_use_backend_field_names() {
        let pause = serde_json::to_value(PauseRequest {
            contract_id: 42,
            pause_days: 30,
        })
        .unwrap();
        assert_eq!(pause, json!({"contractId": 42, "pauseDays": 30}));

        let resume = serde_json::to_value(ResumeRequest {
            contract_id: 42,
            resume_in_days: 1,
        })
        .unwrap();
        assert_eq!(resume, json!({"contractId": 42, "resumeInDays": 1}));
    }

    #[test]
    fn action_response_defaults_to_failure() {
        let response: ActionResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!response.ok);
        assert!(response.error.is_none());

        let failed: ActionResponse =
            serde_json::from_value(json!({"ok": false, "error": "already_paused"})).unwrap();
        assert_eq!(failed.error.as_deref(), Some("already_paused"));
    }

    #[test]
    fn contract_status_helpers_ignore_case() {
        let contract: Contract = serde_json::from_value(json!({
            "id": "gid://shop/Contract/9",
            "status": "Cancelled",
        }))
        .unwrap();
        assert!(contract.is_cancelled());
        assert!(!contract.is_paused());
    }
}
