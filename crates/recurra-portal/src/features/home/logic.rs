//! Pure helpers for the landing screen.

use recurra_api_models::{CustomerInfo, HomePayload, PortalSummary};

/// Greeting line for the landing screen header.
#[must_use]
pub fn greeting(customer: Option<&CustomerInfo>) -> String {
    customer
        .and_then(|customer| customer.first_name.as_deref())
        .map_or_else(
            || "Welcome back.".to_string(),
            |name| format!("Welcome back, {name}."),
        )
}

/// Aggregate counts for the summary cards, computed from the contract list
/// when the backend sent none.
#[must_use]
pub fn summary_counts(payload: &HomePayload) -> PortalSummary {
    payload.summary.unwrap_or_else(|| {
        let mut summary = PortalSummary::default();
        for contract in payload.contract_list().unwrap_or_default() {
            if contract.is_cancelled() {
                summary.cancelled += 1;
            } else if contract.is_paused() {
                summary.paused += 1;
            } else {
                summary.active += 1;
            }
        }
        summary
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn greeting_uses_the_first_name_when_known() {
        assert_eq!(greeting(None), "Welcome back.");
        let customer: CustomerInfo =
            serde_json::from_value(json!({"first_name": "Ada"})).unwrap();
        assert_eq!(greeting(Some(&customer)), "Welcome back, Ada.");
    }

    #[test]
    fn summary_prefers_the_backend_counts() {
        let payload: HomePayload = serde_json::from_value(json!({
            "ok": true,
            "summary": {"active": 5, "paused": 2, "cancelled": 1},
            "contracts": [{"id": "gid://shop/Contract/1", "status": "active"}],
        }))
        .unwrap();
        assert_eq!(summary_counts(&payload).active, 5);
    }

    #[test]
    fn summary_falls_back_to_counting_the_list() {
        let payload: HomePayload = serde_json::from_value(json!({
            "ok": true,
            "contracts": [
                {"id": "gid://shop/Contract/1", "status": "active"},
                {"id": "gid://shop/Contract/2", "status": "paused"},
                {"id": "gid://shop/Contract/3", "status": "cancelled"},
            ],
        }))
        .unwrap();
        let summary = summary_counts(&payload);
        assert_eq!((summary.active, summary.paused, summary.cancelled), (1, 1, 1));
    }
}
