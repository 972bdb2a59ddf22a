//! API calls for contract mutations.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared client for caching, negotiation, and debug logging.

use recurra_api_models::{ActionResponse, PauseRequest, ResumeRequest};

use crate::services::api::{ApiClient, ApiError, ROUTE_PAUSE, ROUTE_RESUME};

/// POST the pause mutation for one contract.
///
/// # Errors
///
/// Propagates [`ApiError`] from the request.
pub async fn post_pause(
    api: &ApiClient,
    contract_id: u64,
    pause_days: u32,
) -> Result<ActionResponse, ApiError> {
    api.post_action(
        ROUTE_PAUSE,
        &PauseRequest {
            contract_id,
            pause_days,
        },
    )
    .await
}

/// POST the resume mutation for one contract.
///
/// # Errors
///
/// Propagates [`ApiError`] from the request.
pub async fn post_resume(
    api: &ApiClient,
    contract_id: u64,
    resume_in_days: u32,
) -> Result<ActionResponse, ApiError> {
    api.post_action(
        ROUTE_RESUME,
        &ResumeRequest {
            contract_id,
            resume_in_days,
        },
    )
    .await
}
