//! Orchestration for contract mutations.
//!
//! # Design
//! - Every handler runs under the action gate: overlapping attempts reject
//!   synchronously with a `busy` outcome and never reach the network.
//! - Handlers convert every failure (transport, domain, bad identifier)
//!   into an [`ActionOutcome`] plus a generic error toast; raw error text
//!   never reaches the customer.
//! - After a successful mutation the affected contract is refetched through
//!   a forced home read so the screen reflects server state.

use recurra_api_models::{ActionResponse, Contract, ContractGid, GidError};
use thiserror::Error;

use crate::core::gate::{ActionGate, ActionOutcome, Feedback};
use crate::core::store::ToastKind;
use crate::features::contracts::actions::ContractAction;
use crate::features::contracts::api::{post_pause, post_resume};
use crate::features::contracts::state::find_by_short_id;
use crate::services::api::{ApiClient, ApiError};

/// Modal text while a pause is in flight.
pub const PAUSE_MODAL_MESSAGE: &str = "Pausing your subscription.";
/// Modal text while a resume is in flight.
pub const RESUME_MODAL_MESSAGE: &str = "Resuming your subscription.";
/// Generic apology shown for any failed mutation.
pub const ACTION_FAILED_MESSAGE: &str = "Sorry, something went wrong. Please try again.";
/// Fallback error label when the pause route fails without detail.
pub const PAUSE_FALLBACK_ERROR: &str = "pause_failed";
/// Fallback error label when the resume route fails without detail.
pub const RESUME_FALLBACK_ERROR: &str = "resume_failed";
/// Days until resume when the customer picked nothing.
pub const DEFAULT_RESUME_DAYS: u32 = 1;

#[derive(Debug, Error)]
enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Domain(String),
    #[error(transparent)]
    Gid(#[from] GidError),
}

/// Dispatch one contract action through its handler.
pub async fn run_action(
    api: &ApiClient,
    gate: &ActionGate,
    feedback: &dyn Feedback,
    id: &ContractGid,
    action: ContractAction,
) -> ActionOutcome {
    match action {
        ContractAction::Pause { days } => {
            pause_subscription(api, gate, feedback, id, days).await
        }
        ContractAction::Resume { in_days } => {
            resume_subscription(api, gate, feedback, id, in_days).await
        }
    }
}

/// Pause a contract for `pause_days` days.
///
/// On success the read caches are cleared, the contract refetched, and a
/// success toast naming the pause length shown.
pub async fn pause_subscription(
    api: &ApiClient,
    gate: &ActionGate,
    feedback: &dyn Feedback,
    id: &ContractGid,
    pause_days: u32,
) -> ActionOutcome {
    gate.with_busy(feedback, Some(PAUSE_MODAL_MESSAGE), || async move {
        settle(
            feedback,
            pause_flow(api, id, pause_days).await,
            &pause_success_message(pause_days),
        )
    })
    .await
}

/// Resume a contract, with billing restarting after `resume_in_days`
/// (backend default of one day when unset).
pub async fn resume_subscription(
    api: &ApiClient,
    gate: &ActionGate,
    feedback: &dyn Feedback,
    id: &ContractGid,
    resume_in_days: Option<u32>,
) -> ActionOutcome {
    let days = resume_in_days.unwrap_or(DEFAULT_RESUME_DAYS);
    gate.with_busy(feedback, Some(RESUME_MODAL_MESSAGE), || async move {
        settle(
            feedback,
            resume_flow(api, id, days).await,
            &resume_success_message(days),
        )
    })
    .await
}

/// Force a fresh home read and scan it for the contract with `short_id`.
///
/// Returns `None` when the contract is gone or the payload carries no
/// usable list.
///
/// # Errors
///
/// Propagates [`ApiError`] when the forced read itself fails.
pub async fn refresh_contract_by_short_id(
    api: &ApiClient,
    short_id: &str,
) -> Result<Option<Contract>, ApiError> {
    let home = api.fetch_home(true).await?;
    Ok(home
        .contract_list()
        .and_then(|contracts| find_by_short_id(contracts, short_id))
        .cloned())
}

async fn pause_flow(
    api: &ApiClient,
    id: &ContractGid,
    pause_days: u32,
) -> Result<Option<Contract>, ActionError> {
    let contract_id = id.numeric_id()?;
    let response = post_pause(api, contract_id, pause_days).await?;
    ensure_applied(response, PAUSE_FALLBACK_ERROR)?;
    api.clear_caches();
    Ok(refresh_contract_by_short_id(api, id.short_id()).await?)
}

async fn resume_flow(
    api: &ApiClient,
    id: &ContractGid,
    resume_in_days: u32,
) -> Result<Option<Contract>, ActionError> {
    let contract_id = id.numeric_id()?;
    let response = post_resume(api, contract_id, resume_in_days).await?;
    ensure_applied(response, RESUME_FALLBACK_ERROR)?;
    // resume leaves the read caches in place; the forced fetch below still
    // refreshes the one entry the screen shows
    Ok(refresh_contract_by_short_id(api, id.short_id()).await?)
}

fn ensure_applied(response: ActionResponse, fallback: &str) -> Result<(), ActionError> {
    if response.ok {
        return Ok(());
    }
    Err(ActionError::Domain(
        response.error.unwrap_or_else(|| fallback.to_string()),
    ))
}

fn settle(
    feedback: &dyn Feedback,
    result: Result<Option<Contract>, ActionError>,
    success_message: &str,
) -> ActionOutcome {
    match result {
        Ok(contract) => {
            feedback.toast(ToastKind::Success, success_message);
            ActionOutcome::success(contract)
        }
        Err(error) => {
            feedback.toast(ToastKind::Error, ACTION_FAILED_MESSAGE);
            ActionOutcome::failure(error.to_string())
        }
    }
}

/// Success toast for a completed pause.
#[must_use]
pub fn pause_success_message(pause_days: u32) -> String {
    format!("Your subscription is paused for {pause_days} days.")
}

/// Success toast for a completed resume.
#[must_use]
pub fn resume_success_message(resume_in_days: u32) -> String {
    if resume_in_days == 1 {
        "Your subscription resumes tomorrow.".to_string()
    } else {
        format!("Your subscription resumes in {resume_in_days} days.")
    }
}
