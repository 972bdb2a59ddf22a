//! Pure contract-list helpers shared by screens and handlers.

use chrono::{DateTime, Utc};
use recurra_api_models::Contract;

use crate::core::routes::StatusFilter;

/// Scan a contract list for the entry whose derived short identifier equals
/// `short_id` (string equality, first match wins).
#[must_use]
pub fn find_by_short_id<'a>(contracts: &'a [Contract], short_id: &str) -> Option<&'a Contract> {
    contracts
        .iter()
        .find(|contract| contract.short_id() == short_id)
}

/// Apply the list screen's status filter.
///
/// `Active` keeps everything not cancelled, so paused contracts stay visible
/// where the customer can resume them.
#[must_use]
pub fn filter_by_status(contracts: &[Contract], filter: StatusFilter) -> Vec<Contract> {
    contracts
        .iter()
        .filter(|contract| match filter {
            StatusFilter::Active => !contract.is_cancelled(),
            StatusFilter::Cancelled => contract.is_cancelled(),
            StatusFilter::All => true,
        })
        .cloned()
        .collect()
}

/// Display name for a contract card.
#[must_use]
pub fn title_label(contract: &Contract) -> &str {
    contract.title.as_deref().unwrap_or("Subscription")
}

/// Human-readable next billing date, when the backend supplied one.
#[must_use]
pub fn billing_label(contract: &Contract) -> Option<String> {
    contract.next_billing_at.as_ref().map(format_date)
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %e, %Y").to_string()
}
