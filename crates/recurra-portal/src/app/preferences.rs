//! Persisted customer preferences for the panel.

use gloo::storage::{LocalStorage, Storage};

use crate::core::routes::StatusFilter;

pub(crate) const STATUS_FILTER_KEY: &str = "recurra.portal.status_filter";

/// The list filter the customer last used, when one was persisted.
pub(crate) fn load_status_filter() -> Option<StatusFilter> {
    LocalStorage::get::<String>(STATUS_FILTER_KEY)
        .ok()
        .map(|value| StatusFilter::parse(&value))
}

/// Remember the list filter for the next visit.
pub(crate) fn persist_status_filter(filter: StatusFilter) {
    if let Err(error) = LocalStorage::set(STATUS_FILTER_KEY, filter.as_str()) {
        gloo::console::warn!("failed to persist status filter", error.to_string());
    }
}
