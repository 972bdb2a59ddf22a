//! Yewdux store for page-wide feedback state.
//!
//! # Design
//! - One store slice per page holds the blocking-modal message and the
//!   single toast slot; screens keep their fetched data locally.
//! - Reducers are free functions over the slice so they test natively.

use yewdux::store::Store;

/// How long a toast stays up before it removes itself.
pub const TOAST_DISMISS_MS: u32 = 15_000;

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral notice.
    Info,
    /// A mutation completed.
    Success,
    /// A mutation failed.
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identity used to cancel stale dismissal timers.
    pub id: u64,
    /// Severity, which drives styling only.
    pub kind: ToastKind,
    /// User-facing text.
    pub message: String,
}

/// Global portal store shared by the shell and the feedback port.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct PortalStore {
    /// Blocking overlay message while a mutation is in flight.
    pub busy_message: Option<String>,
    /// Single toast slot; a new toast replaces any visible one.
    pub toast: Option<Toast>,
    /// Source for toast identities.
    pub next_toast_id: u64,
}

/// Show a toast, displacing whichever one is visible. Returns the new id so
/// the caller can schedule its dismissal.
#[must_use]
pub fn show_toast(store: &mut PortalStore, kind: ToastKind, message: impl Into<String>) -> u64 {
    store.next_toast_id += 1;
    store.toast = Some(Toast {
        id: store.next_toast_id,
        kind,
        message: message.into(),
    });
    store.next_toast_id
}

/// Remove the toast, but only when it is still the one identified by `id`.
pub fn dismiss_toast(store: &mut PortalStore, id: u64) {
    if store.toast.as_ref().is_some_and(|toast| toast.id == id) {
        store.toast = None;
    }
}

/// Raise the blocking overlay.
pub fn set_busy_message(store: &mut PortalStore, message: impl Into<String>) {
    store.busy_message = Some(message.into());
}

/// Drop the blocking overlay.
pub fn clear_busy_message(store: &mut PortalStore) {
    store.busy_message = None;
}
