//! Feedback port implementation over the yewdux store.

use yewdux::prelude::Dispatch;

use crate::core::gate::Feedback;
use crate::core::store::{
    PortalStore, ToastKind, clear_busy_message, set_busy_message, show_toast,
};

/// Drives the blocking overlay and the toast slot through the store.
pub(crate) struct StoreFeedback {
    dispatch: Dispatch<PortalStore>,
}

impl StoreFeedback {
    pub(crate) fn new() -> Self {
        Self {
            dispatch: Dispatch::new(),
        }
    }
}

impl Feedback for StoreFeedback {
    fn busy_shown(&self, message: &str) {
        let message = message.to_string();
        self.dispatch
            .reduce_mut(|store| set_busy_message(store, message));
    }

    fn busy_cleared(&self) {
        self.dispatch.reduce_mut(clear_busy_message);
    }

    fn toast(&self, kind: ToastKind, message: &str) {
        let message = message.to_string();
        self.dispatch.reduce_mut(|store| {
            let _ = show_toast(store, kind, message);
        });
    }
}
