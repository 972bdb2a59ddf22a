//! Browser history binding and the location-change signal.

use gloo::utils::window;
use wasm_bindgen::JsValue;
use web_sys::CustomEvent;

use crate::core::routes::{LOCATION_CHANGE_EVENT, Route};

/// Parse the screen for the browser's current path and query.
pub(crate) fn current_route() -> Route {
    let location = window().location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

/// Push a new history entry without reloading, then announce it.
pub(crate) fn push_path(path: &str) {
    if let Ok(history) = window().history() {
        if history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .is_ok()
        {
            notify_location_changed();
        }
    }
}

/// Fire the public location-change event for outside observers.
pub(crate) fn notify_location_changed() {
    if let Ok(event) = CustomEvent::new(LOCATION_CHANGE_EVENT) {
        let _ = window().dispatch_event(&event);
    }
}
