//! Entry wiring: configuration discovery and mount-point resolution.
//!
//! # Design
//! - Prefer the JSON document the host page embeds; fall back to the
//!   injected window global, then to defaults.
//! - A malformed document never blocks mounting; it logs and defaults.

use gloo::utils::{document, window};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::core::config::{CONFIG_ELEMENT_ID, CONFIG_GLOBAL, PortalConfig};

/// Resolve the bootstrap configuration from the host page.
pub(crate) fn load_config() -> PortalConfig {
    let Some(raw) = embedded_config().or_else(global_config) else {
        return PortalConfig::default();
    };
    PortalConfig::from_json(&raw).unwrap_or_else(|error| {
        gloo::console::warn!(
            "invalid portal configuration, using defaults",
            error.to_string()
        );
        PortalConfig::default()
    })
}

/// Locate the mount container named by the configuration.
pub(crate) fn mount_element(config: &PortalConfig) -> Option<Element> {
    document().get_element_by_id(config.root_id())
}

fn embedded_config() -> Option<String> {
    let element = document().get_element_by_id(CONFIG_ELEMENT_ID)?;
    element
        .text_content()
        .filter(|raw| !raw.trim().is_empty())
}

fn global_config() -> Option<String> {
    let target: &JsValue = window().as_ref();
    let value = js_sys::Reflect::get(target, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&value).ok().map(String::from)
}
