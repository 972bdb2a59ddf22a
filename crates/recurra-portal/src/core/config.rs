//! Host-page configuration injected at bootstrap.
//!
//! # Design
//! - The host storefront embeds one JSON configuration document; the panel
//!   reads it once and treats it as immutable.
//! - Unknown fields are ignored and every field has a default, so an older
//!   host page keeps working against a newer bundle.

use serde::Deserialize;

/// Element id of the JSON configuration document embedded by the host page.
pub const CONFIG_ELEMENT_ID: &str = "recurra-portal-config";

/// Window property carrying the bootstrap configuration object, checked when
/// no configuration document element is present.
pub const CONFIG_GLOBAL: &str = "RecurraPortalConfig";

/// Fallback mount container id when the configuration names none.
pub const DEFAULT_ROOT_ID: &str = "recurra-portal-root";

/// Fallback backend base path for the hosted subscription proxy.
pub const DEFAULT_ENDPOINT: &str = "/apps/recurra/";

/// Read-only configuration handed over by the host page bootstrap.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PortalConfig {
    /// Backend base path all API routes are joined onto.
    pub endpoint: String,
    /// Verbose console logging of API failures.
    pub debug: bool,
    /// Theme-editor preview flag; the panel renders statically and performs
    /// no network I/O while set.
    pub is_design_mode: bool,
    /// Element id of the mount container.
    pub root: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debug: false,
            is_design_mode: false,
            root: None,
        }
    }
}

impl PortalConfig {
    /// Parse a bootstrap configuration document.
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error when the document is not valid
    /// JSON; callers fall back to [`PortalConfig::default`].
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The mount container element id.
    #[must_use]
    pub fn root_id(&self) -> &str {
        self.root.as_deref().unwrap_or(DEFAULT_ROOT_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_page_document() {
        let config = PortalConfig::from_json(
            r#"{"endpoint": "/apps/portal/", "debug": true, "isDesignMode": true, "root": "panel"}"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "/apps/portal/");
        assert!(config.debug);
        assert!(config.is_design_mode);
        assert_eq!(config.root_id(), "panel");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = PortalConfig::from_json("{}").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(!config.debug);
        assert!(!config.is_design_mode);
        assert_eq!(config.root_id(), DEFAULT_ROOT_ID);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = PortalConfig::from_json(r#"{"endpoint": "/x/", "theme": "dark"}"#).unwrap();
        assert_eq!(config.endpoint, "/x/");
    }

    #[test]
    fn invalid_documents_surface_the_parse_error() {
        assert!(PortalConfig::from_json("not json").is_err());
    }
}
