//! Route parsing and path building for the portal.
//!
//! # Design
//! - Routing is a pure function of the current path; the browser binding in
//!   `app` only feeds paths in and pushes paths out.
//! - The legacy alias `/pages/portal` is normalized before dispatch so both
//!   spellings render the same screen.
//! - Dispatch order is home, list, detail, not-found; the patterns are
//!   disjoint so exactly one matches.

use std::borrow::Cow;

/// Canonical path prefix the panel owns inside the host page.
pub const PORTAL_PREFIX: &str = "/portal";

/// Legacy alias prefix still emitted by older storefront themes.
pub const LEGACY_PORTAL_PREFIX: &str = "/pages/portal";

/// Custom DOM event fired whenever the panel mutates or observes a history
/// change, for collaborators that want navigation without re-implementing
/// the interception.
pub const LOCATION_CHANGE_EVENT: &str = "recurra:location-change";

/// Contract-list status filter carried in the list route's query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Contracts that are not cancelled (active and paused).
    #[default]
    Active,
    /// Cancelled contracts only.
    Cancelled,
    /// Every contract the backend returned.
    All,
}

impl StatusFilter {
    /// Parse a query-string value, defaulting unknown values to `Active`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "cancelled" => Self::Cancelled,
            "all" => Self::All,
            _ => Self::Active,
        }
    }

    /// The query-string spelling of this filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::All => "all",
        }
    }

    /// All filters, in tab order for the list screen.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Active, Self::Cancelled, Self::All]
    }
}

/// A screen the router can dispatch to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Portal landing screen.
    Home,
    /// Contract list, optionally filtered via `?status=`.
    Subscriptions {
        /// Explicit filter from the query string; `None` when absent.
        filter: Option<StatusFilter>,
    },
    /// Single-contract detail screen keyed by short identifier.
    SubscriptionDetail {
        /// Contract short identifier (final gid path segment).
        id: String,
    },
    /// Anything under the portal prefix that matches no screen.
    NotFound,
}

impl Route {
    /// Dispatch a path and query string to exactly one screen.
    #[must_use]
    pub fn parse(path: &str, query: &str) -> Self {
        let normalized = normalize_path(path);
        let trimmed = normalized.trim_end_matches('/');
        if trimmed == PORTAL_PREFIX {
            return Self::Home;
        }
        if let Some(rest) = trimmed.strip_prefix(PORTAL_PREFIX) {
            if rest == "/subscriptions" {
                return Self::Subscriptions {
                    filter: status_from_query(query),
                };
            }
            if let Some(id) = rest.strip_prefix("/subscription/") {
                if !id.is_empty() && !id.contains('/') {
                    return Self::SubscriptionDetail {
                        id: decode_component(id),
                    };
                }
            }
        }
        Self::NotFound
    }

    /// Rebuild the canonical path (query included) for this route.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => PORTAL_PREFIX.to_string(),
            Self::Subscriptions { filter: None } => format!("{PORTAL_PREFIX}/subscriptions"),
            Self::Subscriptions {
                filter: Some(filter),
            } => format!("{PORTAL_PREFIX}/subscriptions?status={}", filter.as_str()),
            Self::SubscriptionDetail { id } => {
                format!("{PORTAL_PREFIX}/subscription/{}", urlencoding::encode(id))
            }
            Self::NotFound => format!("{PORTAL_PREFIX}/404"),
        }
    }
}

/// Rewrite the legacy alias prefix to the canonical one; other paths pass
/// through untouched.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    path.strip_prefix(LEGACY_PORTAL_PREFIX).map_or_else(
        || path.to_string(),
        |rest| {
            if rest.is_empty() || rest.starts_with('/') {
                format!("{PORTAL_PREFIX}{rest}")
            } else {
                path.to_string()
            }
        },
    )
}

/// Whether a path (canonical or legacy spelling) belongs to the panel.
#[must_use]
pub fn is_portal_path(path: &str) -> bool {
    owns_prefix(path, PORTAL_PREFIX) || owns_prefix(path, LEGACY_PORTAL_PREFIX)
}

/// Decide whether a clicked anchor's `href` should be routed in place.
///
/// Returns the normalized path-plus-query to push when the href targets the
/// panel, `None` when the browser should navigate normally.
#[must_use]
pub fn interception_target(href: &str) -> Option<String> {
    let href = href.split('#').next().unwrap_or_default();
    let (path, query) = href.split_once('?').map_or((href, ""), |(p, q)| (p, q));
    if !is_portal_path(path) {
        return None;
    }
    let mut target = normalize_path(path);
    if !query.is_empty() {
        target.push('?');
        target.push_str(query);
    }
    Some(target)
}

/// Extract the explicit status filter from a query string, if present.
#[must_use]
pub fn status_from_query(query: &str) -> Option<StatusFilter> {
    for pair in query.trim_start_matches('?').split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() == Some("status") {
            let raw = parts.next().unwrap_or_default();
            return Some(StatusFilter::parse(decode_component(raw).trim()));
        }
    }
    None
}

fn owns_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_alias_renders_the_same_screen() {
        assert_eq!(
            Route::parse("/pages/portal", ""),
            Route::parse("/portal", "")
        );
        assert_eq!(
            Route::parse("/pages/portal/subscriptions", "?status=cancelled"),
            Route::Subscriptions {
                filter: Some(StatusFilter::Cancelled)
            }
        );
    }

    #[test]
    fn dispatch_is_disjoint_by_construction() {
        assert_eq!(Route::parse("/portal", ""), Route::Home);
        assert_eq!(Route::parse("/portal/", ""), Route::Home);
        assert_eq!(
            Route::parse("/portal/subscriptions", ""),
            Route::Subscriptions { filter: None }
        );
        assert_eq!(
            Route::parse("/portal/subscription/55", ""),
            Route::SubscriptionDetail {
                id: "55".to_string()
            }
        );
        assert_eq!(Route::parse("/portal/subscriptions/extra", ""), Route::NotFound);
        assert_eq!(Route::parse("/portal/subscription/", ""), Route::NotFound);
        assert_eq!(Route::parse("/portal/unknown", ""), Route::NotFound);
        assert_eq!(Route::parse("/checkout", ""), Route::NotFound);
    }

    #[test]
    fn status_query_parses_and_defaults() {
        assert_eq!(status_from_query(""), None);
        assert_eq!(status_from_query("?page=2"), None);
        assert_eq!(
            status_from_query("?status=cancelled"),
            Some(StatusFilter::Cancelled)
        );
        assert_eq!(status_from_query("status=ALL"), Some(StatusFilter::All));
        assert_eq!(
            status_from_query("?status=bogus"),
            Some(StatusFilter::Active)
        );
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home,
            Route::Subscriptions { filter: None },
            Route::Subscriptions {
                filter: Some(StatusFilter::All),
            },
            Route::SubscriptionDetail {
                id: "55".to_string(),
            },
        ] {
            let path = route.to_path();
            let (path, query) = path.split_once('?').unwrap_or((path.as_str(), ""));
            assert_eq!(Route::parse(path, query), route);
        }
    }

    #[test]
    fn interception_only_claims_portal_anchors() {
        assert_eq!(
            interception_target("/portal/subscriptions?status=cancelled").as_deref(),
            Some("/portal/subscriptions?status=cancelled")
        );
        assert_eq!(
            interception_target("/pages/portal#top").as_deref(),
            Some("/portal")
        );
        assert_eq!(interception_target("/portfolio"), None);
        assert_eq!(interception_target("/pages/contact"), None);
        assert_eq!(interception_target("https://example.com/portal"), None);
        assert_eq!(interception_target("/cart"), None);
    }
}
