//! HTTP access layer for the portal backend.
//!
//! # Design
//! - The transport is a port so the client logic tests natively; the wasm
//!   implementation rides on `gloo-net`.
//! - Read responses cache under their logical route name; `force` bypasses
//!   and overwrites, `clear_caches` empties the map after mutations.
//! - No retries: a failed request surfaces to the caller, which decides.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use recurra_api_models::{ActionResponse, HomePayload};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Logical name of the home read route.
pub const ROUTE_HOME: &str = "home";
/// Logical name of the pause mutation route.
pub const ROUTE_PAUSE: &str = "pause";
/// Logical name of the resume mutation route.
pub const ROUTE_RESUME: &str = "resume";

/// Failures surfaced by the access layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, for debug logging only.
        body: String,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// HTTP method subset the portal uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Idempotent read.
    Get,
    /// Mutation.
    Post,
}

/// A transport-level request built by the [`ApiClient`].
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// Method to issue.
    pub method: Method,
    /// Fully joined URL.
    pub url: String,
    /// JSON body for mutations.
    pub body: Option<Value>,
}

/// A transport-level response before content negotiation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// `content-type` header, when present.
    pub content_type: Option<String>,
    /// Raw body text.
    pub body: String,
}

impl HttpResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Pluggable request executor behind the [`ApiClient`].
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Issue one request and produce the raw response.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Parsed response body after content negotiation.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    /// The response declared a JSON content type and parsed as JSON.
    Json(Value),
    /// Anything else, kept opaque.
    Text(String),
}

impl ResponseBody {
    fn into_json(self) -> Result<Value, ApiError> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(_) => Err(ApiError::Decode("expected a JSON body".to_string())),
        }
    }
}

/// Per-request options.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestOptions {
    /// Bypass the read cache and overwrite it with the fresh result.
    pub force: bool,
    /// Cache the parsed body under the route name (idempotent reads only).
    pub cache: bool,
}

/// Client for the configured portal backend base path.
pub struct ApiClient {
    base_url: String,
    debug: bool,
    transport: Rc<dyn HttpTransport>,
    cache: RefCell<HashMap<String, ResponseBody>>,
}

impl ApiClient {
    /// Build a client over `transport` for the configured base path.
    #[must_use]
    pub fn new(base_url: impl Into<String>, debug: bool, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            debug,
            transport,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Issue a request to a logical route and negotiate its body.
    ///
    /// A JSON content type parses as JSON; anything else stays opaque text.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] on a non-success status, [`ApiError::Network`] on
    /// transport failure, [`ApiError::Decode`] on an undecodable JSON body.
    pub async fn request(
        &self,
        route: &str,
        params: Option<&Value>,
        options: RequestOptions,
    ) -> Result<ResponseBody, ApiError> {
        if options.cache && !options.force {
            if let Some(hit) = self.cache.borrow().get(route) {
                return Ok(hit.clone());
            }
        }
        let request = HttpRequest {
            method: if params.is_some() {
                Method::Post
            } else {
                Method::Get
            },
            url: join_url(&self.base_url, route),
            body: params.cloned(),
        };
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                self.log_failure(route, &error);
                return Err(error);
            }
        };
        if !response.is_success() {
            let error = ApiError::Http {
                status: response.status,
                body: response.body,
            };
            self.log_failure(route, &error);
            return Err(error);
        }
        let parsed = negotiate(response)?;
        if options.cache {
            self.cache
                .borrow_mut()
                .insert(route.to_string(), parsed.clone());
        }
        Ok(parsed)
    }

    /// Empty the read cache unconditionally.
    pub fn clear_caches(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Fetch and decode the home payload, optionally bypassing the cache.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the request or the payload decode.
    pub async fn fetch_home(&self, force: bool) -> Result<HomePayload, ApiError> {
        let body = self
            .request(ROUTE_HOME, None, RequestOptions { force, cache: true })
            .await?;
        serde_json::from_value(body.into_json()?).map_err(|error| ApiError::Decode(error.to_string()))
    }

    /// POST an action body to a mutation route and decode the uniform
    /// `{ok, error?}` response.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the request or the response decode.
    pub async fn post_action<T: Serialize>(
        &self,
        route: &str,
        params: &T,
    ) -> Result<ActionResponse, ApiError> {
        let body =
            serde_json::to_value(params).map_err(|error| ApiError::Decode(error.to_string()))?;
        let response = self
            .request(route, Some(&body), RequestOptions::default())
            .await?;
        serde_json::from_value(response.into_json()?)
            .map_err(|error| ApiError::Decode(error.to_string()))
    }

    fn log_failure(&self, route: &str, error: &ApiError) {
        if !self.debug {
            return;
        }
        log_api_failure(route, error);
    }
}

fn negotiate(response: HttpResponse) -> Result<ResponseBody, ApiError> {
    let is_json = response
        .content_type
        .as_deref()
        .is_some_and(|value| value.to_ascii_lowercase().contains("json"));
    if is_json {
        serde_json::from_str(&response.body)
            .map(ResponseBody::Json)
            .map_err(|error| ApiError::Decode(error.to_string()))
    } else {
        Ok(ResponseBody::Text(response.body))
    }
}

fn join_url(base: &str, route: &str) -> String {
    format!("{}/{route}", base.trim_end_matches('/'))
}

#[cfg(target_arch = "wasm32")]
fn log_api_failure(route: &str, error: &ApiError) {
    let detail = match error {
        ApiError::Http { status, body } => format!("status {status}: {body}"),
        other => other.to_string(),
    };
    gloo::console::error!("portal api failure", route.to_string(), detail);
}

#[cfg(not(target_arch = "wasm32"))]
fn log_api_failure(route: &str, error: &ApiError) {
    let detail = match error {
        ApiError::Http { status, body } => format!("status {status}: {body}"),
        other => other.to_string(),
    };
    eprintln!("portal api failure: {route}: {detail}");
}

/// Production transport over the browser fetch API.
#[cfg(target_arch = "wasm32")]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url)
                .send()
                .await
                .map_err(|error| ApiError::Network(error.to_string()))?,
            Method::Post => {
                let body = request.body.unwrap_or(Value::Null);
                gloo_net::http::Request::post(&request.url)
                    .json(&body)
                    .map_err(|error| ApiError::Network(error.to_string()))?
                    .send()
                    .await
                    .map_err(|error| ApiError::Network(error.to_string()))?
            }
        };
        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .text()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;
        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
