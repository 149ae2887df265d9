//! ContextSwap marketplace API client.
//!
//! One async method per backend endpoint. Parameters are typed, responses
//! are parsed into domain DTOs, and every failure is an [`ApiError`]. There
//! are no retries and no caching.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{HttpConfig, MarketClient};
//!
//! let client = MarketClient::new("http://127.0.0.1:9000/api", &HttpConfig::default())?;
//! let sellers = client.search_sellers("rust").await?;
//! ```

use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::http::{HttpConfig, resolve_base_url};
use crate::domain::ApiError;

mod sellers;
mod transactions;


pub use sellers::{RegisterSellerRequest, SellerListQuery, SellerSource, UnregisterSellerRequest};
pub use transactions::TransactionListQuery;

// ============================================================================
// Response Envelopes
// ============================================================================

/// Body of `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

/// List endpoints wrap their rows in `{"items": [...]}`.
#[derive(Debug, Deserialize)]
struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

// ============================================================================
// Market API Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct MarketClient {
    /// Absolute API base, e.g. `http://127.0.0.1:9000/api`.
    base_url: Url,
    /// HTTP client for requests.
    client: Client,
}

impl MarketClient {
    /// Creates a client for an absolute base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the URL is unusable or the HTTP client
    /// fails to initialize.
    pub fn new(base_url: &str, config: &HttpConfig) -> Result<Self, ApiError> {
        let base_url = resolve_base_url(base_url, "")?;
        let client = config.build_client(&base_url)?;
        Ok(Self { base_url, client })
    }

    /// Creates a client from a possibly relative base and the origin to resolve it against.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the resolved URL is unusable.
    pub fn from_parts(base: &str, origin: &str, config: &HttpConfig) -> Result<Self, ApiError> {
        let base_url = resolve_base_url(base, origin)?;
        let client = config.build_client(&base_url)?;
        Ok(Self { base_url, client })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends percent-encoded path segments to the base URL.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) fn build_request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("accept", "application/json")
    }

    /// Sends a request and parses a successful JSON body into `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let url = response.url().clone();
        let body = Self::success_body(response).await?;

        tracing::debug!(%url, bytes = body.len(), "api response");
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%url, error = %e, "unexpected response body");
            ApiError::parse(format!("{url}: {e}"))
        })
    }

    /// Sends a request for a list endpoint and unwraps `items`.
    pub(crate) async fn send_items<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Vec<T>, ApiError> {
        let envelope: ItemsEnvelope<T> = self.send_json(request).await?;
        Ok(envelope.items)
    }

    /// Returns the body of a 2xx response or maps the failure to `ApiError::Status`.
    async fn success_body(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            return Ok(body);
        }

        let detail = error_detail(&body)
            .or_else(|| status.canonical_reason().map(String::from))
            .unwrap_or_else(|| "Unknown error".to_string());
        tracing::warn!(status = status.as_u16(), %detail, "api request failed");
        Err(ApiError::status(status.as_u16(), detail))
    }

    /// Check the backend's health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.endpoint(&["healthz"]);
        tracing::debug!(%url, "health check");
        self.send_json(self.build_request(Method::GET, url)).await
    }
}

/// Extracts a human-readable message from an error body.
///
/// FastAPI puts it under `detail` (a string, or a list of validation errors).
/// Non-JSON bodies are used verbatim.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => Some(detail.clone()),
            Some(Value::Null) | None => Some(body.to_string()),
            Some(other) => Some(other.to_string()),
        },
        _ => Some(body.to_string()),
    }
}
