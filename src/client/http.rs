//! HTTP configuration and API base URL resolution.

use std::net::IpAddr;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::domain::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// API base used when nothing else is configured, relative to the origin.
pub const DEFAULT_API_BASE: &str = "/api";

/// Origin a relative API base is resolved against.
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:9000";

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration.
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl HttpConfig {
    /// Create config with a timeout in seconds; zero means no timeout.
    #[must_use]
    pub fn with_timeout_secs(secs: Option<u64>) -> Self {
        Self {
            timeout: secs.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }

    /// Build a pooled reqwest client for `base`.
    ///
    /// Loopback backends bypass any system proxy.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the TLS backend cannot be initialized.
    pub fn build_client(&self, base: &Url) -> Result<Client, ApiError> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30));

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if is_loopback(base) {
            builder = builder.no_proxy();
        }

        builder
            .build()
            .map_err(|e| ApiError::config(format!("failed to build HTTP client: {e}")))
    }
}

fn is_loopback(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    host.eq_ignore_ascii_case("localhost")
        || host.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

// ============================================================================
// Base URL Resolution
// ============================================================================

/// Resolves the API base into an absolute URL.
///
/// A base starting with `/` is joined onto `origin`. Trailing slashes are
/// stripped so endpoint paths never produce `//`.
///
/// # Errors
///
/// Returns `ApiError::Config` if either value is not a usable URL.
pub fn resolve_base_url(base: &str, origin: &str) -> Result<Url, ApiError> {
    let base = base.trim();
    let absolute = if base.is_empty() || base.starts_with('/') {
        let origin = origin.trim().trim_end_matches('/');
        let path = if base.is_empty() { DEFAULT_API_BASE } else { base };
        format!("{origin}{path}")
    } else {
        base.to_string()
    };

    let mut url = Url::parse(absolute.trim_end_matches('/'))
        .map_err(|e| ApiError::config(format!("invalid API base URL '{absolute}': {e}")))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::config(format!(
            "API base URL must be http(s): '{absolute}'"
        )));
    }

    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
