//! Error types for marketplace API operations.
//!
//! Every failure the dashboard can hit while talking to the backend is
//! reduced to one of these variants and, at page level, to its `Display`
//! text for the inline error banner.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for marketplace client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, TLS, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {detail}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// FastAPI `detail` field, body text, or reason phrase.
        detail: String,
    },

    /// The response body did not match the expected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input, rejected before any request is sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The client could not be configured (bad base URL, TLS backend).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new status error.
    #[must_use]
    pub fn status(status: u16, detail: impl Into<String>) -> Self {
        Self::Status {
            status,
            detail: detail.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` when the backend reported the entity as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// Convert to a `color_eyre::Report` for the CLI boundary.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
