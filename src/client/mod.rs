//! HTTP client for the ContextSwap marketplace API.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{HttpConfig, MarketClient};
//!
//! let client = MarketClient::from_parts("/api", "http://127.0.0.1:9000", &HttpConfig::default())?;
//! let health = client.health().await?;
//! ```

pub mod http;
pub mod market;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::{DEFAULT_API_BASE, DEFAULT_API_ORIGIN, HttpConfig};
pub use market::{
    MarketClient, RegisterSellerRequest, SellerListQuery, SellerSource, TransactionListQuery,
    UnregisterSellerRequest,
};
