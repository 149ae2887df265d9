//! Domain types for the ContextSwap marketplace dashboard.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for marketplace API operations
//! - [`amount`] - Base-unit amounts (wei, sun) and their formatting
//! - [`seller`] - Seller listings and price rendering
//! - [`transaction`] - Purchases, status and chain resolution
//! - [`stats`] - Dashboard aggregates

// ============================================================================
// Module Declarations
// ============================================================================

pub mod amount;
pub mod error;
pub mod seller;
pub mod stats;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use amount::{format_cfx, format_units};
pub use error::ApiError;
pub use seller::{Seller, SellerStatus};
pub use stats::{DashboardStats, PriceBucket, daily_volume, price_buckets, status_distribution};
pub use transaction::{
    ChainFilter, PaymentChain, Transaction, TxStatus, chain_label, format_date, format_timestamp,
};
