//! Seller types for the marketplace.
//!
//! Sellers are owned by the backend; the dashboard only displays them.

use serde::{Deserialize, Deserializer, Serialize};

use super::amount::{deserialize_opt_amount, format_cfx, format_trx};

// ============================================================================
// Seller Status
// ============================================================================

/// Listing status of a seller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SellerStatus {
    /// Listed and accepting purchases.
    Active,
    /// Unregistered or paused.
    #[default]
    Inactive,
    /// Any status string the dashboard does not know about.
    Other(String),
}

impl SellerStatus {
    /// Parse a backend status string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire representation, usable as a `status` query parameter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Other(raw) => raw,
        }
    }

    /// Badge label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive | Self::Other(_) => "Inactive",
        }
    }

    /// Returns `true` for active sellers.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl<'de> Deserialize<'de> for SellerStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or_else(Self::default, |s| Self::parse(&s)))
    }
}

impl Serialize for SellerStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// Keywords
// ============================================================================

/// Keywords arrive either as a JSON list or as one comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    /// `["rust", "tokio"]`
    List(Vec<String>),
    /// `"rust, tokio"`
    Text(String),
}

impl Keywords {
    /// Normalized keyword list: trimmed, blanks dropped.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Text(text) => text.split(',').collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect()
    }
}

fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Keywords>::deserialize(deserializer).unwrap_or(None);
    Ok(raw.map(|k| k.to_vec()).unwrap_or_default())
}

// ============================================================================
// Seller
// ============================================================================

/// A marketplace seller as returned by `/v1/sellers`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Seller {
    pub seller_id: String,
    #[serde(default)]
    pub evm_address: String,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub price_wei: Option<u128>,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub price_conflux_wei: Option<u128>,
    #[serde(default, deserialize_with = "deserialize_opt_amount")]
    pub price_tron_sun: Option<u128>,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_keywords")]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub status: SellerStatus,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub updated_at: String,
}

/// Treats `null` like a missing string.
pub(crate) fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Seller {
    /// Returns `true` when the seller is listed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// The price used for bucketing: Conflux, then legacy wei, then Tron sun.
    ///
    /// Tron sun is compared on the CFX scale as-is, matching the web
    /// dashboard's histogram.
    #[must_use]
    pub fn bucket_price(&self) -> u128 {
        self.price_conflux_wei
            .or(self.price_wei)
            .or(self.price_tron_sun)
            .unwrap_or(0)
    }

    /// Formatted Conflux price row, if the seller sets one.
    #[must_use]
    pub fn conflux_price(&self) -> Option<String> {
        self.price_conflux_wei.map(|wei| format_price(Some(wei), None))
    }

    /// Formatted Tron price row, if the seller sets one.
    #[must_use]
    pub fn tron_price(&self) -> Option<String> {
        self.price_tron_sun.map(|sun| format_price(None, Some(sun)))
    }

    /// Fallback price row for sellers without per-chain prices.
    #[must_use]
    pub fn legacy_price(&self) -> Option<String> {
        if self.price_conflux_wei.is_none() && self.price_tron_sun.is_none() {
            self.price_wei.map(|wei| format_price(Some(wei), None))
        } else {
            None
        }
    }
}

/// Formats a seller price: Tron wins when non-zero, then CFX, then `N/A`.
///
/// Zero amounts count as unset.
#[must_use]
pub fn format_price(wei: Option<u128>, sun: Option<u128>) -> String {
    match (wei.filter(|w| *w > 0), sun.filter(|s| *s > 0)) {
        (_, Some(sun)) => format_trx(sun, 4),
        (Some(wei), None) => format_cfx(wei, 6),
        (None, None) => "N/A".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
