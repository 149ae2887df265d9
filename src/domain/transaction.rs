//! Transaction types and chain resolution.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::amount::{deserialize_amount, format_cfx, format_trx};
use super::seller::deserialize_null_string;
use crate::constants::TRON_NETWORK_ID;

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status of a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TxStatus {
    #[default]
    Pending,
    Paid,
    SessionCreated,
    Failed,
    /// Unknown status, kept verbatim.
    Other(String),
}

impl TxStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "paid" => Self::Paid,
            "session_created" => Self::SessionCreated,
            "failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::SessionCreated => "session_created",
            Self::Failed => "failed",
            Self::Other(raw) => raw,
        }
    }

    /// Badge label. Unknown statuses are shown as-is.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::SessionCreated => "Session Created",
            Self::Failed => "Failed",
            Self::Other(raw) => raw,
        }
    }

    /// Paid and session-created purchases count as successful.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Paid | Self::SessionCreated)
    }
}

impl<'de> Deserialize<'de> for TxStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or_else(Self::default, |s| Self::parse(&s)))
    }
}

impl Serialize for TxStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// Chains
// ============================================================================

/// Settlement network of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentChain {
    Tron,
    Conflux,
}

impl PaymentChain {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tron => "Tron",
            Self::Conflux => "Conflux",
        }
    }
}

/// Label for an optionally resolved chain.
#[must_use]
pub const fn chain_label(chain: Option<PaymentChain>) -> &'static str {
    match chain {
        Some(chain) => chain.label(),
        None => "Unknown",
    }
}

/// Lenient parse of `payment_chain`: anything other than `tron`/`conflux` is unset.
fn deserialize_chain<'de, D>(deserializer: D) -> Result<Option<PaymentChain>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw.as_ref().and_then(serde_json::Value::as_str) {
        Some(s) if s.eq_ignore_ascii_case("tron") => Some(PaymentChain::Tron),
        Some(s) if s.eq_ignore_ascii_case("conflux") => Some(PaymentChain::Conflux),
        _ => None,
    })
}

/// Client-side filter on the transactions page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFilter {
    #[default]
    Tron,
    Conflux,
    All,
}

impl ChainFilter {
    /// Cycles `tron -> conflux -> all -> tron`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Tron => Self::Conflux,
            Self::Conflux => Self::All,
            Self::All => Self::Tron,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tron => "Tron",
            Self::Conflux => "Conflux",
            Self::All => "All",
        }
    }

    /// Returns `true` if the transaction passes the filter.
    #[must_use]
    pub fn matches(self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Tron => txn.chain() == Some(PaymentChain::Tron),
            Self::Conflux => txn.chain() == Some(PaymentChain::Conflux),
        }
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// Free-form metadata attached by the session bots.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxMetadata {
    #[serde(default)]
    pub initial_prompt: Option<String>,
    #[serde(default)]
    pub buyer_bot_username: Option<String>,
    #[serde(default)]
    pub seller_bot_username: Option<String>,
}

/// A purchase as returned by `/v1/transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub seller_id: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub buyer_address: String,
    /// Amount in the chain's base unit (wei or sun).
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub price_wei: u128,
    #[serde(default, deserialize_with = "deserialize_chain")]
    pub payment_chain: Option<PaymentChain>,
    #[serde(default)]
    pub payment_network: Option<String>,
    #[serde(default)]
    pub status: TxStatus,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
    #[serde(default)]
    pub message_thread_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_metadata")]
    pub metadata: Option<TxMetadata>,
    #[serde(default)]
    pub error_reason: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub updated_at: String,
}

/// Metadata that is not an object is ignored rather than failing the row.
fn deserialize_metadata<'de, D>(deserializer: D) -> Result<Option<TxMetadata>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

impl Transaction {
    /// Settlement chain of this transaction.
    #[must_use]
    pub fn chain(&self) -> Option<PaymentChain> {
        resolve_chain(self.payment_chain, self.payment_network.as_deref())
    }

    /// `{amount} CFX` when settled on Conflux, `--` otherwise.
    #[must_use]
    pub fn conflux_amount(&self) -> String {
        match self.chain() {
            Some(PaymentChain::Conflux) => format_cfx(self.price_wei, 6),
            _ => "--".to_string(),
        }
    }

    /// `{amount} TRX` when settled on Tron, `--` otherwise.
    #[must_use]
    pub fn tron_amount(&self) -> String {
        match self.chain() {
            Some(PaymentChain::Tron) => format_trx(self.price_wei, 3),
            _ => "--".to_string(),
        }
    }

    /// Amount in the unit of the resolved chain, `--` when the chain is unknown.
    #[must_use]
    pub fn payment_amount(&self) -> String {
        match self.chain() {
            Some(PaymentChain::Tron) => format_trx(self.price_wei, 3),
            Some(PaymentChain::Conflux) => format_cfx(self.price_wei, 6),
            None => "--".to_string(),
        }
    }

    #[must_use]
    pub fn initial_prompt(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.initial_prompt.as_deref())
            .filter(|p| !p.is_empty())
    }

    /// Calendar date prefix of `created_at`, as sent by the backend.
    #[must_use]
    pub fn created_date(&self) -> Option<&str> {
        self.created_at.get(..10).filter(|d| !d.trim().is_empty())
    }
}

/// Resolves the settlement chain.
///
/// An explicit `payment_chain` wins. Otherwise the lower-cased network tag
/// decides: blank means unknown, a Tron chain id or `tron` prefix means Tron,
/// and anything else is taken to be Conflux eSpace.
#[must_use]
pub fn resolve_chain(
    payment_chain: Option<PaymentChain>,
    payment_network: Option<&str>,
) -> Option<PaymentChain> {
    if payment_chain.is_some() {
        return payment_chain;
    }
    let network = payment_network?.trim().to_lowercase();
    if network.is_empty() {
        None
    } else if network.contains(TRON_NETWORK_ID) || network.contains("tron") {
        Some(PaymentChain::Tron)
    } else {
        Some(PaymentChain::Conflux)
    }
}

// ============================================================================
// Timestamps
// ============================================================================

/// Parses an ISO-8601 timestamp into local time.
///
/// Naive timestamps (no offset) are taken as UTC, which is what the backend emits.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc().with_timezone(&Local))
}

/// `YYYY-MM-DD HH:MM:SS` in local time, or the raw string if unparsable.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return "--".to_string();
    }
    parse_timestamp(raw).map_or_else(
        || raw.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

/// `YYYY-MM-DD` in local time, or the raw string if unparsable.
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}
