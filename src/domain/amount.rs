//! Base-unit amounts and their human-readable rendering.
//!
//! Prices travel over the wire as integers in the chain's smallest unit
//! (wei for Conflux, sun for Tron). They are held as `u128` and only turned
//! into decimal strings for display, using integer arithmetic so that
//! `10^18` wei renders as exactly `1.000000 CFX`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::constants::{CFX_DECIMALS, TRX_DECIMALS};

// ============================================================================
// Formatting
// ============================================================================

/// Formats `amount` base units with `decimals` scale to `precision` places.
///
/// Rounds half up at the last displayed digit.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_units(1_500_000, 6, 3), "1.500");
/// assert_eq!(format_units(0, 18, 4), "0.0000");
/// ```
#[must_use]
pub fn format_units(amount: u128, decimals: u32, precision: u32) -> String {
    let (whole, frac) = if precision >= decimals {
        let scale = 10_u128.pow(decimals);
        let frac = (amount % scale) * 10_u128.pow(precision - decimals);
        (amount / scale, frac)
    } else {
        let divisor = 10_u128.pow(decimals - precision);
        let mut rounded = amount / divisor;
        if amount % divisor >= divisor.div_ceil(2) {
            rounded += 1;
        }
        let scale = 10_u128.pow(precision);
        (rounded / scale, rounded % scale)
    };

    if precision == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{frac:0width$}", width = precision as usize)
    }
}

/// Formats wei as CFX, e.g. `1.000000 CFX`.
#[must_use]
pub fn format_cfx(wei: u128, precision: u32) -> String {
    format!("{} CFX", format_units(wei, CFX_DECIMALS, precision))
}

/// Formats sun as TRX, e.g. `1.0000 TRX`.
#[must_use]
pub fn format_trx(sun: u128, precision: u32) -> String {
    format!("{} TRX", format_units(sun, TRX_DECIMALS, precision))
}


// ============================================================================
// Lenient Deserialization
// ============================================================================

/// Converts a JSON value into a base-unit amount.
///
/// Accepts integers, non-negative floats (truncated) and numeric strings.
/// Anything else is treated as absent.
fn amount_from_value(value: &Value) -> Option<u128> {
    match value {
        Value::Number(n) => n.as_u64().map(u128::from).or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u128)
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u128>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u128)
            })
        }
        _ => None,
    }
}

/// Deserializes an optional amount, tolerating strings, floats and nulls.
pub fn deserialize_opt_amount<'de, D>(deserializer: D) -> Result<Option<u128>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(amount_from_value))
}

/// Deserializes an amount that defaults to zero when missing or malformed.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_amount(deserializer)?.unwrap_or(0))
}

// ============================================================================
// Tests
// ============================================================================
