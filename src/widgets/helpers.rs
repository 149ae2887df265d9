//! Helper functions for shortening ids, addresses and free text.

// ============================================================================
// Id and Address Shortening
// ============================================================================

/// Keeps `head` leading and `tail` trailing characters joined by `sep`.
///
/// Strings that would not get shorter are returned unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(shorten("0x1234567890abcdef", 6, 4, "..."), "0x1234...cdef");
/// assert_eq!(shorten("short", 6, 4, "..."), "short");
/// ```
#[must_use]
pub fn shorten(value: &str, head: usize, tail: usize, sep: &str) -> String {
    let len = value.chars().count();
    if len <= head + tail + sep.chars().count() {
        return value.to_string();
    }
    let prefix: String = value.chars().take(head).collect();
    let suffix: String = value.chars().skip(len - tail).collect();
    format!("{prefix}{sep}{suffix}")
}

/// Seller wallet on a seller card: `0x1234...abcd`.
#[must_use]
pub fn short_address(address: &str) -> String {
    if address.is_empty() {
        return "N/A".to_string();
    }
    shorten(address, 6, 4, "...")
}

/// Transaction id in tables: `8…6` once longer than 16 characters.
#[must_use]
pub fn short_tx_id(id: &str) -> String {
    if id.chars().count() > 16 {
        shorten(id, 8, 6, "…")
    } else {
        id.to_string()
    }
}

/// Buyer address in tables: `10…8`.
#[must_use]
pub fn short_buyer(address: &str) -> String {
    shorten(address, 10, 8, "…")
}

/// Ids and addresses on transaction list cards: `8...6`.
#[must_use]
pub fn short_card_id(value: &str) -> String {
    shorten(value, 8, 6, "...")
}

// ============================================================================
// Text
// ============================================================================

/// Cuts `text` to `max` characters, ending in `…` when cut.
#[must_use]
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max - 1).collect();
    format!("{kept}…")
}

// ============================================================================
// Tests
// ============================================================================
