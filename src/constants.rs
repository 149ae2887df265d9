//! Application constants for the lazyswap TUI.
//!
//! Centralized page sizes, chain units, timing and canvas geometry.

use std::time::Duration;

// ============================================================================
// Chain Units
// ============================================================================

/// Decimal places of CFX (1 CFX = 10^18 wei).
pub const CFX_DECIMALS: u32 = 18;

/// Decimal places of TRX (1 TRX = 10^6 sun).
pub const TRX_DECIMALS: u32 = 6;

/// Tron mainnet chain id as it appears in `payment_network` tags.
pub const TRON_NETWORK_ID: &str = "2494104990";

// ============================================================================
// Page Sizes
// ============================================================================

/// Sellers fetched for the cover topology snapshot.
pub const COVER_SELLER_LIMIT: u32 = 300;

/// Transactions fetched for the cover topology snapshot.
pub const COVER_TRANSACTION_LIMIT: u32 = 500;

/// Sellers listed on the dashboard when no keyword is given.
pub const DASHBOARD_SELLER_LIMIT: u32 = 200;

/// Transactions feeding the dashboard statistics.
pub const DASHBOARD_TRANSACTION_LIMIT: u32 = 100;

/// Transactions listed on the transactions page.
pub const TRANSACTIONS_PAGE_LIMIT: u32 = 200;

/// Days shown in the daily volume chart.
pub const VOLUME_CHART_DAYS: usize = 14;

/// Keyword tags shown on a seller card before collapsing into `+N`.
pub const SELLER_CARD_KEYWORDS: usize = 3;

// ============================================================================
// Timing
// ============================================================================

/// UI tick: input poll timeout and redraw cadence.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Ticks between hero line rotations on the cover page (3 s).
pub const HERO_ROTATION_TICKS: u64 = 30;

/// Default interval between backend health checks.
pub const DEFAULT_HEALTH_CHECK_SECS: u64 = 10;

/// Ticks a toast stays visible (2 s).
pub const TOAST_TICKS: u8 = 20;

// ============================================================================
// Topology Canvas
// ============================================================================

/// Logical canvas width the topology layout maps into.
pub const CANVAS_WIDTH: f64 = 1000.0;

/// Logical canvas height the topology layout maps into.
pub const CANVAS_HEIGHT: f64 = 640.0;

/// Canvas origin x (center).
pub const CANVAS_CENTER_X: f64 = CANVAS_WIDTH / 2.0;

/// Canvas origin y (center).
pub const CANVAS_CENTER_Y: f64 = CANVAS_HEIGHT / 2.0;

/// Radius of the innermost ring.
pub const BASE_RADIUS: f64 = 40.0;

/// Radial growth from the first to the last ranked seller.
pub const RADIUS_SPREAD: f64 = 220.0;

/// Maximum hash-derived radial jitter.
pub const RADIUS_JITTER: f64 = 24.0;

/// Hard cap on node distance from the center.
pub const MAX_RADIUS: f64 = 280.0;

/// Salt mixed into node placement hashes.
pub const LAYOUT_SALT: &str = "contextswap-topology";

// ============================================================================
// Cover Copy
// ============================================================================

/// Hero lines rotated on the cover page.
pub const HERO_LINES: [&str; 3] = [
    "P2P Context Trading",
    "Exchange context with humans or AI agents",
    "Powered by x402 and verified on-chain",
];

/// Feature blurbs under the cover hero: `(title, text)`.
pub const COVER_FEATURES: [(&str, &str); 3] = [
    ("x402 Payments", "Pay for context with Conflux or Tron."),
    ("On-chain Verification", "Settlement verified by facilitator."),
    ("Telegram Sessions", "Deal in a dedicated topic."),
];
