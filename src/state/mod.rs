//! Application state and page controllers.
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                        App                         │
//! ├─────────────┬──────────────────────┬───────────────┤
//! │ Route       │ DataState            │ UiState       │
//! │  - current  │  - cover topology    │  - popups     │
//! │  - history  │  - dashboard lists   │  - search bar │
//! │             │  - transactions page │  - toasts     │
//! │             │  - detail page       │  - theme      │
//! └─────────────┴──────────────────────┴───────────────┘
//! ```
//!
//! Fetches run as spawned tasks and report back through [`AppMessage`]s
//! that the main loop drains every iteration.

use tokio::sync::mpsc;

use crate::client::MarketClient;
use crate::domain::{Seller, Transaction};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod data;
pub mod platform;
pub mod route;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::{
    BackendHealth, DashboardFocus, DashboardPage, DataState, DetailPage, LoadState,
    TransactionsPage,
};
pub use route::Route;
pub use ui_state::UiState;

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
///
/// Page results carry the sequence number of the request that produced
/// them; see [`LoadState`].
#[derive(Debug, Clone)]
pub enum AppMessage {
    CoverLoaded {
        seq: u64,
        result: Result<(Vec<Seller>, Vec<Transaction>), String>,
    },
    DashboardLoaded {
        seq: u64,
        result: Result<(Vec<Seller>, Vec<Transaction>), String>,
    },
    TransactionsLoaded {
        seq: u64,
        result: Result<Vec<Transaction>, String>,
    },
    /// `Ok(None)` means the backend answered 404.
    TransactionLoaded {
        seq: u64,
        result: Result<Option<Box<Transaction>>, String>,
    },
    /// Status string from `/healthz`, or the error text.
    HealthChecked(Result<String, String>),
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options from the command line.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// API base override (flag or `LAZYSWAP_API_BASE_URL`).
    pub api_base: Option<String>,
    /// API origin override (flag or `LAZYSWAP_API_ORIGIN`).
    pub api_origin: Option<String>,
    /// Initial route path, e.g. `/transactions/abc`.
    pub route: Option<String>,
    /// Start with the light theme for this session.
    pub light: bool,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Page currently shown.
    pub route: Route,
    /// Previously visited routes, most recent last.
    pub history: Vec<Route>,

    pub data: DataState,
    pub ui: UiState,
    pub health: BackendHealth,
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter, drives the hero rotation.
    pub animation_tick: u64,

    // NOTE: Channel sends use `let _ = tx.send(...)` throughout. Receivers
    // may be dropped during shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    pub(crate) client: MarketClient,

    /// Whether settings changes are written back to the config file.
    pub(crate) persist_config: bool,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Key handling and command execution
mod app_commands;

// Routing and selection
mod app_navigation;

// Fetches, clipboard, theme
mod app_actions;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
