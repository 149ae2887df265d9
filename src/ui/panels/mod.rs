//! Page panels for the main content area.
//!
//! One module per route:
//! - [`cover`] - Hero, seller topology and feature blurbs
//! - [`dashboard`] - Stats, charts, seller grid and recent transactions
//! - [`transactions`] - Filterable transaction table
//! - [`transaction_detail`] - A single transaction

pub mod cover;
pub mod dashboard;
pub mod transaction_detail;
pub mod transactions;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, Route};

/// Renders the page of the current route into `area`.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match &app.route {
        Route::Cover => cover::render(app, frame, area),
        Route::Dashboard => dashboard::render(app, frame, area),
        Route::Transactions => transactions::render(app, frame, area),
        Route::TransactionDetail(_) => transaction_detail::render(app, frame, area),
    }
}
