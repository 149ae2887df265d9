//! UI rendering for the lazyswap TUI.
//!
//! # Module Structure
//!
//! - `panels` - One panel per route (cover, dashboard, transactions, detail)
//! - `popups` - Help and message overlays
//! - `components` - Toast notifications
//! - `layout` - Layout calculations
//! - `header` - Logo, route tabs and backend status
//! - `footer` - Key hints and data source
//! - `helpers` - Styled blocks and the load status banner

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{Frame, widgets::Block};

use crate::state::App;

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws one frame: page chrome, the current route, then overlays.
///
/// Overlays stack as toast over popups over the page, and help wins over a
/// message popup.
pub fn render(app: &App, frame: &mut Frame) {
    let palette = app.ui.palette();
    let size = frame.area();
    frame.render_widget(Block::default().style(palette.base()), size);

    let layout = calculate_app_layout(size);
    header::render(frame, layout.header, app);
    panels::render(app, frame, layout.main);
    footer::render(frame, layout.footer, app);

    if app.ui.show_help {
        popups::render_help_popup(frame, size, &palette);
    } else if let Some(message) = app.ui.popup_state.as_message() {
        popups::render_message_popup(frame, size, message, &palette);
    }

    if let Some(message) = app.ui.toast_message() {
        components::render_toast(frame, size, message, &palette);
    }
}

// ============================================================================
// Tests
// ============================================================================
