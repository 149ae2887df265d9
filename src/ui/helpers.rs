//! UI helper functions for creating styled blocks and status lines.
//!
//! Every page draws its panels through these so focus styling, popups and
//! the inline error banner look the same everywhere.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::LoadState;
use crate::theme::Palette;

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// Focused blocks get a double border and a `●` before the title.
///
/// # Example
///
/// ```ignore
/// let focused = create_border_block("Sellers", true, &palette);
/// let unfocused = create_border_block("Recent Transactions", false, &palette);
/// ```
#[must_use]
pub fn create_border_block<'a>(title: &str, focused: bool, palette: &Palette) -> Block<'a> {
    let border_set = if focused {
        border::DOUBLE
    } else {
        border::ROUNDED
    };
    let display_title = match (title.is_empty(), focused) {
        (true, _) => String::new(),
        (false, true) => format!(" ● {title} "),
        (false, false) => format!(" {title} "),
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(palette.title_style(focused))
        .border_set(border_set)
        .border_style(palette.border_style(focused))
}

/// Creates a popup-style block with a centered title and rounded borders.
#[must_use]
pub fn create_popup_block<'a>(title: &str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(palette.title_style(true))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base())
}

// ============================================================================
// Load Status
// ============================================================================

/// One-line banner for a page's load state, or `None` when idle and healthy.
///
/// An error wins over the loading flag so a failed refresh stays visible
/// while the next one is in flight.
#[must_use]
pub fn status_banner(load: &LoadState, palette: &Palette) -> Option<Paragraph<'static>> {
    if let Some(error) = &load.error {
        let line = Line::from(vec![
            Span::styled(
                " Error ",
                Style::default()
                    .fg(palette.bg)
                    .bg(palette.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {error}"), palette.error_style()),
        ]);
        return Some(Paragraph::new(line).wrap(Wrap { trim: true }));
    }
    load.loading.then(|| {
        Paragraph::new(Line::styled("Loading…", palette.muted_style()))
            .alignment(Alignment::Center)
    })
}

// ============================================================================
// Tests
// ============================================================================
