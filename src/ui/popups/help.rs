//! Help popup listing the keybindings of every page.
//!
//! Opened with `?`, closed with `?`, Esc, Enter or `q`.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::theme::Palette;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Keybinding Data
// ============================================================================

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("1 / h", "Home"),
            ("2 / d", "Dashboard"),
            ("3", "Transactions"),
            ("r", "Refresh page"),
            ("t", "Toggle theme"),
            ("?", "Toggle help"),
            ("q", "Quit"),
        ],
    ),
    (
        "Lists",
        &[
            ("↑ / k", "Move up"),
            ("↓ / j", "Move down"),
            ("g / G", "Top / bottom"),
            ("Enter", "Open"),
            ("Esc", "Back"),
        ],
    ),
    (
        "Dashboard",
        &[
            ("/", "Search sellers"),
            ("Tab", "Sellers / transactions"),
        ],
    ),
    ("Transactions", &[("f", "Cycle chain filter")]),
    (
        "Transaction",
        &[("c", "Copy transaction id"), ("y", "Copy tx hash")],
    ),
];

/// Width of the key column.
const KEY_COLUMN: usize = 10;

// ============================================================================
// Public API
// ============================================================================

/// Builds the help text, one section after another.
#[must_use]
pub fn help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(palette.primary);

    let mut lines = Vec::new();
    for (index, (title, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(*title, heading));
        for (keys, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<width$}", width = KEY_COLUMN), key),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

/// Renders the help popup centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = help_lines(palette);
    let height = lines.len() as u16 + 2;
    let popup_area = centered_popup_area(area, 44, height);

    frame.render_widget(Clear, popup_area);
    let block = create_popup_block("Help (? to close)", palette);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    frame.render_widget(Paragraph::new(lines).style(palette.base()), inner);
}

// ============================================================================
// Tests
// ============================================================================
