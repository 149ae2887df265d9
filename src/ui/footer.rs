//! Footer bar: key hints for the current page and the data source.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, Route};

/// Attribution shown at the right end of the footer.
pub const DATA_SOURCE: &str = "Data from FastAPI";

// ============================================================================
// Footer Rendering
// ============================================================================

/// Key hints for `route`, shortest first on the left.
#[must_use]
pub fn hints(route: &Route, search_focused: bool) -> &'static str {
    if search_focused {
        return "Enter:Search  Esc:Cancel  ←→:Cursor";
    }
    match route {
        Route::Cover => "Enter:Dashboard  2:Dashboard  3:Transactions  t:Theme  ?:Help  q:Quit",
        Route::Dashboard => "/:Search  Tab:Focus  ↑↓:Move  Enter:Open  r:Refresh  Esc:Back  q:Quit",
        Route::Transactions => "f:Chain  ↑↓:Move  Enter:Open  r:Refresh  Esc:Back  q:Quit",
        Route::TransactionDetail(_) => "c:Copy id  y:Copy hash  r:Refresh  Esc:Back  q:Quit",
    }
}

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.ui.palette();
    let source_width = DATA_SOURCE.chars().count() as u16 + 1;
    let [hints_area, source_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(source_width)]).areas(area);

    let hints = hints(&app.route, app.ui.is_search_focused());
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(" "), Span::raw(hints)]))
            .style(palette.muted_style()),
        hints_area,
    );
    frame.render_widget(
        Paragraph::new(DATA_SOURCE).style(palette.muted_style()),
        source_area,
    );
}

// ============================================================================
// Tests
// ============================================================================
