//! Header rendering for the lazyswap TUI.
//!
//! Logo on the left, route tabs in the middle, backend health and theme on
//! the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

use super::helpers::create_border_block;
use crate::state::{App, BackendHealth, Route};
use crate::theme::Palette;

/// Width reserved for the logo.
const LOGO_WIDTH: u16 = 12;

/// Width reserved for the status block on the right.
const STATUS_WIDTH: u16 = 30;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.ui.palette();
    let block = create_border_block("", false, &palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let [logo_area, tabs_area, status_area] = Layout::horizontal([
        Constraint::Length(LOGO_WIDTH),
        Constraint::Min(10),
        Constraint::Length(STATUS_WIDTH),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(logo(&palette)), logo_area);
    frame.render_widget(tabs(&app.route, &palette), tabs_area);
    if area.width > 60 {
        frame.render_widget(
            Paragraph::new(status_line(app, &palette)).alignment(Alignment::Right),
            status_area,
        );
    }
}

fn logo(palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("[", palette.muted_style()),
        Span::styled(
            "lazy",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "swap",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", palette.muted_style()),
    ])
}

fn tabs(route: &Route, palette: &Palette) -> Tabs<'static> {
    let titles = Route::TABS
        .iter()
        .enumerate()
        .map(|(i, title)| format!("{} {title}", i + 1));
    Tabs::new(titles)
        .select(route.tab_index())
        .style(palette.muted_style())
        .highlight_style(
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(palette.border)))
}

fn status_line(app: &App, palette: &Palette) -> Line<'static> {
    let (dot, color) = match &app.health {
        BackendHealth::Up(_) => ("●", palette.success),
        BackendHealth::Down(_) => ("●", palette.error),
        BackendHealth::Unknown => ("○", palette.muted),
    };
    Line::from(vec![
        Span::styled(format!("{dot} "), Style::default().fg(color)),
        Span::styled(
            format!("API {}", app.health.label()),
            Style::default().fg(color),
        ),
        Span::styled(format!("  {} ", app.ui.theme.name()), palette.muted_style()),
    ])
}

// ============================================================================
// Tests
// ============================================================================
