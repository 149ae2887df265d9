//! Cover page: rotating hero, seller topology and feature blurbs.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::constants::COVER_FEATURES;
use crate::state::App;
use crate::theme::Palette;
use crate::ui::helpers::{create_border_block, status_banner};
use crate::widgets::TopologyWidget;

const HERO_HEIGHT: u16 = 4;
const FEATURES_WIDTH: u16 = 40;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.palette();
    let page = &app.data.cover;

    let [hero_area, banner_area, body_area] = Layout::vertical([
        Constraint::Length(HERO_HEIGHT),
        Constraint::Length(u16::from(page.load.loading || page.load.error.is_some())),
        Constraint::Min(5),
    ])
    .areas(area);

    frame.render_widget(hero(page.hero_line(), &palette), hero_area);
    if let Some(banner) = status_banner(&page.load, &palette) {
        frame.render_widget(banner, banner_area);
    }

    let [graph_area, side_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(FEATURES_WIDTH)])
            .areas(body_area);

    let title = format!(
        "Marketplace Topology · {} sellers · {} transactions",
        page.seller_count, page.transaction_count
    );
    let block = create_border_block(&title, false, &palette);
    let graph_inner = block.inner(graph_area);
    frame.render_widget(block, graph_area);
    frame.render_widget(TopologyWidget::new(&page.topology, palette), graph_inner);

    let block = create_border_block("Why ContextSwap", false, &palette);
    let side_inner = block.inner(side_area);
    frame.render_widget(block, side_area);
    frame.render_widget(
        Paragraph::new(features(&palette)).wrap(Wrap { trim: true }),
        side_inner,
    );
}

fn hero(line: &'static str, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            "ContextSwap",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(line, Style::default().fg(palette.accent)),
    ])
    .alignment(Alignment::Center)
}

fn features(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, text) in COVER_FEATURES {
        lines.push(Line::styled(
            title,
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(text, palette.muted_style()));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(palette.primary)),
        Span::raw(" Dashboard   "),
        Span::styled("3", Style::default().fg(palette.primary)),
        Span::raw(" Transactions"),
    ]));
    lines
}
