//! Dashboard page: search bar, stats cards, charts, seller grid and recent
//! transactions.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use crate::constants::CFX_DECIMALS;
use crate::domain::{PriceBucket, format_cfx, format_units};
use crate::state::{App, DashboardFocus, DashboardPage};
use crate::theme::Palette;
use crate::ui::helpers::{create_border_block, status_banner};
use crate::ui::layout::{SEARCH_BAR_HEIGHT, grid_columns, grid_window};
use crate::widgets::{SellerCard, StatsCard, TransactionListWidget, helpers::truncate_text};

const STATS_HEIGHT: u16 = 3;
const CHARTS_HEIGHT: u16 = 10;
const RECENT_WIDTH_PERCENT: u16 = 40;

/// Milli-CFX per bar unit in the volume chart.
const VOLUME_BAR_SCALE: u128 = 10_u128.pow(CFX_DECIMALS - 3);

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.palette();
    let page = &app.data.dashboard;

    let [search_area, banner_area, stats_area, charts_area, lists_area] = Layout::vertical([
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Length(u16::from(page.load.loading || page.load.error.is_some())),
        Constraint::Length(STATS_HEIGHT),
        Constraint::Length(CHARTS_HEIGHT),
        Constraint::Min(6),
    ])
    .areas(area);

    render_search_bar(app, frame, search_area);
    if let Some(banner) = status_banner(&page.load, &palette) {
        frame.render_widget(banner, banner_area);
    }
    render_stats(page, &palette, frame, stats_area);
    render_charts(page, &palette, frame, charts_area);

    let [sellers_area, recent_area] = Layout::horizontal([
        Constraint::Percentage(100 - RECENT_WIDTH_PERCENT),
        Constraint::Percentage(RECENT_WIDTH_PERCENT),
    ])
    .areas(lists_area);
    render_seller_grid(page, &palette, frame, sellers_area);
    render_recent(page, &palette, frame, recent_area);
}

// ============================================================================
// Search
// ============================================================================

fn render_search_bar(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.palette();
    let focused = app.ui.is_search_focused();
    let keyword = &app.data.dashboard.keyword;

    let title = if keyword.is_empty() {
        "Search sellers".to_string()
    } else {
        format!("Search sellers · keyword: {keyword}")
    };
    let block = create_border_block(&title, focused, &palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let query = app.ui.search_query();
    let line = if query.is_empty() && !focused {
        Line::styled("Press / to search by keyword", palette.muted_style())
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(palette.primary)),
            Span::raw(query.to_string()),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused {
        let column = query[..app.ui.search_cursor.min(query.len())]
            .chars()
            .count() as u16;
        let x = (inner.x + 2 + column).min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

// ============================================================================
// Stats and Charts
// ============================================================================

fn render_stats(page: &DashboardPage, palette: &Palette, frame: &mut Frame, area: Rect) {
    let stats = &page.stats;
    let cards = [
        ("Sellers", stats.seller_count.to_string()),
        ("Successful Tx", stats.active_tx.to_string()),
        ("Total Volume", format_cfx(stats.total_volume, 4)),
        ("Avg Price", format_cfx(stats.avg_price, 6)),
    ];
    let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for ((title, value), card_area) in cards.into_iter().zip(areas.iter()) {
        frame.render_widget(StatsCard::new(title, value, *palette), *card_area);
    }
}

fn render_charts(page: &DashboardPage, palette: &Palette, frame: &mut Frame, area: Rect) {
    let [status_area, volume_area, price_area] =
        Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);

    let status_bars: Vec<Bar> = page
        .status_chart
        .iter()
        .map(|(status, count)| bar(status, *count, count.to_string(), palette.primary))
        .collect();
    render_chart("Status", status_bars, palette, frame, status_area);

    let volume_bars: Vec<Bar> = page
        .volume_chart
        .iter()
        .map(|(date, volume)| {
            let day = date.get(5..).unwrap_or(date);
            let value = u64::try_from(volume / VOLUME_BAR_SCALE).unwrap_or(u64::MAX);
            bar(day, value, format_units(*volume, CFX_DECIMALS, 2), palette.accent)
        })
        .collect();
    render_chart("Daily Volume (CFX)", volume_bars, palette, frame, volume_area);

    // All five buckets are drawn, even at zero.
    let price_bars: Vec<Bar> = PriceBucket::ALL
        .into_iter()
        .map(|bucket| {
            let count = page
                .price_chart
                .iter()
                .find(|(b, _)| *b == bucket)
                .map_or(0, |(_, count)| *count);
            bar(bucket.label(), count, count.to_string(), palette.success)
        })
        .collect();
    render_chart("Seller Prices (CFX)", price_bars, palette, frame, price_area);
}

fn bar(label: &str, value: u64, text: String, color: ratatui::style::Color) -> Bar<'static> {
    Bar::default()
        .label(Line::from(label.to_string()))
        .value(value)
        .text_value(text)
        .style(Style::default().fg(color))
}

fn render_chart(title: &str, bars: Vec<Bar>, palette: &Palette, frame: &mut Frame, area: Rect) {
    let block = create_border_block(title, false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if bars.is_empty() {
        frame.render_widget(
            Paragraph::new("No data")
                .style(palette.muted_style())
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let count = bars.len() as u16;
    let bar_width = (inner.width / count).saturating_sub(1).clamp(1, 12);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .value_style(
            Style::default()
                .fg(palette.bg)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(palette.muted_style());
    frame.render_widget(chart, inner);
}

// ============================================================================
// Lists
// ============================================================================

fn render_seller_grid(page: &DashboardPage, palette: &Palette, frame: &mut Frame, area: Rect) {
    let focused = page.focus == DashboardFocus::Sellers;
    let title = format!("Sellers ({})", page.sellers.len());
    let block = create_border_block(&title, focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if page.sellers.is_empty() {
        let message = if page.keyword.is_empty() {
            "No sellers yet".to_string()
        } else {
            format!("No sellers match \"{}\"", truncate_text(&page.keyword, 30))
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(palette.muted_style())
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let columns = grid_columns(inner.width);
    let rows = (inner.height / SellerCard::HEIGHT).max(1) as usize;
    let selected = page.seller_selection.selected();
    let window = grid_window(page.sellers.len(), columns, rows, selected);
    let start = window.start;

    let row_areas = Layout::vertical(vec![Constraint::Length(SellerCard::HEIGHT); rows]).split(inner);
    for (offset, seller) in page.sellers[window].iter().enumerate() {
        let index = start + offset;
        let Some(row_area) = row_areas.get(offset / columns) else {
            break;
        };
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        let card = SellerCard::new(seller, *palette).selected(focused && selected == Some(index));
        frame.render_widget(card, cells[offset % columns]);
    }
}

fn render_recent(page: &DashboardPage, palette: &Palette, frame: &mut Frame, area: Rect) {
    let focused = page.focus == DashboardFocus::Transactions;
    let block = create_border_block("Recent Transactions", focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut selection = page.transaction_selection;
    frame.render_stateful_widget(
        TransactionListWidget::new(&page.transactions, *palette).focused(focused),
        inner,
        &mut selection,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Route;
    use crate::test_utils::{SellerMother, TransactionMother, buffer_to_string, test_app};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_dashboard(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal
            .draw(|frame| render(app, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn loaded_app() -> App {
        let mut app = test_app(Route::Dashboard);
        app.data.dashboard.apply(
            vec![SellerMother::active("alpha"), SellerMother::inactive("beta")],
            vec![
                TransactionMother::on_network("t1", "eip155:71", 1_000_000_000_000_000_000),
                TransactionMother::with_status("t2", crate::domain::TxStatus::Failed, 0),
            ],
        );
        app
    }

    #[test]
    fn test_dashboard_stats_and_cards() {
        let rendered = render_dashboard(&loaded_app());

        assert!(rendered.contains("Sellers (2)"));
        assert!(rendered.contains("Successful Tx"));
        assert!(rendered.contains("1.0000 CFX"));
        assert!(rendered.contains("0.500000 CFX"));
        assert!(rendered.contains("alpha"));
        assert!(rendered.contains("[Inactive]"));
        assert!(rendered.contains("Recent Transactions"));
        assert!(rendered.contains("t1"));
    }

    #[test]
    fn test_empty_dashboard() {
        let app = test_app(Route::Dashboard);
        let rendered = render_dashboard(&app);

        assert!(rendered.contains("No sellers yet"));
        assert!(rendered.contains("No transactions"));
        assert!(rendered.contains("No data"));
        assert!(rendered.contains("Press / to search by keyword"));
        // Price buckets render at zero instead of an empty state.
        assert!(rendered.contains("<0.001"));
        assert!(rendered.contains("≥0.1"));
    }

    #[test]
    fn test_keyword_shown_in_search_title_and_empty_state() {
        let mut app = test_app(Route::Dashboard);
        app.data.dashboard.keyword = "llm".into();
        let rendered = render_dashboard(&app);

        assert!(rendered.contains("keyword: llm"));
        assert!(rendered.contains("No sellers match \"llm\""));
    }

    #[test]
    fn test_focused_search_shows_query() {
        let mut app = test_app(Route::Dashboard);
        app.ui.focus_search();
        for c in "rust".chars() {
            app.ui.search_type_char(c);
        }
        assert!(render_dashboard(&app).contains("> rust"));
    }
}
