//! Transactions page: chain-filtered table of the latest 200 transactions.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::domain::{Transaction, format_timestamp};
use crate::state::{App, TransactionsPage};
use crate::theme::Palette;
use crate::ui::helpers::{create_border_block, status_banner};
use crate::widgets::{
    Badge, render_list_scrollbar,
    helpers::{short_buyer, short_tx_id},
};

const HEADERS: [&str; 8] = [
    "ID", "Seller", "Buyer", "Conflux", "Tron", "Chain", "Status", "Time",
];

const WIDTHS: [Constraint; 8] = [
    Constraint::Length(16),
    Constraint::Min(10),
    Constraint::Length(19),
    Constraint::Length(16),
    Constraint::Length(13),
    Constraint::Length(9),
    Constraint::Length(17),
    Constraint::Length(19),
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.palette();
    let page = &app.data.transactions;

    let [summary_area, banner_area, table_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(u16::from(page.load.loading || page.load.error.is_some())),
        Constraint::Min(3),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(summary(page, &palette)), summary_area);
    if let Some(banner) = status_banner(&page.load, &palette) {
        frame.render_widget(banner, banner_area);
    }
    render_table(page, &palette, frame, table_area);
}

/// `Showing X / Y` plus the active chain filter.
fn summary(page: &TransactionsPage, palette: &Palette) -> Line<'static> {
    let (shown, total) = page.counts();
    Line::from(vec![
        Span::raw(format!(" Showing {shown} / {total}")),
        Span::styled("   Chain: ", palette.muted_style()),
        Span::styled(
            page.filter.label(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (f to cycle)", palette.muted_style()),
    ])
}

fn row(txn: &Transaction, palette: &Palette) -> Row<'static> {
    let chain = txn.chain();
    Row::new(vec![
        Cell::from(short_tx_id(&txn.transaction_id)),
        Cell::from(txn.seller_id.clone()),
        Cell::from(short_buyer(&txn.buyer_address)),
        Cell::from(txn.conflux_amount()),
        Cell::from(txn.tron_amount()),
        Cell::from(Badge::chain(chain, palette).to_span()),
        Cell::from(Badge::tx_status(&txn.status, palette).to_span()),
        Cell::from(Span::styled(
            format_timestamp(&txn.created_at),
            palette.muted_style(),
        )),
    ])
}

fn render_table(page: &TransactionsPage, palette: &Palette, frame: &mut Frame, area: Rect) {
    let block = create_border_block("Transactions", true, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let filtered = page.filtered();
    if filtered.is_empty() {
        let message = if page.transactions.is_empty() {
            "No transactions".to_string()
        } else {
            format!("No {} transactions", page.filter.label())
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(palette.muted_style())
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let header = Row::new(HEADERS).style(
        Style::default()
            .fg(palette.fg)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = filtered.iter().map(|t| row(t, palette)).collect();
    let table = Table::new(rows, WIDTHS)
        .header(header)
        .row_highlight_style(palette.selected_style())
        .highlight_symbol("▶ ")
        .column_spacing(1);

    let mut state = TableState::default().with_selected(page.selection.selected());
    frame.render_stateful_widget(table, inner, &mut state);

    let visible = inner.height.saturating_sub(1) as usize;
    render_list_scrollbar(
        inner,
        frame.buffer_mut(),
        filtered.len(),
        visible,
        state.offset(),
    );
}

// ============================================================================
// Tests
// ============================================================================
