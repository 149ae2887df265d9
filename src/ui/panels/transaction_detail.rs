//! Transaction detail page: payment flow plus every field of one transaction.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::domain::{Transaction, format_timestamp};
use crate::state::{App, DetailPage};
use crate::theme::Palette;
use crate::ui::helpers::{create_border_block, status_banner};
use crate::widgets::{Badge, PaymentFlowDiagram};

/// Width of the field label column.
const LABEL_WIDTH: usize = 14;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.palette();
    let page = &app.data.detail;

    let [banner_area, body_area] = Layout::vertical([
        Constraint::Length(u16::from(page.load.loading || page.load.error.is_some())),
        Constraint::Min(3),
    ])
    .areas(area);

    if let Some(banner) = status_banner(&page.load, &palette) {
        frame.render_widget(banner, banner_area);
    }

    let title = format!("Transaction {}", page.id);
    let block = create_border_block(&title, true, &palette);
    let inner = block.inner(body_area);
    frame.render_widget(block, body_area);

    match &page.transaction {
        Some(txn) => render_transaction(txn, &palette, frame, inner),
        None => render_placeholder(page, &palette, frame, inner),
    }
}

fn render_placeholder(page: &DetailPage, palette: &Palette, frame: &mut Frame, area: Rect) {
    if !page.not_found {
        return;
    }
    let lines = vec![
        Line::from(""),
        Line::styled(
            "Transaction not found",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled("Esc to go back", palette.muted_style()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_transaction(txn: &Transaction, palette: &Palette, frame: &mut Frame, area: Rect) {
    let box_width = (area.width.saturating_sub(10) / 3).min(22) as usize;
    let diagram = PaymentFlowDiagram::new(txn, *palette).with_box_width(box_width);
    let diagram_width = diagram.width() as u16;

    let [flow_area, _, fields_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    let [flow_area] = Layout::horizontal([Constraint::Length(diagram_width)])
        .flex(Flex::Center)
        .areas(flow_area);
    frame.render_widget(diagram, flow_area);

    frame.render_widget(
        Paragraph::new(field_lines(txn, palette)).wrap(Wrap { trim: false }),
        fields_area,
    );
}

/// One labelled line per field; optional fields are skipped when absent.
#[must_use]
pub fn field_lines(txn: &Transaction, palette: &Palette) -> Vec<Line<'static>> {
    let label = |text: &str| {
        Span::styled(
            format!("{text:<width$}", width = LABEL_WIDTH),
            palette.muted_style(),
        )
    };
    let plain = |name: &str, value: String| Line::from(vec![label(name), Span::raw(value)]);
    let metadata = txn.metadata.as_ref();

    let mut lines = vec![
        Line::from(vec![
            label("Status"),
            Badge::tx_status(&txn.status, palette).to_span(),
            Span::raw("  "),
            Badge::chain(txn.chain(), palette).to_span(),
        ]),
        plain("Amount", txn.payment_amount()),
        plain(
            "Network",
            txn.payment_network
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "--".to_string()),
        ),
        plain(
            "Tx Hash",
            txn.tx_hash
                .clone()
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| "--".to_string()),
        ),
        plain("Buyer", txn.buyer_address.clone()),
        plain("Seller", txn.seller_id.clone()),
    ];

    if let Some(prompt) = txn.initial_prompt() {
        lines.push(plain("Prompt", prompt.to_string()));
    }
    let bots = [
        ("Buyer Bot", metadata.and_then(|m| m.buyer_bot_username.as_deref())),
        ("Seller Bot", metadata.and_then(|m| m.seller_bot_username.as_deref())),
    ];
    for (name, bot) in bots {
        if let Some(bot) = bot.filter(|b| !b.is_empty()) {
            lines.push(plain(name, format!("@{bot}")));
        }
    }
    if let Some(reason) = txn.error_reason.as_deref().filter(|r| !r.is_empty()) {
        lines.push(Line::from(vec![
            label("Error"),
            Span::styled(reason.to_string(), palette.error_style()),
        ]));
    }

    lines.push(plain("Created", format_timestamp(&txn.created_at)));
    lines.push(plain("Updated", format_timestamp(&txn.updated_at)));
    lines
}

// ============================================================================
// Tests
// ============================================================================
