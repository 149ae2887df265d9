//! Transaction list widget.
//!
//! Card-style rows for the dashboard's recent transactions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::state::{SelectionState, render_list_scrollbar};
use crate::domain::{Transaction, format_cfx, format_timestamp};
use crate::theme::Palette;
use crate::widgets::common::Badge;
use crate::widgets::helpers::{short_card_id, truncate_text};

// ============================================================================
// TransactionListWidget
// ============================================================================

/// A list of transaction cards with selection and scrolling.
///
/// # Example
///
/// ```text
/// ▶ 7f3a9c2e...f9a8b7  2024-03-01 12:00:00        [Paid]
///   Buyer 0x123456...345678   Price 0.001000 CFX
///   Prompt: Explain the codebase
///   Hash: 0xfeed
/// ```
#[derive(Debug)]
pub struct TransactionListWidget<'a> {
    transactions: &'a [Transaction],
    palette: Palette,
    focused: bool,
}

impl<'a> TransactionListWidget<'a> {
    /// Rows per transaction card, including the spacer.
    pub const ITEM_HEIGHT: u16 = 5;

    #[must_use]
    pub const fn new(transactions: &'a [Transaction], palette: Palette) -> Self {
        Self {
            transactions,
            palette,
            focused: false,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn card(&self, txn: &Transaction, selected: bool, width: usize) -> ListItem<'static> {
        let p = &self.palette;
        let marker = if selected { "▶ " } else { "  " };
        let label = p.muted_style();

        let mut lines = vec![
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    short_card_id(&txn.transaction_id),
                    Style::default().fg(p.primary).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}  ", format_timestamp(&txn.created_at)), label),
                Badge::tx_status(&txn.status, p).to_span(),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled("Buyer ", label),
                Span::raw(short_card_id(&txn.buyer_address)),
                Span::styled("   Price ", label),
                Span::styled(
                    format_cfx(txn.price_wei, 6),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let text_width = width.saturating_sub(12).max(8);
        lines.push(match txn.initial_prompt() {
            Some(prompt) => Line::from(vec![
                Span::styled("  Prompt: ", label),
                Span::raw(truncate_text(prompt, text_width)),
            ]),
            None => Line::from(""),
        });
        lines.push(match txn.tx_hash.as_deref().filter(|h| !h.is_empty()) {
            Some(hash) => Line::from(vec![
                Span::styled("  Hash: ", label),
                Span::raw(truncate_text(hash, text_width)),
            ]),
            None => Line::from(""),
        });
        lines.push(Line::from(""));

        ListItem::new(lines)
    }
}

impl StatefulWidget for TransactionListWidget<'_> {
    type State = SelectionState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.transactions.is_empty() {
            Paragraph::new("No transactions")
                .style(self.palette.muted_style())
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let per_page = (area.height / Self::ITEM_HEIGHT).max(1) as usize;
        let (start, end) = state.visible_range(self.transactions.len(), per_page);
        let width = area.width as usize;

        let items: Vec<ListItem> = self.transactions[start..end]
            .iter()
            .enumerate()
            .map(|(i, txn)| self.card(txn, state.selected() == Some(start + i), width))
            .collect();

        let mut list_state = ListState::default();
        if self.focused {
            list_state.select(state.selected().map(|s| s - start));
        }
        let list = List::new(items).highlight_style(self.palette.selected_style());
        StatefulWidget::render(list, area, buf, &mut list_state);

        if self.focused {
            render_list_scrollbar(area, buf, self.transactions.len(), per_page, start);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
