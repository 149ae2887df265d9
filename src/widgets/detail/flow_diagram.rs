//! Payment flow diagram widget.
//!
//! Shows who paid, how much on which chain, and which seller session it opened.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::domain::{Transaction, chain_label};
use crate::theme::Palette;
use crate::widgets::helpers::{short_buyer, truncate_text};

// ============================================================================
// PaymentFlowDiagram Widget
// ============================================================================

/// ASCII boxes showing the flow of one purchase.
///
/// # Example
///
/// ```text
/// ┌────────────────────┐     ┌────────────────────┐     ┌────────────────────┐
/// │ BUYER              │────▶│ PAYMENT            │────▶│ SELLER             │
/// │ 0xbuyer000…00000001│     │ 2.500 TRX          │     │ alpha              │
/// │ @buyer_bot         │     │ Tron               │     │ chat -100123 #7    │
/// └────────────────────┘     └────────────────────┘     └────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct PaymentFlowDiagram<'a> {
    txn: &'a Transaction,
    palette: Palette,
    box_width: usize,
}

impl<'a> PaymentFlowDiagram<'a> {
    const CONNECTOR: &'static str = "────▶";
    const GAP: &'static str = "     ";

    #[must_use]
    pub const fn new(txn: &'a Transaction, palette: Palette) -> Self {
        Self {
            txn,
            palette,
            box_width: 22,
        }
    }

    #[must_use]
    pub const fn with_box_width(mut self, width: usize) -> Self {
        self.box_width = if width < 8 { 8 } else { width };
        self
    }

    /// Total width of the diagram in columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.box_width * 3 + Self::GAP.chars().count() * 2
    }

    fn boxes(&self) -> [(&'static str, String, String); 3] {
        let txn = self.txn;
        let metadata = txn.metadata.as_ref();
        let bot = |name: Option<&String>| {
            name.filter(|n| !n.is_empty())
                .map_or_else(|| "--".to_string(), |n| format!("@{n}"))
        };

        let session = match (&txn.chat_id, txn.message_thread_id) {
            (Some(chat), Some(thread)) => format!("chat {chat} #{thread}"),
            (Some(chat), None) => format!("chat {chat}"),
            (None, _) => "no session".to_string(),
        };

        [
            (
                "BUYER",
                short_buyer(&txn.buyer_address),
                bot(metadata.and_then(|m| m.buyer_bot_username.as_ref())),
            ),
            (
                "PAYMENT",
                txn.payment_amount(),
                chain_label(txn.chain()).to_string(),
            ),
            ("SELLER", txn.seller_id.clone(), session),
        ]
    }

    fn cell(&self, text: &str) -> String {
        let inner = self.box_width - 2;
        let text = truncate_text(text, inner - 1);
        format!(" {text:<width$}", width = inner - 1)
    }

    /// Generate the flow diagram lines.
    #[must_use]
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let border = Style::default().fg(p.border);
        let title = Style::default().fg(p.primary).add_modifier(Modifier::BOLD);
        let arrow = Style::default().fg(p.accent);
        let horizontal = "─".repeat(self.box_width - 2);
        let boxes = self.boxes();

        let edge = |left: &str, right: &str| {
            let mut spans = Vec::new();
            for i in 0..3 {
                if i > 0 {
                    spans.push(Span::raw(Self::GAP));
                }
                spans.push(Span::styled(format!("{left}{horizontal}{right}"), border));
            }
            Line::from(spans)
        };

        let row = |texts: [&str; 3], style: Style, connect: bool| {
            let mut spans = Vec::new();
            for (i, text) in texts.iter().enumerate() {
                if i > 0 {
                    if connect {
                        spans.push(Span::styled(Self::CONNECTOR, arrow));
                    } else {
                        spans.push(Span::raw(Self::GAP));
                    }
                }
                spans.push(Span::styled("│", border));
                spans.push(Span::styled(self.cell(text), style));
                spans.push(Span::styled("│", border));
            }
            Line::from(spans)
        };

        vec![
            edge("┌", "┐"),
            row([boxes[0].0, boxes[1].0, boxes[2].0], title, true),
            row(
                [&boxes[0].1, &boxes[1].1, &boxes[2].1],
                Style::default().fg(p.fg),
                false,
            ),
            row([&boxes[0].2, &boxes[1].2, &boxes[2].2], p.muted_style(), false),
            edge("└", "┘"),
        ]
    }
}

impl Widget for PaymentFlowDiagram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, line) in self.to_lines().into_iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TransactionMother;
    use crate::theme::Theme;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_flow_diagram_contents() {
        let txn = TransactionMother::session("tx-1");
        let diagram = PaymentFlowDiagram::new(&txn, Theme::Dark.palette());
        let lines = plain(&diagram.to_lines());

        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("BUYER"));
        assert!(lines[1].contains("────▶│ PAYMENT"));
        assert!(lines[2].contains("2.500 TRX"));
        assert!(lines[2].contains("alpha"));
        assert!(lines[3].contains("@buyer_bot"));
        assert!(lines[3].contains("Tron"));
        assert!(lines[3].contains("chat -100123 #7"));
        for line in &lines {
            assert_eq!(line.chars().count(), diagram.width());
        }
    }

    #[test]
    fn test_flow_diagram_without_session() {
        let txn = TransactionMother::basic("tx-2", "beta", "0xabc");
        let lines = plain(&PaymentFlowDiagram::new(&txn, Theme::Dark.palette()).to_lines());
        assert!(lines[3].contains("no session"));
        assert!(lines[3].contains("Unknown"));
        assert!(lines[3].contains("--"));
        assert!(lines[2].contains("--"));
        assert!(!lines[2].contains("CFX"));
    }
}
