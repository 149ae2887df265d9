//! Seller card widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::constants::SELLER_CARD_KEYWORDS;
use crate::domain::{Seller, format_date};
use crate::theme::Palette;
use crate::widgets::common::Badge;
use crate::widgets::helpers::{short_address, truncate_text};

// ============================================================================
// SellerCard Widget
// ============================================================================

/// One seller in the dashboard grid.
///
/// # Example
///
/// ```text
/// ╭ alpha ─────────────────────────╮
/// │[Active] 0x1234...5678          │
/// │Context about Rust              │
/// │#rust #defi #llm +2             │
/// │Conflux  0.001000 CFX           │
/// │Tron     1.0000 TRX             │
/// │Since 2024-03-01                │
/// ╰────────────────────────────────╯
/// ```
#[derive(Debug, Clone)]
pub struct SellerCard<'a> {
    seller: &'a Seller,
    palette: Palette,
    selected: bool,
}

impl<'a> SellerCard<'a> {
    /// Card height including borders, enough for both price rows.
    pub const HEIGHT: u16 = 8;

    #[must_use]
    pub const fn new(seller: &'a Seller, palette: Palette) -> Self {
        Self {
            seller,
            palette,
            selected: false,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn keyword_line(&self) -> Line<'static> {
        let keywords = &self.seller.keywords;
        if keywords.is_empty() {
            return Line::from("");
        }
        let mut spans: Vec<Span<'static>> = keywords
            .iter()
            .take(SELLER_CARD_KEYWORDS)
            .map(|k| Span::styled(format!("#{k} "), Style::default().fg(self.palette.accent)))
            .collect();
        if keywords.len() > SELLER_CARD_KEYWORDS {
            spans.push(Span::styled(
                format!("+{}", keywords.len() - SELLER_CARD_KEYWORDS),
                self.palette.muted_style(),
            ));
        }
        Line::from(spans)
    }

    fn price_lines(&self) -> Vec<Line<'static>> {
        let label = self.palette.muted_style();
        let value = Style::default().add_modifier(Modifier::BOLD);
        let rows = [
            ("Conflux  ", self.seller.conflux_price()),
            ("Tron     ", self.seller.tron_price()),
            ("Price    ", self.seller.legacy_price()),
        ];
        rows.into_iter()
            .filter_map(|(name, price)| {
                price.map(|p| Line::from(vec![Span::styled(name, label), Span::styled(p, value)]))
            })
            .collect()
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let seller = self.seller;
        let description = if seller.description.trim().is_empty() {
            Line::styled("No description", self.palette.muted_style())
        } else {
            Line::from(truncate_text(seller.description.trim(), width))
        };

        let mut lines = vec![
            Line::from(vec![
                Badge::seller_status(&seller.status, &self.palette).to_span(),
                Span::raw(" "),
                Span::raw(short_address(&seller.evm_address)),
            ]),
            description,
            self.keyword_line(),
        ];
        lines.extend(self.price_lines());
        lines.push(Line::styled(
            format!("Since {}", format_date(&seller.created_at)),
            self.palette.muted_style(),
        ));
        lines
    }
}

impl Widget for SellerCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style(self.selected))
            .title(Line::styled(
                format!(" {} ", self.seller.seller_id),
                self.palette.title_style(self.selected),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines(inner.width as usize))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================
