//! Status and chain badges.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::domain::{PaymentChain, SellerStatus, TxStatus, chain_label};
use crate::theme::Palette;

// ============================================================================
// Badge Widget
// ============================================================================

/// A short colored label such as `[Paid]` or `[Tron]`.
///
/// # Usage
///
/// ```ignore
/// use crate::widgets::common::Badge;
///
/// let badge = Badge::tx_status(&txn.status, &palette);
/// let line = Line::from(vec![badge.to_span(), Span::raw(" 0x12...")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    label: String,
    color: Color,
}

impl Badge {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    /// Paid, Session Created, Pending, Failed, or the raw status.
    #[must_use]
    pub fn tx_status(status: &TxStatus, palette: &Palette) -> Self {
        Self::new(status.label(), palette.tx_status(status))
    }

    /// Tron, Conflux, or Unknown.
    #[must_use]
    pub fn chain(chain: Option<PaymentChain>, palette: &Palette) -> Self {
        Self::new(chain_label(chain), palette.chain(chain))
    }

    /// Active or Inactive.
    #[must_use]
    pub fn seller_status(status: &SellerStatus, palette: &Palette) -> Self {
        Self::new(status.label(), palette.seller_status(status))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn to_span(&self) -> Span<'static> {
        Span::styled(
            format!("[{}]", self.label),
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        )
    }
}

impl Widget for Badge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.to_span()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use rstest::rstest;

    #[rstest]
    #[case(TxStatus::Paid, "[Paid]")]
    #[case(TxStatus::SessionCreated, "[Session Created]")]
    #[case(TxStatus::Pending, "[Pending]")]
    #[case(TxStatus::Failed, "[Failed]")]
    #[case(TxStatus::Other("refunded".into()), "[refunded]")]
    fn test_tx_status_badge(#[case] status: TxStatus, #[case] expected: &str) {
        let badge = Badge::tx_status(&status, &Theme::Dark.palette());
        assert_eq!(badge.to_span().content, expected);
    }

    #[test]
    fn test_chain_and_seller_badges() {
        let palette = Theme::Light.palette();
        assert_eq!(Badge::chain(None, &palette).label(), "Unknown");
        assert_eq!(
            Badge::chain(Some(PaymentChain::Conflux), &palette).label(),
            "Conflux"
        );
        assert_eq!(
            Badge::seller_status(&SellerStatus::Active, &palette).to_span().style.fg,
            Some(palette.success)
        );
    }
}
