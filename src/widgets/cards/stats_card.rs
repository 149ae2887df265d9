//! A titled single-value card.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::theme::Palette;

/// Title on the border, value centered and bold.
#[derive(Debug, Clone)]
pub struct StatsCard<'a> {
    title: &'a str,
    value: String,
    palette: Palette,
}

impl<'a> StatsCard<'a> {
    #[must_use]
    pub fn new(title: &'a str, value: impl Into<String>, palette: Palette) -> Self {
        Self {
            title,
            value: value.into(),
            palette,
        }
    }
}

impl Widget for StatsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style(false))
            .title(Line::styled(format!(" {} ", self.title), self.palette.muted_style()));
        let inner = block.inner(area);
        block.render(area, buf);

        let top_pad = inner.height.saturating_sub(1) / 2;
        let value_area = Rect {
            y: inner.y + top_pad,
            height: inner.height.min(1),
            ..inner
        };
        Paragraph::new(self.value)
            .style(
                Style::default()
                    .fg(self.palette.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .render(value_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_renders_title_and_value() {
        let mut terminal = Terminal::new(TestBackend::new(24, 3)).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(
                    StatsCard::new("Sellers", "42", Theme::Dark.palette()),
                    f.area(),
                );
            })
            .unwrap();
        insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
        ╭ Sellers ─────────────╮
        │          42          │
        ╰──────────────────────╯
        ");
    }
}
