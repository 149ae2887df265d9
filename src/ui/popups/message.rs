//! Message popup for errors that need acknowledging, such as a failed copy.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::Palette;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Renders `message` in a popup sized to its text.
pub fn render(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let message_lines = message.lines().count().max(1) as u16;
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let popup_width = 40.max(longest_line + 6).min(area.width * 8 / 10);
    let popup_height = 6.max(message_lines + 4);
    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let block = create_popup_block("Message", palette);
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let [text_area, help_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(message)
            .style(palette.base())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text_area,
    );
    frame.render_widget(
        Paragraph::new("Esc/Enter:Close  q:Quit")
            .style(palette.muted_style())
            .alignment(Alignment::Center),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_message_popup_variants() {
        let long = "Copy failed: clipboard not available in this session. Install wl-copy or xclip.";
        for message in ["Copy failed: no display", "Line 1\nLine 2\nLine 3", long, ""] {
            let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
            terminal
                .draw(|f| render(f, f.area(), message, &Theme::Dark.palette()))
                .unwrap();
            let rendered = buffer_to_string(terminal.backend().buffer());
            assert!(rendered.contains(" Message "));
            assert!(rendered.contains("Esc/Enter:Close"));
        }
    }

    #[test]
    fn test_message_text_is_shown() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), "Copy failed: no display", &Theme::Dark.palette()))
            .unwrap();
        assert!(buffer_to_string(terminal.backend().buffer()).contains("Copy failed: no display"));
    }
}
