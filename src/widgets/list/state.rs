//! Selection and scrolling state for list widgets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::scrollbar,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

// ============================================================================
// SelectionState
// ============================================================================

/// Selected row and first visible row of a list.
///
/// Selection is clamped against the list length on every move, so the state
/// stays valid when the underlying data is replaced by a refetch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    /// Currently selected index in the list.
    pub selected_index: Option<usize>,
    /// Index of the first visible item.
    pub offset: usize,
}

impl SelectionState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected_index: None,
            offset: 0,
        }
    }

    #[must_use]
    pub const fn with_selection(index: usize) -> Self {
        Self {
            selected_index: Some(index),
            offset: 0,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    /// Moves down one item, stopping at the last.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    /// Moves up one item, stopping at the first.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) => i.saturating_sub(1).min(len - 1),
            None => 0,
        });
    }

    /// Resets after new data arrived: first item selected, or nothing when empty.
    pub fn reset(&mut self, len: usize) {
        self.selected_index = (len > 0).then_some(0);
        self.offset = 0;
    }

    /// Visible `[start, end)` range for `per_page` items, keeping the selection in view.
    pub fn visible_range(&mut self, len: usize, per_page: usize) -> (usize, usize) {
        let per_page = per_page.max(1);
        if let Some(selected) = self.selected_index {
            if selected < self.offset {
                self.offset = selected;
            } else if selected >= self.offset + per_page {
                self.offset = selected + 1 - per_page;
            }
        }
        self.offset = self.offset.min(len.saturating_sub(per_page));
        (self.offset, (self.offset + per_page).min(len))
    }
}

// ============================================================================
// Scrollbar
// ============================================================================

/// Renders a vertical scrollbar when `total_items` overflow the viewport.
pub fn render_list_scrollbar(
    area: Rect,
    buf: &mut Buffer,
    total_items: usize,
    items_per_page: usize,
    position: usize,
) {
    if total_items <= items_per_page {
        return;
    }

    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .symbols(scrollbar::VERTICAL)
        .track_symbol(None)
        .begin_symbol(None)
        .end_symbol(None)
        .style(Style::default().fg(Color::Gray))
        .track_style(Style::default().fg(Color::DarkGray));

    let mut scrollbar_state = ScrollbarState::default()
        .content_length(total_items)
        .viewport_content_length(items_per_page)
        .position(position);

    scrollbar.render(area, buf, &mut scrollbar_state);
}
