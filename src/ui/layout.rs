//! Layout calculations for the lazyswap TUI.

use std::ops::Range;

use ratatui::layout::{Constraint, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the dashboard search bar.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Minimum width of a seller card column.
pub const SELLER_CARD_MIN_WIDTH: u16 = 34;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Logo, route tabs and status.
    pub header: Rect,
    /// Current page.
    pub main: Rect,
    /// Key hints.
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let [header, main, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    AppLayout {
        header,
        main,
        footer,
    }
}

/// Calculate a centered popup area within a parent area.
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Number of seller card columns that fit in `width`.
#[must_use]
pub fn grid_columns(width: u16) -> usize {
    (width / SELLER_CARD_MIN_WIDTH).max(1) as usize
}

/// Indices of the cards to draw so that the row holding `selected` is visible.
///
/// The window starts at the top until the selection moves past the last
/// visible row, then scrolls one row at a time.
#[must_use]
pub fn grid_window(len: usize, columns: usize, rows: usize, selected: Option<usize>) -> Range<usize> {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let selected_row = selected.unwrap_or(0) / columns;
    let first_row = selected_row.saturating_sub(rows - 1);
    let start = (first_row * columns).min(len);
    let end = (start + rows * columns).min(len);
    start..end
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_calculate_app_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = calculate_app_layout(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.main.height, 50 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn test_centered_popup_area() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_popup_area(parent, 40, 20);

        assert_eq!(popup, Rect::new(30, 15, 40, 20));
    }

    #[test]
    fn test_centered_popup_area_clamped() {
        let parent = Rect::new(0, 0, 30, 20);
        let popup = centered_popup_area(parent, 100, 50);

        assert!(popup.width <= parent.width - 4);
        assert!(popup.height <= parent.height - 4);
    }

    #[rstest]
    #[case(20, 1)]
    #[case(34, 1)]
    #[case(100, 2)]
    #[case(140, 4)]
    fn test_grid_columns(#[case] width: u16, #[case] expected: usize) {
        assert_eq!(grid_columns(width), expected);
    }

    #[rstest]
    #[case::empty(0, None, 0..0)]
    #[case::no_selection(10, None, 0..6)]
    #[case::selection_in_first_page(10, Some(5), 0..6)]
    #[case::scrolls_one_row(10, Some(6), 2..8)]
    #[case::last_card(10, Some(9), 4..10)]
    fn test_grid_window(
        #[case] len: usize,
        #[case] selected: Option<usize>,
        #[case] expected: Range<usize>,
    ) {
        assert_eq!(grid_window(len, 2, 3, selected), expected);
    }
}
