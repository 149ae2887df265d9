//! UI presentation state: popups, help overlay, search input, toasts and theme.

use crate::theme::{Palette, Theme};

// ============================================================================
// Popup State
// ============================================================================

/// The modal popup currently shown. Only one can be active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Message/notification popup.
    Message(String),
}

impl PopupState {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            Self::None => None,
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state shared by every page.
///
/// # Example
///
/// ```ignore
/// let mut ui = UiState::new(Theme::Dark);
/// ui.show_toast("Copied transaction id", TOAST_TICKS);
/// ui.toggle_theme();
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    pub popup_state: PopupState,
    pub show_help: bool,

    // === Dashboard keyword search ===
    pub search_input: String,
    /// Cursor position within `search_input` (byte offset).
    pub search_cursor: usize,
    pub search_focused: bool,

    /// Toast message and remaining ticks.
    pub toast: Option<(String, u8)>,

    pub theme: Theme,
}

impl UiState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    // ========================================================================
    // Popups
    // ========================================================================

    #[must_use]
    pub const fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ========================================================================
    // Search Input
    // ========================================================================

    /// Focuses the search bar with the cursor at the end of the current text.
    pub fn focus_search(&mut self) {
        self.search_focused = true;
        self.search_cursor = self.search_input.len();
    }

    pub fn unfocus_search(&mut self) {
        self.search_focused = false;
        self.search_cursor = 0;
    }

    #[must_use]
    pub const fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn search_type_char(&mut self, c: char) {
        self.search_input.insert(self.search_cursor, c);
        self.search_cursor += c.len_utf8();
    }

    /// Removes the character before the cursor.
    pub fn search_backspace(&mut self) {
        if let Some(prev) = self.previous_boundary() {
            self.search_input.remove(prev);
            self.search_cursor = prev;
        }
    }

    pub fn search_cursor_left(&mut self) {
        if let Some(prev) = self.previous_boundary() {
            self.search_cursor = prev;
        }
    }

    fn previous_boundary(&self) -> Option<usize> {
        self.search_input[..self.search_cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    pub fn search_cursor_right(&mut self) {
        if let Some(c) = self.search_input[self.search_cursor..].chars().next() {
            self.search_cursor += c.len_utf8();
        }
    }

    /// Restores the input to `value`, e.g. the last submitted keyword on cancel.
    pub fn set_search(&mut self, value: &str) {
        self.search_input = value.to_string();
        self.search_cursor = self.search_input.len();
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_input
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast for `ticks` ticks of the main loop.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Counts the toast down. Returns `true` when it was removed.
    pub fn tick_toast(&mut self) -> bool {
        match &mut self.toast {
            Some((_, ticks)) if *ticks > 1 => {
                *ticks -= 1;
                false
            }
            Some(_) => {
                self.toast = None;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|(msg, _)| msg.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
