//! Key event to command mapping.
//!
//! Keys are translated into [`AppCommand`]s based on an [`InputContext`]
//! before the app acts on them, so key bindings can be tested without an
//! `App` or a terminal.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which key bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Cover,
    Dashboard,
    Transactions,
    TransactionDetail,
    /// Dashboard keyword input has focus.
    SearchInput,
    HelpPopup,
    MessagePopup,
}

impl InputContext {
    /// Returns `true` for overlay contexts that swallow page keys.
    #[must_use]
    pub const fn is_popup(&self) -> bool {
        matches!(self, Self::HelpPopup | Self::MessagePopup)
    }

    #[must_use]
    pub const fn accepts_text_input(&self) -> bool {
        matches!(self, Self::SearchInput)
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// What the user asked for, independent of the key that asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    Quit,
    /// Refetch the current page.
    Refresh,
    ToggleHelp,
    ToggleTheme,
    /// Close the active popup.
    Dismiss,

    // === Routing ===
    GoHome,
    GoDashboard,
    GoTransactions,
    /// Return to the previous route.
    Back,

    // === Lists ===
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    /// Open the selected item.
    Select,
    /// Switch between the dashboard's seller grid and recent transactions.
    CycleFocus,

    // === Page Actions ===
    FocusSearch,
    CycleChainFilter,
    CopyTransactionId,
    CopyTxHash,

    // === Search Input ===
    TypeChar(char),
    Backspace,
    CursorLeft,
    CursorRight,
    SubmitSearch,
    CancelSearch,

    Noop,
}

impl AppCommand {
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::GoHome | Self::GoDashboard | Self::GoTransactions | Self::Back | Self::Select
        )
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Pure translation from key to command.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return if context.accepts_text_input() {
                AppCommand::CancelSearch
            } else {
                AppCommand::Quit
            };
        }

        match context {
            InputContext::HelpPopup => Self::map_help_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
            InputContext::SearchInput => Self::map_search_input_keys(key),
            InputContext::Cover => Self::map_cover_keys(key),
            InputContext::Dashboard => Self::map_dashboard_keys(key),
            InputContext::Transactions => Self::map_transactions_keys(key),
            InputContext::TransactionDetail => Self::map_detail_keys(key),
        }
    }

    /// Keys shared by every page.
    fn map_page_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            KeyCode::Char('t') => AppCommand::ToggleTheme,
            KeyCode::Char('1' | 'h') => AppCommand::GoHome,
            KeyCode::Char('2' | 'd') => AppCommand::GoDashboard,
            KeyCode::Char('3') => AppCommand::GoTransactions,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::GoToTop,
            KeyCode::End | KeyCode::Char('G') => AppCommand::GoToBottom,
            KeyCode::Enter => AppCommand::Select,
            KeyCode::Esc | KeyCode::Backspace => AppCommand::Back,
            _ => AppCommand::Noop,
        }
    }

    fn map_cover_keys(key: KeyEvent) -> AppCommand {
        Self::map_page_keys(key)
    }

    fn map_dashboard_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('/') => AppCommand::FocusSearch,
            KeyCode::Tab | KeyCode::BackTab => AppCommand::CycleFocus,
            _ => Self::map_page_keys(key),
        }
    }

    fn map_transactions_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('f') => AppCommand::CycleChainFilter,
            _ => Self::map_page_keys(key),
        }
    }

    fn map_detail_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('c') => AppCommand::CopyTransactionId,
            KeyCode::Char('y') => AppCommand::CopyTxHash,
            _ => Self::map_page_keys(key),
        }
    }

    fn map_search_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::CancelSearch,
            KeyCode::Enter => AppCommand::SubmitSearch,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Left => AppCommand::CursorLeft,
            KeyCode::Right => AppCommand::CursorRight,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_help_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => AppCommand::ToggleHelp,
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
