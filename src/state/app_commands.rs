//! Key handling and command execution.

use crossterm::event::KeyEvent;
use tracing::trace;

use super::{App, Route};
use crate::commands::{AppCommand, InputContext, KeyMapper};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        trace!(?context, ?command, popup = context.is_popup(), "key");
        // Toasts belong to the page they were raised on.
        if command.is_navigation() {
            self.ui.toast = None;
        }
        self.execute_command(command);
    }

    /// Determines which key bindings are active.
    ///
    /// Help beats popups, popups beat the search bar, the search bar beats
    /// the page.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.show_help {
            return InputContext::HelpPopup;
        }
        if self.ui.has_active_popup() {
            return InputContext::MessagePopup;
        }
        if self.ui.is_search_focused() && self.route == Route::Dashboard {
            return InputContext::SearchInput;
        }
        match self.route {
            Route::Cover => InputContext::Cover,
            Route::Dashboard => InputContext::Dashboard,
            Route::Transactions => InputContext::Transactions,
            Route::TransactionDetail(_) => InputContext::TransactionDetail,
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => self.exit = true,
            AppCommand::Refresh => self.load_current_route(),
            AppCommand::ToggleHelp => self.ui.toggle_help(),
            AppCommand::ToggleTheme => self.toggle_theme(),
            AppCommand::Dismiss => self.ui.dismiss_popup(),

            // === Routing ===
            AppCommand::GoHome => self.navigate_to(Route::Cover),
            AppCommand::GoDashboard => self.navigate_to(Route::Dashboard),
            AppCommand::GoTransactions => self.navigate_to(Route::Transactions),
            AppCommand::Back => self.go_back(),

            // === Lists ===
            AppCommand::MoveUp => self.move_selection_up(),
            AppCommand::MoveDown => self.move_selection_down(),
            AppCommand::GoToTop => self.go_to_top(),
            AppCommand::GoToBottom => self.go_to_bottom(),
            AppCommand::Select => self.open_selected(),
            AppCommand::CycleFocus => self.cycle_dashboard_focus(),

            // === Page Actions ===
            AppCommand::FocusSearch => self.ui.focus_search(),
            AppCommand::CycleChainFilter => self.data.transactions.cycle_filter(),
            AppCommand::CopyTransactionId => self.copy_transaction_id(),
            AppCommand::CopyTxHash => self.copy_tx_hash(),

            // === Search Input ===
            AppCommand::TypeChar(c) => self.ui.search_type_char(c),
            AppCommand::Backspace => self.ui.search_backspace(),
            AppCommand::CursorLeft => self.ui.search_cursor_left(),
            AppCommand::CursorRight => self.ui.search_cursor_right(),
            AppCommand::SubmitSearch => self.submit_search(),
            AppCommand::CancelSearch => self.cancel_search(),

            AppCommand::Noop => {}
        }
    }
}
