//! Routing and list selection.

use tracing::debug;

use super::{App, DashboardFocus, Route};
use crate::widgets::list::SelectionState;

impl App {
    // ========================================================================
    // Routing
    // ========================================================================

    /// Switches to `route` and fetches its data. Re-entering the current
    /// route does nothing; use refresh for that.
    pub(crate) fn navigate_to(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        debug!(from = %self.route.path(), to = %route.path(), "navigate");
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous);
        self.ui.unfocus_search();
        self.load_current_route();
    }

    /// Returns to the previous route, or the parent page when there is none.
    pub(crate) fn go_back(&mut self) {
        let target = match self.history.pop() {
            Some(route) => route,
            None => match self.route {
                Route::Cover => return,
                Route::TransactionDetail(_) => Route::Transactions,
                Route::Dashboard | Route::Transactions => Route::Cover,
            },
        };
        debug!(to = %target.path(), "back");
        self.route = target;
        self.ui.unfocus_search();
        self.load_current_route();
    }

    /// Enter: opens whatever the current page has selected.
    pub(crate) fn open_selected(&mut self) {
        let target = match &self.route {
            Route::Cover => Some(Route::Dashboard),
            Route::Dashboard => match self.data.dashboard.focus {
                DashboardFocus::Transactions => self.data.dashboard.selected_transaction(),
                DashboardFocus::Sellers => None,
            }
            .map(|t| Route::TransactionDetail(t.transaction_id.clone())),
            Route::Transactions => self
                .data
                .transactions
                .selected_transaction()
                .map(|t| Route::TransactionDetail(t.transaction_id.clone())),
            Route::TransactionDetail(_) => None,
        };
        if let Some(route) = target {
            self.navigate_to(route);
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// The list receiving arrow keys on the current page, with its length.
    fn active_selection(&mut self) -> Option<(&mut SelectionState, usize)> {
        match self.route {
            Route::Dashboard => {
                let page = &mut self.data.dashboard;
                Some(match page.focus {
                    DashboardFocus::Sellers => (&mut page.seller_selection, page.sellers.len()),
                    DashboardFocus::Transactions => {
                        (&mut page.transaction_selection, page.transactions.len())
                    }
                })
            }
            Route::Transactions => {
                let len = self.data.transactions.filtered().len();
                Some((&mut self.data.transactions.selection, len))
            }
            Route::Cover | Route::TransactionDetail(_) => None,
        }
    }

    pub(crate) fn move_selection_up(&mut self) {
        if let Some((selection, len)) = self.active_selection() {
            selection.select_previous(len);
        }
    }

    pub(crate) fn move_selection_down(&mut self) {
        if let Some((selection, len)) = self.active_selection() {
            selection.select_next(len);
        }
    }

    pub(crate) fn go_to_top(&mut self) {
        if let Some((selection, len)) = self.active_selection() {
            selection.select((len > 0).then_some(0));
        }
    }

    pub(crate) fn go_to_bottom(&mut self) {
        if let Some((selection, len)) = self.active_selection() {
            selection.select(len.checked_sub(1));
        }
    }

    pub(crate) fn cycle_dashboard_focus(&mut self) {
        let page = &mut self.data.dashboard;
        page.focus = page.focus.next();
    }
}
