//! Page fetches and side-effecting actions (clipboard, theme persistence).
//!
//! Each fetch takes a sequence number from the page's [`LoadState`] and runs
//! in a spawned task; the result comes back as an [`AppMessage`].
//!
//! [`LoadState`]: super::LoadState

use tracing::{debug, warn};

use super::platform::copy_text;
use super::{App, AppMessage, Route};
use crate::client::{SellerListQuery, SellerSource, TransactionListQuery};
use crate::constants::{
    COVER_SELLER_LIMIT, COVER_TRANSACTION_LIMIT, DASHBOARD_SELLER_LIMIT,
    DASHBOARD_TRANSACTION_LIMIT, TOAST_TICKS, TRANSACTIONS_PAGE_LIMIT,
};
use crate::domain::ApiError;

/// Joins two concurrent results, keeping the first error.
fn both<A, B>(a: Result<A, ApiError>, b: Result<B, ApiError>) -> Result<(A, B), String> {
    a.and_then(|a| b.map(|b| (a, b))).map_err(|err| {
        warn!("fetch failed: {err}");
        err.to_string()
    })
}

impl App {
    // ========================================================================
    // Fetches
    // ========================================================================

    /// Fetches the data of the current route.
    pub(crate) fn load_current_route(&mut self) {
        match self.route.clone() {
            Route::Cover => self.load_cover(),
            Route::Dashboard => self.load_dashboard(),
            Route::Transactions => self.load_transactions(),
            Route::TransactionDetail(id) => self.load_transaction(&id),
        }
    }

    fn load_cover(&mut self) {
        let seq = self.data.cover.load.begin();
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        debug!(seq, "loading cover");

        tokio::spawn(async move {
            let seller_query = SellerListQuery::limited(COVER_SELLER_LIMIT);
            let transaction_query = TransactionListQuery::limited(COVER_TRANSACTION_LIMIT);
            let (sellers, transactions) = tokio::join!(
                client.list_sellers(&seller_query),
                client.list_transactions(&transaction_query),
            );
            let result = both(sellers, transactions);
            let _ = message_tx.send(AppMessage::CoverLoaded { seq, result });
        });
    }

    fn load_dashboard(&mut self) {
        let page = &mut self.data.dashboard;
        let seq = page.load.begin();
        let source = SellerSource::from_keyword(
            &page.keyword,
            SellerListQuery::active(DASHBOARD_SELLER_LIMIT),
        );
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        debug!(seq, ?source, "loading dashboard");

        tokio::spawn(async move {
            let transaction_query = TransactionListQuery::limited(DASHBOARD_TRANSACTION_LIMIT);
            let (sellers, transactions) = tokio::join!(
                client.fetch_sellers(&source),
                client.list_transactions(&transaction_query),
            );
            let result = both(sellers, transactions);
            let _ = message_tx.send(AppMessage::DashboardLoaded { seq, result });
        });
    }

    fn load_transactions(&mut self) {
        let seq = self.data.transactions.load.begin();
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        debug!(seq, "loading transactions");

        tokio::spawn(async move {
            let result = client
                .list_transactions(&TransactionListQuery::limited(TRANSACTIONS_PAGE_LIMIT))
                .await
                .map_err(|err| {
                    warn!("transactions fetch failed: {err}");
                    err.to_string()
                });
            let _ = message_tx.send(AppMessage::TransactionsLoaded { seq, result });
        });
    }

    fn load_transaction(&mut self, id: &str) {
        let page = &mut self.data.detail;
        page.open(id);
        let seq = page.load.begin();
        let id = id.to_string();
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        debug!(seq, %id, "loading transaction");

        tokio::spawn(async move {
            let result = match client.get_transaction(&id).await {
                Ok(txn) => Ok(Some(Box::new(txn))),
                Err(err) if err.is_not_found() => Ok(None),
                Err(err) => {
                    warn!("transaction fetch failed: {err}");
                    Err(err.to_string())
                }
            };
            let _ = message_tx.send(AppMessage::TransactionLoaded { seq, result });
        });
    }

    // ========================================================================
    // Dashboard Search
    // ========================================================================

    /// Submits the search bar as the dashboard keyword and refetches.
    pub(crate) fn submit_search(&mut self) {
        self.data.dashboard.keyword = self.ui.search_query().trim().to_string();
        self.ui.unfocus_search();
        self.load_dashboard();
    }

    /// Leaves the search bar, restoring the last submitted keyword.
    pub(crate) fn cancel_search(&mut self) {
        let keyword = self.data.dashboard.keyword.clone();
        self.ui.set_search(&keyword);
        self.ui.unfocus_search();
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    pub(crate) fn copy_transaction_id(&mut self) {
        let id = self
            .data
            .detail
            .transaction
            .as_ref()
            .map(|t| t.transaction_id.clone());
        self.copy_with_toast(id, "Transaction id");
    }

    pub(crate) fn copy_tx_hash(&mut self) {
        let hash = self
            .data
            .detail
            .transaction
            .as_ref()
            .and_then(|t| t.tx_hash.clone());
        self.copy_with_toast(hash, "Tx hash");
    }

    fn copy_with_toast(&mut self, value: Option<String>, what: &str) {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            self.ui.show_toast(format!("No {} to copy", what.to_lowercase()), TOAST_TICKS);
            return;
        };
        match copy_text(&value) {
            Ok(()) => self.ui.show_toast(format!("{what} copied"), TOAST_TICKS),
            Err(err) => {
                warn!("clipboard: {err}");
                self.ui.show_message(format!("Copy failed: {err}"));
            }
        }
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Switches theme and saves the choice.
    pub(crate) fn toggle_theme(&mut self) {
        let theme = self.ui.toggle_theme();
        self.config.theme = theme;
        if self.persist_config
            && let Err(err) = self.config.save()
        {
            warn!("saving theme failed: {err}");
        }
        self.ui
            .show_toast(format!("Theme: {}", theme.name()), TOAST_TICKS);
    }
}
