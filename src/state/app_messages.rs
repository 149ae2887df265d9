//! Message processing: results of background fetches land here.

use tracing::debug;

use super::{App, AppMessage, BackendHealth};

impl App {
    /// Drains the message channel.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
        }
    }

    pub(crate) fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::CoverLoaded { seq, result } => {
                let page = &mut self.data.cover;
                if !page.load.accepts(seq) {
                    debug!(seq, "dropping stale cover response");
                    return;
                }
                match result {
                    Ok((sellers, transactions)) => {
                        page.apply(&sellers, &transactions);
                        page.load.finish(None);
                    }
                    Err(error) => {
                        page.clear();
                        page.load.finish(Some(error));
                    }
                }
            }
            AppMessage::DashboardLoaded { seq, result } => {
                let page = &mut self.data.dashboard;
                if !page.load.accepts(seq) {
                    debug!(seq, "dropping stale dashboard response");
                    return;
                }
                match result {
                    Ok((sellers, transactions)) => {
                        page.apply(sellers, transactions);
                        page.load.finish(None);
                    }
                    Err(error) => {
                        page.clear();
                        page.load.finish(Some(error));
                    }
                }
            }
            AppMessage::TransactionsLoaded { seq, result } => {
                let page = &mut self.data.transactions;
                if !page.load.accepts(seq) {
                    debug!(seq, "dropping stale transactions response");
                    return;
                }
                match result {
                    Ok(transactions) => {
                        page.apply(transactions);
                        page.load.finish(None);
                    }
                    Err(error) => {
                        page.clear();
                        page.load.finish(Some(error));
                    }
                }
            }
            AppMessage::TransactionLoaded { seq, result } => {
                let page = &mut self.data.detail;
                if !page.load.accepts(seq) {
                    debug!(seq, "dropping stale transaction response");
                    return;
                }
                match result {
                    Ok(transaction) => {
                        page.apply(transaction.map(|t| *t));
                        page.load.finish(None);
                    }
                    Err(error) => {
                        page.transaction = None;
                        page.load.finish(Some(error));
                    }
                }
            }
            AppMessage::HealthChecked(result) => {
                self.health = match result {
                    Ok(status) => BackendHealth::Up(status),
                    Err(error) => BackendHealth::Down(error),
                };
            }
        }
    }
}
