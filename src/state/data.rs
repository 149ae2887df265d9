//! Per-page data state.
//!
//! Each page owns its fetched data plus a [`LoadState`]. Pages are
//! independent: entering a page starts a new request and its response only
//! lands if it is still the latest one for that page.

use crate::constants::{HERO_LINES, VOLUME_CHART_DAYS};
use crate::domain::{
    ChainFilter, DashboardStats, PriceBucket, Seller, Transaction, daily_volume, price_buckets,
    status_distribution,
};
use crate::widgets::graph::Topology;
use crate::widgets::list::SelectionState;

// ============================================================================
// Load State
// ============================================================================

/// Loading flag, inline error and request sequence of one page.
///
/// Every fetch takes a new sequence number from [`LoadState::begin`]. A
/// response whose number is not the latest is stale and gets dropped, so a
/// slow request can never overwrite a newer one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadState {
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl LoadState {
    /// Starts a request: sets `loading`, clears the error, returns its sequence.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Returns `true` if `seq` belongs to the latest request.
    #[must_use]
    pub const fn accepts(&self, seq: u64) -> bool {
        seq == self.seq
    }

    /// Settles the latest request.
    pub fn finish(&mut self, error: Option<String>) {
        self.loading = false;
        self.error = error;
    }
}

// ============================================================================
// Cover
// ============================================================================

#[derive(Debug, Default)]
pub struct CoverPage {
    pub load: LoadState,
    pub topology: Topology,
    pub seller_count: usize,
    pub transaction_count: usize,
    /// Index into [`HERO_LINES`].
    pub hero_index: usize,
}

impl CoverPage {
    pub fn apply(&mut self, sellers: &[Seller], transactions: &[Transaction]) {
        self.topology = Topology::build(sellers, transactions);
        self.seller_count = sellers.len();
        self.transaction_count = transactions.len();
    }

    pub fn clear(&mut self) {
        self.topology = Topology::default();
        self.seller_count = 0;
        self.transaction_count = 0;
    }

    pub fn advance_hero(&mut self) {
        self.hero_index = (self.hero_index + 1) % HERO_LINES.len();
    }

    #[must_use]
    pub fn hero_line(&self) -> &'static str {
        HERO_LINES[self.hero_index % HERO_LINES.len()]
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// Which dashboard list receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardFocus {
    #[default]
    Sellers,
    Transactions,
}

impl DashboardFocus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Sellers => Self::Transactions,
            Self::Transactions => Self::Sellers,
        }
    }
}

#[derive(Debug, Default)]
pub struct DashboardPage {
    pub load: LoadState,
    pub sellers: Vec<Seller>,
    pub transactions: Vec<Transaction>,
    pub stats: DashboardStats,
    pub status_chart: Vec<(String, u64)>,
    pub volume_chart: Vec<(String, u128)>,
    pub price_chart: Vec<(PriceBucket, u64)>,
    /// Keyword of the last submitted search; empty lists instead.
    pub keyword: String,
    pub focus: DashboardFocus,
    pub seller_selection: SelectionState,
    pub transaction_selection: SelectionState,
}

impl DashboardPage {
    pub fn apply(&mut self, sellers: Vec<Seller>, transactions: Vec<Transaction>) {
        self.stats = DashboardStats::compute(&sellers, &transactions);
        self.status_chart = status_distribution(&transactions);
        self.volume_chart = daily_volume(&transactions, VOLUME_CHART_DAYS);
        self.price_chart = price_buckets(&sellers);
        self.seller_selection.reset(sellers.len());
        self.transaction_selection.reset(transactions.len());
        self.sellers = sellers;
        self.transactions = transactions;
    }

    /// Drops both lists and everything derived from them.
    pub fn clear(&mut self) {
        self.apply(Vec::new(), Vec::new());
    }

    #[must_use]
    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.transaction_selection
            .selected()
            .and_then(|i| self.transactions.get(i))
    }
}

// ============================================================================
// Transactions
// ============================================================================

#[derive(Debug, Default)]
pub struct TransactionsPage {
    pub load: LoadState,
    pub transactions: Vec<Transaction>,
    pub filter: ChainFilter,
    pub selection: SelectionState,
}

impl TransactionsPage {
    #[must_use]
    pub fn new(filter: ChainFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
        self.selection.reset(self.filtered().len());
    }

    pub fn clear(&mut self) {
        self.apply(Vec::new());
    }

    /// Transactions passing the chain filter, in fetch order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    /// `(shown, total)` for the "Showing X / Y" line.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.filtered().len(), self.transactions.len())
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selection.reset(self.filtered().len());
    }

    #[must_use]
    pub fn selected_transaction(&self) -> Option<&Transaction> {
        let index = self.selection.selected()?;
        self.filtered().get(index).copied()
    }
}

// ============================================================================
// Transaction Detail
// ============================================================================

#[derive(Debug, Default)]
pub struct DetailPage {
    pub load: LoadState,
    /// Id of the transaction being shown.
    pub id: String,
    pub transaction: Option<Transaction>,
    /// Set when the backend answered 404.
    pub not_found: bool,
}

impl DetailPage {
    /// Switches to another transaction, dropping the previous one.
    pub fn open(&mut self, id: &str) {
        if self.id != id {
            self.id = id.to_string();
            self.transaction = None;
        }
        self.not_found = false;
    }

    pub fn apply(&mut self, transaction: Option<Transaction>) {
        self.not_found = transaction.is_none();
        self.transaction = transaction;
    }
}

// ============================================================================
// Backend Health
// ============================================================================

/// Result of the last background health probe.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendHealth {
    #[default]
    Unknown,
    /// Reachable, with the status string it reported.
    Up(String),
    /// Unreachable or unhealthy, with the error text.
    Down(String),
}

impl BackendHealth {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Unknown => "checking",
            Self::Up(status) => status,
            Self::Down(_) => "offline",
        }
    }
}

// ============================================================================
// Data State
// ============================================================================

/// All page states.
#[derive(Debug, Default)]
pub struct DataState {
    pub cover: CoverPage,
    pub dashboard: DashboardPage,
    pub transactions: TransactionsPage,
    pub detail: DetailPage,
}

impl DataState {
    #[must_use]
    pub fn new(default_filter: ChainFilter) -> Self {
        Self {
            transactions: TransactionsPage::new(default_filter),
            ..Self::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PaymentChain, TxStatus};
    use crate::test_utils::{SellerMother, TransactionMother};

    #[test]
    fn test_load_state_drops_stale_sequences() {
        let mut load = LoadState::default();
        let first = load.begin();
        let second = load.begin();

        assert!(load.loading);
        assert!(!load.accepts(first));
        assert!(load.accepts(second));

        load.finish(Some("boom".into()));
        assert!(!load.loading);
        assert_eq!(load.error.as_deref(), Some("boom"));

        load.begin();
        assert!(load.error.is_none());
    }

    #[test]
    fn test_hero_rotation_wraps() {
        let mut cover = CoverPage::default();
        assert_eq!(cover.hero_line(), "P2P Context Trading");
        for _ in 0..HERO_LINES.len() {
            cover.advance_hero();
        }
        assert_eq!(cover.hero_index, 0);
    }

    #[test]
    fn test_dashboard_apply_and_clear() {
        let mut page = DashboardPage::default();
        page.apply(
            vec![SellerMother::active("a"), SellerMother::inactive("b")],
            vec![
                TransactionMother::with_status("t1", TxStatus::Paid, 10),
                TransactionMother::with_status("t2", TxStatus::Failed, 5),
            ],
        );
        assert_eq!(page.stats.seller_count, 2);
        assert_eq!(page.stats.active_tx, 1);
        assert_eq!(page.seller_selection.selected(), Some(0));
        assert_eq!(
            page.selected_transaction().map(|t| t.transaction_id.as_str()),
            Some("t1")
        );

        page.clear();
        assert!(page.sellers.is_empty());
        assert!(page.transactions.is_empty());
        assert_eq!(page.stats, DashboardStats::default());
        assert_eq!(page.seller_selection.selected(), None);
    }

    #[test]
    fn test_transactions_filter_counts() {
        let mut tron = TransactionMother::basic("tron-1", "s", "b");
        tron.payment_chain = Some(PaymentChain::Tron);
        let mut page = TransactionsPage::new(ChainFilter::Tron);
        page.apply(vec![
            tron,
            TransactionMother::with_status("cfx-1", TxStatus::Paid, 1),
            TransactionMother::basic("unknown", "s", "b"),
        ]);

        assert_eq!(page.counts(), (1, 3));
        page.cycle_filter();
        assert_eq!(page.filter, ChainFilter::Conflux);
        assert_eq!(page.counts(), (1, 3));
        assert_eq!(
            page.selected_transaction().map(|t| t.transaction_id.as_str()),
            Some("cfx-1")
        );
        page.cycle_filter();
        assert_eq!(page.counts(), (3, 3));
    }

    #[test]
    fn test_detail_open_resets_on_new_id() {
        let mut detail = DetailPage::default();
        detail.open("a");
        detail.apply(Some(TransactionMother::session("a")));
        detail.open("a");
        assert!(detail.transaction.is_some());

        detail.open("b");
        assert!(detail.transaction.is_none());
        detail.apply(None);
        assert!(detail.not_found);
    }
}
