//! Page routes.
//!
//! Routes mirror the web dashboard's paths so a path can be passed on the
//! command line with `--route`.

/// One page of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Cover,
    /// `/dashboard`
    Dashboard,
    /// `/transactions`
    Transactions,
    /// `/transactions/:id`
    TransactionDetail(String),
}

impl Route {
    /// Tab labels in header order.
    pub const TABS: [&'static str; 3] = ["Home", "Dashboard", "Transactions"];

    /// Parses a path. Unknown paths redirect to the cover.
    ///
    /// Empty segments are ignored, so `/dashboard/` and `dashboard` both work.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["dashboard"] => Self::Dashboard,
            ["transactions"] => Self::Transactions,
            ["transactions", id] => Self::TransactionDetail((*id).to_string()),
            _ => Self::Cover,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Cover => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Transactions => "/transactions".to_string(),
            Self::TransactionDetail(id) => format!("/transactions/{id}"),
        }
    }

    /// Index into [`Route::TABS`]; the detail page belongs to Transactions.
    #[must_use]
    pub const fn tab_index(&self) -> usize {
        match self {
            Self::Cover => 0,
            Self::Dashboard => 1,
            Self::Transactions | Self::TransactionDetail(_) => 2,
        }
    }
}
