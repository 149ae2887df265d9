//! List widgets with selection and scrolling.
//!
//! - [`TransactionListWidget`]: transaction cards for the dashboard
//! - [`SelectionState`]: selection and scroll offset shared by pages

mod state;
mod txn_list;

pub use state::{SelectionState, render_list_scrollbar};
pub use txn_list::TransactionListWidget;
