//! Reusable widgets for the lazyswap TUI.
//!
//! # Module Structure
//!
//! - [`helpers`]: shortening ids and addresses, truncating text
//! - [`common`]: status and chain badges
//! - [`cards`]: seller and stats cards for the dashboard grid
//! - [`list`]: transaction list with selection and scrolling
//! - [`graph`]: seller topology layout and canvas renderer
//! - [`detail`]: payment flow diagram for a single transaction

pub mod cards;
pub mod common;
pub mod detail;
pub mod graph;
pub mod helpers;
pub mod list;

pub use cards::{SellerCard, StatsCard};
pub use common::Badge;
pub use detail::PaymentFlowDiagram;
pub use graph::TopologyWidget;
pub use list::{TransactionListWidget, render_list_scrollbar};
