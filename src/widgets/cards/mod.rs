//! Card widgets for the dashboard grid.

mod seller_card;
mod stats_card;

pub use seller_card::SellerCard;
pub use stats_card::StatsCard;
