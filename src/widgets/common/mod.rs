//! Common reusable widget components.
//!
//! - [`Badge`]: colored status/chain/seller labels

mod badge;

pub use badge::Badge;
