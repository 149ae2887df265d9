//! Platform-specific helpers.
//!
//! - [`clipboard`] - copying ids and hashes from the detail view
//! - [`paths`] - config and log file locations

pub mod clipboard;
pub mod paths;

pub use clipboard::copy_text;
pub use paths::AppPaths;
