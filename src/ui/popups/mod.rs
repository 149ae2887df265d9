//! Modal popups drawn over the current page.

pub mod help;
pub mod message;

pub use help::render as render_help_popup;
pub use message::render as render_message_popup;
