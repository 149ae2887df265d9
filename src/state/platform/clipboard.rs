//! Clipboard access.
//!
//! On Linux the external tools `wl-copy`, `xclip` and `xsel` are tried first
//! because they keep the content after the TUI exits. Everything else goes
//! through `arboard`.

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    NotAvailable,
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
    #[error("Nothing to copy")]
    Empty,
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Tools tried in order on Linux, with their arguments.
#[cfg(target_os = "linux")]
const EXTERNAL_TOOLS: [(&str, &[&str]); 3] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[derive(Debug, Clone, Copy)]
pub struct ClipboardManager {
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Copies `text`, rejecting blank input before touching the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Empty`] for blank text, otherwise the
    /// backend failure.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        if text.trim().is_empty() {
            return Err(ClipboardError::Empty);
        }

        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::copy_with_external_tool(text) {
            return Ok(());
        }

        Self::copy_with_arboard(text)
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> bool {
        EXTERNAL_TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        child.wait().is_ok_and(|status| status.success())
    }
}

/// Copies text with the default manager.
///
/// # Errors
///
/// See [`ClipboardManager::copy_text`].
pub fn copy_text(text: &str) -> ClipboardResult<()> {
    ClipboardManager::new().copy_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClipboardError::NotAvailable.to_string(),
            "Clipboard not available"
        );
        assert_eq!(
            ClipboardError::CopyFailed("denied".into()).to_string(),
            "Failed to copy: denied"
        );
        assert_eq!(ClipboardError::Empty.to_string(), "Nothing to copy");
    }

    #[test]
    fn test_blank_text_is_rejected_before_copying() {
        assert_eq!(copy_text(""), Err(ClipboardError::Empty));
        assert_eq!(copy_text("   "), Err(ClipboardError::Empty));
    }
}
