//! Config and data file locations.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/lazyswap` | `~/.local/share/lazyswap` |
//! | macOS | `~/Library/Application Support/lazyswap` | Same as config |
//! | Windows | `%APPDATA%/lazyswap` | `%LOCALAPPDATA%/lazyswap` |

use color_eyre::{Result, eyre::eyre};
use std::fs;
use std::path::PathBuf;

pub const APP_NAME: &str = "lazyswap";

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const LOG_FILE_NAME: &str = "lazyswap.log";

/// Resolves application directories, creating them on first use.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::with_app_name(APP_NAME)
    }

    /// Uses a different directory name, mainly for tests.
    #[must_use]
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| eyre!("Could not find config directory"))?;
        self.ensure(base)
    }

    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or_else(|| eyre!("Could not find data directory"))?;
        self.ensure(base)
    }

    /// # Errors
    ///
    /// Returns an error if the config directory is unavailable.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// # Errors
    ///
    /// Returns an error if the data directory is unavailable.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    fn ensure(&self, mut path: PathBuf) -> Result<PathBuf> {
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }
}
