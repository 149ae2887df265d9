//! Application configuration with persistence.
//!
//! Stored as JSON at `<config dir>/lazyswap/config.json`. Every field is
//! optional in the file; missing fields take their defaults.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.theme = config.theme.toggled();
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use super::platform::AppPaths;
use crate::client::{DEFAULT_API_BASE, DEFAULT_API_ORIGIN};
use crate::constants::DEFAULT_HEALTH_CHECK_SECS;
use crate::domain::ChainFilter;
use crate::theme::Theme;

// ============================================================================
// AppConfig
// ============================================================================

/// Persistent user settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// API base, absolute or relative to `api_origin`.
    pub api_base_url: Option<String>,
    /// Origin that a relative `api_base_url` is joined to.
    pub api_origin: Option<String>,
    pub theme: Theme,
    /// Initial chain filter on the transactions page.
    pub default_chain_filter: ChainFilter,
    /// Per-request timeout; unset or zero means none.
    pub request_timeout_secs: Option<u64>,
    /// Interval of the background health probe.
    pub health_check_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            api_origin: None,
            theme: Theme::Dark,
            default_chain_filter: ChainFilter::Tron,
            request_timeout_secs: None,
            health_check_secs: DEFAULT_HEALTH_CHECK_SECS,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration, falling back to defaults on any failure.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                warn!("config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or not valid JSON.
    pub fn try_load() -> Result<Self> {
        let content = fs::read_to_string(Self::config_path()?)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::config_path()?, content)?;
        Ok(())
    }

    /// Resolves the API base and origin.
    ///
    /// `base` and `origin` are the command-line values, which already
    /// include their environment variables. They win over the file; the
    /// file wins over the built-in defaults.
    #[must_use]
    pub fn api_endpoint(&self, base: Option<&str>, origin: Option<&str>) -> (String, String) {
        fn pick(cli: Option<&str>, file: Option<&String>, default: &str) -> String {
            cli.map(str::trim)
                .filter(|s| !s.is_empty())
                .or_else(|| file.map(|s| s.trim()).filter(|s| !s.is_empty()))
                .unwrap_or(default)
                .to_string()
        }

        (
            pick(base, self.api_base_url.as_ref(), DEFAULT_API_BASE),
            pick(origin, self.api_origin.as_ref(), DEFAULT_API_ORIGIN),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.default_chain_filter, ChainFilter::Tron);
        assert_eq!(config.health_check_secs, 10);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"theme":"light","api_origin":"http://market:8000"}"#)
                .unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.api_origin.as_deref(), Some("http://market:8000"));
        assert_eq!(config.default_chain_filter, ChainFilter::Tron);
        assert_eq!(config.health_check_secs, 10);
    }

    #[test]
    fn test_json_format() {
        let json = serde_json::to_string_pretty(&AppConfig {
            default_chain_filter: ChainFilter::All,
            ..AppConfig::default()
        })
        .unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "api_base_url": null,
          "api_origin": null,
          "theme": "dark",
          "default_chain_filter": "all",
          "request_timeout_secs": null,
          "health_check_secs": 10
        }
        "#);
    }

    #[rstest]
    #[case::defaults(None, None, None, None, "/api", "http://127.0.0.1:9000")]
    #[case::file_values(
        None,
        None,
        Some("/v2"),
        Some("http://market:8000"),
        "/v2",
        "http://market:8000"
    )]
    #[case::cli_wins(
        Some("https://cli.example/api"),
        Some("http://cli:1"),
        Some("/v2"),
        Some("http://market:8000"),
        "https://cli.example/api",
        "http://cli:1"
    )]
    #[case::blank_cli_ignored(Some("  "), Some(""), Some("/v2"), None, "/v2", "http://127.0.0.1:9000")]
    fn test_api_endpoint_precedence(
        #[case] cli_base: Option<&str>,
        #[case] cli_origin: Option<&str>,
        #[case] file_base: Option<&str>,
        #[case] file_origin: Option<&str>,
        #[case] expected_base: &str,
        #[case] expected_origin: &str,
    ) {
        let config = AppConfig {
            api_base_url: file_base.map(String::from),
            api_origin: file_origin.map(String::from),
            ..AppConfig::default()
        };
        let (base, origin) = config.api_endpoint(cli_base, cli_origin);
        assert_eq!(base, expected_base);
        assert_eq!(origin, expected_origin);
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
        }
    }
}
