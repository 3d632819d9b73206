// SPDX-License-Identifier: Apache-2.0

//! Configuration management for reporank.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `REPORANK_`)
//! 2. Config file: `~/.config/reporank/config.toml`
//! 3. Built-in defaults
//!
//! Command-line flags are applied on top by the CLI.
//!
//! # Examples
//!
//! ```bash
//! # Point the ranking at a GitHub Enterprise instance
//! REPORANK_GITHUB__API_URL=https://ghe.example.com/api/v3 reporank rank
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::RankError;

/// Public GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Ranking settings.
    pub ranking: RankingConfig,
    /// UI preferences.
    pub ui: UiConfig,
}

/// GitHub API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API root, without the `/users` path.
    pub api_url: String,
    /// API request timeout in seconds.
    pub api_timeout_seconds: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_timeout_seconds: 10,
            user_agent: concat!("reporank/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Ranking settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Enrich at most this many users from the list (all when unset).
    pub limit: Option<usize>,
}

/// UI preferences.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show a progress bar while fetching user details.
    pub progress_bars: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            progress_bars: true,
        }
    }
}

/// Returns the reporank configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/reporank`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("reporank");
    }
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("reporank")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration from the default config file path.
///
/// Environment variables use the prefix `REPORANK_` and double underscore
/// for nested keys (e.g., `REPORANK_GITHUB__API_URL`).
///
/// # Errors
///
/// Returns `RankError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, RankError> {
    load_config_from(&config_file_path())
}

/// Load application configuration from an explicit file path.
///
/// The file is optional; a missing file yields the defaults (plus any
/// environment overrides).
///
/// # Errors
///
/// Returns `RankError::Config` if the file exists but is invalid.
pub fn load_config_from(path: &Path) -> Result<AppConfig, RankError> {
    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::from(path).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("REPORANK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
