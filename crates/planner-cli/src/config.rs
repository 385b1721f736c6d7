//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use planner_core::CategoryRegistry;

/// Application configuration.
///
/// Loaded once at startup and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file.
    pub database_path: PathBuf,

    /// Category set, in display order (`[[categories]]` tables in TOML).
    pub categories: CategoryRegistry,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            database_path: data_dir.join("planner.db"),
            categories: CategoryRegistry::default(),
        }
    }
}

impl Config {
    /// Loads configuration from default locations, optionally merging a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (PLANNER_*)
        figment = figment.merge(Env::prefixed("PLANNER_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for the planner.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("planner"))
}

/// Returns the platform-specific data directory for the planner.
///
/// On Linux: `~/.local/share/planner`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("planner"))
}
