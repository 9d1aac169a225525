//! Configuration for the club state store
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a club instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the persisted club document
    /// Internal structure:
    ///   {data_dir}/
    ///     └── club.json        (full club document, rewritten on every mutation)
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // View Configuration
    // -------------------------------------------------------------------------
    /// Default number of quotes returned by the recent-quotes view
    pub recent_quotes_limit: usize,

    /// Default number of members returned by the ranking view
    pub ranking_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./club_data"),
            recent_quotes_limit: 5,
            ranking_limit: 10,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for the club document)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the default recent-quotes view size
    pub fn recent_quotes_limit(mut self, limit: usize) -> Self {
        self.config.recent_quotes_limit = limit;
        self
    }

    /// Set the default ranking view size
    pub fn ranking_limit(mut self, limit: usize) -> Self {
        self.config.ranking_limit = limit;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
