use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Settings that must be strictly positive, as `(key, value)`.
fn positive_settings(config: &Config) -> [(&'static str, u64); 4] {
    [
        ("carousel.deals_interval_ms", config.carousel.deals_interval_ms),
        ("carousel.trending_interval_ms", config.carousel.trending_interval_ms),
        (
            "listing.page_size",
            u64::try_from(config.listing.page_size).unwrap_or(u64::MAX),
        ),
        ("ui.tick_rate_ms", config.ui.tick_rate_ms),
    ]
}

impl Config {
    /// `<config dir>/storefront/config.toml`, or `./storefront/config.toml`
    /// when the platform has no config directory.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("storefront")
            .join("config.toml")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Reads and validates `path`. A missing file means all defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the storefront cannot run with: zero intervals, a
    /// zero page size or a zero redraw tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match positive_settings(self).into_iter().find(|(_, value)| *value == 0) {
            Some((key, _)) => Err(ConfigError::ValidationError {
                message: format!("{} must be greater than zero", key),
            }),
            None => Ok(()),
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
