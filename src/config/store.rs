//! Shared configuration storage.
//!
//! In-memory config container with interior mutability. Reloading is
//! explicit (the UI binds it to a key); there is no file watcher.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<Config, ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config.clone();
        tracing::info!(path = %self.path.display(), "Config reloaded");
        Ok(config)
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
