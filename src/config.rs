//! Configuration for linkstore
//!
//! Centralized configuration with sensible defaults. Parsing flags or
//! environment variables is left to the caller; this type only carries the
//! values a storage backend and the shortener need.

use std::path::{Path, PathBuf};

use crate::error::{LinkStoreError, Result};

/// Default location of the event log
pub const DEFAULT_STORAGE_PATH: &str = "./storage.txt";

/// Default base URL prepended to short codes
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Main configuration for a linkstore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the append-only event log.
    /// `None` selects the in-memory backend.
    pub storage_path: Option<PathBuf>,

    // -------------------------------------------------------------------------
    // Shortener Configuration
    // -------------------------------------------------------------------------
    /// Base URL for composed short links, e.g. `http://localhost:8080`
    pub base_url: String,
}

/// Which storage implementation a config selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Volatile map, lost on restart
    Memory,

    /// Append-only event log at the given path
    File(PathBuf),
}

impl StorageBackend {
    pub fn from_config(config: &Config) -> Self {
        match &config.storage_path {
            Some(path) => StorageBackend::File(path.clone()),
            None => StorageBackend::Memory,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: Some(PathBuf::from(DEFAULT_STORAGE_PATH)),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The backend this config selects
    pub fn backend(&self) -> StorageBackend {
        StorageBackend::from_config(self)
    }

    /// The event log path, if the file backend is selected
    pub fn storage_path(&self) -> Option<&Path> {
        self.storage_path.as_deref()
    }

    /// Check that the config can be used to build a shortener
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(LinkStoreError::Config("base URL must not be empty".to_string()));
        }
        if let Some(path) = &self.storage_path {
            if path.as_os_str().is_empty() {
                return Err(LinkStoreError::Config("storage path must not be empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the event log path (selects the file backend)
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage_path = Some(path.into());
        self
    }

    /// Select the in-memory backend
    pub fn in_memory(mut self) -> Self {
        self.config.storage_path = None;
        self
    }

    /// Set the base URL for short links
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
