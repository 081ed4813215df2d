//! Storage Module
//!
//! The storage abstraction consumed by the shortener, and its two backends.
//!
//! ## Backends
//! - [`MemoryStore`]: `HashMap` behind a read/write lock. Concurrent gets,
//!   exclusive stores, nothing survives a restart.
//! - [`FileStore`]: append-only [event log](crate::eventlog). One mutex
//!   serializes every store and every lookup; each lookup is a full forward
//!   scan of the file.
//!
//! ## Duplicate keys
//! Neither backend rejects a short code that already exists. The memory
//! backend keeps the most recent URL; the file backend's forward scan
//! returns the earliest one.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::error::{LinkStoreError, Result};

/// Outcome of a storage lookup
#[derive(Debug)]
pub enum Lookup {
    /// The short code maps to this URL
    Found(String),

    /// No record for the short code
    NotFound,

    /// The backing storage could not be opened or decoded
    StorageError(LinkStoreError),
}

impl Lookup {
    /// Collapse into the two-way view used by [`UrlStorage::get`]
    ///
    /// `StorageError` becomes `None`, indistinguishable from a missing key.
    /// The error is logged before it is discarded.
    pub fn into_option(self) -> Option<String> {
        match self {
            Lookup::Found(url) => Some(url),
            Lookup::NotFound => None,
            Lookup::StorageError(e) => {
                tracing::warn!(error = %e, "storage error during lookup reported as not found");
                None
            }
        }
    }
}

/// Capability set shared by every storage backend
pub trait UrlStorage: Send + Sync {
    /// Persist a short code → URL mapping
    fn store(&self, id: &str, url: &str) -> Result<()>;

    /// Look up a short code, keeping storage failures distinct
    fn lookup(&self, id: &str) -> Lookup;

    /// Look up a short code. `None` means absent *or* unreadable.
    fn get(&self, id: &str) -> Option<String> {
        self.lookup(id).into_option()
    }
}

/// Construct the backend selected by `config`
pub fn open_storage(config: &Config) -> Result<Arc<dyn UrlStorage>> {
    match config.backend() {
        StorageBackend::Memory => {
            tracing::info!("using in-memory storage");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::File(path) => {
            tracing::info!(path = %path.display(), "using file storage");
            Ok(Arc::new(FileStore::open(&path)?))
        }
    }
}
