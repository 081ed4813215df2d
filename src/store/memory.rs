//! In-memory store
//!
//! HashMap-based store with RwLock for concurrency.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::Result;
use super::{Lookup, UrlStorage};

/// Volatile short code → URL map
///
/// Many concurrent readers, one writer at a time. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    urls: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct short codes
    pub fn len(&self) -> usize {
        self.urls.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.read().is_empty()
    }
}

impl UrlStorage for MemoryStore {
    /// Insert or overwrite the mapping. Never fails.
    fn store(&self, id: &str, url: &str) -> Result<()> {
        self.urls.write().insert(id.to_string(), url.to_string());
        Ok(())
    }

    fn lookup(&self, id: &str) -> Lookup {
        match self.urls.read().get(id) {
            Some(url) => Lookup::Found(url.clone()),
            None => Lookup::NotFound,
        }
    }
}
