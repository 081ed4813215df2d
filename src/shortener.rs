//! Shortener Module
//!
//! Turns URLs into short links on top of any [`UrlStorage`].
//!
//! ## Responsibilities
//! - Generate random short codes
//! - Compose public short URLs from the configured base URL
//! - Resolve codes back to URLs, collapsing storage errors into "not found"

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

use crate::config::Config;
use crate::error::Result;
use crate::store::{Lookup, UrlStorage};

/// Random bytes per short code (encodes to 8 base64 characters)
pub const CODE_BYTES: usize = 6;

/// Generate a random URL-safe short code
pub fn generate_code() -> String {
    let bytes: [u8; CODE_BYTES] = rand::random();
    URL_SAFE.encode(bytes)
}

/// Creates and resolves short links
#[derive(Clone)]
pub struct Shortener {
    storage: Arc<dyn UrlStorage>,
    base_url: String,
}

impl Shortener {
    pub fn new(storage: Arc<dyn UrlStorage>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { storage, base_url }
    }

    /// Build a shortener from a validated config and an already opened store
    pub fn from_config(config: &Config, storage: Arc<dyn UrlStorage>) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(storage, config.base_url.clone()))
    }

    /// Store `url` under a fresh code and return the short link
    ///
    /// Surrounding whitespace is trimmed from `url`; it is otherwise stored
    /// as given.
    pub fn shorten(&self, url: &str) -> Result<String> {
        self.store_with_code(&generate_code(), url)
    }

    /// Store `url` under a caller-chosen code and return the short link
    pub fn store_with_code(&self, code: &str, url: &str) -> Result<String> {
        let url = url.trim();
        self.storage.store(code, url)?;
        tracing::debug!(code, url, "stored short link");
        Ok(self.short_url(code))
    }

    /// Resolve a code (an optional leading `/` is ignored)
    pub fn resolve(&self, code: &str) -> Option<String> {
        self.lookup(code).into_option()
    }

    /// Resolve a code, keeping storage failures distinct from absence
    pub fn lookup(&self, code: &str) -> Lookup {
        let code = code.strip_prefix('/').unwrap_or(code);
        if code.is_empty() {
            return Lookup::NotFound;
        }
        self.storage.lookup(code)
    }

    /// Public short link for `code`
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
