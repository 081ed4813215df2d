//! # linkstore
//!
//! Persistence layer for a URL shortener:
//! - A volatile in-memory store (read/write lock)
//! - A durable store over an append-only JSON Lines event log
//! - A small shortener service that generates codes and composes links
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Handler / CLI (caller)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Shortener                              │
//! │            (code generation, short URL, resolve)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Arc<dyn UrlStorage>
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ MemoryStore │          │  FileStore  │
//!   │  (RwLock)   │          │   (Mutex)   │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                      ┌────────────┴────────────┐
//!                      ▼                         ▼
//!               ┌─────────────┐          ┌─────────────┐
//!               │ EventWriter │          │ EventReader │
//!               │  (append)   │          │ (per scan)  │
//!               └─────────────┘          └─────────────┘
//! ```
//!
//! ## Known limitations
//! - Each file-store lookup scans the whole log.
//! - A corrupt line hides every record at or after it from lookups.
//! - The log grows without bound; there is no compaction.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod eventlog;
pub mod store;
pub mod shortener;
pub mod cli;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LinkStoreError, Result};
pub use config::Config;
pub use store::{open_storage, FileStore, Lookup, MemoryStore, UrlStorage};
pub use shortener::Shortener;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of linkstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
