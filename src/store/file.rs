//! File-backed store
//!
//! Durable store over the append-only event log.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::Result;
use crate::eventlog::{Event, EventReader, EventWriter};
use super::{Lookup, UrlStorage};

/// Durable short code → URL store
///
/// ## Concurrency Model: one exclusive lock
///
/// - `store` holds `writer` while the event is encoded, appended and flushed.
/// - `lookup` holds the same lock for its entire scan, so a lookup always
///   sees every store that returned before it started, and concurrent
///   stores never interleave bytes within a line.
/// - Lookups of different keys do not run in parallel; a long scan blocks
///   all other operations on this instance.
///
/// ## Lookup cost
/// Every lookup opens a fresh [`EventReader`] and scans from the first line.
/// The first matching line wins. An undecodable line aborts the scan, which
/// hides every record at or after it.
pub struct FileStore {
    /// Path of the event log
    path: PathBuf,

    /// Long-lived append handle; its mutex is the store-wide lock
    writer: Mutex<EventWriter>,
}

impl FileStore {
    /// Open or create a store at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let writer = EventWriter::open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(writer),
        })
    }

    /// Release the append handle. Later stores fail; lookups keep working.
    pub fn close(&self) -> Result<()> {
        self.writer.lock().close()
    }

    /// Path of the event log
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scan the log for `id`. Caller must hold the store lock.
    fn scan(&self, id: &str) -> Result<Option<String>> {
        let mut reader = EventReader::open(&self.path)?;

        while let Some(event) = reader.read_event()? {
            tracing::trace!(line = reader.line_number(), short_code = %event.short_code, "scanned event");
            if event.short_code == id {
                return Ok(Some(event.original_url));
            }
        }

        Ok(None)
    }
}

impl UrlStorage for FileStore {
    fn store(&self, id: &str, url: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_event(&Event::new(id, url))
    }

    fn lookup(&self, id: &str) -> Lookup {
        let _guard = self.writer.lock();

        match self.scan(id) {
            Ok(Some(url)) => Lookup::Found(url),
            Ok(None) => Lookup::NotFound,
            Err(e) => Lookup::StorageError(e),
        }
    }
}
