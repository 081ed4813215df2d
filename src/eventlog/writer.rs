//! Event Writer
//!
//! Handles appending events to the log file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{LinkStoreError, Result};
use super::{create_options, Event};

/// Appends events to the log file
///
/// Owns one handle opened with create + append + read. Every call to
/// [`write_event`](Self::write_event) flushes the user-space buffer, so the
/// line is visible to any reader opened afterwards (including readers in
/// other processes). Flushing does not fsync; call [`sync`](Self::sync) for
/// that.
pub struct EventWriter {
    /// Path of the log file
    path: PathBuf,

    /// Buffered handle, `None` once closed
    writer: Option<BufWriter<File>>,

    /// Events appended through this writer
    events_written: u64,
}

impl EventWriter {
    /// Open or create a log file for appending
    pub fn open(path: &Path) -> Result<Self> {
        let file = create_options().read(true).open(path)?;

        tracing::debug!(path = %path.display(), "opened event log for append");

        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
            events_written: 0,
        })
    }

    /// Append an event as one line and flush it
    ///
    /// The event is encoded before anything is written, so a serialization
    /// failure leaves the file untouched. If the write or flush fails, the
    /// bytes still buffered are discarded so a later write or close cannot
    /// append the failed event.
    pub fn write_event(&mut self, event: &Event) -> Result<()> {
        let writer = self.writer.as_mut().ok_or(LinkStoreError::WriterClosed)?;

        let mut line = event.encode()?;
        line.push(b'\n');

        if let Err(e) = writer.write_all(&line).and_then(|()| writer.flush()) {
            self.discard_buffered();
            return Err(e.into());
        }

        self.events_written += 1;
        tracing::trace!(short_code = %event.short_code, bytes = line.len(), "appended event");
        Ok(())
    }

    /// Force appended data to stable storage
    pub fn sync(&mut self) -> Result<()> {
        let writer = self.writer.as_mut().ok_or(LinkStoreError::WriterClosed)?;
        writer.flush()?;
        writer.get_ref().sync_data()?;
        Ok(())
    }

    /// Release the file handle. Calling it again is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
            tracing::debug!(
                path = %self.path.display(),
                events = self.events_written,
                "closed event log"
            );
        }
        Ok(())
    }

    /// Drop unflushed bytes, keeping the underlying handle open
    fn discard_buffered(&mut self) {
        if let Some(writer) = self.writer.take() {
            let (file, unwritten) = writer.into_parts();
            let dropped = unwritten.map(|buf| buf.len()).unwrap_or(0);
            tracing::warn!(path = %self.path.display(), dropped, "discarded unflushed event bytes");
            self.writer = Some(BufWriter::new(file));
        }
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    /// Number of events appended by this writer
    pub fn events_written(&self) -> u64 {
        self.events_written
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
