//! Event Reader
//!
//! Handles scanning events from the log file.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{LinkStoreError, Result};
use super::{create_options, Event};

/// Reads events from the log file, one line at a time
///
/// Each reader owns its own read-only handle and is meant for a single
/// forward pass. It never shares the writer's handle.
pub struct EventReader {
    reader: BufReader<File>,

    /// Scratch buffer for the current line
    line: Vec<u8>,

    /// 1-based number of the last line read
    line_number: u64,

    /// Set once the iterator has yielded an error
    failed: bool,
}

impl EventReader {
    /// Open a log file for reading, creating it empty if absent
    pub fn open(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                create_options().open(path)?;
                File::open(path)?
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            reader: BufReader::new(file),
            line: Vec::new(),
            line_number: 0,
            failed: false,
        })
    }

    /// Read the next event
    ///
    /// Returns:
    /// - `Ok(Some(event))` — the next line decoded
    /// - `Ok(None)` — end of file
    /// - `Err(Corruption)` — the next line is not a valid event
    ///
    /// After an error the reader is positioned past the bad line.
    pub fn read_event(&mut self) -> Result<Option<Event>> {
        self.line.clear();
        let n = self.reader.read_until(b'\n', &mut self.line)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut bytes = self.line.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }

        match Event::decode(bytes) {
            Ok(event) => Ok(Some(event)),
            Err(e) => {
                tracing::warn!(line = self.line_number, error = %e, "undecodable event log line");
                Err(LinkStoreError::Corruption {
                    line: self.line_number,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// 1-based number of the last line read (0 before the first read)
    pub fn line_number(&self) -> u64 {
        self.line_number
    }
}

/// Yields events in file order. The first error ends the iteration.
impl Iterator for EventReader {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
