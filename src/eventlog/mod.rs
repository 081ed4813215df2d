//! Event Log Module
//!
//! Append-only, line-oriented log of short-code events.
//!
//! ## Responsibilities
//! - Append one event per line, flushed on every write
//! - Scan events forward from the start of the file
//! - Report undecodable lines as corruption, never repair them
//!
//! ## File Format (JSON Lines)
//! ```text
//! {"uuid":0,"short_url":"abc123","original_url":"https://example.com/"}\n
//! {"uuid":0,"short_url":"x9Yz_-Q1","original_url":"https://other.example/"}\n
//! ...
//! ```
//! No header, footer, length prefix or record count. The log is never
//! truncated or compacted.

mod event;
mod reader;
mod writer;

pub use event::Event;
pub use reader::EventReader;
pub use writer::EventWriter;

use std::fs::OpenOptions;

/// Permission bits for a newly created log file (before umask)
pub const LOG_FILE_MODE: u32 = 0o666;

/// Options that create the log file if it is missing and never truncate it
fn create_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(LOG_FILE_MODE);
    }

    options
}
