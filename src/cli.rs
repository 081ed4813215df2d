//! CLI Module
//!
//! Argument definitions and command execution for the `linkstore` binary.
//! Output goes to a caller-supplied writer so commands can run in-process.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_STORAGE_PATH};
use crate::error::Result;
use crate::eventlog::EventReader;
use crate::shortener::Shortener;
use crate::store::{FileStore, Lookup};

/// linkstore CLI
#[derive(Parser, Debug)]
#[command(name = "linkstore")]
#[command(about = "Inspect and populate a URL shortener event log")]
#[command(version)]
pub struct Args {
    /// Event log file
    #[arg(short, long, default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Base URL for printed short links
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a URL under a random code and print the short link
    Shorten {
        /// The URL to shorten
        url: String,
    },

    /// Store a URL under a chosen code
    Put {
        /// The short code
        code: String,

        /// The URL it resolves to
        url: String,
    },

    /// Print the URL a code resolves to
    Get {
        /// The short code
        code: String,
    },

    /// Print every event in file order
    Dump,
}

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Exit 0
    Success,

    /// Exit 1: `get` found no record
    NotFound,

    /// Exit 2: the log could not be read or written
    StorageError,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::NotFound => 1,
            Status::StorageError => 2,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Execute a parsed command, printing results to `out`
///
/// Errors opening or writing the log are returned; the binary maps them to
/// [`Status::StorageError`].
pub fn run<W: Write>(args: Args, out: &mut W) -> Result<Status> {
    let config = Config::builder()
        .storage_path(&args.file)
        .base_url(&args.base_url)
        .build();

    let store = Arc::new(FileStore::open(&args.file)?);
    let shortener = Shortener::from_config(&config, store.clone())?;

    let status = match args.command {
        Commands::Shorten { url } => {
            writeln!(out, "{}", shortener.shorten(&url)?)?;
            Status::Success
        }
        Commands::Put { code, url } => {
            writeln!(out, "{}", shortener.store_with_code(&code, &url)?)?;
            Status::Success
        }
        Commands::Get { code } => match shortener.lookup(&code) {
            Lookup::Found(url) => {
                writeln!(out, "{}", url)?;
                Status::Success
            }
            Lookup::NotFound => {
                tracing::info!("No URL stored for {}", code);
                Status::NotFound
            }
            Lookup::StorageError(e) => {
                tracing::error!("Event log unreadable: {}", e);
                Status::StorageError
            }
        },
        Commands::Dump => dump(&args.file, out)?,
    };

    store.close()?;
    Ok(status)
}

/// Print events until end of file; the first bad line is returned as an error
fn dump<W: Write>(path: &Path, out: &mut W) -> Result<Status> {
    let mut count = 0u64;
    for event in EventReader::open(path)? {
        let event = event?;
        writeln!(out, "{}\t{}", event.short_code, event.original_url)?;
        count += 1;
    }
    tracing::info!("{} events", count);
    Ok(Status::Success)
}
