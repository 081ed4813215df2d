//! linkstore CLI
//!
//! Operator tool for populating and inspecting an event log file.

use std::process::ExitCode;

use clap::Parser;
use linkstore::cli::{self, Args, Status};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,linkstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("linkstore v{}", linkstore::VERSION);
    tracing::info!("Event log: {}", args.file.display());

    let mut stdout = std::io::stdout().lock();
    match cli::run(args, &mut stdout) {
        Ok(status) => status.into(),
        Err(e) => {
            tracing::error!("{}", e);
            Status::StorageError.into()
        }
    }
}
