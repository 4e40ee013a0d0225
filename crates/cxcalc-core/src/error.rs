//! Start-up errors for the logging stack

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::dispatcher::SetGlobalDefaultError;
use tracing_subscriber::filter::ParseError;

/// Failure to bring up the log sinks
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("failed to create log directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid log filter '{directive}': {source}")]
    Filter {
        directive: String,
        #[source]
        source: ParseError,
    },

    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] SetGlobalDefaultError),
}
