//! Logging set-up: one `tracing` pipeline, two sinks.
//!
//! Every calculation outcome is emitted once through `tracing`. The subscriber
//! built here fans each event out to:
//!
//! - the persistent log file, opened once in append mode and written
//!   synchronously, so a line is on disk before the emitting call returns;
//! - the [`DisplayLog`] shown in the log panel.
//!
//! Both sinks share [`LogLineFormat`], so the panel and the file always agree.

mod display;
mod format;

use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Arc;

use tracing::Dispatch;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

pub use display::{DisplayLog, DisplayWriter};
pub use format::{LogLineFormat, RECORDED_AT_FIELD, TIMESTAMP_FORMAT};

use crate::config::CalculatorConfig;
use crate::error::LoggingError;

/// Handle on the open log file, held until exit.
#[must_use = "call `shutdown` at exit to sync the log file"]
pub struct LoggingGuard {
    file: Arc<File>,
}

impl LoggingGuard {
    /// Sync the log file to disk.
    pub fn shutdown(self) -> io::Result<()> {
        self.file.sync_all()
    }
}

/// Build the two-sink pipeline without installing it.
///
/// Tests scope the returned dispatcher with
/// [`tracing::dispatcher::with_default`]; the binary installs it through
/// [`init_logging`].
pub fn build_dispatch(
    config: &CalculatorConfig,
    display: DisplayLog,
) -> Result<(Dispatch, LoggingGuard), LoggingError> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|source| LoggingError::Filter {
        directive: config.log_filter.clone(),
        source,
    })?;

    if let Some(dir) = config.log_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&config.log_path).map_err(
        |source| LoggingError::OpenFile { path: config.log_path.clone(), source },
    )?;
    let file = Arc::new(file);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().event_format(LogLineFormat).with_writer(Arc::clone(&file)))
        .with(fmt::layer().event_format(LogLineFormat).with_writer(display));

    Ok((Dispatch::new(subscriber), LoggingGuard { file }))
}

/// Install the two-sink pipeline as the process-wide default.
///
/// Call once at start-up and keep the guard until exit.
pub fn init_logging(
    config: &CalculatorConfig,
    display: DisplayLog,
) -> Result<LoggingGuard, LoggingError> {
    let (dispatch, guard) = build_dispatch(config, display)?;
    tracing::dispatcher::set_global_default(dispatch)?;
    Ok(guard)
}
