//! Start-up configuration
//!
//! Everything here is fixed at process start. Nothing is read from the
//! environment or from a file: the calculator runs with the defaults unless the
//! embedding code overrides them.

use std::path::PathBuf;

/// Configuration for the calculator process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Append-only log file, created if absent
    pub log_path: PathBuf,
    /// `tracing` filter directive applied to both log sinks
    pub log_filter: String,
    /// Window title
    pub title: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("calculator.log"),
            log_filter: "info".to_string(),
            title: "Complex Calculator".to_string(),
        }
    }
}

impl CalculatorConfig {
    pub fn with_log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }

    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }
}
