//! Interaction layer for the cxcalc complex-number calculator.
//!
//! This crate turns a button press into a calculation and its log line. The
//! [`InteractionController`] reads operands and the selected operation from a
//! [`CalculatorView`], evaluates them through `cxcalc-calculator`, and emits a
//! [`CalculationRecord`] through `tracing`. The logging stack built in
//! [`logging`] delivers that record to the persistent log file and to the
//! on-screen [`DisplayLog`].

/// Start-up configuration
pub mod config;
/// Calculation attempts against a view
pub mod controller;
/// Logging start-up errors
pub mod error;
/// The two-sink logging pipeline
pub mod logging;
/// Calculation records
pub mod record;
/// The window capabilities the controller uses
pub mod view;

pub use config::CalculatorConfig;
pub use controller::InteractionController;
pub use cxcalc_calculator::{CalculationError, Complex, OperationKind, ParseComplexError};
pub use error::LoggingError;
pub use logging::{DisplayLog, LoggingGuard, build_dispatch, init_logging};
pub use record::CalculationRecord;
pub use view::{CalculatorView, ERROR_DIALOG_TITLE, OperandField};
