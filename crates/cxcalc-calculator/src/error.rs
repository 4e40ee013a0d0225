//! Errors raised by a single calculation attempt

use cxcalc_types::ParseComplexError;
use thiserror::Error;

/// Everything that can end a calculation attempt early.
///
/// Both variants are recoverable: they end the current attempt only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// An operand field did not hold a complex number literal
    #[error(transparent)]
    Parse(#[from] ParseComplexError),

    /// The divisor was the zero complex value
    #[error("Division by zero is not possible.")]
    DivisionByZero,
}

impl CalculationError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CalculationError::Parse(_) => "parse",
            CalculationError::DivisionByZero => "division_by_zero",
        }
    }
}
