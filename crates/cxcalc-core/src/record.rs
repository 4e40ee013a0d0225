//! One log-worthy calculation attempt

use chrono::{DateTime, Local};
use cxcalc_calculator::{CalculationError, Complex, OperationKind};
use tracing::{error, info};

use crate::logging::TIMESTAMP_FORMAT;

/// The outcome of one calculation attempt.
///
/// Built once per attempt, never modified, and consumed by [`append`](Self::append).
/// Operands are kept as the text the user typed because a failed parse has no
/// numeric value to record.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    timestamp: DateTime<Local>,
    operation: OperationKind,
    operand_a: String,
    operand_b: String,
    outcome: Result<Complex, CalculationError>,
}

impl CalculationRecord {
    pub fn new(
        operation: OperationKind,
        operand_a: impl Into<String>,
        operand_b: impl Into<String>,
        outcome: Result<Complex, CalculationError>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            operation,
            operand_a: operand_a.into(),
            operand_b: operand_b.into(),
            outcome,
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn operand_a(&self) -> &str {
        &self.operand_a
    }

    pub fn operand_b(&self) -> &str {
        &self.operand_b
    }

    pub fn outcome(&self) -> &Result<Complex, CalculationError> {
        &self.outcome
    }

    /// `Result: <value>` or `Error: <message>`
    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(value) => format!("Result: {value}"),
            Err(err) => format!("Error: {err}"),
        }
    }

    /// Emit the record to every registered log sink: INFO for a result, ERROR
    /// for a failure. Each sink's line carries the record's own timestamp.
    pub fn append(self) {
        let message = self.message();
        let recorded_at = self.timestamp.format(TIMESTAMP_FORMAT);
        match &self.outcome {
            Ok(_) => info!(
                operation = %self.operation,
                operand_a = %self.operand_a,
                operand_b = %self.operand_b,
                recorded_at = %recorded_at,
                "{message}"
            ),
            Err(err) => error!(
                operation = %self.operation,
                operand_a = %self.operand_a,
                operand_b = %self.operand_b,
                recorded_at = %recorded_at,
                category = err.category(),
                "{message}"
            ),
        }
    }
}
