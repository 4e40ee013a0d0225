use cxcalc_types::Complex;
use tracing::debug;

use crate::registry::evaluate;
use crate::{CalculationError, OperationKind};

/// Holds the active operation and applies it to pairs of operands.
///
/// Changing the operation only affects later calls; results already returned
/// are plain values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    operation: OperationKind,
}

impl Calculator {
    pub fn new(operation: OperationKind) -> Self {
        Self { operation }
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn set_operation(&mut self, operation: OperationKind) {
        self.operation = operation;
    }

    pub fn calculate(&self, a: Complex, b: Complex) -> Result<Complex, CalculationError> {
        let result = evaluate(self.operation, a, b)?;
        debug!(operation = %self.operation, result = %result, "calculated");
        Ok(result)
    }
}
