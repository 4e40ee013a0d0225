//! Dispatch from an [`OperationKind`] to its built-in function

use cxcalc_types::Complex;

use crate::{CalculationError, OperationKind};

/// Signature shared by every built-in operation
pub type BinaryOp = fn(Complex, Complex) -> Result<Complex, CalculationError>;

/// Apply `kind` to `(a, b)`.
///
/// Pure: the result depends only on the arguments.
///
/// # Errors
///
/// Returns [`CalculationError::DivisionByZero`] for a division by `0+0j`.
pub fn evaluate(kind: OperationKind, a: Complex, b: Complex) -> Result<Complex, CalculationError> {
    (kind.function())(a, b)
}

/// Resolve `label` and apply the resulting operation.
///
/// # Errors
///
/// Same as [`evaluate`].
pub fn evaluate_label(label: &str, a: Complex, b: Complex) -> Result<Complex, CalculationError> {
    evaluate(OperationKind::from_label(label), a, b)
}
