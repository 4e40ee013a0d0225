//! Complex division
//!
//! The dividend is multiplied by the divisor's conjugate and scaled by
//! `1 / |b|²`. A zero divisor (both parts zero, either sign) is rejected.

use cxcalc_types::Complex;

use crate::CalculationError;

/// Quotient `a / b`.
///
/// # Errors
///
/// Returns [`CalculationError::DivisionByZero`] when `b` is `0+0j`.
pub fn divide(a: Complex, b: Complex) -> Result<Complex, CalculationError> {
    a.checked_div(b).ok_or(CalculationError::DivisionByZero)
}
