//! Complex multiplication
//!
//! `re = a.re*b.re - a.im*b.im`, `im = a.re*b.im + a.im*b.re`.

use cxcalc_types::Complex;

use crate::CalculationError;

/// Product `a * b`. Never fails.
pub fn multiply(a: Complex, b: Complex) -> Result<Complex, CalculationError> {
    Ok(a * b)
}
