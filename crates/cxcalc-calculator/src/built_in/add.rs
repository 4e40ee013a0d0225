//! Complex addition

use cxcalc_types::Complex;

use crate::CalculationError;

/// Component-wise sum `a + b`. Never fails.
pub fn add(a: Complex, b: Complex) -> Result<Complex, CalculationError> {
    Ok(a + b)
}
