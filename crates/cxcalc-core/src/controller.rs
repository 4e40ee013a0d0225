//! One calculation attempt, from button press to log line

use cxcalc_calculator::{CalculationError, Calculator, Complex, OperationKind};

use crate::record::CalculationRecord;
use crate::view::{CalculatorView, ERROR_DIALOG_TITLE, OperandField};

/// Runs calculation attempts against a [`CalculatorView`].
///
/// Every attempt produces exactly one [`CalculationRecord`]. On success the
/// operand fields are cleared; on failure they keep their text and the view's
/// error dialog is raised after the record has been logged.
#[derive(Debug, Default)]
pub struct InteractionController {
    calculator: Calculator,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The operation used by the most recent attempt.
    pub fn last_operation(&self) -> OperationKind {
        self.calculator.operation()
    }

    /// Read the view, calculate, and route the outcome to the log sinks and
    /// the view. The outcome is returned after all side effects are done.
    pub fn compute<V>(&mut self, view: &mut V) -> Result<Complex, CalculationError>
    where
        V: CalculatorView + ?Sized,
    {
        let operand_a = view.operand_text(OperandField::First);
        let operand_b = view.operand_text(OperandField::Second);
        self.calculator.set_operation(OperationKind::from_label(&view.selected_label()));

        let outcome = self.attempt(&operand_a, &operand_b);
        if outcome.is_ok() {
            view.clear_operands();
        }

        let record =
            CalculationRecord::new(self.calculator.operation(), operand_a, operand_b, outcome.clone());
        record.append();

        if let Err(err) = &outcome {
            view.show_error(ERROR_DIALOG_TITLE, &format!("Error during calculation: {err}"));
        }
        outcome
    }

    fn attempt(&self, operand_a: &str, operand_b: &str) -> Result<Complex, CalculationError> {
        let a: Complex = operand_a.parse()?;
        let b: Complex = operand_b.parse()?;
        self.calculator.calculate(a, b)
    }
}
