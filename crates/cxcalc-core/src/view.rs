//! What the controller needs from the window

/// Which operand input a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandField {
    First,
    Second,
}

/// Title of the error dialog
pub const ERROR_DIALOG_TITLE: &str = "Error";

/// The input and error surfaces of a calculator window.
///
/// The log panel is not part of this trait: it receives lines as a log sink
/// (see [`DisplayLog`](crate::logging::DisplayLog)).
pub trait CalculatorView {
    /// Current text of an operand field.
    fn operand_text(&self, field: OperandField) -> String;

    /// Current label of the operation selector.
    fn selected_label(&self) -> String;

    /// Empty both operand fields.
    fn clear_operands(&mut self);

    /// Raise the blocking error dialog. The window must not accept other input
    /// until the user dismisses it.
    fn show_error(&mut self, title: &str, detail: &str);
}
