//! Window state and keyboard handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use cxcalc_core::{
    CalculatorConfig, CalculatorView, DisplayLog, InteractionController, OperandField,
    OperationKind,
};
use tracing::debug;

/// The control that receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Operation,
    FirstOperand,
    SecondOperand,
    Compute,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Operation => Focus::FirstOperand,
            Focus::FirstOperand => Focus::SecondOperand,
            Focus::SecondOperand => Focus::Compute,
            Focus::Compute => Focus::Operation,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Operation => Focus::Compute,
            Focus::FirstOperand => Focus::Operation,
            Focus::SecondOperand => Focus::FirstOperand,
            Focus::Compute => Focus::SecondOperand,
        }
    }
}

/// A raised error waiting for acknowledgement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub detail: String,
}

pub struct CalculatorApp {
    title: String,
    operation: usize,
    first: String,
    second: String,
    focus: Focus,
    dialog: Option<ErrorDialog>,
    display: DisplayLog,
    controller: InteractionController,
    should_quit: bool,
}

impl CalculatorApp {
    pub fn new(config: &CalculatorConfig, display: DisplayLog) -> Self {
        Self {
            title: config.title.clone(),
            operation: 0,
            first: String::new(),
            second: String::new(),
            focus: Focus::default(),
            dialog: None,
            display,
            controller: InteractionController::new(),
            should_quit: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn operation(&self) -> OperationKind {
        OperationKind::ALL[self.operation]
    }

    pub fn operand(&self, field: OperandField) -> &str {
        match field {
            OperandField::First => &self.first,
            OperandField::Second => &self.second,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn dialog(&self) -> Option<&ErrorDialog> {
        self.dialog.as_ref()
    }

    pub fn display(&self) -> &DisplayLog {
        &self.display
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // The dialog blocks everything until it is acknowledged.
        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dialog = None;
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Enter => self.compute(),
            KeyCode::Left | KeyCode::Up if self.focus == Focus::Operation => {
                self.select_operation(OperationKind::ALL.len() - 1);
            }
            KeyCode::Right | KeyCode::Down if self.focus == Focus::Operation => {
                self.select_operation(1);
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.focused_operand_mut() {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = self.focused_operand_mut() {
                    text.pop();
                }
            }
            _ => {}
        }
    }

    /// Run one calculation with the current inputs.
    pub fn compute(&mut self) {
        let mut controller = std::mem::take(&mut self.controller);
        let outcome = controller.compute(self);
        self.controller = controller;
        debug!(succeeded = outcome.is_ok(), "compute finished");
    }

    fn select_operation(&mut self, step: usize) {
        self.operation = (self.operation + step) % OperationKind::ALL.len();
    }

    fn focused_operand_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::FirstOperand => Some(&mut self.first),
            Focus::SecondOperand => Some(&mut self.second),
            Focus::Operation | Focus::Compute => None,
        }
    }
}

impl CalculatorView for CalculatorApp {
    fn operand_text(&self, field: OperandField) -> String {
        self.operand(field).to_string()
    }

    fn selected_label(&self) -> String {
        self.operation().label().to_string()
    }

    fn clear_operands(&mut self) {
        self.first.clear();
        self.second.clear();
    }

    fn show_error(&mut self, title: &str, detail: &str) {
        self.dialog = Some(ErrorDialog { title: title.to_string(), detail: detail.to_string() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut CalculatorApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut CalculatorApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app() -> CalculatorApp {
        CalculatorApp::new(&CalculatorConfig::default(), DisplayLog::new())
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::FirstOperand);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus(), Focus::Compute);
    }

    #[test]
    fn selector_wraps_around() {
        let mut app = new_app();
        assert_eq!(app.operation(), OperationKind::Add);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.operation(), OperationKind::Divide);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.operation(), OperationKind::Multiply);
    }

    #[test]
    fn typing_only_reaches_operand_fields() {
        let mut app = new_app();
        type_text(&mut app, "ignored");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1+2jx");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "3-1J");

        assert_eq!(app.operand(OperandField::First), "1+2j");
        assert_eq!(app.operand(OperandField::Second), "3-1J");
        assert_eq!(app.selected_label(), "Addition");
    }

    #[test]
    fn successful_compute_clears_fields() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1+2j");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "3-1j");
        press(&mut app, KeyCode::Enter);

        assert!(app.dialog().is_none());
        assert_eq!(app.operand(OperandField::First), "");
        assert_eq!(app.operand(OperandField::Second), "");
    }

    #[test]
    fn error_dialog_blocks_input_until_dismissed() {
        let mut app = new_app();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1+0j");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "0+0j");
        press(&mut app, KeyCode::Enter);

        let dialog = app.dialog().cloned().unwrap();
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.detail, "Error during calculation: Division by zero is not possible.");

        type_text(&mut app, "9");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.operand(OperandField::Second), "0+0j");
        assert_eq!(app.focus(), Focus::SecondOperand);
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Enter);
        assert!(app.dialog().is_none());
        assert_eq!(app.operand(OperandField::First), "1+0j");
    }

    #[test]
    fn escape_quits_when_no_dialog_is_open() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());

        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
