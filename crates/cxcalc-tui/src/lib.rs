//! Terminal window for the cxcalc complex-number calculator.
//!
//! - **[`app`]**: window state, focus ring, key handling, and the
//!   [`CalculatorView`](cxcalc_core::CalculatorView) implementation
//! - **[`ui`]**: stateless render function for the form, log panel and dialog
//! - **[`terminal`]**: raw mode and alternate screen handling

pub mod app;
pub mod terminal;
pub mod ui;

use crossterm::event::{self, Event};

pub use app::CalculatorApp;

/// Draw and handle key presses until the user quits.
pub fn run(terminal: &mut terminal::Tui, app: &mut CalculatorApp) -> std::io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::render(frame, app))?;
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
