//! Stateless rendering of [`CalculatorApp`]

use cxcalc_core::OperandField;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::app::{CalculatorApp, ErrorDialog, Focus};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame<'_>, app: &CalculatorApp) {
    let area = frame.area();
    let window = Block::bordered().title(Line::from(app.title()).bold());
    let inner = window.inner(area);
    frame.render_widget(window, area);

    let [
        operation_label,
        operation,
        first_label,
        first,
        second_label,
        second,
        compute,
        logs_label,
        logs,
        help,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new("Select operation:"), operation_label);
    frame.render_widget(
        Paragraph::new(format!("◀ {} ▶", app.operation().label()))
            .block(field_block(app.focus() == Focus::Operation)),
        operation,
    );

    frame.render_widget(Paragraph::new("Enter the first complex number:"), first_label);
    render_operand(frame, app, OperandField::First, Focus::FirstOperand, first);
    frame.render_widget(Paragraph::new("Enter the second complex number:"), second_label);
    render_operand(frame, app, OperandField::Second, Focus::SecondOperand, second);

    let button = Paragraph::new(Line::from("[ Compute ]").centered())
        .block(field_block(app.focus() == Focus::Compute));
    frame.render_widget(
        if app.focus() == Focus::Compute { button.reversed() } else { button },
        compute,
    );

    frame.render_widget(Paragraph::new("Logs:"), logs_label);
    render_logs(frame, app, logs);

    frame.render_widget(
        Paragraph::new("Tab/Shift-Tab: move  ←/→: operation  Enter: compute  Esc: quit").dim(),
        help,
    );

    if let Some(dialog) = app.dialog() {
        render_dialog(frame, dialog, area);
    }
}

fn field_block(focused: bool) -> Block<'static> {
    let block = Block::bordered();
    if focused { block.border_style(Style::new().yellow()) } else { block }
}

fn render_operand(
    frame: &mut Frame<'_>,
    app: &CalculatorApp,
    field: OperandField,
    focus: Focus,
    area: Rect,
) {
    let text = app.operand(field);
    let focused = app.focus() == focus && app.dialog().is_none();
    frame.render_widget(Paragraph::new(text).block(field_block(focused)), area);

    if focused {
        let offset = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(offset).min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Newest lines at the bottom; older lines scroll off the top.
fn render_logs(frame: &mut Frame<'_>, app: &CalculatorApp, area: Rect) {
    let block = Block::bordered();
    let visible = usize::from(block.inner(area).height);
    let lines = app.display().lines();
    let skip = lines.len().saturating_sub(visible);
    let text: Text<'_> = lines.into_iter().skip(skip).map(Line::from).collect();
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_dialog(frame: &mut Frame<'_>, dialog: &ErrorDialog, area: Rect) {
    let popup = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    let body = Text::from(vec![
        Line::from(dialog.detail.as_str()),
        Line::from(""),
        Line::from("Press Enter to dismiss").centered().dim(),
    ]);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .title(Line::from(dialog.title.as_str()).bold())
                .border_style(Style::new().red()),
        ),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use cxcalc_core::{CalculatorConfig, CalculatorView, DisplayLog};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(app: &CalculatorApp) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn renders_every_control() {
        let app = CalculatorApp::new(&CalculatorConfig::default(), DisplayLog::new());
        let rows = draw(&app);

        for text in [
            "Complex Calculator",
            "Select operation:",
            "◀ Addition ▶",
            "Enter the first complex number:",
            "Enter the second complex number:",
            "[ Compute ]",
            "Logs:",
        ] {
            assert!(screen_contains(&rows, text), "missing {text:?}");
        }
    }

    #[test]
    fn dialog_is_drawn_over_the_form() {
        let mut app = CalculatorApp::new(&CalculatorConfig::default(), DisplayLog::new());
        app.show_error("Error", "Error during calculation: Division by zero is not possible.");
        let rows = draw(&app);

        assert!(screen_contains(&rows, "Press Enter to dismiss"));
        assert!(screen_contains(&rows, "Division by zero"));

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!screen_contains(&draw(&app), "Press Enter to dismiss"));
    }

    #[test]
    fn centered_popup_fits_small_areas() {
        let area = Rect::new(0, 0, 40, 5);
        let popup = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        assert_eq!(popup, Rect::new(0, 0, 40, 5));
    }
}
