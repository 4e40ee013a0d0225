use anyhow::Context;
use cxcalc_core::{CalculatorConfig, DisplayLog, init_logging};
use cxcalc_tui::{CalculatorApp, terminal};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let config = CalculatorConfig::default();
    let display = DisplayLog::new();
    let logging = init_logging(&config, display.clone()).context("failed to initialise logging")?;
    debug!(log_path = %config.log_path.display(), "starting calculator");

    terminal::install_panic_hook();
    let mut tui = terminal::setup().context("failed to prepare the terminal")?;
    let mut app = CalculatorApp::new(&config, display);

    let result = cxcalc_tui::run(&mut tui, &mut app);
    terminal::restore().context("failed to restore the terminal")?;

    debug!("calculator closed");
    result.context("terminal event loop failed")?;
    logging.shutdown().context("failed to sync the log file")
}
