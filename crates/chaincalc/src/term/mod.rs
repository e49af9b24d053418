//! Terminal host
//!
//! Visual feedback: the readout is redrawn after every key

mod app;
mod cli;
mod input;
mod render;

pub use app::CalculatorApp;
pub use cli::{eval_keys, format_eval, Cli};
pub use input::{HostCommand, InputHandler};
pub use render::{button_cell, keypad_lines, keypad_width, render, right_align, screen_lines};

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::HostConfig;
use crate::core::CalcResult;

/// Runs the interactive calculator until the user quits.
///
/// The terminal is restored even when drawing or reading input fails.
pub fn run_interactive(config: HostConfig) -> CalcResult<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = terminal::disable_raw_mode();
        return Err(e.into());
    }

    let result = event_loop(&mut stdout, config);

    let restored = execute!(stdout, Show, LeaveAlternateScreen)
        .and_then(|()| terminal::disable_raw_mode());
    tracing::debug!(ok = result.is_ok(), "terminal session ended");
    result?;
    restored?;
    Ok(())
}

fn event_loop<W: Write>(out: &mut W, config: HostConfig) -> CalcResult<()> {
    let mut app = CalculatorApp::with_config(config);
    let input = InputHandler::new();

    render(out, &app)?;
    while !app.should_quit() {
        if let Event::Key(key) = event::read()? {
            app.handle(input.handle_key(key));
        }
        render(out, &app)?;
    }
    Ok(())
}
