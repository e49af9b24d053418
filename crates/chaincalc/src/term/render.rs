//! Terminal rendering
//!
//! Visual feedback: history trail, right-aligned display and the keypad,
//! with the last pressed key highlighted
//!
//! Layout is built as plain strings first so it can be tested without a
//! terminal; [`render`] only positions them.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use crate::action::Action;
use crate::keypad::{Keypad, KeypadButton};

use super::app::CalculatorApp;

/// Width of one keypad cell, brackets included
pub const CELL_WIDTH: usize = 5;

/// Screen title
pub const TITLE: &str = "chaincalc";

/// Key help shown under the keypad
pub const HELP: &str = "n ± | esc C | q quit";

/// Width of a keypad with `cols` columns
#[must_use]
pub fn keypad_width(cols: usize) -> usize {
    cols * CELL_WIDTH + cols.saturating_sub(1)
}

/// Right-aligns `text` in `width` columns. Longer text is returned whole.
#[must_use]
pub fn right_align(text: &str, width: usize) -> String {
    format!("{text:>width$}")
}

/// Renders one keypad button
#[must_use]
pub fn button_cell(button: &KeypadButton, highlighted: bool) -> String {
    let width = keypad_width(button.span);
    let inner = width - 2;
    let (open, close) = if highlighted { ('<', '>') } else { ('[', ']') };
    format!("{open}{:^inner$}{close}", button.label())
}

/// Renders the keypad, one string per row
#[must_use]
pub fn keypad_lines(keypad: &Keypad, highlight: Option<Action>) -> Vec<String> {
    let (rows, _) = keypad.dimensions();
    (0..rows)
        .map(|row| {
            keypad
                .row(row)
                .map(|b| button_cell(b, highlight == Some(b.action)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Builds every screen line for the app, top to bottom
#[must_use]
pub fn screen_lines(app: &CalculatorApp) -> Vec<String> {
    let (_, cols) = app.keypad().dimensions();
    let readout = app.readout();
    let width = keypad_width(cols)
        .max(readout.display.chars().count())
        .max(readout.history.chars().count());

    let mut lines = vec![TITLE.to_string()];
    if app.config().show_history {
        lines.push(right_align(&readout.history, width));
    }
    lines.push(right_align(&readout.display, width));
    lines.push("-".repeat(width));
    if app.config().show_keypad {
        lines.extend(keypad_lines(app.keypad(), app.last_action()));
        lines.push(HELP.to_string());
    }
    lines
}

/// Draws the app into a terminal writer
pub fn render<W: Write>(out: &mut W, app: &CalculatorApp) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    let display_row = usize::from(app.config().show_history) + 1;
    for (row, line) in screen_lines(app).iter().enumerate() {
        let y = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, y))?;
        if row == display_row {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print(line),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(out, Print(line))?;
        }
    }

    out.flush()
}
