//! Calculator keypad
//!
//! Visual feedback: the button grid a host draws, with the action behind
//! every button
//!
//! Layout:
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ ± ] [ 0 ] [ . ] [ + ]
//! [ C ] [ ⌫ ] [   =   ]
//! ```

use serde::Serialize;

use crate::action::Action;
use crate::core::{Digit, Operator};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: Action,
    /// Stable element id, e.g. `btn-7` or `btn-equals`
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button spans
    pub span: usize,
}

impl KeypadButton {
    /// Creates a one-column button
    #[must_use]
    pub fn new(action: Action, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button spanning `span` columns
    #[must_use]
    pub fn spanning(action: Action, row: usize, col: usize, span: usize) -> Self {
        Self {
            id: button_id(action),
            action,
            row,
            col,
            span,
        }
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// Returns true if the button covers the given column of its row
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// Returns the element id for an action
fn button_id(action: Action) -> String {
    match action {
        Action::Digit(d) => format!("btn-{d}"),
        Action::Dot => "btn-dot".to_string(),
        Action::Negate => "btn-negate".to_string(),
        Action::Backspace => "btn-backspace".to_string(),
        Action::Clear => "btn-clear".to_string(),
        Action::Equals => "btn-equals".to_string(),
        Action::Operator(op) => format!("btn-{}", op_name(op)),
    }
}

/// Returns a name for an operator (for element ids)
fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
        Operator::None => "none",
    }
}

/// Standard calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let digit = |v: usize| Action::Digit(Digit::ALL[v]);
        let op = Action::Operator;

        let buttons = vec![
            // Row 0: 7 8 9 /
            KeypadButton::new(digit(7), 0, 0),
            KeypadButton::new(digit(8), 0, 1),
            KeypadButton::new(digit(9), 0, 2),
            KeypadButton::new(op(Operator::Divide), 0, 3),
            // Row 1: 4 5 6 *
            KeypadButton::new(digit(4), 1, 0),
            KeypadButton::new(digit(5), 1, 1),
            KeypadButton::new(digit(6), 1, 2),
            KeypadButton::new(op(Operator::Multiply), 1, 3),
            // Row 2: 1 2 3 -
            KeypadButton::new(digit(1), 2, 0),
            KeypadButton::new(digit(2), 2, 1),
            KeypadButton::new(digit(3), 2, 2),
            KeypadButton::new(op(Operator::Subtract), 2, 3),
            // Row 3: ± 0 . +
            KeypadButton::new(Action::Negate, 3, 0),
            KeypadButton::new(digit(0), 3, 1),
            KeypadButton::new(Action::Dot, 3, 2),
            KeypadButton::new(op(Operator::Add), 3, 3),
            // Row 4: C ⌫ [ = ]
            KeypadButton::new(Action::Clear, 4, 0),
            KeypadButton::new(Action::Backspace, 4, 1),
            KeypadButton::spanning(Action::Equals, 4, 2, 2),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the buttons of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its printed label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label() == label)
    }

    /// Finds the button performing an action
    #[must_use]
    pub fn find_button_by_action(&self, action: Action) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Finds the button a typed character corresponds to
    #[must_use]
    pub fn find_button_by_char(&self, c: char) -> Option<&KeypadButton> {
        Action::from_char(c).and_then(|a| self.find_button_by_action(a))
    }

    /// Returns the action behind a clicked element id
    #[must_use]
    pub fn handle_click(&self, id: &str) -> Option<Action> {
        self.find_button_by_id(id).map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 19);
    }

    #[test]
    fn test_every_cell_is_covered_once() {
        let keypad = Keypad::new();
        let (rows, cols) = keypad.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                let covering = keypad.buttons().iter().filter(|b| b.covers(row, col)).count();
                assert_eq!(covering, 1, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_get_button_at() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().label(), "7");
        assert_eq!(keypad.get_button_at(0, 3).unwrap().label(), "/");
        assert_eq!(keypad.get_button_at(3, 0).unwrap().action, Action::Negate);
        assert_eq!(keypad.get_button_at(4, 3).unwrap().action, Action::Equals);
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_ids_unique() {
        let keypad = Keypad::new();
        let ids: HashSet<&str> = keypad.buttons().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), keypad.button_count());
    }

    #[test]
    fn test_ids() {
        let keypad = Keypad::new();
        assert!(keypad.find_button_by_id("btn-0").is_some());
        assert!(keypad.find_button_by_id("btn-divide").is_some());
        assert!(keypad.find_button_by_id("btn-equals").is_some());
        assert!(keypad.find_button_by_id("btn-power").is_none());
    }

    #[test]
    fn test_find_by_label() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.find_button_by_label("⌫").unwrap().id,
            "btn-backspace"
        );
        assert_eq!(keypad.find_button_by_label("=").unwrap().span, 2);
        assert!(keypad.find_button_by_label("%").is_none());
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.handle_click("btn-times"),
            Some(Action::Operator(Operator::Multiply))
        );
        assert_eq!(keypad.handle_click("btn-negate"), Some(Action::Negate));
        assert_eq!(keypad.handle_click("nope"), None);
    }

    #[test]
    fn test_find_by_char() {
        let keypad = Keypad::new();
        for c in "0123456789+-*/.=".chars() {
            assert!(keypad.find_button_by_char(c).is_some(), "missing {c}");
        }
        assert!(keypad.find_button_by_char('^').is_none());
    }

    #[test]
    fn test_row_order() {
        let keypad = Keypad::new();
        let labels: Vec<String> = keypad.row(3).map(KeypadButton::label).collect();
        assert_eq!(labels, vec!["±", "0", ".", "+"]);
    }
}
