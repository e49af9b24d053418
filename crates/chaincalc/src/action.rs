//! Host actions and the keyboard character mapping
//!
//! Error prevention: type-safe actions, so a host can only send what the
//! engine accepts

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Digit, Operator};

/// Backspace control character
const BACKSPACE: char = '\u{8}';
/// Delete control character (sent by many terminals for backspace)
const DELETE: char = '\u{7f}';
/// Escape control character
const ESCAPE: char = '\u{1b}';

/// A discrete user action understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Type a digit
    Digit(Digit),
    /// Type a decimal point
    Dot,
    /// Flip the operand's sign
    Negate,
    /// Delete the last typed character
    Backspace,
    /// Reset everything
    Clear,
    /// Press an operator
    Operator(Operator),
    /// Evaluate and clear the chain
    Equals,
}

impl Action {
    /// Maps a typed character to an action.
    ///
    /// Digits, `+ - * /`, `.`, `=` or newline for equals, backspace/delete,
    /// `c`/`C`/escape for clear and `n`/`_` for negate. Anything else maps
    /// to `None`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Ok(digit) = Digit::try_from(c) {
            return Some(Self::Digit(digit));
        }
        if let Ok(op) = Operator::try_from(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' => Some(Self::Dot),
            '=' | '\n' | '\r' => Some(Self::Equals),
            BACKSPACE | DELETE => Some(Self::Backspace),
            'c' | 'C' | ESCAPE => Some(Self::Clear),
            'n' | 'N' | '_' => Some(Self::Negate),
            _ => None,
        }
    }

    /// Maps every character of `keys` to an action, skipping spaces.
    ///
    /// Fails on the first character with no mapping.
    pub fn parse_keys(keys: &str) -> CalcResult<Vec<Self>> {
        keys.chars()
            .filter(|c| *c == '\n' || !c.is_whitespace())
            .map(|c| Self::from_char(c).ok_or_else(|| CalcError::unknown_action(c.to_string())))
            .collect()
    }

    /// Returns the keypad label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Dot => ".".to_string(),
            Self::Negate => "±".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Clear => "C".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl std::str::FromStr for Action {
    type Err = CalcError;

    /// Parses a single key such as `"7"`, `"+"` or `"="`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| CalcError::unknown_action(s)),
            _ => Err(CalcError::unknown_action(s)),
        }
    }
}
