//! Operand text accumulator
//!
//! The operand stays text between actions because the display depends on
//! exactly which characters were typed (a bare trailing `.`, trailing zeros
//! after the point). It is parsed only when a number is needed.

use std::fmt;

use serde::Serialize;

use crate::core::Digit;

/// Fallback token for a positive infinite result
pub const INFINITY_TOKEN: &str = "Infinity";
/// Fallback token for a negative infinite result
pub const NEG_INFINITY_TOKEN: &str = "-Infinity";
/// Fallback token for a NaN result
pub const NAN_TOKEN: &str = "NaN";

/// The in-progress operand as unformatted decimal text
///
/// Invariant: never empty and always parseable as `f64` (the non-finite
/// tokens included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Operand(String);

impl Default for Operand {
    fn default() -> Self {
        Self::new()
    }
}

impl Operand {
    /// Creates the initial `"0"` operand
    #[must_use]
    pub fn new() -> Self {
        Self("0".to_string())
    }

    /// Creates an operand from the canonical text of a computed value
    ///
    /// Finite values use Rust's shortest round-trip form (never an
    /// exponent), negative zero collapses to `"0"`, and non-finite values
    /// become `Infinity`, `-Infinity` or `NaN`.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        let text = if value.is_nan() {
            NAN_TOKEN.to_string()
        } else if value.is_infinite() {
            if value > 0.0 {
                INFINITY_TOKEN.to_string()
            } else {
                NEG_INFINITY_TOKEN.to_string()
            }
        } else if value == 0.0 {
            "0".to_string()
        } else {
            format!("{value}")
        };
        Self(text)
    }

    /// Returns the raw text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the text is empty, which the invariant rules out
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the text is exactly `"0"`
    #[must_use]
    pub fn is_zero_literal(&self) -> bool {
        self.0 == "0"
    }

    /// Returns true if the text contains a decimal point after position 0
    #[must_use]
    pub fn has_point(&self) -> bool {
        self.0.find('.').is_some_and(|i| i > 0)
    }

    /// Returns true if the text ends in a bare `.`
    #[must_use]
    pub fn ends_with_point(&self) -> bool {
        self.0.ends_with('.')
    }

    /// Parses the text as a number.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a number, which means an engine invariant
    /// was broken.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self.0.parse::<f64>() {
            Ok(v) => v,
            Err(e) => panic!("operand text {:?} is not a number: {e}", self.0),
        }
    }

    /// Returns true unless the operand holds one of the non-finite tokens
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }

    /// Replaces the text with a single digit
    pub fn set_digit(&mut self, digit: Digit) {
        self.0.clear();
        self.0.push(digit.as_char());
    }

    /// Appends a digit
    pub fn push_digit(&mut self, digit: Digit) {
        self.0.push(digit.as_char());
    }

    /// Appends a decimal point
    pub fn push_point(&mut self) {
        self.0.push('.');
    }

    /// Replaces the text with `"0."`
    pub fn set_fresh_fraction(&mut self) {
        self.0.clear();
        self.0.push_str("0.");
    }

    /// Removes the last character and returns it.
    ///
    /// A text reduced to nothing, a lone sign or `-0` becomes `"0"`.
    pub fn pop(&mut self) -> Option<char> {
        let removed = self.0.pop();
        if matches!(self.0.as_str(), "" | "-" | "-0") {
            self.0 = "0".to_string();
        }
        removed
    }

    /// Flips the sign in place, keeping every typed character.
    ///
    /// NaN has no sign and is left untouched.
    pub fn flip_sign(&mut self) {
        if self.0 == NAN_TOKEN {
            return;
        }
        if let Some(rest) = self.0.strip_prefix('-') {
            self.0 = rest.to_string();
        } else {
            self.0.insert(0, '-');
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Operand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
