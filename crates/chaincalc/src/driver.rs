//! Unified calculator driver
//!
//! Write the behavior checks once and run them against any host: a bare
//! [`Calculator`], a [`SharedCalculator`], or a terminal front end.
//!
//! Balanced testing: the same verification routines back every driver

use crate::action::Action;
use crate::core::{CalcResult, Calculator, Digit, Operator, Readout};
use crate::shared::SharedCalculator;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use chaincalc::driver::{run_full_suite, CalculatorDriver};
/// use chaincalc::core::Calculator;
///
/// let mut calc = Calculator::new();
/// run_full_suite(&mut calc).unwrap();
///
/// let readout = calc.enter_keys("12*3=").unwrap();
/// assert_eq!(readout.display, "36");
/// ```
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, action: Action) -> Readout;

    /// Returns the current display and history
    fn current(&self) -> Readout;

    /// Returns the main display text
    fn display(&self) -> String {
        self.current().display
    }

    /// Returns the history trail
    fn history(&self) -> String {
        self.current().history
    }

    /// Resets the calculator
    fn clear(&mut self) {
        self.press(Action::Clear);
    }

    /// Presses every key of `keys` in order, returning the final readout
    fn enter_keys(&mut self, keys: &str) -> CalcResult<Readout> {
        let mut last = self.current();
        for action in Action::parse_keys(keys)? {
            last = self.press(action);
        }
        Ok(last)
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, action: Action) -> Readout {
        self.apply(action)
    }

    fn current(&self) -> Readout {
        self.readout().clone()
    }
}

impl CalculatorDriver for SharedCalculator {
    fn press(&mut self, action: Action) -> Readout {
        self.apply(action)
    }

    fn current(&self) -> Readout {
        self.readout()
    }
}

// ===== Unified Verification Routines =====
// Each routine starts from a cleared calculator and leaves it dirty.

/// Digits typed into a fresh calculator show as a grouped integer
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.enter_keys("1234567")?.display, "1,234,567");

    driver.clear();
    assert_eq!(driver.enter_keys("0001")?.display, "1");

    driver.clear();
    assert_eq!(driver.enter_keys("1000.50")?.display, "1,000.50");
    Ok(())
}

/// A zero typed onto a bare zero changes nothing
pub fn verify_zero_noop<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    let before = driver.current();
    let after = driver.press(Action::Digit(Digit::ZERO));
    assert_eq!(before, after);
    assert_eq!(after.display, "0");
    Ok(())
}

/// Operators fold strictly left to right
pub fn verify_chained_evaluation<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    let readout = driver.enter_keys("5+3+")?;
    assert_eq!(readout.display, "8");
    assert_eq!(readout.history, "5 + 8 +");

    let readout = driver.enter_keys("2=")?;
    assert_eq!(readout.display, "10");
    assert_eq!(readout.history, "");

    // No precedence: 2 + 3 * 4 is (2 + 3) * 4
    driver.clear();
    assert_eq!(driver.enter_keys("2+3*4=")?.display, "20");
    Ok(())
}

/// Subtraction takes the stored value from the current operand
pub fn verify_subtract_order<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.enter_keys("10-4=")?.display, "-6");

    driver.clear();
    assert_eq!(driver.enter_keys("4-10=")?.display, "6");

    // Each press folds one step: 4 - 10, then 1 - (-6)
    driver.clear();
    let readout = driver.enter_keys("10-4-")?;
    assert_eq!(readout.history, "10 - -6 -");
    assert_eq!(driver.enter_keys("1=")?.display, "7");
    Ok(())
}

/// Division divides the current operand by the stored value
pub fn verify_divide_order<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.enter_keys("8/2=")?.display, "0.25");

    driver.clear();
    assert_eq!(driver.enter_keys("2/8=")?.display, "4");

    driver.clear();
    assert_eq!(driver.enter_keys("4/1000=")?.display, "250");
    Ok(())
}

/// A second operator with nothing typed in between replaces the first
pub fn verify_operator_replacement<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    let readout = driver.enter_keys("5+*")?;
    assert_eq!(readout.history, "5 *");

    assert_eq!(driver.enter_keys("3=")?.display, "15");
    Ok(())
}

/// Negate flips non-zero operands and ignores zero
pub fn verify_negate<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press(Action::Negate).display, "0");

    assert_eq!(driver.enter_keys("5")?.display, "5");
    assert_eq!(driver.press(Action::Negate).display, "-5");
    assert_eq!(driver.press(Action::Negate).display, "5");

    driver.clear();
    assert_eq!(driver.enter_keys("1.50n")?.display, "-1.50");
    Ok(())
}

/// Backspace trims typed characters and tracks the decimal point
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.enter_keys("7")?;
    assert_eq!(driver.press(Action::Backspace).display, "0");

    // Deleting the point lets a new one be typed
    driver.clear();
    driver.enter_keys("12.")?;
    assert_eq!(driver.press(Action::Backspace).display, "12");
    assert_eq!(driver.enter_keys(".5")?.display, "12.5");

    // Deleting a fraction digit keeps the point
    driver.clear();
    driver.enter_keys("1.5")?;
    assert_eq!(driver.press(Action::Backspace).display, "1.");
    assert_eq!(driver.enter_keys(".")?.display, "1.");
    Ok(())
}

/// Clear always returns to `0` with no history
pub fn verify_reset<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.enter_keys("12+3*")?;
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.history(), "");
    Ok(())
}

/// Equals with nothing pending changes nothing
pub fn verify_empty_equals<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    let readout = driver.press(Action::Equals);
    assert_eq!(readout.display, "0");
    assert_eq!(readout.history, "");

    driver.enter_keys("42")?;
    assert_eq!(driver.press(Action::Equals).display, "42");
    Ok(())
}

/// Division by zero shows a fallback token and never panics
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    // The zero is stored, so 5 is divided by it
    driver.clear();
    assert_eq!(driver.enter_keys("0/5=")?.display, "Infinity");

    driver.clear();
    assert_eq!(driver.enter_keys("0/5n=")?.display, "-Infinity");

    driver.clear();
    assert_eq!(driver.enter_keys("0/0=")?.display, "NaN");

    // Typing after a fallback token starts over
    assert_eq!(driver.enter_keys("7")?.display, "7");
    Ok(())
}

/// Results feed the next operation
pub fn verify_result_reuse<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.enter_keys("6*7=")?;
    let readout = driver.press(Action::Operator(Operator::Subtract));
    assert_eq!(readout.history, "42 -");
    assert_eq!(driver.enter_keys("50=")?.display, "8");
    Ok(())
}

/// Complete verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_digit_entry(driver)?;
    verify_zero_noop(driver)?;
    verify_chained_evaluation(driver)?;
    verify_subtract_order(driver)?;
    verify_divide_order(driver)?;
    verify_operator_replacement(driver)?;
    verify_negate(driver)?;
    verify_backspace(driver)?;
    verify_reset(driver)?;
    verify_empty_equals(driver)?;
    verify_division_by_zero(driver)?;
    verify_result_reuse(driver)?;
    driver.clear();
    Ok(())
}
