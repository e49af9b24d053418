//! chaincalc - single-register, chained-operator calculator engine
//!
//! Operators apply strictly left to right as they are pressed, the way a
//! pocket calculator works. After every action the engine publishes two
//! strings: the grouped display and the history trail of pending operations.
//!
//! # Principles
//!
//! - **Error prevention**: digits and operators are validated types, so engine
//!   actions cannot fail
//! - **Visual feedback**: every action republishes the display and history
//! - **Balanced testing**: one verification suite runs against every driver
//!
//! # Example
//!
//! ```rust
//! use chaincalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for action in Action::parse_keys("1234 + 5 +").unwrap() {
//!     calc.apply(action);
//! }
//! assert_eq!(calc.display_text(), "1,239");
//! assert_eq!(calc.history_text(), "1234 + 1239 +");
//!
//! calc.apply(Action::Digit(Digit::new(1).unwrap()));
//! let readout = calc.apply(Action::Equals);
//! assert_eq!(readout.display, "1,240");
//! assert_eq!(readout.history, "");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod action;
pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod shared;

/// Subscriber setup for the terminal host
#[cfg(feature = "term")]
pub mod logging;

/// Terminal front end (crossterm)
#[cfg(feature = "term")]
pub mod term;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::config::HostConfig;
    pub use crate::core::{
        CalcError, CalcResult, Calculator, Chain, ChainEntry, Digit, EntryPhase, Operand,
        Operator, Readout,
    };
    pub use crate::driver::{run_full_suite, CalculatorDriver};
    pub use crate::keypad::{Keypad, KeypadButton};
    pub use crate::shared::SharedCalculator;
}
