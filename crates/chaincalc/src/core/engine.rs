//! Calculator engine
//!
//! Error prevention: an explicit entry-phase state machine replaces loose
//! flags, so every action is a total transition.
//!
//! ```text
//! Idle --digit--> Entering --operator--> OperatorPending --digit/dot--> Entering
//!   ^                    |                        |
//!   +------- equals -----+-------- equals --------+
//! ```

use std::fmt;

use serde::Serialize;

use crate::action::Action;
use crate::core::format::display_text;
use crate::core::{Chain, Digit, Operand, Operator};

/// Where the user is in entering the current operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EntryPhase {
    /// Nothing typed since the last operator or result; the next digit
    /// starts a fresh operand
    #[default]
    Idle,
    /// Digits or a point were typed since the last operator
    Entering,
    /// An operator was just pressed; pressing another replaces it
    OperatorPending,
}

impl EntryPhase {
    /// True once a digit or point was typed since the last operator
    #[must_use]
    pub const fn input_since_operator(self) -> bool {
        matches!(self, Self::Entering)
    }

    /// True right after an operator press, before any new input
    #[must_use]
    pub const fn operator_just_set(self) -> bool {
        matches!(self, Self::OperatorPending)
    }
}

/// The two derived strings published after every action
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Readout {
    /// Main display: the grouped operand
    pub display: String,
    /// History trail: the pending chain
    pub history: String,
}

/// Callback receiving each new readout
pub type Observer = Box<dyn FnMut(&Readout) + Send>;

/// Single-register, chained-operator calculator
///
/// Operators are evaluated strictly left to right as they are pressed;
/// there is no precedence. Every action returns the new [`Readout`] and
/// forwards it to the observer, if one is registered.
pub struct Calculator {
    operand: Operand,
    operator: Operator,
    chain: Chain,
    dot_added: bool,
    phase: EntryPhase,
    readout: Readout,
    observer: Option<Observer>,
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("operand", &self.operand)
            .field("operator", &self.operator)
            .field("chain", &self.chain)
            .field("dot_added", &self.dot_added)
            .field("phase", &self.phase)
            .field("readout", &self.readout)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator showing `0` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            operand: Operand::new(),
            operator: Operator::None,
            chain: Chain::new(),
            dot_added: false,
            phase: EntryPhase::Idle,
            readout: Readout {
                display: "0".to_string(),
                history: String::new(),
            },
            observer: None,
        }
    }

    /// Creates a calculator that pushes every readout to `observer`
    #[must_use]
    pub fn with_observer(observer: impl FnMut(&Readout) + Send + 'static) -> Self {
        let mut calc = Self::new();
        calc.observer = Some(Box::new(observer));
        calc
    }

    /// Replaces the observer
    pub fn set_observer(&mut self, observer: impl FnMut(&Readout) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    // ===== Accessors =====

    /// Current operand
    #[must_use]
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Current operand as raw text
    #[must_use]
    pub fn operand_text(&self) -> &str {
        self.operand.as_str()
    }

    /// Most recently pressed operator (`None` after construction or reset)
    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Pending operation chain
    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Whether the operand already contains a decimal point
    #[must_use]
    pub fn dot_added(&self) -> bool {
        self.dot_added
    }

    /// Current entry phase
    #[must_use]
    pub fn phase(&self) -> EntryPhase {
        self.phase
    }

    /// Whether a digit or point was typed since the last operator
    #[must_use]
    pub fn input_since_operator(&self) -> bool {
        self.phase.input_since_operator()
    }

    /// Whether an operator was just pressed with no input after it
    #[must_use]
    pub fn operator_just_set(&self) -> bool {
        self.phase.operator_just_set()
    }

    /// Main display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.readout.display
    }

    /// History trail text
    #[must_use]
    pub fn history_text(&self) -> &str {
        &self.readout.history
    }

    /// Both derived strings
    #[must_use]
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    // ===== Actions =====

    /// Types a digit.
    ///
    /// A zero on a bare `0` does nothing. After an operator or a result the
    /// digit starts a fresh operand; otherwise it is appended.
    pub fn enter_digit(&mut self, digit: Digit) -> Readout {
        if self.operand.is_zero_literal() && digit.is_zero() {
            return self.publish("enter_digit");
        }

        let fresh = !self.phase.input_since_operator()
            || self.operand.is_zero_literal()
            || !self.operand.is_finite();
        if fresh {
            self.operand.set_digit(digit);
            self.dot_added = false;
        } else {
            self.operand.push_digit(digit);
        }
        self.phase = EntryPhase::Entering;

        self.publish("enter_digit")
    }

    /// Types a decimal point.
    ///
    /// Ignored if the operand already has one. Right after an operator (or
    /// on a non-finite result) the operand restarts as `0.` and counts as
    /// input. Otherwise the point is appended and the phase is left alone,
    /// so on a fresh engine the next digit still starts a new operand.
    pub fn enter_dot(&mut self) -> Readout {
        if self.dot_added {
            return self.publish("enter_dot");
        }

        let fresh = (!self.phase.input_since_operator() && !self.operator.is_none())
            || !self.operand.is_finite();
        if fresh {
            self.operand.set_fresh_fraction();
            self.phase = EntryPhase::Entering;
        } else {
            self.operand.push_point();
        }
        self.dot_added = true;

        self.publish("enter_dot")
    }

    /// Flips the operand's sign. Zero is left alone.
    ///
    /// Negating right after an operator makes the value count as the newly
    /// entered operand.
    pub fn negate(&mut self) -> Readout {
        if self.operand.value() == 0.0 {
            return self.publish("negate");
        }

        self.operand.flip_sign();
        if !self.phase.input_since_operator() && !self.operator.is_none() {
            self.phase = EntryPhase::Entering;
        }

        self.publish("negate")
    }

    /// Deletes the last typed character; a single character becomes `0`.
    pub fn backspace(&mut self) -> Readout {
        if self.operand.len() == 1 || !self.operand.is_finite() {
            self.operand = Operand::new();
            self.dot_added = false;
        } else {
            if self.operand.ends_with_point() {
                self.dot_added = false;
            }
            self.operand.pop();
        }

        self.publish("backspace")
    }

    /// Presses an operator.
    ///
    /// A completed operand is first folded into the chain; pressing a second
    /// operator with nothing typed in between replaces the first.
    pub fn set_operator(&mut self, op: Operator) -> Readout {
        self.operator = op;

        if self.phase.input_since_operator() {
            self.fold(false);
        }
        if self.phase.operator_just_set() {
            if let Some(replaced) = self.chain.pop_last() {
                tracing::debug!(from = %replaced.operator, to = %op, "operator replaced");
            }
        }

        self.chain.record(self.operand.clone(), op);
        self.phase = EntryPhase::OperatorPending;

        self.publish("set_operator")
    }

    /// Applies the newest chain entry to the current operand, computing
    /// `current <op> stored`.
    ///
    /// With `clear_history` the chain is emptied afterwards (the equals key).
    /// Does nothing while the chain is empty.
    pub fn calculate(&mut self, clear_history: bool) -> Readout {
        self.fold(clear_history);
        self.publish("calculate")
    }

    /// Returns to the freshly constructed state. The observer is kept.
    pub fn reset(&mut self) -> Readout {
        self.operand = Operand::new();
        self.operator = Operator::None;
        self.chain.clear();
        self.dot_added = false;
        self.phase = EntryPhase::Idle;

        self.publish("reset")
    }

    /// Dispatches a host action
    pub fn apply(&mut self, action: Action) -> Readout {
        match action {
            Action::Digit(d) => self.enter_digit(d),
            Action::Dot => self.enter_dot(),
            Action::Negate => self.negate(),
            Action::Backspace => self.backspace(),
            Action::Clear => self.reset(),
            Action::Operator(op) => self.set_operator(op),
            Action::Equals => self.calculate(true),
        }
    }

    // ===== Internals =====

    fn fold(&mut self, clear_history: bool) {
        let Some(last) = self.chain.last() else {
            return;
        };

        let stored = last.operand.value();
        let current = self.operand.value();
        let result = last.operator.apply(current, stored);

        if clear_history {
            self.chain.clear();
        }

        self.operand = Operand::from_value(result);
        self.dot_added = self.operand.has_point();
        self.phase = EntryPhase::Idle;

        if result.is_finite() {
            tracing::debug!(current, stored, result, "folded chain entry");
        } else {
            tracing::warn!(current, stored, operand = %self.operand, "non-finite result");
        }
    }

    fn publish(&mut self, action: &'static str) -> Readout {
        self.readout = Readout {
            display: display_text(&self.operand),
            history: self.chain.display(),
        };

        tracing::debug!(
            action,
            operand = %self.operand,
            phase = ?self.phase,
            chain_len = self.chain.len(),
            "calculator updated"
        );

        if let Some(observer) = self.observer.as_mut() {
            observer(&self.readout);
        }
        self.readout.clone()
    }
}
