//! Terminal application state

use crate::action::Action;
use crate::config::HostConfig;
use crate::core::{Calculator, Readout};
use crate::keypad::Keypad;

use super::input::HostCommand;

/// Calculator engine plus the host's view settings
#[derive(Debug)]
pub struct CalculatorApp {
    calc: Calculator,
    keypad: Keypad,
    config: HostConfig,
    last_action: Option<Action>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    /// Creates an app with the given configuration
    #[must_use]
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            calc: Calculator::new(),
            keypad: Keypad::new(),
            config,
            last_action: None,
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Returns the current readout
    #[must_use]
    pub fn readout(&self) -> &Readout {
        self.calc.readout()
    }

    /// Returns the most recent action, for highlighting its key
    #[must_use]
    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    /// Returns true once the user asked to quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a host command
    pub fn handle(&mut self, command: HostCommand) {
        match command {
            HostCommand::Action(action) => {
                self.calc.apply(action);
                self.last_action = Some(action);
            }
            HostCommand::Quit => self.should_quit = true,
            HostCommand::None => {}
        }
    }

    /// Clicks a keypad button by id. Unknown ids are ignored.
    pub fn click(&mut self, id: &str) -> bool {
        match self.keypad.handle_click(id) {
            Some(action) => {
                self.handle(HostCommand::Action(action));
                true
            }
            None => false,
        }
    }
}
