//! Host configuration
//!
//! Loaded from a JSON file; any field left out keeps its default. Command
//! line flags are applied on top by the binary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Default log filter: warnings only, so the screen stays clean
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for a calculator host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Draw the history trail above the display
    pub show_history: bool,
    /// Draw the keypad below the display
    pub show_keypad: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            show_history: true,
            show_keypad: true,
        }
    }
}

impl HostConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a configuration file
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CalcError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded host config");
        Ok(config)
    }

    /// Parses a configuration from JSON text
    pub fn from_json(text: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects settings the host cannot use
    pub fn validate(&self) -> CalcResult<()> {
        if self.log_filter.trim().is_empty() {
            return Err(CalcError::config("log_filter must not be empty"));
        }
        Ok(())
    }

    /// Sets the log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Shows or hides the history trail
    #[must_use]
    pub const fn with_history(mut self, show: bool) -> Self {
        self.show_history = show;
        self
    }

    /// Shows or hides the keypad
    #[must_use]
    pub const fn with_keypad(mut self, show: bool) -> Self {
        self.show_keypad = show;
        self
    }
}
