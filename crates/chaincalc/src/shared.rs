//! Thread-safe calculator handle
//!
//! Actions on one engine must never interleave. `SharedCalculator` holds a
//! single mutex per engine and keeps it for the whole action, including the
//! readout republish.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::action::Action;
use crate::core::{Calculator, Readout};

/// Cloneable handle to one calculator engine
#[derive(Debug, Clone, Default)]
pub struct SharedCalculator {
    inner: Arc<Mutex<Calculator>>,
}

impl SharedCalculator {
    /// Creates a handle around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::from_calculator(Calculator::new())
    }

    /// Wraps an existing engine
    #[must_use]
    pub fn from_calculator(calc: Calculator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(calc)),
        }
    }

    /// Runs one action under the lock
    pub fn apply(&self, action: Action) -> Readout {
        self.lock().apply(action)
    }

    /// Runs a closure with exclusive access to the engine
    pub fn with<R>(&self, f: impl FnOnce(&mut Calculator) -> R) -> R {
        f(&mut self.lock())
    }

    /// Returns the current readout
    #[must_use]
    pub fn readout(&self) -> Readout {
        self.lock().readout().clone()
    }

    /// Returns the number of handles sharing this engine
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    fn lock(&self) -> MutexGuard<'_, Calculator> {
        // Every action leaves the engine consistent before it can panic in
        // an observer, so a poisoned lock is still safe to use.
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("calculator lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }
}
