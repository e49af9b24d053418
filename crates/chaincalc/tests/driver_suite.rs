//! Unified driver suite
//!
//! Balanced testing: the same verification routines run against the plain
//! engine, the shared handle and a driver that only clicks keypad buttons.

use std::collections::HashSet;

use chaincalc::driver::{
    run_full_suite, verify_backspace, verify_chained_evaluation, verify_divide_order,
    verify_division_by_zero, verify_operator_replacement, verify_subtract_order,
};
use chaincalc::prelude::*;

/// Drives the engine through keypad element ids and records which were clicked
#[derive(Debug, Default)]
struct KeypadDriver {
    calc: Calculator,
    keypad: Keypad,
    clicked: HashSet<String>,
}

impl KeypadDriver {
    fn coverage(&self) -> f64 {
        self.clicked.len() as f64 / self.keypad.button_count() as f64
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, action: Action) -> Readout {
        let id = self
            .keypad
            .find_button_by_action(action)
            .expect("every action has a button")
            .id
            .clone();
        let action = self.keypad.handle_click(&id).expect("known id");
        self.clicked.insert(id);
        self.calc.apply(action)
    }

    fn current(&self) -> Readout {
        self.calc.readout().clone()
    }
}

// ===== Plain engine =====

#[test]
fn test_full_suite_on_calculator() {
    let mut calc = Calculator::new();
    run_full_suite(&mut calc).unwrap();
    assert_eq!(calc.display(), "0");
}

// ===== Shared handle =====

#[test]
fn test_full_suite_on_shared_handle() {
    let mut shared = SharedCalculator::new();
    run_full_suite(&mut shared).unwrap();
}

#[test]
fn test_shared_handle_across_threads() {
    let shared = SharedCalculator::new();
    let mut worker = shared.clone();
    std::thread::spawn(move || {
        verify_chained_evaluation(&mut worker).unwrap();
    })
    .join()
    .unwrap();
    assert_eq!(shared.readout().display, "20");
}

// ===== Keypad clicks =====

#[test]
fn test_full_suite_on_keypad() {
    let mut driver = KeypadDriver::default();
    run_full_suite(&mut driver).unwrap();
    assert!(
        driver.coverage() >= 0.8,
        "keypad coverage {:.0}%",
        driver.coverage() * 100.0
    );
}

#[test]
fn test_keypad_driver_individual_routines() {
    let mut driver = KeypadDriver::default();
    verify_operator_replacement(&mut driver).unwrap();
    verify_subtract_order(&mut driver).unwrap();
    verify_divide_order(&mut driver).unwrap();
    verify_backspace(&mut driver).unwrap();
    verify_division_by_zero(&mut driver).unwrap();
    assert!(driver.clicked.contains("btn-backspace"));
    assert!(driver.clicked.contains("btn-divide"));
}

#[test]
fn test_every_button_reachable() {
    let mut driver = KeypadDriver::default();
    driver
        .enter_keys("0123456789 . n \u{8} c + - * / =")
        .unwrap();
    assert_eq!(driver.clicked.len(), driver.keypad.button_count());
    assert!((driver.coverage() - 1.0).abs() < f64::EPSILON);
}

// ===== Observers =====

#[test]
fn test_observer_sees_every_readout() {
    use std::sync::{Arc, Mutex};

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut calc = Calculator::with_observer(move |r: &Readout| {
        sink.lock().unwrap().push(r.display.clone());
    });

    calc.enter_keys("12+3=").unwrap();
    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec!["1", "12", "12", "3", "15"]);
}
