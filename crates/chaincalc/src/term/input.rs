//! Keyboard input handling
//!
//! Error prevention: every key event maps to a typed command, and keys the
//! calculator has no use for map to `None`

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;

/// What the host should do with a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Forward an action to the engine
    Action(Action),
    /// Leave the calculator
    Quit,
    /// Ignored input
    None,
}

/// Maps key events to host commands
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to a command
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> HostCommand {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return HostCommand::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => HostCommand::Quit,
                KeyCode::Char('l' | 'u') => HostCommand::Action(Action::Clear),
                _ => HostCommand::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => HostCommand::Quit,
            KeyCode::Char(c) => Action::from_char(c).map_or(HostCommand::None, HostCommand::Action),
            KeyCode::Enter => HostCommand::Action(Action::Equals),
            KeyCode::Backspace | KeyCode::Delete => HostCommand::Action(Action::Backspace),
            KeyCode::Esc => HostCommand::Action(Action::Clear),
            _ => HostCommand::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operator};

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for d in Digit::all() {
            let event = key_event(KeyCode::Char(d.as_char()));
            assert_eq!(handler.handle_key(event), HostCommand::Action(Action::Digit(d)));
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for (c, op) in [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
        ] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                HostCommand::Action(Action::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_dot_and_negate() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            HostCommand::Action(Action::Dot)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('n'))),
            HostCommand::Action(Action::Negate)
        );
    }

    #[test]
    fn test_unmapped_char_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('^'))),
            HostCommand::None
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char(' '))),
            HostCommand::None
        );
    }

    // ===== Control key tests =====

    #[test]
    fn test_handle_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            HostCommand::Action(Action::Equals)
        );
    }

    #[test]
    fn test_handle_backspace_and_delete() {
        let handler = InputHandler::new();
        for code in [KeyCode::Backspace, KeyCode::Delete] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                HostCommand::Action(Action::Backspace)
            );
        }
    }

    #[test]
    fn test_handle_escape() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            HostCommand::Action(Action::Clear)
        );
    }

    #[test]
    fn test_navigation_keys_ignored() {
        let handler = InputHandler::new();
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::Up, KeyCode::Home] {
            assert_eq!(handler.handle_key(key_event(code)), HostCommand::None);
        }
    }

    // ===== Quit tests =====

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            HostCommand::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            HostCommand::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            HostCommand::Quit
        );
    }

    #[test]
    fn test_ctrl_clear() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            HostCommand::Action(Action::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            HostCommand::None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(handler.handle_key(event), HostCommand::None);
    }
}
