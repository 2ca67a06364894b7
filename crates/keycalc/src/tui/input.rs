//! Keyboard input handling
//!
//! Maps crossterm key events onto calculator [`Action`]s. Printable keys go
//! through the same table as keypad labels and replayed key strings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Drive the calculator
    Calculator(Action),
    /// Clear the calculator and the operation log
    ClearAll,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearAll,
                _ => KeyAction::None,
            };
        }

        let action = match code {
            KeyCode::Enter => Some(Action::Equals),
            KeyCode::Backspace | KeyCode::Delete => Some(Action::Backspace),
            KeyCode::Esc => Some(Action::Clear),
            KeyCode::Char(c) => Action::from_char(c),
            _ => None,
        };
        action.map_or(KeyAction::None, KeyAction::Calculator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn calc(action: Action) -> KeyAction {
        KeyAction::Calculator(action)
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                calc(Action::Digit(c))
            );
        }
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            calc(Action::Digit('.'))
        );
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operator::ALL {
            let ch = op.symbol().chars().next().unwrap();
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(ch))),
                calc(Action::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_p_is_power() {
        let handler = InputHandler::new();
        for ch in ['p', 'P'] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(ch))),
                calc(Action::Operator(Operator::Power))
            );
        }
    }

    #[test]
    fn test_handle_shifted_plus() {
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key(event), calc(Action::Operator(Operator::Add)));
    }

    // ===== Equals / delete / clear =====

    #[test]
    fn test_handle_enter_and_equal_sign() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            calc(Action::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            calc(Action::Equals)
        );
    }

    #[test]
    fn test_handle_delete_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Backspace, KeyCode::Delete, KeyCode::Char('d'), KeyCode::Char('D')] {
            assert_eq!(handler.handle_key(key_event(code)), calc(Action::Backspace));
        }
    }

    #[test]
    fn test_handle_clear_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Esc, KeyCode::Char('c'), KeyCode::Char('C')] {
            assert_eq!(handler.handle_key(key_event(code)), calc(Action::Clear));
        }
    }

    #[test]
    fn test_handle_invert() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('n'))),
            calc(Action::InvertSign)
        );
    }

    // ===== Ctrl key tests =====

    #[test]
    fn test_handle_ctrl_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_l() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::ClearAll
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    // ===== Ignored keys =====

    #[test]
    fn test_handle_unknown_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::F(1), KeyCode::Tab, KeyCode::Left, KeyCode::Char('a')] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }
}
