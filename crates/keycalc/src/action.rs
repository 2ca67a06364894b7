//! Logical calculator actions and the shared keystroke table
//!
//! Keyboard keys, keypad buttons and replayed key strings all resolve to an
//! [`Action`] through [`Action::from_char`], so every input source drives
//! the calculator identically.

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// A toolkit-independent calculator action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Insert a digit or decimal point
    Digit(char),
    /// Select an operator
    Operator(Operator),
    /// Resolve the pending equation
    Equals,
    /// Remove the last entry character
    Backspace,
    /// Reset the calculator
    Clear,
    /// Negate the entry
    InvertSign,
}

impl Action {
    /// Maps a typed character to an action.
    ///
    /// Letters are case-insensitive: `D` deletes, `C` clears, `P` selects
    /// power and `N` inverts the sign. Anything unmapped is `None`.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' | '.' => Some(Self::Digit(ch)),
            '=' | '\n' | '\r' => Some(Self::Equals),
            'p' | 'P' => Some(Self::Operator(Operator::Power)),
            'd' | 'D' | '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            'c' | 'C' | '\u{1b}' => Some(Self::Clear),
            'n' | 'N' => Some(Self::InvertSign),
            _ => Operator::from_symbol(ch).map(Self::Operator),
        }
    }

    /// Returns the keypad label for this action
    #[must_use]
    pub fn label(&self) -> char {
        match self {
            Self::Digit(ch) => *ch,
            Self::Operator(op) => op.symbol().chars().next().unwrap_or('?'),
            Self::Equals => '=',
            Self::Backspace => 'D',
            Self::Clear => 'C',
            Self::InvertSign => 'N',
        }
    }

    /// Returns true for digit and decimal point actions
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Digit(_))
    }

    /// Parses a key string, dropping characters that map to nothing
    pub fn parse_sequence(keys: &str) -> impl Iterator<Item = Self> + '_ {
        keys.chars().filter_map(Self::from_char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_dot() {
        for ch in "0123456789.".chars() {
            assert_eq!(Action::from_char(ch), Some(Action::Digit(ch)));
        }
    }

    #[test]
    fn test_equals_keys() {
        assert_eq!(Action::from_char('='), Some(Action::Equals));
        assert_eq!(Action::from_char('\n'), Some(Action::Equals));
        assert_eq!(Action::from_char('\r'), Some(Action::Equals));
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(Action::from_char('+'), Some(Action::Operator(Operator::Add)));
        assert_eq!(
            Action::from_char('-'),
            Some(Action::Operator(Operator::Subtract))
        );
        assert_eq!(
            Action::from_char('*'),
            Some(Action::Operator(Operator::Multiply))
        );
        assert_eq!(
            Action::from_char('/'),
            Some(Action::Operator(Operator::Divide))
        );
        assert_eq!(Action::from_char('^'), Some(Action::Operator(Operator::Power)));
    }

    #[test]
    fn test_p_maps_to_power() {
        assert_eq!(Action::from_char('p'), Some(Action::Operator(Operator::Power)));
        assert_eq!(Action::from_char('P'), Some(Action::Operator(Operator::Power)));
    }

    #[test]
    fn test_letter_controls_case_insensitive() {
        assert_eq!(Action::from_char('d'), Some(Action::Backspace));
        assert_eq!(Action::from_char('D'), Some(Action::Backspace));
        assert_eq!(Action::from_char('c'), Some(Action::Clear));
        assert_eq!(Action::from_char('C'), Some(Action::Clear));
        assert_eq!(Action::from_char('n'), Some(Action::InvertSign));
        assert_eq!(Action::from_char('N'), Some(Action::InvertSign));
    }

    #[test]
    fn test_unmapped_characters() {
        for ch in ['a', 'x', '%', '(', ' ', 'e'] {
            assert_eq!(Action::from_char(ch), None, "{ch:?} should be ignored");
        }
    }

    #[test]
    fn test_label_round_trips_through_table() {
        let actions = [
            Action::Digit('7'),
            Action::Digit('.'),
            Action::Operator(Operator::Power),
            Action::Equals,
            Action::Backspace,
            Action::Clear,
            Action::InvertSign,
        ];
        for action in actions {
            assert_eq!(Action::from_char(action.label()), Some(action));
        }
    }

    #[test]
    fn test_is_numeric() {
        assert!(Action::Digit('3').is_numeric());
        assert!(!Action::Equals.is_numeric());
    }

    #[test]
    fn test_parse_sequence_skips_unknown() {
        let actions: Vec<_> = Action::parse_sequence("2 + 3 =").collect();
        assert_eq!(
            actions,
            vec![
                Action::Digit('2'),
                Action::Operator(Operator::Add),
                Action::Digit('3'),
                Action::Equals,
            ]
        );
    }
}
