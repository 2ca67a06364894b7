//! keycalc - a keyboard and keypad driven two-operand calculator
//!
//! The core is a small input state machine: digits build an entry buffer,
//! an operator commits it as the left operand, and equals resolves
//! `left op right`, feeding the result back as the next left operand.
//! Every input path (typed keys, keypad clicks, replayed key strings)
//! resolves to the same [`action::Action`] and goes through one
//! [`session::Session`].
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut session = Session::new();
//! let notes = session.dispatch_all(Action::parse_sequence("2+3="));
//! assert!(notes.is_empty());
//! assert_eq!(session.snapshot().equation, "2 + 3 = 5");
//!
//! // Equals repeats the last operator on a new entry
//! session.dispatch_all(Action::parse_sequence("10="));
//! assert_eq!(session.snapshot().equation, "5 + 10 = 15");
//!
//! let notes = session.dispatch_all(Action::parse_sequence("/0="));
//! assert_eq!(notes[0].message, "Division by zero");
//! ```

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
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::config::{ConfigError, Settings, ThemeMode, ThemeSettings};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{
        CalcError, CalcResult, Calculator, Equation, Number, Operator, Phase, Snapshot,
    };
    pub use crate::driver::{CalculatorDriver, HistoryItem, SessionDriver};
    pub use crate::session::{Notification, Outcome, Session, Severity};

    #[cfg(feature = "tui")]
    pub use crate::driver::{KeypadDriver, TuiDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        for ch in "42".chars() {
            calc.insert_digit_or_dot(ch);
        }
        calc.set_operator(Operator::Multiply).unwrap();
        calc.insert_digit_or_dot('2');
        let equation = calc.equals().unwrap();
        assert_eq!(equation.result, Number::Integer(84));
        assert_eq!(equation.to_string(), "42 * 2 = 84");
    }

    #[test]
    fn test_session_from_yaml_settings() {
        let settings = Settings::from_yaml_str("equation_placeholder: '0'\n").unwrap();
        let session = Session::with_settings(&settings);
        assert_eq!(session.snapshot().equation, "0");
        assert_eq!(session.snapshot().phase, Phase::Empty);
    }

    #[test]
    fn test_error_kinds_surface_as_notifications() {
        let cases = [
            ("+", "Nothing was entered"),
            ("1=", "Incomplete calculation"),
            ("1/0=", "Division by zero"),
            ("9p999=", "This calculation cannot be performed"),
        ];
        for (keys, expected) in cases {
            let mut session = Session::new();
            let notes = session.dispatch_all(Action::parse_sequence(keys));
            assert_eq!(notes.len(), 1, "keys {keys:?}");
            assert_eq!(notes[0].message, expected);
            assert_eq!(notes[0].severity, Severity::Error);
        }
    }

    #[test]
    fn test_history_through_session() {
        let mut session = Session::new();
        session.dispatch_all(Action::parse_sequence("3*3=C10-1="));
        let history: &History = session.history();
        let lines: Vec<String> = history.iter().map(HistoryEntry::display).collect();
        assert_eq!(lines, vec!["3 * 3 = 9", "10 - 1 = 9"]);
    }
}
