//! Property-based tests for the input state machine
//!
//! Random keystroke streams must never break the machine's invariants, and
//! typed arithmetic must agree with plain integer arithmetic.

#![allow(clippy::unwrap_used)]

use keycalc::core::number::is_valid_number;
use keycalc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn numeric_char_strategy() -> impl Strategy<Value = char> {
    prop::sample::select("0123456789.".chars().collect::<Vec<_>>())
}

/// Any logical action, weighted toward digits so operands get built
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => numeric_char_strategy().prop_map(Action::Digit),
        2 => operator_strategy().prop_map(Action::Operator),
        2 => Just(Action::Equals),
        1 => Just(Action::Backspace),
        1 => Just(Action::Clear),
        1 => Just(Action::InvertSign),
    ]
}

fn run(actions: &[Action]) -> Session {
    let mut session = Session::new();
    session.dispatch_all(actions.iter().copied());
    session
}

// ===== Entry buffer =====

proptest! {
    /// Accepted keystrokes always leave a parseable buffer
    #[test]
    fn prop_inserted_entry_is_valid(chars in prop::collection::vec(numeric_char_strategy(), 0..20)) {
        let mut calc = Calculator::new();
        for ch in chars {
            let before = calc.entry().to_string();
            let accepted = calc.insert_digit_or_dot(ch);
            if accepted {
                prop_assert_eq!(calc.entry(), format!("{before}{ch}"));
            } else {
                prop_assert_eq!(calc.entry(), before.as_str());
            }
            prop_assert!(calc.entry().is_empty() || is_valid_number(calc.entry()));
        }
    }

    /// At most one decimal point survives
    #[test]
    fn prop_single_decimal_point(chars in prop::collection::vec(numeric_char_strategy(), 0..20)) {
        let mut calc = Calculator::new();
        for ch in chars {
            calc.insert_digit_or_dot(ch);
        }
        prop_assert!(calc.entry().matches('.').count() <= 1);
    }

    /// Inverting twice restores the numeric value
    #[test]
    fn prop_invert_twice_restores_value(n in -1_000_000i64..1_000_000) {
        let mut calc = Calculator::new();
        for ch in n.unsigned_abs().to_string().chars() {
            calc.insert_digit_or_dot(ch);
        }
        let before = Number::parse(calc.entry());
        calc.invert_sign();
        calc.invert_sign();
        prop_assert_eq!(Number::parse(calc.entry()), before);
    }

    /// Backspace never touches anything but the buffer
    #[test]
    fn prop_backspace_only_edits_entry(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let mut session = run(&actions);
        let before = session.calculator().clone();
        session.dispatch(Action::Backspace);
        let after = session.calculator();
        prop_assert_eq!(after.left(), before.left());
        prop_assert_eq!(after.operator(), before.operator());
        prop_assert_eq!(after.equation(), before.equation());
        prop_assert!(before.entry().starts_with(after.entry()));
    }
}

// ===== Machine invariants =====

proptest! {
    /// Operator and left operand are set and cleared together
    #[test]
    fn prop_operator_iff_left(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut session = Session::new();
        for action in actions {
            session.dispatch(action);
            let calc = session.calculator();
            prop_assert_eq!(calc.operator().is_some(), calc.left().is_some());
            let expected = if calc.left().is_some() { Phase::LeftSet } else { Phase::Empty };
            prop_assert_eq!(calc.phase(), expected);
        }
    }

    /// Clear always returns to the initial state and is idempotent
    #[test]
    fn prop_clear_resets(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut session = run(&actions);
        session.dispatch(Action::Clear);
        prop_assert_eq!(session.calculator(), &Calculator::new());
        session.dispatch(Action::Clear);
        prop_assert_eq!(session.calculator(), &Calculator::new());
    }

    /// Every notification is an error raised by operator or equals
    #[test]
    fn prop_only_operator_and_equals_notify(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut session = Session::new();
        for action in actions {
            let outcome = session.dispatch(action);
            if let Some(note) = outcome.notification() {
                prop_assert!(matches!(action, Action::Operator(_) | Action::Equals));
                prop_assert_eq!(note.severity, Severity::Error);
            }
        }
    }

    /// History only grows by successful equals, up to its capacity
    #[test]
    fn prop_history_bounded(actions in prop::collection::vec(action_strategy(), 0..200)) {
        let session = run(&actions);
        prop_assert!(session.history().len() <= History::DEFAULT_MAX_ENTRIES);
        let equals = actions.iter().filter(|a| **a == Action::Equals).count();
        prop_assert!(session.history().len() <= equals);
    }
}

// ===== Arithmetic through keystrokes =====

proptest! {
    /// Typed integer arithmetic matches i64 arithmetic
    #[test]
    fn prop_typed_integer_arithmetic(a in 0i64..100_000, b in 1i64..100_000) {
        for (symbol, expected) in [('+', a + b), ('-', a - b), ('*', a * b)] {
            let mut session = Session::new();
            let notes = session.dispatch_all(Action::parse_sequence(&format!("{a}{symbol}{b}=")));
            prop_assert!(notes.is_empty());
            prop_assert_eq!(session.calculator().left(), Some(Number::Integer(expected)));
            prop_assert_eq!(session.snapshot().display, "");
        }
    }

    /// Exact division collapses to an integer
    #[test]
    fn prop_exact_division_is_integer(q in -1000i64..1000, d in 1i64..1000) {
        let mut session = Session::new();
        let mut keys = format!("{}", (q * d).unsigned_abs());
        if q < 0 {
            keys.push('N');
        }
        keys.push_str(&format!("/{d}="));
        session.dispatch_all(Action::parse_sequence(&keys));
        prop_assert_eq!(session.calculator().left(), Some(Number::Integer(q)));
    }

    /// Dividing by zero always reports and resets
    #[test]
    fn prop_division_by_zero_resets(a in 0u32..1_000_000) {
        let mut session = Session::new();
        let notes = session.dispatch_all(Action::parse_sequence(&format!("{a}/0=")));
        prop_assert_eq!(notes.len(), 1);
        prop_assert_eq!(notes[0].message.as_str(), "Division by zero");
        prop_assert_eq!(session.snapshot().phase, Phase::Empty);
        prop_assert_eq!(session.snapshot().equation, format!("{a} / 0 = error"));
    }

    /// Equals with a fresh entry repeats the last operator
    #[test]
    fn prop_equals_repeats_operator(a in 1i64..1000, b in 1i64..1000, c in 1i64..1000, op in operator_strategy()) {
        prop_assume!(op != Operator::Power);
        let symbol = op.symbol();
        let mut session = Session::new();
        session.dispatch_all(Action::parse_sequence(&format!("{a}{symbol}{b}=")));
        let first = session.calculator().left().unwrap();
        session.dispatch_all(Action::parse_sequence(&format!("{c}=")));
        prop_assert_eq!(session.calculator().operator(), Some(op));
        let expected = op.apply(first, Number::Integer(c)).unwrap();
        prop_assert_eq!(session.calculator().left(), Some(expected));
    }
}

// ===== Input path equivalence =====

#[cfg(feature = "tui")]
proptest! {
    /// Keyboard, keypad and direct dispatch end in the same state
    #[test]
    fn prop_input_paths_agree(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let mut direct = SessionDriver::new();
        let mut keyboard = TuiDriver::new();
        let mut keypad = KeypadDriver::new();
        for action in &actions {
            direct.press(*action);
            keyboard.press(*action);
            keypad.press(*action);
            prop_assert_eq!(direct.last_notification(), keyboard.last_notification());
            prop_assert_eq!(direct.last_notification(), keypad.last_notification());
        }
        prop_assert_eq!(direct.snapshot(), keyboard.snapshot());
        prop_assert_eq!(direct.snapshot(), keypad.snapshot());
        prop_assert_eq!(direct.history(), keyboard.history());
    }
}
