//! Calculator drivers
//!
//! The same behavior is reachable through direct dispatch, the keyboard and
//! the on-screen keypad. [`CalculatorDriver`] abstracts over those input
//! paths so a behavioral check is written once and run against each of them.

use crate::action::Action;
use crate::core::Snapshot;
use crate::session::{Notification, Outcome, Session};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use keycalc::driver::{verify_chaining, CalculatorDriver, SessionDriver};
///
/// let mut driver = SessionDriver::new();
/// driver.type_keys("6*7=");
/// assert_eq!(driver.equation(), "6 * 7 = 42");
///
/// verify_chaining(&mut SessionDriver::new());
/// ```
pub trait CalculatorDriver {
    /// Performs one logical action through this driver's input path
    fn press(&mut self, action: Action);

    /// Returns the presentation-facing state
    fn snapshot(&self) -> Snapshot;

    /// Returns the notification raised by the most recent press
    fn last_notification(&self) -> Option<Notification>;

    /// Gets history entries (newest first)
    fn history(&self) -> Vec<HistoryItem>;

    /// Presses every action a key string maps to
    fn type_keys(&mut self, keys: &str) {
        for action in Action::parse_sequence(keys) {
            self.press(action);
        }
    }

    /// Gets the entry buffer text
    fn display(&self) -> String {
        self.snapshot().display
    }

    /// Gets the equation label text
    fn equation(&self) -> String {
        self.snapshot().equation
    }

    /// Resets the calculator (history is kept)
    fn clear(&mut self) {
        self.press(Action::Clear);
    }
}

/// A simplified history item for driver results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// The expression that was evaluated
    pub expression: String,
    /// The result as a string
    pub result: String,
}

fn history_items(session: &Session) -> Vec<HistoryItem> {
    session
        .history()
        .iter_rev()
        .map(|entry| HistoryItem {
            expression: entry.expression.clone(),
            result: entry.result.to_string(),
        })
        .collect()
}

/// Drives a [`Session`] directly
#[derive(Debug, Default)]
pub struct SessionDriver {
    session: Session,
    last: Option<Notification>,
}

impl SessionDriver {
    /// Creates a new session driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying session
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }
}

impl CalculatorDriver for SessionDriver {
    fn press(&mut self, action: Action) {
        self.last = match self.session.dispatch(action) {
            Outcome::Notify(n) => Some(n),
            Outcome::Updated | Outcome::Ignored => None,
        };
    }

    fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    fn last_notification(&self) -> Option<Notification> {
        self.last.clone()
    }

    fn history(&self) -> Vec<HistoryItem> {
        history_items(&self.session)
    }
}

/// Terminal drivers
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{history_items, Action, CalculatorDriver, HistoryItem, Notification, Snapshot};
    use crate::tui::CalculatorApp;

    /// The key a user would type for `action`
    #[must_use]
    pub fn key_event_for(action: Action) -> KeyEvent {
        let code = match action {
            Action::Equals => KeyCode::Enter,
            Action::Backspace => KeyCode::Backspace,
            Action::Clear => KeyCode::Esc,
            other => KeyCode::Char(other.label()),
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Closes any open popup, remembering what the last press raised
    fn settle(app: &mut CalculatorApp, last: &mut Option<Notification>) {
        *last = None;
        app.dismiss_notification();
    }

    /// Types on the keyboard of a [`CalculatorApp`]
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        last: Option<Notification>,
    }

    impl TuiDriver {
        /// Creates a new keyboard driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: Action) {
            settle(&mut self.app, &mut self.last);
            self.app.handle_key(key_event_for(action));
            self.last = self.app.notification().cloned();
        }

        fn snapshot(&self) -> Snapshot {
            self.app.session().snapshot()
        }

        fn last_notification(&self) -> Option<Notification> {
            self.last.clone()
        }

        fn history(&self) -> Vec<HistoryItem> {
            history_items(self.app.session())
        }
    }

    /// Clicks the on-screen keypad of a [`CalculatorApp`]
    #[derive(Debug, Default)]
    pub struct KeypadDriver {
        app: CalculatorApp,
        last: Option<Notification>,
    }

    impl KeypadDriver {
        /// Creates a new keypad driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for KeypadDriver {
        fn press(&mut self, action: Action) {
            settle(&mut self.app, &mut self.last);
            if let Some(index) = self.app.keypad().find_button_by_action(action) {
                self.app.press_button(index);
            }
            self.last = self.app.notification().cloned();
        }

        fn snapshot(&self) -> Snapshot {
            self.app.session().snapshot()
        }

        fn last_notification(&self) -> Option<Notification> {
            self.last.clone()
        }

        fn history(&self) -> Vec<HistoryItem> {
            history_items(self.app.session())
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::{KeypadDriver, TuiDriver};

// ===== Behavioral checks shared by every driver =====

fn message<D: CalculatorDriver>(driver: &D) -> Option<String> {
    driver.last_notification().map(|n| n.message)
}

/// Verifies the four basic operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, equation) in [
        ("2+3=", "2 + 3 = 5"),
        ("10-4=", "10 - 4 = 6"),
        ("6*7=", "6 * 7 = 42"),
        ("7/2=", "7 / 2 = 3.5"),
        ("6/3=", "6 / 3 = 2"),
    ] {
        driver.clear();
        driver.type_keys(keys);
        assert_eq!(driver.equation(), equation, "keys {keys:?}");
        assert_eq!(driver.display(), "");
    }
    driver.clear();
}

/// Verifies that a result feeds the next operator and that equals repeats
/// the last operator
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("2+3=");
    driver.type_keys("*4=");
    assert_eq!(driver.equation(), "5 * 4 = 20");
    driver.type_keys("2=");
    assert_eq!(driver.equation(), "20 * 2 = 40");
    assert_eq!(driver.snapshot().left.map(|n| n.to_string()), Some("40".into()));
    driver.clear();
}

/// Verifies exponentiation, including a fractional result
pub fn verify_power<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("2p10=");
    assert_eq!(driver.equation(), "2 ^ 10 = 1024");
    driver.clear();
    driver.type_keys("2^N1=");
    assert_eq!(driver.equation(), "2 ^ 1 = 2");
    driver.clear();
    driver.type_keys("2^1N=");
    assert_eq!(driver.equation(), "2 ^ -1 = 0.5");
    driver.clear();
}

/// Verifies sign inversion and deletion on the entry buffer
pub fn verify_entry_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("12.5N");
    assert_eq!(driver.display(), "-12.5");
    driver.type_keys("N");
    assert_eq!(driver.display(), "12.5");
    driver.type_keys("DDD");
    assert_eq!(driver.display(), "1");
    driver.type_keys("DD");
    assert_eq!(driver.display(), "");
    assert_eq!(driver.last_notification(), None);
    driver.type_keys("1..2");
    assert_eq!(driver.display(), "1.2");
    driver.clear();
}

/// Verifies the error notifications and that arithmetic errors break the chain
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("+");
    assert_eq!(message(driver).as_deref(), Some("Nothing was entered"));

    driver.type_keys("5=");
    assert_eq!(message(driver).as_deref(), Some("Incomplete calculation"));
    assert_eq!(driver.display(), "5");

    driver.type_keys("/0=");
    assert_eq!(message(driver).as_deref(), Some("Division by zero"));
    assert_eq!(driver.equation(), "5 / 0 = error");
    assert_eq!(driver.snapshot().left, None);
    assert_eq!(driver.snapshot().operator, None);
    driver.clear();
}

/// Verifies history tracking
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("1+1=C2+2=C3+3=");
    let history = driver.history();
    assert!(history.len() >= 3);
    assert_eq!(history[0].expression, "3 + 3");
    assert_eq!(history[0].result, "6");
    assert_eq!(history[2].expression, "1 + 1");
    driver.clear();
}

/// Runs every behavioral check
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_power(driver);
    verify_entry_editing(driver);
    verify_error_handling(driver);
    verify_history(driver);
}
