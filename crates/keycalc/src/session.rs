//! Action dispatch
//!
//! [`Session`] is the single place where logical actions become state
//! machine operations. It also keeps the history and turns calculator
//! errors into user notifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::action::Action;
use crate::config::Settings;
use crate::core::history::History;
use crate::core::{CalcError, Calculator, Snapshot};

/// How loudly a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Something went wrong with the computation
    Error,
    /// Informational message
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Info => f.write_str("info"),
        }
    }
}

/// A message the presentation layer must show before accepting more input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Text to show
    pub message: String,
    /// Presentation severity
    pub severity: Severity,
}

impl Notification {
    /// Creates an error notification
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates an informational notification
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    /// Builds the notification for a failed operator press
    #[must_use]
    pub fn for_operator_error(error: &CalcError) -> Self {
        match error {
            CalcError::IncompleteEntry => Self::error("Nothing was entered"),
            other => Self::for_equals_error(other),
        }
    }

    /// Builds the notification for a failed equals
    #[must_use]
    pub fn for_equals_error(error: &CalcError) -> Self {
        match error {
            CalcError::IncompleteEntry => Self::error("Incomplete calculation"),
            CalcError::DivisionByZero => Self::error("Division by zero"),
            CalcError::Overflow => Self::error("This calculation cannot be performed"),
            CalcError::InvalidResult(detail) => Self::error(format!("Invalid result: {detail}")),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Result of dispatching one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed
    Updated,
    /// Malformed keystroke, silently dropped
    Ignored,
    /// An error the user must acknowledge
    Notify(Notification),
}

impl Outcome {
    /// Returns the notification, if any
    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Notify(n) => Some(n),
            _ => None,
        }
    }

    const fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Updated
        } else {
            Self::Ignored
        }
    }
}

/// Calculator plus history, driven one action at a time
#[derive(Debug, Clone)]
pub struct Session {
    calculator: Calculator,
    history: History,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    /// Creates a session from presentation settings
    #[must_use]
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            calculator: Calculator::with_placeholder(settings.equation_placeholder.clone()),
            history: History::with_capacity(settings.history_capacity),
        }
    }

    /// Returns the state machine
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the completed-equation history
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Captures the presentation-facing state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.calculator.snapshot()
    }

    /// Routes one action to the matching state machine operation
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        debug!(?action, "dispatch");
        match action {
            Action::Digit(ch) => Outcome::from_changed(self.calculator.insert_digit_or_dot(ch)),
            Action::InvertSign => Outcome::from_changed(self.calculator.invert_sign()),
            Action::Backspace => Outcome::from_changed(self.calculator.backspace()),
            Action::Clear => {
                self.calculator.clear();
                Outcome::Updated
            }
            Action::Operator(op) => match self.calculator.set_operator(op) {
                Ok(()) => Outcome::Updated,
                Err(e) => Outcome::Notify(Notification::for_operator_error(&e)),
            },
            Action::Equals => match self.calculator.equals() {
                Ok(equation) => {
                    self.history.record(&equation);
                    Outcome::Updated
                }
                Err(e) => Outcome::Notify(Notification::for_equals_error(&e)),
            },
        }
    }

    /// Dispatches every action, collecting the notifications raised
    pub fn dispatch_all<I>(&mut self, actions: I) -> Vec<Notification>
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .filter_map(|action| match self.dispatch(action) {
                Outcome::Notify(n) => Some(n),
                Outcome::Updated | Outcome::Ignored => None,
            })
            .collect()
    }

    /// Clears the calculator and the history
    pub fn clear_all(&mut self) {
        self.calculator.clear();
        self.history.clear();
    }
}
