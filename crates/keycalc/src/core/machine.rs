//! Input state machine
//!
//! Tracks a pending left operand, the selected operator and the entry buffer
//! being typed. Two phases exist: [`Phase::Empty`] (no left operand) and
//! [`Phase::LeftSet`] (left operand and operator chosen). A successful
//! equals keeps the machine in `LeftSet` with the result as the new left
//! operand; a failed equals drops back to `Empty`.
//!
//! Invariant: `operator.is_some() == left.is_some()`.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

use super::number::{is_num_or_dot, is_valid_number};
use super::{CalcError, CalcResult, Number, Operator};

/// Equation label shown before anything has been computed
pub const DEFAULT_EQUATION_PLACEHOLDER: &str = "Your calculation";

/// Stands in for the result in the equation label after a failed equals
pub const ERROR_MARKER: &str = "error";

/// Coarse state of the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No left operand yet
    Empty,
    /// Left operand and operator chosen, awaiting the right operand
    LeftSet,
}

/// A completed computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    /// Left operand
    pub left: Number,
    /// Operator applied
    pub operator: Operator,
    /// Right operand
    pub right: Number,
    /// Normalized result
    pub result: Number,
}

impl Equation {
    /// The equation without its result, e.g. `2 + 3`
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.left, self.operator, self.right)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), self.result)
    }
}

/// Read-only view of the machine handed to presentation layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Entry buffer text
    pub display: String,
    /// Equation label text
    pub equation: String,
    /// Committed left operand
    pub left: Option<Number>,
    /// Selected operator
    pub operator: Option<Operator>,
    /// Current phase
    pub phase: Phase,
}

/// The calculator input state machine
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    entry: String,
    left: Option<Number>,
    operator: Option<Operator>,
    right: Option<Number>,
    equation: String,
    placeholder: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the default equation placeholder
    #[must_use]
    pub fn new() -> Self {
        Self::with_placeholder(DEFAULT_EQUATION_PLACEHOLDER)
    }

    /// Creates a calculator whose idle equation label is `placeholder`
    #[must_use]
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            entry: String::new(),
            left: None,
            operator: None,
            right: None,
            equation: placeholder.clone(),
            placeholder,
        }
    }

    /// Returns the entry buffer
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Returns the committed left operand
    #[must_use]
    pub const fn left(&self) -> Option<Number> {
        self.left
    }

    /// Returns the selected operator
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Returns the right operand (only ever set while resolving equals)
    #[must_use]
    pub const fn right(&self) -> Option<Number> {
        self.right
    }

    /// Returns the equation label
    #[must_use]
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Returns the idle equation label
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns the current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.left.is_some() {
            Phase::LeftSet
        } else {
            Phase::Empty
        }
    }

    /// Captures the presentation-facing state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.entry.clone(),
            equation: self.equation.clone(),
            left: self.left,
            operator: self.operator,
            phase: self.phase(),
        }
    }

    /// Appends a digit or `.` if the buffer still parses as a number.
    ///
    /// Returns false (and changes nothing) for any other character or when
    /// the tentative buffer would not parse, e.g. a second decimal point.
    pub fn insert_digit_or_dot(&mut self, ch: char) -> bool {
        if !is_num_or_dot(ch) {
            trace!(%ch, "ignoring non-numeric input");
            return false;
        }
        let mut candidate = self.entry.clone();
        candidate.push(ch);
        if !is_valid_number(&candidate) {
            trace!(%candidate, "ignoring keystroke that breaks the number");
            return false;
        }
        self.entry = candidate;
        true
    }

    /// Negates the buffer when it holds a valid number
    pub fn invert_sign(&mut self) -> bool {
        match Number::parse(&self.entry) {
            Some(number) => {
                self.entry = number.negate().to_string();
                true
            }
            None => false,
        }
    }

    /// Removes the last character of the buffer
    pub fn backspace(&mut self) -> bool {
        self.entry.pop().is_some()
    }

    /// Resets every field to its initial value
    pub fn clear(&mut self) {
        self.entry.clear();
        self.left = None;
        self.operator = None;
        self.right = None;
        self.equation.clone_from(&self.placeholder);
        debug!("calculator cleared");
    }

    /// Selects an operator, committing the buffer as left operand if needed.
    ///
    /// When a left operand already exists the buffer content is discarded.
    pub fn set_operator(&mut self, op: Operator) -> CalcResult<()> {
        let left = match (self.left, Number::parse(&self.entry)) {
            (Some(left), _) => left,
            (None, Some(committed)) => committed,
            (None, None) => {
                warn!(entry = %self.entry, "operator pressed without a number");
                return Err(CalcError::IncompleteEntry);
            }
        };

        self.left = Some(left);
        self.operator = Some(op);
        self.entry.clear();
        self.equation = format!("{left} {op}");
        debug!(%left, %op, "operator selected");
        Ok(())
    }

    /// Resolves the pending equation.
    ///
    /// On success the result becomes the new left operand and the operator is
    /// kept, so typing another number and equals repeats it. On arithmetic
    /// failure the chain is broken: left operand and operator are dropped.
    pub fn equals(&mut self) -> CalcResult<Equation> {
        let (Some(left), Some(operator), Some(right)) =
            (self.left, self.operator, Number::parse(&self.entry))
        else {
            warn!(entry = %self.entry, "equals pressed with an incomplete entry");
            return Err(CalcError::IncompleteEntry);
        };

        self.right = Some(right);
        self.entry.clear();
        let expression = format!("{left} {operator} {right}");

        match operator.apply(left, right) {
            Ok(result) => {
                self.equation = format!("{expression} = {result}");
                self.left = Some(result);
                self.right = None;
                debug!(equation = %self.equation, "equals resolved");
                Ok(Equation {
                    left,
                    operator,
                    right,
                    result,
                })
            }
            Err(error) => {
                self.equation = format!("{expression} = {ERROR_MARKER}");
                self.left = None;
                self.operator = None;
                self.right = None;
                warn!(%expression, %error, "equals failed");
                Err(error)
            }
        }
    }
}
