//! Calculator core: numbers, operators, the input state machine and history
//!
//! Nothing in here knows about terminals or key codes. Presentation layers
//! feed [`crate::action::Action`]s through a [`crate::session::Session`].

pub mod history;
pub mod machine;
pub mod number;
mod operations;

pub use machine::{Calculator, Equation, Phase, Snapshot};
pub use number::Number;
pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Operator or equals requested without a usable pending number
    #[error("Incomplete entry")]
    IncompleteEntry,
    /// Division (or zero raised to a negative power) by zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Result magnitude is not representable
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Result is not a real number
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}
