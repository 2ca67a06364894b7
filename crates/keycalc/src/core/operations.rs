//! Binary operators with explicit arithmetic dispatch

use crate::core::{CalcError, CalcResult, Number};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five operators the keypad offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Exponentiation (^)
    Power,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Looks up an operator by its symbol character
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Integer operands stay integers while the result fits in `i64`;
    /// everything else is computed in `f64` and normalized.
    pub fn apply(self, left: Number, right: Number) -> CalcResult<Number> {
        match self {
            Self::Add => integer_op(left, right, i64::checked_add)
                .map_or_else(|| finish(left.to_f64() + right.to_f64()), Ok),
            Self::Subtract => integer_op(left, right, i64::checked_sub)
                .map_or_else(|| finish(left.to_f64() - right.to_f64()), Ok),
            Self::Multiply => integer_op(left, right, i64::checked_mul)
                .map_or_else(|| finish(left.to_f64() * right.to_f64()), Ok),
            Self::Divide => {
                if right.is_zero() {
                    return Err(CalcError::DivisionByZero);
                }
                finish(left.to_f64() / right.to_f64())
            }
            Self::Power => power(left, right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Runs a checked integer op when both operands are integers
fn integer_op(left: Number, right: Number, op: fn(i64, i64) -> Option<i64>) -> Option<Number> {
    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => op(a, b).map(Number::Integer),
        _ => None,
    }
}

fn power(base: Number, exponent: Number) -> CalcResult<Number> {
    if base.is_zero() && exponent.to_f64() < 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    if let (Number::Integer(b), Number::Integer(e)) = (base, exponent) {
        if let Ok(e) = u32::try_from(e) {
            if let Some(value) = b.checked_pow(e) {
                return Ok(Number::Integer(value));
            }
        }
    }
    finish(base.to_f64().powf(exponent.to_f64()))
}

/// Rejects non-finite results and normalizes the rest
fn finish(result: f64) -> CalcResult<Number> {
    if result.is_nan() {
        Err(CalcError::InvalidResult("not a real number".into()))
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(Number::from_f64(result))
    }
}
