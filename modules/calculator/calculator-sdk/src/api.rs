//! Calculator API trait and types
//!
//! Contract trait and types for the calculator service.

use std::fmt;

/// Calculator API trait
///
/// Two pure integer operations. Calls are synchronous and hold no state
/// between invocations, so implementations are freely shareable behind `Arc`.
pub trait CalculatorClientV1: Send + Sync {
    /// Add two numbers and return the sum.
    ///
    /// # Errors
    /// Returns [`CalculatorError::Overflow`] when the sum does not fit in `i64`
    /// and the implementation is configured to report overflow.
    fn add(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Multiply two numbers and return the product.
    ///
    /// # Errors
    /// Returns [`CalculatorError::Overflow`] when the product does not fit in
    /// `i64` and the implementation is configured to report overflow.
    fn multiply(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;
}

/// Arithmetic operation performed by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    /// Infix operator symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Multiply => '*',
        }
    }

    /// Lowercase operation name, as used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("integer overflow: {a} {sym} {b}", sym = .op.symbol())]
    Overflow { op: Operation, a: i64, b: i64 },
}
