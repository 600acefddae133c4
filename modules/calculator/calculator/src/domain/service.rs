//! Domain service for calculator
//!
//! Contains the core business logic for integer arithmetic.

use calculator_sdk::Operation;
use tracing::{debug, instrument, warn};

use super::OverflowPolicy;

/// Error type for Service operations.
///
/// This is the internal error type. `CalculatorLocalClient` converts these
/// to `CalculatorError` for external consumers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Result does not fit in `i64` under the checked policy
    #[error("{op} overflowed for operands {a} and {b}")]
    Overflow { op: Operation, a: i64, b: i64 },
}

/// Domain service that performs integer arithmetic.
///
/// Stateless apart from its overflow policy, which is fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct Service {
    policy: OverflowPolicy,
}

impl Service {
    /// Create a new service using the checked overflow policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_policy(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Add two numbers and return the sum.
    ///
    /// # Errors
    /// [`ServiceError::Overflow`] if the sum overflows under the checked policy.
    #[instrument(skip(self), fields(policy = self.policy.as_str()))]
    pub fn add(&self, a: i64, b: i64) -> Result<i64, ServiceError> {
        debug!(a, b, "performing addition");
        self.apply(Operation::Add, a, b, self.policy.add(a, b))
    }

    /// Multiply two numbers and return the product.
    ///
    /// # Errors
    /// [`ServiceError::Overflow`] if the product overflows under the checked policy.
    #[instrument(skip(self), fields(policy = self.policy.as_str()))]
    pub fn multiply(&self, a: i64, b: i64) -> Result<i64, ServiceError> {
        debug!(a, b, "performing multiplication");
        self.apply(Operation::Multiply, a, b, self.policy.multiply(a, b))
    }

    fn apply(
        &self,
        op: Operation,
        a: i64,
        b: i64,
        result: Option<i64>,
    ) -> Result<i64, ServiceError> {
        if let Some(value) = result {
            debug!(%op, result = value, "operation completed");
            Ok(value)
        } else {
            warn!(%op, a, b, policy = self.policy.as_str(), "integer overflow");
            Err(ServiceError::Overflow { op, a, b })
        }
    }
}
