//! Local client implementing the SDK API
//!
//! Delegates to the domain service in-process and maps domain errors
//! to SDK errors.

use std::sync::Arc;

use calculator_sdk::{CalculatorClientV1, CalculatorError};

use crate::domain::{Service, ServiceError};

/// In-process `CalculatorClientV1` backed by the domain [`Service`].
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl From<ServiceError> for CalculatorError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Overflow { op, a, b } => CalculatorError::Overflow { op, a, b },
        }
    }
}

impl CalculatorClientV1 for CalculatorLocalClient {
    fn add(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        self.service.add(a, b).map_err(Into::into)
    }

    fn multiply(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        self.service.multiply(a, b).map_err(Into::into)
    }
}
