//! Wiring for the calculator module
//!
//! Builds the domain service from configuration and exposes it through the
//! SDK trait.

use std::sync::Arc;

use calculator_sdk::{CalculatorClientV1, MODULE_NAME};

use crate::config::CalculatorConfig;
use crate::domain::Service;
use crate::local_client::CalculatorLocalClient;

/// Build a `CalculatorClientV1` from module configuration.
#[must_use]
pub fn wire_client(cfg: &CalculatorConfig) -> Arc<dyn CalculatorClientV1> {
    let service = Arc::new(Service::with_policy(cfg.overflow));
    tracing::info!(
        module = MODULE_NAME,
        overflow = cfg.overflow.as_str(),
        "CalculatorClientV1 client wired"
    );
    Arc::new(CalculatorLocalClient::new(service))
}
