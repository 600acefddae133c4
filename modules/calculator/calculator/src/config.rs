//! Configuration for the calculator module.

use serde::{Deserialize, Serialize};

use crate::domain::OverflowPolicy;

/// Calculator module configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Behaviour when a result does not fit in `i64`.
    /// Default: `checked`
    pub overflow: OverflowPolicy,
}
