//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator module:
//! - API trait (`CalculatorClientV1`)
//! - Error types (`CalculatorError`)
//! - Operation identifiers (`Operation`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::CalculatorClientV1;
//!
//! let client = calculator::wire_client(&config);
//! let sum = client.add(5, 3)?;
//! let product = client.multiply(4, 3)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorClientV1, CalculatorError, Operation};

/// Module name used for configuration sections and log targets.
pub const MODULE_NAME: &str = "calculator";
