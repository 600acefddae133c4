#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator Module
//!
//! A stateless service performing integer addition and multiplication.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//! - `domain/policy.rs` - Overflow handling
//! - `local_client.rs` - In-process implementation of the SDK trait
//! - `wiring.rs` - Client construction from configuration
//!
//! External consumers should depend on `calculator-sdk` for the
//! `CalculatorClientV1` trait and obtain an instance via [`wire_client`].

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC EXPORTS ===
pub mod config;
pub mod domain;
pub use config::CalculatorConfig;
pub use domain::{OverflowPolicy, Service, ServiceError};

mod wiring;
pub use wiring::wire_client;

// === INTERNAL MODULES ===
mod local_client;
pub use local_client::CalculatorLocalClient;
