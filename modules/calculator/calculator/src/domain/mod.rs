//! Domain layer for calculator module
//!
//! Contains business logic for integer arithmetic.

pub mod policy;
pub mod service;

pub use policy::OverflowPolicy;
pub use service::{Service, ServiceError};
