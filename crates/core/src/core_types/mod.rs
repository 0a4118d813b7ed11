//! Core types and utilities

pub mod conditions;
pub mod conductor;
pub mod units;

pub use conditions::{EnvironmentalState, InputError};
pub use conductor::ConductorParameters;
pub use units::*;
