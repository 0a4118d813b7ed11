//! Overhead Line Thermal Rating Core Library
//!
//! A steady-state thermal rating engine for overhead line conductors. Given
//! ambient conditions (air temperature, mean and gust wind, solar irradiance)
//! and a line current, it solves the conductor heat balance for the
//! equilibrium conductor temperature and the maximum current (ampacity) that
//! keeps the conductor at its temperature limit.
//!
//! ## Pipeline
//!
//! - Effective wind from mean and gust speeds
//! - Heat balance: Joule + solar gain against convective + radiative loss,
//!   with two interchangeable convection models (heuristic, split)
//! - Damped Newton solve for conductor temperature, clamped to
//!   `[air − 5 °C, limit]`
//! - Bracketed bisection for ampacity
//! - Rating relative to a fixed conservative reference condition
//! - Risk, icing/snow and an illustrative sag indicator
//!
//! ```
//! use line_rating_core::{ConvectionModel, EnvironmentalState, Evaluator};
//!
//! let evaluator = Evaluator::default();
//! let state = EnvironmentalState::validated(0.0, 2.0, 8.0, 400.0, 600.0, ConvectionModel::Split)
//!     .unwrap();
//! let eval = evaluator.evaluate(&state);
//! assert!((*eval.effective_wind - 4.1).abs() < 1e-12);
//! assert!(*eval.conductor_temperature < 80.0);
//! ```
//!
//! Every evaluation is a pure function of its inputs; the library keeps no
//! global state and never installs a tracing subscriber.

// Units, conductor presets and evaluation inputs
pub mod core_types;

// Heat balance terms and convection models
pub mod physics;

// Equilibrium and ampacity solvers
pub mod solver;

// Rating, risk, icing/snow, sag
pub mod assessment;

pub mod config;
pub mod evaluation;

// Re-export core types
pub use core_types::{Amperes, Celsius, Kelvin, MetersPerSecond, WattsPerSquareMeter};
pub use core_types::{ConductorParameters, EnvironmentalState, InputError};

// Re-export physics and solver entry points
pub use physics::{effective_wind_speed, Convection, ConvectionModel, ConvectiveFlux, HeatBalance};
pub use solver::{
    solve_ampacity, solve_equilibrium, AmpacityOutcome, AmpacityResult, Saturation, SolverSettings,
    ThermalState,
};

// Re-export assessment results
pub use assessment::{IcingLevel, IcingSnowState, RiskLevel, SnowLikelihood};

// Re-export configuration and evaluation
pub use config::{ConfigError, ModelConfig, ReferenceCondition};
pub use evaluation::{evaluate, evaluate_batch, Evaluation, EvaluationCache, Evaluator, SweepGrid};
