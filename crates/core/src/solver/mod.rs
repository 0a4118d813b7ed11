//! Thermal solvers
//!
//! - [`solve_equilibrium`]: conductor temperature for a given current
//! - [`solve_ampacity`]: largest current that keeps the conductor at its limit
//!
//! Both are bounded by fixed iteration budgets and are pure functions of
//! their inputs, so results are bit-for-bit reproducible and calls may run
//! concurrently.

pub mod ampacity;
pub mod equilibrium;

pub use ampacity::{solve_ampacity, AmpacityOutcome, AmpacityResult};
pub use equilibrium::{solve_equilibrium, Saturation, ThermalState};

use serde::{Deserialize, Serialize};

/// Iteration budgets and tolerances shared by the solvers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Maximum Newton-style updates per equilibrium solve
    pub max_equilibrium_iterations: u32,
    /// Stop once an update moves the temperature less than this (°C)
    pub convergence_step: f64,
    /// Floor on the outflow slope (W/(m·K))
    pub slope_floor: f64,
    /// Forward-difference step for models without an analytic slope (°C)
    pub probe_step: f64,
    /// Initial guess offset above air temperature (°C)
    pub initial_offset: f64,
    /// How far below air temperature the conductor may settle (°C)
    pub lower_margin: f64,
    /// Band below the limit accepted as "at the limit" (°C)
    pub limit_tolerance: f64,
    /// First upper bracket of the ampacity search (A)
    pub initial_current_guess: f64,
    /// Multiplier applied while the bracket is still below the limit
    pub bracket_growth_factor: f64,
    /// Maximum number of bracket growth steps
    pub max_bracket_growths: u32,
    /// Maximum bisection iterations
    pub max_bisection_iterations: u32,
    /// Stop bisecting once the bracket is narrower than this (A)
    pub min_bracket_width: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_equilibrium_iterations: 60,
            convergence_step: 0.02,
            slope_floor: 1.0e-6,
            probe_step: 0.5,
            initial_offset: 10.0,
            lower_margin: 5.0,
            limit_tolerance: 0.05,
            initial_current_guess: 2000.0,
            bracket_growth_factor: 1.5,
            max_bracket_growths: 10,
            max_bisection_iterations: 40,
            min_bracket_width: 0.5,
        }
    }
}
