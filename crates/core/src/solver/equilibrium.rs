//! Conductor temperature at thermal equilibrium
//!
//! Finds Tc where Joule + solar gain equals convective + radiative loss using
//! a damped Newton iteration: each step divides the heat residual by the slope
//! of the loss only. Because Joule heating also grows with temperature, this
//! under-steps rather than overshoots while loss grows faster than gain.
//!
//! The iterate is clamped to `[Ta − lower_margin, limit]` after every step. A
//! result pinned at either bound is a valid saturated estimate, not an error.

use super::SolverSettings;
use crate::physics::{ConvectiveFlux, HeatBalance};
use serde::Serialize;
use tracing::{debug, trace};

/// Which clamp bound, if any, the solved temperature is pinned at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Saturation {
    /// Interior solution
    None,
    /// Pinned at `air temperature − lower_margin`
    Floor,
    /// Pinned at the conductor temperature limit
    Limit,
}

/// Result of one equilibrium solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermalState {
    /// Conductor temperature (°C)
    pub temperature: f64,
    /// Updates performed before stopping
    pub iterations: u32,
    pub saturation: Saturation,
}

impl ThermalState {
    /// True when the conductor sits at its configured temperature limit
    #[inline]
    pub fn is_at_limit(&self) -> bool {
        self.saturation == Saturation::Limit
    }
}

/// NaN-tolerant clamp: a NaN input lands on `lower`.
#[inline(always)]
fn clamp_between(value: f64, lower: f64, upper: f64) -> f64 {
    value.max(lower).min(upper)
}

/// Solve the steady-state conductor temperature for `current` amperes.
///
/// Deterministic for identical inputs and bounded by
/// `settings.max_equilibrium_iterations`.
pub fn solve_equilibrium<C: ConvectiveFlux + ?Sized>(
    balance: &HeatBalance<'_, C>,
    current: f64,
    settings: &SolverSettings,
) -> ThermalState {
    let current = current.max(0.0);
    let upper = balance.temperature_limit();
    // Ambient above the limit collapses the interval onto the limit
    let lower = (balance.air_temperature - settings.lower_margin).min(upper);

    let mut temperature = clamp_between(
        balance.air_temperature + settings.initial_offset,
        lower,
        upper,
    );
    let mut iterations = 0;

    while iterations < settings.max_equilibrium_iterations {
        iterations += 1;

        let residual = balance.residual(current, temperature);
        let slope = balance
            .outflow_slope(temperature, settings.probe_step)
            .max(settings.slope_floor);
        let step = residual / slope;
        let next = clamp_between(temperature + step, lower, upper);

        trace!(iterations, temperature, residual, step, "equilibrium update");

        // Pinned at a bound: every further update reproduces the same value
        let pinned = next == temperature;
        temperature = next;
        if step.abs() < settings.convergence_step || pinned {
            break;
        }
    }

    let saturation = if temperature >= upper {
        Saturation::Limit
    } else if temperature <= lower {
        Saturation::Floor
    } else {
        Saturation::None
    };

    if saturation != Saturation::None {
        debug!(
            current,
            temperature,
            iterations,
            ?saturation,
            "equilibrium pinned at clamp bound"
        );
    }

    ThermalState {
        temperature,
        iterations,
        saturation,
    }
}
