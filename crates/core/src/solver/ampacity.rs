//! Ampacity search
//!
//! Bisection on current, using [`solve_equilibrium`] as the oracle. The search
//! assumes conductor temperature is non-decreasing in current for fixed
//! ambient conditions; this is not checked at runtime. It holds for the
//! supplied convection models because resistance, and so Joule heating, only
//! grows with current and temperature (see the monotonicity tests).
//!
//! Solved temperatures never exceed the limit, so a probe "exceeds the limit"
//! when its equilibrium is pinned there.

use super::equilibrium::solve_equilibrium;
use super::SolverSettings;
use crate::physics::{ConvectiveFlux, HeatBalance};
use serde::Serialize;
use tracing::{debug, warn};

/// How the ampacity search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AmpacityOutcome {
    /// Already at the limit with no current; the ampacity is zero
    NoMargin,
    /// A probe landed within tolerance below the limit
    Converged,
    /// Bracket narrowed below the minimum width; its midpoint is returned
    BracketCollapsed,
    /// Bracket growth ran out before reaching the limit; the returned current
    /// is a lower bound on the true ampacity
    BracketExhausted,
}

/// Result of one ampacity search
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmpacityResult {
    /// Maximum sustainable current (A), never negative
    pub current: f64,
    pub outcome: AmpacityOutcome,
}

impl AmpacityResult {
    fn zero() -> Self {
        Self {
            current: 0.0,
            outcome: AmpacityOutcome::NoMargin,
        }
    }
}

/// Largest current whose equilibrium temperature reaches the conductor limit.
///
/// Returns zero when the unloaded conductor is already within
/// `settings.limit_tolerance` of the limit (solar gain or hot ambient alone
/// use up the thermal margin).
pub fn solve_ampacity<C: ConvectiveFlux + ?Sized>(
    balance: &HeatBalance<'_, C>,
    settings: &SolverSettings,
) -> AmpacityResult {
    let limit = balance.temperature_limit();
    let tolerance = settings.limit_tolerance;

    let unloaded = solve_equilibrium(balance, 0.0, settings);
    if limit - unloaded.temperature <= tolerance {
        debug!(
            air_temperature = balance.air_temperature,
            unloaded_temperature = unloaded.temperature,
            "no thermal margin at zero current"
        );
        return AmpacityResult::zero();
    }

    // Grow the upper bracket until it drives the conductor to the limit
    let mut upper = settings.initial_current_guess;
    let mut growth_steps = 0;
    let mut bracketed = true;
    while !solve_equilibrium(balance, upper, settings).is_at_limit() {
        if growth_steps == settings.max_bracket_growths {
            bracketed = false;
            warn!(
                upper,
                growth_steps,
                air_temperature = balance.air_temperature,
                effective_wind = balance.effective_wind,
                "ampacity bracket exhausted below the temperature limit"
            );
            break;
        }
        upper *= settings.bracket_growth_factor;
        growth_steps += 1;
    }

    let mut lower = 0.0_f64;
    for _ in 0..settings.max_bisection_iterations {
        if upper - lower < settings.min_bracket_width {
            break;
        }
        let mid = 0.5 * (lower + upper);
        let state = solve_equilibrium(balance, mid, settings);
        if state.is_at_limit() {
            upper = mid;
        } else if limit - state.temperature <= tolerance {
            return AmpacityResult {
                current: mid,
                outcome: AmpacityOutcome::Converged,
            };
        } else {
            lower = mid;
        }
    }

    AmpacityResult {
        current: 0.5 * (lower + upper),
        outcome: if bracketed {
            AmpacityOutcome::BracketCollapsed
        } else {
            AmpacityOutcome::BracketExhausted
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::ConductorParameters;
    use crate::physics::{
        HeuristicCoefficients, HeuristicConvection, SplitCoefficients, SplitConvection,
    };

    fn heuristic() -> HeuristicConvection {
        HeuristicConvection::new(HeuristicCoefficients::default(), 0.0281)
    }

    fn split() -> SplitConvection {
        SplitConvection::new(SplitCoefficients::default(), 0.0281)
    }

    #[test]
    fn test_reference_condition_round_trip() {
        let conductor = ConductorParameters::drake();
        let settings = SolverSettings::default();
        let h = heuristic();
        let balance = HeatBalance::new(&conductor, &h, 35.0, 0.6, 800.0);
        let result = solve_ampacity(&balance, &settings);
        assert!(result.current > 500.0 && result.current < 1200.0);
        let state = solve_equilibrium(&balance, result.current, &settings);
        assert!((state.temperature - 80.0).abs() < 0.1);
    }

    #[test]
    fn test_hot_ambient_has_no_margin() {
        let conductor = ConductorParameters::drake();
        let settings = SolverSettings::default();
        let s = split();
        let balance = HeatBalance::new(&conductor, &s, 85.0, 1.0, 0.0);
        let result = solve_ampacity(&balance, &settings);
        assert_eq!(result.current, 0.0);
        assert_eq!(result.outcome, AmpacityOutcome::NoMargin);
    }

    #[test]
    fn test_ampacity_is_non_negative() {
        let conductor = ConductorParameters::drake();
        let settings = SolverSettings::default();
        let h = heuristic();
        for air in [-40.0, 0.0, 40.0, 79.0, 120.0] {
            let balance = HeatBalance::new(&conductor, &h, air, 0.0, 1200.0);
            assert!(solve_ampacity(&balance, &settings).current >= 0.0);
        }
    }

    #[test]
    fn test_tiny_growth_budget_reports_exhaustion() {
        let conductor = ConductorParameters::drake();
        let settings = SolverSettings {
            initial_current_guess: 100.0,
            max_bracket_growths: 1,
            ..SolverSettings::default()
        };
        let h = heuristic();
        let balance = HeatBalance::new(&conductor, &h, -20.0, 15.0, 0.0);
        let result = solve_ampacity(&balance, &settings);
        assert_eq!(result.outcome, AmpacityOutcome::BracketExhausted);
        assert!(result.current <= 150.0);
        assert!(result.current > 149.0);
    }

    #[test]
    fn test_cold_calm_round_trip_lands_on_limit() {
        let conductor = ConductorParameters::drake();
        let settings = SolverSettings::default();
        let h = heuristic();
        let s = split();
        let models: [&dyn ConvectiveFlux; 2] = [&h, &s];
        for convection in models {
            for (air, irradiance) in [(-50.0, 0.0), (-50.0, 600.0), (-48.0, 0.0), (-45.0, 600.0)] {
                let balance = HeatBalance::new(&conductor, convection, air, 0.0, irradiance);
                let result = solve_ampacity(&balance, &settings);
                assert_ne!(result.outcome, AmpacityOutcome::NoMargin);
                let state = solve_equilibrium(&balance, result.current, &settings);
                assert!(
                    (state.temperature - 80.0).abs() < 0.1,
                    "air {air} sun {irradiance}: T({}) = {} ({:?})",
                    result.current,
                    state.temperature,
                    result.outcome
                );
            }
        }
    }
}
