//! Operating risk classification
//!
//! Ordered rule table, first match wins:
//! 1. Critical: loading ≥ 98 % of ampacity, or conductor ≥ 78 °C
//! 2. Elevated: hot still air, hot conductor in still air, or loading ≥ 90 %
//! 3. Optimal: cold, windy and loading ≤ 70 %
//! 4. Normal: everything else
//!
//! With zero ampacity any current (including none) counts as ≥ 98 % loading,
//! so a line with no thermal margin is always Critical.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of ampacity at or above which loading is critical
pub const CRITICAL_LOAD_FRACTION: f64 = 0.98;
/// Conductor temperature at or above which the state is critical (°C)
pub const CRITICAL_CONDUCTOR_TEMPERATURE: f64 = 78.0;
/// Fraction of ampacity at or above which loading is elevated
pub const ELEVATED_LOAD_FRACTION: f64 = 0.9;
/// Air temperature above which still air is a concern (°C)
pub const HOT_AIR_TEMPERATURE: f64 = 30.0;
/// Conductor temperature above which still air is a concern (°C)
pub const HOT_CONDUCTOR_TEMPERATURE: f64 = 60.0;
/// Effective wind below which the air counts as still (m/s)
pub const STILL_AIR_WIND: f64 = 2.0;
/// Air temperature below which cooling is optimal (°C)
pub const COLD_AIR_TEMPERATURE: f64 = 5.0;
/// Effective wind above which cooling is optimal (m/s)
pub const BRISK_WIND: f64 = 3.0;
/// Loading fraction at or below which cold windy conditions are optimal
pub const OPTIMAL_LOAD_FRACTION: f64 = 0.7;

/// Operating risk of the line under the evaluated conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Normal,
    Elevated,
    Critical,
    Optimal,
}

impl RiskLevel {
    /// Stable lower-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Normal => "normal",
            RiskLevel::Elevated => "elevated",
            RiskLevel::Critical => "critical",
            RiskLevel::Optimal => "optimal",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantities the risk rules look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskInputs {
    /// Line current (A)
    pub current: f64,
    /// Ampacity under the same conditions (A)
    pub ampacity: f64,
    /// Solved conductor temperature (°C)
    pub conductor_temperature: f64,
    /// Air temperature (°C)
    pub air_temperature: f64,
    /// Effective wind (m/s)
    pub effective_wind: f64,
}

/// Classify operating risk; rules are evaluated in order and the first match wins.
pub fn classify_risk(inputs: &RiskInputs) -> RiskLevel {
    let RiskInputs {
        current,
        ampacity,
        conductor_temperature,
        air_temperature,
        effective_wind,
    } = *inputs;
    let still_air = effective_wind < STILL_AIR_WIND;

    if current >= CRITICAL_LOAD_FRACTION * ampacity
        || conductor_temperature >= CRITICAL_CONDUCTOR_TEMPERATURE
    {
        return RiskLevel::Critical;
    }

    if (air_temperature > HOT_AIR_TEMPERATURE && still_air)
        || (conductor_temperature > HOT_CONDUCTOR_TEMPERATURE && still_air)
        || current >= ELEVATED_LOAD_FRACTION * ampacity
    {
        return RiskLevel::Elevated;
    }

    if air_temperature < COLD_AIR_TEMPERATURE
        && effective_wind > BRISK_WIND
        && current <= OPTIMAL_LOAD_FRACTION * ampacity
    {
        return RiskLevel::Optimal;
    }

    RiskLevel::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(current: f64, conductor: f64, air: f64, wind: f64) -> RiskInputs {
        RiskInputs {
            current,
            ampacity: 1000.0,
            conductor_temperature: conductor,
            air_temperature: air,
            effective_wind: wind,
        }
    }

    #[test]
    fn test_critical_by_loading() {
        assert_eq!(
            classify_risk(&inputs(980.0, 50.0, 20.0, 5.0)),
            RiskLevel::Critical
        );
        assert_eq!(
            classify_risk(&inputs(979.0, 50.0, 20.0, 5.0)),
            RiskLevel::Elevated
        );
    }

    #[test]
    fn test_critical_by_temperature() {
        assert_eq!(
            classify_risk(&inputs(100.0, 78.0, 20.0, 5.0)),
            RiskLevel::Critical
        );
    }

    #[test]
    fn test_critical_beats_optimal() {
        // Cold and windy, but fully loaded
        assert_eq!(
            classify_risk(&inputs(1000.0, 40.0, -5.0, 8.0)),
            RiskLevel::Critical
        );
    }

    #[test]
    fn test_elevated_rules() {
        // Hot still air
        assert_eq!(
            classify_risk(&inputs(100.0, 40.0, 31.0, 1.9)),
            RiskLevel::Elevated
        );
        // Hot conductor in still air
        assert_eq!(
            classify_risk(&inputs(100.0, 61.0, 20.0, 1.0)),
            RiskLevel::Elevated
        );
        // Same conductor with wind is fine
        assert_eq!(
            classify_risk(&inputs(100.0, 61.0, 20.0, 2.0)),
            RiskLevel::Normal
        );
        // Heavy loading
        assert_eq!(
            classify_risk(&inputs(900.0, 50.0, 10.0, 6.0)),
            RiskLevel::Elevated
        );
    }

    #[test]
    fn test_optimal_rule() {
        assert_eq!(
            classify_risk(&inputs(700.0, 20.0, 4.9, 3.1)),
            RiskLevel::Optimal
        );
        assert_eq!(
            classify_risk(&inputs(701.0, 20.0, 4.9, 3.1)),
            RiskLevel::Normal
        );
        assert_eq!(
            classify_risk(&inputs(500.0, 20.0, 5.0, 3.1)),
            RiskLevel::Normal
        );
        assert_eq!(
            classify_risk(&inputs(500.0, 20.0, 0.0, 3.0)),
            RiskLevel::Normal
        );
    }

    #[test]
    fn test_zero_ampacity_is_critical() {
        let no_margin = RiskInputs {
            current: 0.0,
            ampacity: 0.0,
            conductor_temperature: 80.0,
            air_temperature: 40.0,
            effective_wind: 1.0,
        };
        assert_eq!(classify_risk(&no_margin), RiskLevel::Critical);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskLevel::Optimal.to_string(), "optimal");
        assert_eq!(RiskLevel::Critical.as_str(), "critical");
    }
}
