//! Illustrative sag indicator
//!
//! NOT a catenary or ruling-span calculation. This is a bounded, monotone
//! display metric: it grows linearly with conductor temperature, shrinks with
//! wind, and is clamped to a fixed band. Use it to drive a visual cue only.

use serde::{Deserialize, Serialize};

/// Parameters of the sag display metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SagParameters {
    /// Metric value at the reference temperature in still air
    pub reference_sag: f64,
    /// Conductor temperature of `reference_sag` (°C)
    pub reference_temperature: f64,
    /// Relative growth per °C above the reference temperature
    pub thermal_coefficient: f64,
    /// Reduction per m/s of effective wind
    pub wind_relief: f64,
    /// Lower clamp
    pub min_sag: f64,
    /// Upper clamp
    pub max_sag: f64,
}

impl Default for SagParameters {
    fn default() -> Self {
        Self {
            reference_sag: 12.0,
            reference_temperature: 25.0,
            thermal_coefficient: 0.0045,
            wind_relief: 0.15,
            min_sag: 8.0,
            max_sag: 18.0,
        }
    }
}

/// `clamp(sag_ref × (1 + k × (Tc − T_ref)) − c × v_eff, min, max)`
pub fn estimate_sag(params: &SagParameters, conductor_temperature: f64, effective_wind: f64) -> f64 {
    let thermal = params.reference_sag
        * (1.0 + params.thermal_coefficient * (conductor_temperature - params.reference_temperature));
    let sag = thermal - params.wind_relief * effective_wind.max(0.0);
    sag.max(params.min_sag).min(params.max_sag)
}
