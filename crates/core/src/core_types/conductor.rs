//! Conductor parameters
//!
//! Geometry, electrical and surface properties of the modelled conductor.
//! The values are illustrative constants, not datasheet figures for any
//! specific product; presets exist so a calibrated set can be swapped in
//! without touching solver code.

use serde::{Deserialize, Serialize};

/// Physical description of a bare overhead conductor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConductorParameters {
    /// Human-readable preset name
    pub name: String,
    /// Outside diameter (m)
    pub diameter: f64,
    /// AC resistance per metre at `reference_temperature` (Ω/m)
    pub resistance_at_reference: f64,
    /// Temperature at which `resistance_at_reference` applies (°C)
    pub reference_temperature: f64,
    /// Linear temperature coefficient of resistance (1/°C)
    pub resistance_coefficient: f64,
    /// Thermal emissivity of the surface (0-1)
    pub emissivity: f64,
    /// Solar absorptivity of the surface (0-1)
    pub absorptivity: f64,
    /// Maximum allowed conductor temperature (°C)
    pub temperature_limit: f64,
}

impl ConductorParameters {
    /// 28.1 mm ACSR-style conductor, moderately weathered surface.
    ///
    /// This is the default conductor of the engine.
    pub fn drake() -> Self {
        Self {
            name: "Drake".to_string(),
            diameter: 0.0281,
            resistance_at_reference: 7.28e-5,
            reference_temperature: 20.0,
            resistance_coefficient: 0.00403,
            emissivity: 0.8,
            absorptivity: 0.8,
            temperature_limit: 80.0,
        }
    }

    /// 18.3 mm ACSR-style distribution conductor.
    pub fn linnet() -> Self {
        Self {
            name: "Linnet".to_string(),
            diameter: 0.0183,
            resistance_at_reference: 1.6e-4,
            reference_temperature: 20.0,
            resistance_coefficient: 0.00404,
            emissivity: 0.7,
            absorptivity: 0.7,
            temperature_limit: 75.0,
        }
    }
}

impl Default for ConductorParameters {
    fn default() -> Self {
        Self::drake()
    }
}
