//! Convective heat loss models
//!
//! Two interchangeable algorithms share the [`ConvectiveFlux`] contract:
//!
//! - **Heuristic**: one wind-dependent film coefficient,
//!   `h(v) = base + gain × √(max(0, v) + offset)`, applied over the perimeter.
//! - **Split**: separate natural and forced terms in the style of the
//!   IEEE 738 correlations, `Cn·ΔT^n·D^0.75 + Cf·v^m·ΔT^n·D^0.75`.
//!
//! The equilibrium and ampacity solvers only see the trait, so either
//! variant can be selected per evaluation.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Contract shared by every convective heat-loss algorithm.
///
/// All fluxes are per metre of conductor (W/m).
pub trait ConvectiveFlux: Send + Sync {
    /// Heat carried away by the air for the given effective wind (m/s),
    /// air temperature and conductor temperature (°C).
    fn convective_flux(
        &self,
        effective_wind: f64,
        air_temperature: f64,
        conductor_temperature: f64,
    ) -> f64;

    /// Analytic derivative of [`ConvectiveFlux::convective_flux`] with
    /// respect to conductor temperature.
    ///
    /// `None` means the variant has no closed form and the solver probes the
    /// outflow numerically instead.
    fn convective_slope(&self, _effective_wind: f64) -> Option<f64> {
        None
    }
}

/// Selector for the convective algorithm of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvectionModel {
    /// Single empirical film coefficient
    #[default]
    Heuristic,
    /// Natural plus forced terms
    Split,
}

impl ConvectionModel {
    /// Every selectable model, in declaration order
    pub const ALL: [ConvectionModel; 2] = [ConvectionModel::Heuristic, ConvectionModel::Split];

    /// Stable lower-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            ConvectionModel::Heuristic => "heuristic",
            ConvectionModel::Split => "split",
        }
    }
}

impl fmt::Display for ConvectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConvectionModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" => Ok(ConvectionModel::Heuristic),
            "split" => Ok(ConvectionModel::Split),
            other => Err(format!(
                "unknown convection model '{other}' (expected 'heuristic' or 'split')"
            )),
        }
    }
}

/// Coefficients of the heuristic film-coefficient model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicCoefficients {
    /// Still-air film coefficient (W/(m²·K))
    pub base: f64,
    /// Wind gain on the square-root term (W/(m²·K)/√(m/s))
    pub gain: f64,
    /// Offset added to the wind speed under the square root (m/s)
    pub wind_offset: f64,
}

impl Default for HeuristicCoefficients {
    fn default() -> Self {
        Self {
            base: 5.0,
            gain: 8.0,
            wind_offset: 0.1,
        }
    }
}

/// Coefficients of the split natural/forced model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitCoefficients {
    /// Natural convection coefficient `Cn`
    pub natural: f64,
    /// Forced convection coefficient `Cf`
    pub forced: f64,
    /// Exponent `n` on the conductor-air temperature difference
    pub delta_exponent: f64,
    /// Exponent `m` on the effective wind speed
    pub wind_exponent: f64,
    /// Exponent on the conductor diameter
    pub diameter_exponent: f64,
}

impl Default for SplitCoefficients {
    fn default() -> Self {
        Self {
            natural: 3.645,
            forced: 6.0,
            delta_exponent: 1.25,
            wind_exponent: 0.6,
            diameter_exponent: 0.75,
        }
    }
}

/// Heuristic model bound to a conductor's perimeter
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicConvection {
    coefficients: HeuristicCoefficients,
    perimeter: f64,
}

impl HeuristicConvection {
    pub fn new(coefficients: HeuristicCoefficients, diameter: f64) -> Self {
        Self {
            coefficients,
            perimeter: PI * diameter,
        }
    }

    /// Film coefficient h(v) in W/(m²·K)
    #[inline]
    pub fn film_coefficient(&self, effective_wind: f64) -> f64 {
        let c = &self.coefficients;
        c.base + c.gain * (effective_wind.max(0.0) + c.wind_offset).sqrt()
    }
}

impl ConvectiveFlux for HeuristicConvection {
    fn convective_flux(
        &self,
        effective_wind: f64,
        air_temperature: f64,
        conductor_temperature: f64,
    ) -> f64 {
        self.film_coefficient(effective_wind)
            * (conductor_temperature - air_temperature)
            * self.perimeter
    }

    fn convective_slope(&self, effective_wind: f64) -> Option<f64> {
        Some(self.film_coefficient(effective_wind) * self.perimeter)
    }
}

/// Split natural/forced model bound to a conductor's diameter
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConvection {
    coefficients: SplitCoefficients,
    diameter_factor: f64,
}

impl SplitConvection {
    pub fn new(coefficients: SplitCoefficients, diameter: f64) -> Self {
        let diameter_factor = diameter.powf(coefficients.diameter_exponent);
        Self {
            coefficients,
            diameter_factor,
        }
    }

    /// Natural (buoyancy-driven) part of the loss in W/m
    #[inline]
    pub fn natural_flux(&self, air_temperature: f64, conductor_temperature: f64) -> f64 {
        let delta = (conductor_temperature - air_temperature).max(0.0);
        self.coefficients.natural
            * delta.powf(self.coefficients.delta_exponent)
            * self.diameter_factor
    }

    /// Forced (wind-driven) part of the loss in W/m
    #[inline]
    pub fn forced_flux(
        &self,
        effective_wind: f64,
        air_temperature: f64,
        conductor_temperature: f64,
    ) -> f64 {
        let c = &self.coefficients;
        let delta = (conductor_temperature - air_temperature).max(0.0);
        c.forced
            * effective_wind.max(0.0).powf(c.wind_exponent)
            * delta.powf(c.delta_exponent)
            * self.diameter_factor
    }
}

impl ConvectiveFlux for SplitConvection {
    fn convective_flux(
        &self,
        effective_wind: f64,
        air_temperature: f64,
        conductor_temperature: f64,
    ) -> f64 {
        self.natural_flux(air_temperature, conductor_temperature)
            + self.forced_flux(effective_wind, air_temperature, conductor_temperature)
    }
}

/// Tagged variant over the bound convection algorithms
#[derive(Debug, Clone, PartialEq)]
pub enum Convection {
    Heuristic(HeuristicConvection),
    Split(SplitConvection),
}

impl Convection {
    /// Which selector produced this variant
    pub fn model(&self) -> ConvectionModel {
        match self {
            Convection::Heuristic(_) => ConvectionModel::Heuristic,
            Convection::Split(_) => ConvectionModel::Split,
        }
    }
}

impl ConvectiveFlux for Convection {
    #[inline]
    fn convective_flux(
        &self,
        effective_wind: f64,
        air_temperature: f64,
        conductor_temperature: f64,
    ) -> f64 {
        match self {
            Convection::Heuristic(m) => {
                m.convective_flux(effective_wind, air_temperature, conductor_temperature)
            }
            Convection::Split(m) => {
                m.convective_flux(effective_wind, air_temperature, conductor_temperature)
            }
        }
    }

    #[inline]
    fn convective_slope(&self, effective_wind: f64) -> Option<f64> {
        match self {
            Convection::Heuristic(m) => m.convective_slope(effective_wind),
            Convection::Split(m) => m.convective_slope(effective_wind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const D: f64 = 0.0281;

    #[test]
    fn test_heuristic_film_coefficient() {
        let m = HeuristicConvection::new(HeuristicCoefficients::default(), D);
        // h(0) = 5 + 8 × √0.1
        assert_relative_eq!(m.film_coefficient(0.0), 5.0 + 8.0 * 0.1_f64.sqrt());
        // negative wind floored before the square root
        assert_eq!(m.film_coefficient(-4.0), m.film_coefficient(0.0));
    }

    #[test]
    fn test_heuristic_flux_and_slope() {
        let m = HeuristicConvection::new(HeuristicCoefficients::default(), D);
        let h = m.film_coefficient(2.0);
        let flux = m.convective_flux(2.0, 20.0, 60.0);
        assert_relative_eq!(flux, h * 40.0 * PI * D, epsilon = 1e-12);
        let slope = m.convective_slope(2.0).unwrap();
        assert_relative_eq!(slope, flux / 40.0, epsilon = 1e-12);
    }

    #[test]
    fn test_split_floors_negative_delta() {
        let m = SplitConvection::new(SplitCoefficients::default(), D);
        let flux = m.convective_flux(3.0, 30.0, 25.0);
        assert_eq!(flux, 0.0);
        assert!(!flux.is_nan());
    }

    #[test]
    fn test_split_terms() {
        let m = SplitConvection::new(SplitCoefficients::default(), D);
        let natural = m.natural_flux(20.0, 70.0);
        assert_relative_eq!(
            natural,
            3.645 * 50.0_f64.powf(1.25) * D.powf(0.75),
            epsilon = 1e-9
        );
        assert_eq!(m.forced_flux(0.0, 20.0, 70.0), 0.0);
        assert!(m.forced_flux(4.0, 20.0, 70.0) > m.forced_flux(1.0, 20.0, 70.0));
        assert!(m.convective_slope(1.0).is_none());
    }

    #[test]
    fn test_models_share_contract() {
        let models = [
            Convection::Heuristic(HeuristicConvection::new(
                HeuristicCoefficients::default(),
                D,
            )),
            Convection::Split(SplitConvection::new(SplitCoefficients::default(), D)),
        ];
        for m in &models {
            let still = m.convective_flux(0.0, 20.0, 60.0);
            let windy = m.convective_flux(5.0, 20.0, 60.0);
            assert!(still > 0.0, "{} still-air loss", m.model());
            assert!(windy > still, "{} wind must cool", m.model());
        }
    }

    #[test]
    fn test_model_selector_parsing() {
        assert_eq!(
            "Heuristic".parse::<ConvectionModel>(),
            Ok(ConvectionModel::Heuristic)
        );
        assert_eq!(" split ".parse::<ConvectionModel>(), Ok(ConvectionModel::Split));
        assert!("laminar".parse::<ConvectionModel>().is_err());
        assert!("ieee".parse::<ConvectionModel>().is_err());
        assert_eq!(ConvectionModel::Split.to_string(), "split");
    }
}
