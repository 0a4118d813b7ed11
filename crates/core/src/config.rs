//! Model configuration
//!
//! Every engineering constant of the engine lives here so a calibrated
//! conductor or convection fit can be supplied without touching solver code.
//! All sections use `#[serde(default)]`, so a TOML document only needs the
//! fields it overrides:
//!
//! ```
//! use line_rating_core::config::ModelConfig;
//!
//! let config = ModelConfig::from_toml_str(
//!     r#"
//!     [conductor]
//!     temperature_limit = 75.0
//!
//!     [split]
//!     forced = 5.5
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.conductor.temperature_limit, 75.0);
//! assert_eq!(config.conductor.diameter, 0.0281);
//! assert_eq!(config.split.forced, 5.5);
//! ```

use crate::assessment::SagParameters;
use crate::core_types::units::{Amperes, Celsius, MetersPerSecond, WattsPerSquareMeter};
use crate::core_types::{ConductorParameters, EnvironmentalState};
use crate::physics::{
    Convection, ConvectionModel, HeuristicCoefficients, HeuristicConvection, SplitCoefficients,
    SplitConvection,
};
use crate::solver::SolverSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading or validation failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML was malformed or had wrongly typed fields
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A parameter is outside its physical range
    #[error("invalid parameter {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

/// Fixed ambient condition whose ampacity is the 100 % rating baseline.
///
/// Deliberately conservative: hot, nearly still air and strong sun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceCondition {
    /// Air temperature (°C)
    pub air_temperature: f64,
    /// Wind speed, used for both mean and gust (m/s)
    pub wind_speed: f64,
    /// Solar irradiance (W/m²)
    pub irradiance: f64,
}

impl Default for ReferenceCondition {
    fn default() -> Self {
        Self {
            air_temperature: 35.0,
            wind_speed: 0.6,
            irradiance: 800.0,
        }
    }
}

impl ReferenceCondition {
    /// The reference as an unloaded environmental state for `model`
    pub fn state(&self, model: ConvectionModel) -> EnvironmentalState {
        EnvironmentalState::new(
            Celsius::from(self.air_temperature),
            MetersPerSecond::new(self.wind_speed),
            MetersPerSecond::new(self.wind_speed),
            WattsPerSquareMeter::new(self.irradiance),
            Amperes::ZERO,
            model,
        )
    }
}

/// Complete set of engine constants
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub conductor: ConductorParameters,
    pub heuristic: HeuristicCoefficients,
    pub split: SplitCoefficients,
    pub solver: SolverSettings,
    pub reference: ReferenceCondition,
    pub sag: SagParameters,
}

impl ModelConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidParameter`] if validation fails.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ModelConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`ModelConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Serialize back to TOML (e.g. to write out a template).
    ///
    /// # Errors
    ///
    /// Returns the serializer error if a value cannot be represented in TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Convection algorithm for `model`, bound to this conductor's geometry
    pub fn convection(&self, model: ConvectionModel) -> Convection {
        match model {
            ConvectionModel::Heuristic => Convection::Heuristic(HeuristicConvection::new(
                self.heuristic.clone(),
                self.conductor.diameter,
            )),
            ConvectionModel::Split => Convection::Split(SplitConvection::new(
                self.split.clone(),
                self.conductor.diameter,
            )),
        }
    }

    /// Check that every constant is finite and physically meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.conductor;
        positive("conductor.diameter", c.diameter)?;
        positive("conductor.resistance_at_reference", c.resistance_at_reference)?;
        finite("conductor.reference_temperature", c.reference_temperature)?;
        non_negative("conductor.resistance_coefficient", c.resistance_coefficient)?;
        unit_interval("conductor.emissivity", c.emissivity)?;
        unit_interval("conductor.absorptivity", c.absorptivity)?;
        finite("conductor.temperature_limit", c.temperature_limit)?;
        if c.temperature_limit <= *Celsius::ABSOLUTE_ZERO {
            return Err(invalid(
                "conductor.temperature_limit",
                "must be above absolute zero",
            ));
        }

        let h = &self.heuristic;
        non_negative("heuristic.base", h.base)?;
        non_negative("heuristic.gain", h.gain)?;
        non_negative("heuristic.wind_offset", h.wind_offset)?;

        let s = &self.split;
        non_negative("split.natural", s.natural)?;
        non_negative("split.forced", s.forced)?;
        positive("split.delta_exponent", s.delta_exponent)?;
        non_negative("split.wind_exponent", s.wind_exponent)?;
        finite("split.diameter_exponent", s.diameter_exponent)?;

        let v = &self.solver;
        if v.max_equilibrium_iterations == 0 {
            return Err(invalid(
                "solver.max_equilibrium_iterations",
                "must be at least 1",
            ));
        }
        positive("solver.convergence_step", v.convergence_step)?;
        positive("solver.slope_floor", v.slope_floor)?;
        positive("solver.probe_step", v.probe_step)?;
        finite("solver.initial_offset", v.initial_offset)?;
        non_negative("solver.lower_margin", v.lower_margin)?;
        positive("solver.limit_tolerance", v.limit_tolerance)?;
        positive("solver.initial_current_guess", v.initial_current_guess)?;
        if !(v.bracket_growth_factor.is_finite() && v.bracket_growth_factor > 1.0) {
            return Err(invalid(
                "solver.bracket_growth_factor",
                format!("must be greater than 1 (got {})", v.bracket_growth_factor),
            ));
        }
        positive("solver.min_bracket_width", v.min_bracket_width)?;

        let r = &self.reference;
        finite("reference.air_temperature", r.air_temperature)?;
        if r.air_temperature < *Celsius::ABSOLUTE_ZERO {
            return Err(invalid(
                "reference.air_temperature",
                "must be above absolute zero",
            ));
        }
        non_negative("reference.wind_speed", r.wind_speed)?;
        non_negative("reference.irradiance", r.irradiance)?;

        let g = &self.sag;
        finite("sag.reference_sag", g.reference_sag)?;
        finite("sag.reference_temperature", g.reference_temperature)?;
        finite("sag.thermal_coefficient", g.thermal_coefficient)?;
        finite("sag.wind_relief", g.wind_relief)?;
        finite("sag.min_sag", g.min_sag)?;
        finite("sag.max_sag", g.max_sag)?;
        if g.min_sag > g.max_sag {
            return Err(invalid(
                "sag.min_sag",
                format!("must not exceed sag.max_sag ({})", g.max_sag),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidParameter {
        field,
        reason: reason.into(),
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite (got {value})")))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive (got {value})")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must not be negative (got {value})")))
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("must lie in [0, 1] (got {value})")))
    }
}
