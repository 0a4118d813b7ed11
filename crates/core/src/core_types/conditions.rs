//! Environmental state consumed by one evaluation

use crate::core_types::units::{Amperes, Celsius, MetersPerSecond, WattsPerSquareMeter};
use crate::physics::ConvectionModel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected boundary input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A quantity that must be zero or positive was negative
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    /// A quantity was NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Air temperature below absolute zero
    #[error("air temperature {value}°C is below absolute zero")]
    BelowAbsoluteZero { value: f64 },
}

/// Ambient conditions and line loading for a single evaluation
///
/// Values are taken as given; the engine floors negative wind, irradiance and
/// current to zero on its own. Use [`EnvironmentalState::validated`] at an
/// input boundary that should reject such values instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalState {
    /// Ambient air temperature
    pub air_temperature: Celsius,
    /// Mean wind speed
    pub mean_wind: MetersPerSecond,
    /// Gust wind speed
    pub gust_wind: MetersPerSecond,
    /// Solar irradiance
    pub irradiance: WattsPerSquareMeter,
    /// Conductor current
    pub current: Amperes,
    /// Convective heat-loss model used for this evaluation
    pub convection: ConvectionModel,
}

impl EnvironmentalState {
    /// Build a state without range checks.
    pub fn new(
        air_temperature: Celsius,
        mean_wind: MetersPerSecond,
        gust_wind: MetersPerSecond,
        irradiance: WattsPerSquareMeter,
        current: Amperes,
        convection: ConvectionModel,
    ) -> Self {
        Self {
            air_temperature,
            mean_wind,
            gust_wind,
            irradiance,
            current,
            convection,
        }
    }

    /// Build a state from raw numbers, rejecting out-of-domain values.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if any value is non-finite, if wind, irradiance
    /// or current is negative, or if the air temperature is below absolute zero.
    pub fn validated(
        air_temperature: f64,
        mean_wind: f64,
        gust_wind: f64,
        irradiance: f64,
        current: f64,
        convection: ConvectionModel,
    ) -> Result<Self, InputError> {
        if !air_temperature.is_finite() {
            return Err(InputError::NonFinite {
                field: "air_temperature",
            });
        }
        if air_temperature < *Celsius::ABSOLUTE_ZERO {
            return Err(InputError::BelowAbsoluteZero {
                value: air_temperature,
            });
        }
        for (field, value) in [
            ("mean_wind", mean_wind),
            ("gust_wind", gust_wind),
            ("irradiance", irradiance),
            ("current", current),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
        }

        Ok(Self::new(
            Celsius::new(air_temperature),
            MetersPerSecond::new(mean_wind),
            MetersPerSecond::new(gust_wind),
            WattsPerSquareMeter::new(irradiance),
            Amperes::new(current),
            convection,
        ))
    }

    /// Same conditions with a different line current
    pub fn with_current(self, current: Amperes) -> Self {
        Self { current, ..self }
    }

    /// Same conditions evaluated with a different convection model
    pub fn with_convection(self, convection: ConvectionModel) -> Self {
        Self { convection, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_accepts_in_domain_values() {
        let state =
            EnvironmentalState::validated(-12.0, 2.0, 8.0, 0.0, 450.0, ConvectionModel::Split)
                .unwrap();
        assert_eq!(*state.air_temperature, -12.0);
        assert_eq!(*state.gust_wind, 8.0);
        assert_eq!(state.convection, ConvectionModel::Split);
    }

    #[test]
    fn test_validated_rejects_negative_wind() {
        let err =
            EnvironmentalState::validated(20.0, -1.0, 3.0, 500.0, 0.0, ConvectionModel::Heuristic)
                .unwrap_err();
        assert_eq!(
            err,
            InputError::Negative {
                field: "mean_wind",
                value: -1.0
            }
        );
        assert_eq!(err.to_string(), "mean_wind must not be negative (got -1)");
    }

    #[test]
    fn test_validated_rejects_non_finite() {
        let err = EnvironmentalState::validated(
            20.0,
            1.0,
            3.0,
            f64::NAN,
            0.0,
            ConvectionModel::Heuristic,
        )
        .unwrap_err();
        assert_eq!(err, InputError::NonFinite { field: "irradiance" });

        let err = EnvironmentalState::validated(
            f64::INFINITY,
            1.0,
            3.0,
            0.0,
            0.0,
            ConvectionModel::Heuristic,
        )
        .unwrap_err();
        assert_eq!(
            err,
            InputError::NonFinite {
                field: "air_temperature"
            }
        );
    }

    #[test]
    fn test_validated_rejects_below_absolute_zero() {
        let err =
            EnvironmentalState::validated(-300.0, 1.0, 1.0, 0.0, 0.0, ConvectionModel::Heuristic)
                .unwrap_err();
        assert!(matches!(err, InputError::BelowAbsoluteZero { .. }));
    }

    #[test]
    fn test_with_current_keeps_ambient() {
        let base =
            EnvironmentalState::validated(0.0, 2.0, 8.0, 400.0, 0.0, ConvectionModel::Heuristic)
                .unwrap();
        let loaded = base.with_current(Amperes::new(600.0));
        assert_eq!(*loaded.current, 600.0);
        assert_eq!(loaded.air_temperature, base.air_temperature);
        assert_eq!(loaded.with_current(Amperes::ZERO), base);
    }
}
