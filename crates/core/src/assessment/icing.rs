//! Icing and wet-snow likelihood
//!
//! A rule table over air temperature, effective wind and irradiance. It flags
//! conditions where supercooled deposits or wet snow are plausible; it does
//! not model precipitation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold constants of the icing and snow rules.
///
/// Temperature bands are inclusive on both ends; wind limits are inclusive
/// upper bounds; irradiance limits are exclusive upper bounds.
pub mod icing_ranges {
    use std::ops::RangeInclusive;

    /// Air temperature band for "high" icing (°C)
    pub const HIGH_AIR_TEMPERATURE: RangeInclusive<f64> = -10.0..=1.0;
    /// Maximum effective wind for "high" icing (m/s)
    pub const HIGH_MAX_WIND: f64 = 3.0;
    /// Irradiance must stay below this for "high" icing (W/m²)
    pub const HIGH_IRRADIANCE_BELOW: f64 = 150.0;

    /// Air temperature band for "moderate" icing (°C)
    pub const MODERATE_AIR_TEMPERATURE: RangeInclusive<f64> = -15.0..=2.0;
    /// Maximum effective wind for "moderate" icing (m/s)
    pub const MODERATE_MAX_WIND: f64 = 5.0;
    /// Irradiance must stay below this for "moderate" icing (W/m²)
    pub const MODERATE_IRRADIANCE_BELOW: f64 = 60.0;

    /// Air temperature band for possible wet snow (°C)
    pub const SNOW_AIR_TEMPERATURE: RangeInclusive<f64> = -5.0..=2.0;
    /// Irradiance must stay below this for possible wet snow (W/m²)
    pub const SNOW_IRRADIANCE_BELOW: f64 = 200.0;
}

/// Likelihood of ice accretion on the conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IcingLevel {
    Low,
    Moderate,
    High,
}

impl IcingLevel {
    /// Stable lower-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            IcingLevel::Low => "low",
            IcingLevel::Moderate => "moderate",
            IcingLevel::High => "high",
        }
    }
}

impl fmt::Display for IcingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether wet snow may build up on the conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnowLikelihood {
    Unlikely,
    Possible,
}

impl SnowLikelihood {
    /// Stable lower-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            SnowLikelihood::Unlikely => "unlikely",
            SnowLikelihood::Possible => "possible",
        }
    }
}

impl fmt::Display for SnowLikelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined icing and snow classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IcingSnowState {
    pub icing: IcingLevel,
    pub snow: SnowLikelihood,
}

/// Icing level from air temperature (°C), effective wind (m/s) and irradiance (W/m²)
pub fn classify_icing(air_temperature: f64, effective_wind: f64, irradiance: f64) -> IcingLevel {
    use icing_ranges::{
        HIGH_AIR_TEMPERATURE, HIGH_IRRADIANCE_BELOW, HIGH_MAX_WIND, MODERATE_AIR_TEMPERATURE,
        MODERATE_IRRADIANCE_BELOW, MODERATE_MAX_WIND,
    };

    if HIGH_AIR_TEMPERATURE.contains(&air_temperature)
        && effective_wind <= HIGH_MAX_WIND
        && irradiance < HIGH_IRRADIANCE_BELOW
    {
        IcingLevel::High
    } else if MODERATE_AIR_TEMPERATURE.contains(&air_temperature)
        && effective_wind <= MODERATE_MAX_WIND
        && irradiance < MODERATE_IRRADIANCE_BELOW
    {
        IcingLevel::Moderate
    } else {
        IcingLevel::Low
    }
}

/// Snow likelihood from air temperature (°C) and irradiance (W/m²)
pub fn classify_snow(air_temperature: f64, irradiance: f64) -> SnowLikelihood {
    if icing_ranges::SNOW_AIR_TEMPERATURE.contains(&air_temperature)
        && irradiance < icing_ranges::SNOW_IRRADIANCE_BELOW
    {
        SnowLikelihood::Possible
    } else {
        SnowLikelihood::Unlikely
    }
}

/// Both classifications at once
pub fn classify_icing_snow(
    air_temperature: f64,
    effective_wind: f64,
    irradiance: f64,
) -> IcingSnowState {
    IcingSnowState {
        icing: classify_icing(air_temperature, effective_wind, irradiance),
        snow: classify_snow(air_temperature, irradiance),
    }
}
