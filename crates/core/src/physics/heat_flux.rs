//! Steady-state heat balance of a conductor
//!
//! Heat gain: Joule heating plus absorbed solar radiation.
//! Heat loss: convection (see [`super::convection`]) plus thermal radiation.
//!
//! All terms are per metre of conductor (W/m).
//!
//! # References
//! - Stefan-Boltzmann Law: Stefan (1879), Boltzmann (1884)
//! - IEEE Std 738 - conductor heat balance layout

use super::convection::ConvectiveFlux;
use super::resistance::resistance_at;
use crate::core_types::conductor::ConductorParameters;
use crate::core_types::units::Celsius;

/// Stefan-Boltzmann constant (W/(m²·K⁴))
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Joule heating I²·R in W/m
#[inline(always)]
pub fn joule_flux(current: f64, resistance: f64) -> f64 {
    current * current * resistance
}

/// Absorbed solar heating in W/m (projected area = diameter per metre)
#[inline(always)]
pub fn solar_flux(absorptivity: f64, irradiance: f64, diameter: f64) -> f64 {
    absorptivity * irradiance.max(0.0) * diameter
}

/// Net radiative loss to the surroundings in W/m
///
/// FULL FORMULA: ε × σ × (`T_c`⁴ − `T_a`⁴) × π × D, temperatures in Kelvin
#[inline(always)]
pub fn radiative_flux(
    emissivity: f64,
    diameter: f64,
    conductor_temperature: f64,
    air_temperature: f64,
) -> f64 {
    let tc_k = conductor_temperature + Celsius::KELVIN_OFFSET;
    let ta_k = air_temperature + Celsius::KELVIN_OFFSET;
    emissivity
        * STEFAN_BOLTZMANN
        * (tc_k.powi(4) - ta_k.powi(4))
        * std::f64::consts::PI
        * diameter
}

/// d(radiative loss)/d(conductor temperature) in W/(m·K)
#[inline(always)]
pub fn radiative_slope(emissivity: f64, diameter: f64, conductor_temperature: f64) -> f64 {
    let tc_k = conductor_temperature + Celsius::KELVIN_OFFSET;
    4.0 * emissivity * STEFAN_BOLTZMANN * tc_k.powi(3) * std::f64::consts::PI * diameter
}

/// Heat balance for fixed ambient conditions and a chosen convection model
///
/// The current is the only free input besides the conductor temperature,
/// so one balance serves every probe of the equilibrium and ampacity solvers.
#[derive(Debug)]
pub struct HeatBalance<'a, C: ConvectiveFlux + ?Sized> {
    pub conductor: &'a ConductorParameters,
    pub convection: &'a C,
    /// Ambient air temperature (°C)
    pub air_temperature: f64,
    /// Blended cooling wind (m/s)
    pub effective_wind: f64,
    /// Solar irradiance (W/m²)
    pub irradiance: f64,
}

impl<'a, C: ConvectiveFlux + ?Sized> HeatBalance<'a, C> {
    pub fn new(
        conductor: &'a ConductorParameters,
        convection: &'a C,
        air_temperature: f64,
        effective_wind: f64,
        irradiance: f64,
    ) -> Self {
        Self {
            conductor,
            convection,
            air_temperature,
            effective_wind: effective_wind.max(0.0),
            irradiance: irradiance.max(0.0),
        }
    }

    /// Configured maximum conductor temperature (°C)
    #[inline]
    pub fn temperature_limit(&self) -> f64 {
        self.conductor.temperature_limit
    }

    /// Joule + solar gain at the given current and conductor temperature
    #[inline]
    pub fn inflow(&self, current: f64, conductor_temperature: f64) -> f64 {
        let c = self.conductor;
        joule_flux(current, resistance_at(c, conductor_temperature))
            + solar_flux(c.absorptivity, self.irradiance, c.diameter)
    }

    /// Convective + radiative loss at the given conductor temperature
    #[inline]
    pub fn outflow(&self, conductor_temperature: f64) -> f64 {
        self.convection.convective_flux(
            self.effective_wind,
            self.air_temperature,
            conductor_temperature,
        ) + radiative_flux(
            self.conductor.emissivity,
            self.conductor.diameter,
            conductor_temperature,
            self.air_temperature,
        )
    }

    /// Gain minus loss; zero at equilibrium
    #[inline]
    pub fn residual(&self, current: f64, conductor_temperature: f64) -> f64 {
        self.inflow(current, conductor_temperature) - self.outflow(conductor_temperature)
    }

    /// Local slope of the loss with respect to conductor temperature.
    ///
    /// Analytic when the convection model provides one, otherwise a forward
    /// difference over `probe_step` °C.
    pub fn outflow_slope(&self, conductor_temperature: f64, probe_step: f64) -> f64 {
        match self.convection.convective_slope(self.effective_wind) {
            Some(convective) => {
                convective
                    + radiative_slope(
                        self.conductor.emissivity,
                        self.conductor.diameter,
                        conductor_temperature,
                    )
            }
            None => {
                (self.outflow(conductor_temperature + probe_step)
                    - self.outflow(conductor_temperature))
                    / probe_step
            }
        }
    }
}
