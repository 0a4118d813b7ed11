//! Physics of the conductor heat balance

pub mod convection;
pub mod heat_flux;
pub mod resistance;
pub mod wind;

pub use convection::{
    Convection, ConvectionModel, ConvectiveFlux, HeuristicCoefficients, HeuristicConvection,
    SplitCoefficients, SplitConvection,
};
pub use heat_flux::{
    joule_flux, radiative_flux, radiative_slope, solar_flux, HeatBalance, STEFAN_BOLTZMANN,
};
pub use resistance::resistance_at;
pub use wind::{effective_wind_speed, GUST_BLEND_FACTOR};
pub(crate) use wind::blend_wind;
