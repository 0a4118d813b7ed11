//! Single-entry-point evaluation of a line under given conditions
//!
//! [`Evaluator`] binds a [`ModelConfig`] to both convection algorithms and
//! solves the reference-condition ampacity of each once, at construction. An
//! evaluation then runs the full pipeline:
//!
//! 1. blend mean and gust wind into the effective cooling wind
//! 2. solve the conductor temperature at the requested current
//! 3. solve the ampacity under the same conditions
//! 4. rate it against the reference ampacity of the same model
//! 5. classify risk and icing/snow, estimate sag
//!
//! An `Evaluator` is immutable after construction, so it can be shared across
//! threads (see [`sweep`]).

pub mod cache;
pub mod sweep;

pub use cache::EvaluationCache;
pub use sweep::{evaluate_batch, linspace, SweepGrid};

use crate::assessment::{
    classify_icing_snow, classify_risk, estimate_sag, rating_percent, IcingLevel, RiskInputs,
    RiskLevel, SnowLikelihood,
};
use crate::config::{ConfigError, ModelConfig};
use crate::core_types::units::{Amperes, Celsius, MetersPerSecond};
use crate::core_types::EnvironmentalState;
use crate::physics::{blend_wind, Convection, ConvectionModel, HeatBalance};
use crate::solver::{solve_ampacity, solve_equilibrium, AmpacityResult, ThermalState};
use serde::Serialize;
use tracing::{debug, info};

/// Everything one evaluation produces
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    /// Convection model the evaluation ran with
    pub convection: ConvectionModel,
    /// Blended cooling wind
    pub effective_wind: MetersPerSecond,
    /// Steady-state conductor temperature at the requested current
    pub conductor_temperature: Celsius,
    /// Ampacity under the evaluated conditions
    pub ampacity: Amperes,
    /// Ampacity under the reference condition, same model
    pub reference_ampacity: Amperes,
    /// `ampacity` relative to `reference_ampacity`, in [0, 300] %
    pub rating_percent: f64,
    pub risk: RiskLevel,
    pub icing: IcingLevel,
    pub snow: SnowLikelihood,
    /// Illustrative sag indicator (not a mechanical sag)
    pub sag: f64,
    /// Solver detail behind `conductor_temperature`
    pub thermal: ThermalState,
    /// Solver detail behind `ampacity`
    pub ampacity_search: AmpacityResult,
}

/// Convection algorithm with its precomputed reference ampacity
#[derive(Debug, Clone)]
struct BoundModel {
    convection: Convection,
    reference: AmpacityResult,
}

/// Evaluation engine for one conductor and one set of model constants
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: ModelConfig,
    heuristic: BoundModel,
    split: BoundModel,
}

impl Evaluator {
    /// Validate `config` and solve the reference ampacity of every model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `config` fails validation.
    pub fn new(config: ModelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ModelConfig) -> Self {
        let heuristic = bind_model(&config, ConvectionModel::Heuristic);
        let split = bind_model(&config, ConvectionModel::Split);

        info!(
            conductor = %config.conductor.name,
            temperature_limit = config.conductor.temperature_limit,
            heuristic_reference = heuristic.reference.current,
            split_reference = split.reference.current,
            "evaluator ready"
        );

        Self {
            config,
            heuristic,
            split,
        }
    }

    /// Constants this evaluator was built with
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Ampacity under the reference condition for `model` (the 100 % rating)
    pub fn reference_ampacity(&self, model: ConvectionModel) -> Amperes {
        Amperes::new(self.bound(model).reference.current)
    }

    /// Evaluate the line under `state`.
    ///
    /// Negative wind, irradiance and current are floored to zero; reject them
    /// upstream with [`EnvironmentalState::validated`] if that is an error.
    pub fn evaluate(&self, state: &EnvironmentalState) -> Evaluation {
        let bound = self.bound(state.convection);
        run_pipeline(&self.config, bound, state)
    }

    fn bound(&self, model: ConvectionModel) -> &BoundModel {
        match model {
            ConvectionModel::Heuristic => &self.heuristic,
            ConvectionModel::Split => &self.split,
        }
    }
}

impl Default for Evaluator {
    /// Evaluator over the default (Drake) configuration.
    fn default() -> Self {
        Self::build(ModelConfig::default())
    }
}

/// One-shot evaluation without keeping an [`Evaluator`] around.
///
/// Solves the reference ampacity on every call; build an [`Evaluator`] for
/// repeated use. `config` must pass [`ModelConfig::validate`]: an invalid
/// config panics in debug builds and gives meaningless results otherwise.
pub fn evaluate(state: &EnvironmentalState, config: &ModelConfig) -> Evaluation {
    debug_assert!(
        config.validate().is_ok(),
        "evaluate called with an invalid model configuration"
    );
    let bound = bind_model(config, state.convection);
    run_pipeline(config, &bound, state)
}

fn bind_model(config: &ModelConfig, model: ConvectionModel) -> BoundModel {
    let convection = config.convection(model);
    let reference_state = config.reference.state(model);
    let balance = HeatBalance::new(
        &config.conductor,
        &convection,
        *reference_state.air_temperature,
        blend_wind(*reference_state.mean_wind, *reference_state.gust_wind),
        *reference_state.irradiance,
    );
    let reference = solve_ampacity(&balance, &config.solver);
    debug!(
        model = %model,
        reference = reference.current,
        outcome = ?reference.outcome,
        "reference ampacity solved"
    );
    BoundModel {
        convection,
        reference,
    }
}

fn run_pipeline(
    config: &ModelConfig,
    bound: &BoundModel,
    state: &EnvironmentalState,
) -> Evaluation {
    let air_temperature = *state.air_temperature;
    let irradiance = state.irradiance.value().max(0.0);
    let current = state.current.value().max(0.0);
    let effective_wind = blend_wind(*state.mean_wind, *state.gust_wind);

    let balance = HeatBalance::new(
        &config.conductor,
        &bound.convection,
        air_temperature,
        effective_wind,
        irradiance,
    );
    let thermal = solve_equilibrium(&balance, current, &config.solver);
    let ampacity_search = solve_ampacity(&balance, &config.solver);

    let risk = classify_risk(&RiskInputs {
        current,
        ampacity: ampacity_search.current,
        conductor_temperature: thermal.temperature,
        air_temperature,
        effective_wind,
    });
    let icing_snow = classify_icing_snow(air_temperature, effective_wind, irradiance);

    Evaluation {
        convection: bound.convection.model(),
        effective_wind: MetersPerSecond::new(effective_wind),
        conductor_temperature: Celsius::from(thermal.temperature),
        ampacity: Amperes::new(ampacity_search.current),
        reference_ampacity: Amperes::new(bound.reference.current),
        rating_percent: rating_percent(ampacity_search.current, bound.reference.current),
        risk,
        icing: icing_snow.icing,
        snow: icing_snow.snow,
        sag: estimate_sag(&config.sag, thermal.temperature, effective_wind),
        thermal,
        ampacity_search,
    }
}
