//! Data-parallel batch evaluation
//!
//! Every evaluation is independent, so a batch fans out over rayon's pool.
//! Results come back in input order and are bit-identical to evaluating the
//! same states one after another.

use super::{Evaluation, Evaluator};
use crate::core_types::units::{Amperes, Celsius, MetersPerSecond};
use crate::core_types::EnvironmentalState;
use rayon::prelude::*;
use tracing::debug;

/// Evaluate every state in parallel, preserving order
pub fn evaluate_batch(evaluator: &Evaluator, states: &[EnvironmentalState]) -> Vec<Evaluation> {
    debug!(count = states.len(), "evaluating batch");
    states
        .par_iter()
        .map(|state| evaluator.evaluate(state))
        .collect()
}

/// Cartesian grid of states around a base state
///
/// An empty axis keeps the base value. States are generated with air
/// temperature varying slowest and current fastest.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGrid {
    pub base: EnvironmentalState,
    /// Air temperatures (°C)
    pub air_temperatures: Vec<f64>,
    /// Mean wind speeds (m/s); the base gust is kept
    pub mean_winds: Vec<f64>,
    /// Line currents (A)
    pub currents: Vec<f64>,
}

impl SweepGrid {
    pub fn new(base: EnvironmentalState) -> Self {
        Self {
            base,
            air_temperatures: Vec::new(),
            mean_winds: Vec::new(),
            currents: Vec::new(),
        }
    }

    pub fn with_air_temperatures(mut self, values: Vec<f64>) -> Self {
        self.air_temperatures = values;
        self
    }

    pub fn with_mean_winds(mut self, values: Vec<f64>) -> Self {
        self.mean_winds = values;
        self
    }

    pub fn with_currents(mut self, values: Vec<f64>) -> Self {
        self.currents = values;
        self
    }

    /// Number of states the grid expands to, at least one
    pub fn state_count(&self) -> usize {
        axis_len(&self.air_temperatures) * axis_len(&self.mean_winds) * axis_len(&self.currents)
    }

    /// Expand into concrete states
    pub fn states(&self) -> Vec<EnvironmentalState> {
        let airs = axis_or(&self.air_temperatures, *self.base.air_temperature);
        let winds = axis_or(&self.mean_winds, *self.base.mean_wind);
        let currents = axis_or(&self.currents, *self.base.current);

        let mut states = Vec::with_capacity(self.state_count());
        for &air in &airs {
            for &wind in &winds {
                for &current in &currents {
                    states.push(EnvironmentalState {
                        air_temperature: Celsius::from(air),
                        mean_wind: MetersPerSecond::new(wind),
                        current: Amperes::new(current),
                        ..self.base
                    });
                }
            }
        }
        states
    }

    /// Expand and evaluate in parallel
    pub fn evaluate(&self, evaluator: &Evaluator) -> Vec<Evaluation> {
        evaluate_batch(evaluator, &self.states())
    }
}

/// `steps` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = (end - start) / (steps - 1) as f64;
            (0..steps)
                .map(|i| {
                    if i == steps - 1 {
                        end
                    } else {
                        start + span * i as f64
                    }
                })
                .collect()
        }
    }
}

fn axis_len(axis: &[f64]) -> usize {
    axis.len().max(1)
}

fn axis_or(axis: &[f64], fallback: f64) -> Vec<f64> {
    if axis.is_empty() {
        vec![fallback]
    } else {
        axis.to_vec()
    }
}
