//! Memoised evaluation
//!
//! Keys are the exact bit patterns of the input tuple, so only bit-identical
//! states share an entry (`0.0` and `-0.0` are distinct keys). A hit returns
//! the stored [`Evaluation`] unchanged, which is the same value a fresh
//! evaluation would produce because the pipeline is deterministic.

use super::{Evaluation, Evaluator};
use crate::core_types::EnvironmentalState;
use crate::physics::ConvectionModel;
use rustc_hash::FxHashMap;

/// Exact identity of an [`EnvironmentalState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StateKey {
    air_temperature: u64,
    mean_wind: u64,
    gust_wind: u64,
    irradiance: u64,
    current: u64,
    convection: ConvectionModel,
}

impl From<&EnvironmentalState> for StateKey {
    fn from(state: &EnvironmentalState) -> Self {
        Self {
            air_temperature: state.air_temperature.to_bits(),
            mean_wind: state.mean_wind.to_bits(),
            gust_wind: state.gust_wind.to_bits(),
            irradiance: state.irradiance.to_bits(),
            current: state.current.to_bits(),
            convection: state.convection,
        }
    }
}

/// [`Evaluator`] with a memo table in front of it
#[derive(Debug, Clone)]
pub struct EvaluationCache {
    evaluator: Evaluator,
    entries: FxHashMap<StateKey, Evaluation>,
    hits: u64,
    misses: u64,
}

impl EvaluationCache {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            entries: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// Stored evaluation for `state`, computing and storing it on a miss
    pub fn evaluate(&mut self, state: &EnvironmentalState) -> Evaluation {
        let key = StateKey::from(state);
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            return *hit;
        }
        self.misses += 1;
        let evaluation = self.evaluator.evaluate(state);
        self.entries.insert(key, evaluation);
        evaluation
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Number of distinct states stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the table
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that ran the evaluator
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop all entries and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
