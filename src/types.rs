use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One candidate trading rule: the genome evolved by the search.
///
/// Nothing forces `short_window < long_window`. A pair with the windows the
/// wrong way round is still a valid candidate; it just scores poorly and gets
/// selected out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterPair {
    pub short_window: usize,
    pub long_window: usize,
}

impl ParameterPair {
    pub fn new(short_window: usize, long_window: usize) -> Self {
        Self {
            short_window,
            long_window,
        }
    }

    pub fn with_short(self, short_window: usize) -> Self {
        Self {
            short_window,
            ..self
        }
    }

    pub fn with_long(self, long_window: usize) -> Self {
        Self {
            long_window,
            ..self
        }
    }
}

impl fmt::Display for ParameterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.short_window, self.long_window)
    }
}

/// Inclusive window bounds for one gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRange {
    pub min: usize,
    pub max: usize,
}

impl WindowRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: usize) -> bool {
        value >= self.min && value <= self.max
    }

    /// Uniform draw over `[min, max]`. Panics if `min > max`, which config
    /// validation rules out before the engine ever samples.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.min..=self.max)
    }
}

impl From<(usize, usize)> for WindowRange {
    fn from((min, max): (usize, usize)) -> Self {
        Self { min, max }
    }
}

/// A candidate together with the fitness it scored this generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub fitness: f64,
    pub candidate: ParameterPair,
}

impl ScoredCandidate {
    pub fn new(fitness: f64, candidate: ParameterPair) -> Self {
        Self { fitness, candidate }
    }
}

pub type Population = Vec<ParameterPair>;
