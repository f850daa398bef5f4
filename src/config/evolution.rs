use super::traits::ConfigSection;
use crate::error::MaevoError;
use crate::types::WindowRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub elite_count: usize,
    pub mutation_rate: f64,
    pub mutation_scheme: MutationScheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub short_window_range: WindowRange,
    pub long_window_range: WindowRange,
}

/// How the two mutation tests relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MutationScheme {
    /// Short gene is tested first; the long gene is only tested (with a fresh
    /// draw) when the short test fails. Effective long-gene rate is
    /// `(1 - rate) * rate`.
    #[default]
    Exclusive,
    /// Each gene is tested on its own at `rate`; both may change at once.
    Independent,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            elite_count: 10,
            mutation_rate: 0.1,
            mutation_scheme: MutationScheme::Exclusive,
            seed: None,
            short_window_range: WindowRange::new(5, 50),
            long_window_range: WindowRange::new(50, 200),
        }
    }
}

impl EvolutionConfig {
    fn validate_range(name: &str, range: &WindowRange) -> Result<(), MaevoError> {
        if range.min > range.max {
            return Err(MaevoError::Configuration(format!(
                "{} min ({}) must not exceed max ({})",
                name, range.min, range.max
            )));
        }
        if range.min == 0 {
            return Err(MaevoError::Configuration(format!(
                "{} must only contain positive window lengths",
                name
            )));
        }
        Ok(())
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), MaevoError> {
        if self.elite_count < 2 {
            return Err(MaevoError::Configuration(format!(
                "Elite count must be at least 2 to pick two parents, got {}",
                self.elite_count
            )));
        }
        if self.population_size < self.elite_count {
            return Err(MaevoError::Configuration(format!(
                "Population size ({}) must be at least the elite count ({})",
                self.population_size, self.elite_count
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(MaevoError::Configuration(format!(
                "Mutation rate must be between 0 and 1, got {}",
                self.mutation_rate
            )));
        }
        Self::validate_range("short_window_range", &self.short_window_range)?;
        Self::validate_range("long_window_range", &self.long_window_range)?;
        Ok(())
    }
}
