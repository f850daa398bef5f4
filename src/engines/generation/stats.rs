use crate::types::{ParameterPair, ScoredCandidate};
use serde::{Deserialize, Serialize};

/// Fitness summary of one evaluated generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub worst_fitness: f64,
    pub best_candidate: ParameterPair,
}

impl GenerationStats {
    /// `None` for an empty generation. The first candidate wins a tie for best.
    pub fn from_scored(generation: usize, scored: &[ScoredCandidate]) -> Option<Self> {
        let first = scored.first()?;

        let mut best = first;
        let mut worst_fitness = first.fitness;
        let mut total = 0.0;
        for candidate in scored {
            if candidate.fitness > best.fitness {
                best = candidate;
            }
            worst_fitness = worst_fitness.min(candidate.fitness);
            total += candidate.fitness;
        }

        Some(Self {
            generation,
            best_fitness: best.fitness,
            mean_fitness: total / scored.len() as f64,
            worst_fitness,
            best_candidate: best.candidate,
        })
    }
}
