use crate::config::MutationScheme;
use crate::types::{ParameterPair, ScoredCandidate, WindowRange};
use rand::Rng;
use std::cmp::Ordering;

/// Truncation selection: the `k` fittest candidates, best first.
///
/// The sort is stable, so equal fitness keeps input order. Asking for more
/// than there are returns everything.
pub fn select_top(scored: &[ScoredCandidate], k: usize) -> Vec<ParameterPair> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));

    ranked.into_iter().take(k).map(|s| s.candidate).collect()
}

/// Single-point crossover: swap the long-window gene
pub fn crossover(parent1: &ParameterPair, parent2: &ParameterPair) -> (ParameterPair, ParameterPair) {
    (
        ParameterPair::new(parent1.short_window, parent2.long_window),
        ParameterPair::new(parent2.short_window, parent1.long_window),
    )
}

/// Mutation: maybe redraw one or both genes from their ranges
pub fn mutate<R: Rng>(
    candidate: ParameterPair,
    mutation_rate: f64,
    short_range: &WindowRange,
    long_range: &WindowRange,
    scheme: MutationScheme,
    rng: &mut R,
) -> ParameterPair {
    match scheme {
        MutationScheme::Exclusive => {
            if rng.gen::<f64>() < mutation_rate {
                candidate.with_short(short_range.sample(rng))
            } else if rng.gen::<f64>() < mutation_rate {
                candidate.with_long(long_range.sample(rng))
            } else {
                candidate
            }
        }
        MutationScheme::Independent => {
            let mut child = candidate;
            if rng.gen::<f64>() < mutation_rate {
                child = child.with_short(short_range.sample(rng));
            }
            if rng.gen::<f64>() < mutation_rate {
                child = child.with_long(long_range.sample(rng));
            }
            child
        }
    }
}
