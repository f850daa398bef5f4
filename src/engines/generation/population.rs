use crate::types::{ParameterPair, Population, WindowRange};
use rand::Rng;

/// `size` random pairs, each gene drawn uniformly from its own inclusive range.
/// Duplicates are allowed.
pub fn initialize_population<R: Rng>(
    size: usize,
    short_range: &WindowRange,
    long_range: &WindowRange,
    rng: &mut R,
) -> Population {
    (0..size)
        .map(|_| {
            let short_window = short_range.sample(rng);
            let long_window = long_range.sample(rng);
            ParameterPair::new(short_window, long_window)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_size_and_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let short = WindowRange::new(5, 50);
        let long = WindowRange::new(50, 200);
        let population = initialize_population(500, &short, &long, &mut rng);

        assert_eq!(population.len(), 500);
        assert!(population.iter().all(|p| short.contains(p.short_window)));
        assert!(population.iter().all(|p| long.contains(p.long_window)));
        // inclusive bounds are actually reached
        assert!(population.iter().any(|p| p.short_window == 5));
        assert!(population.iter().any(|p| p.short_window == 50));
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let population =
            initialize_population(10, &WindowRange::new(5, 5), &WindowRange::new(50, 50), &mut rng);
        assert!(population.iter().all(|p| *p == ParameterPair::new(5, 50)));
    }

    #[test]
    fn test_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let population =
            initialize_population(0, &WindowRange::new(5, 50), &WindowRange::new(50, 200), &mut rng);
        assert!(population.is_empty());
    }
}
