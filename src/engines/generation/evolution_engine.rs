use crate::config::{ConfigSection, EvolutionConfig};
use crate::data::PriceSeries;
use crate::engines::evaluation::{evaluate_population, FitnessEvaluator, FitnessFunction};
use crate::engines::generation::{
    operators::{crossover, mutate, select_top},
    population::initialize_population,
    progress::ProgressCallback,
    stats::GenerationStats,
};
use crate::error::{MaevoError, Result};
use crate::types::{ParameterPair, Population, ScoredCandidate};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// What the generation loop hands back: the last population plus one stats
/// entry per generation run.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub final_population: Population,
    pub history: Vec<GenerationStats>,
}

/// Full search result: the winner of the final evaluation and how it got there.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best: ScoredCandidate,
    pub outcome: EvolutionOutcome,
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    rng: StdRng,
}

impl EvolutionEngine {
    /// Validates the config up front; a bad config never reaches the loop.
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn initialize_population(&mut self) -> Population {
        initialize_population(
            self.config.population_size,
            &self.config.short_window_range,
            &self.config.long_window_range,
            &mut self.rng,
        )
    }

    /// Seed a random population and run every generation on it.
    pub fn evolve<F, C>(&mut self, fitness: &F, callback: C) -> Result<EvolutionOutcome>
    where
        F: FitnessFunction + ?Sized,
        C: ProgressCallback,
    {
        let population = self.initialize_population();
        self.run(fitness, population, callback)
    }

    /// Run the evolution process on `population`
    ///
    /// Each generation: evaluate, keep the top `elite_count`, then fill the
    /// rest with mutated crossover children of two distinct elites. With zero
    /// generations the population comes back untouched.
    pub fn run<F, C>(
        &mut self,
        fitness: &F,
        mut population: Population,
        mut callback: C,
    ) -> Result<EvolutionOutcome>
    where
        F: FitnessFunction + ?Sized,
        C: ProgressCallback,
    {
        if population.len() != self.config.population_size {
            return Err(MaevoError::Configuration(format!(
                "Population has {} candidates, expected {}",
                population.len(),
                self.config.population_size
            )));
        }

        let mut history = Vec::with_capacity(self.config.generations);

        for generation in 0..self.config.generations {
            callback.on_generation_start(generation);

            let scored = self.evaluate_generation(fitness, &population, &mut callback)?;

            if let Some(stats) = GenerationStats::from_scored(generation, &scored) {
                callback.on_generation_complete(&stats);
                history.push(stats);
            }

            let elites = select_top(&scored, self.config.elite_count);
            population = self.breed(&elites);
        }

        Ok(EvolutionOutcome {
            final_population: population,
            history,
        })
    }

    fn evaluate_generation<F, C>(
        &self,
        fitness: &F,
        population: &[ParameterPair],
        callback: &mut C,
    ) -> Result<Vec<ScoredCandidate>>
    where
        F: FitnessFunction + ?Sized,
        C: ProgressCallback,
    {
        let total = population.len();
        let mut scored = Vec::with_capacity(total);

        for (i, pair) in population.iter().enumerate() {
            scored.push(ScoredCandidate::new(fitness.evaluate(pair)?, *pair));
            callback.on_candidate_evaluated(i + 1, total);
        }

        Ok(scored)
    }

    /// Elites carry over unchanged; children fill the remaining slots.
    fn breed(&mut self, elites: &[ParameterPair]) -> Population {
        let target = self.config.population_size;
        let mut next_generation = Vec::with_capacity(target);
        next_generation.extend_from_slice(elites);

        while next_generation.len() < target {
            let parents = index::sample(&mut self.rng, elites.len(), 2);
            let (child1, child2) = crossover(&elites[parents.index(0)], &elites[parents.index(1)]);

            let child1 = self.mutate(child1);
            next_generation.push(child1);
            if next_generation.len() < target {
                let child2 = self.mutate(child2);
                next_generation.push(child2);
            }
        }

        next_generation
    }

    fn mutate(&mut self, child: ParameterPair) -> ParameterPair {
        mutate(
            child,
            self.config.mutation_rate,
            &self.config.short_window_range,
            &self.config.long_window_range,
            self.config.mutation_scheme,
            &mut self.rng,
        )
    }
}

/// Score `population` once more and return its fittest member. This pass is
/// not one of the configured generations. Ties go to the earliest candidate.
pub fn best_candidate<F>(fitness: &F, population: &[ParameterPair]) -> Result<ScoredCandidate>
where
    F: FitnessFunction + ?Sized,
{
    let scored = evaluate_population(fitness, population)?;

    scored
        .into_iter()
        .reduce(|best, candidate| if candidate.fitness > best.fitness { candidate } else { best })
        .ok_or_else(|| MaevoError::Computation("Cannot pick a best candidate from an empty population".to_string()))
}

/// Evolve against `prices` and pick the best pair of the final population.
pub fn run_search<C: ProgressCallback>(
    prices: &PriceSeries,
    config: &EvolutionConfig,
    callback: C,
) -> Result<SearchResult> {
    let mut engine = EvolutionEngine::new(config.clone())?;
    let evaluator = FitnessEvaluator::new(prices);

    log::info!(
        "Evolving {} candidates for {} generations over {} price rows",
        config.population_size,
        config.generations,
        prices.len()
    );

    let outcome = engine.evolve(&evaluator, callback)?;
    let best = best_candidate(&evaluator, &outcome.final_population)?;

    log::info!("Best candidate {} with fitness {:.4}", best.candidate, best.fitness);

    Ok(SearchResult { best, outcome })
}
