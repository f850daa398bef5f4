use maevo::engines::evaluation::{evaluate, evaluate_population, FitnessEvaluator};
use maevo::engines::generation::{
    crossover, select_top, run_search, EvolutionEngine, GenerationStats, NoopProgressCallback,
    ProgressCallback,
};
use maevo::{EvolutionConfig, MaevoError, ParameterPair, PriceSeries, ScoredCandidate, WindowRange};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Counts callback events so tests can see how far a run got
#[derive(Default)]
struct CountingCallback {
    started: usize,
    completed: usize,
    evaluated: usize,
}

impl ProgressCallback for CountingCallback {
    fn on_generation_start(&mut self, _generation: usize) {
        self.started += 1;
    }

    fn on_generation_complete(&mut self, _stats: &GenerationStats) {
        self.completed += 1;
    }

    fn on_candidate_evaluated(&mut self, _candidate_num: usize, _total: usize) {
        self.evaluated += 1;
    }
}

/// Rises for `n` periods, then falls for `n`
fn rise_then_fall(n: usize) -> PriceSeries {
    let mut closes: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
    let peak = closes[n - 1];
    closes.extend((1..=n).map(|i| peak - i as f64 * 0.9));
    PriceSeries::from_closes(&closes).unwrap()
}

/// Gently trending noise, seeded
fn random_walk(n: usize, seed: u64) -> PriceSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut price = 100.0;
    let closes: Vec<f64> = (0..n)
        .map(|_| {
            price *= 1.0 + rng.gen_range(-0.02..0.021);
            price
        })
        .collect();
    PriceSeries::from_closes(&closes).unwrap()
}

fn scenario_config() -> EvolutionConfig {
    EvolutionConfig {
        population_size: 10,
        generations: 5,
        elite_count: 4,
        mutation_rate: 0.0,
        short_window_range: WindowRange::new(2, 5),
        long_window_range: WindowRange::new(10, 20),
        seed: Some(2024),
        ..Default::default()
    }
}

#[test]
fn test_rise_then_fall_scenario() {
    let prices = rise_then_fall(100);

    let first = run_search(&prices, &scenario_config(), NoopProgressCallback).unwrap();
    let second = run_search(&prices, &scenario_config(), NoopProgressCallback).unwrap();

    assert_eq!(first.best, second.best);
    assert_eq!(first.outcome.history, second.outcome.history);
    assert_eq!(first.outcome.history.len(), 5);
    assert!(first.best.fitness.is_finite());
    assert!(first.best.candidate.short_window < first.best.candidate.long_window);
    assert!((2..=5).contains(&first.best.candidate.short_window));
    assert!((10..=20).contains(&first.best.candidate.long_window));
}

#[test]
fn test_same_seed_same_result() {
    let prices = random_walk(300, 5);
    let config = EvolutionConfig {
        population_size: 16,
        generations: 6,
        elite_count: 4,
        mutation_rate: 0.3,
        short_window_range: WindowRange::new(2, 20),
        long_window_range: WindowRange::new(20, 80),
        seed: Some(77),
        ..Default::default()
    };

    let first = run_search(&prices, &config, NoopProgressCallback).unwrap();
    let second = run_search(&prices, &config, NoopProgressCallback).unwrap();

    assert_eq!(first.best.candidate, second.best.candidate);
    assert_eq!(first.outcome.final_population, second.outcome.final_population);
}

#[test]
fn test_population_size_invariant() {
    let prices = random_walk(150, 9);
    let evaluator = FitnessEvaluator::new(&prices);

    for generations in 0..=3 {
        let config = EvolutionConfig {
            population_size: 9,
            generations,
            elite_count: 3,
            short_window_range: WindowRange::new(2, 10),
            long_window_range: WindowRange::new(10, 40),
            seed: Some(generations as u64),
            ..Default::default()
        };
        let mut engine = EvolutionEngine::new(config).unwrap();
        let outcome = engine.evolve(&evaluator, NoopProgressCallback).unwrap();

        assert_eq!(outcome.final_population.len(), 9);
        assert_eq!(outcome.history.len(), generations);
    }
}

#[test]
fn test_zero_generations_returns_initial_population() {
    let prices = random_walk(100, 3);
    let evaluator = FitnessEvaluator::new(&prices);
    let config = EvolutionConfig {
        generations: 0,
        seed: Some(1),
        ..Default::default()
    };

    let mut engine = EvolutionEngine::new(config).unwrap();
    let initial = engine.initialize_population();
    let mut callback = CountingCallback::default();
    let outcome = engine.run(&evaluator, initial.clone(), &mut callback).unwrap();

    assert_eq!(outcome.final_population, initial);
    assert!(outcome.history.is_empty());
    assert_eq!(callback.started, 0);
    assert_eq!(callback.evaluated, 0);
}

#[test]
fn test_degenerate_ranges_keep_population_fixed() {
    let prices = random_walk(120, 4);
    let evaluator = FitnessEvaluator::new(&prices);
    let config = EvolutionConfig {
        population_size: 8,
        generations: 4,
        elite_count: 3,
        mutation_rate: 0.0,
        short_window_range: WindowRange::new(5, 5),
        long_window_range: WindowRange::new(50, 50),
        seed: Some(8),
        ..Default::default()
    };

    let mut engine = EvolutionEngine::new(config).unwrap();
    let initial = engine.initialize_population();
    assert!(initial.iter().all(|p| *p == ParameterPair::new(5, 50)));

    let outcome = engine.run(&evaluator, initial.clone(), NoopProgressCallback).unwrap();
    assert_eq!(outcome.final_population, initial);
    for stats in &outcome.history {
        assert_eq!(stats.best_fitness, stats.worst_fitness);
    }
}

#[test]
fn test_configuration_error_before_any_generation() {
    let prices = random_walk(50, 1);
    let config = EvolutionConfig {
        elite_count: 1,
        ..Default::default()
    };
    let mut callback = CountingCallback::default();

    let result = run_search(&prices, &config, &mut callback);
    assert!(matches!(result, Err(MaevoError::Configuration(_))));
    assert_eq!(callback.started, 0);
}

#[test]
fn test_callback_sees_every_candidate() {
    let prices = random_walk(80, 2);
    let config = EvolutionConfig {
        population_size: 6,
        generations: 3,
        elite_count: 2,
        short_window_range: WindowRange::new(2, 5),
        long_window_range: WindowRange::new(6, 20),
        seed: Some(3),
        ..Default::default()
    };
    let mut callback = CountingCallback::default();

    run_search(&prices, &config, &mut callback).unwrap();
    assert_eq!(callback.started, 3);
    assert_eq!(callback.completed, 3);
    assert_eq!(callback.evaluated, 18);
}

#[test]
fn test_fitness_finite_when_long_window_exceeds_series() {
    let prices = random_walk(40, 6);
    for long in [39, 40, 41, 200] {
        let fitness = evaluate(&prices, &ParameterPair::new(5, long)).unwrap();
        assert!(fitness.is_finite());
    }
    assert_eq!(evaluate(&prices, &ParameterPair::new(5, 200)).unwrap(), 0.0);
}

#[test]
fn test_select_top_properties() {
    let mut rng = StdRng::seed_from_u64(99);
    let prices = random_walk(200, 10);
    let evaluator = FitnessEvaluator::new(&prices);
    let population: Vec<ParameterPair> = (0..15)
        .map(|_| ParameterPair::new(rng.gen_range(2..=15), rng.gen_range(16..=60)))
        .collect();
    let scored = evaluate_population(&evaluator, &population).unwrap();

    for k in [0, 1, 5, 15, 40] {
        let top = select_top(&scored, k);
        assert_eq!(top.len(), k.min(scored.len()));
        assert!(top.iter().all(|p| population.contains(p)));

        let fitness: Vec<f64> = top
            .iter()
            .map(|p| scored.iter().find(|s| s.candidate == *p).unwrap().fitness)
            .collect();
        assert!(fitness.windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn test_crossover_is_its_own_inverse() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let a = ParameterPair::new(rng.gen_range(1..50), rng.gen_range(50..200));
        let b = ParameterPair::new(rng.gen_range(1..50), rng.gen_range(50..200));

        let (c1, c2) = crossover(&a, &b);
        let (d1, d2) = crossover(&c1, &c2);
        assert!((d1 == a && d2 == b) || (d1 == b && d2 == a));
    }
}

#[test]
fn test_best_is_max_of_final_population() {
    let prices = random_walk(250, 12);
    let config = EvolutionConfig {
        population_size: 12,
        generations: 3,
        elite_count: 4,
        short_window_range: WindowRange::new(2, 10),
        long_window_range: WindowRange::new(11, 50),
        seed: Some(12),
        ..Default::default()
    };

    let result = run_search(&prices, &config, NoopProgressCallback).unwrap();
    let evaluator = FitnessEvaluator::new(&prices);
    let scored: Vec<ScoredCandidate> =
        evaluate_population(&evaluator, &result.outcome.final_population).unwrap();

    assert!(scored.iter().all(|s| s.fitness <= result.best.fitness));
    assert!(result.outcome.final_population.contains(&result.best.candidate));
}
