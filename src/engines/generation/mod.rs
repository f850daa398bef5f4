pub mod evolution_engine;
pub mod operators;
pub mod population;
pub mod progress;
pub mod stats;

pub use evolution_engine::{best_candidate, run_search, EvolutionEngine, EvolutionOutcome, SearchResult};
pub use operators::{crossover, mutate, select_top};
pub use population::initialize_population;
pub use progress::{LogProgressCallback, NoopProgressCallback, ProgressCallback};
pub use stats::GenerationStats;
