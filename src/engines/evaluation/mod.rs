pub mod fitness;
pub mod signal;

pub use fitness::{evaluate, evaluate_population, FitnessEvaluator, FitnessFunction};
pub use signal::compute_signals;
