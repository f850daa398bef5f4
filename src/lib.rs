//! Genetic search for moving-average crossover parameters.
//!
//! A population of `(short_window, long_window)` pairs is scored against a
//! price history, the fittest are kept, and crossover plus mutation refill
//! the population for a fixed number of generations.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod report;
pub mod types;

pub use crate::config::{AppConfig, ConfigManager, DataConfig, EvolutionConfig, MutationScheme};
pub use crate::data::PriceSeries;
pub use crate::engines::evaluation::{FitnessEvaluator, FitnessFunction};
pub use crate::engines::generation::{run_search, EvolutionEngine, EvolutionOutcome, SearchResult};
pub use crate::error::{MaevoError, Result};
pub use crate::types::{ParameterPair, Population, ScoredCandidate, WindowRange};
