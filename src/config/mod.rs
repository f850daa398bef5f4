pub mod traits;
pub mod evolution;
pub mod data;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::{EvolutionConfig, MutationScheme};
pub use data::DataConfig;
pub use traits::ConfigSection;
