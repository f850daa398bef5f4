use super::{data::DataConfig, evolution::EvolutionConfig, traits::ConfigSection};
use crate::error::MaevoError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `MAEVO__EVOLUTION__GENERATIONS=20`.
pub const ENV_PREFIX: &str = "MAEVO";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), MaevoError> {
        self.evolution.validate()?;
        self.data.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layer an optional TOML file and `MAEVO__*` environment variables over
    /// the built-in defaults, then validate the result.
    pub fn load<P: AsRef<Path>>(&mut self, path: Option<P>) -> Result<(), MaevoError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            let path = path.as_ref();
            if !path.exists() {
                return Err(MaevoError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        log::debug!(
            "Loaded [{}] and [{}] configuration sections",
            EvolutionConfig::section_name(),
            DataConfig::section_name()
        );
        self.config = config;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MaevoError> {
        self.load(Some(path))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MaevoError> {
        let toml_str = toml::to_string_pretty(&self.config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), MaevoError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
