use super::traits::ConfigSection;
use crate::error::MaevoError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the price history comes from and which slice of it to use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    pub min_rows: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: None,
            start: None,
            end: None,
            min_rows: 2,
        }
    }
}

impl ConfigSection for DataConfig {
    fn section_name() -> &'static str {
        "data"
    }

    fn validate(&self) -> Result<(), MaevoError> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(MaevoError::Configuration(format!(
                    "Start date {} is after end date {}",
                    start, end
                )));
            }
        }
        Ok(())
    }
}
