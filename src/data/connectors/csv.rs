use crate::error::{Result, MaevoError};
use polars::prelude::*;
use std::path::Path;
use super::{types::RequiredColumn, validator::DataValidator};

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MaevoError::DataLoading(format!(
                "CSV file not found: {}",
                path.display()
            )));
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()
            .map_err(|e| MaevoError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load a CSV file and reduce it to the standard `timestamp`/`close` frame
    pub fn load_and_validate<P: AsRef<Path>>(path: P, min_rows: usize) -> Result<DataFrame> {
        let df = Self::load(&path)?;
        let df = Self::normalize_columns(df)?;

        DataValidator::validate_minimum_rows(&df, min_rows)?;

        // Warn about nulls but don't fail
        let null_report = DataValidator::check_nulls(&df);
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        Ok(df)
    }

    /// Select the timestamp and close columns under their standard names, with
    /// close cast to f64
    pub fn normalize_columns(df: DataFrame) -> Result<DataFrame> {
        let timestamp = DataValidator::require_column(&df, RequiredColumn::Timestamp)?;
        let close = DataValidator::require_column(&df, RequiredColumn::Close)?;
        DataValidator::validate_close_numeric(&df, close)?;

        let normalized = df
            .lazy()
            .select([
                col(timestamp).alias(RequiredColumn::Timestamp.as_str()),
                col(close)
                    .cast(DataType::Float64)
                    .alias(RequiredColumn::Close.as_str()),
            ])
            .collect()?;

        Ok(normalized)
    }
}
