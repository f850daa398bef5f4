use crate::error::{Result, MaevoError};
use polars::prelude::*;
use super::types::RequiredColumn;

pub struct DataValidator;

impl DataValidator {
    /// Find column by checking aliases
    pub fn find_column(df: &DataFrame, required: RequiredColumn) -> Option<&'static str> {
        let columns = df.get_column_names();
        required
            .aliases()
            .into_iter()
            .find(|alias| columns.iter().any(|col| col.as_str() == *alias))
    }

    pub fn require_column(df: &DataFrame, required: RequiredColumn) -> Result<&'static str> {
        Self::find_column(df, required).ok_or_else(|| {
            MaevoError::DataLoading(format!(
                "Missing required column: {} (tried aliases: {:?})",
                required.as_str(),
                required.aliases()
            ))
        })
    }

    /// Close prices must be numeric to be cast to f64
    pub fn validate_close_numeric(df: &DataFrame, name: &str) -> Result<()> {
        let series = df.column(name)?;
        if !matches!(series.dtype(), DataType::Float64 | DataType::Float32 | DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32) {
            return Err(MaevoError::DataLoading(format!(
                "Column '{}' must be numeric, found {:?}",
                name,
                series.dtype()
            )));
        }
        Ok(())
    }

    /// Check for minimum required rows
    pub fn validate_minimum_rows(df: &DataFrame, min_rows: usize) -> Result<()> {
        if df.height() < min_rows {
            return Err(MaevoError::DataLoading(format!(
                "Insufficient data: {} rows, minimum {} required",
                df.height(),
                min_rows
            )));
        }
        Ok(())
    }

    /// Check for null values in every column
    pub fn check_nulls(df: &DataFrame) -> Vec<(String, usize)> {
        df.get_columns()
            .iter()
            .filter(|col| col.null_count() > 0)
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect()
    }
}
