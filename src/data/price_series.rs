use crate::config::DataConfig;
use crate::data::connectors::{CsvConnector, RequiredColumn};
use crate::error::{MaevoError, Result};
use chrono::NaiveDate;
use polars::df;
use polars::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Closing prices for one instrument, ordered by time.
///
/// Always holds exactly a `timestamp` column and a Float64 `close` column.
/// The core only ever reads it; signal computation works on a clone of the
/// frame so derived columns never leak back to the caller.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    frame: DataFrame,
}

impl PriceSeries {
    /// Wrap an existing frame, resolving column aliases such as `Date`/`Close`.
    pub fn from_frame(df: DataFrame) -> Result<Self> {
        let frame = CsvConnector::normalize_columns(df)?;
        Ok(Self { frame })
    }

    /// Synthetic series with integer timestamps `0..n`.
    pub fn from_closes(closes: &[f64]) -> Result<Self> {
        let timestamps: Vec<i64> = (0..closes.len() as i64).collect();
        let frame = df! {
            RequiredColumn::Timestamp.as_str() => &timestamps,
            RequiredColumn::Close.as_str() => closes,
        }?;
        Ok(Self { frame })
    }

    /// Load the configured CSV file and apply the optional date window.
    pub fn load_csv(config: &DataConfig) -> Result<Self> {
        let path = config.csv_path.as_ref().ok_or_else(|| {
            MaevoError::DataLoading("No CSV path configured for price data".to_string())
        })?;

        let frame = CsvConnector::load_and_validate(path, config.min_rows)?;
        let series = Self { frame }.between(config.start, config.end)?;
        if series.len() < config.min_rows {
            return Err(MaevoError::DataLoading(format!(
                "Only {} rows left after date filtering, minimum {} required",
                series.len(),
                config.min_rows
            )));
        }

        log::info!("Loaded {} price rows from {}", series.len(), path.display());
        Ok(series)
    }

    /// Keep rows whose date falls in `[start, end]`. Either bound may be open.
    ///
    /// Timestamps are read as text and the leading `YYYY-MM-DD` is parsed, so
    /// both plain dates and datetimes work. Rows that don't parse are dropped.
    pub fn between(self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        if start.is_none() && end.is_none() {
            return Ok(self);
        }

        let timestamps = self
            .frame
            .column(RequiredColumn::Timestamp.as_str())?
            .cast(&DataType::String)?;
        let timestamps = timestamps.str()?;

        let mut unparsed = 0usize;
        let mask: Vec<bool> = timestamps
            .into_iter()
            .map(|value| {
                let date = value.and_then(|raw| {
                    raw.get(..10)
                        .and_then(|prefix| NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok())
                });
                match date {
                    Some(date) => {
                        start.map_or(true, |s| date >= s) && end.map_or(true, |e| date <= e)
                    }
                    None => {
                        unparsed += 1;
                        false
                    }
                }
            })
            .collect();

        if unparsed > 0 {
            log::warn!("Dropped {} rows with unparseable timestamps", unparsed);
        }

        let mask = BooleanChunked::from_slice("mask".into(), &mask);
        let frame = self.frame.filter(&mask)?;
        Ok(Self { frame })
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn closes(&self) -> Result<Vec<Option<f64>>> {
        let close = self.frame.column(RequiredColumn::Close.as_str())?.f64()?;
        Ok(close.into_iter().collect())
    }
}
