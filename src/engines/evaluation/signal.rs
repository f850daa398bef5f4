use crate::data::{PriceSeries, RequiredColumn};
use crate::error::{MaevoError, Result};
use crate::types::ParameterPair;
use polars::prelude::*;

pub const SHORT_MAVG: &str = "short_mavg";
pub const LONG_MAVG: &str = "long_mavg";
pub const SIGNAL: &str = "signal";
pub const POSITIONS: &str = "positions";
pub const RETURNS: &str = "returns";
pub const STRATEGY_RETURNS: &str = "strategy_returns";

const ROW_INDEX: &str = "row_idx";

fn rolling_window(period: usize) -> RollingOptionsFixedWindow {
    RollingOptionsFixedWindow {
        window_size: period,
        min_periods: period,
        ..Default::default()
    }
}

/// Run the moving-average crossover rule over a copy of `prices`.
///
/// Returns the price frame with these columns added:
/// - `short_mavg`, `long_mavg`: simple moving averages, null until a full window exists
/// - `signal`: 1.0 from row `short_window` on wherever short > long, else 0.0
/// - `positions`: first difference of `signal`
/// - `returns`: percentage change of close
/// - `strategy_returns`: `returns` times the previous row's `positions`
pub fn compute_signals(prices: &PriceSeries, pair: &ParameterPair) -> Result<DataFrame> {
    if pair.short_window == 0 || pair.long_window == 0 {
        return Err(MaevoError::Computation(format!(
            "Window lengths must be positive, got {}",
            pair
        )));
    }

    let close = col(RequiredColumn::Close.as_str());

    let frame = prices
        .frame()
        .clone()
        .lazy()
        .with_row_index(ROW_INDEX, None)
        .with_columns([
            close.clone().rolling_mean(rolling_window(pair.short_window)).alias(SHORT_MAVG),
            close.clone().rolling_mean(rolling_window(pair.long_window)).alias(LONG_MAVG),
            (close.clone() / close.shift(lit(1)) - lit(1.0)).alias(RETURNS),
        ])
        .with_column(
            when(
                col(ROW_INDEX)
                    .cast(DataType::Int64)
                    .gt_eq(lit(pair.short_window as i64))
                    .and(col(SHORT_MAVG).gt(col(LONG_MAVG))),
            )
            .then(lit(1.0))
            .otherwise(lit(0.0))
            .alias(SIGNAL),
        )
        .with_column((col(SIGNAL) - col(SIGNAL).shift(lit(1))).alias(POSITIONS))
        .with_column((col(RETURNS) * col(POSITIONS).shift(lit(1))).alias(STRATEGY_RETURNS))
        .collect()?;

    Ok(frame.drop(ROW_INDEX)?)
}
