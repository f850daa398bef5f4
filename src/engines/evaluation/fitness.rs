use super::signal::{compute_signals, STRATEGY_RETURNS};
use crate::data::PriceSeries;
use crate::error::Result;
use crate::types::{ParameterPair, ScoredCandidate};

/// Anything that can score a candidate. The engine only sees this trait, so
/// tests can drive it with a plain closure.
pub trait FitnessFunction {
    fn evaluate(&self, pair: &ParameterPair) -> Result<f64>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&ParameterPair) -> Result<f64>,
{
    fn evaluate(&self, pair: &ParameterPair) -> Result<f64> {
        self(pair)
    }
}

/// Scores pairs by the summed (not compounded) strategy returns over a price history.
pub struct FitnessEvaluator<'a> {
    prices: &'a PriceSeries,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(prices: &'a PriceSeries) -> Self {
        Self { prices }
    }

    pub fn prices(&self) -> &PriceSeries {
        self.prices
    }
}

impl FitnessFunction for FitnessEvaluator<'_> {
    fn evaluate(&self, pair: &ParameterPair) -> Result<f64> {
        evaluate(self.prices, pair)
    }
}

/// Sum of strategy returns for one pair.
///
/// Undefined rows (warm-up, or a long window longer than the series) and
/// non-finite returns count as 0, so the result is always a finite number.
pub fn evaluate(prices: &PriceSeries, pair: &ParameterPair) -> Result<f64> {
    let frame = compute_signals(prices, pair)?;
    let returns = frame.column(STRATEGY_RETURNS)?.f64()?;

    Ok(returns
        .into_iter()
        .flatten()
        .filter(|r| r.is_finite())
        .sum())
}

/// Score every candidate, keeping input order.
pub fn evaluate_population<F: FitnessFunction + ?Sized>(
    fitness: &F,
    population: &[ParameterPair],
) -> Result<Vec<ScoredCandidate>> {
    population
        .iter()
        .map(|pair| Ok(ScoredCandidate::new(fitness.evaluate(pair)?, *pair)))
        .collect()
}
