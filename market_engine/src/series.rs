//! Random-walk price series for chart backfill.
//!
//! One-shot and pure apart from the randomness source: the result is a
//! standalone `Vec<f64>`, never linked back to any live instrument. Each step
//! perturbs the previous value multiplicatively by a uniform percentage drawn
//! from `[-volatility/2, +volatility/2]`, clamps it to a positive floor, and
//! stores it at two decimals. The rounded value feeds the next step.

use market_common::fmt::round_dp;
use market_common::{EngineError, Result};

use crate::noise::{Noise, ThreadNoise};

/// Values never walk below this, no matter how long the downward drift runs.
const SERIES_FLOOR: f64 = 0.1;

/// Stored precision of series values.
const SERIES_DECIMALS: u32 = 2;

/// Generate a price series using the thread-local RNG.
///
/// See [`generate_series_with`] for the contract; this is the convenience
/// entry point for callers that do not care about reproducibility.
pub fn generate_series(length: usize, start: f64, volatility_percent: f64) -> Result<Vec<f64>> {
    generate_series_with(length, start, volatility_percent, &mut ThreadNoise)
}

/// Generate a series of exactly `length` prices, oldest first.
///
/// The first element is `start` verbatim. A zero `volatility_percent` yields
/// a constant series; `length == 1` yields `[start]` regardless of
/// volatility. Fails fast on a zero `length`, a non-finite `start`, or a
/// negative/non-finite `volatility_percent`.
pub fn generate_series_with(
    length: usize,
    start: f64,
    volatility_percent: f64,
    noise: &mut dyn Noise,
) -> Result<Vec<f64>> {
    if length == 0 {
        return Err(EngineError::EmptySeries);
    }
    if !start.is_finite() {
        return Err(EngineError::NonFiniteStart(start));
    }
    if !volatility_percent.is_finite() || volatility_percent < 0.0 {
        return Err(EngineError::InvalidVolatility(volatility_percent));
    }

    let mut prices = Vec::with_capacity(length);
    prices.push(start);

    for i in 1..length {
        let perturbation = (noise.sample_unit() - 0.5) * volatility_percent;
        let next = (prices[i - 1] * (1.0 + perturbation / 100.0)).max(SERIES_FLOOR);
        prices.push(round_dp(next, SERIES_DECIMALS));
    }

    Ok(prices)
}
