//! Reversible min-max scaling.
//!
//! Model fitting happens on the scaled series; the horizon-sum of the
//! predictions is inverse-transformed back to currency units once, at
//! the end.

use crate::error::{ForecastError, Result};

/// Range below which a series is treated as constant.
const CONSTANT_RANGE_EPS: f64 = 1e-10;

/// Min-max normalization into [0, 1] with an exact scalar inverse.
///
/// Constant-series policy: when `max - min` is (numerically) zero every
/// value maps to the 0.5 midpoint and `inverse` returns the constant for
/// *any* scaled value, so the degenerate round trip is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxScaler {
    min: f64,
    range: f64,
}

impl MinMaxScaler {
    /// Fit the scaler to a series.
    ///
    /// Errors on empty input and on non-finite values; NaN amounts must
    /// not reach model fitting silently.
    pub fn fit(series: &[f64]) -> Result<Self> {
        if series.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        if series.iter().any(|x| !x.is_finite()) {
            return Err(ForecastError::ComputationError(
                "non-finite value in series".to_string(),
            ));
        }

        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            min,
            range: max - min,
        })
    }

    /// Fit and transform in one step.
    pub fn fit_transform(series: &[f64]) -> Result<(Self, Vec<f64>)> {
        let scaler = Self::fit(series)?;
        let scaled = scaler.transform(series);
        Ok((scaler, scaled))
    }

    /// Whether the fitted series was constant.
    pub fn is_constant(&self) -> bool {
        self.range.abs() < CONSTANT_RANGE_EPS
    }

    /// Map values into [0, 1] using the fitted parameters.
    pub fn transform(&self, series: &[f64]) -> Vec<f64> {
        if self.is_constant() {
            return vec![0.5; series.len()];
        }
        series.iter().map(|&x| (x - self.min) / self.range).collect()
    }

    /// Map a single scaled value back to the original units.
    pub fn inverse(&self, value: f64) -> f64 {
        if self.is_constant() {
            return self.min;
        }
        value * self.range + self.min
    }
}
