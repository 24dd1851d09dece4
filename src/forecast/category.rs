//! Per-category forecasting: model selection by series length, fitting
//! on the scaled series, and horizon-sum inversion.

use crate::error::{ForecastError, Result};
use crate::models::arima::{ARIMA, SARIMA};
use crate::models::{BoxedForecaster, Forecaster};
use crate::transform::MinMaxScaler;

/// Categories with fewer observed months than this are not forecast.
pub const MIN_OBSERVED_MONTHS: usize = 3;

/// Observed months required for the trend model, ARIMA(1,1,1).
pub const TREND_MODEL_MIN_MONTHS: usize = 6;

/// Observed months required for the seasonal model,
/// SARIMA(1,1,1)(1,1,1)\[12\].
pub const SEASONAL_MODEL_MIN_MONTHS: usize = 12;

/// Length of the seasonal cycle in months.
pub const SEASONAL_PERIOD: usize = 12;

/// Pick the model family for a series of the given observed length.
///
/// The thresholds encode domain assumptions, not tuning: 12 observed
/// months is the shortest history that can carry a yearly cycle, 6 is
/// enough for trend plus noise, and below that only a heavily smoothed
/// ARIMA(0,1,1) avoids overfit.
pub fn model_for_length(observed_months: usize) -> BoxedForecaster {
    if observed_months >= SEASONAL_MODEL_MIN_MONTHS {
        Box::new(SARIMA::new(1, 1, 1, 1, 1, 1, SEASONAL_PERIOD))
    } else if observed_months >= TREND_MODEL_MIN_MONTHS {
        Box::new(ARIMA::new(1, 1, 1))
    } else {
        Box::new(ARIMA::new(0, 1, 1))
    }
}

/// Forecast the total spend over the next `horizon` months for one
/// category's monthly series.
///
/// The series holds one value per *observed* month in chronological
/// order; calendar gaps are not zero-filled. Fitting happens on a
/// min-max scaled copy; the point estimate is the horizon-sum of the
/// scaled predictions, inverse-transformed once and clamped at zero.
pub fn forecast_category(values: &[f64], horizon: usize) -> Result<f64> {
    if horizon == 0 {
        return Err(ForecastError::InvalidHorizon { got: horizon });
    }
    if values.len() < MIN_OBSERVED_MONTHS {
        return Err(ForecastError::InsufficientData {
            needed: MIN_OBSERVED_MONTHS,
            got: values.len(),
        });
    }

    let (scaler, scaled) = MinMaxScaler::fit_transform(values)?;

    let mut model = model_for_length(values.len());
    model.fit(&scaled)?;

    let predictions = model.predict(horizon)?;
    let scaled_sum: f64 = predictions.iter().sum();
    if !scaled_sum.is_finite() {
        return Err(ForecastError::ComputationError(format!(
            "{} produced a non-finite forecast",
            model.name()
        )));
    }

    Ok(scaler.inverse(scaled_sum).max(0.0))
}
