//! Spending forecasts: per-category model selection and ledger-wide
//! aggregation with per-category fault isolation.

mod aggregate;
mod category;

pub use aggregate::{forecast_spending, ForecastEntry};
pub use category::{
    forecast_category, model_for_length, MIN_OBSERVED_MONTHS, SEASONAL_MODEL_MIN_MONTHS,
    SEASONAL_PERIOD, TREND_MODEL_MIN_MONTHS,
};
