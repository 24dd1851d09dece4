//! # spendcast
//!
//! Per-category spending forecasts from irregular transaction ledgers.
//!
//! Takes a cleaned transaction table, aggregates it into one monthly-spend
//! series per category, and produces an H-month-ahead total-spend forecast
//! for every category with enough history. The model family is chosen by
//! observed series length: seasonal ARIMA once a full yearly cycle is
//! available, trend-only ARIMA below that. Fitting happens on a min-max
//! scaled copy of each series, and one category's pathological data never
//! prevents forecasts for its siblings.

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod forecast;
pub mod models;
pub mod transform;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{MonthlyLedger, Transaction, YearMonth};
    pub use crate::error::{ForecastError, Result};
    pub use crate::forecast::{forecast_spending, ForecastEntry};
    pub use crate::models::Forecaster;
}
