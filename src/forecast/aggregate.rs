//! Ledger-wide forecasting with per-category fault isolation.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{MonthlyLedger, Transaction};
use crate::error::{ForecastError, Result};
use crate::forecast::category::forecast_category;

/// Forecasted total spend for one category over the requested horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub category: String,
    /// Total forecasted spend over the horizon, never negative.
    pub forecasted_amount: f64,
}

/// Forecast the total spend per category over the next `horizon` months.
///
/// Categories with fewer than three observed months, and categories
/// whose fit fails, are skipped rather than failing the call: partial
/// results are the expected steady state, and absence from the output is
/// the signal. Skips are recorded on the diagnostic log so operators can
/// still see them. Only a zero horizon is rejected up front.
///
/// The output carries one entry per successful category, in the
/// ledger's deterministic category order; sorting, materiality
/// thresholds, and top-N truncation are the caller's concern.
pub fn forecast_spending(
    transactions: &[Transaction],
    horizon: usize,
) -> Result<Vec<ForecastEntry>> {
    if horizon == 0 {
        return Err(ForecastError::InvalidHorizon { got: horizon });
    }

    let ledger = MonthlyLedger::from_transactions(transactions);
    let mut entries = Vec::new();

    for (category, months) in ledger.iter() {
        let series: Vec<f64> = months.values().copied().collect();
        trace!(
            "category {:?}: {} observed months, horizon {}",
            category,
            series.len(),
            horizon
        );

        match forecast_category(&series, horizon) {
            Ok(forecasted_amount) => entries.push(ForecastEntry {
                category: category.to_string(),
                forecasted_amount,
            }),
            Err(err) => {
                debug!("skipping category {:?}: {}", category, err);
            }
        }
    }

    Ok(entries)
}
