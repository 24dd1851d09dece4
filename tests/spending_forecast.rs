//! End-to-end tests for the spending forecast pipeline: transaction
//! table in, per-category forecast table out.

use chrono::NaiveDate;
use spendcast::core::Transaction;
use spendcast::forecast::forecast_spending;
use spendcast::ForecastError;

fn tx(year: i32, month: u32, day: u32, amount: f64, category: &str) -> Transaction {
    Transaction::new(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        amount,
        category,
    )
}

/// One transaction per month for the given consecutive monthly values,
/// starting at `start_year`/`start_month`.
fn monthly(values: &[f64], start_year: i32, start_month: u32, category: &str) -> Vec<Transaction> {
    values
        .iter()
        .enumerate()
        .map(|(i, &amount)| {
            let months = (start_month as usize - 1) + i;
            let year = start_year + (months / 12) as i32;
            let month = (months % 12) as u32 + 1;
            tx(year, month, 10, amount, category)
        })
        .collect()
}

#[test]
fn thirteen_month_series_takes_the_seasonal_path() {
    let values = [
        100.0, 120.0, 90.0, 200.0, 150.0, 130.0, 110.0, 95.0, 140.0, 160.0, 170.0, 180.0, 200.0,
    ];
    let transactions = monthly(&values, 2023, 1, "Groceries");

    let entries = forecast_spending(&transactions, 2).unwrap();

    let groceries: Vec<_> = entries.iter().filter(|e| e.category == "Groceries").collect();
    assert_eq!(groceries.len(), 1);
    assert!(groceries[0].forecasted_amount >= 0.0);
    assert!(groceries[0].forecasted_amount.is_finite());
}

#[test]
fn two_observed_months_never_forecast() {
    let transactions = vec![
        tx(2024, 1, 5, 300.0, "RareExpense"),
        tx(2024, 4, 20, 150.0, "RareExpense"),
    ];

    for horizon in [1, 2, 6, 12, 24] {
        let entries = forecast_spending(&transactions, horizon).unwrap();
        assert!(
            entries.iter().all(|e| e.category != "RareExpense"),
            "RareExpense must be absent for horizon {}",
            horizon
        );
    }
}

#[test]
fn empty_table_yields_empty_result_not_error() {
    for horizon in [1, 6, 12] {
        let entries = forecast_spending(&[], horizon).unwrap();
        assert!(entries.is_empty());
    }
}

#[test]
fn zero_horizon_is_rejected() {
    let transactions = monthly(&[100.0, 110.0, 120.0, 130.0], 2024, 1, "Groceries");
    assert_eq!(
        forecast_spending(&transactions, 0),
        Err(ForecastError::InvalidHorizon { got: 0 })
    );
}

#[test]
fn pathological_categories_do_not_block_their_siblings() {
    let mut transactions = Vec::new();

    // Well-behaved: 13 months of groceries
    transactions.extend(monthly(
        &[
            100.0, 120.0, 90.0, 200.0, 150.0, 130.0, 110.0, 95.0, 140.0, 160.0, 170.0, 180.0,
            200.0,
        ],
        2023,
        1,
        "Groceries",
    ));

    // Constant zero spend for a year
    transactions.extend(monthly(&[0.0; 13], 2023, 1, "AllZero"));

    // A single extreme outlier month in an otherwise small series
    transactions.extend(monthly(
        &[20.0, 25.0, 1_000_000.0, 22.0, 18.0, 24.0],
        2023,
        1,
        "Spike",
    ));

    // Corrupt amounts that fail scaling outright
    transactions.extend(monthly(&[50.0, f64::NAN, 60.0, 70.0], 2023, 1, "Corrupt"));

    let entries = forecast_spending(&transactions, 3).unwrap();

    assert!(
        entries.iter().any(|e| e.category == "Groceries"),
        "well-behaved category must survive a mixed batch"
    );
    assert!(entries.iter().all(|e| e.category != "Corrupt"));
    for entry in &entries {
        assert!(entry.forecasted_amount >= 0.0);
        assert!(entry.forecasted_amount.is_finite());
    }
}

#[test]
fn forecasting_is_idempotent() {
    let mut transactions = Vec::new();
    transactions.extend(monthly(
        &[
            100.0, 120.0, 90.0, 200.0, 150.0, 130.0, 110.0, 95.0, 140.0, 160.0, 170.0, 180.0,
            200.0,
        ],
        2023,
        1,
        "Groceries",
    ));
    transactions.extend(monthly(
        &[40.0, 45.0, 38.0, 50.0, 47.0, 44.0, 52.0],
        2023,
        3,
        "Transport",
    ));
    transactions.extend(monthly(&[15.0, 300.0, 20.0], 2023, 6, "Hobbies"));

    let first = forecast_spending(&transactions, 4).unwrap();
    let second = forecast_spending(&transactions, 4).unwrap();

    assert_eq!(first, second);
}

#[test]
fn doubling_the_horizon_stays_finite() {
    let transactions = monthly(
        &[
            100.0, 120.0, 90.0, 200.0, 150.0, 130.0, 110.0, 95.0, 140.0, 160.0, 170.0, 180.0,
            200.0,
        ],
        2023,
        1,
        "Groceries",
    );

    for horizon in [3, 6, 12, 24] {
        let entries = forecast_spending(&transactions, horizon).unwrap();
        for entry in &entries {
            assert!(
                entry.forecasted_amount.is_finite(),
                "horizon {} produced a non-finite forecast",
                horizon
            );
            assert!(entry.forecasted_amount >= 0.0);
        }
    }
}

#[test]
fn calendar_gaps_shorten_the_observed_series() {
    // Four observed months spread across a year: the category is
    // eligible via the short-series model, not the seasonal one, because
    // gap months are not zero-filled.
    let transactions = vec![
        tx(2024, 1, 3, 80.0, "Sparse"),
        tx(2024, 3, 8, 95.0, "Sparse"),
        tx(2024, 7, 21, 70.0, "Sparse"),
        tx(2024, 12, 2, 110.0, "Sparse"),
    ];

    let entries = forecast_spending(&transactions, 2).unwrap();
    let sparse: Vec<_> = entries.iter().filter(|e| e.category == "Sparse").collect();
    assert_eq!(sparse.len(), 1);
    assert!(sparse[0].forecasted_amount >= 0.0);
}

#[test]
fn multiple_transactions_in_a_month_are_summed_before_forecasting() {
    // Three observed months, each split across several transactions
    let transactions = vec![
        tx(2024, 1, 2, 60.0, "Dining"),
        tx(2024, 1, 18, 40.0, "Dining"),
        tx(2024, 2, 7, 55.0, "Dining"),
        tx(2024, 2, 23, 65.0, "Dining"),
        tx(2024, 3, 11, 110.0, "Dining"),
    ];

    let entries = forecast_spending(&transactions, 1).unwrap();
    let dining: Vec<_> = entries.iter().filter(|e| e.category == "Dining").collect();
    assert_eq!(dining.len(), 1);
}
