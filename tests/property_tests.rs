//! Property-based tests for the spending forecast pipeline.
//!
//! These verify invariants that should hold for any cleaned transaction
//! table: forecasts are never negative, ineligible categories never
//! appear, and the pipeline is deterministic.

use chrono::NaiveDate;
use proptest::prelude::*;
use spendcast::core::{MonthlyLedger, Transaction};
use spendcast::forecast::{forecast_spending, MIN_OBSERVED_MONTHS};

/// Strategy for a single transaction with a bounded date range and a
/// small category alphabet, so generated tables exercise both dense and
/// sparse categories.
fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        2021i32..2026,
        1u32..=12,
        1u32..=28,
        0.0f64..5000.0,
        prop::sample::select(vec!["Groceries", "Transport", "Dining", "Utilities", "Misc"]),
    )
        .prop_map(|(year, month, day, amount, category)| {
            Transaction::new(
                NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                amount,
                category,
            )
        })
}

fn table_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction_strategy(), 0..120)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn forecasts_are_non_negative_and_finite(
        transactions in table_strategy(),
        horizon in 1usize..18,
    ) {
        let entries = forecast_spending(&transactions, horizon).unwrap();
        for entry in &entries {
            prop_assert!(entry.forecasted_amount >= 0.0);
            prop_assert!(entry.forecasted_amount.is_finite());
        }
    }

    #[test]
    fn ineligible_categories_never_appear(
        transactions in table_strategy(),
        horizon in 1usize..18,
    ) {
        let ledger = MonthlyLedger::from_transactions(&transactions);
        let entries = forecast_spending(&transactions, horizon).unwrap();

        for entry in &entries {
            prop_assert!(
                ledger.observed_months(&entry.category) >= MIN_OBSERVED_MONTHS,
                "category {:?} appeared with only {} observed months",
                entry.category,
                ledger.observed_months(&entry.category)
            );
        }
    }

    #[test]
    fn each_category_appears_at_most_once(
        transactions in table_strategy(),
        horizon in 1usize..12,
    ) {
        let entries = forecast_spending(&transactions, horizon).unwrap();
        let mut categories: Vec<&str> =
            entries.iter().map(|e| e.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        prop_assert_eq!(categories.len(), entries.len());
    }

    #[test]
    fn forecasting_is_deterministic(
        transactions in table_strategy(),
        horizon in 1usize..12,
    ) {
        let first = forecast_spending(&transactions, horizon).unwrap();
        let second = forecast_spending(&transactions, horizon).unwrap();
        prop_assert_eq!(first, second);
    }
}
