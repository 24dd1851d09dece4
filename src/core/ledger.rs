//! Transaction records and their aggregation into monthly category series.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single cleaned transaction.
///
/// The ingestion layer is expected to have normalized amounts to
/// outflow-as-positive spend and dropped rows with unparsable dates or
/// amounts before they reach this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date of the operation.
    pub date: NaiveDate,
    /// Spend amount in currency units.
    pub amount: f64,
    /// Category label assigned upstream.
    pub category: String,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
        }
    }
}

/// Calendar-month key, ordered chronologically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month (January = 1).
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Calendar features derived from a transaction date.
///
/// Available as exogenous regressors for callers that want them; the
/// univariate forecast path does not consume these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarFeatures {
    /// 1-based month (January = 1).
    pub month: u32,
    /// Day of week, Monday = 0.
    pub day_of_week: u32,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Cyclic encoding of the month over a 12-month period.
    pub month_sin: f64,
    pub month_cos: f64,
    /// Cyclic encoding of the day of week over a 7-day period.
    pub day_of_week_sin: f64,
    pub day_of_week_cos: f64,
}

impl CalendarFeatures {
    pub fn from_date(date: NaiveDate) -> Self {
        let month = date.month();
        let day_of_week = date.weekday().num_days_from_monday();

        let month_angle = 2.0 * std::f64::consts::PI * month as f64 / 12.0;
        let dow_angle = 2.0 * std::f64::consts::PI * day_of_week as f64 / 7.0;

        Self {
            month,
            day_of_week,
            is_weekend: day_of_week >= 5,
            month_sin: month_angle.sin(),
            month_cos: month_angle.cos(),
            day_of_week_sin: dow_angle.sin(),
            day_of_week_cos: dow_angle.cos(),
        }
    }
}

/// Monthly spend totals grouped by category.
///
/// At most one entry per `(category, month)` pair. Months in which a
/// category had no transactions are absent rather than zero-filled, so
/// the length of a category's series is its count of *observed* months.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyLedger {
    totals: BTreeMap<String, BTreeMap<YearMonth, f64>>,
}

impl MonthlyLedger {
    /// Group a cleaned transaction table into monthly category totals.
    ///
    /// Pure transform: the input is not modified and no state outlives
    /// the returned ledger.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut totals: BTreeMap<String, BTreeMap<YearMonth, f64>> = BTreeMap::new();

        for tx in transactions {
            let month = YearMonth::from_date(tx.date);
            *totals
                .entry(tx.category.clone())
                .or_default()
                .entry(month)
                .or_insert(0.0) += tx.amount;
        }

        Self { totals }
    }

    /// Number of categories in the ledger.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Categories in deterministic (lexicographic) order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.totals.keys().map(String::as_str)
    }

    /// Iterate categories with their monthly totals, chronologically keyed.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<YearMonth, f64>)> {
        self.totals.iter().map(|(cat, months)| (cat.as_str(), months))
    }

    /// Count of observed months for a category (0 if unknown).
    pub fn observed_months(&self, category: &str) -> usize {
        self.totals.get(category).map_or(0, BTreeMap::len)
    }

    /// A category's monthly spend values in chronological order.
    pub fn series(&self, category: &str) -> Option<Vec<f64>> {
        self.totals
            .get(category)
            .map(|months| months.values().copied().collect())
    }

    /// The observed months for a category in chronological order.
    pub fn months(&self, category: &str) -> Option<Vec<YearMonth>> {
        self.totals
            .get(category)
            .map(|months| months.keys().copied().collect())
    }
}
