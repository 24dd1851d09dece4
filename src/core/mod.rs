//! Core data types for the transaction ledger.

mod ledger;

pub use ledger::{CalendarFeatures, MonthlyLedger, Transaction, YearMonth};
