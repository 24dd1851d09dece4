//! Data transformations applied around model fitting.

mod scale;

pub use scale::MinMaxScaler;
