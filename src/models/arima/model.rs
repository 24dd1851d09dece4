//! ARIMA (Autoregressive Integrated Moving Average) model.

use crate::error::{ForecastError, Result};
use crate::models::arima::diff::{difference, integrate};
use crate::models::Forecaster;
use crate::utils::optimization::{nelder_mead, SimplexConfig};

/// ARIMA model specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ARIMASpec {
    /// AR order (p)
    pub p: usize,
    /// Differencing order (d)
    pub d: usize,
    /// MA order (q)
    pub q: usize,
}

impl ARIMASpec {
    /// Create a new ARIMA specification.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Minimum series length that leaves at least one estimation term
    /// after differencing.
    pub fn min_observations(&self) -> usize {
        self.d + self.p.max(self.q) + 1
    }
}

impl Default for ARIMASpec {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

/// ARIMA forecasting model.
///
/// ARIMA(p, d, q) combines:
/// - AR(p): autoregressive component
/// - I(d): differencing for stationarity
/// - MA(q): moving average component
///
/// Parameters are estimated by conditional least squares on the
/// differenced series, minimized with a Nelder-Mead simplex search.
#[derive(Debug, Clone)]
pub struct ARIMA {
    spec: ARIMASpec,
    ar_coefficients: Vec<f64>,
    ma_coefficients: Vec<f64>,
    intercept: f64,
    /// Original series (for integration).
    original: Option<Vec<f64>>,
    /// Differenced series.
    differenced: Option<Vec<f64>>,
    /// Fitted values on the differenced scale.
    fitted_diff: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
}

impl ARIMA {
    /// Create a new ARIMA model.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self {
            spec: ARIMASpec::new(p, d, q),
            ar_coefficients: vec![],
            ma_coefficients: vec![],
            intercept: 0.0,
            original: None,
            differenced: None,
            fitted_diff: None,
            residuals: None,
        }
    }

    /// Get the model specification.
    pub fn spec(&self) -> ARIMASpec {
        self.spec
    }

    /// Get AR coefficients.
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coefficients
    }

    /// Get MA coefficients.
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coefficients
    }

    /// Get the intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Conditional sum of squares for the given parameters.
    fn calculate_css(
        diff_series: &[f64],
        p: usize,
        q: usize,
        ar: &[f64],
        ma: &[f64],
        intercept: f64,
    ) -> f64 {
        let n = diff_series.len();
        let start = p.max(q);

        if n <= start {
            return f64::MAX;
        }

        let mut residuals = vec![0.0; n];
        let mut css = 0.0;

        for t in start..n {
            let mut pred = intercept;
            for i in 0..p {
                pred += ar[i] * (diff_series[t - 1 - i] - intercept);
            }
            for i in 0..q {
                pred += ma[i] * residuals[t - 1 - i];
            }

            let error = diff_series[t] - pred;
            residuals[t] = error;
            css += error * error;
        }

        css
    }

    /// Estimate parameters by conditional least squares.
    fn estimate_parameters(&mut self, diff_series: &[f64]) {
        let p = self.spec.p;
        let q = self.spec.q;
        let mean = diff_series.iter().sum::<f64>() / diff_series.len() as f64;

        if p == 0 && q == 0 {
            self.intercept = mean;
            self.ar_coefficients = vec![];
            self.ma_coefficients = vec![];
            return;
        }

        let mut initial = vec![0.0; 1 + p + q];
        initial[0] = mean;
        for i in 0..p {
            initial[1 + i] = 0.1 / (i + 1) as f64;
        }
        for i in 0..q {
            initial[1 + p + i] = 0.1 / (i + 1) as f64;
        }

        // AR and MA coefficients bounded for stationarity/invertibility
        let mut bounds = vec![(f64::NEG_INFINITY, f64::INFINITY)];
        bounds.extend(std::iter::repeat((-0.99, 0.99)).take(p + q));

        let result = nelder_mead(
            |params| {
                let intercept = params[0];
                let ar = &params[1..1 + p];
                let ma = &params[1 + p..];
                Self::calculate_css(diff_series, p, q, ar, ma, intercept)
            },
            &initial,
            Some(&bounds),
            SimplexConfig::default(),
        );

        self.intercept = result.point[0];
        self.ar_coefficients = result.point[1..1 + p].to_vec();
        self.ma_coefficients = result.point[1 + p..].to_vec();
    }

    /// Fitted values and residuals on the differenced scale.
    fn calculate_fitted(&mut self, diff_series: &[f64]) {
        let n = diff_series.len();
        let p = self.spec.p;
        let q = self.spec.q;
        let start = p.max(q);

        let mut fitted = vec![f64::NAN; n];
        let mut residuals = vec![0.0; n];

        for t in start..n {
            let mut pred = self.intercept;
            for i in 0..p {
                pred += self.ar_coefficients[i] * (diff_series[t - 1 - i] - self.intercept);
            }
            for i in 0..q {
                pred += self.ma_coefficients[i] * residuals[t - 1 - i];
            }

            fitted[t] = pred;
            residuals[t] = diff_series[t] - pred;
        }

        self.fitted_diff = Some(fitted);
        self.residuals = Some(residuals);
    }
}

impl Default for ARIMA {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

impl Forecaster for ARIMA {
    fn fit(&mut self, series: &[f64]) -> Result<()> {
        if series.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        let min_len = self.spec.min_observations();
        if series.len() < min_len {
            return Err(ForecastError::InsufficientData {
                needed: min_len,
                got: series.len(),
            });
        }

        self.original = Some(series.to_vec());

        let diff_series = difference(series, self.spec.d);
        self.estimate_parameters(&diff_series);
        self.calculate_fitted(&diff_series);
        self.differenced = Some(diff_series);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let original = self.original.as_ref().ok_or(ForecastError::FitRequired)?;
        let diff_series = self
            .differenced
            .as_ref()
            .ok_or(ForecastError::FitRequired)?;
        let residuals = self.residuals.as_ref().ok_or(ForecastError::FitRequired)?;

        if horizon == 0 {
            return Ok(vec![]);
        }

        let p = self.spec.p;
        let q = self.spec.q;

        // Forecast on the differenced scale, then integrate back.
        let mut extended = diff_series.clone();
        let mut extended_residuals = residuals.clone();

        for _ in 0..horizon {
            let t = extended.len();
            let mut pred = self.intercept;

            for i in 0..p {
                if t > i {
                    pred += self.ar_coefficients[i] * (extended[t - 1 - i] - self.intercept);
                }
            }
            // Future residuals are zero
            for i in 0..q {
                if t > i {
                    pred += self.ma_coefficients[i] * extended_residuals[t - 1 - i];
                }
            }

            extended.push(pred);
            extended_residuals.push(0.0);
        }

        let forecast_diff = extended[diff_series.len()..].to_vec();
        Ok(integrate(&forecast_diff, original, self.spec.d))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted_diff.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "ARIMA"
    }
}
