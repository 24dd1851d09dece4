//! SARIMA (seasonal ARIMA) model.

use crate::error::{ForecastError, Result};
use crate::models::arima::diff::{
    difference, integrate, seasonal_difference, seasonal_integrate,
};
use crate::models::Forecaster;
use crate::utils::optimization::{nelder_mead, SimplexConfig};

/// SARIMA model specification: (p, d, q) x (P, D, Q)\[s\].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SARIMASpec {
    /// Non-seasonal AR order (p)
    pub p: usize,
    /// Non-seasonal differencing order (d)
    pub d: usize,
    /// Non-seasonal MA order (q)
    pub q: usize,
    /// Seasonal AR order (P)
    pub cap_p: usize,
    /// Seasonal differencing order (D)
    pub cap_d: usize,
    /// Seasonal MA order (Q)
    pub cap_q: usize,
    /// Seasonal period (s)
    pub period: usize,
}

impl SARIMASpec {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p: usize,
        d: usize,
        q: usize,
        cap_p: usize,
        cap_d: usize,
        cap_q: usize,
        period: usize,
    ) -> Self {
        Self {
            p,
            d,
            q,
            cap_p,
            cap_d,
            cap_q,
            period,
        }
    }

    /// Earliest estimation index on the fully differenced scale.
    fn estimation_start(&self) -> usize {
        self.p
            .max(self.q)
            .max(self.cap_p * self.period)
            .max(self.cap_q * self.period)
    }
}

/// SARIMA forecasting model.
///
/// Extends ARIMA with seasonal AR/MA terms and seasonal differencing at
/// a fixed period. Estimation is conditional least squares on the fully
/// differenced series, minimized with a Nelder-Mead simplex search.
///
/// Differencing orders are capped by the available history: a series too
/// short to difference at the requested order is differenced as far as
/// it allows, and when the differenced series leaves no estimable terms
/// the coefficients stay at zero. Forecasts then reduce to seasonal
/// continuation plus drift through the integration step, which keeps the
/// model usable right at one seasonal cycle of data.
#[derive(Debug, Clone)]
pub struct SARIMA {
    spec: SARIMASpec,
    ar_coefficients: Vec<f64>,
    seasonal_ar_coefficients: Vec<f64>,
    ma_coefficients: Vec<f64>,
    seasonal_ma_coefficients: Vec<f64>,
    intercept: f64,
    /// Differencing actually applied: (d, D).
    applied: (usize, usize),
    /// Original series (for seasonal integration).
    original: Option<Vec<f64>>,
    /// Series after seasonal differencing (for regular integration).
    seasonally_differenced: Option<Vec<f64>>,
    /// Fully differenced series the parameters were estimated on.
    differenced: Option<Vec<f64>>,
    /// Fitted values on the fully differenced scale.
    fitted_diff: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
}

impl SARIMA {
    /// Create a new SARIMA model.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p: usize,
        d: usize,
        q: usize,
        cap_p: usize,
        cap_d: usize,
        cap_q: usize,
        period: usize,
    ) -> Self {
        Self {
            spec: SARIMASpec::new(p, d, q, cap_p, cap_d, cap_q, period),
            ar_coefficients: vec![],
            seasonal_ar_coefficients: vec![],
            ma_coefficients: vec![],
            seasonal_ma_coefficients: vec![],
            intercept: 0.0,
            applied: (0, 0),
            original: None,
            seasonally_differenced: None,
            differenced: None,
            fitted_diff: None,
            residuals: None,
        }
    }

    /// Get the model specification.
    pub fn spec(&self) -> SARIMASpec {
        self.spec
    }

    /// Differencing orders actually applied during the last fit: (d, D).
    pub fn applied_differencing(&self) -> (usize, usize) {
        self.applied
    }

    /// Conditional sum of squares for the given parameters.
    #[allow(clippy::too_many_arguments)]
    fn calculate_css(
        diff_series: &[f64],
        spec: &SARIMASpec,
        ar: &[f64],
        seasonal_ar: &[f64],
        ma: &[f64],
        seasonal_ma: &[f64],
        intercept: f64,
    ) -> f64 {
        let n = diff_series.len();
        let s = spec.period;
        let start = spec.estimation_start();

        if n <= start {
            return f64::MAX;
        }

        let mut residuals = vec![0.0; n];
        let mut css = 0.0;

        for t in start..n {
            let mut pred = intercept;
            for i in 0..spec.p {
                pred += ar[i] * (diff_series[t - 1 - i] - intercept);
            }
            for i in 0..spec.cap_p {
                pred += seasonal_ar[i] * (diff_series[t - (i + 1) * s] - intercept);
            }
            for i in 0..spec.q {
                pred += ma[i] * residuals[t - 1 - i];
            }
            for i in 0..spec.cap_q {
                pred += seasonal_ma[i] * residuals[t - (i + 1) * s];
            }

            let error = diff_series[t] - pred;
            residuals[t] = error;
            css += error * error;
        }

        css
    }

    /// Estimate parameters by conditional least squares.
    ///
    /// When the differenced series has no estimable terms (short series
    /// right at the seasonal period), coefficients stay at zero and the
    /// intercept is the differenced-series mean.
    fn estimate_parameters(&mut self, diff_series: &[f64]) {
        let spec = self.spec;
        let (p, q) = (spec.p, spec.q);
        let (cap_p, cap_q) = (spec.cap_p, spec.cap_q);

        let mean = if diff_series.is_empty() {
            0.0
        } else {
            diff_series.iter().sum::<f64>() / diff_series.len() as f64
        };

        self.ar_coefficients = vec![0.0; p];
        self.seasonal_ar_coefficients = vec![0.0; cap_p];
        self.ma_coefficients = vec![0.0; q];
        self.seasonal_ma_coefficients = vec![0.0; cap_q];
        self.intercept = mean;

        let n_coeffs = p + cap_p + q + cap_q;
        if n_coeffs == 0 || diff_series.len() <= spec.estimation_start() {
            return;
        }

        let mut initial = vec![0.0; 1 + n_coeffs];
        initial[0] = mean;
        for coeff in initial.iter_mut().skip(1) {
            *coeff = 0.1;
        }

        // AR and MA coefficients bounded for stationarity/invertibility
        let mut bounds = vec![(f64::NEG_INFINITY, f64::INFINITY)];
        bounds.extend(std::iter::repeat((-0.99, 0.99)).take(n_coeffs));

        let result = nelder_mead(
            |params| {
                let intercept = params[0];
                let ar = &params[1..1 + p];
                let seasonal_ar = &params[1 + p..1 + p + cap_p];
                let ma = &params[1 + p + cap_p..1 + p + cap_p + q];
                let seasonal_ma = &params[1 + p + cap_p + q..];
                Self::calculate_css(
                    diff_series,
                    &spec,
                    ar,
                    seasonal_ar,
                    ma,
                    seasonal_ma,
                    intercept,
                )
            },
            &initial,
            Some(&bounds),
            SimplexConfig::default(),
        );

        self.intercept = result.point[0];
        self.ar_coefficients = result.point[1..1 + p].to_vec();
        self.seasonal_ar_coefficients = result.point[1 + p..1 + p + cap_p].to_vec();
        self.ma_coefficients = result.point[1 + p + cap_p..1 + p + cap_p + q].to_vec();
        self.seasonal_ma_coefficients = result.point[1 + p + cap_p + q..].to_vec();
    }

    /// Fitted values and residuals on the fully differenced scale.
    fn calculate_fitted(&mut self, diff_series: &[f64]) {
        let n = diff_series.len();
        let spec = self.spec;
        let s = spec.period;
        let start = spec.estimation_start();

        let mut fitted = vec![f64::NAN; n];
        let mut residuals = vec![0.0; n];

        if n <= start {
            // Coefficients are zero here; the intercept is the only signal.
            for t in 0..n {
                fitted[t] = self.intercept;
                residuals[t] = diff_series[t] - self.intercept;
            }
        } else {
            for t in start..n {
                let mut pred = self.intercept;
                for i in 0..spec.p {
                    pred += self.ar_coefficients[i] * (diff_series[t - 1 - i] - self.intercept);
                }
                for i in 0..spec.cap_p {
                    pred += self.seasonal_ar_coefficients[i]
                        * (diff_series[t - (i + 1) * s] - self.intercept);
                }
                for i in 0..spec.q {
                    pred += self.ma_coefficients[i] * residuals[t - 1 - i];
                }
                for i in 0..spec.cap_q {
                    pred += self.seasonal_ma_coefficients[i] * residuals[t - (i + 1) * s];
                }

                fitted[t] = pred;
                residuals[t] = diff_series[t] - pred;
            }
        }

        self.fitted_diff = Some(fitted);
        self.residuals = Some(residuals);
    }
}

impl Forecaster for SARIMA {
    fn fit(&mut self, series: &[f64]) -> Result<()> {
        if series.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        if self.spec.period == 0 {
            return Err(ForecastError::InvalidParameter(
                "seasonal period must be positive".to_string(),
            ));
        }

        let n = series.len();
        let s = self.spec.period;

        // Cap differencing by the available history: each seasonal pass
        // consumes `s` points, each regular pass one point, and at least
        // one point must survive.
        let mut applied_cap_d = 0;
        for k in 1..=self.spec.cap_d {
            if n > k * s {
                applied_cap_d = k;
            }
        }
        let remaining = n - applied_cap_d * s;
        let applied_d = self.spec.d.min(remaining - 1);
        self.applied = (applied_d, applied_cap_d);

        let seasonal_diff = seasonal_difference(series, applied_cap_d, s);
        let diff_series = difference(&seasonal_diff, applied_d);

        self.estimate_parameters(&diff_series);
        self.calculate_fitted(&diff_series);

        self.original = Some(series.to_vec());
        self.seasonally_differenced = Some(seasonal_diff);
        self.differenced = Some(diff_series);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let original = self.original.as_ref().ok_or(ForecastError::FitRequired)?;
        let seasonal_diff = self
            .seasonally_differenced
            .as_ref()
            .ok_or(ForecastError::FitRequired)?;
        let diff_series = self
            .differenced
            .as_ref()
            .ok_or(ForecastError::FitRequired)?;
        let residuals = self.residuals.as_ref().ok_or(ForecastError::FitRequired)?;

        if horizon == 0 {
            return Ok(vec![]);
        }

        let spec = self.spec;
        let s = spec.period;
        let (applied_d, applied_cap_d) = self.applied;

        // Forecast on the fully differenced scale.
        let mut extended = diff_series.clone();
        let mut extended_residuals = residuals.clone();

        for _ in 0..horizon {
            let t = extended.len();
            let mut pred = self.intercept;

            for i in 0..spec.p {
                if t > i {
                    pred += self.ar_coefficients[i] * (extended[t - 1 - i] - self.intercept);
                }
            }
            for i in 0..spec.cap_p {
                let lag = (i + 1) * s;
                if t >= lag {
                    pred +=
                        self.seasonal_ar_coefficients[i] * (extended[t - lag] - self.intercept);
                }
            }
            // Future residuals are zero
            for i in 0..spec.q {
                if t > i {
                    pred += self.ma_coefficients[i] * extended_residuals[t - 1 - i];
                }
            }
            for i in 0..spec.cap_q {
                let lag = (i + 1) * s;
                if t >= lag {
                    pred += self.seasonal_ma_coefficients[i] * extended_residuals[t - lag];
                }
            }

            extended.push(pred);
            extended_residuals.push(0.0);
        }

        // Undo regular differencing against the seasonally differenced
        // history, then undo seasonal differencing against the original.
        let forecast_diff = extended[diff_series.len()..].to_vec();
        let forecast_seasonal = integrate(&forecast_diff, seasonal_diff, applied_d);
        Ok(seasonal_integrate(
            &forecast_seasonal,
            original,
            applied_cap_d,
            s,
        ))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted_diff.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "SARIMA"
    }
}
