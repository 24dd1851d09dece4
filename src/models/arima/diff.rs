//! Differencing and integration for ARIMA-family models.

/// Difference a series `d` times.
///
/// Each pass shortens the series by one; passes stop early if fewer than
/// two points remain.
pub fn difference(series: &[f64], d: usize) -> Vec<f64> {
    let mut result = series.to_vec();
    for _ in 0..d {
        if result.len() < 2 {
            break;
        }
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Seasonally difference a series `d` times at the given period.
///
/// Each pass shortens the series by `period`; passes stop early if the
/// series no longer exceeds the period.
pub fn seasonal_difference(series: &[f64], d: usize, period: usize) -> Vec<f64> {
    if period == 0 {
        return series.to_vec();
    }
    let mut result = series.to_vec();
    for _ in 0..d {
        if result.len() <= period {
            break;
        }
        result = result
            .iter()
            .skip(period)
            .zip(result.iter())
            .map(|(curr, prev)| curr - prev)
            .collect();
    }
    result
}

/// Undo `d` levels of regular differencing for a block of forecast steps.
///
/// `original` is the series the differencing was applied to; its tail
/// provides the starting value at each level.
pub fn integrate(differenced: &[f64], original: &[f64], d: usize) -> Vec<f64> {
    if d == 0 || differenced.is_empty() {
        return differenced.to_vec();
    }

    let mut result = differenced.to_vec();
    for level in (0..d).rev() {
        let start = if level == 0 {
            original.last().copied().unwrap_or(0.0)
        } else {
            difference(original, level).last().copied().unwrap_or(0.0)
        };

        let mut cumsum = start;
        for value in &mut result {
            cumsum += *value;
            *value = cumsum;
        }
    }
    result
}

/// Undo `d` levels of seasonal differencing for a block of forecast steps.
///
/// Each forecast step adds back the value one period earlier, read from
/// the tail of the history at that differencing level or from already
/// integrated forecast steps once the horizon exceeds the period.
pub fn seasonal_integrate(
    differenced: &[f64],
    original: &[f64],
    d: usize,
    period: usize,
) -> Vec<f64> {
    if d == 0 || period == 0 || differenced.is_empty() {
        return differenced.to_vec();
    }

    let mut result = differenced.to_vec();
    for level in (0..d).rev() {
        let history = seasonal_difference(original, level, period);
        let n = history.len();

        let mut integrated: Vec<f64> = Vec::with_capacity(result.len());
        for (step, &value) in result.iter().enumerate() {
            let lagged = if step < period {
                if n + step >= period {
                    history[n + step - period]
                } else {
                    0.0
                }
            } else {
                integrated[step - period]
            };
            integrated.push(value + lagged);
        }
        result = integrated;
    }
    result
}
