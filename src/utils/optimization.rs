//! Nelder-Mead simplex minimization for model parameter estimation.

/// Configuration for the simplex search.
#[derive(Debug, Clone)]
pub struct SimplexConfig {
    /// Maximum number of iterations.
    pub max_iter: usize,
    /// Convergence tolerance on the value spread across the simplex.
    pub tolerance: f64,
    /// Relative step used to seed the initial simplex.
    pub initial_step: f64,
    /// Reflection coefficient.
    pub alpha: f64,
    /// Expansion coefficient.
    pub gamma: f64,
    /// Contraction coefficient.
    pub rho: f64,
    /// Shrink coefficient.
    pub sigma: f64,
}

impl Default for SimplexConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-8,
            initial_step: 0.05,
            alpha: 1.0,
            gamma: 2.0,
            rho: 0.5,
            sigma: 0.5,
        }
    }
}

/// Outcome of a simplex search.
#[derive(Debug, Clone)]
pub struct SimplexResult {
    /// Best point found.
    pub point: Vec<f64>,
    /// Objective value at the best point.
    pub value: f64,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the simplex collapsed within tolerance.
    pub converged: bool,
}

/// Minimize `objective` starting from `initial`, optionally clamping each
/// coordinate to `bounds`.
pub fn nelder_mead<F>(
    objective: F,
    initial: &[f64],
    bounds: Option<&[(f64, f64)]>,
    config: SimplexConfig,
) -> SimplexResult
where
    F: Fn(&[f64]) -> f64,
{
    let dims = initial.len();
    if dims == 0 {
        return SimplexResult {
            point: vec![],
            value: f64::NAN,
            iterations: 0,
            converged: false,
        };
    }

    let clamp = |point: Vec<f64>| -> Vec<f64> {
        match bounds {
            None => point,
            Some(b) => point
                .into_iter()
                .enumerate()
                .map(|(i, x)| match b.get(i) {
                    Some(&(lo, hi)) => x.clamp(lo, hi),
                    None => x,
                })
                .collect(),
        }
    };

    // Seed the simplex: the initial point plus one perturbation per axis.
    let mut vertices: Vec<(Vec<f64>, f64)> = Vec::with_capacity(dims + 1);
    vertices.push((initial.to_vec(), objective(initial)));
    for axis in 0..dims {
        let mut point = initial.to_vec();
        point[axis] += if point[axis].abs() > 1e-10 {
            config.initial_step * point[axis].abs()
        } else {
            config.initial_step
        };
        let point = clamp(point);
        let value = objective(&point);
        vertices.push((point, value));
    }

    let sort_vertices = |vs: &mut Vec<(Vec<f64>, f64)>| {
        vs.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    };

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        iterations += 1;
        sort_vertices(&mut vertices);

        let spread = vertices[dims].1 - vertices[0].1;
        if spread.abs() < config.tolerance {
            converged = true;
            break;
        }

        // Centroid of all vertices except the worst.
        let mut centroid = vec![0.0; dims];
        for (point, _) in &vertices[..dims] {
            for (c, x) in centroid.iter_mut().zip(point.iter()) {
                *c += x;
            }
        }
        for c in &mut centroid {
            *c /= dims as f64;
        }

        let worst = vertices[dims].clone();
        let second_worst_value = vertices[dims - 1].1;
        let best_value = vertices[0].1;

        let blend = |from: &[f64], toward: &[f64], coeff: f64| -> Vec<f64> {
            clamp(
                from.iter()
                    .zip(toward.iter())
                    .map(|(f, t)| f + coeff * (t - f))
                    .collect(),
            )
        };

        // Reflection: push the worst vertex through the centroid.
        let reflected = blend(&centroid, &worst.0, -config.alpha);
        let reflected_value = objective(&reflected);

        if reflected_value < best_value {
            // Expansion: keep going in the same direction.
            let expanded = blend(&centroid, &reflected, config.gamma);
            let expanded_value = objective(&expanded);
            vertices[dims] = if expanded_value < reflected_value {
                (expanded, expanded_value)
            } else {
                (reflected, reflected_value)
            };
            continue;
        }

        if reflected_value < second_worst_value {
            vertices[dims] = (reflected, reflected_value);
            continue;
        }

        // Contraction: pull toward the centroid, from whichever of the
        // worst/reflected points is better.
        let (anchor, anchor_value) = if reflected_value < worst.1 {
            (&reflected, reflected_value)
        } else {
            (&worst.0, worst.1)
        };
        let contracted = blend(&centroid, anchor, config.rho);
        let contracted_value = objective(&contracted);

        if contracted_value < anchor_value {
            vertices[dims] = (contracted, contracted_value);
            continue;
        }

        // Shrink everything toward the best vertex.
        let best = vertices[0].0.clone();
        for vertex in vertices.iter_mut().skip(1) {
            let point = blend(&best, &vertex.0, config.sigma);
            let value = objective(&point);
            *vertex = (point, value);
        }
    }

    sort_vertices(&mut vertices);
    let (point, value) = vertices.swap_remove(0);

    SimplexResult {
        point,
        value,
        iterations,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn minimizes_quadratic_2d() {
        let result = nelder_mead(
            |x| (x[0] - 2.0).powi(2) + (x[1] - 3.0).powi(2),
            &[0.0, 0.0],
            None,
            SimplexConfig::default(),
        );

        assert!(result.converged);
        assert_relative_eq!(result.point[0], 2.0, epsilon = 1e-4);
        assert_relative_eq!(result.point[1], 3.0, epsilon = 1e-4);
        assert_relative_eq!(result.value, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn respects_bounds() {
        // Unconstrained minimum at x = 5 sits outside [0, 3]
        let result = nelder_mead(
            |x| (x[0] - 5.0).powi(2),
            &[1.0],
            Some(&[(0.0, 3.0)]),
            SimplexConfig::default(),
        );

        assert_relative_eq!(result.point[0], 3.0, epsilon = 1e-4);
    }

    #[test]
    fn handles_start_at_optimum() {
        let result = nelder_mead(
            |x| (x[0] - 2.0).powi(2),
            &[2.0],
            None,
            SimplexConfig::default(),
        );

        assert!(result.converged);
        assert_relative_eq!(result.point[0], 2.0, epsilon = 1e-4);
    }

    #[test]
    fn empty_initial_point_does_not_converge() {
        let result = nelder_mead(|_| 0.0, &[], None, SimplexConfig::default());
        assert!(!result.converged);
        assert!(result.value.is_nan());
    }

    #[test]
    fn narrow_valley() {
        // Rosenbrock, minimum at (1, 1)
        let config = SimplexConfig {
            max_iter: 5000,
            tolerance: 1e-10,
            ..Default::default()
        };
        let result = nelder_mead(
            |x| (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2),
            &[0.0, 0.0],
            None,
            config,
        );

        assert_relative_eq!(result.point[0], 1.0, epsilon = 1e-3);
        assert_relative_eq!(result.point[1], 1.0, epsilon = 1e-3);
    }

    #[test]
    fn smoothing_weight_search_stays_in_bounds() {
        let data = vec![10.0, 12.0, 11.0, 13.0, 14.0, 13.0, 15.0, 16.0];

        let sse = |params: &[f64]| {
            let alpha = params[0];
            let mut level = data[0];
            let mut error_sum = 0.0;
            for &y in &data[1..] {
                let error = y - level;
                error_sum += error * error;
                level = alpha * y + (1.0 - alpha) * level;
            }
            error_sum
        };

        let result = nelder_mead(sse, &[0.5], Some(&[(0.01, 0.99)]), SimplexConfig::default());

        assert!(result.converged);
        assert!(result.point[0] > 0.01 && result.point[0] < 0.99);
    }
}
