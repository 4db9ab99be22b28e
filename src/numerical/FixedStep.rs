//! Explicit fixed-step integrators for a scalar IVP `y' = f(x, y)`.
//!
//! All of them start at the initial point, advance by a constant step and stop after
//! `floor((x_end - x_start) / step)` steps. The interval only fixes the number of
//! steps; the first sample is always the initial point.
use crate::errors::OdeError;
use crate::numerical::RHS_adapter::Rhs;
use crate::numerical::trajectory::{InitialPoint, Trajectory, sample_count};

/// explicit Euler: `y_i = y_{i-1} + h f_{i-1}`
pub mod Euler;
/// explicit trapezoidal (Heun) predictor-corrector, two evaluations per step
pub mod PredictorCorrector;
/// two-step Adams-Bashforth with one RK4 starting step
pub mod AdamsBashforth;

pub trait FixedStepSolver {
    /// Integrates from `initial` with constant `step`. `interval` must hold exactly two
    /// endpoints `[start, end]` with `end > start`.
    fn solve(
        &self,
        rhs: &Rhs,
        initial: InitialPoint,
        interval: &[f64],
        step: f64,
    ) -> Result<Trajectory, OdeError>;
}

/// Checks interval and step and returns the number of steps to take. A step so small
/// that the sample count overflows `usize` is an `InvalidStep`.
pub fn n_iterations(interval: &[f64], step: f64) -> Result<usize, OdeError> {
    let (start, end) = match interval {
        [start, end] => (*start, *end),
        _ => {
            return Err(OdeError::InvalidInterval(format!(
                "expected 2 endpoints, got {}",
                interval.len()
            )));
        }
    };
    if !start.is_finite() || !end.is_finite() || end <= start {
        return Err(OdeError::InvalidInterval(format!(
            "[{}, {}] is empty or not finite",
            start, end
        )));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(OdeError::InvalidStep(step));
    }
    match sample_count(end - start, step) {
        Some(samples) => Ok(samples - 1),
        None => Err(OdeError::InvalidStep(step)),
    }
}

/// One classical Runge-Kutta step of size `h` from `(x, y)`.
pub fn rk4_step(f: &dyn Fn(f64, f64) -> f64, x: f64, y: f64, h: f64) -> f64 {
    let k1 = f(x, y);
    let k2 = f(x + h / 2.0, y + h / 2.0 * k1);
    let k3 = f(x + h / 2.0, y + h / 2.0 * k2);
    let k4 = f(x + h, y + h * k3);
    y + h / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_n_iterations() {
        assert_eq!(n_iterations(&[0.0, 1.0], 0.1).unwrap(), 10);
        assert_eq!(n_iterations(&[0.0, 1.0], 0.3).unwrap(), 3);
        assert_eq!(n_iterations(&[0.0, 0.05], 0.1).unwrap(), 0);
    }

    #[test]
    fn test_bad_interval() {
        assert!(matches!(
            n_iterations(&[1.0, 1.0], 0.1),
            Err(OdeError::InvalidInterval(_))
        ));
        assert!(matches!(
            n_iterations(&[2.0, 1.0], 0.1),
            Err(OdeError::InvalidInterval(_))
        ));
        assert!(matches!(
            n_iterations(&[0.0, 1.0, 2.0], 0.1),
            Err(OdeError::InvalidInterval(_))
        ));
        assert!(matches!(
            n_iterations(&[0.0], 0.1),
            Err(OdeError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_bad_step() {
        assert_eq!(n_iterations(&[0.0, 1.0], 0.0), Err(OdeError::InvalidStep(0.0)));
        assert_eq!(n_iterations(&[0.0, 1.0], -0.1), Err(OdeError::InvalidStep(-0.1)));
        assert!(matches!(
            n_iterations(&[0.0, 1.0], f64::NAN),
            Err(OdeError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_too_many_steps() {
        assert_eq!(
            n_iterations(&[0.0, 1e300], 1e-300),
            Err(OdeError::InvalidStep(1e-300))
        );
        assert_eq!(
            n_iterations(&[-1e308, 1e308], 1.0),
            Err(OdeError::InvalidStep(1.0))
        );
    }

    #[test]
    fn test_rk4_is_exact_for_cubic() {
        // y' = 3x^2, y(0) = 0 -> y = x^3; RK4 integrates polynomials up to degree 3 exactly
        let f = |x: f64, _y: f64| 3.0 * x * x;
        assert_relative_eq!(rk4_step(&f, 0.0, 0.0, 0.5), 0.125, epsilon = 1e-14);
        // y' = y: one step reproduces the degree 4 Taylor polynomial of e^h
        let g = |_x: f64, y: f64| y;
        let h = 0.1_f64;
        let expected = 1.0 + h + h * h / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert_relative_eq!(rk4_step(&g, 0.0, 1.0, h), expected, epsilon = 1e-15);
    }
}
