use crate::errors::OdeError;
use crate::numerical::FixedStep::{FixedStepSolver, n_iterations, rk4_step};
use crate::numerical::RHS_adapter::Rhs;
use crate::numerical::trajectory::{InitialPoint, Trajectory, TrajectoryBuilder};
use log::info;

/// Two-step Adams-Bashforth method
/// ```text
///  y_i = y_{i-1} + h (3/2 f_{i-1} - 1/2 f_{i-2}),   i >= 2
/// ```
/// The missing history for sample 1 is filled by one classical RK4 step.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdamsBashforth2;

impl AdamsBashforth2 {
    pub fn new() -> AdamsBashforth2 {
        AdamsBashforth2
    }
}

impl FixedStepSolver for AdamsBashforth2 {
    fn solve(
        &self,
        rhs: &Rhs,
        initial: InitialPoint,
        interval: &[f64],
        step: f64,
    ) -> Result<Trajectory, OdeError> {
        let n = n_iterations(interval, step)?;
        let f = rhs.evaluator()?;
        info!("Adams-Bashforth 2: {} steps of size {} for {}", n, step, rhs);

        let mut table = TrajectoryBuilder::with_capacity(n + 1);
        let InitialPoint { x0, y0 } = initial;
        let mut f_prev2 = f(x0, y0);
        table.push(x0, y0, Some(f_prev2));
        if n == 0 {
            return Ok(table.build());
        }

        let (mut x, mut y) = (x0 + step, rk4_step(&f, x0, y0, step));
        let mut f_prev = f(x, y);
        table.push(x, y, Some(f_prev));

        for _ in 2..=n {
            y += step * (1.5 * f_prev - 0.5 * f_prev2);
            x += step;
            f_prev2 = f_prev;
            f_prev = f(x, y);
            table.push(x, y, Some(f_prev));
        }
        Ok(table.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rhs() -> Rhs {
        Rhs::parse("x^2 - 2*y", "x", "y").unwrap()
    }

    #[test]
    fn test_bootstrap_is_rk4() {
        let table = AdamsBashforth2::new()
            .solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], 0.1)
            .unwrap();
        let f = rhs();
        let eval = f.evaluator().unwrap();
        let expected = rk4_step(&eval, 0.0, 1.0, 0.1);
        assert_eq!(table.get(1).unwrap().y, expected);
        assert_relative_eq!(table.get(1).unwrap().x, 0.1);
    }

    #[test]
    fn test_recurrence_holds_exactly() {
        let table = AdamsBashforth2::new()
            .solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], 0.1)
            .unwrap();
        assert_eq!(table.len(), 11);
        let s = table.samples();
        for i in 2..s.len() {
            let f1 = s[i - 1].derivative_value.unwrap();
            let f2 = s[i - 2].derivative_value.unwrap();
            assert_eq!(s[i].y, s[i - 1].y + 0.1 * (1.5 * f1 - 0.5 * f2));
        }
        let exact = 0.75 * (-2.0_f64).exp() + 0.25;
        assert!((s[10].y - exact).abs() < 1e-2);
    }

    #[test]
    fn test_short_intervals() {
        let solver = AdamsBashforth2::new();
        // no full step fits: only the initial point
        let table = solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 0.05], 0.1).unwrap();
        assert_eq!(table.len(), 1);
        // a single step is the RK4 bootstrap
        let table = solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 0.1], 0.1).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let solver = AdamsBashforth2::new();
        let a = solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], 0.05).unwrap();
        let b = solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], 0.05).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_validation() {
        let solver = AdamsBashforth2::new();
        assert_eq!(
            solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1e300], 1e-300),
            Err(OdeError::InvalidStep(1e-300))
        );
        assert!(matches!(
            solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], -1.0),
            Err(OdeError::InvalidStep(_))
        ));
        assert!(matches!(
            solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 0.0], 0.1),
            Err(OdeError::InvalidInterval(_))
        ));
    }
}
