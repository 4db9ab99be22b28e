use crate::errors::OdeError;
use crate::numerical::FixedStep::{FixedStepSolver, n_iterations};
use crate::numerical::RHS_adapter::Rhs;
use crate::numerical::trajectory::{InitialPoint, Trajectory, TrajectoryBuilder};
use log::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Euler {
    pub fn new() -> Euler {
        Euler
    }
}

impl FixedStepSolver for Euler {
    fn solve(
        &self,
        rhs: &Rhs,
        initial: InitialPoint,
        interval: &[f64],
        step: f64,
    ) -> Result<Trajectory, OdeError> {
        let n = n_iterations(interval, step)?;
        let f = rhs.evaluator()?;
        info!("Euler: {} steps of size {} for {}", n, step, rhs);

        let mut table = TrajectoryBuilder::with_capacity(n + 1);
        let (mut x, mut y) = (initial.x0, initial.y0);
        let mut f_last = f(x, y);
        table.push(x, y, Some(f_last));
        for _ in 1..=n {
            y += step * f_last;
            x += step;
            f_last = f(x, y);
            table.push(x, y, Some(f_last));
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
    fn test_euler_sample_layout() {
        let table = Euler::new()
            .solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], 0.1)
            .unwrap();
        assert_eq!(table.len(), 11);
        let first = table.first().unwrap();
        assert_eq!((first.index, first.x, first.y), (0, 0.0, 1.0));
        assert_eq!(first.derivative_value, Some(-2.0));
        assert_relative_eq!(table.last().unwrap().x, 1.0, epsilon = 1e-9);
        for pair in table.samples().windows(2) {
            assert_eq!(pair[1].index, pair[0].index + 1);
            assert!(pair[1].x > pair[0].x);
            assert_relative_eq!(pair[1].x - pair[0].x, 0.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_euler_recurrence() {
        let table = Euler::new()
            .solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], 0.1)
            .unwrap();
        // y1 = 1 + 0.1 * (-2) = 0.8
        assert_relative_eq!(table.get(1).unwrap().y, 0.8, epsilon = 1e-15);
        for pair in table.samples().windows(2) {
            let f_prev = pair[0].derivative_value.unwrap();
            assert_eq!(pair[1].y, pair[0].y + 0.1 * f_prev);
        }
        // exact solution 3/4 e^(-2x) + x^2/2 - x/2 + 1/4, first order accuracy
        let exact = 0.75 * (-2.0_f64).exp() + 0.25;
        assert!((table.last().unwrap().y - exact).abs() < 0.05);
    }

    #[test]
    fn test_euler_numeric_matches_symbolic() {
        let numeric = Rhs::numeric(|x: f64, y| x.powf(2.0) - 2.0 * y);
        let a = Euler::new()
            .solve(&numeric, (0.0, 1.0).into(), &[0.0, 1.0], 0.1)
            .unwrap();
        let b = Euler::new()
            .solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], 0.1)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_euler_idempotent() {
        let solver = Euler::new();
        let a = solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], 0.05).unwrap();
        let b = solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], 0.05).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_euler_validation() {
        let solver = Euler::new();
        assert!(matches!(
            solver.solve(&rhs(), (0.0, 1.0).into(), &[0.5, 0.5], 0.1),
            Err(OdeError::InvalidInterval(_))
        ));
        assert!(matches!(
            solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1.0], 0.0),
            Err(OdeError::InvalidStep(_))
        ));
        assert_eq!(
            solver.solve(&rhs(), (0.0, 1.0).into(), &[0.0, 1e300], 1e-300),
            Err(OdeError::InvalidStep(1e-300))
        );
        let foreign = Rhs::parse("x + z", "x", "y").unwrap();
        assert!(matches!(
            solver.solve(&foreign, (0.0, 1.0).into(), &[0.0, 1.0], 0.1),
            Err(OdeError::UnboundSymbol(_))
        ));
    }
}
