use crate::errors::OdeError;
use crate::numerical::FixedStep::{FixedStepSolver, n_iterations};
use crate::numerical::RHS_adapter::Rhs;
use crate::numerical::trajectory::{InitialPoint, Trajectory, TrajectoryBuilder};
use log::info;

/// Two-stage explicit trapezoidal scheme:
/// ```text
///  y_pred = y + h f(x, y)
///  y_new  = y + h/2 (f(x, y) + f(x + h, y_pred))
/// ```
/// The corrector is applied once, there is no fixed-point iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictorCorrector;

impl PredictorCorrector {
    pub fn new() -> PredictorCorrector {
        PredictorCorrector
    }
}

impl FixedStepSolver for PredictorCorrector {
    fn solve(
        &self,
        rhs: &Rhs,
        initial: InitialPoint,
        interval: &[f64],
        step: f64,
    ) -> Result<Trajectory, OdeError> {
        let n = n_iterations(interval, step)?;
        let f = rhs.evaluator()?;
        info!("predictor-corrector: {} steps of size {} for {}", n, step, rhs);

        let mut table = TrajectoryBuilder::with_capacity(n + 1);
        let (mut x, mut y) = (initial.x0, initial.y0);
        let mut f_last = f(x, y);
        table.push(x, y, Some(f_last));
        for _ in 1..=n {
            let y_pred = y + step * f_last;
            let f_pred = f(x + step, y_pred);
            y += step / 2.0 * (f_last + f_pred);
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

    #[test]
    fn test_stiff_rhs_stays_finite() {
        let rhs = Rhs::parse("100*(y - cos(x))", "x", "y").unwrap();
        let table = PredictorCorrector::new()
            .solve(&rhs, (0.0, 1.0).into(), &[0.0, 1.0], 0.1)
            .unwrap();
        assert_eq!(table.len(), 11);
        assert!(table.iter().all(|s| s.x.is_finite() && s.y.is_finite()));
    }

    #[test]
    fn test_first_step_by_hand() {
        // y' = x^2 - 2y, (0, 1), h = 0.1
        // y_pred = 0.8, f(0.1, 0.8) = 0.01 - 1.6 = -1.59, y1 = 1 + 0.05 * (-2 - 1.59)
        let rhs = Rhs::parse("x^2 - 2*y", "x", "y").unwrap();
        let table = PredictorCorrector::new()
            .solve(&rhs, (0.0, 1.0).into(), &[0.0, 1.0], 0.1)
            .unwrap();
        assert_relative_eq!(table.get(1).unwrap().y, 0.8205, epsilon = 1e-12);
    }

    #[test]
    fn test_second_order_accuracy() {
        // y' = y, y(0) = 1; error at x = 1 shrinks about 4 times when h halves
        let rhs = Rhs::numeric(|_, y| y);
        let solver = PredictorCorrector::new();
        let coarse = solver.solve(&rhs, (0.0, 1.0).into(), &[0.0, 1.0], 0.1).unwrap();
        let fine = solver.solve(&rhs, (0.0, 1.0).into(), &[0.0, 1.0], 0.05).unwrap();
        let e = std::f64::consts::E;
        let err_coarse = (coarse.last().unwrap().y - e).abs();
        let err_fine = (fine.last().unwrap().y - e).abs();
        let ratio = err_coarse / err_fine;
        assert!(ratio > 3.5 && ratio < 4.5, "ratio = {}", ratio);
    }

    #[test]
    fn test_idempotent() {
        let rhs = Rhs::parse("100*(y - cos(x))", "x", "y").unwrap();
        let solver = PredictorCorrector::new();
        let a = solver.solve(&rhs, (0.0, 1.0).into(), &[0.0, 1.0], 0.05).unwrap();
        let b = solver.solve(&rhs, (0.0, 1.0).into(), &[0.0, 1.0], 0.05).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_validation() {
        let rhs = Rhs::numeric(|_, y| y);
        assert!(matches!(
            PredictorCorrector::new().solve(&rhs, (0.0, 1.0).into(), &[1.0, 0.0], 0.1),
            Err(OdeError::InvalidInterval(_))
        ));
        assert_eq!(
            PredictorCorrector::new().solve(&rhs, (0.0, 1.0).into(), &[0.0, 1e300], 1e-300),
            Err(OdeError::InvalidStep(1e-300))
        );
    }
}
