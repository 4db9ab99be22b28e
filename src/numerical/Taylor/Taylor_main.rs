use crate::errors::OdeError;
use crate::numerical::RHS_adapter::Rhs;
use crate::numerical::Taylor::derivative_chain::{DerivativeChain, DerivativeRule};
use crate::numerical::trajectory::{
    InitialPoint, Trajectory, TrajectoryBuilder, sample_count,
};
use log::{debug, info};
use std::time::Instant;

/// Values of the derivative chain at the initial point.
///
/// `values()[k]` is `d_k(x0, y0)`, i.e. the value of `y^(k+1)(x0)`. The series built
/// from them is
/// ```text
///  y(x) ~ y0 + sum_{k=0}^{K} values[k] / (k+1)! * (x - x0)^(k+1)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TaylorCoefficients {
    x0: f64,
    y0: f64,
    values: Vec<f64>,
}

impl TaylorCoefficients {
    /// Evaluates the chain at `initial`.
    ///
    /// `d0` only needs the initial point. For `d_k` the markers `y^(k)`, ..., `y'` are
    /// replaced one after another, highest first, by the values resolved so far
    /// (`y^(j)` takes `values[j - 1]`), then `y` and `x` take the initial point.
    pub fn from_chain(
        chain: &DerivativeChain,
        initial: InitialPoint,
    ) -> Result<TaylorCoefficients, OdeError> {
        let InitialPoint { x0, y0 } = initial;
        let markers = chain.markers();
        let mut values: Vec<f64> = Vec::with_capacity(chain.derivatives().len());
        for (k, d_k) in chain.derivatives().iter().enumerate() {
            let mut resolved = d_k.clone();
            for j in (1..=k).rev() {
                resolved = resolved.substitute(&markers[j - 1], values[j - 1]);
            }
            let value = resolved
                .set_variable(chain.unknown(), y0)
                .set_variable(chain.arg(), x0)
                .evaluate()?;
            debug!("Taylor coefficient {}: {}", k, value);
            values.push(value);
        }
        Ok(TaylorCoefficients { x0, y0, values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Truncated series at `x`, accumulated with a running factorial and power.
    pub fn series_value(&self, x: f64) -> f64 {
        let dx = x - self.x0;
        let mut sum = self.y0;
        let mut factorial = 1.0;
        let mut power = 1.0;
        for (k, value) in self.values.iter().enumerate() {
            factorial *= (k + 1) as f64;
            power *= dx;
            sum += value / factorial * power;
        }
        sum
    }
}

/// Taylor-series integrator for `y' = f(x, y)` with symbolic `f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaylorSolver {
    /// highest derivative index `K` in the chain `d0..=dK`
    pub order: usize,
    pub rule: DerivativeRule,
}

impl Default for TaylorSolver {
    fn default() -> Self {
        TaylorSolver::new(4)
    }
}

impl TaylorSolver {
    pub fn new(order: usize) -> TaylorSolver {
        TaylorSolver {
            order,
            rule: DerivativeRule::default(),
        }
    }

    pub fn with_rule(mut self, rule: DerivativeRule) -> TaylorSolver {
        self.rule = rule;
        self
    }

    /// Derivative chain and its coefficients at `initial`, without sampling.
    pub fn coefficients(
        &self,
        rhs: &Rhs,
        initial: InitialPoint,
    ) -> Result<TaylorCoefficients, OdeError> {
        let (expr, arg, unknown) = rhs.as_symbolic()?;
        let chain = DerivativeChain::new(expr, arg, unknown, self.order, self.rule)?;
        TaylorCoefficients::from_chain(&chain, initial)
    }

    /// Samples the series at `x0 + j*epsilon` for `j = 0..=floor(offset/epsilon)`.
    /// The table carries no `f(x, y)` column.
    pub fn solve(
        &self,
        rhs: &Rhs,
        initial: InitialPoint,
        offset: f64,
        epsilon: f64,
    ) -> Result<Trajectory, OdeError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(OdeError::InvalidStep(epsilon));
        }
        if !offset.is_finite() || offset < 0.0 {
            return Err(OdeError::InvalidInterval(format!(
                "offset must be a non-negative number, got {}",
                offset
            )));
        }
        let n = sample_count(offset, epsilon).ok_or(OdeError::InvalidStep(epsilon))?;
        let start = Instant::now();
        info!(
            "Taylor series of order {} ({} rule) for {}",
            self.order, self.rule, rhs
        );
        let coefficients = self.coefficients(rhs, initial)?;

        let mut table = TrajectoryBuilder::with_capacity(n);
        for j in 0..n {
            let x = initial.x0 + j as f64 * epsilon;
            table.push(x, coefficients.series_value(x), None);
        }
        info!(
            "Taylor series sampled at {} points in {} ms",
            n,
            start.elapsed().as_millis()
        );
        Ok(table.build())
    }
}
