//! One entry point for all methods: pick a `Method`, give the right-hand side, the
//! initial point, the interval and the step, call `solve()`.
//!
//! For the Taylor method the step is the sampling distance and the series is sampled
//! from `x0` up to the end of the interval.
use crate::Utils::logger::{init_logger, parse_loglevel};
use crate::errors::OdeError;
use crate::numerical::FixedStep::AdamsBashforth::AdamsBashforth2;
use crate::numerical::FixedStep::Euler::Euler;
use crate::numerical::FixedStep::PredictorCorrector::PredictorCorrector;
use crate::numerical::FixedStep::{FixedStepSolver, n_iterations};
use crate::numerical::RHS_adapter::Rhs;
use crate::numerical::Taylor::Taylor_main::TaylorSolver;
use crate::numerical::Taylor::derivative_chain::DerivativeRule;
use crate::numerical::trajectory::{InitialPoint, Trajectory};
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use strum_macros::{Display, EnumIter, EnumString};
use tabled::{builder::Builder, settings::Style};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Method {
    #[default]
    Euler,
    PredictorCorrector,
    AdamsBashforth2,
    Taylor,
}

pub enum Solvers {
    Euler(Euler),
    PC(PredictorCorrector),
    AB2(AdamsBashforth2),
    Taylor(TaylorSolver),
}

impl Solvers {
    pub fn new(method: Method, order: usize, rule: DerivativeRule) -> Solvers {
        match method {
            Method::Euler => Solvers::Euler(Euler::new()),
            Method::PredictorCorrector => Solvers::PC(PredictorCorrector::new()),
            Method::AdamsBashforth2 => Solvers::AB2(AdamsBashforth2::new()),
            Method::Taylor => Solvers::Taylor(TaylorSolver::new(order).with_rule(rule)),
        }
    }
}

pub struct IVPsolver {
    rhs: Rhs,
    method: Method,
    initial: InitialPoint,
    interval: Vec<f64>,
    step: f64,
    /// Taylor only
    order: usize,
    /// Taylor only
    rule: DerivativeRule,
    pub loglevel: Option<String>,
    pub log_file: Option<String>,
}

impl IVPsolver {
    pub fn new(
        rhs: Rhs,
        method: Method,
        initial: impl Into<InitialPoint>,
        interval: Vec<f64>,
        step: f64,
    ) -> IVPsolver {
        IVPsolver {
            rhs,
            method,
            initial: initial.into(),
            interval,
            step,
            order: TaylorSolver::default().order,
            rule: DerivativeRule::default(),
            loglevel: None,
            log_file: None,
        }
    }

    pub fn with_order(mut self, order: usize) -> IVPsolver {
        self.order = order;
        self
    }

    pub fn with_rule(mut self, rule: DerivativeRule) -> IVPsolver {
        self.rule = rule;
        self
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    pub fn set_log_file(&mut self, log_file: Option<String>) {
        self.log_file = log_file;
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn rhs(&self) -> &Rhs {
        &self.rhs
    }

    /// Runs the selected method without touching the logger.
    pub fn solver(&self) -> Result<Trajectory, OdeError> {
        let begin = Instant::now();
        let solver_instance = Solvers::new(self.method, self.order, self.rule);
        let result = match &solver_instance {
            Solvers::Euler(euler) => {
                euler.solve(&self.rhs, self.initial, &self.interval, self.step)
            }
            Solvers::PC(pc) => pc.solve(&self.rhs, self.initial, &self.interval, self.step),
            Solvers::AB2(ab2) => ab2.solve(&self.rhs, self.initial, &self.interval, self.step),
            Solvers::Taylor(taylor) => {
                n_iterations(&self.interval, self.step)?;
                let offset = self.interval[1] - self.initial.x0;
                taylor.solve(&self.rhs, self.initial, offset, self.step)
            }
        }?;
        let elapsed = begin.elapsed();
        self.calc_statistics(&result, elapsed.as_millis());
        Ok(result)
    }

    /// wrapper around `solver` that sets up logging first
    pub fn solve(&self) -> Result<Trajectory, OdeError> {
        let level = match &self.loglevel {
            Some(level) => parse_loglevel(level)?,
            None => Some(log::LevelFilter::Info),
        };
        if let Some(level) = level {
            init_logger(level, self.log_file.as_deref())?;
            info!("solving {} with {}", self.rhs, self.method);
        }
        let res = self.solver();
        if level.is_some() {
            info!("Program ended");
        }
        res
    }

    fn calc_statistics(&self, result: &Trajectory, elapsed_ms: u128) {
        let mut builder = Builder::default();
        builder.push_record(["method".to_string(), self.method.to_string()]);
        builder.push_record(["step".to_string(), self.step.to_string()]);
        builder.push_record(["number of samples".to_string(), result.len().to_string()]);
        builder.push_record(["time elapsed, ms".to_string(), elapsed_ms.to_string()]);
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        info!("\n CALC STATISTICS \n {}", table);
    }
}
