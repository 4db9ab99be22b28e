//! Description of one solve as a TOML document.
//!
//! ```toml
//! method = "Taylor"
//! rhs = "x^2 - 2*y"
//! x0 = 0.0
//! y0 = 1.0
//! interval = [0.0, 1.0]
//! step = 0.1
//! order = 6              # Taylor only, default 4
//! rule = "ChainRule"     # Taylor only, default "Literal"
//! loglevel = "info"
//! ```
//! `arg` and `unknown` default to `"x"` and `"y"`.
use crate::errors::OdeError;
use crate::numerical::ODE_api::{IVPsolver, Method};
use crate::numerical::RHS_adapter::Rhs;
use crate::numerical::Taylor::derivative_chain::DerivativeRule;
use log::debug;
use serde::{Deserialize, Serialize};

fn default_arg() -> String {
    "x".to_string()
}

fn default_unknown() -> String {
    "y".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    pub method: Method,
    /// right-hand side `f(arg, unknown)` as a string
    pub rhs: String,
    #[serde(default = "default_arg")]
    pub arg: String,
    #[serde(default = "default_unknown")]
    pub unknown: String,
    pub x0: f64,
    pub y0: f64,
    pub interval: Vec<f64>,
    pub step: f64,
    pub order: Option<usize>,
    pub rule: Option<DerivativeRule>,
    pub loglevel: Option<String>,
    pub log_file: Option<String>,
}

impl TaskConfig {
    pub fn from_toml_str(input: &str) -> Result<TaskConfig, OdeError> {
        toml::from_str(input).map_err(|err| OdeError::Config(err.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, OdeError> {
        toml::to_string(self).map_err(|err| OdeError::Config(err.to_string()))
    }

    /// Parses the right-hand side and sets up the solver; nothing is solved yet.
    pub fn into_solver(self) -> Result<IVPsolver, OdeError> {
        let rhs = Rhs::parse(&self.rhs, &self.arg, &self.unknown)?;
        debug!("task: {} by {}", rhs, self.method);
        let mut solver = IVPsolver::new(rhs, self.method, (self.x0, self.y0), self.interval, self.step);
        if let Some(order) = self.order {
            solver = solver.with_order(order);
        }
        if let Some(rule) = self.rule {
            solver = solver.with_rule(rule);
        }
        solver.set_loglevel(self.loglevel);
        solver.set_log_file(self.log_file);
        Ok(solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TASK: &str = r#"
        method = "AdamsBashforth2"
        rhs = "x^2 - 2*y"
        x0 = 0.0
        y0 = 1.0
        interval = [0.0, 1.0]
        step = 0.1
        loglevel = "off"
    "#;

    #[test]
    fn test_parse_task() {
        let task = TaskConfig::from_toml_str(TASK).unwrap();
        assert_eq!(task.method, Method::AdamsBashforth2);
        assert_eq!(task.arg, "x");
        assert_eq!(task.unknown, "y");
        assert_eq!(task.order, None);
        assert_eq!(task.interval, vec![0.0, 1.0]);
    }

    #[test]
    fn test_task_to_solution() {
        let solver = TaskConfig::from_toml_str(TASK).unwrap().into_solver().unwrap();
        let table = solver.solve().unwrap();
        assert_eq!(table.len(), 11);
        assert_relative_eq!(table.last().unwrap().x, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_taylor_task() {
        let input = r#"
            method = "Taylor"
            rhs = "u"
            arg = "t"
            unknown = "u"
            x0 = 0.0
            y0 = 1.0
            interval = [0.0, 1.0]
            step = 0.5
            order = 10
            rule = "ChainRule"
        "#;
        let task = TaskConfig::from_toml_str(input).unwrap();
        assert_eq!(task.rule, Some(DerivativeRule::ChainRule));
        let table = task.into_solver().unwrap().solver().unwrap();
        assert_eq!(table.len(), 3);
        assert_relative_eq!(table.last().unwrap().y, 1.0_f64.exp(), epsilon = 1e-7);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let task = TaskConfig::from_toml_str(TASK).unwrap();
        let text = task.to_toml_string().unwrap();
        assert_eq!(TaskConfig::from_toml_str(&text).unwrap(), task);
    }

    #[test]
    fn test_bad_tasks() {
        assert!(matches!(
            TaskConfig::from_toml_str("method = \"Euler\""),
            Err(OdeError::Config(_))
        ));
        let unknown_method = TASK.replace("AdamsBashforth2", "Midpoint");
        assert!(matches!(
            TaskConfig::from_toml_str(&unknown_method),
            Err(OdeError::Config(_))
        ));
        let bad_rhs = TASK.replace("x^2 - 2*y", "x^^2");
        assert!(matches!(
            TaskConfig::from_toml_str(&bad_rhs).unwrap().into_solver(),
            Err(OdeError::Parse(_))
        ));
    }
}
