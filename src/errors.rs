//! Error type shared by the symbolic engine and the IVP solvers.
use thiserror::Error;

/// Everything that can go wrong before or while building a trajectory.
///
/// All validation errors are raised eagerly: no solver ever returns a partially
/// filled table together with one of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OdeError {
    /// interval is not exactly two endpoints, or its end does not lie after its start
    #[error("invalid interval: {0}")]
    InvalidInterval(String),
    /// step (or Taylor sampling epsilon) is not a positive finite number
    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),
    /// right-hand side references a symbol that is neither the argument nor the unknown
    #[error("unbound symbol `{0}` in right-hand side")]
    UnboundSymbol(String),
    /// a method got a right-hand side form it cannot work with
    #[error("unsupported right-hand side: {0}")]
    UnsupportedSpecification(String),
    #[error("failed to parse expression: {0}")]
    Parse(String),
    #[error("invalid task configuration: {0}")]
    Config(String),
}
