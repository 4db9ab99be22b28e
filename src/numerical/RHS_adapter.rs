//! Right-hand side `f(x, y)` of a scalar IVP `y' = f(x, y)`, numeric or symbolic,
//! and its reduction to one numeric evaluator every step integrator can call.
use crate::errors::OdeError;
use crate::symbolic::symbolic_engine::Expr;
use log::debug;
use std::fmt;

/// numeric evaluator `f(x, y)`
pub type RhsFunction = Box<dyn Fn(f64, f64) -> f64 + Send + Sync>;

pub enum Rhs {
    /// plain closure, used as is
    Numeric(RhsFunction),
    /// expression in the argument `arg` and the unknown function `unknown`
    Symbolic {
        expr: Expr,
        arg: String,
        unknown: String,
    },
}

impl Rhs {
    pub fn numeric<F>(f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Rhs::Numeric(Box::new(f))
    }

    pub fn symbolic(expr: Expr, arg: &str, unknown: &str) -> Self {
        Rhs::Symbolic {
            expr,
            arg: arg.to_string(),
            unknown: unknown.to_string(),
        }
    }

    /// Parses `input` and wraps it as a symbolic right-hand side.
    pub fn parse(input: &str, arg: &str, unknown: &str) -> Result<Self, OdeError> {
        let expr = Expr::parse_expression(input)?;
        Ok(Rhs::symbolic(expr, arg, unknown))
    }

    /// Resolves the right-hand side to a pure evaluator `eval(x, y)`.
    ///
    /// A symbolic expression is checked for foreign symbols and derivative markers
    /// here, before anything is evaluated, and compiled once.
    pub fn evaluator(&self) -> Result<Box<dyn Fn(f64, f64) -> f64 + Send + Sync + '_>, OdeError> {
        match self {
            Rhs::Numeric(f) => Ok(Box::new(move |x, y| f(x, y))),
            Rhs::Symbolic { expr, arg, unknown } => {
                check_symbols(expr, arg, unknown)?;
                let compiled = expr.lambdify_IVP(arg, unknown)?;
                debug!("compiled right-hand side {} = {}", unknown, expr);
                Ok(compiled)
            }
        }
    }

    /// Symbolic form `(expr, arg, unknown)`; a numeric closure has none.
    pub fn as_symbolic(&self) -> Result<(&Expr, &str, &str), OdeError> {
        match self {
            Rhs::Symbolic { expr, arg, unknown } => Ok((expr, arg.as_str(), unknown.as_str())),
            Rhs::Numeric(_) => Err(OdeError::UnsupportedSpecification(
                "a numeric closure can not be differentiated symbolically".to_string(),
            )),
        }
    }
}

/// Every free symbol must be `arg` or `unknown`, and no derivative marker may be left.
pub(crate) fn check_symbols(expr: &Expr, arg: &str, unknown: &str) -> Result<(), OdeError> {
    if arg == unknown {
        return Err(OdeError::UnsupportedSpecification(format!(
            "argument and unknown function share the name `{}`",
            arg
        )));
    }
    if let Some(foreign) = expr
        .all_arguments_are_variables()
        .into_iter()
        .find(|name| name != arg && name != unknown)
    {
        return Err(OdeError::UnboundSymbol(foreign));
    }
    if let Some((name, order)) = expr.derivative_markers().into_iter().next() {
        return Err(OdeError::UnboundSymbol(
            Expr::Derivative(name, order).to_string(),
        ));
    }
    Ok(())
}

impl fmt::Display for Rhs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rhs::Numeric(_) => write!(f, "f(x, y) <numeric>"),
            Rhs::Symbolic { expr, arg, unknown } => {
                write!(f, "{}'({}) = {}", unknown, arg, expr)
            }
        }
    }
}

impl fmt::Debug for Rhs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rhs({})", self)
    }
}
