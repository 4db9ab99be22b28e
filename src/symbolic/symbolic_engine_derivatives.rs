//! # Symbolic Engine Derivatives Module
//!
//! Analytical differentiation and direct evaluation of `Expr` trees.
//!
//! ## Key Methods
//!
//! ### Differentiation
//! - `diff(var)` - partial derivative; every other symbol and every derivative
//!   marker is held constant
//! - `diff_implicit(arg, unknown)` - derivative with respect to `arg` where `unknown`
//!   is a function of `arg`: `y -> y'`, `y' -> y''`, ...
//!
//! ### Function evaluation
//! - `eval_expression(vars, values)` - direct evaluation without closure creation
//! - `evaluate()` - numeric value of an expression with nothing left to substitute
//!
//! Both differentiation flavours share one recursive rule set (sum, product,
//! quotient, power and chain rules); they differ only in how leaves are treated.

use crate::errors::OdeError;
use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical partial derivative of the expression with respect to a variable.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.clone().pow(Expr::Const(2.0)); // x^2
    /// let df_dx = f.diff("x"); // 2*x
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        self.differentiate(&|leaf| match leaf {
            Expr::Var(name) if name == var => Expr::Const(1.0),
            _ => Expr::Const(0.0),
        })
    }

    /// Derivative with respect to `arg`, treating `unknown` as a function `unknown(arg)`.
    ///
    /// Each occurrence of the unknown produces the marker `unknown'`, and each marker of
    /// order n produces the marker of order n+1. Nothing is substituted for the markers.
    pub fn diff_implicit(&self, arg: &str, unknown: &str) -> Expr {
        self.differentiate(&|leaf| match leaf {
            Expr::Var(name) if name == arg => Expr::Const(1.0),
            Expr::Var(name) if name == unknown => Expr::Derivative(unknown.to_string(), 1),
            Expr::Derivative(name, order) if name == unknown => {
                Expr::Derivative(name.clone(), order + 1)
            }
            _ => Expr::Const(0.0),
        })
    }

    fn differentiate(&self, leaf: &dyn Fn(&Expr) -> Expr) -> Expr {
        match self {
            Expr::Var(_) | Expr::Derivative(..) | Expr::Const(_) => leaf(self),
            Expr::Add(lhs, rhs) => Expr::Add(
                lhs.differentiate(leaf).boxed(),
                rhs.differentiate(leaf).boxed(),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                lhs.differentiate(leaf).boxed(),
                rhs.differentiate(leaf).boxed(),
            ),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(lhs.differentiate(leaf).boxed(), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), rhs.differentiate(leaf).boxed())),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(lhs.differentiate(leaf).boxed(), rhs.clone())),
                    Box::new(Expr::Mul(rhs.differentiate(leaf).boxed(), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => {
                let d_exp = exp.differentiate(leaf).simplify();
                if d_exp.is_zero() {
                    // n * base^(n-1) * base'
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            exp.clone(),
                            Box::new(Expr::Pow(
                                base.clone(),
                                Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                            )),
                        )),
                        base.differentiate(leaf).boxed(),
                    )
                } else {
                    // base^exp * (exp' * ln(base) + exp * base' / base)
                    Expr::Mul(
                        Box::new(self.clone()),
                        Box::new(Expr::Add(
                            Box::new(Expr::Mul(d_exp.boxed(), Box::new(Expr::Ln(base.clone())))),
                            Box::new(Expr::Div(
                                Box::new(Expr::Mul(exp.clone(), base.differentiate(leaf).boxed())),
                                base.clone(),
                            )),
                        )),
                    )
                }
            }
            Expr::Exp(expr) => Expr::Mul(
                Box::new(Expr::Exp(expr.clone())),
                expr.differentiate(leaf).boxed(),
            ),
            Expr::Ln(expr) => Expr::Div(expr.differentiate(leaf).boxed(), expr.clone()),
            Expr::sin(expr) => Expr::Mul(
                Box::new(Expr::cos(expr.clone())),
                expr.differentiate(leaf).boxed(),
            ),
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                expr.differentiate(leaf).boxed(),
            ),
            Expr::tg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::cos(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                expr.differentiate(leaf).boxed(),
            ),
            Expr::arctg(expr) => Expr::Div(
                expr.differentiate(leaf).boxed(),
                Box::new(Expr::Add(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                )),
            ),
        }
    } // end of differentiate

    /// DIRECT EXPRESSION EVALUATION

    /// Evaluates symbolic expression directly without creating a closure.
    ///
    /// # Arguments
    /// * `vars` - Variable names in order matching values array
    /// * `values` - Numerical values for each variable
    ///
    /// # Errors
    /// `UnboundSymbol` for a variable missing from `vars` or without a value in `values`,
    /// and for any derivative marker.
    pub fn eval_expression(&self, vars: &[&str], values: &[f64]) -> Result<f64, OdeError> {
        let value = match self {
            Expr::Var(name) => {
                vars.iter()
                    .position(|&x| x == name)
                    .and_then(|index| values.get(index).copied())
                    .ok_or_else(|| OdeError::UnboundSymbol(name.clone()))?
            }
            Expr::Derivative(..) => return Err(OdeError::UnboundSymbol(self.to_string())),
            Expr::Const(val) => *val,
            Expr::Add(lhs, rhs) => {
                lhs.eval_expression(vars, values)? + rhs.eval_expression(vars, values)?
            }
            Expr::Sub(lhs, rhs) => {
                lhs.eval_expression(vars, values)? - rhs.eval_expression(vars, values)?
            }
            Expr::Mul(lhs, rhs) => {
                lhs.eval_expression(vars, values)? * rhs.eval_expression(vars, values)?
            }
            Expr::Div(lhs, rhs) => {
                lhs.eval_expression(vars, values)? / rhs.eval_expression(vars, values)?
            }
            Expr::Pow(base, exp) => base
                .eval_expression(vars, values)?
                .powf(exp.eval_expression(vars, values)?),
            Expr::Exp(expr) => expr.eval_expression(vars, values)?.exp(),
            Expr::Ln(expr) => expr.eval_expression(vars, values)?.ln(),
            Expr::sin(expr) => expr.eval_expression(vars, values)?.sin(),
            Expr::cos(expr) => expr.eval_expression(vars, values)?.cos(),
            Expr::tg(expr) => expr.eval_expression(vars, values)?.tan(),
            Expr::arctg(expr) => expr.eval_expression(vars, values)?.atan(),
        };
        Ok(value)
    } // end of eval_expression

    /// Numeric value of a fully substituted expression.
    pub fn evaluate(&self) -> Result<f64, OdeError> {
        self.eval_expression(&[], &[])
    }
}
