//! # Symbolic Expression Simplification Module
//!
//! Keeps derivative chains from growing without bound. Repeated differentiation
//! produces many `0 * …`, `1 * …` and `… + 0` nodes; `simplify()` removes them and
//! folds constant subtrees.
//!
//! ## Rules
//!
//! - **Constant Folding**: arithmetic and function calls on numerical constants
//! - **Additive Identities**: `x + 0 = x`, `0 + x = x`, `x - 0 = x`, `0 - x = -1 * x`, `x - x = 0`
//! - **Multiplicative Identities**: `x * 1 = x`, `x * 0 = 0`, `(c1 * x) * c2 = (c1 * c2) * x`
//! - **Division Rules**: `0 / x = 0`, `x / 1 = x`, `x / x = 1` for a variable `x`
//! - **Power Rules**: `x^0 = 1`, `x^1 = x`
//!
//! Derivative markers are treated like variables: never folded, never dropped.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// Algebraic simplification using the identities listed in the module docs.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Derivative(..) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    (Expr::Const(a), _) if *a == 0.0 => rhs,
                    (_, Expr::Const(b)) if *b == 0.0 => lhs,
                    _ => Expr::Add(lhs.boxed(), rhs.boxed()),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    (_, Expr::Const(b)) if *b == 0.0 => lhs,
                    (Expr::Const(a), _) if *a == 0.0 => {
                        Expr::Mul(Box::new(Expr::Const(-1.0)), rhs.boxed()).simplify()
                    }
                    _ if lhs == rhs => Expr::Const(0.0),
                    _ => Expr::Sub(lhs.boxed(), rhs.boxed()),
                }
            }
            Expr::Mul(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                    (Expr::Const(a), _) | (_, Expr::Const(a)) if *a == 0.0 => Expr::Const(0.0),
                    (Expr::Const(a), _) if *a == 1.0 => rhs,
                    (_, Expr::Const(b)) if *b == 1.0 => lhs,
                    // (c1 * expr) * c2 = (c1 * c2) * expr and c2 * (c1 * expr) = (c2 * c1) * expr
                    (Expr::Mul(inner_lhs, inner), Expr::Const(c))
                    | (Expr::Const(c), Expr::Mul(inner_lhs, inner)) => {
                        if let Expr::Const(c1) = inner_lhs.as_ref() {
                            Expr::Mul(Box::new(Expr::Const(c1 * c)), inner.clone())
                        } else {
                            Expr::Mul(lhs.boxed(), rhs.boxed())
                        }
                    }
                    _ => Expr::Mul(lhs.boxed(), rhs.boxed()),
                }
            }
            Expr::Div(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) if *b != 0.0 => Expr::Const(a / b),
                    (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
                    (_, Expr::Const(b)) if *b == 1.0 => lhs,
                    (Expr::Var(v1), Expr::Var(v2)) if v1 == v2 => Expr::Const(1.0),
                    _ => Expr::Div(lhs.boxed(), rhs.boxed()),
                }
            }
            Expr::Pow(base, exp) => {
                let base = base.simplify();
                let exp = exp.simplify();
                match (&base, &exp) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(*b)),
                    (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(1.0),
                    (_, Expr::Const(b)) if *b == 1.0 => base,
                    _ => Expr::Pow(base.boxed(), exp.boxed()),
                }
            }
            Expr::Exp(expr) => fold_unary(expr, Expr::Exp, f64::exp),
            Expr::Ln(expr) => fold_unary(expr, Expr::Ln, f64::ln),
            Expr::sin(expr) => fold_unary(expr, Expr::sin, f64::sin),
            Expr::cos(expr) => fold_unary(expr, Expr::cos, f64::cos),
            Expr::tg(expr) => fold_unary(expr, Expr::tg, f64::tan),
            Expr::arctg(expr) => fold_unary(expr, Expr::arctg, f64::atan),
        }
    }
}

fn fold_unary(arg: &Expr, wrap: fn(Box<Expr>) -> Expr, eval: fn(f64) -> f64) -> Expr {
    match arg.simplify() {
        Expr::Const(val) => Expr::Const(eval(val)),
        simplified => wrap(simplified.boxed()),
    }
}
