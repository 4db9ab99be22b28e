//! # Symbolic Engine Module
//!
//! Core expression tree used to describe right-hand sides `f(x, y)` of scalar ODEs
//! and to differentiate them.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Variables**: `Var(String)` - symbolic variables like "x", "y"
//! - **Derivative markers**: `Derivative(String, n)` - the n-th derivative of a
//!   dependent function, e.g. `y'`, `y''`. They appear when an expression containing
//!   the unknown function is differentiated with `diff_implicit`
//! - **Constants**: `Const(f64)`
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow`
//! - **Functions**: `Exp`, `Ln`, `sin`, `cos`, `tg`, `arctg`
//!
//! ### Key Methods
//! - `Symbols(symbols: &str)` - create multiple variables from comma-separated string
//! - `set_variable()` / `set_derivative()` - substitute numbers for symbols and markers
//! - `all_arguments_are_variables()` - free symbols of the expression
//! - `derivative_markers()` - markers present in the expression
//!
//! Differentiation lives in `symbolic_engine_derivatives`, simplification in
//! `symbolic_simplify`, closure generation in `symbolic_lambdify`.

use std::fmt;

/// Core symbolic expression enum representing mathematical expressions as an abstract syntax tree.
///
/// # Examples
/// ```rust, ignore
/// use symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x", "y")
    Var(String),
    /// n-th derivative of the dependent function with the given name; n >= 1
    Derivative(String, usize),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    sin(Box<Expr>),
    cos(Box<Expr>),
    /// Tangent function - uses mathematical notation 'tg'
    tg(Box<Expr>),
    /// Arctangent function - uses mathematical notation 'arctg'
    arctg(Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Derivative(name, order) => match order {
                1..=3 => write!(f, "{}{}", name, "'".repeat(*order)),
                _ => write!(f, "{}^({})", name, order),
            },
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tg(expr) => write!(f, "tg({})", expr),
            Expr::arctg(expr) => write!(f, "arctg({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expr::Add(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Expr::Sub(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expr::Mul(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::DivAssign for Expr {
    fn div_assign(&mut self, rhs: Self) {
        *self = Expr::Div(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let vars = Expr::Symbols("x, y");
    /// assert_eq!(vars.len(), 2);
    /// ```
    pub fn Symbols(symbols: &str) -> Vec<Expr> {
        symbols
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| Expr::Var(s.to_string()))
            .collect()
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates exponential function e^(self).
    pub fn exp(self) -> Expr {
        Expr::Exp(self.boxed())
    }

    /// Creates natural logarithm ln(self).
    pub fn ln(self) -> Expr {
        Expr::Ln(self.boxed())
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Checks if expression is exactly zero (constant 0.0).
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(val) if *val == 0.0)
    }

    /// Direct subexpressions, left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Var(_) | Expr::Derivative(..) | Expr::Const(_) => Vec::new(),
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => vec![lhs, rhs],
            Expr::Exp(expr)
            | Expr::Ln(expr)
            | Expr::sin(expr)
            | Expr::cos(expr)
            | Expr::tg(expr)
            | Expr::arctg(expr) => vec![expr],
        }
    }

    /// Rebuilds the tree top-down. A node for which `rule` returns `Some` is replaced
    /// whole and its children are not visited.
    pub fn replace_nodes(&self, rule: &dyn Fn(&Expr) -> Option<Expr>) -> Expr {
        if let Some(replaced) = rule(self) {
            return replaced;
        }
        match self {
            Expr::Var(_) | Expr::Derivative(..) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                Expr::Add(lhs.replace_nodes(rule).boxed(), rhs.replace_nodes(rule).boxed())
            }
            Expr::Sub(lhs, rhs) => {
                Expr::Sub(lhs.replace_nodes(rule).boxed(), rhs.replace_nodes(rule).boxed())
            }
            Expr::Mul(lhs, rhs) => {
                Expr::Mul(lhs.replace_nodes(rule).boxed(), rhs.replace_nodes(rule).boxed())
            }
            Expr::Div(lhs, rhs) => {
                Expr::Div(lhs.replace_nodes(rule).boxed(), rhs.replace_nodes(rule).boxed())
            }
            Expr::Pow(base, exp) => {
                Expr::Pow(base.replace_nodes(rule).boxed(), exp.replace_nodes(rule).boxed())
            }
            Expr::Exp(expr) => Expr::Exp(expr.replace_nodes(rule).boxed()),
            Expr::Ln(expr) => Expr::Ln(expr.replace_nodes(rule).boxed()),
            Expr::sin(expr) => Expr::sin(expr.replace_nodes(rule).boxed()),
            Expr::cos(expr) => Expr::cos(expr.replace_nodes(rule).boxed()),
            Expr::tg(expr) => Expr::tg(expr.replace_nodes(rule).boxed()),
            Expr::arctg(expr) => Expr::arctg(expr.replace_nodes(rule).boxed()),
        }
    }

    /// Substitutes a variable with a constant value throughout the expression.
    ///
    /// Derivative markers of a function with the same name are left untouched.
    pub fn set_variable(&self, var: &str, value: f64) -> Expr {
        self.replace_nodes(&|node| match node {
            Expr::Var(name) if name == var => Some(Expr::Const(value)),
            _ => None,
        })
    }

    /// Substitutes the marker `name^(order)` with a constant value.
    pub fn set_derivative(&self, name: &str, order: usize, value: f64) -> Expr {
        self.replace_nodes(&|node| match node {
            Expr::Derivative(n, o) if n == name && *o == order => Some(Expr::Const(value)),
            _ => None,
        })
    }

    /// Replaces every occurrence of `target` (any subtree) with a constant value.
    pub fn substitute(&self, target: &Expr, value: f64) -> Expr {
        self.replace_nodes(&|node| {
            if node == target {
                Some(Expr::Const(value))
            } else {
                None
            }
        })
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            _ => self
                .children()
                .into_iter()
                .any(|child| child.contains_variable(var_name)),
        }
    }

    /// Extracts all unique variable names from the symbolic expression.
    ///
    /// Returns a sorted, deduplicated list. Derivative markers are not variables,
    /// see `derivative_markers`.
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        self.collect_leaves(&mut |leaf| {
            if let Expr::Var(name) = leaf {
                vars.push(name.clone());
            }
        });
        vars.sort();
        vars.dedup();
        vars
    }

    /// Derivative markers `(function name, order)` present in the expression, sorted.
    pub fn derivative_markers(&self) -> Vec<(String, usize)> {
        let mut markers = Vec::new();
        self.collect_leaves(&mut |leaf| {
            if let Expr::Derivative(name, order) = leaf {
                markers.push((name.clone(), *order));
            }
        });
        markers.sort();
        markers.dedup();
        markers
    }

    fn collect_leaves(&self, visit: &mut dyn FnMut(&Expr)) {
        match self {
            Expr::Var(_) | Expr::Derivative(..) | Expr::Const(_) => visit(self),
            _ => {
                for child in self.children() {
                    child.collect_leaves(visit);
                }
            }
        }
    }
}

//___________________________________MACROS____________________________________

/// Macro to create symbolic variables from a comma-separated list
/// Usage: symbols!(x, y) -> creates variables x, y
#[macro_export]
macro_rules! symbols {
    ($($var:ident),+ $(,)?) => {
        {
            let var_names = stringify!($($var),+);
            let vars = $crate::symbolic::symbolic_engine::Expr::Symbols(var_names);
            let mut iter = vars.into_iter();
            ($(
                {
                    let $var = iter.next().unwrap();
                    $var
                }
            ),+)
        }
    };
}
