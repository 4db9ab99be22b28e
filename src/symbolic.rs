/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedIVP::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("x^2 - 2*y").unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the expression tree with derivative markers of the unknown function
/// 2) differentiates it, partially or with respect to the argument of the unknown function
/// 3) evaluates it after substitution of numbers
///# Example#
/// ```
/// use RustedIVP::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x*y + sin(y)").unwrap();
/// // partial derivative, y' markers are never produced
/// let df_dy = f.diff("y").simplify();
/// // total derivative with respect to x, y is a function of x: y -> y'
/// let df_dx = f.diff_implicit("x", "y").simplify();
/// println!("df_dy = {}, df_dx = {}", df_dy, df_dx);
/// let value = df_dx
///     .set_derivative("y", 1, 2.0)
///     .set_variable("y", 0.0)
///     .set_variable("x", 1.0)
///     .evaluate()
///     .unwrap();
/// assert_eq!(value, 4.0);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
/// turns a symbolic expression into a Rust closure
///# Example
/// ```
/// use RustedIVP::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x^2 - 2*y").unwrap();
/// let func = f.lambdify_IVP("x", "y").unwrap();
/// assert_eq!(func(3.0, 1.0), 7.0);
/// ```
pub mod symbolic_lambdify;
pub mod symbolic_simplify;
