use crate::errors::OdeError;
use crate::symbolic::symbolic_engine::Expr;

/// Compiled numeric form of an expression: `args[i]` is the value of `vars[i]`.
pub type Lambdified = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

impl Expr {
    /// LAMBDIFICATION - Converting Symbolic Expressions to Executable Functions

    /// Converts a symbolic expression into a closure over the given variables.
    ///
    /// Variable names are resolved to argument positions once, here; the returned
    /// closure never fails. Derivative markers can not be lambdified.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x^2 - 2*y").unwrap();
    /// let func = f.lambdify(&["x", "y"]).unwrap();
    /// assert_eq!(func(&[3.0, 1.0]), 7.0);
    /// ```
    pub fn lambdify(&self, vars: &[&str]) -> Result<Lambdified, OdeError> {
        let compiled: Lambdified = match self {
            Expr::Var(name) => {
                let index = vars
                    .iter()
                    .position(|&x| x == name)
                    .ok_or_else(|| OdeError::UnboundSymbol(name.clone()))?;
                Box::new(move |args| args[index])
            }
            Expr::Derivative(..) => return Err(OdeError::UnboundSymbol(self.to_string())),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lf = lhs.lambdify(vars)?;
                let rf = rhs.lambdify(vars)?;
                Box::new(move |args| lf(args) + rf(args))
            }
            Expr::Sub(lhs, rhs) => {
                let lf = lhs.lambdify(vars)?;
                let rf = rhs.lambdify(vars)?;
                Box::new(move |args| lf(args) - rf(args))
            }
            Expr::Mul(lhs, rhs) => {
                let lf = lhs.lambdify(vars)?;
                let rf = rhs.lambdify(vars)?;
                Box::new(move |args| lf(args) * rf(args))
            }
            Expr::Div(lhs, rhs) => {
                let lf = lhs.lambdify(vars)?;
                let rf = rhs.lambdify(vars)?;
                Box::new(move |args| lf(args) / rf(args))
            }
            Expr::Pow(b, e) => {
                let bf = b.lambdify(vars)?;
                let ef = e.lambdify(vars)?;
                Box::new(move |args| bf(args).powf(ef(args)))
            }
            Expr::Exp(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).exp())
            }
            Expr::Ln(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).ln())
            }
            Expr::sin(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).sin())
            }
            Expr::cos(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).cos())
            }
            Expr::tg(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).tan())
            }
            Expr::arctg(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).atan())
            }
        };
        Ok(compiled)
    } // end of lambdify

    /// Closure `f(x, y)` for a right-hand side of a scalar IVP with argument `arg`
    /// and unknown function `unknown`.
    pub fn lambdify_IVP(
        &self,
        arg: &str,
        unknown: &str,
    ) -> Result<Box<dyn Fn(f64, f64) -> f64 + Send + Sync>, OdeError> {
        let compiled = self.lambdify(&[arg, unknown])?;
        Ok(Box::new(move |x, y| compiled(&[x, y])))
    }
}
