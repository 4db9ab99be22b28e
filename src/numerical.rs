/// right-hand side of y' = f(x, y): a closure or a symbolic expression, turned into one evaluator
/// # Example
/// ```
/// use RustedIVP::numerical::RHS_adapter::Rhs;
/// let symbolic = Rhs::parse("x^2 - 2*y", "x", "y").unwrap();
/// let numeric = Rhs::numeric(|x, y| x * x - 2.0 * y);
/// let f = symbolic.evaluator().unwrap();
/// let g = numeric.evaluator().unwrap();
/// assert_eq!(f(1.0, 0.5), g(1.0, 0.5));
/// ```
pub mod RHS_adapter;
/// ordered immutable table of samples (i, x, y, f(x, y)) returned by every solver
pub mod trajectory;
/// Euler, predictor-corrector and Adams-Bashforth 2 with constant step
/// # Example
/// ```
/// use RustedIVP::numerical::FixedStep::FixedStepSolver;
/// use RustedIVP::numerical::FixedStep::Euler::Euler;
/// use RustedIVP::numerical::RHS_adapter::Rhs;
/// let rhs = Rhs::parse("x^2 - 2*y", "x", "y").unwrap();
/// let table = Euler::new().solve(&rhs, (0.0, 1.0).into(), &[0.0, 1.0], 0.1).unwrap();
/// assert_eq!(table.len(), 11);
/// let (x, y) = table.get_result();
/// println!("x = {}, y = {}", x, y);
/// ```
pub mod FixedStep;
/// truncated Taylor series built by repeated symbolic differentiation of the right-hand side
pub mod Taylor;
///  general api for all solvers in the crate
/// # Example
/// ```
/// use RustedIVP::numerical::ODE_api::{IVPsolver, Method};
/// use RustedIVP::numerical::RHS_adapter::Rhs;
/// let rhs = Rhs::parse("100*(y - cos(x))", "x", "y").unwrap();
/// let mut solver = IVPsolver::new(rhs, Method::PredictorCorrector, (0.0, 1.0), vec![0.0, 1.0], 0.1);
/// solver.set_loglevel(Some("warn".to_string()));
/// let table = solver.solve().unwrap();
/// println!("{}", table);
/// ```
pub mod ODE_api;
