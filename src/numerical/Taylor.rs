/// derivatives of the right-hand side along the solution, `d0 = f`, `d_k = D_x d_{k-1} (+ d/dy d_{k-1})`
pub mod derivative_chain;
/// Taylor coefficients at the initial point, series evaluation and sampling
/// # Example
/// ```
/// use RustedIVP::numerical::RHS_adapter::Rhs;
/// use RustedIVP::numerical::Taylor::Taylor_main::TaylorSolver;
/// use RustedIVP::numerical::Taylor::derivative_chain::DerivativeRule;
/// let rhs = Rhs::parse("x + y", "x", "y").unwrap();
/// let solver = TaylorSolver::new(6).with_rule(DerivativeRule::ChainRule);
/// let table = solver.solve(&rhs, (0.0, 1.0).into(), 0.5, 0.1).unwrap();
/// println!("{}", table);
/// ```
pub mod Taylor_main;
