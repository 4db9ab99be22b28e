//! Successive derivatives of the right-hand side along the solution.
//!
//! Starting from `d0 = f(x, y)`, every next entry is
//! ```text
//!  d_k = D_x d_{k-1} + d/dy d_{k-1}        (DerivativeRule::Literal)
//!  d_k = D_x d_{k-1}                       (DerivativeRule::ChainRule)
//! ```
//! where `D_x` differentiates in `x` with `y = y(x)`, so every `y` becomes the marker
//! `y'` and `y^(n)` becomes `y^(n+1)`. `D_x` alone is already the total derivative,
//! the literal rule adds the partial in `y` on top of it. Literal is the default.
use crate::errors::OdeError;
use crate::numerical::RHS_adapter::check_symbols;
use crate::symbolic::symbolic_engine::Expr;
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum DerivativeRule {
    /// `D_x d + d/dy d`
    #[default]
    Literal,
    /// `D_x d`, the total derivative
    ChainRule,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeChain {
    arg: String,
    unknown: String,
    rule: DerivativeRule,
    /// `[d0, d1, ..., dK]`
    derivatives: Vec<Expr>,
    /// `[y', y'', ..., y^(K)]`
    markers: Vec<Expr>,
}

impl DerivativeChain {
    /// Builds `d0..=d_order` for `f`. `f` may only contain `arg` and `unknown`.
    pub fn new(
        f: &Expr,
        arg: &str,
        unknown: &str,
        order: usize,
        rule: DerivativeRule,
    ) -> Result<DerivativeChain, OdeError> {
        check_symbols(f, arg, unknown)?;

        let mut derivatives = Vec::with_capacity(order + 1);
        let mut markers = Vec::with_capacity(order);
        let mut current = f.clone();
        let mut marker = Expr::Var(unknown.to_string());
        for k in 1..=order {
            let mut next = current.diff_implicit(arg, unknown);
            if rule == DerivativeRule::Literal {
                next = next + current.diff(unknown);
            }
            derivatives.push(current);
            current = next.simplify();
            debug!("d{} = {}", k, current);

            marker = marker.diff_implicit(arg, unknown);
            markers.push(marker.clone());
        }
        derivatives.push(current);

        Ok(DerivativeChain {
            arg: arg.to_string(),
            unknown: unknown.to_string(),
            rule,
            derivatives,
            markers,
        })
    }

    pub fn order(&self) -> usize {
        self.markers.len()
    }

    pub fn rule(&self) -> DerivativeRule {
        self.rule
    }

    pub fn arg(&self) -> &str {
        &self.arg
    }

    pub fn unknown(&self) -> &str {
        &self.unknown
    }

    pub fn derivatives(&self) -> &[Expr] {
        &self.derivatives
    }

    /// `markers()[j - 1]` is `y^(j)`
    pub fn markers(&self) -> &[Expr] {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn parse(input: &str) -> Expr {
        Expr::parse_expression(input).unwrap()
    }

    fn marker(order: usize) -> Expr {
        Expr::Derivative("y".to_string(), order)
    }

    #[test]
    fn test_chain_length_and_markers() {
        let chain = DerivativeChain::new(&parse("x*y"), "x", "y", 3, DerivativeRule::Literal).unwrap();
        assert_eq!(chain.order(), 3);
        assert_eq!(chain.derivatives().len(), 4);
        assert_eq!(chain.markers(), &[marker(1), marker(2), marker(3)]);
        assert_eq!(chain.derivatives()[0], parse("x*y"));
    }

    #[test]
    fn test_order_zero() {
        let chain = DerivativeChain::new(&parse("x + y"), "x", "y", 0, DerivativeRule::Literal).unwrap();
        assert_eq!(chain.derivatives().len(), 1);
        assert!(chain.markers().is_empty());
    }

    #[test]
    fn test_literal_rule_adds_partial_in_y() {
        // f = y: d1 = y' + 1, d2 = y''
        let chain = DerivativeChain::new(&parse("y"), "x", "y", 2, DerivativeRule::Literal).unwrap();
        assert_eq!(chain.derivatives()[1], marker(1) + Expr::Const(1.0));
        assert_eq!(chain.derivatives()[2], marker(2));
    }

    #[test]
    fn test_chain_rule() {
        // f = y: d1 = y', d2 = y''
        let chain = DerivativeChain::new(&parse("y"), "x", "y", 2, DerivativeRule::ChainRule).unwrap();
        assert_eq!(chain.derivatives()[1], marker(1));
        assert_eq!(chain.derivatives()[2], marker(2));
        assert_eq!(chain.rule(), DerivativeRule::ChainRule);
    }

    #[test]
    fn test_argument_only() {
        // f = x: d1 = 1, d2 = 0 with either rule
        for rule in DerivativeRule::iter() {
            let chain = DerivativeChain::new(&parse("x"), "x", "y", 2, rule).unwrap();
            assert_eq!(chain.derivatives()[1], Expr::Const(1.0));
            assert_eq!(chain.derivatives()[2], Expr::Const(0.0));
        }
    }

    #[test]
    fn test_foreign_symbol() {
        assert_eq!(
            DerivativeChain::new(&parse("x + a*y"), "x", "y", 2, DerivativeRule::Literal),
            Err(OdeError::UnboundSymbol("a".to_string()))
        );
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(DerivativeRule::default(), DerivativeRule::Literal);
        assert_eq!(DerivativeRule::ChainRule.to_string(), "ChainRule");
        assert_eq!("Literal".parse::<DerivativeRule>().unwrap(), DerivativeRule::Literal);
    }
}
