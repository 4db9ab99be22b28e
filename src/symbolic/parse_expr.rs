//! String to `Expr` parser.
//!
//! ```text
//!   expr   := term  (('+' | '-') term)*
//!   term   := unary (('*' | '/') unary)*
//!   unary  := '-' unary | power
//!   power  := atom ('^' unary)?          right associative
//!   atom   := number | func '(' expr ')' | identifier | '(' expr ')'
//! ```
//! Supported functions: `exp`, `ln`/`log`, `sin`, `cos`, `tg`/`tan`, `arctg`/`atan`.
use crate::errors::OdeError;
use crate::symbolic::symbolic_engine::Expr;
use log::debug;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, multispace0, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize},
    error::Error,
    multi::many0,
    number::complete::recognize_float,
    sequence::{delimited, pair, preceded},
};

fn ws<'a, O, P>(inner: P) -> impl Parser<&'a str, Output = O, Error = Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn number(input: &str) -> IResult<&str, Expr> {
    map_res(recognize_float, |s: &str| s.parse::<f64>().map(Expr::Const)).parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

fn function_by_name(name: &str, arg: Expr) -> Result<Expr, String> {
    let arg = arg.boxed();
    match name {
        "exp" => Ok(Expr::Exp(arg)),
        "ln" | "log" => Ok(Expr::Ln(arg)),
        "sin" => Ok(Expr::sin(arg)),
        "cos" => Ok(Expr::cos(arg)),
        "tg" | "tan" => Ok(Expr::tg(arg)),
        "arctg" | "atan" => Ok(Expr::arctg(arg)),
        _ => Err(format!("unknown function {}", name)),
    }
}

fn function_call(input: &str) -> IResult<&str, Expr> {
    map_res(
        pair(
            identifier,
            preceded(multispace0, delimited(char('('), expr, char(')'))),
        ),
        |(name, arg)| function_by_name(name, arg),
    )
    .parse(input)
}

fn atom(input: &str) -> IResult<&str, Expr> {
    ws(alt((
        number,
        function_call,
        map(identifier, |name: &str| Expr::Var(name.to_string())),
        delimited(char('('), expr, char(')')),
    )))
    .parse(input)
}

fn power(input: &str) -> IResult<&str, Expr> {
    let (input, base) = atom(input)?;
    let (input, exponent) = opt(preceded(ws(char('^')), unary)).parse(input)?;
    let parsed = match exponent {
        Some(exponent) => base.pow(exponent),
        None => base,
    };
    Ok((input, parsed))
}

fn unary(input: &str) -> IResult<&str, Expr> {
    alt((
        map(preceded(ws(char('-')), unary), |operand| match operand {
            Expr::Const(val) => Expr::Const(-val),
            other => -other,
        }),
        power,
    ))
    .parse(input)
}

fn term(input: &str) -> IResult<&str, Expr> {
    let (input, first) = unary(input)?;
    let (input, rest) = many0(pair(ws(one_of("*/")), unary)).parse(input)?;
    let folded = rest.into_iter().fold(first, |acc, (op, rhs)| match op {
        '*' => acc * rhs,
        _ => acc / rhs,
    });
    Ok((input, folded))
}

fn expr(input: &str) -> IResult<&str, Expr> {
    let (input, first) = term(input)?;
    let (input, rest) = many0(pair(ws(one_of("+-")), term)).parse(input)?;
    let folded = rest.into_iter().fold(first, |acc, (op, rhs)| match op {
        '+' => acc + rhs,
        _ => acc - rhs,
    });
    Ok((input, folded))
}

impl Expr {
    /// EXPRESSION PARSING FROM STRINGS

    /// Parses a mathematical expression from string representation.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("x^2 - 2*y").unwrap();
    /// ```
    ///
    /// # Errors
    /// `OdeError::Parse` on invalid syntax or trailing input.
    pub fn parse_expression(input: &str) -> Result<Expr, OdeError> {
        match all_consuming(expr).parse(input) {
            Ok((_, parsed)) => {
                debug!("parsed `{}` as {}", input, parsed);
                Ok(parsed)
            }
            Err(err) => Err(OdeError::Parse(format!("`{}`: {}", input, err))),
        }
    }
}
