use crate::parser::{ParseError, ShuntingParser};
use crate::rpneval::EvalErr;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum CalcError {
    EmptyExpression,
    Parse(ParseError),
    Eval(EvalErr),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CalcError::EmptyExpression => write!(f, "empty expression"),
            CalcError::Parse(ref e) => write!(f, "{}", e),
            CalcError::Eval(ref e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            CalcError::EmptyExpression => None,
            CalcError::Parse(ref e) => Some(e),
            CalcError::Eval(ref e) => Some(e),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        CalcError::Parse(e)
    }
}

impl From<EvalErr> for CalcError {
    fn from(e: EvalErr) -> Self {
        CalcError::Eval(e)
    }
}

/// Drops every whitespace char, not only the surrounding ones.
pub fn strip_whitespace(expr: &str) -> String {
    expr.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse and evaluate an infix expression in one go.
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    let expr = strip_whitespace(expr);
    if expr.is_empty() {
        return Err(CalcError::EmptyExpression);
    }
    let rpn = ShuntingParser::parse_str(&expr)?;
    Ok(rpn.eval()?)
}

///////////////////////////////////////////////////////////////////////////////
