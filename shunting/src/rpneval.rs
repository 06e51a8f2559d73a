use crate::operators::Operator;
use crate::parser::RPNExpr;
use lexers::MathToken;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum EvalErr {
    InsufficientOperands,
    DivisionByZero,
    UnknownToken(String),
    MalformedExpression,
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EvalErr::InsufficientOperands => write!(f, "insufficient operands for operator"),
            EvalErr::DivisionByZero => write!(f, "division by zero"),
            EvalErr::UnknownToken(ref token) => write!(f, "unknown token: {}", token),
            EvalErr::MalformedExpression => write!(f, "malformed expression"),
        }
    }
}

impl std::error::Error for EvalErr {}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalErr> {
        eval_tokens(self.0.iter().cloned())
    }
}

/// Evaluate postfix lexemes, eg: ["2", "3", "+"]
pub fn evaluate_rpn<S: AsRef<str>>(tokens: &[S]) -> Result<f64, EvalErr> {
    eval_tokens(tokens.iter().map(|t| MathToken::from(t.as_ref())))
}

fn eval_tokens(tokens: impl Iterator<Item = MathToken>) -> Result<f64, EvalErr> {
    let mut operands = Vec::new();

    for token in tokens {
        match token {
            MathToken::Number(num, _) => operands.push(num),
            MathToken::BOp(symbol) => {
                let op = match Operator::lookup(symbol) {
                    Some(op) => op,
                    None => return Err(EvalErr::UnknownToken(symbol.to_string())),
                };
                if operands.len() < 2 {
                    return Err(EvalErr::InsufficientOperands);
                }
                let r = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
                let l = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
                if symbol == '/' && r == 0.0 {
                    return Err(EvalErr::DivisionByZero);
                }
                let result = (op.apply)(l, r);
                log::trace!("{} {} {} = {}", l, symbol, r, result);
                operands.push(result);
            }
            // parens never survive shunting
            other => return Err(EvalErr::UnknownToken(other.to_string())),
        }
    }
    match operands.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvalErr::MalformedExpression),
    }
}
