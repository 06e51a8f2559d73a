use crate::operators::Operator;
use lexers::{MathToken, MathTokenizer};
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum ParseError {
    UnbalancedParentheses,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Tokens in postfix order, ready to be evaluated.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<MathToken>);

impl RPNExpr {
    pub fn tokens(&self) -> Vec<String> {
        self.0.iter().map(|token| token.to_string()).collect()
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(MathTokenizer::new(expr.chars()).tokens())
    }

    pub fn parse(lex: impl IntoIterator<Item = MathToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in lex {
            log::trace!("shunting {:?}, stack: {:?}", token, stack);
            match token {
                MathToken::Number(..) => out.push(token),
                // left for the evaluator to reject
                MathToken::Unknown(_) => out.push(token),
                MathToken::OParen => stack.push(token),
                MathToken::CParen => {
                    loop {
                        match stack.pop() {
                            Some(MathToken::OParen) => break,
                            Some(top) => out.push(top),
                            None => return Err(ParseError::UnbalancedParentheses),
                        }
                    }
                }
                MathToken::BOp(symbol) => {
                    if let Some(incoming) = Operator::lookup(symbol) {
                        while let Some(MathToken::BOp(top)) = stack.last() {
                            match Operator::lookup(*top) {
                                Some(lhs) if lhs.should_pop(incoming) => (),
                                _ => break,
                            }
                            if let Some(top) = stack.pop() {
                                out.push(top);
                            }
                        }
                        stack.push(token);
                    } else {
                        out.push(MathToken::Unknown(symbol.to_string()));
                    }
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                MathToken::OParen | MathToken::CParen => {
                    return Err(ParseError::UnbalancedParentheses)
                }
                token => out.push(token),
            }
        }
        log::debug!("rpn: {:?}", out);
        Ok(RPNExpr(out))
    }
}

/// Infix expression string to postfix lexemes.
pub fn to_rpn(expr: &str) -> Result<Vec<String>, ParseError> {
    Ok(ShuntingParser::parse_str(expr)?.tokens())
}
