use crate::operators::{Assoc, Operator};
use crate::parser::RPNExpr;
use lexers::MathToken;
use std::fmt;

impl RPNExpr {
    /// Rebuild an infix expression, only adding the parens that
    /// precedence and associativity require.
    pub fn to_infix(&self) -> Option<String> {
        // subexpressions with the precedence of their outermost operator
        let mut ops: Vec<(String, usize)> = Vec::new();
        for token in self.0.iter() {
            match *token {
                MathToken::Number(_, ref literal) => ops.push((literal.clone(), usize::MAX)),
                MathToken::BOp(symbol) => {
                    let op = Operator::lookup(symbol)?;
                    let prec = op.precedence;
                    let (rhs, rprec) = ops.pop()?;
                    let (mut lhs, lprec) = ops.pop()?;
                    if prec > lprec || (prec == lprec && op.assoc != Assoc::Left) {
                        lhs = format!("({})", lhs);
                    }
                    lhs.push(' ');
                    lhs.push(op.symbol);
                    lhs.push(' ');
                    // NOTE: '2+(3+4)' keeps its parens, same as the user wrote it
                    if prec > rprec || (prec == rprec && op.assoc != Assoc::Right) {
                        lhs.push('(');
                        lhs.push_str(&rhs);
                        lhs.push(')');
                    } else {
                        lhs.push_str(&rhs);
                    }
                    ops.push((lhs, prec));
                }
                _ => return None,
            }
        }
        match (ops.pop(), ops.is_empty()) {
            (Some((infix, _)), true) => Some(infix),
            _ => None,
        }
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}

///////////////////////////////////////////////////////////////////////////////
