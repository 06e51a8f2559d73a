//! Infix arithmetic via the shunting-yard algorithm.
//!
//! ```
//! assert_eq!(shunting::evaluate("3+4*2/(1-5)^2"), Ok(3.5));
//! assert_eq!(shunting::to_rpn("2^3^2").unwrap(), ["2", "3", "2", "^", "^"]);
//! ```

pub use lexers::{is_number, tokenize};

pub use calc::{evaluate, strip_whitespace, CalcError};
pub use operators::{Assoc, Operator};
pub use parser::{to_rpn, ParseError, RPNExpr, ShuntingParser};
pub use rpneval::{evaluate_rpn, EvalErr};

mod calc;
mod operators;
mod parser;

mod rpnprint;
mod rpneval;
#[cfg(test)]
mod rpneval_test;
