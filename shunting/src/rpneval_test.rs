use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::{evaluate_rpn, EvalErr};
use lexers::MathToken;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[test]
fn test_eval1() {
    let expr = ShuntingParser::parse_str("3+4*2/(1-5)^2^3").unwrap();
    fuzzy_eq!(expr.eval().unwrap(), 3.0001220703125);
}

#[test]
fn test_eval2() {
    let expr = ShuntingParser::parse_str("(1 + 6^2)^0.5").unwrap();
    fuzzy_eq!(expr.eval().unwrap(), 37f64.sqrt());
}

#[test]
fn test_eval3() {
    let expr = ShuntingParser::parse_str("(3+4)*3").unwrap();
    fuzzy_eq!(expr.eval().unwrap(), 21.0);
}

#[test]
fn simple_rpn() {
    assert_eq!(evaluate_rpn(&["2", "3", "+"]), Ok(5.0));
    assert_eq!(evaluate_rpn(&["5", "3", "-"]), Ok(2.0));
    assert_eq!(evaluate_rpn(&["4", "2", "*"]), Ok(8.0));
    assert_eq!(evaluate_rpn(&["6", "2", "/"]), Ok(3.0));
    assert_eq!(evaluate_rpn(&["2", "3", "^"]), Ok(8.0));
    assert_eq!(evaluate_rpn(&["7.5"]), Ok(7.5));
}

#[test]
fn complex_rpn() {
    assert_eq!(evaluate_rpn(&["2", "3", "4", "*", "+"]), Ok(14.0));
    let rpn = ["3", "4", "2", "*", "1", "5", "-", "2", "^", "/", "+"];
    assert_eq!(evaluate_rpn(&rpn), Ok(3.5));
    let owned: Vec<String> = rpn.iter().map(|t| t.to_string()).collect();
    assert_eq!(evaluate_rpn(&owned), Ok(3.5));
}

#[test]
fn fractional_powers() {
    fuzzy_eq!(evaluate_rpn(&["2", "0.5", "^"]).unwrap(), 2f64.sqrt());
    fuzzy_eq!(evaluate_rpn(&["27", "1", "3", "/", "^"]).unwrap(), 3.0);
    // real power of a negative base is left to powf
    assert!(evaluate_rpn(&["0", "8", "-", "0.5", "^"]).unwrap().is_nan());
}

#[test]
fn division_by_zero() {
    assert_eq!(evaluate_rpn(&["5", "0", "/"]), Err(EvalErr::DivisionByZero));
    assert_eq!(evaluate_rpn(&["5", "2", "2", "-", "/"]), Err(EvalErr::DivisionByZero));
    assert_eq!(evaluate_rpn(&["0", "5", "/"]), Ok(0.0));
    // only '/' checks its divisor
    assert_eq!(evaluate_rpn(&["0", "0", "*"]), Ok(0.0));
}

#[test]
fn insufficient_operands() {
    assert_eq!(evaluate_rpn(&["+"]), Err(EvalErr::InsufficientOperands));
    assert_eq!(evaluate_rpn(&["1", "-"]), Err(EvalErr::InsufficientOperands));
    assert_eq!(evaluate_rpn(&["1", "2", "+", "*"]), Err(EvalErr::InsufficientOperands));
}

#[test]
fn unknown_tokens() {
    assert_eq!(evaluate_rpn(&["1", "x", "+"]), Err(EvalErr::UnknownToken(format!("x"))));
    assert_eq!(evaluate_rpn(&["1", "2", "%"]), Err(EvalErr::UnknownToken(format!("%"))));
    assert_eq!(evaluate_rpn(&["1", "("]), Err(EvalErr::UnknownToken(format!("("))));
    assert_eq!(evaluate_rpn(&["-3"]), Err(EvalErr::UnknownToken(format!("-3"))));
    let rpn = RPNExpr(vec![MathToken::from("1"), MathToken::CParen]);
    assert_eq!(rpn.eval(), Err(EvalErr::UnknownToken(format!(")"))));
}

#[test]
fn malformed() {
    let empty: [&str; 0] = [];
    assert_eq!(evaluate_rpn(&empty), Err(EvalErr::MalformedExpression));
    assert_eq!(evaluate_rpn(&["1", "2"]), Err(EvalErr::MalformedExpression));
    assert_eq!(evaluate_rpn(&["1", "2", "3", "+"]), Err(EvalErr::MalformedExpression));
}

#[test]
fn error_messages() {
    assert_eq!(EvalErr::DivisionByZero.to_string(), "division by zero");
    assert_eq!(EvalErr::UnknownToken(format!("$")).to_string(), "unknown token: $");
    assert_eq!(EvalErr::MalformedExpression.to_string(), "malformed expression");
}
