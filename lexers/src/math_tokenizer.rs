#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;
use std::str::FromStr;

/// A lexeme after classification. Numbers carry their value and the literal
/// as written, anything that isn't a literal, one of the binary operators or
/// a paren is kept verbatim as `Unknown` so consumers can report it.
#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Unknown(String),
    Number(f64, String),
    BOp(char),
    OParen,
    CParen,
}

impl From<&str> for MathToken {
    fn from(lexeme: &str) -> MathToken {
        match lexeme {
            "(" => MathToken::OParen,
            ")" => MathToken::CParen,
            "+" | "-" | "*" | "/" | "^" => match lexeme.chars().next() {
                Some(op) => MathToken::BOp(op),
                None => MathToken::Unknown(lexeme.to_string()),
            },
            _ => match parse_number(lexeme) {
                Some(num) => MathToken::Number(num, lexeme.to_string()),
                None => MathToken::Unknown(lexeme.to_string()),
            },
        }
    }
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MathToken::Unknown(ref lexeme) => write!(f, "{}", lexeme),
            MathToken::Number(_, ref literal) => write!(f, "{}", literal),
            MathToken::BOp(op) => write!(f, "{}", op),
            MathToken::OParen => write!(f, "("),
            MathToken::CParen => write!(f, ")"),
        }
    }
}

/// Splits math expressions into number literals, operators and parens.
/// Whitespace and characters that can't start a lexeme are dropped.
pub struct MathTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer { src: Scanner::new(source) }
    }

    /// Classified tokens instead of raw lexemes.
    pub fn tokens(self) -> impl Iterator<Item = MathToken> {
        self.map(|lexeme| MathToken::from(lexeme.as_str()))
    }

    fn get_token(&mut self) -> Option<String> {
        loop {
            self.src.ignore_ws();
            if let Some(op) = self.src.scan_math_op() {
                return Some(op);
            } else if let Some(num) = self.src.scan_number() {
                return Some(num);
            } else if let Some(c) = self.src.next() {
                log::trace!("dropping unrecognized char {:?}", c);
                self.src.ignore();
            } else {
                return None;
            }
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for MathTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

pub fn tokenize(expr: &str) -> Vec<String> {
    MathTokenizer::new(expr.chars()).collect()
}

/// Parse a whole token as a finite decimal literal, eg: "12", "0.5", "3."
pub fn parse_number(token: &str) -> Option<f64> {
    let mut src = Scanner::new(token.chars());
    let num = src.scan_number()?;
    if src.next().is_some() {
        return None; // trailing garbage
    }
    f64::from_str(&num).ok().filter(|n| n.is_finite())
}

pub fn is_number(token: &str) -> bool {
    parse_number(token).is_some()
}

///////////////////////////////////////////////////////////////////////////////
