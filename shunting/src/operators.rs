#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

/// How a binary operator binds and what it computes.
#[derive(Clone, Copy, Debug)]
pub struct Operator {
    pub symbol: char,
    pub precedence: usize,
    pub assoc: Assoc,
    pub apply: fn(f64, f64) -> f64,
}

static OPERATORS: [Operator; 5] = [
    Operator { symbol: '+', precedence: 1, assoc: Assoc::Left, apply: |a, b| a + b },
    Operator { symbol: '-', precedence: 1, assoc: Assoc::Left, apply: |a, b| a - b },
    Operator { symbol: '*', precedence: 2, assoc: Assoc::Left, apply: |a, b| a * b },
    Operator { symbol: '/', precedence: 2, assoc: Assoc::Left, apply: |a, b| a / b },
    Operator { symbol: '^', precedence: 3, assoc: Assoc::Right, apply: f64::powf },
];

impl Operator {
    pub fn lookup(symbol: char) -> Option<&'static Operator> {
        OPERATORS.iter().find(|op| op.symbol == symbol)
    }

    pub fn all() -> &'static [Operator] {
        &OPERATORS
    }

    /// Whether `self`, sitting on top of the operator stack, has to be
    /// moved to the output before `incoming` is pushed.
    pub fn should_pop(&self, incoming: &Operator) -> bool {
        self.precedence > incoming.precedence
            || (self.precedence == incoming.precedence && incoming.assoc == Assoc::Left)
    }
}

///////////////////////////////////////////////////////////////////////////////
