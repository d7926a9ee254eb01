//! Operator table for the pattern language.
//!
//! Precedence is a rank: a lower rank binds tighter and is popped first by
//! the shunting-yard converter. Quantifiers bind tightest, then explicit
//! concatenation, then alternation.

/// A pattern operator.
///
/// `#[repr(u8)]` doubles as the index into [`OPERATORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Operator {
    /// `*` zero or more.
    Star = 0,
    /// `+` one or more.
    Plus,
    /// `?` zero or one.
    Question,
    /// `.` explicit concatenation.
    Concat,
    /// `|` alternation.
    Alternation,
}

/// Number of operands an operator pops from the fragment stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Postfix quantifier applied to the preceding sub-expression.
    Unary,
    /// Infix operator between two sub-expressions.
    Binary,
}

impl Arity {
    pub fn operands(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Static descriptor for one operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub operator: Operator,
    pub symbol: char,
    pub precedence: u8,
    pub arity: Arity,
}

/// The operator table, indexed by `Operator as usize`.
pub static OPERATORS: [OperatorInfo; 5] = [
    OperatorInfo {
        operator: Operator::Star,
        symbol: '*',
        precedence: 0,
        arity: Arity::Unary,
    },
    OperatorInfo {
        operator: Operator::Plus,
        symbol: '+',
        precedence: 0,
        arity: Arity::Unary,
    },
    OperatorInfo {
        operator: Operator::Question,
        symbol: '?',
        precedence: 0,
        arity: Arity::Unary,
    },
    OperatorInfo {
        operator: Operator::Concat,
        symbol: '.',
        precedence: 1,
        arity: Arity::Binary,
    },
    OperatorInfo {
        operator: Operator::Alternation,
        symbol: '|',
        precedence: 2,
        arity: Arity::Binary,
    },
];

impl Operator {
    /// Look up the operator spelled by `c`, if any.
    pub fn from_char(c: char) -> Option<Self> {
        OPERATORS
            .iter()
            .find(|info| info.symbol == c)
            .map(|info| info.operator)
    }

    #[inline]
    pub fn info(self) -> &'static OperatorInfo {
        &OPERATORS[self as usize]
    }

    #[inline]
    pub fn symbol(self) -> char {
        self.info().symbol
    }

    #[inline]
    pub fn precedence(self) -> u8 {
        self.info().precedence
    }

    #[inline]
    pub fn arity(self) -> Arity {
        self.info().arity
    }

    /// Whether `self`, sitting on the operator stack, must be popped before
    /// `incoming` is pushed.
    ///
    /// Equal ranks pop, which makes the binary operators left-associative.
    #[inline]
    pub fn pops_before(self, incoming: Operator) -> bool {
        self.precedence() <= incoming.precedence()
    }

    pub fn is_quantifier(self) -> bool {
        self.arity() == Arity::Unary
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
