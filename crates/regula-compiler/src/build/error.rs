use regula_core::{NfaError, Operator};
use rowan::TextRange;

/// Why a postfix sequence did not describe exactly one expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("`{operator}` at position {position} needs {} operand(s)", .operator.arity().operands())]
    StackUnderflow {
        operator: Operator,
        /// Index of the operator in the postfix sequence.
        position: usize,
        span: TextRange,
    },

    #[error("pattern is empty")]
    EmptyPattern,

    /// More than one expression left over, e.g. `ab` instead of `a.b`.
    #[error("{count} expressions left over: adjacent literals need an explicit `.`")]
    DanglingFragments { count: usize },

    #[error("invalid automaton: {0}")]
    InvalidAutomaton(#[from] NfaError),
}

impl BuildError {
    /// Source span of the offending operator, when there is one.
    pub fn span(&self) -> Option<TextRange> {
        match self {
            BuildError::StackUnderflow { span, .. } => Some(*span),
            _ => None,
        }
    }
}
