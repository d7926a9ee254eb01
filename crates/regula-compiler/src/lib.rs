//! Regula compiler: lexer, infix-to-postfix converter, and Thompson builder.
//!
//! - `parser` - tokens and shunting-yard conversion to postfix
//! - `build` - fragment combinators producing an [`Nfa`]
//! - `diagnostics` - grouping errors with source spans

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod build;
pub mod diagnostics;
pub mod parser;

mod compiler;

#[cfg(test)]
mod compiler_tests;

pub use build::BuildError;
pub use compiler::Compiler;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use parser::Postfix;

use regula_core::Nfa;

/// Errors that can occur while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted. Only raised under `Compiler::with_exec_fuel`.
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Unbalanced grouping or unreadable input.
    #[error("pattern parsing failed with {} errors", .0.error_count())]
    ParseError(Diagnostics),

    #[error(transparent)]
    BuildError(#[from] BuildError),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile a pattern without a fuel limit.
pub fn compile(pattern: &str) -> Result<Nfa> {
    Compiler::new(pattern).compile()
}

/// Convert a pattern to postfix form without building the automaton.
pub fn to_postfix(pattern: &str) -> Result<Postfix> {
    Compiler::new(pattern).to_postfix()
}
