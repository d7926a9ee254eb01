//! Regula: regular expressions compiled by Thompson construction.
//!
//! Patterns use explicit concatenation: `a.b` matches `"ab"`, while `ab` is
//! two expressions with nothing joining them and fails to compile.
//!
//! # Example
//!
//! ```
//! use regula_lib::Regex;
//!
//! let re = Regex::new("a.(b|d).c*").expect("valid pattern");
//! assert_eq!(re.postfix().to_string(), "abd|.c*.");
//! assert!(re.is_match("adcc"));
//! assert!(!re.is_match("ac"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod regex;

#[cfg(test)]
mod differential_tests;

pub use regex::Regex;
pub use regula_compiler::{
    BuildError, Compiler, DiagnosticKind, Diagnostics, DiagnosticsPrinter, Error, Postfix, Result,
    compile, to_postfix,
};
pub use regula_core::{Colors, Nfa, NfaError, NfaPrinter, Operator, State, StateId, StateSet};
pub use regula_vm::{FuelLimits, NoopTracer, PrintTracer, RuntimeError, Tracer, VM, Verbosity};

/// Compile `pattern` and match it against the whole of `input`.
///
/// Nothing is cached; use [`Regex`] to match one pattern many times.
pub fn matches(pattern: &str, input: &str) -> Result<bool> {
    let nfa = compile(pattern)?;
    Ok(regula_vm::matches(&nfa, input))
}
