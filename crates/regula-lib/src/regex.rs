//! Compiled pattern bundled with its intermediate forms.

use std::str::FromStr;

use regula_compiler::build::build;
use regula_compiler::{Compiler, Postfix, Result};
use regula_core::Nfa;

/// A compiled pattern. Immutable and cheap to match repeatedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    pattern: String,
    postfix: Postfix,
    nfa: Nfa,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_compiler(Compiler::new(pattern))
    }

    /// Compile with a configured [`Compiler`], e.g. a custom fuel limit.
    pub fn with_compiler(compiler: Compiler<'_>) -> Result<Self> {
        let postfix = compiler.to_postfix()?;
        let nfa = build(&postfix)?;
        Ok(Self {
            pattern: compiler.source().to_string(),
            postfix,
            nfa,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// Whether the pattern matches the whole of `input`.
    pub fn is_match(&self, input: &str) -> bool {
        regula_vm::matches(&self.nfa, input)
    }
}

impl FromStr for Regex {
    type Err = regula_compiler::Error;

    fn from_str(s: &str) -> Result<Self> {
        Regex::new(s)
    }
}

impl std::fmt::Display for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}
