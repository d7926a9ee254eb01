//! Compilation pipeline: lex, convert to postfix, build the automaton.

use regula_core::Nfa;

use crate::Result;
use crate::build::build;
use crate::parser::{Converter, Postfix};

/// Pattern compiler with configurable limits.
///
/// Unlimited by default. Conversion is linear in the pattern, so a limit is
/// only useful to cap work on untrusted input.
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'s> {
    source: &'s str,
    exec_fuel: Option<u32>,
}

impl<'s> Compiler<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            exec_fuel: None,
        }
    }

    /// Cap conversion at `limit` tokens. `None` removes the limit.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn to_postfix(&self) -> Result<Postfix> {
        Converter::new(self.source)
            .with_exec_fuel(self.exec_fuel)
            .convert()
    }

    pub fn compile(&self) -> Result<Nfa> {
        let postfix = self.to_postfix()?;
        Ok(build(&postfix)?)
    }
}
