//! Dump helpers for automaton inspection and testing.
//!
//! Two formats: a line-per-state text listing suited to snapshot tests, and
//! Graphviz DOT for visual inspection.

use std::fmt::Write;

use crate::{Colors, Nfa, State};

/// Printer for `Nfa` with configurable output options.
pub struct NfaPrinter<'a> {
    nfa: &'a Nfa,
    colors: Colors,
}

impl<'a> NfaPrinter<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            colors: Colors::OFF,
        }
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    /// Text listing:
    ///
    /// ```text
    /// start = S0
    /// accept = S1
    ///
    /// S0: 'a' → S1
    /// S1: accept
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// Graphviz DOT rendering. The start state is boxed, the accept state
    /// double-circled.
    pub fn dot(&self) -> String {
        let mut out = String::new();
        self.format_dot(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = &self.colors;

        writeln!(w, "start = {}", c.state_id(self.nfa.start()))?;
        writeln!(w, "accept = {}", c.state_id(self.nfa.accept()))?;
        writeln!(w)?;

        for (id, state) in self.nfa.iter() {
            write!(w, "{}: ", c.state_id(id))?;
            match *state {
                State::Char { symbol, next } => {
                    write!(w, "{}{:?}{} → {}", c.symbol, symbol, c.reset, c.state_id(next))?
                }
                State::Epsilon { next } => write!(w, "{}ε{} → {}", c.dim, c.reset, c.state_id(next))?,
                State::Split { first, second } => write!(
                    w,
                    "{}ε{} → {}, {}",
                    c.dim,
                    c.reset,
                    c.state_id(first),
                    c.state_id(second)
                )?,
                State::Halt => write!(w, "{}accept{}", c.symbol, c.reset)?,
            }
            writeln!(w)?;
        }

        Ok(())
    }

    fn format_dot(&self, w: &mut String) -> std::fmt::Result {
        writeln!(w, "digraph nfa {{")?;
        writeln!(w, "\trankdir=LR;")?;
        writeln!(w, "\tS{} [shape=box];", self.nfa.start())?;
        writeln!(w, "\tS{} [peripheries=2];", self.nfa.accept())?;

        for (id, state) in self.nfa.iter() {
            match *state {
                State::Char { symbol, next } => writeln!(
                    w,
                    "\tS{id} -> S{next} [label=\"{}\"];",
                    symbol.escape_default()
                )?,
                State::Epsilon { next } => writeln!(w, "\tS{id} -> S{next} [label=\"ε\"];")?,
                State::Split { first, second } => {
                    writeln!(w, "\tS{id} -> S{first} [label=\"ε\"];")?;
                    writeln!(w, "\tS{id} -> S{second} [label=\"ε\"];")?;
                }
                State::Halt => {}
            }
        }

        writeln!(w, "}}")
    }
}
