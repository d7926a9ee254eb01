//! Tracing infrastructure for debugging simulation.
//!
//! `NoopTracer` methods are `#[inline(always)]` and empty, so the default
//! execution path carries no tracing cost. `PrintTracer` collects readable
//! lines that can be inspected or printed after the run.

use regula_core::{Colors, Nfa, StateId, StateSet};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Input symbols, active sets, dead ends, verdict.
    #[default]
    Default,
    /// Also every consuming transition taken.
    Verbose,
}

/// Tracer trait for VM instrumentation.
///
/// Called in this order: `trace_start`, `trace_active` for the initial set,
/// then per input symbol `trace_symbol`, any number of `trace_consume`,
/// `trace_active`, and `trace_dead_end` if the set just became empty.
/// `trace_finish` closes the run.
pub trait Tracer {
    fn trace_start(&mut self, start: StateId);

    /// Called with the active set after each closure.
    fn trace_active(&mut self, active: &StateSet);

    /// Called before consuming `symbol` at byte offset `pos`.
    fn trace_symbol(&mut self, pos: usize, symbol: char);

    fn trace_consume(&mut self, from: StateId, to: StateId);

    /// Called once when no state survives the symbol at `pos`.
    fn trace_dead_end(&mut self, pos: usize);

    fn trace_finish(&mut self, accepted: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _start: StateId) {}

    #[inline(always)]
    fn trace_active(&mut self, _active: &StateSet) {}

    #[inline(always)]
    fn trace_symbol(&mut self, _pos: usize, _symbol: char) {}

    #[inline(always)]
    fn trace_consume(&mut self, _from: StateId, _to: StateId) {}

    #[inline(always)]
    fn trace_dead_end(&mut self, _pos: usize) {}

    #[inline(always)]
    fn trace_finish(&mut self, _accepted: bool) {}
}

/// Tracer that collects an execution trace for debugging.
pub struct PrintTracer {
    /// Accept state, marked in active sets.
    accept: StateId,
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(nfa: &Nfa, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            accept: nfa.accept(),
            verbosity,
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Tracer for PrintTracer {
    fn trace_start(&mut self, start: StateId) {
        let start = self.colors.state_id(start);
        self.lines.push(format!("start {start}"));
    }

    fn trace_active(&mut self, active: &StateSet) {
        let c = self.colors;
        let mut line = format!("  {}{}{}", c.dim, active, c.reset);
        if active.contains(self.accept) {
            line.push_str(" accepting");
        }
        self.lines.push(line);
    }

    fn trace_symbol(&mut self, pos: usize, symbol: char) {
        let c = self.colors;
        self.lines
            .push(format!("@{} {}{:?}{}", pos, c.symbol, symbol, c.reset));
    }

    fn trace_consume(&mut self, from: StateId, to: StateId) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let c = self.colors;
        self.lines
            .push(format!("    {} → {}", c.state_id(from), c.state_id(to)));
    }

    fn trace_dead_end(&mut self, _pos: usize) {
        self.lines.push("  dead end".to_string());
    }

    fn trace_finish(&mut self, accepted: bool) {
        let c = self.colors;
        let line = if accepted {
            format!("{}accept{}", c.symbol, c.reset)
        } else {
            "reject".to_string()
        };
        self.lines.push(line);
    }
}
