//! Runtime for matching input against compiled regula automata.
//!
//! Simulation tracks the set of active states, so every automaton runs in
//! time linear in the input, cycles included.

pub mod engine;

pub use engine::{FuelLimits, NoopTracer, PrintTracer, RuntimeError, Tracer, VM, Verbosity};

use regula_core::Nfa;

/// Whether `nfa` accepts the whole of `input`. Runs without a fuel limit.
pub fn matches(nfa: &Nfa, input: &str) -> bool {
    match VM::builder(nfa)
        .limits(FuelLimits::unlimited())
        .build()
        .execute(input)
    {
        Ok(accepted) => accepted,
        Err(RuntimeError::ExecFuelExhausted(_)) => {
            unreachable!("unlimited execution ran out of fuel")
        }
    }
}
