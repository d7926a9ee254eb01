//! Virtual machine simulating an NFA over its set of active states.

use regula_core::{Nfa, StateSet};

use super::error::RuntimeError;
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum active-state visits (default: 1,000,000). `None` is unlimited.
    pub(crate) exec_fuel: Option<u32>,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: Some(1_000_000),
        }
    }
}

impl FuelLimits {
    /// Create new fuel limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unlimited() -> Self {
        Self { exec_fuel: None }
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = Some(fuel);
        self
    }

    pub fn get_exec_fuel(&self) -> Option<u32> {
        self.exec_fuel
    }
}

/// Simulation state for one input.
pub struct VM<'n> {
    pub(crate) nfa: &'n Nfa,
    /// States reachable after the input consumed so far.
    pub(crate) current: StateSet,
    /// Scratch set for the next step, cleared after every swap.
    pub(crate) next: StateSet,
    pub(crate) exec_fuel: Option<u32>,
    pub(crate) limits: FuelLimits,
}

/// Builder for VM instances.
pub struct VMBuilder<'n> {
    nfa: &'n Nfa,
    limits: FuelLimits,
}

impl<'n> VMBuilder<'n> {
    pub fn new(nfa: &'n Nfa) -> Self {
        Self {
            nfa,
            limits: FuelLimits::default(),
        }
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    pub fn build(self) -> VM<'n> {
        let capacity = self.nfa.len();
        VM {
            nfa: self.nfa,
            current: StateSet::with_capacity(capacity),
            next: StateSet::with_capacity(capacity),
            exec_fuel: self.limits.get_exec_fuel(),
            limits: self.limits,
        }
    }
}

impl<'n> VM<'n> {
    pub fn builder(nfa: &'n Nfa) -> VMBuilder<'n> {
        VMBuilder::new(nfa)
    }

    /// Run the automaton over `input`, returning whether it ends accepting.
    ///
    /// Uses `NoopTracer`, which compiles away entirely.
    pub fn execute(self, input: &str) -> Result<bool, RuntimeError> {
        self.execute_with(input, &mut NoopTracer)
    }

    /// Run with a tracer for debugging.
    ///
    /// One unit of fuel is spent per active state per input symbol. An empty
    /// active set keeps consuming input without cost and ends rejecting.
    pub fn execute_with<T: Tracer>(
        mut self,
        input: &str,
        tracer: &mut T,
    ) -> Result<bool, RuntimeError> {
        let nfa = self.nfa;

        tracer.trace_start(nfa.start());
        nfa.close_into(nfa.start(), &mut self.current);
        tracer.trace_active(&self.current);

        for (pos, symbol) in input.char_indices() {
            tracer.trace_symbol(pos, symbol);

            for state in self.current.iter() {
                consume_fuel(&mut self.exec_fuel, &self.limits)?;
                if let Some(target) = nfa.state(state).step(symbol) {
                    tracer.trace_consume(state, target);
                    nfa.close_into(target, &mut self.next);
                }
            }

            let died = !self.current.is_empty() && self.next.is_empty();
            std::mem::swap(&mut self.current, &mut self.next);
            self.next.clear();

            tracer.trace_active(&self.current);
            if died {
                tracer.trace_dead_end(pos);
            }
        }

        let accepted = self.current.contains(nfa.accept());
        tracer.trace_finish(accepted);
        Ok(accepted)
    }
}

#[inline]
fn consume_fuel(fuel: &mut Option<u32>, limits: &FuelLimits) -> Result<(), RuntimeError> {
    let Some(remaining) = fuel.as_mut() else {
        return Ok(());
    };
    if *remaining == 0 {
        return Err(RuntimeError::ExecFuelExhausted(
            limits.exec_fuel.unwrap_or_default(),
        ));
    }
    *remaining -= 1;
    Ok(())
}
