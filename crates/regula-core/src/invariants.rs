//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Nfa, State, StateId};

impl Nfa {
    pub(crate) fn ensure_state(&self, id: StateId) -> &State {
        self.states.get(id as usize).unwrap_or_else(|| {
            panic!(
                "Nfa: state S{id} not found (automaton has {} states)",
                self.states.len()
            )
        })
    }
}
