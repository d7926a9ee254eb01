//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use regula_core::{State, StateId};

use super::builder::NfaBuilder;

impl NfaBuilder {
    /// Only a fragment's halting exit may be rewired.
    #[inline]
    pub(super) fn ensure_patchable(&self, id: StateId) {
        let state = self.states.get(id as usize);
        assert!(
            state == Some(&State::Halt),
            "NfaBuilder: S{id} is not an open exit (found {state:?})"
        );
    }
}
