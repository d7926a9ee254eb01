//! Structural errors for automata that did not come out of the builder.

use crate::StateId;

/// Why an automaton failed verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NfaError {
    #[error("automaton has no states")]
    Empty,

    #[error("start state S{0} does not exist")]
    MissingStart(StateId),

    #[error("accept state S{0} does not exist")]
    MissingAccept(StateId),

    #[error("accept state S{0} has outgoing edges")]
    AcceptNotHalting(StateId),

    /// A halting state other than the accept state.
    #[error("state S{0} has no outgoing edges but is not the accept state")]
    StrayHalt(StateId),

    #[error("state S{state} has an edge to missing state S{target}")]
    DanglingEdge { state: StateId, target: StateId },
}
