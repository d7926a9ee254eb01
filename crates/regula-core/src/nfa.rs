//! NFA arena and epsilon-closure resolution.
//!
//! States are stored in a flat `Vec` and referenced by `StateId`, so the
//! back-edges introduced by `*` and `+` never need shared ownership. Every
//! traversal that follows unlabeled edges carries a visited guard.

use crate::{NfaError, NfaPrinter, StateSet};

/// Index into the automaton's state arena.
pub type StateId = u32;

/// A node in the automaton graph.
///
/// Exactly one of: a consuming transition, or a control-flow state with
/// zero, one, or two unlabeled edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum State {
    /// Consumes one input symbol equal to `symbol`, then moves to `next`.
    Char { symbol: char, next: StateId },
    /// One unlabeled edge.
    Epsilon { next: StateId },
    /// Two unlabeled edges.
    Split { first: StateId, second: StateId },
    /// No outgoing edges.
    Halt,
}

impl State {
    /// Returns true for every state that does not consume input.
    pub fn is_epsilon(&self) -> bool {
        !matches!(self, State::Char { .. })
    }

    /// Target reached by consuming `c`, if this state accepts it.
    #[inline]
    pub fn step(&self, c: char) -> Option<StateId> {
        match *self {
            State::Char { symbol, next } if symbol == c => Some(next),
            _ => None,
        }
    }

    /// Targets of unlabeled edges, in edge order.
    #[inline]
    pub fn epsilon_successors(&self) -> impl Iterator<Item = StateId> {
        let (first, second) = match *self {
            State::Epsilon { next } => (Some(next), None),
            State::Split { first, second } => (Some(first), Some(second)),
            State::Char { .. } | State::Halt => (None, None),
        };
        first.into_iter().chain(second)
    }

    /// Targets of all edges, labeled or not.
    pub fn successors(&self) -> impl Iterator<Item = StateId> {
        let labeled = match *self {
            State::Char { next, .. } => Some(next),
            _ => None,
        };
        labeled.into_iter().chain(self.epsilon_successors())
    }
}

/// A compiled automaton: state arena plus designated start and accept states.
///
/// Immutable once constructed. Construction goes through [`Nfa::from_parts`],
/// which verifies the structural invariants, so a value of this type always
/// has a halting accept state and no dangling edges.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawNfa")]
pub struct Nfa {
    pub(crate) states: Vec<State>,
    pub(crate) start: StateId,
    pub(crate) accept: StateId,
}

/// Unverified wire shape of [`Nfa`].
#[derive(serde::Deserialize)]
struct RawNfa {
    states: Vec<State>,
    start: StateId,
    accept: StateId,
}

impl TryFrom<RawNfa> for Nfa {
    type Error = NfaError;

    fn try_from(raw: RawNfa) -> Result<Self, Self::Error> {
        Nfa::from_parts(raw.states, raw.start, raw.accept)
    }
}

impl Nfa {
    /// Assemble an automaton from an arena, rejecting malformed graphs.
    pub fn from_parts(
        states: Vec<State>,
        start: StateId,
        accept: StateId,
    ) -> Result<Self, NfaError> {
        let nfa = Self {
            states,
            start,
            accept,
        };
        nfa.verify()?;
        Ok(nfa)
    }

    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// Get a state by ID.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this automaton.
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        self.ensure_state(id)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false for a verified automaton.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all states with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (i as StateId, s))
    }

    /// Every state reachable from `state` through unlabeled edges, itself included.
    pub fn epsilon_closure(&self, state: StateId) -> StateSet {
        let mut closure = StateSet::new();
        self.close_into(state, &mut closure);
        closure
    }

    /// Union the epsilon-closure of `state` into `set`.
    ///
    /// `set` doubles as the visited guard: a state already present is never
    /// expanded again. That is sound because every state this method inserts
    /// is fully expanded before it returns.
    pub fn close_into(&self, state: StateId, set: &mut StateSet) {
        let mut stack = vec![state];
        while let Some(s) = stack.pop() {
            if !set.insert(s) {
                continue;
            }
            stack.extend(self.state(s).epsilon_successors());
        }
    }

    /// Whether the empty string is accepted.
    pub fn accepts_empty(&self) -> bool {
        self.epsilon_closure(self.start).contains(self.accept)
    }

    /// Check the structural invariants.
    ///
    /// - at least one state, start and accept in range
    /// - the accept state halts, and no other state does
    /// - every edge targets a state in the arena
    pub fn verify(&self) -> Result<(), NfaError> {
        if self.states.is_empty() {
            return Err(NfaError::Empty);
        }

        let len = self.states.len();
        let in_range = |id: StateId| (id as usize) < len;

        if !in_range(self.start) {
            return Err(NfaError::MissingStart(self.start));
        }
        if !in_range(self.accept) {
            return Err(NfaError::MissingAccept(self.accept));
        }
        if self.states[self.accept as usize] != State::Halt {
            return Err(NfaError::AcceptNotHalting(self.accept));
        }

        for (id, state) in self.iter() {
            if let Some(target) = state.successors().find(|&t| !in_range(t)) {
                return Err(NfaError::DanglingEdge { state: id, target });
            }
            if *state == State::Halt && id != self.accept {
                return Err(NfaError::StrayHalt(id));
            }
        }

        Ok(())
    }

    /// One line per state, for debugging and snapshot tests.
    pub fn dump(&self) -> String {
        NfaPrinter::new(self).dump()
    }
}
