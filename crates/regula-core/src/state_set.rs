//! Insertion-ordered set of NFA states.
//!
//! Membership is O(1); iteration follows insertion order, which keeps
//! traces and dumps deterministic.

use indexmap::IndexSet;

use crate::StateId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSet {
    states: IndexSet<StateId>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: IndexSet::with_capacity(capacity),
        }
    }

    /// Insert a state. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, state: StateId) -> bool {
        self.states.insert(state)
    }

    #[inline]
    pub fn contains(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Remove all states, keeping the allocation.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<T: IntoIterator<Item = StateId>>(iter: T) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

impl Extend<StateId> for StateSet {
    fn extend<T: IntoIterator<Item = StateId>>(&mut self, iter: T) {
        self.states.extend(iter);
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = StateId;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, StateId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter().copied()
    }
}

/// Renders as `{S0 S3 S4}` in insertion order.
impl std::fmt::Display for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "S{state}")?;
        }
        f.write_str("}")
    }
}
