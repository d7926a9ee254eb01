//! Fragment combinators and the postfix evaluation loop.
//!
//! Every sub-expression compiles to a [`Fragment`] whose exit is a `Halt`
//! placeholder. Combinators rewire that placeholder in place, so a finished
//! automaton has exactly one halting state: the exit of the last fragment.

use regula_core::{Nfa, Operator, State, StateId};

use super::BuildError;
use crate::parser::{Postfix, PostfixKind};

/// A sub-automaton with a single entry and a single open exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub entry: StateId,
    pub exit: StateId,
}

impl Fragment {
    pub fn new(entry: StateId, exit: StateId) -> Self {
        Self { entry, exit }
    }
}

/// State arena under construction.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    pub(super) states: Vec<State>,
}

/// Evaluate a postfix sequence into an automaton.
pub fn build(postfix: &Postfix) -> Result<Nfa, BuildError> {
    let mut builder = NfaBuilder::new();
    let mut stack: Vec<Fragment> = Vec::new();

    for (position, item) in postfix.iter().enumerate() {
        let op = match item.kind {
            PostfixKind::Literal(c) => {
                let fragment = builder.literal(c);
                stack.push(fragment);
                continue;
            }
            PostfixKind::Operator(op) => op,
        };

        let underflow = || BuildError::StackUnderflow {
            operator: op,
            position,
            span: item.span,
        };

        let fragment = match op {
            Operator::Concat | Operator::Alternation => {
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    return Err(underflow());
                };
                if op == Operator::Concat {
                    builder.concat(lhs, rhs)
                } else {
                    builder.alternation(lhs, rhs)
                }
            }
            Operator::Star | Operator::Plus | Operator::Question => {
                let Some(inner) = stack.pop() else {
                    return Err(underflow());
                };
                match op {
                    Operator::Star => builder.zero_or_more(inner),
                    Operator::Plus => builder.one_or_more(inner),
                    _ => builder.optional(inner),
                }
            }
        };
        stack.push(fragment);
    }

    match stack.as_slice() {
        [] => Err(BuildError::EmptyPattern),
        [fragment] => builder.finish(*fragment),
        rest => Err(BuildError::DanglingFragments { count: rest.len() }),
    }
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_state(&mut self, state: State) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(state);
        id
    }

    /// Fresh open exit, rewired later by a combinator.
    fn add_halt(&mut self) -> StateId {
        self.add_state(State::Halt)
    }

    fn patch(&mut self, id: StateId, state: State) {
        self.ensure_patchable(id);
        self.states[id as usize] = state;
    }

    /// Seal the arena with `fragment` as the whole automaton.
    pub fn finish(self, fragment: Fragment) -> Result<Nfa, BuildError> {
        Ok(Nfa::from_parts(self.states, fragment.entry, fragment.exit)?)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fragment Combinators
    // ─────────────────────────────────────────────────────────────────────

    /// `c`: entry consumes `c` and lands on the exit.
    pub fn literal(&mut self, c: char) -> Fragment {
        let entry = self.add_halt();
        let exit = self.add_halt();
        self.patch(entry, State::Char { symbol: c, next: exit });
        Fragment::new(entry, exit)
    }

    /// `lhs.rhs`
    pub fn concat(&mut self, lhs: Fragment, rhs: Fragment) -> Fragment {
        self.patch(lhs.exit, State::Epsilon { next: rhs.entry });
        Fragment::new(lhs.entry, rhs.exit)
    }

    /// `lhs|rhs`
    ///
    /// ```text
    ///        ┌─→ lhs ─┐
    /// entry ─┤        ├─→ exit
    ///        └─→ rhs ─┘
    /// ```
    pub fn alternation(&mut self, lhs: Fragment, rhs: Fragment) -> Fragment {
        let entry = self.add_state(State::Split {
            first: lhs.entry,
            second: rhs.entry,
        });
        let exit = self.add_halt();
        self.patch(lhs.exit, State::Epsilon { next: exit });
        self.patch(rhs.exit, State::Epsilon { next: exit });
        Fragment::new(entry, exit)
    }

    /// `inner*`
    ///
    /// ```text
    ///          ┌──────────────┐
    ///          ↓              │
    /// entry ─→ inner ─→ inner.exit
    ///   │                     │
    ///   └─────────→ exit ←────┘
    /// ```
    pub fn zero_or_more(&mut self, inner: Fragment) -> Fragment {
        let entry = self.add_halt();
        let exit = self.add_halt();
        let branch = State::Split {
            first: inner.entry,
            second: exit,
        };
        self.patch(entry, branch);
        self.patch(inner.exit, branch);
        Fragment::new(entry, exit)
    }

    /// `inner+`: like `*`, but the first pass through `inner` is mandatory.
    pub fn one_or_more(&mut self, inner: Fragment) -> Fragment {
        let entry = self.add_halt();
        let exit = self.add_halt();
        self.patch(entry, State::Epsilon { next: inner.entry });
        self.patch(
            inner.exit,
            State::Split {
                first: entry,
                second: exit,
            },
        );
        Fragment::new(entry, exit)
    }

    /// `inner?`
    pub fn optional(&mut self, inner: Fragment) -> Fragment {
        let entry = self.add_halt();
        let exit = self.add_halt();
        self.patch(
            entry,
            State::Split {
                first: inner.entry,
                second: exit,
            },
        );
        self.patch(inner.exit, State::Epsilon { next: exit });
        Fragment::new(entry, exit)
    }
}
