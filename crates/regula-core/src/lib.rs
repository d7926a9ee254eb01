#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for regula.
//!
//! Three pieces shared by the compiler and the VM:
//! - **Operator table**: precedence and arity of every pattern operator
//! - **NFA arena**: states addressed by `StateId`, immutable once built
//! - **State sets**: insertion-ordered sets used for epsilon-closures

mod colors;
mod dump;
mod error;
mod invariants;
mod nfa;
mod operator;
mod state_set;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod state_set_tests;

pub use colors::Colors;
pub use dump::NfaPrinter;
pub use error::NfaError;
pub use nfa::{Nfa, State, StateId};
pub use operator::{Arity, OPERATORS, Operator, OperatorInfo};
pub use state_set::StateSet;
