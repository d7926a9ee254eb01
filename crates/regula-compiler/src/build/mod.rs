//! Thompson construction: postfix sequence to NFA.

mod builder;
mod error;
mod invariants;


pub use builder::{Fragment, NfaBuilder, build};
pub use error::BuildError;
