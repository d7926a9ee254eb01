//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::lexer::TokenKind;

/// Every character lexes as a grouping marker, an operator, or a literal.
#[inline]
pub(super) fn ensure_token(result: Result<TokenKind, ()>, text: &str) -> TokenKind {
    result.unwrap_or_else(|()| panic!("lexer: no token kind matches {text:?}"))
}
