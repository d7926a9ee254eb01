//! Pattern front end: lexer and infix-to-postfix conversion.

pub mod convert;
pub mod lexer;
pub mod postfix;

mod invariants;


pub use convert::Converter;
pub use lexer::{Token, TokenKind, lex, token_text};
pub use postfix::{Postfix, PostfixItem, PostfixKind};
