//! Lexer for the pattern language.
//!
//! Every character is a token of its own: a grouping marker, an operator,
//! or a literal. The literal class covers every other Unicode scalar value,
//! so lexing a `&str` cannot fail. Tokens carry spans only; text is sliced
//! from the source on demand.

use logos::Logos;
use regula_core::Operator;
use rowan::TextRange;
use std::ops::Range;

use super::invariants::ensure_token;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[token("(")]
    GroupOpen,

    #[token(")")]
    GroupClose,

    #[regex(r"[*+?.|]", |lex| lex.slice().chars().next().and_then(Operator::from_char))]
    Operator(Operator),

    /// Any single character outside the operator and grouping set.
    #[regex(r"[^*+?.|()]", |lex| lex.slice().chars().next())]
    Literal(char),
}

/// Zero-copy token: kind + span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes a pattern into span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(source.len());
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = ensure_token(result, &source[span.clone()]);
        tokens.push(Token::new(kind, range_to_text_range(span)));
    }

    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
