//! Postfix (reverse Polish) form of a pattern.
//!
//! Grouping is resolved during conversion, so there is no variant for it:
//! the builder never has to reject a stray parenthesis.

use regula_core::Operator;
use rowan::{TextRange, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixKind {
    Literal(char),
    Operator(Operator),
}

impl PostfixKind {
    pub fn symbol(&self) -> char {
        match *self {
            PostfixKind::Literal(c) => c,
            PostfixKind::Operator(op) => op.symbol(),
        }
    }
}

/// One postfix item plus the span of the token it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostfixItem {
    pub kind: PostfixKind,
    pub span: TextRange,
}

impl PostfixItem {
    pub fn new(kind: PostfixKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    items: Vec<PostfixItem>,
}

impl Postfix {
    pub fn new(items: Vec<PostfixItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PostfixItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &PostfixItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Builds a sequence without source text. Each item gets the span of its
/// own position, so errors still point somewhere sensible.
impl FromIterator<PostfixKind> for Postfix {
    fn from_iter<T: IntoIterator<Item = PostfixKind>>(iter: T) -> Self {
        let items = iter
            .into_iter()
            .enumerate()
            .map(|(i, kind)| {
                let start = TextSize::from(i as u32);
                PostfixItem::new(kind, TextRange::at(start, TextSize::from(1)))
            })
            .collect();
        Self { items }
    }
}

/// Compact form: `a.b|c` renders as `ab.c|`.
impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        for item in &self.items {
            f.write_char(item.kind.symbol())?;
        }
        Ok(())
    }
}
