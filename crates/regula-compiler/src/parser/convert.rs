//! Shunting-yard conversion from infix tokens to postfix.
//!
//! Operators wait on a stack until an operator of equal or looser binding
//! arrives, which makes the binary ones left-associative. An open `(` on the
//! stack stops that popping.
//!
//! Grouping errors do not stop conversion: every unmatched `)` and every
//! unclosed `(` is reported, then the pattern is rejected as a whole.

use regula_core::Operator;
use rowan::TextRange;

use super::lexer::{TokenKind, lex};
use super::postfix::{Postfix, PostfixItem, PostfixKind};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(Operator, TextRange),
    Open(TextRange),
}

pub struct Converter<'s> {
    source: &'s str,
    exec_fuel: Option<u32>,
    output: Vec<PostfixItem>,
    stack: Vec<StackEntry>,
    diagnostics: Diagnostics,
}

impl<'s> Converter<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            exec_fuel: None,
            output: Vec::with_capacity(source.len()),
            stack: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// One unit of fuel is spent per token. `None` means unlimited.
    pub fn with_exec_fuel(mut self, fuel: Option<u32>) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn convert(mut self) -> Result<Postfix> {
        for token in lex(self.source) {
            self.consume_fuel()?;

            match token.kind {
                TokenKind::Literal(c) => self.emit(PostfixKind::Literal(c), token.span),
                TokenKind::GroupOpen => self.stack.push(StackEntry::Open(token.span)),
                TokenKind::GroupClose => self.close_group(token.span),
                TokenKind::Operator(op) => self.push_operator(op, token.span),
            }
        }

        self.drain();

        if !self.diagnostics.is_empty() {
            return Err(Error::ParseError(self.diagnostics));
        }

        Ok(Postfix::new(self.output))
    }

    fn consume_fuel(&mut self) -> Result<()> {
        if let Some(fuel) = self.exec_fuel.as_mut() {
            if *fuel == 0 {
                return Err(Error::ExecFuelExhausted);
            }
            *fuel -= 1;
        }
        Ok(())
    }

    fn emit(&mut self, kind: PostfixKind, span: TextRange) {
        self.output.push(PostfixItem::new(kind, span));
    }

    fn push_operator(&mut self, op: Operator, span: TextRange) {
        while let Some(&StackEntry::Operator(top, top_span)) = self.stack.last() {
            if !top.pops_before(op) {
                break;
            }
            self.stack.pop();
            self.emit(PostfixKind::Operator(top), top_span);
        }
        self.stack.push(StackEntry::Operator(op, span));
    }

    fn close_group(&mut self, span: TextRange) {
        loop {
            match self.stack.pop() {
                Some(StackEntry::Operator(op, op_span)) => {
                    self.emit(PostfixKind::Operator(op), op_span)
                }
                Some(StackEntry::Open(_)) => return,
                None => {
                    self.diagnostics
                        .report(DiagnosticKind::UnmatchedCloseParen, span)
                        .fix("remove the unmatched `)`", "")
                        .emit();
                    return;
                }
            }
        }
    }

    fn drain(&mut self) {
        while let Some(entry) = self.stack.pop() {
            match entry {
                StackEntry::Operator(op, span) => self.emit(PostfixKind::Operator(op), span),
                StackEntry::Open(span) => self
                    .diagnostics
                    .report(DiagnosticKind::UnmatchedOpenParen, span)
                    .emit(),
            }
        }
    }
}
