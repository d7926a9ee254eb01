//! Diagnostics for pattern compilation.
//!
//! The converter collects every grouping error it finds instead of stopping
//! at the first one. Rendering goes through [`DiagnosticsPrinter`].

mod message;
mod printer;


use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, Fix};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Start a diagnostic of `kind` at `range`, carrying the kind's message.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn error_count(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    /// Messages in source order.
    pub fn sorted(&self) -> Vec<&DiagnosticMessage> {
        let mut sorted: Vec<_> = self.messages.iter().collect();
        sorted.sort_by_key(|m| m.range.start());
        sorted
    }

    pub fn printer<'d, 's>(&'d self) -> DiagnosticsPrinter<'d, 's> {
        DiagnosticsPrinter::new(self)
    }

    /// Render against the pattern source, uncolored.
    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }
}

impl<'a> DiagnosticBuilder<'a> {
    pub fn fix(mut self, description: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.message.fix = Some(Fix::new(replacement, description));
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
