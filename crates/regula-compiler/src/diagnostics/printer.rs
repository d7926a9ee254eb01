//! Renders diagnostics either as plain `error at a..b` lines or annotated
//! against the pattern source.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::{DiagnosticMessage, Diagnostics};

pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            colored: false,
        }
    }

    /// Annotate against `source`. Without it, rendering is plain.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// Messages are written in source order.
    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.sorted().into_iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            match self.source {
                Some(source) => write!(w, "{}", renderer.render(&annotated(diag, source)))?,
                None => write!(w, "{diag}")?,
            }
        }

        Ok(())
    }
}

/// The error with its span underlined, plus a patch preview for a fix.
fn annotated<'a>(diag: &'a DiagnosticMessage, source: &'a str) -> Vec<Group<'a>> {
    let span = visible_span(diag.range, source.len());

    let mut report = vec![
        Level::ERROR.primary_title(&diag.message).element(
            Snippet::source(source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(span.clone()).label(&diag.message)),
        ),
    ];

    if let Some(fix) = &diag.fix {
        report.push(
            Level::HELP.secondary_title(&fix.description).element(
                Snippet::source(source)
                    .line_start(1)
                    .patch(Patch::new(span, &fix.replacement)),
            ),
        );
    }

    report
}

/// Widens an empty range to one byte so the caret has something to point at.
fn visible_span(range: TextRange, limit: usize) -> Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
