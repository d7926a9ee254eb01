use rowan::TextRange;

/// What went wrong while reading a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// `(` never closed.
    UnmatchedOpenParen,
    /// `)` with no open group.
    UnmatchedCloseParen,
}

impl DiagnosticKind {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnmatchedOpenParen => "unclosed group: missing `)`",
            Self::UnmatchedCloseParen => "unmatched `)`",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_string(),
            fix: None,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        Ok(())
    }
}
