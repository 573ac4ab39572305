//! Diagnostic collection shared by the lexer, parser, and driver.
//!
//! Every stage reports through a [`Handler`] instead of printing directly,
//! so the driver can decide how (and whether) to render a failure.

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic { level: Level::Error, message: message.into(), span: None }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic { level: Level::Warning, message: message.into(), span: None }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Renders the diagnostic the way the driver prints it to stderr:
    /// `error: <message>` or `error at <line>:<column>: <message>`.
    pub fn render(&self) -> String {
        match self.span {
            Some(span) if span != Span::DUMMY => {
                format!("{} at {}: {}", self.level, span, self.message)
            }
            _ => format!("{}: {}", self.level, self.message),
        }
    }
}

/// Collects diagnostics emitted while a stage runs.
///
/// The core stages are fatal-on-first-error (no recovery), so in practice a
/// `Handler` ever holds either zero or one error, but it is written as a
/// collector rather than a single `Option<Diagnostic>` so a future stage
/// that wants to batch warnings has somewhere to put them.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Handler { diagnostics: Vec::new() }
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Renders the first error, if any, in the form the driver writes to
    /// stderr.
    pub fn first_error(&self) -> Option<String> {
        self.diagnostics
            .iter()
            .find(|d| d.level == Level::Error)
            .map(Diagnostic::render)
    }
}
