//! Diagnostic infrastructure for lexical errors.
//!
//! The scanner never unwinds through its caller: every error is recorded
//! here and scanning continues with a best-effort token. Diagnostics are
//! emitted in lexical order and surfaced at the end of the parse.

use serde::Serialize;
use std::fmt;

/// The closed set of lexical error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    UnterminatedString,
    UnterminatedRegExp,
    UnterminatedComment,
    UnterminatedTemplate,
    InvalidCharacter,
    InvalidSmpCharacter,
    InvalidUnicodeEscape,
    InvalidCodePoint,
    InvalidHexEscape,
    StrictOctalLiteral,
    StrictOctalEscape,
    DuplicateRegExpFlag,
    UnexpectedTokenRegExpFlag,
    HtmlCommentInWebCompat,
    IdentifierAfterNumericLiteral,
    ContinuousNumericSeparator,
    TrailingNumericSeparator,
    InvalidBigInt,
    ExpectedHexDigits,
}

impl DiagnosticKind {
    /// Human-readable message template. A `{}` placeholder is filled from
    /// the diagnostic's argument.
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::UnterminatedString => "Unterminated string literal",
            DiagnosticKind::UnterminatedRegExp => "Unterminated regular expression",
            DiagnosticKind::UnterminatedComment => "Unterminated comment",
            DiagnosticKind::UnterminatedTemplate => "Unterminated template literal",
            DiagnosticKind::InvalidCharacter => "Invalid character",
            DiagnosticKind::InvalidSmpCharacter => {
                "Invalid supplementary-plane character or lone surrogate"
            }
            DiagnosticKind::InvalidUnicodeEscape => "Invalid Unicode escape sequence",
            DiagnosticKind::InvalidCodePoint => "Code point out of range",
            DiagnosticKind::InvalidHexEscape => "Invalid hexadecimal escape sequence",
            DiagnosticKind::StrictOctalLiteral => "Octal literals are not allowed in strict mode",
            DiagnosticKind::StrictOctalEscape => {
                "Octal escape sequences are not allowed in strict mode"
            }
            DiagnosticKind::DuplicateRegExpFlag => "Duplicate regular expression flag '{}'",
            DiagnosticKind::UnexpectedTokenRegExpFlag => "Unexpected regular expression flag '{}'",
            DiagnosticKind::HtmlCommentInWebCompat => {
                "HTML comments are not allowed when web compatibility is disabled"
            }
            DiagnosticKind::IdentifierAfterNumericLiteral => {
                "An identifier or keyword may not immediately follow a numeric literal"
            }
            DiagnosticKind::ContinuousNumericSeparator => {
                "Numeric separators are only allowed between two digits"
            }
            DiagnosticKind::TrailingNumericSeparator => {
                "Numeric separators are not allowed at the end of numeric literals"
            }
            DiagnosticKind::InvalidBigInt => "Invalid BigInt literal",
            DiagnosticKind::ExpectedHexDigits => "Expected digits after the number base prefix",
        }
    }
}

/// The severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning = 2,
    Error = 1,
}

impl DiagnosticSeverity {
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single lexical diagnostic: kind, severity, start offset (in code
/// units), and an optional format argument.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: DiagnosticSeverity,
    pub start: usize,
    pub argument: Option<String>,
}

impl Diagnostic {
    pub fn format(&self) -> String {
        let template = self.kind.message();
        match &self.argument {
            Some(argument) => template.replacen("{}", argument, 1),
            None => template.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.start, self.format())
    }
}

/// A collection of diagnostics for one parse.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        DiagnosticBag::default()
    }

    /// Record an error at the given offset.
    pub fn error(&mut self, kind: DiagnosticKind, start: usize) {
        self.push(kind, DiagnosticSeverity::Error, start, None);
    }

    /// Record an error carrying a format argument.
    pub fn error_with(&mut self, kind: DiagnosticKind, start: usize, argument: impl Into<String>) {
        self.push(kind, DiagnosticSeverity::Error, start, Some(argument.into()));
    }

    fn push(
        &mut self,
        kind: DiagnosticKind,
        severity: DiagnosticSeverity,
        start: usize,
        argument: Option<String>,
    ) {
        tracing::trace!(?kind, start, "lexical diagnostic");
        self.diagnostics.push(Diagnostic {
            kind,
            severity,
            start,
            argument,
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
