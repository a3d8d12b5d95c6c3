//! Aggregated validation diagnostics.
//!
//! Soft failures (naming violations, missing mandatory attributes, standards
//! disagreements) are collected here rather than aborting the run, so that a
//! single pass surfaces as many errors as possible. Every entry is mirrored
//! onto the log stream as it is recorded.

use serde::Serialize;
use tracing::{error, warn};

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The front end could not parse a source file.
    StructuralParse,
    /// One of the derived-name cross-checks failed.
    Naming,
    /// Unknown or malformed attribute on a field.
    Attribute,
    /// Vertical or non-spatial dimension malformed or conflicting.
    Dimension,
    /// A mandatory field attribute is missing.
    Completeness,
    /// An external standard validator disagreed with the field.
    Standards,
    /// A unique id or group name was declared more than once.
    Duplicate,
}

impl DiagnosticKind {
    /// Get a human-readable label for the diagnostic kind.
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::StructuralParse => "Structural Parse Failure",
            DiagnosticKind::Naming => "Naming Violation",
            DiagnosticKind::Attribute => "Attribute Failure",
            DiagnosticKind::Dimension => "Dimension Failure",
            DiagnosticKind::Completeness => "Completeness Failure",
            DiagnosticKind::Standards => "Standards Failure",
            DiagnosticKind::Duplicate => "Duplicate Declaration",
        }
    }
}

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Should be reviewed; still marks the document invalid when aggregated.
    Warning,
    /// Definite violation.
    Error,
}

/// A single validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Category of the finding.
    pub kind: DiagnosticKind,
    /// Severity level.
    pub severity: Severity,
    /// The file or field the finding is about.
    pub scope: String,
    /// Human-readable description.
    pub message: String,
}

/// Accumulator for validation findings across a whole run.
#[derive(Debug, Default)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error-level finding and emit it on the log stream.
    pub fn error(
        &mut self,
        kind: DiagnosticKind,
        scope: impl Into<String>,
        message: impl Into<String>,
    ) {
        let scope = scope.into();
        let message = message.into();
        error!(kind = kind.label(), scope = %scope, "{message}");
        self.diagnostics.push(Diagnostic {
            kind,
            severity: Severity::Error,
            scope,
            message,
        });
    }

    /// Record a warning-level finding and emit it on the log stream.
    pub fn warning(
        &mut self,
        kind: DiagnosticKind,
        scope: impl Into<String>,
        message: impl Into<String>,
    ) {
        let scope = scope.into();
        let message = message.into();
        warn!(kind = kind.label(), scope = %scope, "{message}");
        self.diagnostics.push(Diagnostic {
            kind,
            severity: Severity::Warning,
            scope,
            message,
        });
    }

    /// All findings, in the order they were recorded.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of error-level findings.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Number of warning-level findings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// True when nothing has been recorded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Findings of one kind, for targeted assertions and summaries.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }
}
