//! Core diagnostic types.
//!
//! The check produces `Diagnostic` values; both formatters (human, JSON)
//! consume them.

use serde::{Deserialize, Serialize};

/// A diagnostic produced by the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique ID: RULE_CODE-file:line (e.g., "RET001-handler.go:18").
    pub id: String,
    /// Rule code ("RET001", "RET002").
    pub rule: String,
    /// Severity level.
    pub severity: Severity,
    /// One-line summary.
    pub title: String,
    /// Detailed explanation, quoting the offending source.
    pub explanation: String,
    /// Where the issue manifests.
    pub location: Location,
}

impl Diagnostic {
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        explanation: impl Into<String>,
        location: Location,
    ) -> Self {
        let rule = rule.into();
        let id = format!("{}-{}:{}", rule, location.file, location.line);
        Self {
            id,
            rule,
            severity,
            title: title.into(),
            explanation: explanation.into(),
            location,
        }
    }
}

/// Severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding.
    Info,
    /// Potential issue that should be addressed.
    Warning,
    /// Definite bug or serious issue.
    Error,
    /// Critical safety issue.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl Severity {
    /// Check if this severity is at or above a threshold.
    pub fn is_at_least(&self, threshold: Severity) -> bool {
        *self >= threshold
    }
}

/// Source code location.
///
/// Lines and columns are 1-based (matching Go's `token.Position`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    /// Line number (1-based).
    pub line: u32,
    /// Column offset (1-based).
    pub column: u32,
    /// End line number (1-based).
    pub end_line: u32,
    /// End column offset (1-based).
    pub end_column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            end_line: line,
            end_column: column,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Summary of check results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub critical: usize,
    pub error: usize,
    pub warning: usize,
    pub info: usize,
    pub files_checked: usize,
}

impl AnalysisSummary {
    /// Create a summary from a list of diagnostics.
    pub fn from_diagnostics(diagnostics: &[Diagnostic], files_checked: usize) -> Self {
        let mut summary = Self {
            critical: 0,
            error: 0,
            warning: 0,
            info: 0,
            files_checked,
        };

        for diag in diagnostics {
            match diag.severity {
                Severity::Critical => summary.critical += 1,
                Severity::Error => summary.error += 1,
                Severity::Warning => summary.warning += 1,
                Severity::Info => summary.info += 1,
            }
        }

        summary
    }

    /// Total number of diagnostics.
    pub fn total(&self) -> usize {
        self.critical + self.error + self.warning + self.info
    }

    /// Whether there are any issues at or above a severity threshold.
    pub fn has_issues_above(&self, threshold: Severity) -> bool {
        match threshold {
            Severity::Info => self.total() > 0,
            Severity::Warning => self.warning + self.error + self.critical > 0,
            Severity::Error => self.error + self.critical > 0,
            Severity::Critical => self.critical > 0,
        }
    }
}
