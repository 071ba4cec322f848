//! Core types for diagnostics and lint results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source location of a diagnostic.
///
/// File-level diagnostics (name mismatches, parse failures) carry no
/// line/column; token-level diagnostics carry both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path of the checked file.
    pub file: PathBuf,
    /// Line number (1-indexed), if the diagnostic points at a token.
    pub line: Option<usize>,
    /// Column number (1-indexed, in bytes), if the diagnostic points at a token.
    pub column: Option<usize>,
}

impl Location {
    /// Creates a location pointing at a token.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line: Some(line),
            column: Some(column),
        }
    }

    /// Creates a location for the file as a whole.
    #[must_use]
    pub fn file_level(file: PathBuf) -> Self {
        Self {
            file,
            line: None,
            column: None,
        }
    }

    /// Returns true if this location has no line/column.
    #[must_use]
    pub fn is_file_level(&self) -> bool {
        self.line.is_none()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file.display())?;
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, ":{line}:{column}")?;
        }
        Ok(())
    }
}

/// Classification of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// The file could not be read or parsed.
    ParseError,
    /// A directory, package, or file name uses a disallowed character.
    InvalidNamingCharacters,
    /// The declared package disagrees with the directory's expected name.
    PackageDirectoryMismatch,
    /// An identifier uses a disallowed character.
    InvalidIdentifierCharacters,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseError => write!(f, "parse-error"),
            Self::InvalidNamingCharacters => write!(f, "invalid-naming-characters"),
            Self::PackageDirectoryMismatch => write!(f, "package-directory-mismatch"),
            Self::InvalidIdentifierCharacters => write!(f, "invalid-identifier-characters"),
        }
    }
}

/// A single reported violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule code (e.g., "GN001").
    pub code: String,
    /// Rule name (e.g., "package-names").
    pub rule: String,
    /// What kind of violation this is.
    pub kind: DiagnosticKind,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Where the violation was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        kind: DiagnosticKind,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            kind,
            severity,
            location,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location, self.severity, self.code, self.message
        )
    }
}

/// Result of checking a set of files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All diagnostics found, in the order they were reported.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the diagnostics of one checked file.
    pub fn record(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
        self.files_checked += 1;
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_diagnostics_at(Severity::Error)
    }

    /// Checks if any diagnostics meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_diagnostics_at(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= severity)
    }

    /// Counts diagnostics by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity: Severity| {
            self.diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Counts diagnostics of the given kind.
    #[must_use]
    pub fn count_kind(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(severity: Severity, location: Location) -> Diagnostic {
        Diagnostic::new(
            "GN001",
            "package-names",
            DiagnosticKind::InvalidIdentifierCharacters,
            severity,
            location,
            "bad identifier",
        )
    }

    #[test]
    fn location_display_with_position() {
        let loc = Location::new(PathBuf::from("pkg/a.go"), 3, 7);
        assert_eq!(loc.to_string(), "pkg/a.go:3:7");
        assert!(!loc.is_file_level());
    }

    #[test]
    fn location_display_file_level() {
        let loc = Location::file_level(PathBuf::from("pkg/a.go"));
        assert_eq!(loc.to_string(), "pkg/a.go");
        assert!(loc.is_file_level());
    }

    #[test]
    fn diagnostic_display() {
        let d = make_diagnostic(
            Severity::Error,
            Location::new(PathBuf::from("pkg/a.go"), 3, 7),
        );
        assert_eq!(
            d.to_string(),
            "pkg/a.go:3:7: error [GN001] bad identifier"
        );
    }

    #[test]
    fn kind_display_is_kebab_case() {
        assert_eq!(
            DiagnosticKind::PackageDirectoryMismatch.to_string(),
            "package-directory-mismatch"
        );
        assert_eq!(DiagnosticKind::ParseError.to_string(), "parse-error");
    }

    #[test]
    fn record_counts_files_and_diagnostics() {
        let mut result = LintResult::new();
        result.record(vec![make_diagnostic(
            Severity::Warning,
            Location::file_level(PathBuf::from("a.go")),
        )]);
        result.record(Vec::new());

        assert_eq!(result.files_checked, 2);
        assert_eq!(result.count_by_severity(), (0, 1, 0));
        assert!(!result.has_errors());
        assert!(result.has_diagnostics_at(Severity::Warning));
        assert_eq!(
            result.count_kind(DiagnosticKind::InvalidIdentifierCharacters),
            1
        );
    }
}
