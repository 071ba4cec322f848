//! Checker trait implemented by lint rules.

use std::path::{Path, PathBuf};

use crate::config::ConfigError;
use crate::types::{Diagnostic, Severity};

/// Errors raised while preparing a checker for a directory.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The rule configuration could not be loaded.
    #[error("failed to load checker configuration: {0}")]
    Config(#[from] ConfigError),

    /// The directory could not be registered.
    #[error("cannot register directory {path}: {message}")]
    Directory {
        /// Directory that was rejected.
        path: PathBuf,
        /// Why it was rejected.
        message: String,
    },
}

/// A per-file lint rule driven by a host runner.
///
/// The host calls [`Checker::setup`] once for every directory it intends to
/// check, and only then calls [`Checker::check`] for files in those
/// directories. `check` takes `&self`, so a fully set up checker may be
/// shared across worker threads.
///
/// # Example
///
/// ```ignore
/// use gonames_core::Checker;
///
/// let mut checker = PackageNamesChecker::new();
/// checker.setup(Path::new("/src/mypkg"), None)?;
/// let diagnostics = checker.check(Path::new("/src/mypkg/helper.go"));
/// assert!(diagnostics.is_empty());
/// ```
pub trait Checker: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "package-names").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "GN001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Prepares the checker for files in `directory`.
    ///
    /// `config_path` optionally names a configuration file the checker may
    /// read its settings from.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the
    /// directory cannot be registered.
    fn setup(&mut self, directory: &Path, config_path: Option<&Path>) -> Result<(), SetupError>;

    /// Checks a single file and returns its diagnostics.
    ///
    /// An empty vector means the file conforms.
    fn check(&self, file: &Path) -> Vec<Diagnostic>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiagnosticKind, Location};

    struct TestChecker {
        dirs: Vec<PathBuf>,
    }

    impl Checker for TestChecker {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }

        fn setup(&mut self, directory: &Path, _config_path: Option<&Path>) -> Result<(), SetupError> {
            self.dirs.push(directory.to_path_buf());
            Ok(())
        }

        fn check(&self, file: &Path) -> Vec<Diagnostic> {
            if file.parent().is_some_and(|p| self.dirs.iter().any(|d| d == p)) {
                return Vec::new();
            }
            vec![Diagnostic::new(
                self.code(),
                self.name(),
                DiagnosticKind::PackageDirectoryMismatch,
                self.default_severity(),
                Location::file_level(file.to_path_buf()),
                "unregistered",
            )]
        }
    }

    #[test]
    fn test_checker_trait() {
        let mut checker = TestChecker { dirs: Vec::new() };
        assert_eq!(checker.name(), "test-rule");
        assert_eq!(checker.default_severity(), Severity::Error);
        assert_eq!(checker.description(), "");

        checker.setup(Path::new("/src/a"), None).unwrap();
        assert!(checker.check(Path::new("/src/a/x.go")).is_empty());
        assert_eq!(checker.check(Path::new("/src/b/x.go")).len(), 1);
    }

    #[test]
    fn setup_error_wraps_config_error() {
        let err = SetupError::from(ConfigError::Parse {
            message: "bad".into(),
        });
        assert!(err.to_string().contains("bad"));
    }
}
