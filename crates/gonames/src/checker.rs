//! The `package-names` checker.
//!
//! Per file: exemptions, parse, flat name checks (first failure only), then
//! the identifier walk (every failure).

use std::path::{Path, PathBuf};

use gonames_core::{Checker, Config, Diagnostic, DiagnosticKind, Location, SetupError};

use crate::identifiers::walk_identifiers;
use crate::names::{check_names, NamingError};
use crate::options::NamingOptions;
use crate::parser::{ParseError, ParsedFile};
use crate::registry::DirectoryRegistry;

/// Rule code for package-names.
pub const CODE: &str = "GN001";

/// Rule name for package-names.
pub const NAME: &str = "package-names";

/// Checks directory, package, file, and identifier names of Go files.
#[derive(Debug, Clone, Default)]
pub struct PackageNamesChecker {
    registry: DirectoryRegistry,
    options: NamingOptions,
    loaded_config: Option<PathBuf>,
}

impl PackageNamesChecker {
    /// Creates a checker with default options and an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checker with the given options.
    #[must_use]
    pub fn with_options(options: NamingOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Checks already-loaded source text as if it were the file at `path`.
    ///
    /// `path` supplies the directory (for the registry lookup) and the file
    /// name; nothing is read from disk.
    #[must_use]
    pub fn check_source(&self, path: &Path, source: &str) -> Vec<Diagnostic> {
        if self.is_test_file(path) {
            tracing::debug!("Skipping test file {}", path.display());
            return Vec::new();
        }

        let parsed = match ParsedFile::parse(source) {
            Ok(parsed) => parsed,
            Err(e) => return vec![self.parse_diagnostic(path, &e)],
        };

        let package = parsed.package_name();
        if self.options.is_entry_point(package) {
            tracing::debug!(
                "Skipping entry-point package {package} in {}",
                path.display()
            );
            return Vec::new();
        }

        let directory = path.parent().unwrap_or_else(|| Path::new(""));
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let expected = self.registry.lookup(directory);

        if let Err(e) = check_names(expected, package, &file_name, &self.options.source_suffix) {
            return vec![self.naming_diagnostic(path, &e)];
        }

        let scan = walk_identifiers(&parsed);
        tracing::debug!(
            "{}: {} identifier(s), {} invalid",
            path.display(),
            scan.visited,
            scan.violations.len()
        );
        scan.violations
            .iter()
            .map(|e| self.naming_diagnostic(path, e))
            .collect()
    }

    fn is_test_file(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|n| self.options.is_test_file(&n.to_string_lossy()))
    }

    fn naming_diagnostic(&self, path: &Path, error: &NamingError) -> Diagnostic {
        let location = match error.position() {
            Some((line, column)) => Location::new(path.to_path_buf(), line, column),
            None => Location::file_level(path.to_path_buf()),
        };
        Diagnostic::new(
            CODE,
            NAME,
            error.kind(),
            self.options.severity,
            location,
            error.to_string(),
        )
    }

    fn parse_diagnostic(&self, path: &Path, error: &ParseError) -> Diagnostic {
        Diagnostic::new(
            CODE,
            NAME,
            DiagnosticKind::ParseError,
            self.options.severity,
            Location::file_level(path.to_path_buf()),
            format!("failed to parse Go source: {error}"),
        )
    }
}

impl Checker for PackageNamesChecker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Package must match its directory; directory, package, file, and identifier names use only allowed characters"
    }

    fn setup(&mut self, directory: &Path, config_path: Option<&Path>) -> Result<(), SetupError> {
        if directory.as_os_str().is_empty() {
            return Err(SetupError::Directory {
                path: directory.to_path_buf(),
                message: "empty directory path".to_owned(),
            });
        }

        if let Some(path) = config_path {
            if self.loaded_config.as_deref() != Some(path) {
                let config = Config::from_file(path)?;
                self.options = NamingOptions::from_config(&config);
                self.loaded_config = Some(path.to_path_buf());
            }
        }

        self.registry.register(directory);
        Ok(())
    }

    fn check(&self, file: &Path) -> Vec<Diagnostic> {
        if self.is_test_file(file) {
            tracing::debug!("Skipping test file {}", file.display());
            return Vec::new();
        }

        match std::fs::read_to_string(file) {
            Ok(source) => self.check_source(file, &source),
            Err(e) => vec![self.parse_diagnostic(file, &ParseError::Io(e.to_string()))],
        }
    }
}
