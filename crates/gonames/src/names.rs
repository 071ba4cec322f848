//! Naming rules for directories, packages, files, and identifiers.
//!
//! Each rule is a character class of *allowed* characters; a name fails the
//! rule as soon as it contains one character outside that class.

use gonames_core::DiagnosticKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// A character-class naming rule.
pub struct NamingRule {
    invalid: Lazy<Regex>,
    allowed: &'static str,
}

impl NamingRule {
    /// Whether `name` uses only characters this rule allows.
    #[must_use]
    pub fn is_valid(&self, name: &str) -> bool {
        !self.invalid.is_match(name)
    }

    /// Human-readable list of allowed characters, as shown in messages.
    #[must_use]
    pub fn allowed(&self) -> &'static str {
        self.allowed
    }
}

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    // Patterns are literals below; a failure here is a programming error.
    Regex::new(pattern).expect("naming rule pattern must compile")
}

/// Directory names: lowercase ASCII letters only.
pub static DIRECTORY_RULE: NamingRule = NamingRule {
    invalid: Lazy::new(|| compile("[^a-z]")),
    allowed: r#""a-z""#,
};

/// Package names: same alphabet as directories, since the two must match.
pub static PACKAGE_RULE: NamingRule = NamingRule {
    invalid: Lazy::new(|| compile("[^a-z]")),
    allowed: r#""a-z""#,
};

/// File names without their source suffix.
pub static FILE_RULE: NamingRule = NamingRule {
    invalid: Lazy::new(|| compile("[^a-z_0-9]")),
    allowed: r#""a-z", "_", "0-9""#,
};

/// Identifiers: ASCII word characters, any case.
///
/// Spelled out instead of `\W`, which is Unicode-aware in `regex`.
pub static IDENTIFIER_RULE: NamingRule = NamingRule {
    invalid: Lazy::new(|| compile("[^a-zA-Z0-9_]")),
    allowed: r#""a-z", "A-Z", "0-9", "_""#,
};

/// A naming convention violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    /// A directory, package, or file name uses a disallowed character.
    #[error("the name {name:?} contains invalid characters. (Use only {allowed})")]
    InvalidCharacters {
        /// The offending name, verbatim.
        name: String,
        /// Allowed characters of the violated rule.
        allowed: &'static str,
    },

    /// The declared package does not match its directory.
    #[error("the package name {package:?} must match the name of the target directory {directory:?}")]
    PackageDirectoryMismatch {
        /// Declared package name.
        package: String,
        /// Expected name derived from the directory.
        directory: String,
    },

    /// An identifier uses a disallowed character.
    #[error(
        "the identifier {name:?} at line {line}, column {column} contains invalid characters. (Use only {allowed})"
    )]
    InvalidIdentifier {
        /// The identifier text.
        name: String,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed, in bytes).
        column: usize,
        /// Allowed characters.
        allowed: &'static str,
    },
}

impl NamingError {
    /// The diagnostic kind this error is reported as.
    #[must_use]
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::InvalidCharacters { .. } => DiagnosticKind::InvalidNamingCharacters,
            Self::PackageDirectoryMismatch { .. } => DiagnosticKind::PackageDirectoryMismatch,
            Self::InvalidIdentifier { .. } => DiagnosticKind::InvalidIdentifierCharacters,
        }
    }

    /// Source position `(line, column)` for token-level errors.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::InvalidIdentifier { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

fn validate(rule: &NamingRule, name: &str) -> Result<(), NamingError> {
    if rule.is_valid(name) {
        Ok(())
    } else {
        Err(NamingError::InvalidCharacters {
            name: name.to_owned(),
            allowed: rule.allowed(),
        })
    }
}

/// Checks a directory name against [`DIRECTORY_RULE`].
///
/// # Errors
///
/// Returns [`NamingError::InvalidCharacters`] on any disallowed character.
pub fn check_dir_name(name: &str) -> Result<(), NamingError> {
    validate(&DIRECTORY_RULE, name)
}

/// Checks a package name against [`PACKAGE_RULE`].
///
/// # Errors
///
/// Returns [`NamingError::InvalidCharacters`] on any disallowed character.
pub fn check_package_name(name: &str) -> Result<(), NamingError> {
    validate(&PACKAGE_RULE, name)
}

/// Checks a file base name against [`FILE_RULE`] after stripping `suffix`.
///
/// # Errors
///
/// Returns [`NamingError::InvalidCharacters`] naming the stripped file name.
pub fn check_file_name(file_name: &str, suffix: &str) -> Result<(), NamingError> {
    let stem = file_name.strip_suffix(suffix).unwrap_or(file_name);
    validate(&FILE_RULE, stem)
}

/// Runs the flat name checks in order, stopping at the first failure:
/// directory name, package name, package/directory agreement, file name.
///
/// # Errors
///
/// Returns the first [`NamingError`] found.
pub fn check_names(
    expected_package: &str,
    actual_package: &str,
    file_name: &str,
    suffix: &str,
) -> Result<(), NamingError> {
    check_dir_name(expected_package)?;
    check_package_name(actual_package)?;
    if expected_package != actual_package {
        return Err(NamingError::PackageDirectoryMismatch {
            package: actual_package.to_owned(),
            directory: expected_package.to_owned(),
        });
    }
    check_file_name(file_name, suffix)
}
