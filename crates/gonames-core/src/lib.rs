//! # gonames-core
//!
//! Host framework for the gonames naming linter.
//!
//! This crate provides the pieces a lint rule plugs into:
//!
//! - [`Checker`] trait with the per-directory `setup` / per-file `check` contract
//! - [`Diagnostic`] and [`Location`] for reporting violations
//! - [`LintResult`] for aggregating diagnostics across a run
//! - [`Config`] for TOML-based configuration
//!
//! ## Example
//!
//! ```ignore
//! use gonames_core::{Checker, LintResult};
//!
//! let mut checker = PackageNamesChecker::new();
//! checker.setup(Path::new("/src/mypkg"), None)?;
//!
//! let mut result = LintResult::new();
//! result.record(checker.check(Path::new("/src/mypkg/helper.go")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod types;

pub use checker::{Checker, SetupError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use types::{Diagnostic, DiagnosticKind, LintResult, Location, Severity};
