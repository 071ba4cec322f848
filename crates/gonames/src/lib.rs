//! # gonames
//!
//! Tree-sitter based naming convention checker for Go sources.
//!
//! A Go file conforms when:
//!
//! - its directory name and `package` name use only `a-z` and agree,
//! - its file name (without `.go`) uses only `a-z`, `0-9` and `_`,
//! - every identifier uses only `a-z`, `A-Z`, `0-9` and `_`.
//!
//! The crate plugs into `gonames-core` and provides:
//!
//! - [`PackageNamesChecker`], the [`Checker`](gonames_core::Checker) implementation
//! - [`DirectoryRegistry`] for directory-to-package mapping
//! - [`check_names`] and the [`NamingRule`] statics for the flat name checks
//! - [`walk_identifiers`] for the exhaustive identifier walk
//! - [`ParsedFile`] for Go parsing via Tree-sitter

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod checker;
pub mod identifiers;
pub mod names;
pub mod options;
pub mod parser;
pub mod registry;

pub use checker::{PackageNamesChecker, CODE, NAME};
pub use identifiers::{walk_identifiers, IdentifierScan};
pub use names::{check_names, NamingError, NamingRule};
pub use options::NamingOptions;
pub use parser::{ParseError, ParsedFile};
pub use registry::DirectoryRegistry;
