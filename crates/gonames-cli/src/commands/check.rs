//! Check command implementation.
//!
//! Discovers Go files, registers every directory that holds one, then checks
//! each file. All `setup` calls finish before the first `check`.

use anyhow::{Context, Result};
use gonames::{NamingOptions, PackageNamesChecker};
use gonames_core::{Checker, Config, LintResult};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source)?;
    let result = lint(path, &config, source.path(), exclude)?;

    super::output::print(&result, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Checks every Go file under `path` and returns the aggregated result.
fn lint(
    path: &Path,
    config: &Config,
    config_path: Option<&Path>,
    extra_exclude: Vec<String>,
) -> Result<LintResult> {
    let mut result = LintResult::new();

    if !config.is_rule_enabled(gonames::NAME) {
        tracing::info!("Rule {} is disabled, nothing to check", gonames::NAME);
        return Ok(result);
    }

    let root = if config.analyzer.root.is_absolute() {
        config.analyzer.root.clone()
    } else {
        path.join(&config.analyzer.root)
    };
    let root = std::fs::canonicalize(&root)
        .with_context(|| format!("Failed to resolve {}", root.display()))?;

    let options = NamingOptions::from_config(config);
    let mut exclude = config.analyzer.exclude.clone();
    exclude.extend(extra_exclude);

    let files = discover_files(
        &root,
        &options.source_suffix,
        &exclude,
        config.analyzer.respect_gitignore,
    )?;
    let directories: BTreeSet<&Path> = files.iter().filter_map(|f| f.parent()).collect();

    tracing::info!(
        "Checking {} file(s) in {} director(ies)",
        files.len(),
        directories.len()
    );

    let mut checker = PackageNamesChecker::with_options(options);
    for dir in &directories {
        checker
            .setup(dir, config_path)
            .with_context(|| format!("Failed to set up {}", dir.display()))?;
    }

    for file in &files {
        let mut diagnostics = checker.check(file);
        for d in &mut diagnostics {
            if let Ok(rel) = d.location.file.strip_prefix(&root) {
                d.location.file = rel.to_path_buf();
            }
        }
        result.record(diagnostics);
    }

    Ok(result)
}

fn discover_files(
    root: &Path,
    suffix: &str,
    exclude: &[String],
    respect_gitignore: bool,
) -> Result<Vec<PathBuf>> {
    let patterns: Vec<glob::Pattern> = exclude
        .iter()
        .filter_map(|p| match glob::Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!("Ignoring invalid exclude pattern {p:?}: {e}");
                None
            }
        })
        .collect();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(respect_gitignore)
        .require_git(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if patterns.iter().any(|p| p.matches_path(rel)) {
            tracing::debug!("Excluded {}", rel.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gonames_core::DiagnosticKind;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "mypkg/helper.go", "package mypkg\n");
        write(tmp.path(), "mypkg/Helper2.go", "package mypkg\n");
        write(tmp.path(), "mypkg/helper_test.go", "package mypkg\n");
        write(tmp.path(), "other/a.go", "package mypkg\n");
        write(tmp.path(), "cmd/main.go", "package main\n");
        write(tmp.path(), "vendor/dep/x.go", "package Bad\n");
        write(tmp.path(), "README.md", "not go");
        tmp
    }

    #[test]
    fn checks_discovered_files() {
        let tmp = project();
        let result = lint(tmp.path(), &Config::default(), None, Vec::new()).unwrap();

        // vendor/ is excluded by default; README.md is not a Go file.
        assert_eq!(result.files_checked, 5);
        assert_eq!(result.diagnostics.len(), 2, "{:#?}", result.diagnostics);
        assert_eq!(result.count_kind(DiagnosticKind::InvalidNamingCharacters), 1);
        assert_eq!(result.count_kind(DiagnosticKind::PackageDirectoryMismatch), 1);
        assert_eq!(
            result.diagnostics[0].location.file,
            PathBuf::from("mypkg/Helper2.go")
        );
    }

    #[test]
    fn extra_excludes_apply() {
        let tmp = project();
        let result = lint(
            tmp.path(),
            &Config::default(),
            None,
            vec!["other/**".to_string()],
        )
        .unwrap();
        assert_eq!(result.files_checked, 4);
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn disabled_rule_checks_nothing() {
        let tmp = project();
        let config = Config::parse("[rules.package-names]\nenabled = false\n").unwrap();
        let result = lint(tmp.path(), &config, None, Vec::new()).unwrap();
        assert_eq!(result.files_checked, 0);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn config_path_is_handed_to_setup() {
        let tmp = project();
        let config_path = tmp.path().join("gonames.toml");
        fs::write(
            &config_path,
            "[rules.package-names]\nseverity = \"warning\"\n",
        )
        .unwrap();
        let config = Config::from_file(&config_path).unwrap();

        let result = lint(tmp.path(), &config, Some(&config_path), Vec::new()).unwrap();
        assert_eq!(result.diagnostics.len(), 2);
        assert!(!result.has_errors());
    }

    #[test]
    fn invalid_exclude_pattern_is_skipped() {
        let tmp = project();
        let files = discover_files(tmp.path(), ".go", &["[".to_string()], true).unwrap();
        assert_eq!(files.len(), 6);
    }
}
