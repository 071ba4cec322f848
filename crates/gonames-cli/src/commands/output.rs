//! Shared output formatting for lint results.

use anyhow::Result;
use gonames_core::{LintResult, Severity};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => {
            for line in compact_lines(result) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    for diagnostic in &result.diagnostics {
        let severity_indicator = match diagnostic.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}",
            diagnostic.code, diagnostic.rule, diagnostic.location
        );
        println!("  {}: {}", severity_indicator, diagnostic.message);
        println!();
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn compact_lines(result: &LintResult) -> impl Iterator<Item = String> + '_ {
    result.diagnostics.iter().map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gonames_core::{Diagnostic, DiagnosticKind, Location};
    use std::path::PathBuf;

    fn sample() -> LintResult {
        let mut result = LintResult::new();
        result.record(vec![
            Diagnostic::new(
                "GN001",
                "package-names",
                DiagnosticKind::PackageDirectoryMismatch,
                Severity::Error,
                Location::file_level(PathBuf::from("mypkg/a.go")),
                "mismatch",
            ),
            Diagnostic::new(
                "GN001",
                "package-names",
                DiagnosticKind::InvalidIdentifierCharacters,
                Severity::Error,
                Location::new(PathBuf::from("mypkg/b.go"), 3, 5),
                "bad identifier",
            ),
        ]);
        result
    }

    #[test]
    fn compact_omits_missing_position() {
        let lines: Vec<String> = compact_lines(&sample()).collect();
        assert_eq!(
            lines,
            vec![
                "mypkg/a.go: error [GN001] mismatch",
                "mypkg/b.go:3:5: error [GN001] bad identifier",
            ]
        );
    }

    #[test]
    fn json_uses_null_for_missing_position() {
        let json = serde_json::to_value(sample()).unwrap();
        let first = &json["diagnostics"][0];
        assert!(first["location"]["line"].is_null());
        assert_eq!(first["kind"], "package-directory-mismatch");
        assert_eq!(json["diagnostics"][1]["location"]["column"], 5);
        assert_eq!(json["files_checked"], 1);
    }
}
