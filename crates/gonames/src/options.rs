//! Rule settings read from the `[rules.package-names]` config section.

use gonames_core::{Config, Severity};

/// Settings for [`PackageNamesChecker`](crate::PackageNamesChecker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingOptions {
    /// Package names exempt from every check (e.g. `main`).
    pub entry_point_packages: Vec<String>,
    /// File name suffixes exempt from every check (e.g. `_test.go`).
    pub test_suffixes: Vec<String>,
    /// Suffix stripped from file names before the file rule applies.
    pub source_suffix: String,
    /// Severity of reported diagnostics.
    pub severity: Severity,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            entry_point_packages: vec!["main".to_owned()],
            test_suffixes: vec!["_test.go".to_owned()],
            source_suffix: ".go".to_owned(),
            severity: Severity::Error,
        }
    }
}

impl NamingOptions {
    /// Builds options from the rule's config section, falling back to the
    /// defaults for anything unset.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut options = Self::default();
        if let Some(severity) = config.rule_severity(crate::NAME) {
            options.severity = severity;
        }
        let Some(rule) = config.rule(crate::NAME) else {
            return options;
        };

        if let Some(packages) = rule.get_str_array("entry_point_packages") {
            options.entry_point_packages = packages;
        }
        if let Some(suffixes) = rule.get_str_array("test_suffixes") {
            options.test_suffixes = suffixes;
        }
        if let Some(suffix) = rule.get_str("source_suffix") {
            options.source_suffix = suffix.to_owned();
        }
        options
    }

    /// Whether `file_name` is a test file exempt from checking.
    #[must_use]
    pub fn is_test_file(&self, file_name: &str) -> bool {
        self.test_suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
    }

    /// Whether `package` is an entry-point package exempt from checking.
    #[must_use]
    pub fn is_entry_point(&self, package: &str) -> bool {
        self.entry_point_packages.iter().any(|p| p == package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = NamingOptions::default();
        assert!(o.is_entry_point("main"));
        assert!(!o.is_entry_point("mainly"));
        assert!(o.is_test_file("helper_test.go"));
        assert!(!o.is_test_file("helper.go"));
        assert_eq!(o.source_suffix, ".go");
        assert_eq!(o.severity, Severity::Error);
    }

    #[test]
    fn empty_config_gives_defaults() {
        assert_eq!(
            NamingOptions::from_config(&Config::default()),
            NamingOptions::default()
        );
    }

    #[test]
    fn reads_rule_section() {
        let config = Config::parse(
            r#"
[rules.package-names]
severity = "warning"
entry_point_packages = ["main", "cmd"]
test_suffixes = []
source_suffix = ".gox"
"#,
        )
        .unwrap();

        let o = NamingOptions::from_config(&config);
        assert_eq!(o.severity, Severity::Warning);
        assert!(o.is_entry_point("cmd"));
        assert!(!o.is_test_file("helper_test.go"));
        assert_eq!(o.source_suffix, ".gox");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = Config::parse("[rules.package-names]\ntest_suffixes = [\"_spec.go\"]\n")
            .unwrap();
        let o = NamingOptions::from_config(&config);
        assert!(o.is_test_file("a_spec.go"));
        assert!(!o.is_test_file("a_test.go"));
        assert!(o.is_entry_point("main"));
    }
}
