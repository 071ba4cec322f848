//! Identifier walker: visits every name-bearing node of a Go syntax tree.

use crate::names::{NamingError, IDENTIFIER_RULE};
use crate::parser::ParsedFile;

/// Tree-sitter-go node kinds that introduce or reference a name.
pub const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "field_identifier",
    "type_identifier",
    "package_identifier",
    "label_name",
];

/// Outcome of walking a file's identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierScan {
    /// Number of identifier nodes visited.
    pub visited: usize,
    /// One entry per offending identifier, in source order.
    pub violations: Vec<NamingError>,
}

impl IdentifierScan {
    /// Whether every identifier passed.
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Walks the whole tree in pre-order and reports every identifier that uses
/// a character outside `a-z A-Z 0-9 _`.
///
/// The walk never stops early: all violations in the file are returned.
#[must_use]
pub fn walk_identifiers(file: &ParsedFile) -> IdentifierScan {
    let mut scan = IdentifierScan::default();
    let mut cursor = file.tree().walk();

    loop {
        let node = cursor.node();
        if IDENTIFIER_KINDS.contains(&node.kind()) {
            scan.visited += 1;
            let name = file.text(&node);
            if !IDENTIFIER_RULE.is_valid(name) {
                let pos = node.start_position();
                scan.violations.push(NamingError::InvalidIdentifier {
                    name: name.to_owned(),
                    line: pos.row + 1,
                    column: pos.column + 1,
                    allowed: IDENTIFIER_RULE.allowed(),
                });
            }
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return scan;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> IdentifierScan {
        walk_identifiers(&ParsedFile::parse(src).unwrap())
    }

    fn positions(scan: &IdentifierScan) -> Vec<(String, usize, usize)> {
        scan.violations
            .iter()
            .map(|v| match v {
                NamingError::InvalidIdentifier {
                    name, line, column, ..
                } => (name.clone(), *line, *column),
                other => panic!("unexpected error {other:?}"),
            })
            .collect()
    }

    #[test]
    fn accepts_mixed_case_and_digits() {
        let s = scan(
            "package foo

var (
varname string
varName string
Varname string
var_name string
varname123 string
v string
)
",
        );
        assert!(s.all_valid());
        assert!(s.visited >= 12);
    }

    #[test]
    fn reports_every_violation_in_order() {
        let s = scan(
            "package foo

import (
\"fmt\"
\"time\"
)

var (
varname string
varИмя string
)

func bar(переменнаяName []string) {
for _, f := range переменнаяName {
fmt.Println(f, time.Now())
}
}
",
        );
        assert!(!s.all_valid());
        assert_eq!(
            positions(&s),
            vec![
                ("varИмя".to_string(), 10, 1),
                ("переменнаяName".to_string(), 13, 10),
                ("переменнаяName".to_string(), 14, 19),
            ]
        );
    }

    #[test]
    fn message_names_identifier_and_position() {
        let s = scan("package foo\n\nvar naïve int\n");
        assert_eq!(s.violations.len(), 1);
        assert_eq!(
            s.violations[0].to_string(),
            r#"the identifier "naïve" at line 3, column 5 contains invalid characters. (Use only "a-z", "A-Z", "0-9", "_")"#
        );
        assert_eq!(s.violations[0].position(), Some((3, 5)));
    }

    #[test]
    fn visits_fields_types_labels_and_qualified_names() {
        let s = scan(
            "package foo

import strè \"strings\"

type Tÿpe struct {
fiéld int
}

func (r Tÿpe) méthod() {
lâbel:
for {
break lâbel
}
_ = strè.ToUpper(\"x\")
}
",
        );
        let names: Vec<String> = positions(&s).into_iter().map(|(n, _, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "strè", "Tÿpe", "fiéld", "Tÿpe", "méthod", "lâbel", "lâbel", "strè"
            ]
        );
    }

    #[test]
    fn string_literals_and_comments_are_ignored() {
        let s = scan("package foo\n\n// café\nvar s = \"naïve\"\n");
        assert!(s.all_valid());
    }
}
