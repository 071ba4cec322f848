//! Go source parsing using Tree-sitter.

use tree_sitter::{Language, Node, Parser, Tree};

/// Errors produced while turning a file into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The Go grammar could not be loaded into the parser.
    #[error("cannot load Go grammar: {0}")]
    Language(String),
    /// Tree-sitter gave up without producing a tree.
    #[error("parser produced no syntax tree")]
    NoTree,
    /// The source contains a syntax error.
    #[error("{line}:{column}: {detail}")]
    Syntax {
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed, in bytes).
        column: usize,
        /// What went wrong at that position.
        detail: String,
    },
    /// The source has no `package` clause.
    #[error("expected 'package' clause")]
    MissingPackageClause,
    /// The file could not be read.
    #[error("{0}")]
    Io(String),
}

/// A parsed Go source file.
///
/// Owns both the source text and the syntax tree, so node text and
/// positions can be resolved without the caller keeping the source alive.
pub struct ParsedFile {
    source: String,
    tree: Tree,
    package_name: String,
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("package_name", &self.package_name)
            .field("len", &self.source.len())
            .finish_non_exhaustive()
    }
}

impl ParsedFile {
    /// Parses Go source into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the grammar cannot be loaded, the source
    /// contains a syntax error, or there is no `package` clause.
    pub fn parse(source: impl Into<String>) -> Result<Self, ParseError> {
        let source = source.into();
        let language: Language = tree_sitter_go::LANGUAGE.into();

        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::Language(e.to_string()))?;

        let tree = parser.parse(&source, None).ok_or(ParseError::NoTree)?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(first_syntax_error(root, source.as_bytes()));
        }
        check_declaration_order(root)?;

        let package_name = find_package_name(root, source.as_bytes())
            .ok_or(ParseError::MissingPackageClause)?
            .to_owned();

        Ok(Self {
            source,
            tree,
            package_name,
        })
    }

    /// Name declared by the `package` clause.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// The syntax tree.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Text covered by a node of this file's tree.
    #[must_use]
    pub fn text(&self, node: &Node<'_>) -> &str {
        text(node, self.source.as_bytes())
    }
}

fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

fn find_package_name<'a>(root: Node<'_>, src: &'a [u8]) -> Option<&'a str> {
    let mut cursor = root.walk();
    let clause = root
        .children(&mut cursor)
        .find(|n| n.kind() == "package_clause")?;

    let mut cursor = clause.walk();
    let name = clause
        .children(&mut cursor)
        .find(|n| n.kind() == "package_identifier")?;
    Some(text(&name, src))
}

/// The grammar accepts top-level items in any order; Go requires the
/// `package` clause first and imports before any other declaration.
fn check_declaration_order(root: Node<'_>) -> Result<(), ParseError> {
    let mut cursor = root.walk();
    let mut seen_package = false;
    let mut seen_declaration = false;

    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "comment" => {}
            "package_clause" if !seen_package && !seen_declaration => seen_package = true,
            "import_declaration" if seen_package && !seen_declaration => {}
            "import_declaration" if seen_declaration => {
                let pos = node.start_position();
                return Err(ParseError::Syntax {
                    line: pos.row + 1,
                    column: pos.column + 1,
                    detail: "imports must appear before other declarations".to_owned(),
                });
            }
            _ if !seen_package => return Err(ParseError::MissingPackageClause),
            _ => seen_declaration = true,
        }
    }
    Ok(())
}

/// Locate the first ERROR or MISSING node in document order.
fn first_syntax_error(root: Node<'_>, src: &[u8]) -> ParseError {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            let detail = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                format!("syntax error near \"{}\"", snippet(text(&node, src)))
            };
            return ParseError::Syntax {
                line: pos.row + 1,
                column: pos.column + 1,
                detail,
            };
        }

        // Only descend into subtrees that contain the error.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                let pos = root.start_position();
                return ParseError::Syntax {
                    line: pos.row + 1,
                    column: pos.column + 1,
                    detail: "syntax error".to_owned(),
                };
            }
        }
    }
}

fn snippet(s: &str) -> String {
    const MAX_CHARS: usize = 20;
    let first_line = s.lines().next().unwrap_or("").trim();
    if first_line.chars().count() > MAX_CHARS {
        let cut: String = first_line.chars().take(MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        first_line.to_owned()
    }
}
