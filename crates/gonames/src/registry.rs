//! Directory registry: maps source directories to their expected package name.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Expected package name per registered directory.
///
/// Keys are compared by path components, so `a/b` and `a/b/` are the
/// same directory. Entries are only added during setup and never removed.
#[derive(Debug, Clone, Default)]
pub struct DirectoryRegistry {
    map: HashMap<PathBuf, String>,
}

impl DirectoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `directory`, deriving its expected package name from the
    /// final path component. Returns the stored name.
    pub fn register(&mut self, directory: &Path) -> &str {
        let key = normalize(directory);
        let name = expected_name(&key);
        tracing::trace!("Registering {} -> {:?}", key.display(), name);

        let slot = self.map.entry(key).or_default();
        *slot = name;
        slot.as_str()
    }

    /// Expected package name for `directory`, or `""` if it was never
    /// registered.
    #[must_use]
    pub fn lookup(&self, directory: &Path) -> &str {
        self.map
            .get(&normalize(directory))
            .map_or("", String::as_str)
    }
}

/// Rebuild the path from its components, dropping trailing separators and
/// `.` segments.
fn normalize(directory: &Path) -> PathBuf {
    directory
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn expected_name(directory: &Path) -> String {
    directory.file_name().map_or_else(
        || directory.to_string_lossy().into_owned(),
        |n| n.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_name_from_last_component() {
        let mut r = DirectoryRegistry::new();
        assert_eq!(r.register(Path::new("/src/project/mypkg")), "mypkg");
        assert_eq!(r.lookup(Path::new("/src/project/mypkg")), "mypkg");
    }

    #[test]
    fn trailing_separator_is_normalized() {
        let mut r = DirectoryRegistry::new();
        r.register(Path::new("/src/mypkg/"));
        assert_eq!(r.lookup(Path::new("/src/mypkg")), "mypkg");
        assert_eq!(r.lookup(Path::new("/src/mypkg/")), "mypkg");
        assert_eq!(r.map.len(), 1);
    }

    #[test]
    fn relative_directory() {
        let mut r = DirectoryRegistry::new();
        assert_eq!(r.register(Path::new("mypkg/")), "mypkg");
        assert_eq!(r.lookup(Path::new("./mypkg")), "mypkg");
    }

    #[test]
    fn unregistered_returns_empty() {
        let mut r = DirectoryRegistry::new();
        assert_eq!(r.lookup(Path::new("/src/unknown")), "");
        r.register(Path::new("/src/known"));
        assert_eq!(r.lookup(Path::new("/src/unknown")), "");
    }

    #[test]
    fn re_registering_is_idempotent() {
        let mut r = DirectoryRegistry::new();
        r.register(Path::new("/src/mypkg"));
        r.register(Path::new("/src/mypkg/"));
        assert_eq!(r.map.len(), 1);
        assert_eq!(r.lookup(Path::new("/src/mypkg")), "mypkg");
    }

    #[test]
    fn root_keeps_whole_path_as_name() {
        let mut r = DirectoryRegistry::new();
        assert_eq!(r.register(Path::new("/")), "/");
    }

    #[test]
    fn name_is_not_validated_here() {
        let mut r = DirectoryRegistry::new();
        assert_eq!(r.register(Path::new("/src/My_Pkg")), "My_Pkg");
    }
}
