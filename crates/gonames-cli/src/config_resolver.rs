//! Configuration file resolution.
//!
//! Priority order:
//!
//! 1. `--config` flag (or `GONAMES_CONFIG`)
//! 2. `gonames.toml` / `.gonames.toml` in the checked directory or the
//!    nearest ancestor, stopping at the Go module root (the first directory
//!    holding `go.mod`)
//! 3. `$GONAMES_CONFIG_DIR/config.toml` or `~/.gonames/config.toml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line.
    Explicit(PathBuf),
    /// Found in the project tree.
    Project(PathBuf),
    /// Found in the user's global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Path of the config file, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Whether the config came from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["gonames.toml", ".gonames.toml"];
const GLOBAL_CONFIG_NAME: &str = "config.toml";
const MODULE_FILE: &str = "go.mod";

/// Resolves the config file for checking `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(project_dir, explicit, global_config_dir())
}

fn resolve_with_global(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = find_project_config(project_dir) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, |candidate| {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        })
}

/// Walks from `start` towards the filesystem root. The module root is the
/// last directory searched.
fn find_project_config(start: &Path) -> Option<PathBuf> {
    let start = std::fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

    for dir in start.ancestors() {
        if let Some(found) = PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            return Some(found);
        }
        if dir.join(MODULE_FILE).is_file() {
            break;
        }
    }
    None
}

/// Global config directory: `$GONAMES_CONFIG_DIR`, else `~/.gonames/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("GONAMES_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".gonames")))
}
