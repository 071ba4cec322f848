//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# gonames configuration

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./pkg"

# Glob patterns to exclude from analysis
exclude = [
    "**/vendor/**",
    "**/testdata/**",
]

# Respect .gitignore files
respect_gitignore = true

[rules.package-names]
enabled = true
# severity = "warning"  # Override default severity

# Packages exempt from all naming checks
entry_point_packages = ["main"]

# Files exempt from all naming checks
test_suffixes = ["_test.go"]

# Suffix stripped from file names before checking them
source_suffix = ".go"
"#;

const CONFIG_FILE_NAME: &str = "gonames.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let path = write_config(Path::new("."), force)?;

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to configure the rule");
    println!("  2. Run: gonames check");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}
