//! List rules command implementation.

use gonames::PackageNamesChecker;
use gonames_core::Checker;

/// Runs the list-rules command.
pub fn run() {
    let checker = PackageNamesChecker::new();

    println!("Available rules:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    println!(
        "{:<10} {:<20} {}",
        checker.code(),
        checker.name(),
        checker.description()
    );

    println!("\nConfigure it under [rules.{}] in gonames.toml.", gonames::NAME);
}
