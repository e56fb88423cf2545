//! CLI Doctor Command
//!
//! Runs config validation and prints the findings with a redacted snapshot.

use anyhow::{bail, Result};

use gork_config::GorkConfig;

pub fn run(config: &GorkConfig) -> Result<()> {
    println!("\n🔍 Running gork doctor...\n");

    println!("Configuration:");
    println!("{}", serde_json::to_string_pretty(&gork_config::redact(config))?);
    println!();

    let report = gork_config::validate(config);
    for error in &report.errors {
        println!("  🔴 {}: {}", error.path, error.message);
    }
    for warning in &report.warnings {
        println!("  🟡 {}: {}", warning.path, warning.message);
    }

    println!();
    if !report.is_valid() {
        println!("❌ Some checks failed! Please fix the errors above.");
        bail!("{} config error(s)", report.errors.len());
    }
    if report.warnings.is_empty() {
        println!("✅ All checks passed!");
    } else {
        println!("✅ No errors, {} warning(s).", report.warnings.len());
    }
    Ok(())
}
