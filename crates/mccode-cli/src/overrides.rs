//! Gathering overrides from the command line and from files.

use std::path::Path;

use anyhow::{Context, Result};
use mccode_flavor::Overrides;

/// Read a JSON overrides file. Keys are field names or header symbols.
pub fn from_file(path: &Path) -> Result<Overrides> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read overrides file '{}'", path.display()))?;
    let overrides: Overrides = serde_json::from_str(&text)
        .with_context(|| format!("Invalid overrides file '{}'", path.display()))?;
    log::debug!(
        "loaded {} override(s) from {}",
        overrides.len(),
        path.display()
    );
    Ok(overrides)
}

/// Combine an optional overrides file with `-D` definitions. Definitions
/// are applied after the file, and later definitions win over earlier ones.
pub fn collect(file: Option<&Path>, defines: &[String]) -> Result<Overrides> {
    let mut overrides = match file {
        Some(path) => from_file(path)?,
        None => Overrides::new(),
    };
    for def in defines {
        overrides
            .define(def)
            .with_context(|| format!("Bad definition -D {}", def))?;
    }
    Ok(overrides)
}
