//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# typesearch configuration

[runner]
# Directory holding tree files (default: current directory)
# root = "./trees"

# Glob patterns to exclude from the search
exclude = [
    "**/build/**",
    "**/target/**",
]

# Stop at the first tree file that cannot be parsed
fail_on_parse_error = false

# Recipes applied by `typesearch run`, in order.
# The same recipe may be listed several times with different options.

[[recipes]]
name = "find-types"
fully_qualified_type_name = "java.util.List"

# [[recipes]]
# name = "find-types"
# enabled = false
# fully_qualified_type_name = "java.util.Map"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("typesearch.toml");
    write_config(config_path, force)?;

    println!("Created typesearch.toml");
    println!("\nNext steps:");
    println!("  1. Edit typesearch.toml to choose the types to search for");
    println!("  2. Run: typesearch run ./trees");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
