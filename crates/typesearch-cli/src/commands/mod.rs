//! Subcommand implementations.

pub mod find;
pub mod init;
pub mod list_recipes;
pub mod output;
pub mod run;

use crate::config_resolver::ConfigSource;
use anyhow::{Context, Result};
use typesearch_core::Config;

/// Loads the resolved configuration, or defaults when none was found.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Prints a recipe error as a diagnostic and exits with status 2.
pub fn exit_with_diagnostic(err: typesearch_core::RecipeError) -> ! {
    eprintln!("{:?}", miette::Report::new(err));
    std::process::exit(2);
}
