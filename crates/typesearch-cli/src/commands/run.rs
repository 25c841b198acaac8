//! Run command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;
use typesearch_core::Runner;
use typesearch_recipes::load_recipes;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the recipes configured in `source`.
pub fn run(
    path: Option<&Path>,
    format: OutputFormat,
    exclude: Vec<String>,
    fail_on_match: bool,
    source: &ConfigSource,
) -> Result<()> {
    let config = super::load_config(source)?;
    let recipes = load_recipes(&config).unwrap_or_else(|e| super::exit_with_diagnostic(e));
    if recipes.is_empty() {
        bail!("No recipes enabled. Add a [[recipes]] entry to the config or use `typesearch find`.");
    }

    let mut builder = Runner::builder().config(config).recipes(recipes).excludes(exclude);
    if let Some(path) = path {
        builder = builder.root(path);
    }
    let runner = builder.build().context("Failed to build runner")?;

    tracing::info!(
        "Searching {:?} with {} recipes",
        runner.root(),
        runner.recipe_count()
    );

    let report = runner.run().context("Search failed")?;

    super::output::print(&report, format)?;

    if fail_on_match && !report.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
