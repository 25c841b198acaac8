//! Find command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use typesearch_core::{CompilationUnit, Runner};
use typesearch_recipes::FindTypes;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Arguments of `typesearch find`.
pub struct FindArgs<'a> {
    pub type_name: &'a str,
    pub path: &'a Path,
    pub format: OutputFormat,
    pub emit: Option<&'a Path>,
    pub exclude: Vec<String>,
    pub fail_on_match: bool,
    pub source: &'a ConfigSource,
}

/// Runs the find command.
pub fn run(args: &FindArgs<'_>) -> Result<()> {
    let recipe = FindTypes::new(args.type_name).unwrap_or_else(|e| super::exit_with_diagnostic(e));
    let config = super::load_config(args.source)?;

    let runner = Runner::builder()
        .config(config)
        .root(args.path)
        .excludes(args.exclude.iter().cloned())
        .recipe(recipe)
        .build()
        .context("Failed to build runner")?;

    tracing::info!("Searching {:?} for {}", runner.root(), args.type_name);

    let report = match args.emit {
        Some(dir) => runner.run_with(|relative, tree| emit_tree(dir, relative, tree)),
        None => runner.run(),
    }
    .context("Search failed")?;

    super::output::print(&report, args.format)?;

    if args.fail_on_match && !report.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

/// Writes an annotated tree to `dir`, mirroring its path under the root.
fn emit_tree(dir: &Path, relative: &Path, tree: &CompilationUnit) -> std::io::Result<()> {
    let target = dir.join(relative);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&target, tree.to_json()?)?;
    tracing::debug!("Wrote {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use typesearch_core::tree::{ClassDeclaration, VariableDeclarations};
    use typesearch_core::{collect_search_results, NameTree, Recipe};

    #[test]
    fn emitted_trees_keep_their_markers() {
        let out = TempDir::new().unwrap();
        let tree = CompilationUnit::new("C.java").with_class(
            ClassDeclaration::new("pkg.C")
                .with_member(VariableDeclarations::single(NameTree::class("pkg.Foo"), "f")),
        );
        let annotated = FindTypes::new("pkg.Foo").unwrap().run(tree);

        emit_tree(out.path(), Path::new("nested/C.json"), &annotated).unwrap();

        let written = std::fs::read_to_string(out.path().join("nested/C.json")).unwrap();
        let reread = CompilationUnit::from_json(&written).unwrap();
        assert_eq!(collect_search_results(&reread).len(), 1);
    }
}
