//! Batch runner: applies recipes to every tree file under a root.

use crate::config::{Config, ConfigError};
use crate::recipe::{Recipe, RecipeBox};
use crate::report::{Finding, SearchReport};
use crate::search_results::collect_search_results;
use crate::tree::CompilationUnit;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a run.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// IO error reading or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A tree file is not a valid serialized tree.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Builder for configuring a [`Runner`].
#[derive(Default)]
pub struct RunnerBuilder {
    root: Option<PathBuf>,
    recipes: Vec<RecipeBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: Option<bool>,
}

impl RunnerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory searched for tree files.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a recipe.
    #[must_use]
    pub fn recipe<R: Recipe + 'static>(mut self, recipe: R) -> Self {
        self.recipes.push(Box::new(recipe));
        self
    }

    /// Adds several boxed recipes.
    #[must_use]
    pub fn recipes(mut self, recipes: impl IntoIterator<Item = RecipeBox>) -> Self {
        self.recipes.extend(recipes);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration. Its `[runner]` table supplies the root,
    /// exclude patterns and parse-error policy unless set on the builder.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on the first unparsable tree file (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = Some(fail);
        self
    }

    /// Builds the runner.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn build(self) -> Result<Runner, RunnerError> {
        let runner_config = self.config.map(|c| c.runner).unwrap_or_default();

        let root = self.root.unwrap_or(runner_config.root);
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(runner_config.exclude);

        Ok(Runner {
            root,
            recipes: self.recipes,
            exclude_patterns,
            fail_on_parse_error: self
                .fail_on_parse_error
                .unwrap_or(runner_config.fail_on_parse_error),
        })
    }
}

/// Applies recipes to tree files and aggregates their markers.
///
/// Use [`Runner::builder()`] to construct an instance.
pub struct Runner {
    root: PathBuf,
    recipes: Vec<RecipeBox>,
    exclude_patterns: Vec<String>,
    fail_on_parse_error: bool,
}

impl Runner {
    /// Creates a new builder for configuring a runner.
    #[must_use]
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    /// Returns the root directory being searched.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered recipes.
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// Runs every recipe over every tree file and returns the findings.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or if a file cannot be
    /// parsed and the runner is set to fail on parse errors.
    pub fn run(&self) -> Result<SearchReport, RunnerError> {
        self.run_with(|_, _| Ok(()))
    }

    /// Like [`Runner::run`], also handing each annotated tree to `sink`.
    ///
    /// `sink` receives the tree file's path relative to the root.
    ///
    /// # Errors
    ///
    /// As for [`Runner::run`], plus any error returned by `sink`.
    pub fn run_with<S>(&self, mut sink: S) -> Result<SearchReport, RunnerError>
    where
        S: FnMut(&Path, &CompilationUnit) -> std::io::Result<()>,
    {
        info!("Starting search at {:?}", self.root);

        let mut report = SearchReport::new();
        let files = self.discover_files()?;

        info!("Found {} tree files to search", files.len());

        for file_path in &files {
            let tree = match self.read_tree(file_path) {
                Ok(tree) => tree,
                Err(RunnerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(RunnerError::Parse { path, message });
                    }
                    continue;
                }
                Err(e) => return Err(e),
            };

            let relative = self.relative(file_path);
            let (annotated, findings) = self.run_tree_at(&relative, tree);
            sink(&relative, &annotated)?;

            report.findings.extend(findings);
            report.files_searched += 1;
        }

        // Sort findings by file, then position
        report.findings.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Search complete: {} findings in {} files",
            report.findings.len(),
            report.files_searched
        );

        Ok(report)
    }

    /// Applies every recipe to one in-memory tree.
    ///
    /// Returns the annotated tree and its findings, located at the tree's
    /// own `source_path`.
    #[must_use]
    pub fn run_tree(&self, tree: CompilationUnit) -> (CompilationUnit, Vec<Finding>) {
        let path = tree.source_path.clone();
        self.run_tree_at(&path, tree)
    }

    fn run_tree_at(&self, file: &Path, tree: CompilationUnit) -> (CompilationUnit, Vec<Finding>) {
        let mut tree = tree;
        for recipe in &self.recipes {
            debug!("Running {} on {}", recipe.display_name(), file.display());
            tree = recipe.run(tree);
        }

        let findings = collect_search_results(&tree)
            .iter()
            .flat_map(|marked| Finding::from_marked(file, marked, |name| self.code_of(name)))
            .collect::<Vec<_>>();
        (tree, findings)
    }

    fn code_of(&self, recipe_name: &str) -> String {
        self.recipes
            .iter()
            .find(|r| r.name() == recipe_name)
            .map_or_else(|| "-".to_string(), |r| r.code().to_string())
    }

    fn read_tree(&self, path: &Path) -> Result<CompilationUnit, RunnerError> {
        debug!("Reading: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let mut tree: CompilationUnit =
            serde_json::from_str(&content).map_err(|e| RunnerError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        if tree.source_path.as_os_str().is_empty() {
            tree.source_path = self.relative(path);
        }
        Ok(tree)
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }

    /// Discovers all tree files to search.
    fn discover_files(&self) -> Result<Vec<PathBuf>, RunnerError> {
        let pattern = format!("{}/**/*.json", self.root.display());
        let mut files = Vec::new();

        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| RunnerError::Io(e.into_error()))?;

            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        Ok(files)
    }

    /// Checks if a path should be excluded.
    ///
    /// Patterns apply to the path below the root only, so directories above
    /// the root never exclude anything.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = self.relative(path);
        let relative_str = relative.to_string_lossy();
        let rooted = format!("/{relative_str}");

        self.exclude_patterns.iter().any(|pattern| {
            let by_glob = glob::Pattern::new(pattern)
                .is_ok_and(|glob_pattern| glob_pattern.matches(&relative_str));

            // Also check as substring for patterns like "**/build/**"
            let normalized_pattern = pattern.replace("**", "");
            by_glob || (!normalized_pattern.is_empty() && rooted.contains(&normalized_pattern))
        })
    }
}
