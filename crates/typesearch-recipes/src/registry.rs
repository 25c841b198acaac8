//! Looking up recipes by name and building them from configuration.

use crate::find_types::{self, FindTypes};
use tracing::debug;
use typesearch_core::{Config, RecipeBox, RecipeConfig, RecipeError};

/// Static information about a built-in recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeInfo {
    /// Kebab-case name.
    pub name: &'static str,
    /// Recipe code.
    pub code: &'static str,
    /// What the recipe does.
    pub description: &'static str,
    /// Option names the recipe accepts.
    pub options: &'static [&'static str],
}

/// Returns every built-in recipe.
#[must_use]
pub fn available_recipes() -> Vec<RecipeInfo> {
    vec![RecipeInfo {
        name: find_types::NAME,
        code: find_types::CODE,
        description: find_types::DESCRIPTION,
        options: &[find_types::TYPE_OPTION],
    }]
}

/// Builds one recipe from its configuration entry.
///
/// # Errors
///
/// Returns an error if the name is unknown or an option is missing or
/// invalid.
pub fn recipe_from_config(config: &RecipeConfig) -> Result<RecipeBox, RecipeError> {
    match config.name.as_str() {
        find_types::NAME => Ok(Box::new(FindTypes::from_config(config)?)),
        other => Err(RecipeError::UnknownRecipe {
            name: other.to_string(),
        }),
    }
}

/// Builds every enabled recipe in `config`, in order.
///
/// # Errors
///
/// Returns the first error from [`recipe_from_config`].
pub fn load_recipes(config: &Config) -> Result<Vec<RecipeBox>, RecipeError> {
    config
        .recipes
        .iter()
        .filter(|entry| {
            let enabled = entry.is_enabled();
            if !enabled {
                debug!("Skipping disabled recipe: {}", entry.name);
            }
            enabled
        })
        .map(recipe_from_config)
        .collect()
}
