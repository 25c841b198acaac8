//! The recipe abstraction: a named, reusable unit of work over a tree.

use crate::fold::{self, Fold};
use crate::tree::CompilationUnit;
use crate::type_name::TypeNameError;
use miette::Diagnostic;
use thiserror::Error;

/// A named tree transformation, typically a search that only adds markers.
///
/// A recipe holds its configuration and nothing else. Each call to
/// [`Recipe::visitor`] hands out a fresh folder, so one recipe can run over
/// many trees, from many threads at once.
///
/// # Example
///
/// ```
/// use typesearch_core::fold::Fold;
/// use typesearch_core::{CompilationUnit, Recipe};
///
/// struct Noop;
/// impl Fold for Noop {}
///
/// struct DoNothing;
///
/// impl Recipe for DoNothing {
///     fn name(&self) -> &'static str { "do-nothing" }
///     fn code(&self) -> &'static str { "TS999" }
///
///     fn visitor(&self) -> Box<dyn Fold + '_> {
///         Box::new(Noop)
///     }
/// }
///
/// let tree = CompilationUnit::new("A.java");
/// let id = tree.id;
/// assert_eq!(DoNothing.run(tree).id, id);
/// ```
pub trait Recipe: Send + Sync {
    /// Returns the kebab-case name of this recipe (e.g., "find-types").
    fn name(&self) -> &'static str;

    /// Returns the recipe code (e.g., "TS001").
    fn code(&self) -> &'static str;

    /// Returns a human-readable name for this configured instance.
    ///
    /// Defaults to [`Recipe::name`].
    fn display_name(&self) -> String {
        self.name().to_string()
    }

    /// Returns a brief description of what this recipe does.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the folder that performs one run of this recipe.
    fn visitor(&self) -> Box<dyn Fold + '_>;

    /// Applies this recipe to `tree`.
    fn run(&self, tree: CompilationUnit) -> CompilationUnit {
        let mut visitor = self.visitor();
        fold::walk(visitor.as_mut(), tree)
    }
}

/// Type alias for boxed Recipe trait objects.
pub type RecipeBox = Box<dyn Recipe>;

/// Errors from constructing a recipe.
#[derive(Debug, Error, Diagnostic)]
pub enum RecipeError {
    /// A required option was not supplied.
    #[error("recipe `{recipe}` requires option `{option}`")]
    #[diagnostic(code(typesearch::recipe::missing_option))]
    MissingOption {
        /// Recipe name.
        recipe: String,
        /// Option name.
        option: String,
    },

    /// An option that should be a type name is not a valid one.
    #[error("recipe `{recipe}`: invalid type name")]
    #[diagnostic(code(typesearch::recipe::invalid_type_name))]
    InvalidTypeName {
        /// Recipe name.
        recipe: String,
        /// Validation failure.
        #[source]
        #[diagnostic_source]
        source: TypeNameError,
    },

    /// No recipe with this name exists.
    #[error("unknown recipe `{name}`")]
    #[diagnostic(
        code(typesearch::recipe::unknown),
        help("run `typesearch list-recipes` to see the available recipes")
    )]
    UnknownRecipe {
        /// The requested name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::marker::{Marker, SearchResult};
    use crate::tree::{ClassDeclaration, Tree};

    struct MarkClassNames;

    impl Recipe for MarkClassNames {
        fn name(&self) -> &'static str {
            "mark-class-names"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }

        fn visitor(&self) -> Box<dyn Fold + '_> {
            Box::new(ClassNameMarker { recipe: self })
        }
    }

    struct ClassNameMarker<'a> {
        recipe: &'a MarkClassNames,
    }

    impl Fold for ClassNameMarker<'_> {
        fn fold_class_declaration(
            &mut self,
            mut node: ClassDeclaration,
            cursor: &mut Cursor,
        ) -> ClassDeclaration {
            node = fold::fold_class_declaration(self, node, cursor);
            node.name = node
                .name
                .with_marker(Marker::SearchResult(SearchResult::for_recipe(self.recipe)));
            node
        }
    }

    #[test]
    fn recipe_trait_defaults() {
        let recipe = MarkClassNames;
        assert_eq!(recipe.name(), "mark-class-names");
        assert_eq!(recipe.display_name(), "mark-class-names");
        assert_eq!(recipe.description(), "");
    }

    #[test]
    fn run_applies_visitor() {
        let tree = CompilationUnit::new("A.java").with_class(ClassDeclaration::new("pkg.A"));
        let out = MarkClassNames.run(tree);

        let results: Vec<_> = out.classes[0].name.markers().search_results().collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].recipe, "mark-class-names");
    }

    #[test]
    fn invalid_type_name_keeps_source() {
        let err = RecipeError::InvalidTypeName {
            recipe: "find-types".to_string(),
            source: TypeNameError::Empty,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "recipe `find-types`: invalid type name");
    }
}
