//! Recipe that finds every explicit reference to a type.
//!
//! A reference is any type-name position (field and variable types, method
//! return and parameter types, `throws`, catch types, casts, `instanceof`,
//! `new`, class literals, the class of a static call, `extends`/`implements`,
//! annotation types, type and wildcard bounds, type arguments) whose resolved
//! type is a class with exactly the requested fully qualified name. The subject of an `import` is not a reference: it
//! names the type without using it.
//!
//! Matching is by exact name. Searching for `java.util.Map` does not find
//! `java.util.Map$Entry`, and a bare simple name only matches a class in the
//! default package.
//!
//! # Configuration
//!
//! - `fully_qualified_type_name`: the type to search for (required)
//!
//! # Modes
//!
//! As a [`Recipe`], every match in the output tree gets a
//! [`SearchResult`] marker. [`FindTypes::find`] returns the matching nodes of
//! a borrowed tree instead. Both use [`is_type_reference`], so they always
//! agree. Either mode can start from a whole compilation unit or from a
//! subtree such as one method.

use std::collections::HashSet;
use tracing::trace;
use typesearch_core::fold::{self, Fold, Foldable};
use typesearch_core::java_type;
use typesearch_core::visit::{self, Visit, Visitable};
use typesearch_core::{
    Cursor, Marker, NameTree, NodeKind, Recipe, RecipeConfig, RecipeError, SearchResult, Tree,
    TypeName,
};

/// Recipe code for find-types.
pub const CODE: &str = "TS001";

/// Recipe name for find-types.
pub const NAME: &str = "find-types";

/// What find-types does.
pub const DESCRIPTION: &str = "Finds explicit references to a fully qualified type, ignoring imports";

/// Name of the option holding the type to search for.
pub const TYPE_OPTION: &str = "fully_qualified_type_name";

/// Returns true if `name` is a use of the type `target`.
///
/// That is: the resolved type of `name` views as a class, the class's fully
/// qualified name equals `target`, and `cursor` has no enclosing import.
/// Unresolved and non-class types are never a match.
///
/// # Panics
///
/// In debug builds, panics if `cursor` does not track ancestors: without
/// them the import check cannot see the enclosing import.
#[must_use]
pub fn is_type_reference(name: &NameTree, target: &TypeName, cursor: &Cursor) -> bool {
    debug_assert!(cursor.is_tracking(), "import exclusion needs ancestors");
    java_type::as_class(name.java_type())
        .is_some_and(|class| target.matches(class.fully_qualified_name()))
        && cursor.first_enclosing(NodeKind::Import).is_none()
}

/// Finds explicit references to one fully qualified type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindTypes {
    target: TypeName,
}

impl FindTypes {
    /// Creates the recipe for `fully_qualified_type_name`.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::InvalidTypeName`] if the name is empty or
    /// malformed.
    pub fn new(fully_qualified_type_name: &str) -> Result<Self, RecipeError> {
        let target =
            TypeName::new(fully_qualified_type_name).map_err(|source| {
                RecipeError::InvalidTypeName {
                    recipe: NAME.to_string(),
                    source,
                }
            })?;
        Ok(Self { target })
    }

    /// Creates the recipe from a configuration entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the type option is missing or invalid.
    pub fn from_config(config: &RecipeConfig) -> Result<Self, RecipeError> {
        let name = config
            .get_str(TYPE_OPTION)
            .ok_or_else(|| RecipeError::MissingOption {
                recipe: NAME.to_string(),
                option: TYPE_OPTION.to_string(),
            })?;
        Self::new(name)
    }

    /// Returns the type searched for.
    #[must_use]
    pub fn target(&self) -> &TypeName {
        &self.target
    }

    /// Returns the references in `tree`, without modifying it.
    ///
    /// The set holds the original nodes; nothing is marked. A subtree
    /// root has no known ancestors, so a bare import name passed as `tree`
    /// counts as a reference.
    #[must_use]
    pub fn collect<'t, T>(&self, tree: &'t T) -> HashSet<&'t NameTree>
    where
        T: Visitable + ?Sized,
    {
        let mut found = HashSet::new();
        visit::walk(
            &mut CollectTypes {
                target: &self.target,
            },
            tree,
            &mut found,
        );
        found
    }

    /// Returns the references to `fully_qualified_type_name` in `tree`.
    ///
    /// An empty set means the type is not referenced.
    ///
    /// # Errors
    ///
    /// Returns an error if the type name is empty or malformed.
    pub fn find<'t, T>(
        tree: &'t T,
        fully_qualified_type_name: &str,
    ) -> Result<HashSet<&'t NameTree>, RecipeError>
    where
        T: Visitable + ?Sized,
    {
        Ok(Self::new(fully_qualified_type_name)?.collect(tree))
    }

    /// Returns `tree` with every reference marked.
    ///
    /// [`Recipe::run`] does the same for a whole compilation unit.
    #[must_use]
    pub fn mark<T: Foldable>(&self, tree: T) -> T {
        fold::walk(&mut MarkTypes { recipe: self }, tree)
    }
}

impl Recipe for FindTypes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn display_name(&self) -> String {
        format!("Find type `{}`", self.target)
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn visitor(&self) -> Box<dyn Fold + '_> {
        Box::new(MarkTypes { recipe: self })
    }
}

struct MarkTypes<'a> {
    recipe: &'a FindTypes,
}

impl Fold for MarkTypes<'_> {
    fn tracks_ancestors(&self) -> bool {
        true
    }

    fn fold_type_name(&mut self, node: NameTree, cursor: &mut Cursor) -> NameTree {
        let node = fold::fold_type_name(self, node, cursor);
        if is_type_reference(&node, &self.recipe.target, cursor) {
            trace!(node = %node.id(), snippet = %node, "marking reference to {}", self.recipe.target);
            node.with_marker(Marker::SearchResult(SearchResult::for_recipe(self.recipe)))
        } else {
            node
        }
    }
}

struct CollectTypes<'a> {
    target: &'a TypeName,
}

impl<'t> Visit<'t, HashSet<&'t NameTree>> for CollectTypes<'_> {
    fn tracks_ancestors(&self) -> bool {
        true
    }

    fn visit_type_name(
        &mut self,
        node: &'t NameTree,
        cursor: &mut Cursor,
        found: &mut HashSet<&'t NameTree>,
    ) {
        visit::visit_type_name(self, node, cursor, found);
        if is_type_reference(node, self.target, cursor) {
            trace!(node = %node.id(), snippet = %node, "found reference to {}", self.target);
            found.insert(node);
        }
    }
}
