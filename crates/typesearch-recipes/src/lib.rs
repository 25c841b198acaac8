//! # typesearch-recipes
//!
//! Built-in search recipes for typesearch.
//!
//! ## Available Recipes
//!
//! | Code | Name | Options | Description |
//! |------|------|---------|-------------|
//! | TS001 | `find-types` | `fully_qualified_type_name` | Finds explicit references to a type, ignoring imports |
//!
//! ## Usage
//!
//! ```
//! use typesearch_core::tree::{ClassDeclaration, Import, VariableDeclarations};
//! use typesearch_core::{CompilationUnit, NameTree};
//! use typesearch_recipes::FindTypes;
//!
//! // import pkg.Foo; class C { pkg.Foo f; }
//! let tree = CompilationUnit::new("C.java")
//!     .with_import(Import::new("pkg.Foo"))
//!     .with_class(
//!         ClassDeclaration::new("C")
//!             .with_member(VariableDeclarations::single(NameTree::class("pkg.Foo"), "f")),
//!     );
//!
//! let found = FindTypes::find(&tree, "pkg.Foo")?;
//! assert_eq!(found.len(), 1);
//! # Ok::<(), typesearch_core::RecipeError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// The `find-types` recipe.
pub mod find_types;
mod registry;

pub use find_types::{is_type_reference, FindTypes};
pub use registry::{available_recipes, load_recipes, recipe_from_config, RecipeInfo};

/// Re-export core types for convenience.
pub use typesearch_core::{Recipe, RecipeBox, RecipeError};
