//! # typesearch-core
//!
//! Core framework for structural search over attributed syntax trees.
//!
//! This crate provides the tree model and the machinery recipes are built
//! from. It includes:
//!
//! - [`tree`]: a Java-shaped syntax tree whose name nodes carry resolved
//!   [`JavaType`]s, exchanged as JSON
//! - [`visit`] and [`fold`]: read-only and rewriting traversals that thread a
//!   [`Cursor`] of ancestors through the walk
//! - [`Marker`]s for flagging nodes without changing them
//! - [`Recipe`] trait for named, reusable searches
//! - [`Runner`] for applying recipes to a directory of tree files
//!
//! ## Example
//!
//! ```ignore
//! use typesearch_core::Runner;
//! use typesearch_recipes::FindTypes;
//!
//! let runner = Runner::builder()
//!     .root("./trees")
//!     .recipe(FindTypes::new("java.util.List")?)
//!     .build()?;
//!
//! let report = runner.run()?;
//! for finding in &report.findings {
//!     println!("{finding}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod cursor;
mod marker;
mod recipe;
mod report;
mod runner;
mod search_results;
mod type_name;

/// Read-only traversal.
pub mod visit;

/// Rewriting traversal.
pub mod fold;

/// Resolved types.
pub mod java_type;

/// The syntax tree.
pub mod tree;

pub use config::{Config, ConfigError, RecipeConfig, RunnerConfig};
pub use cursor::{Cursor, CursorEntry};
pub use java_type::{ClassKind, ClassType, JavaType, Primitive};
pub use marker::{Marker, Markers, Position, SearchResult};
pub use recipe::{Recipe, RecipeBox, RecipeError};
pub use report::{Finding, Location, SearchReport};
pub use runner::{Runner, RunnerBuilder, RunnerError};
pub use search_results::{collect_search_results, strip_search_results, MarkedName};
pub use tree::{CompilationUnit, NameTree, NodeId, NodeKind, Tree};
pub use type_name::{TypeName, TypeNameError};
