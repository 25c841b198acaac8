//! Attributed syntax tree.
//!
//! The tree is Java-shaped: a [`CompilationUnit`] holds a package, imports and
//! class declarations, and every position that names a type holds a
//! [`NameTree`]. Trees are produced elsewhere (a parser plus a type
//! attribution pass) and exchanged as JSON; this crate only reads them and
//! produces annotated copies.
//!
//! Every node carries a [`NodeId`] and a [`Markers`] list. Equality and
//! hashing of nodes use the id alone, so a copy of a node with an extra
//! marker is the same node.

use crate::marker::{Marker, Markers};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Creates a fresh random id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// Missing ids in serialized trees are filled with fresh ones.
impl Default for NodeId {
    fn default() -> Self {
        Self::random()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a tree node, as recorded by a [`Cursor`](crate::Cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`CompilationUnit`]
    CompilationUnit,
    /// [`Package`]
    Package,
    /// [`Import`]
    Import,
    /// [`ClassDeclaration`]
    ClassDeclaration,
    /// [`TypeParameter`]
    TypeParameter,
    /// [`Annotation`]
    Annotation,
    /// [`Block`]
    Block,
    /// [`MethodDeclaration`]
    MethodDeclaration,
    /// [`VariableDeclarations`]
    VariableDeclarations,
    /// [`NamedVariable`]
    NamedVariable,
    /// [`Return`]
    Return,
    /// [`Try`]
    Try,
    /// [`Catch`]
    Catch,
    /// [`Identifier`]
    Identifier,
    /// [`FieldAccess`]
    FieldAccess,
    /// [`ParameterizedType`]
    ParameterizedType,
    /// [`ArrayType`]
    ArrayType,
    /// [`Wildcard`]
    Wildcard,
    /// [`MultiCatch`]
    MultiCatch,
    /// [`Literal`]
    Literal,
    /// [`MethodInvocation`]
    MethodInvocation,
    /// [`NewClass`]
    NewClass,
    /// [`NewArray`]
    NewArray,
    /// [`TypeCast`]
    TypeCast,
    /// [`InstanceOf`]
    InstanceOf,
    /// [`ClassLiteral`]
    ClassLiteral,
}

/// Common capabilities of every tree node.
pub trait Tree {
    /// Returns the node's identity.
    fn id(&self) -> NodeId;

    /// Returns the node's kind.
    fn kind(&self) -> NodeKind;

    /// Returns the node's markers.
    fn markers(&self) -> &Markers;

    /// Returns the node's markers for in-place edits.
    fn markers_mut(&mut self) -> &mut Markers;

    /// Returns this node with its markers replaced.
    #[must_use]
    fn with_markers(mut self, markers: Markers) -> Self
    where
        Self: Sized,
    {
        *self.markers_mut() = markers;
        self
    }

    /// Returns this node with `marker` appended to its markers.
    ///
    /// All other fields, including the id, are left as they are.
    #[must_use]
    fn with_marker(mut self, marker: Marker) -> Self
    where
        Self: Sized,
    {
        self.markers_mut().push(marker);
        self
    }
}

/// Implements [`Tree`] and identity equality for node structs with
/// `id` and `markers` fields.
macro_rules! tree_node {
    ($($ty:ident),+ $(,)?) => {$(
        impl $crate::tree::Tree for $ty {
            fn id(&self) -> $crate::tree::NodeId {
                self.id
            }

            fn kind(&self) -> $crate::tree::NodeKind {
                $crate::tree::NodeKind::$ty
            }

            fn markers(&self) -> &$crate::marker::Markers {
                &self.markers
            }

            fn markers_mut(&mut self) -> &mut $crate::marker::Markers {
                &mut self.markers
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.id, state);
            }
        }
    )+};
}

/// Implements [`Tree`], identity equality and `From` conversions for enums
/// whose variants each wrap the node struct of the same name.
macro_rules! tree_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::tree::Tree for $ty {
            fn id(&self) -> $crate::tree::NodeId {
                match self {
                    $(Self::$variant(node) => $crate::tree::Tree::id(node),)+
                }
            }

            fn kind(&self) -> $crate::tree::NodeKind {
                match self {
                    $(Self::$variant(node) => $crate::tree::Tree::kind(node),)+
                }
            }

            fn markers(&self) -> &$crate::marker::Markers {
                match self {
                    $(Self::$variant(node) => $crate::tree::Tree::markers(node),)+
                }
            }

            fn markers_mut(&mut self) -> &mut $crate::marker::Markers {
                match self {
                    $(Self::$variant(node) => $crate::tree::Tree::markers_mut(node),)+
                }
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::tree::Tree::id(self) == $crate::tree::Tree::id(other)
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&$crate::tree::Tree::id(self), state);
            }
        }

        $(
            impl From<$variant> for $ty {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )+
    };
}

mod declaration;
mod expression;
mod name;
mod statement;

pub use declaration::{Annotation, ClassDeclaration, CompilationUnit, Import, Package, TypeParameter};
pub use expression::{
    ClassLiteral, Expression, InstanceOf, Literal, MethodInvocation, NewArray, NewClass, Select,
    TypeCast,
};
pub use name::{
    ArrayType, BoundKind, FieldAccess, Identifier, MultiCatch, NameTree, ParameterizedType,
    Wildcard,
};
pub use statement::{
    Block, Catch, MethodDeclaration, NamedVariable, Return, Statement, Try, VariableDeclarations,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java_type::JavaType;
    use crate::marker::{Position, SearchResult};

    #[test]
    fn marking_keeps_identity() {
        let original = Identifier::new("Foo", Some(JavaType::class("pkg.Foo")));
        let marked = original
            .clone()
            .with_marker(Marker::SearchResult(SearchResult::new("find-types")));

        assert_eq!(marked, original);
        assert_eq!(marked.id(), original.id());
        assert!(marked.markers().has_search_result());
        assert!(original.markers().is_empty());
    }

    #[test]
    fn enum_identity_follows_wrapped_node() {
        let ident = Identifier::new("Foo", None);
        let id = ident.id();
        let name: NameTree = ident.into();
        let expr: Expression = Identifier::new("x", None).into();

        assert_eq!(name.id(), id);
        assert_eq!(name.kind(), NodeKind::Identifier);
        assert_ne!(name.id(), expr.id());
    }

    #[test]
    fn with_markers_replaces() {
        let ident = Identifier::new("Foo", None)
            .with_marker(Marker::SearchResult(SearchResult::new("find-types")));
        let replaced = ident.with_markers(
            [Marker::Position(Position::new(1, 1))]
                .into_iter()
                .collect(),
        );
        assert!(!replaced.markers().has_search_result());
        assert_eq!(replaced.markers().position(), Some(Position::new(1, 1)));
    }
}
