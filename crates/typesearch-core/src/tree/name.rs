//! Name-bearing nodes.

use super::expression::Expression;
use super::NodeId;
use crate::java_type::JavaType;
use crate::marker::Markers;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A simple name such as `Foo` or `x`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identifier {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// The name as written.
    pub simple_name: String,
    /// Resolved type, if the name denotes something typed.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl Identifier {
    /// Creates an identifier with a fresh id.
    #[must_use]
    pub fn new(simple_name: impl Into<String>, ty: Option<JavaType>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            simple_name: simple_name.into(),
            ty,
        }
    }
}

/// A qualified name or member access: `target.name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldAccess {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Qualifier, e.g. the package `pkg` in `pkg.Foo`.
    pub target: Box<Expression>,
    /// The selected name.
    pub name: Identifier,
    /// Resolved type of the whole access.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl FieldAccess {
    /// Creates a field access with a fresh id.
    #[must_use]
    pub fn new(target: impl Into<Expression>, name: Identifier, ty: Option<JavaType>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            target: Box::new(target.into()),
            name,
            ty,
        }
    }
}

/// A generic type applied to arguments: `List<Foo>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterizedType {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// The generic type being applied.
    pub clazz: Box<NameTree>,
    /// Type arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<NameTree>,
    /// Resolved type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl ParameterizedType {
    /// Creates a parameterized type with a fresh id.
    ///
    /// The resolved type is derived from the base and argument types when
    /// the base resolves to a class.
    #[must_use]
    pub fn new(clazz: NameTree, type_parameters: Vec<NameTree>) -> Self {
        let ty = crate::java_type::as_class(clazz.java_type()).map(|raw| JavaType::Parameterized {
            raw: raw.clone(),
            type_parameters: type_parameters
                .iter()
                .map(|p| p.java_type().cloned().unwrap_or(JavaType::Unknown))
                .collect(),
        });
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            clazz: Box::new(clazz),
            type_parameters,
            ty,
        }
    }
}

/// An array type: `Foo[]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayType {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Element type.
    pub element_type: Box<NameTree>,
    /// Resolved type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl ArrayType {
    /// Creates a one-dimensional array type with a fresh id.
    #[must_use]
    pub fn new(element_type: NameTree) -> Self {
        let ty = element_type.java_type().map(|element| JavaType::Array {
            element: Box::new(element.clone()),
        });
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            element_type: Box::new(element_type),
            ty,
        }
    }
}

/// Which side a wildcard bound constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundKind {
    /// `? extends Foo`
    Extends,
    /// `? super Foo`
    Super,
}

/// A wildcard type argument: `?`, `? extends Foo` or `? super Foo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wildcard {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Bound direction; `None` for a bare `?`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<BoundKind>,
    /// The bounding type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounded_type: Option<Box<NameTree>>,
    /// Resolved type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl Wildcard {
    /// Creates a bare `?`.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            bound: None,
            bounded_type: None,
            ty: None,
        }
    }

    /// Creates `? extends bounded_type` or `? super bounded_type`.
    #[must_use]
    pub fn bounded(bound: BoundKind, bounded_type: NameTree) -> Self {
        Self {
            bound: Some(bound),
            bounded_type: Some(Box::new(bounded_type)),
            ..Self::unbounded()
        }
    }
}

/// The alternatives of a multi-catch parameter: `IOException | Foo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiCatch {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Caught types, in source order.
    pub alternatives: Vec<NameTree>,
    /// Resolved type (usually the least upper bound of the alternatives).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl MultiCatch {
    /// Creates a multi-catch type over `alternatives`.
    #[must_use]
    pub fn new(alternatives: Vec<NameTree>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            alternatives,
            ty: None,
        }
    }
}

tree_node!(Identifier, FieldAccess, ParameterizedType, ArrayType, Wildcard, MultiCatch);

/// A node that denotes a type by name at a use site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum NameTree {
    /// `Foo`
    Identifier(Identifier),
    /// `pkg.Foo`
    FieldAccess(FieldAccess),
    /// `List<Foo>`
    ParameterizedType(ParameterizedType),
    /// `Foo[]`
    ArrayType(ArrayType),
    /// `? super Foo`
    Wildcard(Wildcard),
    /// `IOException | Foo`
    MultiCatch(MultiCatch),
}

tree_enum!(NameTree {
    Identifier,
    FieldAccess,
    ParameterizedType,
    ArrayType,
    Wildcard,
    MultiCatch,
});

impl NameTree {
    /// Returns the resolved type of this name.
    #[must_use]
    pub fn java_type(&self) -> Option<&JavaType> {
        match self {
            Self::Identifier(n) => n.ty.as_ref(),
            Self::FieldAccess(n) => n.ty.as_ref(),
            Self::ParameterizedType(n) => n.ty.as_ref(),
            Self::ArrayType(n) => n.ty.as_ref(),
            Self::Wildcard(n) => n.ty.as_ref(),
            Self::MultiCatch(n) => n.ty.as_ref(),
        }
    }

    /// Builds a dotted name from `qualified_name`.
    ///
    /// Only the outermost node and its final identifier carry `ty`; the
    /// qualifier segments are left unresolved. A name without dots becomes a
    /// bare [`Identifier`].
    #[must_use]
    pub fn qualified(qualified_name: &str, ty: Option<JavaType>) -> Self {
        let mut segments = qualified_name.split('.');
        let first = segments.next().unwrap_or_default();
        let rest: Vec<&str> = segments.collect();

        let Some((last, middle)) = rest.split_last() else {
            return Identifier::new(first, ty).into();
        };

        let mut target: Expression = Identifier::new(first, None).into();
        for segment in middle {
            target = FieldAccess::new(target, Identifier::new(*segment, None), None).into();
        }
        FieldAccess::new(target, Identifier::new(*last, ty.clone()), ty).into()
    }

    /// Builds a fully qualified reference to the class `fully_qualified_name`.
    #[must_use]
    pub fn class(fully_qualified_name: &str) -> Self {
        Self::qualified(
            fully_qualified_name,
            Some(JavaType::class(fully_qualified_name)),
        )
    }

    /// Builds a simple-name reference (`Foo`) resolved to the class
    /// `fully_qualified_name`.
    #[must_use]
    pub fn simple(simple_name: &str, fully_qualified_name: &str) -> Self {
        Identifier::new(simple_name, Some(JavaType::class(fully_qualified_name))).into()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name)
    }
}

impl fmt::Display for FieldAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.target, self.name)
    }
}

impl fmt::Display for ParameterizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<", self.clazz)?;
        for (i, param) in self.type_parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ">")
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[]", self.element_type)
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?")?;
        match (self.bound, &self.bounded_type) {
            (Some(BoundKind::Extends), Some(bounded)) => write!(f, " extends {bounded}"),
            (Some(BoundKind::Super), Some(bounded)) => write!(f, " super {bounded}"),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for MultiCatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{alternative}")?;
        }
        Ok(())
    }
}

impl fmt::Display for NameTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(n) => fmt::Display::fmt(n, f),
            Self::FieldAccess(n) => fmt::Display::fmt(n, f),
            Self::ParameterizedType(n) => fmt::Display::fmt(n, f),
            Self::ArrayType(n) => fmt::Display::fmt(n, f),
            Self::Wildcard(n) => fmt::Display::fmt(n, f),
            Self::MultiCatch(n) => fmt::Display::fmt(n, f),
        }
    }
}
