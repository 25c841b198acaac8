//! Resolved type model attached to tree nodes.
//!
//! Types are produced by whatever attributed the tree (a compiler front end,
//! an indexer) and are only read here. The one question the search asks of a
//! type is whether it can be viewed as a class-like type, and if so what its
//! fully qualified name is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a class-like type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    /// A plain class.
    #[default]
    Class,
    /// An interface.
    Interface,
    /// An enum.
    Enum,
    /// An annotation type.
    Annotation,
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::Interface => write!(f, "interface"),
            Self::Enum => write!(f, "enum"),
            Self::Annotation => write!(f, "@interface"),
        }
    }
}

/// Primitive types, including the pseudo types `void` and `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `char`
    Char,
    /// `double`
    Double,
    /// `float`
    Float,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `short`
    Short,
    /// `void`
    Void,
    /// The type of the `null` literal.
    Null,
}

impl Primitive {
    /// Returns the source keyword for this primitive.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Void => "void",
            Self::Null => "null",
        }
    }
}

/// A class-like type identified by its fully qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassType {
    /// Canonical fully qualified name (e.g., `java.util.List`).
    pub fully_qualified_name: String,
    /// What sort of class-like type this is.
    #[serde(default)]
    pub class_kind: ClassKind,
}

impl ClassType {
    /// Creates a class type of kind [`ClassKind::Class`].
    #[must_use]
    pub fn new(fully_qualified_name: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
            class_kind: ClassKind::Class,
        }
    }

    /// Sets the class kind.
    #[must_use]
    pub fn with_kind(mut self, class_kind: ClassKind) -> Self {
        self.class_kind = class_kind;
        self
    }

    /// Returns the fully qualified name.
    #[must_use]
    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    /// Returns the name after the last `.` or `$`.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.fully_qualified_name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(&self.fully_qualified_name)
    }

    /// Returns the package part of the name, or `""` for the default package.
    ///
    /// Nested types written with `$` keep their owner out of the package.
    #[must_use]
    pub fn package_name(&self) -> &str {
        let top_level = self
            .fully_qualified_name
            .split('$')
            .next()
            .unwrap_or(&self.fully_qualified_name);
        top_level.rsplit_once('.').map_or("", |(pkg, _)| pkg)
    }
}

/// A resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JavaType {
    /// A class-like type.
    Class(ClassType),
    /// A generic class applied to type arguments.
    Parameterized {
        /// The generic class.
        raw: ClassType,
        /// Type arguments, in order.
        #[serde(default)]
        type_parameters: Vec<JavaType>,
    },
    /// An array of some element type.
    Array {
        /// Element type.
        element: Box<JavaType>,
    },
    /// A primitive.
    Primitive {
        /// Which primitive.
        primitive: Primitive,
    },
    /// A type variable such as `T`.
    GenericTypeVariable {
        /// Variable name.
        name: String,
        /// Declared bounds.
        #[serde(default)]
        bounds: Vec<JavaType>,
    },
    /// The type model could not resolve this node.
    Unknown,
}

impl JavaType {
    /// Shorthand for a [`JavaType::Class`] of kind [`ClassKind::Class`].
    #[must_use]
    pub fn class(fully_qualified_name: impl Into<String>) -> Self {
        Self::Class(ClassType::new(fully_qualified_name))
    }

    /// Shorthand for a [`JavaType::Primitive`].
    #[must_use]
    pub fn primitive(primitive: Primitive) -> Self {
        Self::Primitive { primitive }
    }

    /// Views this type as a class-like type.
    ///
    /// Only [`JavaType::Class`] qualifies. Parameterized and array types are
    /// not themselves class-like; their base and element names carry the
    /// class type instead.
    #[must_use]
    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }
}

/// Views an optional resolved type as a class-like type.
///
/// Missing and non-class types yield `None`.
#[must_use]
pub fn as_class(ty: Option<&JavaType>) -> Option<&ClassType> {
    ty.and_then(JavaType::as_class)
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "{}", class.fully_qualified_name),
            Self::Parameterized {
                raw,
                type_parameters,
            } => {
                write!(f, "{}<", raw.fully_qualified_name)?;
                for (i, param) in type_parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ">")
            }
            Self::Array { element } => write!(f, "{element}[]"),
            Self::Primitive { primitive } => write!(f, "{}", primitive.keyword()),
            Self::GenericTypeVariable { name, .. } => write!(f, "{name}"),
            Self::Unknown => write!(f, "<unknown>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_class_types_view_as_class() {
        let class = JavaType::class("pkg.Foo");
        assert_eq!(
            class.as_class().map(ClassType::fully_qualified_name),
            Some("pkg.Foo")
        );

        let parameterized = JavaType::Parameterized {
            raw: ClassType::new("java.util.List"),
            type_parameters: vec![JavaType::class("pkg.Foo")],
        };
        assert!(parameterized.as_class().is_none());
        assert!(JavaType::Array {
            element: Box::new(JavaType::class("pkg.Foo"))
        }
        .as_class()
        .is_none());
        assert!(JavaType::primitive(Primitive::Int).as_class().is_none());
        assert!(JavaType::Unknown.as_class().is_none());
        assert!(as_class(None).is_none());
    }

    #[test]
    fn class_and_package_names() {
        let nested = ClassType::new("pkg.sub.Outer$Inner");
        assert_eq!(nested.class_name(), "Inner");
        assert_eq!(nested.package_name(), "pkg.sub");

        let top = ClassType::new("Foo");
        assert_eq!(top.class_name(), "Foo");
        assert_eq!(top.package_name(), "");
    }

    #[test]
    fn deserializes_tagged_types() {
        let ty: JavaType =
            serde_json::from_str(r#"{"kind":"class","fully_qualified_name":"pkg.Foo"}"#)
                .expect("class type should parse");
        assert_eq!(ty, JavaType::class("pkg.Foo"));

        let ty: JavaType = serde_json::from_str(r#"{"kind":"primitive","primitive":"int"}"#)
            .expect("primitive should parse");
        assert_eq!(ty.to_string(), "int");
    }
}
