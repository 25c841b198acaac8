//! Compilation units and declarations.

use super::expression::Expression;
use super::name::{FieldAccess, Identifier, NameTree};
use super::statement::{Block, Statement};
use super::NodeId;
use crate::java_type::{ClassKind, ClassType, JavaType};
use crate::marker::Markers;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A `package` declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Dotted package name.
    pub name: Expression,
}

impl Package {
    /// Creates `package name;`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut segments = name.split('.');
        let mut name: Expression = Identifier::new(segments.next().unwrap_or_default(), None).into();
        for segment in segments {
            name = FieldAccess::new(name, Identifier::new(segment, None), None).into();
        }
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            name,
        }
    }
}

/// An `import` declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Import {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Whether this is `import static`.
    #[serde(default)]
    pub is_static: bool,
    /// The imported name.
    pub qualid: NameTree,
}

impl Import {
    /// Creates a single-type import of the class `fully_qualified_name`.
    #[must_use]
    pub fn new(fully_qualified_name: &str) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            is_static: false,
            qualid: NameTree::class(fully_qualified_name),
        }
    }

    /// Creates `import static owner.member;`.
    #[must_use]
    pub fn new_static(owner: &str, member: &str) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            is_static: true,
            qualid: NameTree::qualified(&format!("{owner}.{member}"), None),
        }
    }
}

/// A type parameter declaration: `T extends Bound`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeParameter {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Declared variable name.
    pub name: Identifier,
    /// Upper bounds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bounds: Vec<NameTree>,
}

impl TypeParameter {
    /// Creates an unbounded type parameter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let ty = JavaType::GenericTypeVariable {
            name: name.clone(),
            bounds: Vec::new(),
        };
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            name: Identifier::new(name, Some(ty)),
            bounds: Vec::new(),
        }
    }

    /// Adds an upper bound.
    #[must_use]
    pub fn with_bound(mut self, bound: NameTree) -> Self {
        self.bounds.push(bound);
        self
    }
}

/// An annotation use: `@Foo(arguments)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// The annotation type.
    pub annotation_type: NameTree,
    /// Arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Expression>,
}

impl Annotation {
    /// Creates `@annotation_type`.
    #[must_use]
    pub fn new(annotation_type: NameTree) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            annotation_type,
            arguments: Vec::new(),
        }
    }

    /// Adds an argument.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<Expression>) -> Self {
        self.arguments.push(argument.into());
        self
    }
}

/// A class, interface, enum or annotation type declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDeclaration {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Leading annotations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Declaration kind.
    #[serde(default)]
    pub class_kind: ClassKind,
    /// Declared name, typed with the declared class.
    pub name: Identifier,
    /// Declared type parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameter>,
    /// Superclass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<NameTree>,
    /// Implemented (or, for interfaces, extended) interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<NameTree>,
    /// Members.
    #[serde(default)]
    pub body: Block,
}

impl ClassDeclaration {
    /// Creates an empty class declaration for `fully_qualified_name`.
    ///
    /// The declared name is the part after the last `.` or `$`.
    #[must_use]
    pub fn new(fully_qualified_name: &str) -> Self {
        let class = ClassType::new(fully_qualified_name);
        let simple_name = class.class_name().to_string();
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            annotations: Vec::new(),
            class_kind: ClassKind::Class,
            name: Identifier::new(simple_name, Some(JavaType::Class(class))),
            type_parameters: Vec::new(),
            extends: None,
            implements: Vec::new(),
            body: Block::default(),
        }
    }

    /// Sets the declaration kind.
    #[must_use]
    pub fn with_kind(mut self, class_kind: ClassKind) -> Self {
        self.class_kind = class_kind;
        if let Some(JavaType::Class(class)) = &mut self.name.ty {
            class.class_kind = class_kind;
        }
        self
    }

    /// Adds a leading annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Adds a type parameter.
    #[must_use]
    pub fn with_type_parameter(mut self, type_parameter: TypeParameter) -> Self {
        self.type_parameters.push(type_parameter);
        self
    }

    /// Sets the superclass.
    #[must_use]
    pub fn with_extends(mut self, extends: NameTree) -> Self {
        self.extends = Some(extends);
        self
    }

    /// Adds an implemented interface.
    #[must_use]
    pub fn with_implements(mut self, interface: NameTree) -> Self {
        self.implements.push(interface);
        self
    }

    /// Appends a member.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<Statement>) -> Self {
        self.body.statements.push(member.into());
        self
    }
}

/// A source file: the root of every tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Path of the source file this tree was parsed from.
    #[serde(default)]
    pub source_path: PathBuf,
    /// Package declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<Package>,
    /// Imports in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    /// Top-level type declarations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<ClassDeclaration>,
}

impl CompilationUnit {
    /// Creates an empty compilation unit for `source_path`.
    #[must_use]
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            source_path: source_path.into(),
            package: None,
            imports: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Sets the package declaration.
    #[must_use]
    pub fn with_package(mut self, package_name: &str) -> Self {
        self.package = Some(Package::new(package_name));
        self
    }

    /// Appends an import.
    #[must_use]
    pub fn with_import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Appends a top-level class.
    #[must_use]
    pub fn with_class(mut self, class: ClassDeclaration) -> Self {
        self.classes.push(class);
        self
    }

    /// Parses a tree from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a compilation unit.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes this tree to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

tree_node!(
    Package,
    Import,
    TypeParameter,
    Annotation,
    ClassDeclaration,
    CompilationUnit
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Tree, VariableDeclarations};

    #[test]
    fn deserializes_minimal_json() {
        let json = r#"{
            "source_path": "src/main/java/C.java",
            "imports": [
                {"qualid": {"node": "field_access",
                            "target": {"node": "identifier", "simple_name": "pkg"},
                            "name": {"simple_name": "Foo"},
                            "type": {"kind": "class", "fully_qualified_name": "pkg.Foo"}}}
            ],
            "classes": [
                {"name": {"simple_name": "C"},
                 "body": {"statements": [
                    {"statement": "variable_declarations",
                     "type_expression": {"node": "identifier", "simple_name": "Foo",
                                         "type": {"kind": "class", "fully_qualified_name": "pkg.Foo"}},
                     "variables": [{"name": {"simple_name": "f"}}]}
                 ]}}
            ]
        }"#;

        let cu = CompilationUnit::from_json(json).expect("tree should parse");
        assert_eq!(cu.imports.len(), 1);
        assert_eq!(cu.imports[0].qualid.to_string(), "pkg.Foo");
        assert!(cu.markers().is_empty());

        let Statement::VariableDeclarations(field) = &cu.classes[0].body.statements[0] else {
            panic!("expected a field");
        };
        assert_eq!(
            field.type_expression.as_ref().map(ToString::to_string).as_deref(),
            Some("Foo")
        );
    }

    #[test]
    fn json_roundtrip_keeps_ids() {
        let cu = CompilationUnit::new("C.java")
            .with_package("pkg")
            .with_import(Import::new("pkg.other.Bar"))
            .with_class(
                ClassDeclaration::new("pkg.C")
                    .with_member(VariableDeclarations::single(NameTree::class("pkg.Foo"), "f")),
            );

        let json = cu.to_json().expect("tree should serialize");
        let parsed = CompilationUnit::from_json(&json).expect("tree should parse");

        assert_eq!(parsed.id(), cu.id());
        assert_eq!(parsed.imports[0].qualid.id(), cu.imports[0].qualid.id());
        assert_eq!(parsed.to_json().expect("tree should serialize"), json);
    }

    #[test]
    fn class_declaration_names() {
        let nested = ClassDeclaration::new("pkg.Outer$Inner").with_kind(ClassKind::Interface);
        assert_eq!(nested.name.simple_name, "Inner");
        assert_eq!(
            nested.name.ty,
            Some(JavaType::Class(
                ClassType::new("pkg.Outer$Inner").with_kind(ClassKind::Interface)
            ))
        );
    }
}
