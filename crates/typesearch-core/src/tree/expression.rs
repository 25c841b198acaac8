//! Expression nodes.

use super::name::{FieldAccess, Identifier, NameTree};
use super::statement::Block;
use super::NodeId;
use crate::java_type::JavaType;
use crate::marker::Markers;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value, kept as source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Literal {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Literal as written (e.g., `"abc"`, `42`, `null`).
    pub value_source: String,
    /// Resolved type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl Literal {
    /// Creates a literal with a fresh id.
    #[must_use]
    pub fn new(value_source: impl Into<String>, ty: Option<JavaType>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            value_source: value_source.into(),
            ty,
        }
    }
}

/// The qualifier of a method call.
///
/// A static call names its class (`Collections.sort(l)`) and the class is a
/// type name; an instance call evaluates a receiver (`list.add(x)`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Select {
    /// An instance receiver.
    Receiver(Expression),
    /// The class owning a static method.
    Type(NameTree),
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receiver(receiver) => write!(f, "{receiver}"),
            Self::Type(clazz) => write!(f, "{clazz}"),
        }
    }
}

/// A method call: `select.<T>name(arguments)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodInvocation {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Receiver or owning class, if written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Box<Select>>,
    /// Explicit type arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<NameTree>,
    /// Method name.
    pub name: Identifier,
    /// Arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Expression>,
    /// Resolved return type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl MethodInvocation {
    /// Creates a call of `name` on the receiver `select` with no arguments.
    #[must_use]
    pub fn new(select: Option<Expression>, name: impl Into<String>) -> Self {
        Self::from_select(select.map(Select::Receiver), name)
    }

    /// Creates a call of the static method `name` of `clazz`.
    #[must_use]
    pub fn new_static(clazz: NameTree, name: impl Into<String>) -> Self {
        Self::from_select(Some(Select::Type(clazz)), name)
    }

    fn from_select(select: Option<Select>, name: impl Into<String>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            select: select.map(Box::new),
            type_arguments: Vec::new(),
            name: Identifier::new(name, None),
            arguments: Vec::new(),
            ty: None,
        }
    }

    /// Adds an explicit type argument.
    #[must_use]
    pub fn with_type_argument(mut self, type_argument: NameTree) -> Self {
        self.type_arguments.push(type_argument);
        self
    }

    /// Adds an argument.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<Expression>) -> Self {
        self.arguments.push(argument.into());
        self
    }
}

/// An instance creation: `new Foo(arguments) { body }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClass {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// The instantiated type.
    pub clazz: NameTree,
    /// Constructor arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Expression>,
    /// Anonymous class body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Block>,
    /// Resolved type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl NewClass {
    /// Creates `new clazz()`.
    #[must_use]
    pub fn new(clazz: NameTree) -> Self {
        let ty = clazz.java_type().cloned();
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            clazz,
            arguments: Vec::new(),
            body: None,
            ty,
        }
    }

    /// Adds a constructor argument.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<Expression>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Sets the anonymous class body.
    #[must_use]
    pub fn with_body(mut self, body: Block) -> Self {
        self.body = Some(body);
        self
    }
}

/// An array creation: `new Foo[dimensions]` or `new Foo[] { initializer }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArray {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Element type.
    pub type_expression: NameTree,
    /// Dimension sizes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Expression>,
    /// Initializer elements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initializer: Vec<Expression>,
    /// Resolved array type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl NewArray {
    /// Creates `new type_expression[dimension]`.
    #[must_use]
    pub fn new(type_expression: NameTree, dimension: impl Into<Expression>) -> Self {
        let ty = type_expression.java_type().map(|element| JavaType::Array {
            element: Box::new(element.clone()),
        });
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            type_expression,
            dimensions: vec![dimension.into()],
            initializer: Vec::new(),
            ty,
        }
    }
}

/// A cast: `(Foo) expression`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeCast {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Target type.
    pub clazz: NameTree,
    /// Expression being cast.
    pub expression: Box<Expression>,
    /// Resolved type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl TypeCast {
    /// Creates `(clazz) expression`.
    #[must_use]
    pub fn new(clazz: NameTree, expression: impl Into<Expression>) -> Self {
        let ty = clazz.java_type().cloned();
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            clazz,
            expression: Box::new(expression.into()),
            ty,
        }
    }
}

/// A type test: `expression instanceof Foo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceOf {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Expression being tested.
    pub expression: Box<Expression>,
    /// Tested type.
    pub clazz: NameTree,
    /// Resolved type (always `boolean`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl InstanceOf {
    /// Creates `expression instanceof clazz`.
    #[must_use]
    pub fn new(expression: impl Into<Expression>, clazz: NameTree) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            expression: Box::new(expression.into()),
            clazz,
            ty: Some(JavaType::primitive(crate::java_type::Primitive::Boolean)),
        }
    }
}

/// A class literal: `Foo.class`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassLiteral {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// The named type.
    pub clazz: NameTree,
    /// Resolved type (`java.lang.Class<Foo>`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<JavaType>,
}

impl ClassLiteral {
    /// Creates `clazz.class`.
    #[must_use]
    pub fn new(clazz: NameTree) -> Self {
        let ty = clazz.java_type().map(|named| JavaType::Parameterized {
            raw: crate::java_type::ClassType::new("java.lang.Class"),
            type_parameters: vec![named.clone()],
        });
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            clazz,
            ty,
        }
    }
}

tree_node!(Literal, MethodInvocation, NewClass, NewArray, TypeCast, InstanceOf, ClassLiteral);

/// An expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Expression {
    /// A name in expression position (a local, a field, a package segment).
    Identifier(Identifier),
    /// `target.name`
    FieldAccess(FieldAccess),
    /// A literal.
    Literal(Literal),
    /// A method call.
    MethodInvocation(MethodInvocation),
    /// `new Foo()`
    NewClass(NewClass),
    /// `new Foo[n]`
    NewArray(NewArray),
    /// `(Foo) x`
    TypeCast(TypeCast),
    /// `x instanceof Foo`
    InstanceOf(InstanceOf),
    /// `Foo.class`
    ClassLiteral(ClassLiteral),
}

tree_enum!(Expression {
    Identifier,
    FieldAccess,
    Literal,
    MethodInvocation,
    NewClass,
    NewArray,
    TypeCast,
    InstanceOf,
    ClassLiteral,
});

impl Expression {
    /// Returns the resolved type of this expression.
    #[must_use]
    pub fn java_type(&self) -> Option<&JavaType> {
        match self {
            Self::Identifier(n) => n.ty.as_ref(),
            Self::FieldAccess(n) => n.ty.as_ref(),
            Self::Literal(n) => n.ty.as_ref(),
            Self::MethodInvocation(n) => n.ty.as_ref(),
            Self::NewClass(n) => n.ty.as_ref(),
            Self::NewArray(n) => n.ty.as_ref(),
            Self::TypeCast(n) => n.ty.as_ref(),
            Self::InstanceOf(n) => n.ty.as_ref(),
            Self::ClassLiteral(n) => n.ty.as_ref(),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(n) => write!(f, "{n}"),
            Self::FieldAccess(n) => write!(f, "{n}"),
            Self::Literal(n) => write!(f, "{}", n.value_source),
            Self::MethodInvocation(n) => {
                if let Some(select) = &n.select {
                    write!(f, "{select}.")?;
                }
                if !n.type_arguments.is_empty() {
                    write!(f, "<")?;
                    write_list(f, &n.type_arguments)?;
                    write!(f, ">")?;
                }
                write!(f, "{}(", n.name)?;
                write_list(f, &n.arguments)?;
                write!(f, ")")
            }
            Self::NewClass(n) => {
                write!(f, "new {}(", n.clazz)?;
                write_list(f, &n.arguments)?;
                write!(f, ")")?;
                if n.body.is_some() {
                    write!(f, " {{ ... }}")?;
                }
                Ok(())
            }
            Self::NewArray(n) => {
                write!(f, "new {}", n.type_expression)?;
                if n.dimensions.is_empty() {
                    write!(f, "[] {{")?;
                    write_list(f, &n.initializer)?;
                    write!(f, "}}")
                } else {
                    for dimension in &n.dimensions {
                        write!(f, "[{dimension}]")?;
                    }
                    Ok(())
                }
            }
            Self::TypeCast(n) => write!(f, "({}) {}", n.clazz, n.expression),
            Self::InstanceOf(n) => write!(f, "{} instanceof {}", n.expression, n.clazz),
            Self::ClassLiteral(n) => write!(f, "{}.class", n.clazz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn displays_expressions() {
        let cast = TypeCast::new(
            NameTree::simple("Foo", "pkg.Foo"),
            MethodInvocation::new(Some(Identifier::new("repo", None).into()), "load")
                .with_argument(Literal::new("42", None)),
        );
        assert_snapshot!(Expression::from(cast).to_string(), @"(Foo) repo.load(42)");

        let test = InstanceOf::new(
            Identifier::new("o", None),
            NameTree::class("pkg.Foo"),
        );
        assert_snapshot!(Expression::from(test).to_string(), @"o instanceof pkg.Foo");

        let array = NewArray::new(NameTree::simple("Foo", "pkg.Foo"), Literal::new("0", None));
        assert_snapshot!(Expression::from(array).to_string(), @"new Foo[0]");

        let call = MethodInvocation::new_static(NameTree::simple("Foo", "pkg.Foo"), "of")
            .with_argument(ClassLiteral::new(NameTree::simple("Bar", "pkg.Bar")));
        assert_snapshot!(Expression::from(call).to_string(), @"Foo.of(Bar.class)");
    }

    #[test]
    fn class_literal_is_typed_as_class_of_its_type() {
        let literal = ClassLiteral::new(NameTree::simple("Foo", "pkg.Foo"));
        assert_eq!(
            literal.ty.as_ref().map(ToString::to_string).as_deref(),
            Some("java.lang.Class<pkg.Foo>")
        );
    }

    #[test]
    fn select_records_whether_the_call_is_static() {
        let json = r#"{
            "node": "method_invocation",
            "select": {"type": {"node": "identifier", "simple_name": "Foo"}},
            "name": {"simple_name": "of"}
        }"#;
        let call: Expression = serde_json::from_str(json).expect("valid call");
        let Expression::MethodInvocation(call) = call else {
            panic!("expected a method invocation");
        };
        assert!(matches!(call.select.as_deref(), Some(Select::Type(_))));

        let instance = MethodInvocation::new(Some(Identifier::new("foo", None).into()), "get");
        assert!(matches!(instance.select.as_deref(), Some(Select::Receiver(_))));
    }

    #[test]
    fn new_class_takes_type_of_clazz() {
        let new_class = NewClass::new(NameTree::class("pkg.Foo"));
        assert_eq!(new_class.ty, Some(JavaType::class("pkg.Foo")));
    }
}
