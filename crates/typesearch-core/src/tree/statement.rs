//! Statement nodes.

use super::declaration::{Annotation, ClassDeclaration, TypeParameter};
use super::expression::Expression;
use super::name::{Identifier, NameTree};
use super::NodeId;
use crate::marker::Markers;
use serde::{Deserialize, Serialize};

/// A braced sequence of statements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Statements in order.
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl Block {
    /// Creates a block holding `statements`.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            statements,
        }
    }
}

/// A `return` statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Return {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Returned value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
}

impl Return {
    /// Creates `return expression;`.
    #[must_use]
    pub fn new(expression: Option<Expression>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            expression,
        }
    }
}

/// One declarator in a variable declaration: `name = initializer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedVariable {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Declared name.
    pub name: Identifier,
    /// Initializer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Expression>,
}

impl NamedVariable {
    /// Creates a declarator without an initializer.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            name: Identifier::new(name, None),
            initializer: None,
        }
    }

    /// Sets the initializer.
    #[must_use]
    pub fn with_initializer(mut self, initializer: impl Into<Expression>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }
}

/// A field, local variable or parameter declaration: `Foo a, b = x;`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDeclarations {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Leading annotations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Declared type; `None` for `var`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_expression: Option<NameTree>,
    /// Declarators.
    pub variables: Vec<NamedVariable>,
}

impl VariableDeclarations {
    /// Creates a declaration of `variables` with the given type.
    #[must_use]
    pub fn new(type_expression: Option<NameTree>, variables: Vec<NamedVariable>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            annotations: Vec::new(),
            type_expression,
            variables,
        }
    }

    /// Shorthand for `type_expression name;`.
    #[must_use]
    pub fn single(type_expression: NameTree, name: impl Into<String>) -> Self {
        Self::new(Some(type_expression), vec![NamedVariable::new(name)])
    }

    /// Adds a leading annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A method or constructor declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDeclaration {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Leading annotations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Declared type parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameter>,
    /// Return type; `None` for constructors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<NameTree>,
    /// Method name.
    pub name: Identifier,
    /// Parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<VariableDeclarations>,
    /// Declared exceptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub throws: Vec<NameTree>,
    /// Body; `None` for abstract methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Block>,
}

impl MethodDeclaration {
    /// Creates a body-less method.
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: Option<NameTree>) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            annotations: Vec::new(),
            type_parameters: Vec::new(),
            return_type,
            name: Identifier::new(name, None),
            parameters: Vec::new(),
            throws: Vec::new(),
            body: None,
        }
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

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: VariableDeclarations) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Adds a declared exception.
    #[must_use]
    pub fn with_throws(mut self, exception: NameTree) -> Self {
        self.throws.push(exception);
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: Block) -> Self {
        self.body = Some(body);
        self
    }
}

/// One `catch` clause: `catch (Foo | Bar e) { body }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catch {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// The caught exception; a multi-catch holds a
    /// [`MultiCatch`](super::MultiCatch) type expression.
    pub parameter: VariableDeclarations,
    /// Handler body.
    #[serde(default)]
    pub body: Block,
}

impl Catch {
    /// Creates `catch (parameter) body`.
    #[must_use]
    pub fn new(parameter: VariableDeclarations, body: Block) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            parameter,
            body,
        }
    }
}

/// A `try` statement, with or without resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Try {
    /// Node identity.
    #[serde(default)]
    pub id: NodeId,
    /// Markers.
    #[serde(default, skip_serializing_if = "Markers::is_empty")]
    pub markers: Markers,
    /// Resources of a try-with-resources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<VariableDeclarations>,
    /// Guarded body.
    #[serde(default)]
    pub body: Block,
    /// Catch clauses in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub catches: Vec<Catch>,
    /// `finally` block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finally: Option<Block>,
}

impl Try {
    /// Creates `try body` with no clauses.
    #[must_use]
    pub fn new(body: Block) -> Self {
        Self {
            id: NodeId::random(),
            markers: Markers::new(),
            resources: Vec::new(),
            body,
            catches: Vec::new(),
            finally: None,
        }
    }

    /// Adds a resource.
    #[must_use]
    pub fn with_resource(mut self, resource: VariableDeclarations) -> Self {
        self.resources.push(resource);
        self
    }

    /// Adds a catch clause.
    #[must_use]
    pub fn with_catch(mut self, catch: Catch) -> Self {
        self.catches.push(catch);
        self
    }

    /// Sets the `finally` block.
    #[must_use]
    pub fn with_finally(mut self, finally: Block) -> Self {
        self.finally = Some(finally);
        self
    }
}

tree_node!(Block, Return, NamedVariable, VariableDeclarations, MethodDeclaration, Catch, Try);

/// A statement or class member.
///
/// Tagged with `statement` rather than `node` so an expression statement
/// keeps the inner expression's own `node` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "statement", rename_all = "snake_case")]
pub enum Statement {
    /// A nested or local class.
    ClassDeclaration(ClassDeclaration),
    /// A method or constructor.
    MethodDeclaration(MethodDeclaration),
    /// A field or local variable.
    VariableDeclarations(VariableDeclarations),
    /// A nested block (or initializer block).
    Block(Block),
    /// `return`
    Return(Return),
    /// `try`
    Try(Try),
    /// An expression statement.
    Expression(Expression),
}

tree_enum!(Statement {
    ClassDeclaration,
    MethodDeclaration,
    VariableDeclarations,
    Block,
    Return,
    Try,
    Expression,
});
