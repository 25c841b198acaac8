//! Read-only traversal of a tree.
//!
//! Every node type has a hook on [`Visit`] and a free function of the same
//! name that walks the node's children. Override a hook to inspect a node
//! and call the free function from the override to keep descending:
//!
//! ```
//! use typesearch_core::visit::{self, Visit};
//! use typesearch_core::{Cursor, NameTree, CompilationUnit};
//!
//! struct CountTypeNames;
//!
//! impl<'t> Visit<'t, usize> for CountTypeNames {
//!     fn visit_type_name(&mut self, node: &'t NameTree, cursor: &mut Cursor, count: &mut usize) {
//!         visit::visit_type_name(self, node, cursor, count);
//!         *count += 1;
//!     }
//! }
//!
//! let tree = CompilationUnit::new("Empty.java");
//! let mut count = 0;
//! visit::walk(&mut CountTypeNames, &tree, &mut count);
//! assert_eq!(count, 0);
//! ```
//!
//! [`Visit::visit_type_name`] runs for every position that names a type
//! (field and variable types, casts, `new`, `extends`, the subject of an
//! import, ...). Declared names and the qualifiers inside a dotted name are
//! visited as plain identifiers and expressions instead.
//!
//! The `P` parameter is state threaded through the walk, for visitors that
//! accumulate into something owned by the caller.

#![allow(missing_docs)]

use crate::cursor::Cursor;
use crate::tree::{
    Annotation, ArrayType, Block, Catch, ClassDeclaration, ClassLiteral, CompilationUnit,
    Expression, FieldAccess, Identifier, Import, InstanceOf, Literal, MethodDeclaration,
    MethodInvocation, MultiCatch, NameTree, NamedVariable, NewArray, NewClass, Package,
    ParameterizedType, Return, Select, Statement, Try, TypeCast, TypeParameter,
    VariableDeclarations, Wildcard,
};

/// Walks `tree` with a fresh cursor.
///
/// `tree` may be a whole compilation unit or any subtree that implements
/// [`Visitable`]. Ancestors above the subtree are not known to the cursor.
/// The cursor records ancestors only if `visitor` asks for it through
/// [`Visit::tracks_ancestors`].
pub fn walk<'t, V, P, T>(visitor: &mut V, tree: &'t T, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
    T: Visitable + ?Sized,
{
    let mut cursor = Cursor::new(visitor.tracks_ancestors());
    tree.accept(visitor, &mut cursor, p);
}

/// A node a walk can start from.
pub trait Visitable {
    /// Hands `self` to the hook of `visitor` for its node type.
    fn accept<'t, V, P>(&'t self, visitor: &mut V, cursor: &mut Cursor, p: &mut P)
    where
        V: Visit<'t, P> + ?Sized;
}

macro_rules! visitable {
    ($($ty:ident => $hook:ident),+ $(,)?) => {$(
        impl Visitable for $ty {
            fn accept<'t, V, P>(&'t self, visitor: &mut V, cursor: &mut Cursor, p: &mut P)
            where
                V: Visit<'t, P> + ?Sized,
            {
                visitor.$hook(self, cursor, p);
            }
        }
    )+};
}

// A bare name tree is walked as a type name.
visitable!(
    CompilationUnit => visit_compilation_unit,
    ClassDeclaration => visit_class_declaration,
    MethodDeclaration => visit_method_declaration,
    VariableDeclarations => visit_variable_declarations,
    Block => visit_block,
    Statement => visit_statement,
    Expression => visit_expression,
    NameTree => visit_type_name,
);

/// A read-only tree visitor.
pub trait Visit<'t, P> {
    /// Whether the cursor handed to the hooks should record ancestors.
    fn tracks_ancestors(&self) -> bool {
        false
    }

    fn visit_compilation_unit(&mut self, node: &'t CompilationUnit, cursor: &mut Cursor, p: &mut P) {
        visit_compilation_unit(self, node, cursor, p);
    }

    fn visit_package(&mut self, node: &'t Package, cursor: &mut Cursor, p: &mut P) {
        visit_package(self, node, cursor, p);
    }

    fn visit_import(&mut self, node: &'t Import, cursor: &mut Cursor, p: &mut P) {
        visit_import(self, node, cursor, p);
    }

    fn visit_class_declaration(&mut self, node: &'t ClassDeclaration, cursor: &mut Cursor, p: &mut P) {
        visit_class_declaration(self, node, cursor, p);
    }

    fn visit_type_parameter(&mut self, node: &'t TypeParameter, cursor: &mut Cursor, p: &mut P) {
        visit_type_parameter(self, node, cursor, p);
    }

    fn visit_annotation(&mut self, node: &'t Annotation, cursor: &mut Cursor, p: &mut P) {
        visit_annotation(self, node, cursor, p);
    }

    fn visit_block(&mut self, node: &'t Block, cursor: &mut Cursor, p: &mut P) {
        visit_block(self, node, cursor, p);
    }

    fn visit_statement(&mut self, node: &'t Statement, cursor: &mut Cursor, p: &mut P) {
        visit_statement(self, node, cursor, p);
    }

    fn visit_method_declaration(&mut self, node: &'t MethodDeclaration, cursor: &mut Cursor, p: &mut P) {
        visit_method_declaration(self, node, cursor, p);
    }

    fn visit_variable_declarations(
        &mut self,
        node: &'t VariableDeclarations,
        cursor: &mut Cursor,
        p: &mut P,
    ) {
        visit_variable_declarations(self, node, cursor, p);
    }

    fn visit_named_variable(&mut self, node: &'t NamedVariable, cursor: &mut Cursor, p: &mut P) {
        visit_named_variable(self, node, cursor, p);
    }

    fn visit_return(&mut self, node: &'t Return, cursor: &mut Cursor, p: &mut P) {
        visit_return(self, node, cursor, p);
    }

    fn visit_try(&mut self, node: &'t Try, cursor: &mut Cursor, p: &mut P) {
        visit_try(self, node, cursor, p);
    }

    fn visit_catch(&mut self, node: &'t Catch, cursor: &mut Cursor, p: &mut P) {
        visit_catch(self, node, cursor, p);
    }

    /// Called for every position that names a type.
    fn visit_type_name(&mut self, node: &'t NameTree, cursor: &mut Cursor, p: &mut P) {
        visit_type_name(self, node, cursor, p);
    }

    fn visit_expression(&mut self, node: &'t Expression, cursor: &mut Cursor, p: &mut P) {
        visit_expression(self, node, cursor, p);
    }

    fn visit_identifier(&mut self, node: &'t Identifier, cursor: &mut Cursor, p: &mut P) {
        visit_identifier(self, node, cursor, p);
    }

    fn visit_field_access(&mut self, node: &'t FieldAccess, cursor: &mut Cursor, p: &mut P) {
        visit_field_access(self, node, cursor, p);
    }

    fn visit_parameterized_type(&mut self, node: &'t ParameterizedType, cursor: &mut Cursor, p: &mut P) {
        visit_parameterized_type(self, node, cursor, p);
    }

    fn visit_array_type(&mut self, node: &'t ArrayType, cursor: &mut Cursor, p: &mut P) {
        visit_array_type(self, node, cursor, p);
    }

    fn visit_wildcard(&mut self, node: &'t Wildcard, cursor: &mut Cursor, p: &mut P) {
        visit_wildcard(self, node, cursor, p);
    }

    fn visit_multi_catch(&mut self, node: &'t MultiCatch, cursor: &mut Cursor, p: &mut P) {
        visit_multi_catch(self, node, cursor, p);
    }

    fn visit_literal(&mut self, node: &'t Literal, cursor: &mut Cursor, p: &mut P) {
        visit_literal(self, node, cursor, p);
    }

    fn visit_method_invocation(&mut self, node: &'t MethodInvocation, cursor: &mut Cursor, p: &mut P) {
        visit_method_invocation(self, node, cursor, p);
    }

    fn visit_new_class(&mut self, node: &'t NewClass, cursor: &mut Cursor, p: &mut P) {
        visit_new_class(self, node, cursor, p);
    }

    fn visit_new_array(&mut self, node: &'t NewArray, cursor: &mut Cursor, p: &mut P) {
        visit_new_array(self, node, cursor, p);
    }

    fn visit_type_cast(&mut self, node: &'t TypeCast, cursor: &mut Cursor, p: &mut P) {
        visit_type_cast(self, node, cursor, p);
    }

    fn visit_instance_of(&mut self, node: &'t InstanceOf, cursor: &mut Cursor, p: &mut P) {
        visit_instance_of(self, node, cursor, p);
    }

    fn visit_class_literal(&mut self, node: &'t ClassLiteral, cursor: &mut Cursor, p: &mut P) {
        visit_class_literal(self, node, cursor, p);
    }
}

pub fn visit_compilation_unit<'t, V, P>(
    v: &mut V,
    node: &'t CompilationUnit,
    cursor: &mut Cursor,
    p: &mut P,
) where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    if let Some(package) = &node.package {
        v.visit_package(package, cursor, p);
    }
    for import in &node.imports {
        v.visit_import(import, cursor, p);
    }
    for class in &node.classes {
        v.visit_class_declaration(class, cursor, p);
    }
    cursor.pop();
}

pub fn visit_package<'t, V, P>(v: &mut V, node: &'t Package, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_expression(&node.name, cursor, p);
    cursor.pop();
}

pub fn visit_import<'t, V, P>(v: &mut V, node: &'t Import, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_type_name(&node.qualid, cursor, p);
    cursor.pop();
}

pub fn visit_class_declaration<'t, V, P>(
    v: &mut V,
    node: &'t ClassDeclaration,
    cursor: &mut Cursor,
    p: &mut P,
) where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    for annotation in &node.annotations {
        v.visit_annotation(annotation, cursor, p);
    }
    v.visit_identifier(&node.name, cursor, p);
    for type_parameter in &node.type_parameters {
        v.visit_type_parameter(type_parameter, cursor, p);
    }
    if let Some(extends) = &node.extends {
        v.visit_type_name(extends, cursor, p);
    }
    for interface in &node.implements {
        v.visit_type_name(interface, cursor, p);
    }
    v.visit_block(&node.body, cursor, p);
    cursor.pop();
}

pub fn visit_type_parameter<'t, V, P>(
    v: &mut V,
    node: &'t TypeParameter,
    cursor: &mut Cursor,
    p: &mut P,
) where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_identifier(&node.name, cursor, p);
    for bound in &node.bounds {
        v.visit_type_name(bound, cursor, p);
    }
    cursor.pop();
}

pub fn visit_annotation<'t, V, P>(v: &mut V, node: &'t Annotation, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_type_name(&node.annotation_type, cursor, p);
    for argument in &node.arguments {
        v.visit_expression(argument, cursor, p);
    }
    cursor.pop();
}

pub fn visit_block<'t, V, P>(v: &mut V, node: &'t Block, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    for statement in &node.statements {
        v.visit_statement(statement, cursor, p);
    }
    cursor.pop();
}

pub fn visit_statement<'t, V, P>(v: &mut V, node: &'t Statement, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    match node {
        Statement::ClassDeclaration(n) => v.visit_class_declaration(n, cursor, p),
        Statement::MethodDeclaration(n) => v.visit_method_declaration(n, cursor, p),
        Statement::VariableDeclarations(n) => v.visit_variable_declarations(n, cursor, p),
        Statement::Block(n) => v.visit_block(n, cursor, p),
        Statement::Return(n) => v.visit_return(n, cursor, p),
        Statement::Try(n) => v.visit_try(n, cursor, p),
        Statement::Expression(n) => v.visit_expression(n, cursor, p),
    }
}

pub fn visit_method_declaration<'t, V, P>(
    v: &mut V,
    node: &'t MethodDeclaration,
    cursor: &mut Cursor,
    p: &mut P,
) where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    for annotation in &node.annotations {
        v.visit_annotation(annotation, cursor, p);
    }
    for type_parameter in &node.type_parameters {
        v.visit_type_parameter(type_parameter, cursor, p);
    }
    if let Some(return_type) = &node.return_type {
        v.visit_type_name(return_type, cursor, p);
    }
    v.visit_identifier(&node.name, cursor, p);
    for parameter in &node.parameters {
        v.visit_variable_declarations(parameter, cursor, p);
    }
    for exception in &node.throws {
        v.visit_type_name(exception, cursor, p);
    }
    if let Some(body) = &node.body {
        v.visit_block(body, cursor, p);
    }
    cursor.pop();
}

pub fn visit_variable_declarations<'t, V, P>(
    v: &mut V,
    node: &'t VariableDeclarations,
    cursor: &mut Cursor,
    p: &mut P,
) where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    for annotation in &node.annotations {
        v.visit_annotation(annotation, cursor, p);
    }
    if let Some(type_expression) = &node.type_expression {
        v.visit_type_name(type_expression, cursor, p);
    }
    for variable in &node.variables {
        v.visit_named_variable(variable, cursor, p);
    }
    cursor.pop();
}

pub fn visit_named_variable<'t, V, P>(
    v: &mut V,
    node: &'t NamedVariable,
    cursor: &mut Cursor,
    p: &mut P,
) where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_identifier(&node.name, cursor, p);
    if let Some(initializer) = &node.initializer {
        v.visit_expression(initializer, cursor, p);
    }
    cursor.pop();
}

pub fn visit_return<'t, V, P>(v: &mut V, node: &'t Return, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    if let Some(expression) = &node.expression {
        v.visit_expression(expression, cursor, p);
    }
    cursor.pop();
}

pub fn visit_try<'t, V, P>(v: &mut V, node: &'t Try, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    for resource in &node.resources {
        v.visit_variable_declarations(resource, cursor, p);
    }
    v.visit_block(&node.body, cursor, p);
    for catch in &node.catches {
        v.visit_catch(catch, cursor, p);
    }
    if let Some(finally) = &node.finally {
        v.visit_block(finally, cursor, p);
    }
    cursor.pop();
}

pub fn visit_catch<'t, V, P>(v: &mut V, node: &'t Catch, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_variable_declarations(&node.parameter, cursor, p);
    v.visit_block(&node.body, cursor, p);
    cursor.pop();
}

pub fn visit_type_name<'t, V, P>(v: &mut V, node: &'t NameTree, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    match node {
        NameTree::Identifier(n) => v.visit_identifier(n, cursor, p),
        NameTree::FieldAccess(n) => v.visit_field_access(n, cursor, p),
        NameTree::ParameterizedType(n) => v.visit_parameterized_type(n, cursor, p),
        NameTree::ArrayType(n) => v.visit_array_type(n, cursor, p),
        NameTree::Wildcard(n) => v.visit_wildcard(n, cursor, p),
        NameTree::MultiCatch(n) => v.visit_multi_catch(n, cursor, p),
    }
}

pub fn visit_expression<'t, V, P>(v: &mut V, node: &'t Expression, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    match node {
        Expression::Identifier(n) => v.visit_identifier(n, cursor, p),
        Expression::FieldAccess(n) => v.visit_field_access(n, cursor, p),
        Expression::Literal(n) => v.visit_literal(n, cursor, p),
        Expression::MethodInvocation(n) => v.visit_method_invocation(n, cursor, p),
        Expression::NewClass(n) => v.visit_new_class(n, cursor, p),
        Expression::NewArray(n) => v.visit_new_array(n, cursor, p),
        Expression::TypeCast(n) => v.visit_type_cast(n, cursor, p),
        Expression::InstanceOf(n) => v.visit_instance_of(n, cursor, p),
        Expression::ClassLiteral(n) => v.visit_class_literal(n, cursor, p),
    }
}

pub fn visit_identifier<'t, V, P>(_v: &mut V, _node: &'t Identifier, _cursor: &mut Cursor, _p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
}

pub fn visit_field_access<'t, V, P>(v: &mut V, node: &'t FieldAccess, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_expression(&node.target, cursor, p);
    v.visit_identifier(&node.name, cursor, p);
    cursor.pop();
}

pub fn visit_parameterized_type<'t, V, P>(
    v: &mut V,
    node: &'t ParameterizedType,
    cursor: &mut Cursor,
    p: &mut P,
) where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_type_name(&node.clazz, cursor, p);
    for type_parameter in &node.type_parameters {
        v.visit_type_name(type_parameter, cursor, p);
    }
    cursor.pop();
}

pub fn visit_array_type<'t, V, P>(v: &mut V, node: &'t ArrayType, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_type_name(&node.element_type, cursor, p);
    cursor.pop();
}

pub fn visit_wildcard<'t, V, P>(v: &mut V, node: &'t Wildcard, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    if let Some(bounded_type) = &node.bounded_type {
        v.visit_type_name(bounded_type, cursor, p);
    }
    cursor.pop();
}

pub fn visit_multi_catch<'t, V, P>(v: &mut V, node: &'t MultiCatch, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    for alternative in &node.alternatives {
        v.visit_type_name(alternative, cursor, p);
    }
    cursor.pop();
}

pub fn visit_literal<'t, V, P>(_v: &mut V, _node: &'t Literal, _cursor: &mut Cursor, _p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
}

pub fn visit_method_invocation<'t, V, P>(
    v: &mut V,
    node: &'t MethodInvocation,
    cursor: &mut Cursor,
    p: &mut P,
) where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    match node.select.as_deref() {
        Some(Select::Receiver(receiver)) => v.visit_expression(receiver, cursor, p),
        Some(Select::Type(clazz)) => v.visit_type_name(clazz, cursor, p),
        None => {}
    }
    for type_argument in &node.type_arguments {
        v.visit_type_name(type_argument, cursor, p);
    }
    v.visit_identifier(&node.name, cursor, p);
    for argument in &node.arguments {
        v.visit_expression(argument, cursor, p);
    }
    cursor.pop();
}

pub fn visit_new_class<'t, V, P>(v: &mut V, node: &'t NewClass, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_type_name(&node.clazz, cursor, p);
    for argument in &node.arguments {
        v.visit_expression(argument, cursor, p);
    }
    if let Some(body) = &node.body {
        v.visit_block(body, cursor, p);
    }
    cursor.pop();
}

pub fn visit_new_array<'t, V, P>(v: &mut V, node: &'t NewArray, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_type_name(&node.type_expression, cursor, p);
    for dimension in &node.dimensions {
        v.visit_expression(dimension, cursor, p);
    }
    for element in &node.initializer {
        v.visit_expression(element, cursor, p);
    }
    cursor.pop();
}

pub fn visit_type_cast<'t, V, P>(v: &mut V, node: &'t TypeCast, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_type_name(&node.clazz, cursor, p);
    v.visit_expression(&node.expression, cursor, p);
    cursor.pop();
}

pub fn visit_instance_of<'t, V, P>(v: &mut V, node: &'t InstanceOf, cursor: &mut Cursor, p: &mut P)
where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_expression(&node.expression, cursor, p);
    v.visit_type_name(&node.clazz, cursor, p);
    cursor.pop();
}

pub fn visit_class_literal<'t, V, P>(
    v: &mut V,
    node: &'t ClassLiteral,
    cursor: &mut Cursor,
    p: &mut P,
) where
    V: Visit<'t, P> + ?Sized,
{
    cursor.push(node);
    v.visit_type_name(&node.clazz, cursor, p);
    cursor.pop();
}
