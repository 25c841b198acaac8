//! Owned rewriting traversal of a tree.
//!
//! [`Fold`] mirrors [`Visit`](crate::visit::Visit): one hook per node type
//! and a free function of the same name that rebuilds the node from its
//! folded children. The default behaviour of every hook is to hand back a
//! node with the same id, kind, fields and child order, so a folder only
//! overrides the hooks for the nodes it changes.
//!
//! Nodes are moved through the fold rather than cloned.

#![allow(missing_docs)]

use crate::cursor::Cursor;
use crate::tree::{
    Annotation, ArrayType, Block, Catch, ClassDeclaration, ClassLiteral, CompilationUnit,
    Expression, FieldAccess, Identifier, Import, InstanceOf, Literal, MethodDeclaration,
    MethodInvocation, MultiCatch, NameTree, NamedVariable, NewArray, NewClass, Package,
    ParameterizedType, Return, Select, Statement, Try, TypeCast, TypeParameter,
    VariableDeclarations, Wildcard,
};

/// Folds `tree` with a fresh cursor.
///
/// `tree` may be a whole compilation unit or any subtree that implements
/// [`Foldable`]. The cursor records ancestors only if `folder` asks for it
/// through [`Fold::tracks_ancestors`].
pub fn walk<F, T>(folder: &mut F, tree: T) -> T
where
    F: Fold + ?Sized,
    T: Foldable,
{
    let mut cursor = Cursor::new(folder.tracks_ancestors());
    tree.fold_with(folder, &mut cursor)
}

/// A node a fold can start from.
pub trait Foldable: Sized {
    /// Hands `self` to the hook of `folder` for its node type.
    fn fold_with<F>(self, folder: &mut F, cursor: &mut Cursor) -> Self
    where
        F: Fold + ?Sized;
}

macro_rules! foldable {
    ($($ty:ident => $hook:ident),+ $(,)?) => {$(
        impl Foldable for $ty {
            fn fold_with<F>(self, folder: &mut F, cursor: &mut Cursor) -> Self
            where
                F: Fold + ?Sized,
            {
                folder.$hook(self, cursor)
            }
        }
    )+};
}

foldable!(
    CompilationUnit => fold_compilation_unit,
    ClassDeclaration => fold_class_declaration,
    MethodDeclaration => fold_method_declaration,
    VariableDeclarations => fold_variable_declarations,
    Block => fold_block,
    Statement => fold_statement,
    Expression => fold_expression,
    NameTree => fold_type_name,
);

/// A tree rewriter.
pub trait Fold {
    /// Whether the cursor handed to the hooks should record ancestors.
    fn tracks_ancestors(&self) -> bool {
        false
    }

    fn fold_compilation_unit(&mut self, node: CompilationUnit, cursor: &mut Cursor) -> CompilationUnit {
        fold_compilation_unit(self, node, cursor)
    }

    fn fold_package(&mut self, node: Package, cursor: &mut Cursor) -> Package {
        fold_package(self, node, cursor)
    }

    fn fold_import(&mut self, node: Import, cursor: &mut Cursor) -> Import {
        fold_import(self, node, cursor)
    }

    fn fold_class_declaration(&mut self, node: ClassDeclaration, cursor: &mut Cursor) -> ClassDeclaration {
        fold_class_declaration(self, node, cursor)
    }

    fn fold_type_parameter(&mut self, node: TypeParameter, cursor: &mut Cursor) -> TypeParameter {
        fold_type_parameter(self, node, cursor)
    }

    fn fold_annotation(&mut self, node: Annotation, cursor: &mut Cursor) -> Annotation {
        fold_annotation(self, node, cursor)
    }

    fn fold_block(&mut self, node: Block, cursor: &mut Cursor) -> Block {
        fold_block(self, node, cursor)
    }

    fn fold_statement(&mut self, node: Statement, cursor: &mut Cursor) -> Statement {
        fold_statement(self, node, cursor)
    }

    fn fold_method_declaration(&mut self, node: MethodDeclaration, cursor: &mut Cursor) -> MethodDeclaration {
        fold_method_declaration(self, node, cursor)
    }

    fn fold_variable_declarations(
        &mut self,
        node: VariableDeclarations,
        cursor: &mut Cursor,
    ) -> VariableDeclarations {
        fold_variable_declarations(self, node, cursor)
    }

    fn fold_named_variable(&mut self, node: NamedVariable, cursor: &mut Cursor) -> NamedVariable {
        fold_named_variable(self, node, cursor)
    }

    fn fold_return(&mut self, node: Return, cursor: &mut Cursor) -> Return {
        fold_return(self, node, cursor)
    }

    fn fold_try(&mut self, node: Try, cursor: &mut Cursor) -> Try {
        fold_try(self, node, cursor)
    }

    fn fold_catch(&mut self, node: Catch, cursor: &mut Cursor) -> Catch {
        fold_catch(self, node, cursor)
    }

    /// Called for every position that names a type.
    fn fold_type_name(&mut self, node: NameTree, cursor: &mut Cursor) -> NameTree {
        fold_type_name(self, node, cursor)
    }

    fn fold_expression(&mut self, node: Expression, cursor: &mut Cursor) -> Expression {
        fold_expression(self, node, cursor)
    }

    fn fold_identifier(&mut self, node: Identifier, cursor: &mut Cursor) -> Identifier {
        fold_identifier(self, node, cursor)
    }

    fn fold_field_access(&mut self, node: FieldAccess, cursor: &mut Cursor) -> FieldAccess {
        fold_field_access(self, node, cursor)
    }

    fn fold_parameterized_type(&mut self, node: ParameterizedType, cursor: &mut Cursor) -> ParameterizedType {
        fold_parameterized_type(self, node, cursor)
    }

    fn fold_array_type(&mut self, node: ArrayType, cursor: &mut Cursor) -> ArrayType {
        fold_array_type(self, node, cursor)
    }

    fn fold_wildcard(&mut self, node: Wildcard, cursor: &mut Cursor) -> Wildcard {
        fold_wildcard(self, node, cursor)
    }

    fn fold_multi_catch(&mut self, node: MultiCatch, cursor: &mut Cursor) -> MultiCatch {
        fold_multi_catch(self, node, cursor)
    }

    fn fold_literal(&mut self, node: Literal, cursor: &mut Cursor) -> Literal {
        fold_literal(self, node, cursor)
    }

    fn fold_method_invocation(&mut self, node: MethodInvocation, cursor: &mut Cursor) -> MethodInvocation {
        fold_method_invocation(self, node, cursor)
    }

    fn fold_new_class(&mut self, node: NewClass, cursor: &mut Cursor) -> NewClass {
        fold_new_class(self, node, cursor)
    }

    fn fold_new_array(&mut self, node: NewArray, cursor: &mut Cursor) -> NewArray {
        fold_new_array(self, node, cursor)
    }

    fn fold_type_cast(&mut self, node: TypeCast, cursor: &mut Cursor) -> TypeCast {
        fold_type_cast(self, node, cursor)
    }

    fn fold_instance_of(&mut self, node: InstanceOf, cursor: &mut Cursor) -> InstanceOf {
        fold_instance_of(self, node, cursor)
    }

    fn fold_class_literal(&mut self, node: ClassLiteral, cursor: &mut Cursor) -> ClassLiteral {
        fold_class_literal(self, node, cursor)
    }
}

fn fold_type_names<F>(f: &mut F, names: Vec<NameTree>, cursor: &mut Cursor) -> Vec<NameTree>
where
    F: Fold + ?Sized,
{
    names
        .into_iter()
        .map(|name| f.fold_type_name(name, cursor))
        .collect()
}

fn fold_expressions<F>(f: &mut F, expressions: Vec<Expression>, cursor: &mut Cursor) -> Vec<Expression>
where
    F: Fold + ?Sized,
{
    expressions
        .into_iter()
        .map(|expression| f.fold_expression(expression, cursor))
        .collect()
}

fn fold_annotations<F>(f: &mut F, annotations: Vec<Annotation>, cursor: &mut Cursor) -> Vec<Annotation>
where
    F: Fold + ?Sized,
{
    annotations
        .into_iter()
        .map(|annotation| f.fold_annotation(annotation, cursor))
        .collect()
}

fn fold_type_parameters<F>(
    f: &mut F,
    type_parameters: Vec<TypeParameter>,
    cursor: &mut Cursor,
) -> Vec<TypeParameter>
where
    F: Fold + ?Sized,
{
    type_parameters
        .into_iter()
        .map(|type_parameter| f.fold_type_parameter(type_parameter, cursor))
        .collect()
}

pub fn fold_compilation_unit<F>(f: &mut F, mut node: CompilationUnit, cursor: &mut Cursor) -> CompilationUnit
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.package = node.package.map(|package| f.fold_package(package, cursor));
    node.imports = node
        .imports
        .into_iter()
        .map(|import| f.fold_import(import, cursor))
        .collect();
    node.classes = node
        .classes
        .into_iter()
        .map(|class| f.fold_class_declaration(class, cursor))
        .collect();
    cursor.pop();
    node
}

pub fn fold_package<F>(f: &mut F, mut node: Package, cursor: &mut Cursor) -> Package
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.name = f.fold_expression(node.name, cursor);
    cursor.pop();
    node
}

pub fn fold_import<F>(f: &mut F, mut node: Import, cursor: &mut Cursor) -> Import
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.qualid = f.fold_type_name(node.qualid, cursor);
    cursor.pop();
    node
}

pub fn fold_class_declaration<F>(f: &mut F, mut node: ClassDeclaration, cursor: &mut Cursor) -> ClassDeclaration
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.annotations = fold_annotations(f, node.annotations, cursor);
    node.name = f.fold_identifier(node.name, cursor);
    node.type_parameters = fold_type_parameters(f, node.type_parameters, cursor);
    node.extends = node.extends.map(|extends| f.fold_type_name(extends, cursor));
    node.implements = fold_type_names(f, node.implements, cursor);
    node.body = f.fold_block(node.body, cursor);
    cursor.pop();
    node
}

pub fn fold_type_parameter<F>(f: &mut F, mut node: TypeParameter, cursor: &mut Cursor) -> TypeParameter
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.name = f.fold_identifier(node.name, cursor);
    node.bounds = fold_type_names(f, node.bounds, cursor);
    cursor.pop();
    node
}

pub fn fold_annotation<F>(f: &mut F, mut node: Annotation, cursor: &mut Cursor) -> Annotation
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.annotation_type = f.fold_type_name(node.annotation_type, cursor);
    node.arguments = fold_expressions(f, node.arguments, cursor);
    cursor.pop();
    node
}

pub fn fold_block<F>(f: &mut F, mut node: Block, cursor: &mut Cursor) -> Block
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.statements = node
        .statements
        .into_iter()
        .map(|statement| f.fold_statement(statement, cursor))
        .collect();
    cursor.pop();
    node
}

pub fn fold_statement<F>(f: &mut F, node: Statement, cursor: &mut Cursor) -> Statement
where
    F: Fold + ?Sized,
{
    match node {
        Statement::ClassDeclaration(n) => f.fold_class_declaration(n, cursor).into(),
        Statement::MethodDeclaration(n) => f.fold_method_declaration(n, cursor).into(),
        Statement::VariableDeclarations(n) => f.fold_variable_declarations(n, cursor).into(),
        Statement::Block(n) => f.fold_block(n, cursor).into(),
        Statement::Return(n) => f.fold_return(n, cursor).into(),
        Statement::Try(n) => f.fold_try(n, cursor).into(),
        Statement::Expression(n) => Statement::Expression(f.fold_expression(n, cursor)),
    }
}

pub fn fold_method_declaration<F>(f: &mut F, mut node: MethodDeclaration, cursor: &mut Cursor) -> MethodDeclaration
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.annotations = fold_annotations(f, node.annotations, cursor);
    node.type_parameters = fold_type_parameters(f, node.type_parameters, cursor);
    node.return_type = node
        .return_type
        .map(|return_type| f.fold_type_name(return_type, cursor));
    node.name = f.fold_identifier(node.name, cursor);
    node.parameters = node
        .parameters
        .into_iter()
        .map(|parameter| f.fold_variable_declarations(parameter, cursor))
        .collect();
    node.throws = fold_type_names(f, node.throws, cursor);
    node.body = node.body.map(|body| f.fold_block(body, cursor));
    cursor.pop();
    node
}

pub fn fold_variable_declarations<F>(
    f: &mut F,
    mut node: VariableDeclarations,
    cursor: &mut Cursor,
) -> VariableDeclarations
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.annotations = fold_annotations(f, node.annotations, cursor);
    node.type_expression = node
        .type_expression
        .map(|type_expression| f.fold_type_name(type_expression, cursor));
    node.variables = node
        .variables
        .into_iter()
        .map(|variable| f.fold_named_variable(variable, cursor))
        .collect();
    cursor.pop();
    node
}

pub fn fold_named_variable<F>(f: &mut F, mut node: NamedVariable, cursor: &mut Cursor) -> NamedVariable
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.name = f.fold_identifier(node.name, cursor);
    node.initializer = node
        .initializer
        .map(|initializer| f.fold_expression(initializer, cursor));
    cursor.pop();
    node
}

pub fn fold_return<F>(f: &mut F, mut node: Return, cursor: &mut Cursor) -> Return
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.expression = node
        .expression
        .map(|expression| f.fold_expression(expression, cursor));
    cursor.pop();
    node
}

pub fn fold_try<F>(f: &mut F, mut node: Try, cursor: &mut Cursor) -> Try
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.resources = node
        .resources
        .into_iter()
        .map(|resource| f.fold_variable_declarations(resource, cursor))
        .collect();
    node.body = f.fold_block(node.body, cursor);
    node.catches = node
        .catches
        .into_iter()
        .map(|catch| f.fold_catch(catch, cursor))
        .collect();
    node.finally = node.finally.map(|finally| f.fold_block(finally, cursor));
    cursor.pop();
    node
}

pub fn fold_catch<F>(f: &mut F, mut node: Catch, cursor: &mut Cursor) -> Catch
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.parameter = f.fold_variable_declarations(node.parameter, cursor);
    node.body = f.fold_block(node.body, cursor);
    cursor.pop();
    node
}

pub fn fold_type_name<F>(f: &mut F, node: NameTree, cursor: &mut Cursor) -> NameTree
where
    F: Fold + ?Sized,
{
    match node {
        NameTree::Identifier(n) => f.fold_identifier(n, cursor).into(),
        NameTree::FieldAccess(n) => f.fold_field_access(n, cursor).into(),
        NameTree::ParameterizedType(n) => f.fold_parameterized_type(n, cursor).into(),
        NameTree::ArrayType(n) => f.fold_array_type(n, cursor).into(),
        NameTree::Wildcard(n) => f.fold_wildcard(n, cursor).into(),
        NameTree::MultiCatch(n) => f.fold_multi_catch(n, cursor).into(),
    }
}

pub fn fold_expression<F>(f: &mut F, node: Expression, cursor: &mut Cursor) -> Expression
where
    F: Fold + ?Sized,
{
    match node {
        Expression::Identifier(n) => f.fold_identifier(n, cursor).into(),
        Expression::FieldAccess(n) => f.fold_field_access(n, cursor).into(),
        Expression::Literal(n) => f.fold_literal(n, cursor).into(),
        Expression::MethodInvocation(n) => f.fold_method_invocation(n, cursor).into(),
        Expression::NewClass(n) => f.fold_new_class(n, cursor).into(),
        Expression::NewArray(n) => f.fold_new_array(n, cursor).into(),
        Expression::TypeCast(n) => f.fold_type_cast(n, cursor).into(),
        Expression::InstanceOf(n) => f.fold_instance_of(n, cursor).into(),
        Expression::ClassLiteral(n) => f.fold_class_literal(n, cursor).into(),
    }
}

pub fn fold_identifier<F>(_f: &mut F, node: Identifier, _cursor: &mut Cursor) -> Identifier
where
    F: Fold + ?Sized,
{
    node
}

pub fn fold_field_access<F>(f: &mut F, mut node: FieldAccess, cursor: &mut Cursor) -> FieldAccess
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.target = Box::new(f.fold_expression(*node.target, cursor));
    node.name = f.fold_identifier(node.name, cursor);
    cursor.pop();
    node
}

pub fn fold_parameterized_type<F>(f: &mut F, mut node: ParameterizedType, cursor: &mut Cursor) -> ParameterizedType
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.clazz = Box::new(f.fold_type_name(*node.clazz, cursor));
    node.type_parameters = fold_type_names(f, node.type_parameters, cursor);
    cursor.pop();
    node
}

pub fn fold_array_type<F>(f: &mut F, mut node: ArrayType, cursor: &mut Cursor) -> ArrayType
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.element_type = Box::new(f.fold_type_name(*node.element_type, cursor));
    cursor.pop();
    node
}

pub fn fold_wildcard<F>(f: &mut F, mut node: Wildcard, cursor: &mut Cursor) -> Wildcard
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.bounded_type = node
        .bounded_type
        .map(|bounded_type| Box::new(f.fold_type_name(*bounded_type, cursor)));
    cursor.pop();
    node
}

pub fn fold_multi_catch<F>(f: &mut F, mut node: MultiCatch, cursor: &mut Cursor) -> MultiCatch
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.alternatives = fold_type_names(f, node.alternatives, cursor);
    cursor.pop();
    node
}

pub fn fold_literal<F>(_f: &mut F, node: Literal, _cursor: &mut Cursor) -> Literal
where
    F: Fold + ?Sized,
{
    node
}

pub fn fold_method_invocation<F>(f: &mut F, mut node: MethodInvocation, cursor: &mut Cursor) -> MethodInvocation
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.select = node.select.map(|select| {
        Box::new(match *select {
            Select::Receiver(receiver) => Select::Receiver(f.fold_expression(receiver, cursor)),
            Select::Type(clazz) => Select::Type(f.fold_type_name(clazz, cursor)),
        })
    });
    node.type_arguments = fold_type_names(f, node.type_arguments, cursor);
    node.name = f.fold_identifier(node.name, cursor);
    node.arguments = fold_expressions(f, node.arguments, cursor);
    cursor.pop();
    node
}

pub fn fold_new_class<F>(f: &mut F, mut node: NewClass, cursor: &mut Cursor) -> NewClass
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.clazz = f.fold_type_name(node.clazz, cursor);
    node.arguments = fold_expressions(f, node.arguments, cursor);
    node.body = node.body.map(|body| f.fold_block(body, cursor));
    cursor.pop();
    node
}

pub fn fold_new_array<F>(f: &mut F, mut node: NewArray, cursor: &mut Cursor) -> NewArray
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.type_expression = f.fold_type_name(node.type_expression, cursor);
    node.dimensions = fold_expressions(f, node.dimensions, cursor);
    node.initializer = fold_expressions(f, node.initializer, cursor);
    cursor.pop();
    node
}

pub fn fold_type_cast<F>(f: &mut F, mut node: TypeCast, cursor: &mut Cursor) -> TypeCast
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.clazz = f.fold_type_name(node.clazz, cursor);
    node.expression = Box::new(f.fold_expression(*node.expression, cursor));
    cursor.pop();
    node
}

pub fn fold_instance_of<F>(f: &mut F, mut node: InstanceOf, cursor: &mut Cursor) -> InstanceOf
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.expression = Box::new(f.fold_expression(*node.expression, cursor));
    node.clazz = f.fold_type_name(node.clazz, cursor);
    cursor.pop();
    node
}

pub fn fold_class_literal<F>(f: &mut F, mut node: ClassLiteral, cursor: &mut Cursor) -> ClassLiteral
where
    F: Fold + ?Sized,
{
    cursor.push(&node);
    node.clazz = f.fold_type_name(node.clazz, cursor);
    cursor.pop();
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::{Marker, SearchResult};
    use crate::tree::{NodeKind, Tree};

    struct Identity;

    impl Fold for Identity {}

    fn sample() -> CompilationUnit {
        CompilationUnit::new("C.java")
            .with_package("pkg")
            .with_import(Import::new("pkg.Foo"))
            .with_class(
                ClassDeclaration::new("pkg.C")
                    .with_member(VariableDeclarations::single(NameTree::class("pkg.Foo"), "f"))
                    .with_member(
                        MethodDeclaration::new("make", Some(NameTree::simple("Foo", "pkg.Foo")))
                            .with_body(Block::new(vec![Return::new(Some(
                                NewClass::new(NameTree::simple("Foo", "pkg.Foo")).into(),
                            ))
                            .into()])),
                    ),
            )
    }

    #[test]
    fn default_fold_is_identity() {
        let tree = sample();
        let before = serde_json::to_value(&tree).expect("tree should serialize");
        let after = walk(&mut Identity, tree);
        assert_eq!(
            serde_json::to_value(&after).expect("tree should serialize"),
            before
        );
    }

    /// Marks every type name outside imports.
    struct MarkOutsideImports;

    impl Fold for MarkOutsideImports {
        fn tracks_ancestors(&self) -> bool {
            true
        }

        fn fold_type_name(&mut self, node: NameTree, cursor: &mut Cursor) -> NameTree {
            let node = fold_type_name(self, node, cursor);
            if cursor.is_within(NodeKind::Import) {
                node
            } else {
                node.with_marker(Marker::SearchResult(SearchResult::new("test")))
            }
        }
    }

    #[test]
    fn hooks_see_ancestors_and_keep_ids() {
        let tree = sample();
        let import_id = tree.imports[0].qualid.id();
        let after = walk(&mut MarkOutsideImports, tree);

        assert_eq!(after.imports[0].qualid.id(), import_id);
        assert!(!after.imports[0].qualid.markers().has_search_result());

        let Statement::VariableDeclarations(field) = &after.classes[0].body.statements[0] else {
            panic!("expected a field");
        };
        assert!(field
            .type_expression
            .as_ref()
            .is_some_and(|name| name.markers().has_search_result()));

        let Statement::MethodDeclaration(method) = &after.classes[0].body.statements[1] else {
            panic!("expected a method");
        };
        assert!(method
            .return_type
            .as_ref()
            .is_some_and(|name| name.markers().has_search_result()));
    }

    #[test]
    fn new_type_positions_fold_like_the_others() {
        use crate::tree::BoundKind;

        // try { Foo.load(Foo.class); } catch (Foo | Bar e) {}  List<? extends Foo> l;
        let statements = vec![
            Try::new(Block::new(vec![Statement::Expression(
                MethodInvocation::new_static(NameTree::simple("Foo", "pkg.Foo"), "load")
                    .with_argument(ClassLiteral::new(NameTree::simple("Foo", "pkg.Foo")))
                    .into(),
            )]))
            .with_catch(Catch::new(
                VariableDeclarations::single(
                    MultiCatch::new(vec![
                        NameTree::simple("Foo", "pkg.Foo"),
                        NameTree::simple("Bar", "pkg.Bar"),
                    ])
                    .into(),
                    "e",
                ),
                Block::default(),
            ))
            .into(),
            VariableDeclarations::single(
                ParameterizedType::new(
                    NameTree::simple("List", "java.util.List"),
                    vec![Wildcard::bounded(BoundKind::Extends, NameTree::simple("Foo", "pkg.Foo")).into()],
                )
                .into(),
                "l",
            )
            .into(),
        ];
        let block = Block::new(statements);
        let before = serde_json::to_value(&block).expect("block should serialize");

        let unchanged = walk(&mut Identity, block.clone());
        assert_eq!(
            serde_json::to_value(&unchanged).expect("block should serialize"),
            before
        );

        let marked = walk(&mut MarkOutsideImports, block);
        let marked_json = serde_json::to_string(&marked).expect("block should serialize");
        // 2 in the try body, 3 in the catch, 4 in the declaration
        assert_eq!(marked_json.matches("search_result").count(), 9);
    }

    #[test]
    fn folds_start_from_any_subtree() {
        let name = walk(&mut MarkOutsideImports, NameTree::simple("Foo", "pkg.Foo"));
        assert!(name.markers().has_search_result());
    }
}
