//! Reading and removing search-result markers.

use crate::cursor::Cursor;
use crate::fold::{self, Fold};
use crate::java_type;
use crate::marker::{Position, SearchResult};
use crate::tree::{
    ArrayType, ClassDeclaration, CompilationUnit, FieldAccess, Identifier, MultiCatch, NodeId,
    ParameterizedType, Tree, Wildcard,
};
use crate::visit::{self, Visit};
use std::fmt::Display;

/// A name node that carries at least one search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedName {
    /// Identity of the marked node.
    pub id: NodeId,
    /// The node printed in source form.
    pub snippet: String,
    /// Fully qualified name of the innermost enclosing class.
    pub enclosing_class: Option<String>,
    /// Source position, if the producer of the tree recorded one.
    pub position: Option<Position>,
    /// The search results on the node.
    pub results: Vec<SearchResult>,
}

/// Gathers every marked name in `tree`, in traversal order.
///
/// Each node appears once, even if several recipes marked it.
#[must_use]
pub fn collect_search_results(tree: &CompilationUnit) -> Vec<MarkedName> {
    let mut collector = MarkedNames::default();
    let mut found = Vec::new();
    visit::walk(&mut collector, tree, &mut found);
    found
}

#[derive(Default)]
struct MarkedNames {
    classes: Vec<String>,
}

impl MarkedNames {
    fn record<T: Tree + Display>(&self, node: &T, found: &mut Vec<MarkedName>) {
        let markers = node.markers();
        if !markers.has_search_result() {
            return;
        }
        found.push(MarkedName {
            id: node.id(),
            snippet: node.to_string(),
            enclosing_class: self.classes.last().cloned(),
            position: markers.position(),
            results: markers.search_results().cloned().collect(),
        });
    }
}

impl<'t> Visit<'t, Vec<MarkedName>> for MarkedNames {
    fn visit_class_declaration(
        &mut self,
        node: &'t ClassDeclaration,
        cursor: &mut Cursor,
        found: &mut Vec<MarkedName>,
    ) {
        let name = java_type::as_class(node.name.ty.as_ref()).map_or_else(
            || node.name.simple_name.clone(),
            |class| class.fully_qualified_name().to_string(),
        );
        self.classes.push(name);
        visit::visit_class_declaration(self, node, cursor, found);
        self.classes.pop();
    }

    fn visit_identifier(&mut self, node: &'t Identifier, _cursor: &mut Cursor, found: &mut Vec<MarkedName>) {
        self.record(node, found);
    }

    fn visit_field_access(&mut self, node: &'t FieldAccess, cursor: &mut Cursor, found: &mut Vec<MarkedName>) {
        visit::visit_field_access(self, node, cursor, found);
        self.record(node, found);
    }

    fn visit_parameterized_type(
        &mut self,
        node: &'t ParameterizedType,
        cursor: &mut Cursor,
        found: &mut Vec<MarkedName>,
    ) {
        visit::visit_parameterized_type(self, node, cursor, found);
        self.record(node, found);
    }

    fn visit_array_type(&mut self, node: &'t ArrayType, cursor: &mut Cursor, found: &mut Vec<MarkedName>) {
        visit::visit_array_type(self, node, cursor, found);
        self.record(node, found);
    }

    fn visit_wildcard(&mut self, node: &'t Wildcard, cursor: &mut Cursor, found: &mut Vec<MarkedName>) {
        visit::visit_wildcard(self, node, cursor, found);
        self.record(node, found);
    }

    fn visit_multi_catch(&mut self, node: &'t MultiCatch, cursor: &mut Cursor, found: &mut Vec<MarkedName>) {
        visit::visit_multi_catch(self, node, cursor, found);
        self.record(node, found);
    }
}

/// Removes every search result from the name nodes of `tree`.
///
/// Other markers, ids and structure are left as they are, so stripping an
/// annotated tree gives back the tree the search started from.
#[must_use]
pub fn strip_search_results(tree: CompilationUnit) -> CompilationUnit {
    fold::walk(&mut StripSearchResults, tree)
}

struct StripSearchResults;

impl Fold for StripSearchResults {
    fn fold_identifier(&mut self, mut node: Identifier, _cursor: &mut Cursor) -> Identifier {
        node.markers.remove_search_results();
        node
    }

    fn fold_field_access(&mut self, node: FieldAccess, cursor: &mut Cursor) -> FieldAccess {
        let mut node = fold::fold_field_access(self, node, cursor);
        node.markers.remove_search_results();
        node
    }

    fn fold_parameterized_type(&mut self, node: ParameterizedType, cursor: &mut Cursor) -> ParameterizedType {
        let mut node = fold::fold_parameterized_type(self, node, cursor);
        node.markers.remove_search_results();
        node
    }

    fn fold_array_type(&mut self, node: ArrayType, cursor: &mut Cursor) -> ArrayType {
        let mut node = fold::fold_array_type(self, node, cursor);
        node.markers.remove_search_results();
        node
    }

    fn fold_wildcard(&mut self, node: Wildcard, cursor: &mut Cursor) -> Wildcard {
        let mut node = fold::fold_wildcard(self, node, cursor);
        node.markers.remove_search_results();
        node
    }

    fn fold_multi_catch(&mut self, node: MultiCatch, cursor: &mut Cursor) -> MultiCatch {
        let mut node = fold::fold_multi_catch(self, node, cursor);
        node.markers.remove_search_results();
        node
    }
}
