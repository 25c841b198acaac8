//! Ancestor tracking during a traversal.

use crate::tree::{NodeId, NodeKind, Tree};

/// One ancestor recorded by a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorEntry {
    /// Kind of the ancestor.
    pub kind: NodeKind,
    /// Identity of the ancestor.
    pub id: NodeId,
}

/// The path from the root of a traversal down to the node being visited.
///
/// The traversal pushes a node before walking its children and pops it
/// afterwards, so while a hook runs for some node the cursor holds that
/// node's strict ancestors: the root first, the immediate parent last.
///
/// A cursor created without tracking ignores pushes and always reports no
/// ancestors. Visitors that never ask about context use one to skip the
/// bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    tracking: bool,
    ancestors: Vec<CursorEntry>,
}

impl Cursor {
    /// Creates an empty cursor.
    #[must_use]
    pub fn new(tracking: bool) -> Self {
        Self {
            tracking,
            ancestors: Vec::new(),
        }
    }

    /// Returns true if this cursor records ancestors.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Enters `node`.
    pub fn push<T: Tree + ?Sized>(&mut self, node: &T) {
        if self.tracking {
            self.ancestors.push(CursorEntry {
                kind: node.kind(),
                id: node.id(),
            });
        }
    }

    /// Leaves the most recently entered node.
    pub fn pop(&mut self) {
        if self.tracking {
            self.ancestors.pop();
        }
    }

    /// Returns the immediate parent of the current node.
    #[must_use]
    pub fn parent(&self) -> Option<&CursorEntry> {
        self.ancestors.last()
    }

    /// Returns the nearest ancestor of the given kind.
    #[must_use]
    pub fn first_enclosing(&self, kind: NodeKind) -> Option<&CursorEntry> {
        self.ancestors.iter().rev().find(|entry| entry.kind == kind)
    }

    /// Returns true if some ancestor has the given kind.
    #[must_use]
    pub fn is_within(&self, kind: NodeKind) -> bool {
        self.first_enclosing(kind).is_some()
    }

    /// Returns all ancestors, root first.
    #[must_use]
    pub fn ancestors(&self) -> &[CursorEntry] {
        &self.ancestors
    }

    /// Number of recorded ancestors.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{ClassDeclaration, CompilationUnit, Import};

    #[test]
    fn first_enclosing_prefers_innermost() {
        let cu = CompilationUnit::new("A.java");
        let outer = ClassDeclaration::new("pkg.Outer");
        let inner = ClassDeclaration::new("pkg.Outer$Inner");

        let mut cursor = Cursor::new(true);
        cursor.push(&cu);
        cursor.push(&outer);
        cursor.push(&inner);

        assert_eq!(cursor.depth(), 3);
        assert_eq!(
            cursor.first_enclosing(NodeKind::ClassDeclaration).map(|e| e.id),
            Some(inner.id)
        );
        assert_eq!(cursor.parent().map(|e| e.id), Some(inner.id));
        assert!(!cursor.is_within(NodeKind::Import));

        cursor.pop();
        assert_eq!(
            cursor.first_enclosing(NodeKind::ClassDeclaration).map(|e| e.id),
            Some(outer.id)
        );
        assert_eq!(cursor.ancestors()[0].kind, NodeKind::CompilationUnit);
    }

    #[test]
    fn untracked_cursor_records_nothing() {
        let import = Import::new("pkg.Foo");
        let mut cursor = Cursor::new(false);
        cursor.push(&import);

        assert!(!cursor.is_tracking());
        assert_eq!(cursor.depth(), 0);
        assert!(cursor.first_enclosing(NodeKind::Import).is_none());
        cursor.pop();
        assert!(cursor.parent().is_none());
    }
}
