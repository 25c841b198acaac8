//! Markers attached to tree nodes.
//!
//! A marker annotates a node without touching its semantic content. Nodes
//! compare by [`NodeId`](crate::NodeId), so a node with an extra marker is
//! still equal to the node it was copied from.

use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source position recorded by the producer of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Flags a node as a match of a search recipe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Unique id of this marker.
    pub id: Uuid,
    /// Name of the recipe that produced the match (e.g., "find-types").
    pub recipe: String,
    /// Human-readable description of the search, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SearchResult {
    /// Creates a search result for the named recipe.
    #[must_use]
    pub fn new(recipe: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe: recipe.into(),
            description: None,
        }
    }

    /// Creates a search result referencing a recipe instance.
    #[must_use]
    pub fn for_recipe<R: Recipe + ?Sized>(recipe: &R) -> Self {
        Self::new(recipe.name()).with_description(recipe.display_name())
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single annotation on a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "marker", rename_all = "snake_case")]
pub enum Marker {
    /// The node matched a search.
    SearchResult(SearchResult),
    /// Where the node starts in its source file.
    Position(Position),
}

/// Ordered set of markers on a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markers(Vec<Marker>);

impl Markers {
    /// Creates an empty marker list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are no markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over all markers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.0.iter()
    }

    /// Appends a marker.
    pub fn push(&mut self, marker: Marker) {
        self.0.push(marker);
    }

    /// Iterates over the search results on this node.
    pub fn search_results(&self) -> impl Iterator<Item = &SearchResult> {
        self.0.iter().filter_map(|m| match m {
            Marker::SearchResult(result) => Some(result),
            Marker::Position(_) => None,
        })
    }

    /// Returns true if any search result is attached.
    #[must_use]
    pub fn has_search_result(&self) -> bool {
        self.search_results().next().is_some()
    }

    /// Returns the recorded source position, if any.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.0.iter().find_map(|m| match m {
            Marker::Position(position) => Some(*position),
            Marker::SearchResult(_) => None,
        })
    }

    /// Removes every search result, keeping other markers in order.
    pub fn remove_search_results(&mut self) {
        self.0.retain(|m| !matches!(m, Marker::SearchResult(_)));
    }
}

impl FromIterator<Marker> for Markers {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_search_results_keeps_positions() {
        let mut markers: Markers = [
            Marker::Position(Position::new(3, 5)),
            Marker::SearchResult(SearchResult::new("find-types")),
        ]
        .into_iter()
        .collect();
        assert!(markers.has_search_result());

        markers.remove_search_results();

        assert_eq!(markers.len(), 1);
        assert!(!markers.has_search_result());
        assert_eq!(markers.position(), Some(Position::new(3, 5)));
    }

    #[test]
    fn search_results_are_unique() {
        let a = SearchResult::new("find-types");
        let b = SearchResult::new("find-types");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn marker_json_shape() {
        let marker = Marker::Position(Position::new(1, 2));
        let json = serde_json::to_string(&marker).expect("marker should serialize");
        assert_eq!(json, r#"{"marker":"position","line":1,"column":2}"#);
    }
}
