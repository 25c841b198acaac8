//! Findings aggregated from search-result markers.

use crate::marker::Position;
use crate::search_results::MarkedName;
use crate::tree::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Where a finding is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Tree file the finding came from.
    pub file: PathBuf,
    /// Identity of the marked node.
    pub node: NodeId,
    /// Line number (1-indexed), if the tree recorded positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Column number (1-indexed), if the tree recorded positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl Location {
    /// Creates a location without a source position.
    #[must_use]
    pub fn new(file: PathBuf, node: NodeId) -> Self {
        Self {
            file,
            node,
            line: None,
            column: None,
        }
    }

    /// Sets the source position.
    #[must_use]
    pub fn with_position(mut self, position: Option<Position>) -> Self {
        self.line = position.map(|p| p.line);
        self.column = position.map(|p| p.column);
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file.display())?;
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, ":{line}:{column}"),
            _ => write!(f, "#{}", self.node),
        }
    }
}

/// One marked node, as reported to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Recipe code (e.g., "TS001").
    pub code: String,
    /// Recipe name (e.g., "find-types").
    pub recipe: String,
    /// Where the match is.
    pub location: Location,
    /// The matched node in source form.
    pub snippet: String,
    /// Fully qualified name of the innermost enclosing class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosing_class: Option<String>,
    /// Description recorded by the recipe, e.g. the type searched for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Finding {
    /// Creates a finding.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        recipe: impl Into<String>,
        location: Location,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            recipe: recipe.into(),
            location,
            snippet: snippet.into(),
            enclosing_class: None,
            description: None,
        }
    }

    /// Builds one finding per search result on a marked name.
    ///
    /// `code_of` maps a recipe name to its code.
    pub fn from_marked<'a, C>(
        file: &'a std::path::Path,
        marked: &'a MarkedName,
        code_of: C,
    ) -> impl Iterator<Item = Self> + 'a
    where
        C: Fn(&str) -> String + 'a,
    {
        marked.results.iter().map(move |result| Self {
            code: code_of(&result.recipe),
            recipe: result.recipe.clone(),
            location: Location::new(file.to_path_buf(), marked.id).with_position(marked.position),
            snippet: marked.snippet.clone(),
            enclosing_class: marked.enclosing_class.clone(),
            description: result.description.clone(),
        })
    }

    /// Formats the finding for display.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!("{} {} at {}\n", self.code, self.recipe, self.location);
        let _ = write!(output, "  found: {}", self.snippet);
        if let Some(class) = &self.enclosing_class {
            let _ = write!(output, " in {class}");
        }
        output.push('\n');
        if let Some(description) = &self.description {
            let _ = writeln!(output, "  = search: {description}");
        }
        output
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{}] {}",
            self.location, self.code, self.snippet
        )?;
        if let Some(class) = &self.enclosing_class {
            write!(f, " in {class}")?;
        }
        Ok(())
    }
}

/// Result of a search run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchReport {
    /// All findings, grouped by file.
    pub findings: Vec<Finding>,
    /// Number of tree files searched.
    pub files_searched: usize,
}

impl SearchReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of findings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Counts findings per recipe name.
    #[must_use]
    pub fn count_by_recipe(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.recipe.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Appends the findings and file count of another report.
    pub fn extend(&mut self, other: Self) {
        self.findings.extend(other.findings);
        self.files_searched += other.files_searched;
    }

    /// Returns the findings for one file.
    #[must_use]
    pub fn in_file(&self, file: &std::path::Path) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.location.file == file)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::SearchResult;
    use insta::assert_snapshot;

    fn finding(file: &str, recipe: &str) -> Finding {
        Finding::new(
            "TS001",
            recipe,
            Location::new(PathBuf::from(file), NodeId::random()),
            "pkg.Foo",
        )
    }

    #[test]
    fn counts_and_extend() {
        let mut report = SearchReport {
            findings: vec![finding("a.json", "find-types"), finding("b.json", "find-types")],
            files_searched: 2,
        };
        report.extend(SearchReport {
            findings: vec![finding("c.json", "other")],
            files_searched: 1,
        });

        assert_eq!(report.len(), 3);
        assert_eq!(report.files_searched, 3);
        let counts = report.count_by_recipe();
        assert_eq!(counts.get("find-types"), Some(&2));
        assert_eq!(counts.get("other"), Some(&1));
        assert_eq!(report.in_file(std::path::Path::new("a.json")).len(), 1);
    }

    #[test]
    fn display_uses_position_when_known() {
        let mut finding = finding("src/C.json", "find-types");
        finding.location = finding
            .location
            .with_position(Some(Position::new(3, 5)));
        finding.enclosing_class = Some("pkg.C".to_string());
        assert_snapshot!(finding.to_string(), @"src/C.json:3:5: [TS001] pkg.Foo in pkg.C");
    }

    #[test]
    fn one_finding_per_search_result() {
        let marked = MarkedName {
            id: NodeId::random(),
            snippet: "Foo".to_string(),
            enclosing_class: None,
            position: None,
            results: vec![
                SearchResult::new("find-types").with_description("pkg.Foo"),
                SearchResult::new("other"),
            ],
        };
        let file = std::path::Path::new("C.json");
        let findings: Vec<_> = Finding::from_marked(file, &marked, |recipe| {
            if recipe == "find-types" { "TS001" } else { "?" }.to_string()
        })
        .collect();

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].code, "TS001");
        assert_eq!(findings[0].description.as_deref(), Some("pkg.Foo"));
        assert_eq!(findings[1].code, "?");
        assert!(findings[0].format().contains("found: Foo"));
    }
}
