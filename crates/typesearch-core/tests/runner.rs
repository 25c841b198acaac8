//! Integration tests for the batch runner.

use std::path::Path;
use typesearch_core::fold::{self, Fold};
use typesearch_core::tree::{ClassDeclaration, Import, VariableDeclarations};
use typesearch_core::{
    CompilationUnit, Cursor, Marker, NameTree, Recipe, Runner, RunnerError, SearchResult, Tree,
};

/// Marks every type name written as a bare identifier.
struct MarkSimpleNames;

impl Recipe for MarkSimpleNames {
    fn name(&self) -> &'static str {
        "mark-simple-names"
    }

    fn code(&self) -> &'static str {
        "TEST001"
    }

    fn visitor(&self) -> Box<dyn Fold + '_> {
        Box::new(SimpleNameMarker)
    }
}

struct SimpleNameMarker;

impl Fold for SimpleNameMarker {
    fn fold_type_name(&mut self, node: NameTree, cursor: &mut Cursor) -> NameTree {
        let node = fold::fold_type_name(self, node, cursor);
        if matches!(node, NameTree::Identifier(_)) {
            node.with_marker(Marker::SearchResult(SearchResult::new("mark-simple-names")))
        } else {
            node
        }
    }
}

fn write_tree(dir: &Path, relative: &str, tree: &CompilationUnit) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create dirs");
    }
    std::fs::write(path, tree.to_json().expect("serialize")).expect("write tree");
}

fn tree_with_fields(count: usize) -> CompilationUnit {
    let mut class = ClassDeclaration::new("pkg.C");
    for i in 0..count {
        class = class.with_member(VariableDeclarations::single(
            NameTree::simple("Foo", "pkg.Foo"),
            format!("f{i}"),
        ));
    }
    CompilationUnit::new("")
        .with_import(Import::new("pkg.Foo"))
        .with_class(class)
}

#[test]
fn runs_recipes_over_tree_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_tree(dir.path(), "b/B.json", &tree_with_fields(1));
    write_tree(dir.path(), "a/A.json", &tree_with_fields(2));
    write_tree(dir.path(), "build/Skipped.json", &tree_with_fields(5));

    let runner = Runner::builder()
        .root(dir.path())
        .recipe(MarkSimpleNames)
        .build()
        .expect("build runner");
    let report = runner.run().expect("run");

    assert_eq!(report.files_searched, 2);
    assert_eq!(report.len(), 3);
    assert_eq!(report.findings[0].location.file, Path::new("a/A.json"));
    assert_eq!(report.findings[0].code, "TEST001");
    assert_eq!(report.findings[0].snippet, "Foo");
    assert_eq!(report.findings[0].enclosing_class.as_deref(), Some("pkg.C"));
    assert_eq!(report.findings[2].location.file, Path::new("b/B.json"));
    assert_eq!(report.count_by_recipe().get("mark-simple-names"), Some(&3));
}

#[test]
fn sink_receives_annotated_trees() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_tree(dir.path(), "A.json", &tree_with_fields(1));

    let runner = Runner::builder()
        .root(dir.path())
        .recipe(MarkSimpleNames)
        .build()
        .expect("build runner");

    let mut seen = Vec::new();
    runner
        .run_with(|path, tree| {
            seen.push((path.to_path_buf(), tree.classes[0].markers().len()));
            Ok(())
        })
        .expect("run");

    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, Path::new("A.json"));
}

#[test]
fn parse_errors_skip_or_fail() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_tree(dir.path(), "Good.json", &tree_with_fields(1));
    std::fs::write(dir.path().join("Bad.json"), "{ not json").expect("write");

    let lenient = Runner::builder()
        .root(dir.path())
        .recipe(MarkSimpleNames)
        .build()
        .expect("build runner");
    let report = lenient.run().expect("bad files are skipped");
    assert_eq!(report.files_searched, 1);
    assert_eq!(report.len(), 1);

    let strict = Runner::builder()
        .root(dir.path())
        .recipe(MarkSimpleNames)
        .fail_on_parse_error(true)
        .build()
        .expect("build runner");
    assert!(matches!(strict.run(), Err(RunnerError::Parse { .. })));
}

#[test]
fn run_tree_uses_source_path() {
    let runner = Runner::builder()
        .root(".")
        .recipe(MarkSimpleNames)
        .build()
        .expect("build runner");

    let mut tree = tree_with_fields(2);
    tree.source_path = "src/C.java".into();
    let id = tree.id();
    let (annotated, findings) = runner.run_tree(tree);

    assert_eq!(annotated.id(), id);
    assert_eq!(findings.len(), 2);
    assert!(findings
        .iter()
        .all(|f| f.location.file == Path::new("src/C.java")));
}

#[test]
fn root_inside_build_directory_is_still_searched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("build/project");
    write_tree(&root, "A.json", &tree_with_fields(1));
    write_tree(&root, "build/Generated.json", &tree_with_fields(4));

    let runner = Runner::builder()
        .root(&root)
        .recipe(MarkSimpleNames)
        .build()
        .expect("build runner");
    let report = runner.run().expect("run");

    assert_eq!(report.files_searched, 1);
    assert_eq!(report.len(), 1);
    assert_eq!(report.findings[0].location.file, Path::new("A.json"));
}
