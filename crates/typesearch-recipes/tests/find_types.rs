//! End-to-end tests for `find-types` over fixture trees.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use typesearch_core::{
    collect_search_results, strip_search_results, CompilationUnit, Config, NodeId, Runner, Tree,
};
use typesearch_recipes::{load_recipes, FindTypes, Recipe};

const ORDER: &str = "com.example.model.Order";

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load(relative: &str) -> CompilationUnit {
    let json = std::fs::read_to_string(fixtures().join("trees").join(relative)).expect("read fixture");
    CompilationUnit::from_json(&json).expect("parse fixture")
}

fn marked_ids(tree: &CompilationUnit) -> HashSet<NodeId> {
    collect_search_results(tree).iter().map(|m| m.id).collect()
}

#[test]
fn marking_and_collecting_agree() {
    for file in ["orders/OrderService.json", "web/OrderController.json"] {
        let tree = load(file);
        let recipe = FindTypes::new(ORDER).expect("valid name");

        let collected: HashSet<NodeId> = recipe.collect(&tree).iter().map(|n| n.id()).collect();
        let annotated = recipe.run(tree.clone());

        assert_eq!(marked_ids(&annotated), collected, "{file}");
    }
}

#[test]
fn finds_order_references_outside_imports() {
    let tree = load("orders/OrderService.json");
    let annotated = FindTypes::new(ORDER).expect("valid name").run(tree);

    let positions: Vec<_> = collect_search_results(&annotated)
        .into_iter()
        .map(|m| {
            let p = m.position.expect("fixture has positions");
            (p.line, p.column, m.snippet)
        })
        .collect();

    assert_eq!(
        positions,
        vec![
            (7, 18, "Order".to_string()),
            (9, 12, "Order".to_string()),
            (10, 9, "Order".to_string()),
            (10, 20, "Order".to_string()),
        ]
    );
}

#[test]
fn qualified_references_are_marked_as_a_whole() {
    let tree = load("web/OrderController.json");
    let annotated = FindTypes::new(ORDER).expect("valid name").run(tree);

    let marked = collect_search_results(&annotated);
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].snippet, ORDER);
    assert_eq!(
        marked[0].enclosing_class.as_deref(),
        Some("com.example.web.OrderController")
    );
}

#[test]
fn stripping_markers_restores_the_input() {
    let tree = load("orders/OrderService.json");
    let before = serde_json::to_value(&tree).expect("serialize");

    let annotated = FindTypes::new(ORDER).expect("valid name").run(tree);
    assert_ne!(serde_json::to_value(&annotated).expect("serialize"), before);

    let stripped = strip_search_results(annotated);
    assert_eq!(serde_json::to_value(&stripped).expect("serialize"), before);
}

#[test]
fn no_match_leaves_tree_untouched() {
    let tree = load("orders/OrderService.json");
    let before = serde_json::to_value(&tree).expect("serialize");

    let annotated = FindTypes::new("com.example.model.Invoice")
        .expect("valid name")
        .run(tree);

    assert_eq!(serde_json::to_value(&annotated).expect("serialize"), before);
}

#[test]
fn one_recipe_serves_many_threads() {
    let recipe = FindTypes::new(ORDER).expect("valid name");
    let trees = [load("orders/OrderService.json"), load("web/OrderController.json")];

    let counts: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = trees
            .iter()
            .map(|tree| {
                let recipe = &recipe;
                s.spawn(move || {
                    let annotated = recipe.run(tree.clone());
                    collect_search_results(&annotated).len()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("search thread panicked"))
            .collect()
    });

    assert_eq!(counts, vec![4, 1]);
}

#[test]
fn runs_configured_recipes_over_fixture_directory() {
    let config = Config::from_file(&fixtures().join("typesearch.toml")).expect("load config");
    let recipes = load_recipes(&config).expect("build recipes");
    assert_eq!(recipes.len(), 2);

    let runner = Runner::builder()
        .config(config)
        .root(fixtures().join("trees"))
        .recipes(recipes)
        .build()
        .expect("build runner");
    let report = runner.run().expect("run");

    // NotATree.json is skipped, build/ is excluded
    assert_eq!(report.files_searched, 2);
    assert_eq!(report.len(), 6);

    let counts = report.count_by_recipe();
    assert_eq!(counts.get("find-types"), Some(&6));

    let service = report.in_file(Path::new("orders/OrderService.json"));
    assert_eq!(service.len(), 5);
    assert_eq!(service[0].snippet, "List");
    assert_eq!(service[0].location.line, Some(7));
    assert_eq!(service[0].location.column, Some(13));
    assert!(service.iter().all(|f| f.code == "TS001"));

    let controller = report.in_file(Path::new("web/OrderController.json"));
    assert_eq!(controller.len(), 1);
    assert_eq!(controller[0].to_string(), format!("web/OrderController.json:8:20: [TS001] {ORDER} in com.example.web.OrderController"));
}
