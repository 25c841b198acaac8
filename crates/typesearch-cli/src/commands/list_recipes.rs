//! List recipes command implementation.

use typesearch_recipes::available_recipes;

/// Runs the list-recipes command.
pub fn run() {
    println!("Available recipes:\n");
    println!("{:<8} {:<14} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for recipe in available_recipes() {
        println!("{:<8} {:<14} {}", recipe.code, recipe.name, recipe.description);
        for option in recipe.options {
            println!("{:<8} {:<14}   option: {option}", "", "");
        }
    }

    println!("\nSearch for one type directly:");
    println!("  typesearch find --type java.util.List ./trees");
    println!("\nOr list recipes in typesearch.toml and run them all:");
    println!("  typesearch run");
}
