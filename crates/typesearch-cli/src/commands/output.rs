//! Shared output formatting for search reports.

use anyhow::Result;
use typesearch_core::SearchReport;

use crate::OutputFormat;

/// Print a report in the specified format.
pub fn print(report: &SearchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &SearchReport) {
    for finding in &report.findings {
        println!("{}", finding.format());
    }

    let color = if report.is_empty() {
        "\x1b[32m"
    } else {
        "\x1b[33m"
    };
    println!("{color}{}\x1b[0m", summary(report));
}

fn print_json(report: &SearchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &SearchReport) {
    for finding in &report.findings {
        println!("{finding}");
    }
}

fn summary(report: &SearchReport) -> String {
    use std::fmt::Write;
    let mut line = format!(
        "Found {} reference(s) in {} file(s)",
        report.len(),
        report.files_searched
    );
    let counts = report.count_by_recipe();
    if counts.len() > 1 {
        let parts: Vec<String> = counts
            .iter()
            .map(|(recipe, count)| format!("{recipe}: {count}"))
            .collect();
        let _ = write!(line, " ({})", parts.join(", "));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use typesearch_core::{Finding, Location, NodeId};

    fn finding(recipe: &str) -> Finding {
        Finding::new(
            "TS001",
            recipe,
            Location::new(PathBuf::from("A.json"), NodeId::random()),
            "Foo",
        )
    }

    #[test]
    fn summary_counts_files_and_findings() {
        let mut report = SearchReport::new();
        report.files_searched = 3;
        report.findings.push(finding("find-types"));
        report.findings.push(finding("find-types"));
        assert_eq!(summary(&report), "Found 2 reference(s) in 3 file(s)");
    }

    #[test]
    fn summary_breaks_down_several_recipes() {
        let mut report = SearchReport::new();
        report.files_searched = 1;
        report.findings.push(finding("find-types"));
        report.findings.push(finding("mark-names"));
        assert_eq!(
            summary(&report),
            "Found 2 reference(s) in 1 file(s) (find-types: 1, mark-names: 1)"
        );
    }
}
