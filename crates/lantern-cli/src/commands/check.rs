use std::path::Path;

use colored::Colorize;

pub fn run(adventure: Option<&Path>) -> Result<(), String> {
    let graph = super::load_graph(adventure)?;
    let issues = graph.lint();

    let choices: usize = graph.scenes().map(|s| s.choices.len()).sum();

    if issues.is_empty() {
        println!("  All checks passed for '{}'.", graph.title());
    } else {
        for issue in &issues {
            eprintln!("  {} {issue}", "warning:".yellow().bold());
        }
        println!(
            "  '{}' loaded with {} warning{}.",
            graph.title(),
            issues.len(),
            if issues.len() == 1 { "" } else { "s" },
        );
    }
    println!("  {} scenes, {choices} choices", graph.len());

    Ok(())
}
