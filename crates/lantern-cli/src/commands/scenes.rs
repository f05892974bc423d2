use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(adventure: Option<&Path>) -> Result<(), String> {
    let graph = super::load_graph(adventure)?;

    println!("  {} (starts at '{}')", graph.title().bold(), graph.start());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Title", "Choices"]);

    for scene in graph.scenes() {
        let choices = if scene.choices.is_empty() {
            "—".to_string()
        } else {
            scene
                .choices
                .iter()
                .map(|c| format!("{} -> {}", c.id, c.destination))
                .collect::<Vec<_>>()
                .join("\n")
        };
        table.add_row(vec![&scene.id, &scene.title, &choices]);
    }

    println!("{table}");
    println!();
    println!("  {} scenes", graph.len());

    Ok(())
}
