use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use lantern_fiction::{AdventureConfig, AdventureSession};

const HELP: &str = "\
Describe what you want to do, or say the name of a choice.
Other commands (a choice with the same name takes precedence):
  scene    describe where you are
  journal  your journal, inventory and recent moves
  state    the session as JSON
  restart  start the adventure over
  quit     leave the game";

pub fn run(
    adventure: Option<&Path>,
    name: Option<&str>,
    seed: Option<u64>,
    difficulty: Option<i32>,
) -> Result<(), String> {
    let graph = super::load_graph(adventure)?;
    for issue in graph.lint() {
        tracing::warn!(adventure = %graph.title(), "{issue}");
    }

    let mut config = AdventureConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }

    let mut session = AdventureSession::new(Arc::new(graph), config);

    println!("  {} {}", "Playing".bold(), session.graph().title());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", session.start_adventure(name));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = input.to_lowercase();
        // A choice id offered by the current scene wins over a meta command.
        let offered = session
            .graph()
            .get(session.state().current_scene())
            .is_some_and(|scene| scene.choices.iter().any(|c| c.id.to_lowercase() == command));
        if offered {
            println!("{}\n", session.player_action(input));
            continue;
        }

        let output = match command.as_str() {
            "quit" | "q" | "exit" => break,
            "help" | "?" => HELP.to_string(),
            "scene" | "look" => session.get_scene(),
            "journal" => session.show_journal(),
            "state" => session
                .world_state_json()
                .unwrap_or_else(|e| e.to_string().yellow().to_string()),
            "restart" => session.restart_adventure(),
            _ => session.player_action(input),
        };
        println!("{output}\n");
    }

    println!("  Farewell, {}.", session.state().player_name());
    Ok(())
}
