//! Prose templates.

use lantern_mechanics::{Attribute, CheckResult, Tier};

use crate::player::{PlayerState, Transition};
use crate::scene::{Choice, Effect, Scene, SceneGraph};

/// Closing line of every narration.
pub const TRAILING_PROMPT: &str = "What do you do?";

/// Description used when a scene id does not resolve.
pub const FALLBACK_DESCRIPTION: &str = "You stand somewhere the old maps never recorded. \
     Fog hides every path except the one that brought you here.";

/// Render a scene by id, falling back to generic text for unknown ids.
pub fn render_scene(graph: &SceneGraph, id: &str) -> String {
    match graph.get(id) {
        Some(scene) => describe_scene(scene),
        None => {
            tracing::warn!(scene = %id, "rendering unknown scene");
            format!("{FALLBACK_DESCRIPTION}\n\n{TRAILING_PROMPT}")
        }
    }
}

/// Title, description, one line per choice, then the prompt.
pub fn describe_scene(scene: &Scene) -> String {
    let mut output = format!("{}\n{}\n", scene.title, scene.description);

    if !scene.choices.is_empty() {
        output.push_str("\nYou could:\n");
        for choice in &scene.choices {
            output.push_str(&format!("- {} (say \"{}\")\n", choice.description, choice.id));
        }
    }

    output.push('\n');
    output.push_str(TRAILING_PROMPT);
    output
}

/// Append the prompt unless the text already ends with it.
pub fn ensure_prompt(text: impl Into<String>) -> String {
    let mut text = text.into();
    if !text.trim_end().ends_with(TRAILING_PROMPT) {
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(TRAILING_PROMPT);
    }
    text
}

/// Greeting for a new adventure.
pub fn narrate_opening(player_name: &str, graph: &SceneGraph) -> String {
    format!(
        "Welcome, {player_name}. Your adventure \"{}\" begins.\n\n{}",
        graph.title(),
        render_scene(graph, graph.start())
    )
}

/// Greeting after a restart.
pub fn narrate_restart(player_name: &str, graph: &SceneGraph) -> String {
    format!(
        "The tale begins anew, {player_name}. Your journal and pack are empty once more.\n\n{}",
        render_scene(graph, graph.start())
    )
}

/// Acknowledge a taken choice, mention its effects, then narrate the destination.
pub fn narrate_choice(choice: &Choice, destination: &str) -> String {
    let mut output = format!("You chose to {}.", lowercase_first(&choice.description));
    for effect in &choice.effects {
        match effect {
            Effect::AppendJournalEntry(_) => output.push_str(" Your journal has a new entry."),
            Effect::AppendInventoryItem(item) => {
                output.push_str(&format!(" You now carry {item}."));
            }
        }
    }
    output.push_str("\n\n");
    output.push_str(destination);
    ensure_prompt(output)
}

/// Narrate a risky free action and its check.
pub fn narrate_check(action: &str, attribute: Attribute, check: &CheckResult) -> String {
    let consequence = match check.tier {
        Tier::FullSuccess => "It works cleanly, just as you hoped.",
        Tier::PartialSuccess => "It works, but not without a cost or a complication.",
        Tier::Fail => "It does not work, and the moment slips away.",
    };
    let output = format!(
        "You attempt: \"{action}\". {attribute} check: you rolled {}, \
         with a modifier of {:+}, for a total of {} against a difficulty of {}. \
         {}. {consequence}",
        check.roll,
        check.attribute_modifier + check.modifier,
        check.total,
        check.difficulty,
        check.tier,
    );
    ensure_prompt(output)
}

/// Apology plus the current scene when input could not be resolved.
pub fn narrate_unresolved(current_scene: &str) -> String {
    format!("Sorry, I couldn't tell what you meant to do. Here is where you stand.\n\n{current_scene}")
}

/// Journal entries, inventory and the most recent moves.
pub fn format_journal(state: &PlayerState, recent: usize) -> String {
    let mut output = format!("Journal of {}:\n", state.player_name());

    if state.journal().is_empty() {
        output.push_str("No entries yet.\n");
    } else {
        for (i, entry) in state.journal().iter().enumerate() {
            output.push_str(&format!("{}. {entry}\n", i + 1));
        }
    }

    output.push('\n');
    if state.inventory().is_empty() {
        output.push_str("Inventory: empty.\n");
    } else {
        output.push_str(&format!("Inventory: {}.\n", state.inventory().join(", ")));
    }

    output.push('\n');
    let history = state.recent_history(recent);
    if history.is_empty() {
        output.push_str("Recent moves: none yet.");
    } else {
        output.push_str("Recent moves:");
        for transition in history {
            output.push_str(&format!("\n- {}", describe_transition(transition)));
        }
    }

    output
}

fn describe_transition(transition: &Transition) -> String {
    match &transition.roll {
        Some(check) => format!(
            "in {}, attempted \"{}\": {} ({} vs {})",
            transition.from_scene, transition.action, check.tier, check.total, check.difficulty
        ),
        None => format!(
            "{} to {} by {}",
            transition.from_scene, transition.to_scene, transition.action
        ),
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
