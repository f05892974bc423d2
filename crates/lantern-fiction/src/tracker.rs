//! Applies resolved actions to a player's state.
//!
//! The current scene id is the state; choices are the labeled edges.
//! Selected choices apply their effects and move the player, risky free
//! actions roll a check in place, and unresolved input changes nothing.

use rand::rngs::StdRng;

use lantern_mechanics::resolve_check;

use crate::narrator::{narrate_check, narrate_choice, narrate_unresolved, render_scene};
use crate::parser::ResolvedAction;
use crate::player::{PlayerState, Transition};
use crate::scene::SceneGraph;

/// Apply `action` (resolved from `input`) and return the narration.
///
/// Appends exactly one history record for a selected choice or a risky
/// action, and none for unresolved input.
pub fn apply_action(
    state: &mut PlayerState,
    graph: &SceneGraph,
    input: &str,
    action: &ResolvedAction,
    rng: &mut StdRng,
    base_difficulty: i32,
) -> String {
    match action {
        ResolvedAction::ChoiceSelected { choice_id, .. } => take_choice(state, graph, choice_id),
        ResolvedAction::RiskyFreeAction {
            attribute,
            difficulty_adjustment,
        } => {
            let score = state.attributes().get(*attribute);
            let difficulty = base_difficulty.saturating_add(*difficulty_adjustment);
            let check = resolve_check(rng, score, 0, difficulty);
            let action_text = input.trim();
            tracing::debug!(
                scene = %state.current_scene(),
                attribute = %attribute,
                tier = %check.tier,
                "risky action"
            );
            let narration = narrate_check(action_text, *attribute, &check);
            let scene = state.current_scene().to_string();
            state.record(Transition::checked(scene, action_text, check));
            narration
        }
        ResolvedAction::Unresolved => unresolved(state, graph),
    }
}

fn take_choice(state: &mut PlayerState, graph: &SceneGraph, choice_id: &str) -> String {
    let Some(choice) = graph
        .get(state.current_scene())
        .and_then(|scene| scene.choice(choice_id))
    else {
        tracing::warn!(
            scene = %state.current_scene(),
            choice = %choice_id,
            "choice not offered by the current scene"
        );
        return unresolved(state, graph);
    };

    for effect in &choice.effects {
        state.apply_effect(effect);
    }

    let from = state.current_scene().to_string();
    let to = if graph.contains(&choice.destination) {
        choice.destination.clone()
    } else {
        tracing::warn!(
            scene = %from,
            choice = %choice.id,
            destination = %choice.destination,
            "destination missing, returning to the start scene"
        );
        graph.start().to_string()
    };

    state.record(Transition::moved(from, choice.id.clone(), to.clone()));
    state.move_to(to);

    narrate_choice(choice, &render_scene(graph, &choice.destination))
}

fn unresolved(state: &PlayerState, graph: &SceneGraph) -> String {
    narrate_unresolved(&render_scene(graph, state.current_scene()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::{FALLBACK_DESCRIPTION, TRAILING_PROMPT};
    use crate::parser::{MatchRule, resolve_action};
    use crate::scene::{Choice, Effect, Scene};
    use lantern_mechanics::{Attribute, Attributes};
    use rand::SeedableRng;

    fn graph() -> SceneGraph {
        SceneGraph::new(
            "Test",
            "yard",
            vec![
                Scene::new("yard", "Yard", "A muddy yard.")
                    .with_choice(
                        Choice::new("shed", "Enter the shed", "shed")
                            .with_effect(Effect::journal("Entered the shed."))
                            .with_effect(Effect::item("lamp")),
                    )
                    .with_choice(Choice::new("well", "Peer down the well", "well")),
                Scene::new("shed", "Shed", "Tools hang on the walls.")
                    .with_choice(Choice::new("out", "Step outside", "yard")),
            ],
        )
        .unwrap()
    }

    fn state() -> PlayerState {
        PlayerState::new("Amit", "yard", Attributes::default())
    }

    fn choice(id: &str) -> ResolvedAction {
        ResolvedAction::ChoiceSelected {
            choice_id: id.to_string(),
            rule: MatchRule::Exact,
        }
    }

    #[test]
    fn choice_applies_effects_in_order_and_moves() {
        let graph = graph();
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(1);

        let text = apply_action(&mut state, &graph, "shed", &choice("shed"), &mut rng, 12);

        assert_eq!(state.current_scene(), "shed");
        assert_eq!(state.journal(), ["Entered the shed."]);
        assert_eq!(state.inventory(), ["lamp"]);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].from_scene, "yard");
        assert_eq!(state.history()[0].action, "shed");
        assert_eq!(state.history()[0].to_scene, "shed");
        assert!(text.contains("Tools hang on the walls."));
        assert!(text.ends_with(TRAILING_PROMPT));
    }

    #[test]
    fn risky_action_stays_put_and_records_roll() {
        let graph = graph();
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(3);
        let action = ResolvedAction::RiskyFreeAction {
            attribute: Attribute::Dexterity,
            difficulty_adjustment: 2,
        };

        let text = apply_action(&mut state, &graph, " sneak around ", &action, &mut rng, 12);

        assert_eq!(state.current_scene(), "yard");
        assert_eq!(state.history().len(), 1);
        let record = &state.history()[0];
        assert_eq!(record.action, "sneak around");
        assert_eq!(record.to_scene, "yard");
        let roll = record.roll.as_ref().unwrap();
        assert_eq!(roll.difficulty, 14);
        assert_eq!(roll.attribute_modifier, 2);
        assert!(text.contains("Dexterity check"));
        assert!(text.contains("against a difficulty of 14"));
        assert!(text.ends_with(TRAILING_PROMPT));
        assert!(state.journal().is_empty());
    }

    #[test]
    fn risky_action_at_maximum_difficulty() {
        let graph = graph();
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(3);
        let action = ResolvedAction::RiskyFreeAction {
            attribute: Attribute::Strength,
            difficulty_adjustment: 2,
        };

        apply_action(&mut state, &graph, "force it", &action, &mut rng, i32::MAX);

        let roll = state.history()[0].roll.as_ref().unwrap();
        assert_eq!(roll.difficulty, i32::MAX);
        assert_eq!(roll.tier, lantern_mechanics::Tier::Fail);
    }

    #[test]
    fn unresolved_changes_nothing() {
        let graph = graph();
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(1);

        let text = apply_action(
            &mut state,
            &graph,
            "hmm",
            &ResolvedAction::Unresolved,
            &mut rng,
            12,
        );

        assert!(text.starts_with("Sorry"));
        assert!(text.contains("A muddy yard."));
        assert!(text.ends_with(TRAILING_PROMPT));
        assert_eq!(state.current_scene(), "yard");
        assert!(state.history().is_empty());
    }

    #[test]
    fn missing_destination_returns_to_start() {
        let graph = graph();
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(1);

        let text = apply_action(&mut state, &graph, "well", &choice("well"), &mut rng, 12);

        assert_eq!(state.current_scene(), "yard");
        assert_eq!(state.history()[0].to_scene, "yard");
        assert!(text.contains(FALLBACK_DESCRIPTION));
        assert!(text.ends_with(TRAILING_PROMPT));
    }

    #[test]
    fn choice_from_another_scene_is_unresolved() {
        let graph = graph();
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(1);

        let text = apply_action(&mut state, &graph, "out", &choice("out"), &mut rng, 12);

        assert!(text.starts_with("Sorry"));
        assert!(state.history().is_empty());
    }

    #[test]
    fn round_trip_through_resolver() {
        let graph = graph();
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(9);

        for input in ["enter the shed", "step outside", "peer"] {
            let scene = graph.get(state.current_scene()).unwrap();
            let action = resolve_action(input, scene);
            apply_action(&mut state, &graph, input, &action, &mut rng, 12);
        }

        let path: Vec<&str> = state.history().iter().map(|t| t.to_scene.as_str()).collect();
        assert_eq!(path, vec!["shed", "yard", "yard"]);
    }
}
