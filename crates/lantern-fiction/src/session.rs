//! Adventure session: the operations a host calls, one per turn.
//!
//! An `AdventureSession` owns one player's state and dice; the scene graph
//! is shared read-only between sessions.

use std::sync::Arc;

use lantern_mechanics::Attributes;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AdventureConfig;
use crate::error::FictionResult;
use crate::narrator::{format_journal, narrate_opening, narrate_restart, render_scene};
use crate::parser::{ResolvedAction, resolve_action};
use crate::player::{PlayerState, Transition};
use crate::scene::SceneGraph;
use crate::tracker::apply_action;

/// A read-only snapshot of a session, suitable for a host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// The player's name.
    pub player_name: String,
    /// Id of the current run.
    pub session_id: Uuid,
    /// Scene the player is in.
    pub current_scene: String,
    /// Journal entries, oldest first.
    pub journal: Vec<String>,
    /// Carried items.
    pub inventory: Vec<String>,
    /// The most recent history records, oldest first.
    pub recent_history: Vec<Transition>,
    /// Attribute scores.
    pub attributes: Attributes,
}

/// One player's run through a scene graph.
pub struct AdventureSession {
    graph: Arc<SceneGraph>,
    config: AdventureConfig,
    state: PlayerState,
    rng: StdRng,
}

impl AdventureSession {
    /// Create a session at the start scene under the configured default name.
    pub fn new(graph: Arc<SceneGraph>, config: AdventureConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let state = fresh_state(&graph, &config, &config.default_player_name);
        Self {
            graph,
            config,
            state,
            rng,
        }
    }

    /// The shared scene graph.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// The session configuration.
    pub fn config(&self) -> &AdventureConfig {
        &self.config
    }

    /// The player's state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Begin a new run for `player_name`, discarding any previous progress.
    ///
    /// A missing or blank name falls back to the configured default.
    pub fn start_adventure(&mut self, player_name: Option<&str>) -> String {
        let name = player_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.config.default_player_name.as_str())
            .to_string();
        self.state = fresh_state(&self.graph, &self.config, &name);
        tracing::info!(
            player = %name,
            session = %self.state.session_id(),
            adventure = %self.graph.title(),
            "adventure started"
        );
        narrate_opening(&name, &self.graph)
    }

    /// Narrate the current scene.
    pub fn get_scene(&self) -> String {
        render_scene(&self.graph, self.state.current_scene())
    }

    /// Resolve and apply one line of free text.
    pub fn player_action(&mut self, input: &str) -> String {
        let action = match self.graph.get(self.state.current_scene()) {
            Some(scene) => resolve_action(input, scene),
            None => {
                tracing::warn!(
                    scene = %self.state.current_scene(),
                    "current scene missing from graph"
                );
                ResolvedAction::Unresolved
            }
        };
        apply_action(
            &mut self.state,
            &self.graph,
            input,
            &action,
            &mut self.rng,
            self.config.default_difficulty,
        )
    }

    /// Journal entries, inventory and recent moves.
    pub fn show_journal(&self) -> String {
        format_journal(&self.state, self.config.recent_history)
    }

    /// Snapshot of the session.
    pub fn get_world_state(&self) -> WorldState {
        WorldState {
            player_name: self.state.player_name().to_string(),
            session_id: self.state.session_id(),
            current_scene: self.state.current_scene().to_string(),
            journal: self.state.journal().to_vec(),
            inventory: self.state.inventory().to_vec(),
            recent_history: self
                .state
                .recent_history(self.config.recent_history)
                .to_vec(),
            attributes: *self.state.attributes(),
        }
    }

    /// The snapshot as pretty-printed JSON.
    pub fn world_state_json(&self) -> FictionResult<String> {
        Ok(serde_json::to_string_pretty(&self.get_world_state())?)
    }

    /// Start over at the start scene under the same name with a new session id.
    pub fn restart_adventure(&mut self) -> String {
        let name = self.state.player_name().to_string();
        let previous = self.state.session_id();
        self.state = fresh_state(&self.graph, &self.config, &name);
        tracing::info!(
            player = %name,
            previous = %previous,
            session = %self.state.session_id(),
            "adventure restarted"
        );
        narrate_restart(&name, &self.graph)
    }
}

fn fresh_state(graph: &SceneGraph, config: &AdventureConfig, name: &str) -> PlayerState {
    PlayerState::new(name, graph.start(), config.attributes)
}
