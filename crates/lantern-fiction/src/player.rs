//! Per-player session state.

use chrono::{DateTime, Utc};
use lantern_mechanics::{Attributes, CheckResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scene::Effect;

/// One entry in the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Scene the player was in.
    pub from_scene: String,
    /// Choice id taken, or the free text of a risky action.
    pub action: String,
    /// Scene the player ended up in.
    pub to_scene: String,
    /// When the action was applied.
    pub timestamp: DateTime<Utc>,
    /// The check, for risky actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll: Option<CheckResult>,
}

impl Transition {
    /// A move along a choice edge.
    pub fn moved(
        from_scene: impl Into<String>,
        action: impl Into<String>,
        to_scene: impl Into<String>,
    ) -> Self {
        Self {
            from_scene: from_scene.into(),
            action: action.into(),
            to_scene: to_scene.into(),
            timestamp: Utc::now(),
            roll: None,
        }
    }

    /// A risky action resolved in place.
    pub fn checked(scene: impl Into<String>, action: impl Into<String>, roll: CheckResult) -> Self {
        let scene = scene.into();
        Self {
            from_scene: scene.clone(),
            action: action.into(),
            to_scene: scene,
            timestamp: Utc::now(),
            roll: Some(roll),
        }
    }
}

/// The mutable state of one player's adventure.
///
/// History, journal and inventory only ever grow; a restart replaces the
/// whole state instead of clearing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    session_id: Uuid,
    player_name: String,
    current_scene: String,
    history: Vec<Transition>,
    journal: Vec<String>,
    inventory: Vec<String>,
    attributes: Attributes,
}

impl PlayerState {
    /// Fresh state at `start_scene` with a new session id.
    pub fn new(
        player_name: impl Into<String>,
        start_scene: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            player_name: player_name.into(),
            current_scene: start_scene.into(),
            history: Vec::new(),
            journal: Vec::new(),
            inventory: Vec::new(),
            attributes,
        }
    }

    /// Opaque id of this run.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The player's name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Identifier of the scene the player is in.
    pub fn current_scene(&self) -> &str {
        &self.current_scene
    }

    /// Every transition so far, oldest first.
    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    /// The last `limit` transitions, oldest first.
    pub fn recent_history(&self, limit: usize) -> &[Transition] {
        let skip = self.history.len().saturating_sub(limit);
        &self.history[skip..]
    }

    /// Journal entries in the order they were written.
    pub fn journal(&self) -> &[String] {
        &self.journal
    }

    /// Carried items, duplicates included.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Attribute scores.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Apply a choice effect.
    pub fn apply_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::AppendJournalEntry(text) => self.journal.push(text.clone()),
            Effect::AppendInventoryItem(item) => self.inventory.push(item.clone()),
        }
    }

    /// Append a history record.
    pub fn record(&mut self, transition: Transition) {
        self.history.push(transition);
    }

    pub(crate) fn move_to(&mut self, scene: impl Into<String>) {
        self.current_scene = scene.into();
    }
}
