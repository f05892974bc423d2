//! Choices: labeled edges between scenes.

use serde::{Deserialize, Serialize};

use super::effect::Effect;

/// A labeled edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier, unique within the owning scene.
    pub id: String,
    /// Text read to the player.
    pub description: String,
    /// Identifier of the scene this choice leads to.
    pub destination: String,
    /// Effects applied, in order, when the choice is taken.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
}

impl Choice {
    /// Create a choice without effects.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            destination: destination.into(),
            effects: Vec::new(),
        }
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}
