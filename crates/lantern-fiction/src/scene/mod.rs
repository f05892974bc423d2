//! Scenes, choices and effects.
//!
//! Scenes reference each other only by identifier, so the graph can be
//! freely cyclic (endings loop back to the start) without ownership cycles.

mod choice;
mod effect;
mod graph;

pub use choice::Choice;
pub use effect::Effect;
pub use graph::{GraphIssue, SceneGraph};

use serde::{Deserialize, Serialize};

/// A named narrative state with a description and the choices it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique identifier within the graph.
    pub id: String,
    /// Short title read before the description.
    pub title: String,
    /// Descriptive text.
    pub description: String,
    /// Choices in disambiguation order.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene without choices.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            choices: Vec::new(),
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Look up a choice by its exact identifier.
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }
}
