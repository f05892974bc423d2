//! Effects that modify session state when a choice is taken.

use serde::{Deserialize, Serialize};

/// A deterministic state mutation attached to a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Append a line to the player's journal.
    AppendJournalEntry(String),
    /// Append an item to the player's inventory.
    AppendInventoryItem(String),
}

impl Effect {
    /// Shorthand for [`Effect::AppendJournalEntry`].
    pub fn journal(text: impl Into<String>) -> Self {
        Self::AppendJournalEntry(text.into())
    }

    /// Shorthand for [`Effect::AppendInventoryItem`].
    pub fn item(item: impl Into<String>) -> Self {
        Self::AppendInventoryItem(item.into())
    }
}
