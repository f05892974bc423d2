//! Configuration for an adventure session.

use lantern_mechanics::{Attributes, DEFAULT_DIFFICULTY};

/// Configuration for an adventure session.
#[derive(Debug, Clone)]
pub struct AdventureConfig {
    /// RNG seed for reproducible checks; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Difficulty for risky actions before danger adjustments.
    pub default_difficulty: i32,
    /// How many history records the world-state snapshot and journal show.
    pub recent_history: usize,
    /// Name used when the host starts an adventure without one.
    pub default_player_name: String,
    /// Attribute scores every new session starts with.
    pub attributes: Attributes,
}

impl Default for AdventureConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_difficulty: DEFAULT_DIFFICULTY,
            recent_history: 8,
            default_player_name: "Traveler".to_string(),
            attributes: Attributes::default(),
        }
    }
}

impl AdventureConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the base difficulty for risky actions.
    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Set how many recent history records are reported (at least 1).
    pub fn with_recent_history(mut self, count: usize) -> Self {
        self.recent_history = count.max(1);
        self
    }

    /// Set the fallback player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.default_player_name = name.into();
        self
    }

    /// Set the starting attribute scores.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_mechanics::Attribute;

    #[test]
    fn default_config() {
        let cfg = AdventureConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.default_difficulty, 12);
        assert_eq!(cfg.recent_history, 8);
        assert_eq!(cfg.default_player_name, "Traveler");
    }

    #[test]
    fn builder_methods() {
        let cfg = AdventureConfig::default()
            .with_seed(7)
            .with_difficulty(15)
            .with_player_name("Amit")
            .with_attributes(Attributes::default().with(Attribute::Strength, 18));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.default_difficulty, 15);
        assert_eq!(cfg.default_player_name, "Amit");
        assert_eq!(cfg.attributes.strength, 18);
    }

    #[test]
    fn recent_history_at_least_one() {
        let cfg = AdventureConfig::default().with_recent_history(0);
        assert_eq!(cfg.recent_history, 1);
    }
}
