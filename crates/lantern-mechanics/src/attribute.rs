//! The five fixed abilities and their d20-style modifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// One of the five abilities a check can be made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Raw might: forcing, fighting, lifting.
    Strength,
    /// Agility and stealth.
    Dexterity,
    /// Knowledge and reasoning.
    Intelligence,
    /// Perception and intuition.
    Wisdom,
    /// Persuasion and presence.
    Charisma,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; 5] = [
        Self::Strength,
        Self::Dexterity,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Lowercase key used in snapshots and input.
    pub fn key(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Capitalized name used in narration.
    pub fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Attribute {
    type Err = MechError;

    /// Accepts full names and the usual three-letter abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "str" | "strength" => Ok(Self::Strength),
            "dex" | "dexterity" => Ok(Self::Dexterity),
            "int" | "intelligence" => Ok(Self::Intelligence),
            "wis" | "wisdom" => Ok(Self::Wisdom),
            "cha" | "charisma" => Ok(Self::Charisma),
            _ => Err(MechError::UnknownAttribute(s.to_string())),
        }
    }
}

/// Modifier for an attribute score: `floor((score - 10) / 2)`.
///
/// Rounds toward negative infinity, so a score of 9 gives -1.
pub fn attribute_modifier(score: i32) -> i32 {
    score.saturating_sub(10).div_euclid(2)
}

/// A character's five attribute scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Strength score.
    pub strength: i32,
    /// Dexterity score.
    pub dexterity: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Wisdom score.
    pub wisdom: i32,
    /// Charisma score.
    pub charisma: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            strength: 12,
            dexterity: 14,
            intelligence: 10,
            wisdom: 11,
            charisma: 13,
        }
    }
}

impl Attributes {
    /// Score for one attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    /// Return a copy with one score replaced.
    pub fn with(mut self, attribute: Attribute, score: i32) -> Self {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = score;
        self
    }

    /// Modifier derived from one attribute's score.
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        attribute_modifier(self.get(attribute))
    }

    /// Iterate `(attribute, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn modifier_rounds_toward_negative_infinity() {
        assert_eq!(attribute_modifier(9), -1);
        assert_eq!(attribute_modifier(10), 0);
        assert_eq!(attribute_modifier(11), 0);
        assert_eq!(attribute_modifier(14), 2);
        assert_eq!(attribute_modifier(7), -2);
        assert_eq!(attribute_modifier(1), -5);
        assert_eq!(attribute_modifier(20), 5);
        assert_eq!(attribute_modifier(i32::MIN), i32::MIN / 2);
    }

    #[test]
    fn parse_names_and_abbreviations() {
        assert_eq!("Dexterity".parse::<Attribute>().unwrap(), Attribute::Dexterity);
        assert_eq!("wis".parse::<Attribute>().unwrap(), Attribute::Wisdom);
        assert_eq!(" CHA ".parse::<Attribute>().unwrap(), Attribute::Charisma);
        assert!(matches!(
            "luck".parse::<Attribute>(),
            Err(MechError::UnknownAttribute(name)) if name == "luck"
        ));
    }

    #[test]
    fn get_and_with() {
        let attrs = Attributes::default().with(Attribute::Wisdom, 16);
        assert_eq!(attrs.get(Attribute::Wisdom), 16);
        assert_eq!(attrs.modifier(Attribute::Wisdom), 3);
        assert_eq!(attrs.get(Attribute::Dexterity), 14);
    }

    #[test]
    fn iter_in_sheet_order() {
        let keys: Vec<&str> = Attributes::default().iter().map(|(a, _)| a.key()).collect();
        assert_eq!(
            keys,
            vec!["strength", "dexterity", "intelligence", "wisdom", "charisma"]
        );
    }

    #[test]
    fn serializes_with_lowercase_keys() {
        let json = serde_json::to_value(Attributes::default()).unwrap();
        assert_eq!(json["dexterity"], 14);
        let attr = serde_json::to_value(Attribute::Charisma).unwrap();
        assert_eq!(attr, "charisma");
    }

    proptest! {
        #[test]
        fn modifier_matches_floor_division(score in -30i32..60) {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            prop_assert_eq!(attribute_modifier(score), expected);
        }
    }
}
