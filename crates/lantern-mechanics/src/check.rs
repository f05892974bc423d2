//! Graded d20 checks.
//!
//! A check rolls one d20, adds the attribute modifier and a situational
//! modifier, and compares the total to a difficulty:
//! - **Full success** when the total beats the difficulty by 4 or more
//! - **Partial success** when it meets the difficulty but by less than 4
//! - **Fail** when it falls short

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::attribute::attribute_modifier;
use crate::dice::roll_d20;

/// Difficulty used when the caller has no better estimate.
pub const DEFAULT_DIFFICULTY: i32 = 12;

/// How far above the difficulty a total must land for a full success.
pub const FULL_SUCCESS_MARGIN: i32 = 4;

/// The three-valued outcome grade of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// The action works cleanly.
    FullSuccess,
    /// The action works, at a cost.
    PartialSuccess,
    /// The action fails.
    Fail,
}

impl Tier {
    /// Grade a total against a difficulty.
    pub fn grade(total: i32, difficulty: i32) -> Self {
        if total >= difficulty.saturating_add(FULL_SUCCESS_MARGIN) {
            Self::FullSuccess
        } else if total >= difficulty {
            Self::PartialSuccess
        } else {
            Self::Fail
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullSuccess => "Full success",
            Self::PartialSuccess => "Partial success",
            Self::Fail => "Fail",
        }
    }

    /// Whether the action went through at all.
    pub fn is_success(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything a check produced, for narration and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The natural d20 roll.
    pub roll: u32,
    /// Modifier derived from the attribute score.
    pub attribute_modifier: i32,
    /// Situational modifier supplied by the caller.
    pub modifier: i32,
    /// `roll + attribute_modifier + modifier`.
    pub total: i32,
    /// Difficulty the total was compared against.
    pub difficulty: i32,
    /// The graded outcome.
    pub tier: Tier,
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "d20 {} {:+} attribute {:+} situational = {} vs {}: {}",
            self.roll, self.attribute_modifier, self.modifier, self.total, self.difficulty, self.tier
        )
    }
}

/// Roll a d20 and resolve a check.
pub fn resolve_check(
    rng: &mut StdRng,
    attribute_score: i32,
    modifier: i32,
    difficulty: i32,
) -> CheckResult {
    let roll = roll_d20(rng);
    let result = resolve_roll(roll, attribute_score, modifier, difficulty);
    tracing::debug!(
        roll,
        total = result.total,
        difficulty,
        tier = %result.tier,
        "resolved check"
    );
    result
}

/// Resolve a check for a roll that has already been made.
pub fn resolve_roll(roll: u32, attribute_score: i32, modifier: i32, difficulty: i32) -> CheckResult {
    let attribute_modifier = attribute_modifier(attribute_score);
    let total = i32::try_from(roll)
        .unwrap_or(i32::MAX)
        .saturating_add(attribute_modifier)
        .saturating_add(modifier);
    CheckResult {
        roll,
        attribute_modifier,
        modifier,
        total,
        difficulty,
        tier: Tier::grade(total, difficulty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn meeting_difficulty_is_partial() {
        // Score 14 gives +2; 10 + 2 = 12 against DC 12.
        let result = resolve_roll(10, 14, 0, DEFAULT_DIFFICULTY);
        assert_eq!(result.attribute_modifier, 2);
        assert_eq!(result.total, 12);
        assert_eq!(result.tier, Tier::PartialSuccess);
    }

    #[test]
    fn beating_difficulty_by_four_is_full() {
        let result = resolve_roll(14, 14, 0, 12);
        assert_eq!(result.total, 16);
        assert_eq!(result.tier, Tier::FullSuccess);

        let result = resolve_roll(13, 14, 0, 12);
        assert_eq!(result.total, 15);
        assert_eq!(result.tier, Tier::PartialSuccess);
    }

    #[test]
    fn below_difficulty_fails() {
        let result = resolve_roll(9, 14, 0, 12);
        assert_eq!(result.total, 11);
        assert_eq!(result.tier, Tier::Fail);
    }

    #[test]
    fn negative_attribute_modifier_applies() {
        let result = resolve_roll(12, 9, 0, 12);
        assert_eq!(result.attribute_modifier, -1);
        assert_eq!(result.total, 11);
        assert_eq!(result.tier, Tier::Fail);
    }

    #[test]
    fn situational_modifier_applies() {
        let result = resolve_roll(8, 10, 4, 12);
        assert_eq!(result.total, 12);
        assert_eq!(result.modifier, 4);
        assert_eq!(result.tier, Tier::PartialSuccess);
    }

    #[test]
    fn extreme_difficulty_and_modifier_do_not_overflow() {
        let result = resolve_roll(20, 10, 0, i32::MAX);
        assert_eq!(result.tier, Tier::Fail);

        let result = resolve_roll(20, 10, i32::MAX, i32::MAX);
        assert_eq!(result.total, i32::MAX);
        assert_eq!(result.tier, Tier::FullSuccess);

        assert_eq!(Tier::grade(i32::MIN, i32::MIN), Tier::PartialSuccess);
    }

    #[test]
    fn tier_labels() {
        assert_eq!(Tier::FullSuccess.to_string(), "Full success");
        assert_eq!(Tier::PartialSuccess.to_string(), "Partial success");
        assert_eq!(Tier::Fail.to_string(), "Fail");
        assert!(Tier::PartialSuccess.is_success());
        assert!(!Tier::Fail.is_success());
    }

    #[test]
    fn result_display() {
        let result = resolve_roll(10, 14, -1, 12);
        assert_eq!(
            result.to_string(),
            "d20 10 +2 attribute -1 situational = 11 vs 12: Fail"
        );
    }

    #[test]
    fn resolve_check_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(5);
        let mut rng2 = StdRng::seed_from_u64(5);
        let a = resolve_check(&mut rng1, 14, 0, 12);
        let b = resolve_check(&mut rng2, 14, 0, 12);
        assert_eq!(a, b);
        assert!((1..=20).contains(&a.roll));
    }

    proptest! {
        #[test]
        fn tiers_partition_the_totals(
            roll in 1u32..=20,
            score in 1i32..=20,
            modifier in -5i32..=5,
            difficulty in 5i32..=25,
        ) {
            let result = resolve_roll(roll, score, modifier, difficulty);
            prop_assert_eq!(result.total, roll as i32 + attribute_modifier(score) + modifier);
            let expected = if result.total >= difficulty + 4 {
                Tier::FullSuccess
            } else if result.total >= difficulty {
                Tier::PartialSuccess
            } else {
                Tier::Fail
            };
            prop_assert_eq!(result.tier, expected);
        }

        #[test]
        fn seeded_checks_stay_in_range(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = resolve_check(&mut rng, 10, 0, DEFAULT_DIFFICULTY);
            prop_assert!((1..=20).contains(&result.roll));
        }
    }
}
