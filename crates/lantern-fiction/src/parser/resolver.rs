//! Maps free-form player text onto the current scene.
//!
//! Rules are tried in a fixed order and the first one that matches wins:
//! exact choice id, then id substring or one of the first four description
//! words, then any description word, then a risky free action, then
//! unresolved. Every description word counts, however short. Changing the
//! order changes which choice a phrase selects.

use std::collections::HashSet;

use lantern_mechanics::Attribute;

use super::keywords::{DANGER_ADJUSTMENT, action_attribute, is_attempt, is_dangerous, words};
use crate::scene::{Choice, Scene};

/// Number of leading description words the fuzzy rule looks at.
const DESCRIPTION_PREFIX_WORDS: usize = 4;

/// Which rule selected a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// The text equals the choice id.
    Exact,
    /// The id appears in the text, or a leading description word does.
    Fuzzy,
    /// Some description word appears in the text.
    Keyword,
}

/// What a line of player text resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAction {
    /// One of the scene's declared choices.
    ChoiceSelected {
        /// Identifier of the selected choice.
        choice_id: String,
        /// Rule that matched.
        rule: MatchRule,
    },
    /// An undeclared action that needs a check.
    RiskyFreeAction {
        /// Attribute the check is made against.
        attribute: Attribute,
        /// Added to the base difficulty.
        difficulty_adjustment: i32,
    },
    /// Nothing usable; re-prompt without changing state.
    Unresolved,
}

/// Resolve free text against the choices of `scene`.
pub fn resolve_action(input: &str, scene: &Scene) -> ResolvedAction {
    let text = input.trim().to_lowercase();
    if text.is_empty() {
        return ResolvedAction::Unresolved;
    }
    let tokens = words(&text);
    let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let resolved = if let Some(choice) = exact_match(&text, scene) {
        selected(choice, MatchRule::Exact)
    } else if let Some(choice) = fuzzy_match(&text, &token_set, scene) {
        selected(choice, MatchRule::Fuzzy)
    } else if let Some(choice) = keyword_match(&token_set, scene) {
        selected(choice, MatchRule::Keyword)
    } else {
        risky_action(&tokens)
    };

    tracing::debug!(scene = %scene.id, input = %text, ?resolved, "resolved action");
    resolved
}

fn selected(choice: &Choice, rule: MatchRule) -> ResolvedAction {
    ResolvedAction::ChoiceSelected {
        choice_id: choice.id.clone(),
        rule,
    }
}

fn exact_match<'a>(text: &str, scene: &'a Scene) -> Option<&'a Choice> {
    scene
        .choices
        .iter()
        .find(|c| c.id.to_lowercase() == text)
}

fn fuzzy_match<'a>(text: &str, tokens: &HashSet<&str>, scene: &'a Scene) -> Option<&'a Choice> {
    scene.choices.iter().find(|c| {
        text.contains(&c.id.to_lowercase())
            || words(&c.description)
                .iter()
                .take(DESCRIPTION_PREFIX_WORDS)
                .any(|w| tokens.contains(w.as_str()))
    })
}

fn keyword_match<'a>(tokens: &HashSet<&str>, scene: &'a Scene) -> Option<&'a Choice> {
    scene.choices.iter().find(|c| {
        words(&c.description)
            .iter()
            .any(|w| tokens.contains(w.as_str()))
    })
}

fn risky_action(tokens: &[String]) -> ResolvedAction {
    let attribute = match action_attribute(tokens) {
        Some(attribute) => attribute,
        None if is_attempt(tokens) => Attribute::Dexterity,
        None => return ResolvedAction::Unresolved,
    };
    let difficulty_adjustment = if is_dangerous(tokens) {
        DANGER_ADJUSTMENT
    } else {
        0
    };
    ResolvedAction::RiskyFreeAction {
        attribute,
        difficulty_adjustment,
    }
}
