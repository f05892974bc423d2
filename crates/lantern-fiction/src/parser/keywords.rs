//! Word tables and tokenizing for action resolution.

use lantern_mechanics::Attribute;

/// Difficulty increase when the text signals danger.
pub const DANGER_ADJUSTMENT: i32 = 2;

/// Verbs that tie a free action to an attribute, checked in this order.
const ACTION_KEYWORDS: &[(Attribute, &[&str])] = &[
    (
        Attribute::Dexterity,
        &[
            "sneak", "hide", "creep", "tiptoe", "climb", "dodge", "leap", "jump", "pick", "steal",
            "slip", "balance",
        ],
    ),
    (
        Attribute::Strength,
        &[
            "attack", "fight", "strike", "hit", "punch", "kick", "smash", "break", "force",
            "shove", "push", "lift", "wrestle",
        ],
    ),
    (
        Attribute::Charisma,
        &[
            "persuade", "convince", "charm", "bribe", "lie", "bluff", "intimidate", "negotiate",
            "plead", "flatter",
        ],
    ),
    (
        Attribute::Intelligence,
        &[
            "recall", "study", "decipher", "examine", "analyze", "analyse", "investigate",
            "remember", "inspect", "solve",
        ],
    ),
    (
        Attribute::Wisdom,
        &[
            "search", "listen", "notice", "spot", "sense", "track", "watch", "perceive", "smell",
            "scan",
        ],
    ),
];

/// Words that mark an attempt with no more specific verb.
const ATTEMPT_WORDS: &[&str] = &[
    "try", "tries", "attempt", "risk", "risky", "chance", "dare", "gamble",
];

/// Words that make an attempt harder.
const DANGER_WORDS: &[&str] = &["hard", "dangerous", "guarded", "trap", "strong"];

/// Endings accepted after a keyword: "sneaks", "pushes", "lied", "climbing".
const INFLECTIONS: &[&str] = &["s", "es", "d", "ed", "ing"];

/// Endings accepted after a doubled final consonant: "trapped", "hitting".
const DOUBLED_INFLECTIONS: &[&str] = &["ed", "ing"];

/// Lowercase words of `text`, split on anything that is not alphanumeric.
pub(crate) fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Whether `word` is `keyword` or a regular inflection of it.
///
/// Whole words only: "hardly" is not "hard" and "hitch" is not "hit".
fn is_form_of(word: &str, keyword: &str) -> bool {
    if word == keyword {
        return true;
    }
    if let Some(rest) = word.strip_prefix(keyword) {
        if INFLECTIONS.contains(&rest) {
            return true;
        }
        let mut chars = rest.chars();
        let doubled = chars.next().is_some_and(|c| keyword.ends_with(c));
        if doubled && DOUBLED_INFLECTIONS.contains(&chars.as_str()) {
            return true;
        }
    }
    // "dodge" -> "dodging"
    keyword
        .strip_suffix('e')
        .and_then(|stem| word.strip_prefix(stem))
        .is_some_and(|rest| rest == "ing")
}

fn has_keyword(words: &[String], keywords: &[&str]) -> bool {
    words
        .iter()
        .any(|w| keywords.iter().any(|keyword| is_form_of(w, keyword)))
}

/// The attribute implied by the first matching verb.
pub(crate) fn action_attribute(words: &[String]) -> Option<Attribute> {
    ACTION_KEYWORDS
        .iter()
        .find(|(_, verbs)| has_keyword(words, verbs))
        .map(|(attribute, _)| *attribute)
}

/// Whether the text reads as a generic attempt.
pub(crate) fn is_attempt(words: &[String]) -> bool {
    has_keyword(words, ATTEMPT_WORDS)
}

/// Whether the text signals a dangerous situation.
pub(crate) fn is_dangerous(words: &[String]) -> bool {
    has_keyword(words, DANGER_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_and_lowercase() {
        assert_eq!(
            words("Read_the MAP, now!"),
            vec!["read", "the", "map", "now"]
        );
        assert!(words("  ...  ").is_empty());
    }

    #[test]
    fn action_keywords_map_to_attributes() {
        assert_eq!(action_attribute(&words("I sneak around")), Some(Attribute::Dexterity));
        assert_eq!(action_attribute(&words("punch him")), Some(Attribute::Strength));
        assert_eq!(action_attribute(&words("bribe the guard")), Some(Attribute::Charisma));
        assert_eq!(action_attribute(&words("decipher the runes")), Some(Attribute::Intelligence));
        assert_eq!(action_attribute(&words("listen closely")), Some(Attribute::Wisdom));
        assert_eq!(action_attribute(&words("sing a song")), None);
    }

    #[test]
    fn inflections_match() {
        assert_eq!(action_attribute(&words("sneaking by")), Some(Attribute::Dexterity));
        assert_eq!(action_attribute(&words("dodging arrows")), Some(Attribute::Dexterity));
        assert_eq!(action_attribute(&words("he hits back")), Some(Attribute::Strength));
        assert_eq!(action_attribute(&words("pushes on")), Some(Attribute::Strength));
        assert!(is_attempt(&words("trying my luck")));
        assert!(is_attempt(&words("a risky move")));
        assert!(is_dangerous(&words("it looks trapped")));
    }

    #[test]
    fn longer_words_sharing_a_prefix_do_not_match() {
        assert!(!is_dangerous(&words("I hardly care")));
        assert!(!is_dangerous(&words("open the strongbox")));
        assert_eq!(action_attribute(&words("hitch the wagon")), None);
    }

    #[test]
    fn first_attribute_in_table_order_wins() {
        // "climb" (dexterity) is listed before "force" (strength).
        assert_eq!(
            action_attribute(&words("force the lock and climb")),
            Some(Attribute::Dexterity)
        );
    }

    #[test]
    fn danger_words() {
        assert!(is_dangerous(&words("a heavily guarded door")));
        assert!(is_dangerous(&words("that looks HARD")));
        assert!(!is_dangerous(&words("an easy stroll")));
    }
}
