//! Static keyword tables used to classify description tokens
//!
//! The three classification dictionaries are disjoint: a word is either a
//! screen type, a component or a modifier, never more than one.

use serde::Serialize;
use std::fmt;

/// Words naming a kind of screen
pub const SCREEN_KEYWORDS: &[&str] = &[
    // authentication
    "login", "signin", "signup", "register", "registration", "auth", "authentication",
    // dashboards
    "dashboard", "analytics", "overview", "admin",
    // settings
    "settings", "setting", "preferences", "configuration",
    // collections
    "list", "feed", "inbox", "catalog", "directory",
    // forms
    "form", "contact", "survey", "feedback", "questionnaire",
    // profiles
    "profile", "account",
    // onboarding
    "onboarding", "welcome", "walkthrough", "tutorial", "intro", "splash",
];

/// Words naming a UI component
pub const COMPONENT_KEYWORDS: &[&str] = &[
    "email", "password", "username", "name", "phone", "message",
    "button", "input", "field", "dropdown", "checkbox", "textarea",
    "chart", "graph", "stat", "statistic", "metric", "card", "table",
    "toggle", "switch", "slider", "notification", "language",
    "avatar", "photo", "follower", "post", "bio",
    "item", "row", "filter", "thumbnail",
    "step", "skip", "progress", "illustration", "pagination",
    "search", "tabbar", "navbar", "sidebar", "header", "activity",
];

/// Words that modify how a screen looks or behaves
pub const MODIFIER_KEYWORDS: &[&str] = &[
    "social", "remember", "forgot", "dark", "light", "minimal", "modern",
    "simple", "clean", "compact", "rounded", "colorful", "gradient",
    "responsive", "mobile", "tablet", "desktop",
];

/// Words carrying no classification or content value
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "with", "and", "or", "for", "of", "to", "in", "on", "at",
    "by", "from", "into", "my", "our", "your", "their", "its", "this", "that",
    "these", "those", "some", "any", "has", "have", "having", "include",
    "includes", "including", "contains", "containing", "show", "shows",
    "showing", "display", "displays", "is", "are", "be", "should", "which",
    "plus", "also", "using", "use", "i", "we", "me", "it", "as", "like", "want",
    "need", "screen", "screens", "page", "pages", "view", "app", "ui", "layout",
    "design", "mockup",
];

/// Multi-word phrases folded into a single token before tokenizing
pub const PHRASES: &[(&str, &str)] = &[
    ("sign in", "signin"),
    ("sign up", "signup"),
    ("log in", "login"),
    ("tab bar", "tabbar"),
    ("nav bar", "navbar"),
    ("navigation bar", "navbar"),
    ("bottom navigation", "tabbar"),
    ("search bar", "search"),
    ("dark mode", "dark"),
    ("check box", "checkbox"),
];

/// Single words too vague to fill a strict content slot on their own
pub const GENERIC_HINT_WORDS: &[&str] = &[
    "user", "users", "person", "people", "thing", "things", "stuff", "data",
    "info", "information", "content", "details", "main", "basic", "new",
    "default", "general", "something",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordClass {
    Screen,
    Component,
    Modifier,
}

impl fmt::Display for KeywordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordClass::Screen => write!(f, "screen"),
            KeywordClass::Component => write!(f, "component"),
            KeywordClass::Modifier => write!(f, "modifier"),
        }
    }
}

fn lookup(word: &str) -> Option<KeywordClass> {
    if SCREEN_KEYWORDS.contains(&word) {
        Some(KeywordClass::Screen)
    } else if COMPONENT_KEYWORDS.contains(&word) {
        Some(KeywordClass::Component)
    } else if MODIFIER_KEYWORDS.contains(&word) {
        Some(KeywordClass::Modifier)
    } else {
        None
    }
}

/// Classify a lowercase token, returning its dictionary form and class.
/// Plurals are retried without the trailing `s` ("toggles" -> "toggle").
pub fn classify(token: &str) -> Option<(&'static str, KeywordClass)> {
    let candidates = [Some(token), token.strip_suffix('s')];
    candidates
        .into_iter()
        .flatten()
        .filter(|candidate| !candidate.is_empty())
        .find_map(|candidate| {
            lookup(candidate).and_then(|class| canonical(candidate).map(|word| (word, class)))
        })
}

fn canonical(word: &str) -> Option<&'static str> {
    SCREEN_KEYWORDS
        .iter()
        .chain(COMPONENT_KEYWORDS)
        .chain(MODIFIER_KEYWORDS)
        .find(|k| **k == word)
        .copied()
}

pub fn is_keyword(token: &str) -> bool {
    classify(token).is_some()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

pub fn is_generic_hint_word(word: &str) -> bool {
    GENERIC_HINT_WORDS.contains(&word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dictionaries_are_disjoint() {
        let screen: HashSet<_> = SCREEN_KEYWORDS.iter().collect();
        let component: HashSet<_> = COMPONENT_KEYWORDS.iter().collect();
        let modifier: HashSet<_> = MODIFIER_KEYWORDS.iter().collect();

        assert!(screen.is_disjoint(&component));
        assert!(screen.is_disjoint(&modifier));
        assert!(component.is_disjoint(&modifier));
    }

    #[test]
    fn test_stop_words_are_not_keywords() {
        for word in STOP_WORDS {
            assert!(lookup(word).is_none(), "'{}' is both a stop word and a keyword", word);
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("login"), Some(("login", KeywordClass::Screen)));
        assert_eq!(classify("email"), Some(("email", KeywordClass::Component)));
        assert_eq!(classify("social"), Some(("social", KeywordClass::Modifier)));
        assert_eq!(classify("globe"), None);
    }

    #[test]
    fn test_classify_plural() {
        assert_eq!(classify("toggles"), Some(("toggle", KeywordClass::Component)));
        assert_eq!(classify("charts"), Some(("chart", KeywordClass::Component)));
        assert_eq!(classify("stats"), Some(("stat", KeywordClass::Component)));
        // "settings" is listed verbatim and wins over the singular retry
        assert_eq!(classify("settings"), Some(("settings", KeywordClass::Screen)));
        assert_eq!(classify("s"), None);
    }

    #[test]
    fn test_phrases_fold_to_keywords() {
        for (_, folded) in PHRASES {
            assert!(is_keyword(folded), "phrase target '{}' is not a keyword", folded);
        }
    }

    #[test]
    fn test_generic_hint_words() {
        assert!(is_generic_hint_word("User"));
        assert!(!is_generic_hint_word("Alice"));
    }
}
