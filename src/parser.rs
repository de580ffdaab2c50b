//! Natural-language description parsing
//!
//! Turns a free-text screen description into classified keywords, a name
//! hint and an ordered list of content hints. Parsing never fails: anything
//! that does not match a dictionary simply ends up as a plain token.

use crate::keywords::{self, KeywordClass, PHRASES};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME_HINT: &str = "Screen";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub screen_keywords: Vec<String>,
    pub component_keywords: Vec<String>,
    pub modifier_keywords: Vec<String>,
    pub name_hint: String,
    pub tokens: Vec<String>,
    pub content_hints: Vec<String>,
}

impl ParseResult {
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.all_keywords().any(|k| k == keyword)
    }

    pub fn all_keywords(&self) -> impl Iterator<Item = &str> {
        self.screen_keywords
            .iter()
            .chain(&self.component_keywords)
            .chain(&self.modifier_keywords)
            .map(String::as_str)
    }

    pub fn keyword_count(&self) -> usize {
        self.screen_keywords.len() + self.component_keywords.len() + self.modifier_keywords.len()
    }
}

pub struct DescriptionParser {
    separator_regex: Regex,
    punctuation_regex: Regex,
    hint_split_regex: Regex,
}

impl DescriptionParser {
    pub fn new() -> Self {
        Self {
            separator_regex: Regex::new(r"[,;/|]").expect("separator pattern"),
            punctuation_regex: Regex::new(r"[^\p{L}\p{N}\s]").expect("punctuation pattern"),
            hint_split_regex: Regex::new(r"(?i),|;|&|\band\b").expect("hint split pattern"),
        }
    }

    pub fn parse(&self, description: &str) -> ParseResult {
        let tokens: Vec<String> = self
            .tokenize(description)
            .into_iter()
            .filter(|t| !keywords::is_stop_word(t))
            .collect();

        let mut result = ParseResult {
            tokens: tokens.clone(),
            ..Default::default()
        };

        let mut plain_words = Vec::new();
        for token in &tokens {
            match keywords::classify(token) {
                Some((word, class)) => {
                    let bucket = match class {
                        KeywordClass::Screen => &mut result.screen_keywords,
                        KeywordClass::Component => &mut result.component_keywords,
                        KeywordClass::Modifier => &mut result.modifier_keywords,
                    };
                    if !bucket.iter().any(|k| k == word) {
                        bucket.push(word.to_string());
                    }
                }
                None => plain_words.push(token.as_str()),
            }
        }

        result.name_hint = if plain_words.is_empty() {
            DEFAULT_NAME_HINT.to_string()
        } else {
            plain_words
                .iter()
                .take(2)
                .map(|w| title_case(w))
                .collect::<Vec<_>>()
                .join(" ")
        };

        result.content_hints = self.extract_content_hints(description);

        log::debug!(
            "Parsed '{}': screen={:?} component={:?} modifier={:?} hints={:?}",
            description,
            result.screen_keywords,
            result.component_keywords,
            result.modifier_keywords,
            result.content_hints
        );

        result
    }

    /// Lowercase, strip punctuation, split on whitespace and fold known phrases.
    /// Stop words are kept; callers decide whether to drop them.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let separated = self.separator_regex.replace_all(&lowered, " ");
        let stripped = self.punctuation_regex.replace_all(&separated, "");
        let words: Vec<&str> = stripped.split_whitespace().collect();
        fold_phrases(&words)
    }

    fn extract_content_hints(&self, description: &str) -> Vec<String> {
        self.hint_split_regex
            .split(description)
            .filter_map(|segment| self.segment_to_hint(segment.trim()))
            .collect()
    }

    fn segment_to_hint(&self, segment: &str) -> Option<String> {
        if segment.is_empty() {
            return None;
        }

        let words: Vec<String> = self
            .tokenize(segment)
            .into_iter()
            .filter(|w| !keywords::is_stop_word(w) && !keywords::is_keyword(w))
            // Hints open with a word that capitalizes; caseless scripts never do
            .skip_while(|w| !title_case(w).chars().next().map_or(false, char::is_uppercase))
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(words.iter().map(|w| title_case(w)).collect::<Vec<_>>().join(" "))
        }
    }
}

impl Default for DescriptionParser {
    fn default() -> Self {
        Self::new()
    }
}

fn fold_phrases(words: &[&str]) -> Vec<String> {
    let mut tokens = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        if i + 1 < words.len() {
            let pair = format!("{} {}", words[i], words[i + 1]);
            if let Some((_, folded)) = PHRASES.iter().find(|(phrase, _)| *phrase == pair) {
                tokens.push(folded.to_string());
                i += 2;
                continue;
            }
        }
        tokens.push(words[i].to_string());
        i += 1;
    }
    tokens
}

pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse a description with a fresh parser
pub fn parse_description(description: &str) -> ParseResult {
    DescriptionParser::new().parse(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_description() {
        let parsed = parse_description("Login screen with email and password");

        assert_eq!(parsed.screen_keywords, vec!["login"]);
        assert_eq!(parsed.component_keywords, vec!["email", "password"]);
        assert!(parsed.modifier_keywords.is_empty());
        assert_eq!(parsed.tokens, vec!["login", "email", "password"]);
        assert_eq!(parsed.name_hint, "Screen");
        assert!(parsed.content_hints.is_empty());
    }

    #[test]
    fn test_empty_description() {
        let parsed = parse_description("");

        assert!(parsed.tokens.is_empty());
        assert_eq!(parsed.keyword_count(), 0);
        assert_eq!(parsed.name_hint, "Screen");
        assert!(parsed.content_hints.is_empty());
    }

    #[test]
    fn test_punctuation_and_plurals() {
        let parsed = parse_description("Settings page: toggles, switches & sliders!");

        assert_eq!(parsed.screen_keywords, vec!["settings"]);
        // "switches" only loses its final `s`, which is not enough to match
        assert_eq!(parsed.component_keywords, vec!["toggle", "slider"]);
        assert_eq!(parsed.name_hint, "Switches");
    }

    #[test]
    fn test_phrase_folding() {
        let parsed = parse_description("Sign up screen with a tab bar");

        assert_eq!(parsed.screen_keywords, vec!["signup"]);
        assert_eq!(parsed.component_keywords, vec!["tabbar"]);
    }

    #[test]
    fn test_name_hint_from_plain_words() {
        let parsed = parse_description("recipe browser with search and favorites");

        assert_eq!(parsed.name_hint, "Recipe Browser");
        assert_eq!(parsed.component_keywords, vec!["search"]);
    }

    #[test]
    fn test_keywords_recorded_once() {
        let parsed = parse_description("chart, another chart and charts");
        assert_eq!(parsed.component_keywords, vec!["chart"]);
    }

    #[test]
    fn test_content_hints() {
        let parsed = parse_description(
            "dashboard with monthly revenue, active subscribers and churn rate",
        );

        assert_eq!(
            parsed.content_hints,
            vec!["Monthly Revenue", "Active Subscribers", "Churn Rate"]
        );
    }

    #[test]
    fn test_content_hints_split_on_whole_word_and() {
        let parsed = parse_description("android sandbox, brand story");
        assert_eq!(parsed.content_hints, vec!["Android Sandbox", "Brand Story"]);
    }

    #[test]
    fn test_content_hints_skip_leading_digits() {
        let parsed = parse_description("a 3D rotating globe");

        assert_eq!(parsed.content_hints, vec!["Rotating Globe"]);
        assert_eq!(parsed.name_hint, "3d Rotating");
        assert_eq!(parsed.keyword_count(), 0);
    }

    #[test]
    fn test_content_hints_are_clean() {
        let descriptions = [
            "login screen with email and password",
            "dashboard with charts and stats",
            "Profile for Ada Lovelace, mathematician and writer",
            "!!!, and , ,",
            "the and a and an",
            "ÉCOLE list with élèves",
            "42 and 7",
            "登录 页面, dashboard",
            "لوحة, settings with Dark Theme",
        ];

        for description in descriptions {
            let parsed = parse_description(description);
            for hint in &parsed.content_hints {
                let first = hint.chars().next().unwrap();
                assert!(first.is_uppercase(), "hint '{}' from '{}'", hint, description);
                for word in hint.split_whitespace() {
                    let lower = word.to_lowercase();
                    assert!(!keywords::is_keyword(&lower), "keyword '{}' in hint", word);
                    assert!(!keywords::is_stop_word(&lower), "stop word '{}' in hint", word);
                }
            }
        }
    }

    #[test]
    fn test_caseless_words_do_not_open_hints() {
        let parsed = parse_description("登录 页面, dashboard");
        assert!(parsed.content_hints.is_empty(), "{:?}", parsed.content_hints);
        assert_eq!(parsed.screen_keywords, vec!["dashboard"]);

        let parsed = parse_description("dashboard with 收入 Revenue");
        assert_eq!(parsed.content_hints, vec!["Revenue"]);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("revenue"), "Revenue");
        assert_eq!(title_case(""), "");
    }
}
