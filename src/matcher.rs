//! Template matching
//!
//! Scores every catalog entry against the parsed keywords and picks the best
//! one. Scoring is a weighted keyword overlap normalized by the template's
//! maximum attainable weight.

use crate::augment::RULE_KEYWORDS;
use crate::keywords::SCREEN_KEYWORDS;
use crate::parser::ParseResult;
use crate::templates::{Template, CATALOG};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const HIGH_CONFIDENCE: f64 = 0.5;
pub const MEDIUM_CONFIDENCE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_CONFIDENCE {
            Confidence::High
        } else if score >= MEDIUM_CONFIDENCE {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub template: Option<String>,
    pub confidence: Confidence,
    pub score: f64,
    pub suggestions: Vec<String>,
    pub augmentations: Vec<String>,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        self.template.is_some()
    }
}

pub struct TemplateMatcher<'a> {
    catalog: &'a [Template],
}

impl Default for TemplateMatcher<'static> {
    fn default() -> Self {
        Self::new(&CATALOG)
    }
}

impl<'a> TemplateMatcher<'a> {
    pub fn new(catalog: &'a [Template]) -> Self {
        Self { catalog }
    }

    /// Score of a single template, in [0, 1]
    pub fn score(&self, template: &Template, present: &[&str]) -> f64 {
        let max = template.profile.max_weight();
        if max <= 0.0 {
            return 0.0;
        }
        (template.profile.matched_weight(present) / max).clamp(0.0, 1.0)
    }

    pub fn match_parsed(&self, parsed: &ParseResult) -> MatchResult {
        let present: Vec<&str> = parsed.all_keywords().collect();

        let mut best: Option<(&Template, f64)> = None;
        for template in self.catalog {
            let score = self.score(template, &present);
            log::trace!("Template '{}' scored {:.3}", template.name, score);
            // Strictly greater: ties keep the earlier registration
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((template, score));
            }
        }

        let augmentations: Vec<String> = RULE_KEYWORDS
            .iter()
            .filter(|k| parsed.has_keyword(k))
            .map(|k| k.to_string())
            .collect();

        let (template, score) = match best {
            Some((template, score)) => (Some(template.name), score),
            None => (None, 0.0),
        };
        let confidence = Confidence::from_score(score);

        let result = if confidence == Confidence::Low {
            MatchResult {
                template: None,
                confidence,
                score,
                suggestions: SCREEN_KEYWORDS.iter().map(|k| k.to_string()).collect(),
                augmentations,
            }
        } else {
            MatchResult {
                template: template.map(str::to_string),
                confidence,
                score,
                suggestions: Vec::new(),
                augmentations,
            }
        };

        log::debug!(
            "Matched {:?} with {} confidence (score {:.3}), augmentations {:?}",
            result.template,
            result.confidence,
            result.score,
            result.augmentations
        );
        result
    }
}

pub fn match_template(parsed: &ParseResult) -> MatchResult {
    TemplateMatcher::default().match_parsed(parsed)
}
