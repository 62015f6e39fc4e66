//! Weighted quality scoring
//!
//! Six independent 0-100 heuristics over the prompt text, combined into an
//! overall score with fixed weights. Pure functions: identical input text and
//! intent always yield identical scores.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::intent::IntentAnalysis;

/// One scoring axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityDimension {
    Clarity,
    Efficiency,
    Structure,
    Completeness,
    Actionability,
    Specificity,
}

impl QualityDimension {
    /// Fixed percentage weight. Sums to 100 across all dimensions.
    pub fn weight(&self) -> u32 {
        match self {
            QualityDimension::Completeness => 25,
            QualityDimension::Clarity => 20,
            QualityDimension::Actionability => 20,
            QualityDimension::Structure => 15,
            QualityDimension::Efficiency => 10,
            QualityDimension::Specificity => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityDimension::Clarity => "clarity",
            QualityDimension::Efficiency => "efficiency",
            QualityDimension::Structure => "structure",
            QualityDimension::Completeness => "completeness",
            QualityDimension::Actionability => "actionability",
            QualityDimension::Specificity => "specificity",
        }
    }

    pub fn all() -> &'static [QualityDimension] {
        &[
            QualityDimension::Clarity,
            QualityDimension::Efficiency,
            QualityDimension::Structure,
            QualityDimension::Completeness,
            QualityDimension::Actionability,
            QualityDimension::Specificity,
        ]
    }
}

impl fmt::Display for QualityDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Band derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityRating {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl QualityRating {
    pub fn from_overall(overall: u8) -> Self {
        match overall {
            80.. => QualityRating::Excellent,
            65..=79 => QualityRating::Good,
            50..=64 => QualityRating::NeedsImprovement,
            _ => QualityRating::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityRating::Excellent => "excellent",
            QualityRating::Good => "good",
            QualityRating::NeedsImprovement => "needs-improvement",
            QualityRating::Poor => "poor",
        }
    }
}

/// Per-dimension scores plus the derived weighted overall.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QualityScore {
    pub clarity: u8,
    pub efficiency: u8,
    pub structure: u8,
    pub completeness: u8,
    pub actionability: u8,
    pub specificity: u8,
    pub overall: u8,
    pub rating: QualityRating,
}

impl QualityScore {
    /// Build from raw dimension scores, deriving `overall` and `rating`.
    pub fn from_dimensions(
        clarity: u8,
        efficiency: u8,
        structure: u8,
        completeness: u8,
        actionability: u8,
        specificity: u8,
    ) -> Self {
        let weighted = completeness as f64 * 0.25
            + clarity as f64 * 0.20
            + actionability as f64 * 0.20
            + structure as f64 * 0.15
            + efficiency as f64 * 0.10
            + specificity as f64 * 0.10;
        let overall = weighted.round() as u8;
        Self {
            clarity,
            efficiency,
            structure,
            completeness,
            actionability,
            specificity,
            overall,
            rating: QualityRating::from_overall(overall),
        }
    }

    pub fn dimension(&self, dimension: QualityDimension) -> u8 {
        match dimension {
            QualityDimension::Clarity => self.clarity,
            QualityDimension::Efficiency => self.efficiency,
            QualityDimension::Structure => self.structure,
            QualityDimension::Completeness => self.completeness,
            QualityDimension::Actionability => self.actionability,
            QualityDimension::Specificity => self.specificity,
        }
    }
}

const HEDGE_WORDS: &[&str] = &[
    "maybe",
    "somehow",
    "probably",
    "kind of",
    "sort of",
    "something like",
    "stuff",
    "things",
    "i guess",
    "or whatever",
];

const OBJECTIVE_MARKERS: &[&str] = &[
    "i want",
    "i need",
    "we need",
    "we want",
    "the goal is",
    "goal:",
    "objective",
    "so that",
    "in order to",
];

const FILLER_WORDS: &[&str] = &[
    "please",
    "just",
    "really",
    "very",
    "basically",
    "actually",
    "you know",
    "hello",
    "thanks",
    "thank you",
    "could you",
    "would you",
    "kindly",
];

const TECH_MARKERS: &[&str] = &[
    "rust",
    "react",
    "python",
    "node",
    "typescript",
    "javascript",
    "postgres",
    "mysql",
    "sqlite",
    "java",
    "golang",
    "aws",
    "docker",
    "kubernetes",
    "vue",
    "django",
    "rails",
    "axum",
    "tokio",
    "next.js",
    "tailwind",
    "graphql",
    "rest api",
];

const CONSTRAINT_MARKERS: &[&str] = &[
    "must",
    "must not",
    "cannot",
    "can't",
    "should not",
    "shouldn't",
    "within",
    "budget",
    "deadline",
    "constraint",
    "at most",
    "no more than",
    "only",
];

const SUCCESS_MARKERS: &[&str] = &[
    "success",
    "acceptance",
    "done when",
    "should return",
    "should display",
    "expected",
    "criteria",
    "measure",
    "verify",
];

const CONTEXT_MARKERS: &[&str] = &[
    "because",
    "currently",
    "existing",
    "we have",
    "our",
    "background",
    "context",
    "today",
    "right now",
];

const ACTION_VERBS: &[&str] = &[
    "build",
    "create",
    "implement",
    "add",
    "fix",
    "update",
    "write",
    "refactor",
    "generate",
    "configure",
    "deploy",
    "migrate",
    "test",
    "document",
    "remove",
    "rename",
    "extract",
];

const VAGUE_REQUESTS: &[&str] = &[
    "help with",
    "do something",
    "look into",
    "figure out",
    "deal with",
    "handle it",
    "make it better",
    "make it work",
];

fn hit_count(lower: &str, table: &[&str]) -> usize {
    table.iter().filter(|kw| lower.contains(*kw)).count()
}

fn clamp_score(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Stateless scorer for prompt text.
pub struct QualityAssessor;

impl QualityAssessor {
    /// Score the enhanced prompt of an optimization run. The original is
    /// accepted so callers can diff scores, but each text is scored on its
    /// own merits.
    pub fn assess(_original: &str, enhanced: &str, intent: &IntentAnalysis) -> QualityScore {
        Self::assess_text(enhanced, intent)
    }

    /// Score a single text across all six dimensions.
    pub fn assess_text(text: &str, intent: &IntentAnalysis) -> QualityScore {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return QualityScore::from_dimensions(0, 0, 0, 0, 0, 0);
        }
        let lower = trimmed.to_lowercase();
        let words: Vec<&str> = trimmed.split_whitespace().collect();

        QualityScore::from_dimensions(
            Self::clarity(&lower, &words),
            Self::efficiency(&lower, &words),
            Self::structure(trimmed),
            Self::completeness(&lower),
            Self::actionability(&lower, &words),
            Self::specificity(trimmed, &lower, intent),
        )
    }

    /// Explicit objective statement up, hedge words down.
    fn clarity(lower: &str, words: &[&str]) -> u8 {
        let mut score: i64 = 50;
        if hit_count(lower, OBJECTIVE_MARKERS) > 0 {
            score += 25;
        }
        if words
            .first()
            .map(|w| ACTION_VERBS.contains(&w.to_lowercase().as_str()))
            .unwrap_or(false)
        {
            score += 15;
        }
        let hedges = hit_count(lower, HEDGE_WORDS) as i64;
        score -= (hedges * 10).min(30);
        clamp_score(score)
    }

    /// Ratio of filler/pleasantry words to total words.
    fn efficiency(lower: &str, words: &[&str]) -> u8 {
        let total = words.len().max(1) as f64;
        let fillers = FILLER_WORDS
            .iter()
            .filter(|kw| lower.contains(*kw))
            .count() as f64;
        clamp_score((100.0 - (fillers / total) * 300.0).round() as i64)
    }

    /// Presence of markdown section markers.
    fn structure(text: &str) -> u8 {
        let mut score: i64 = 0;
        if text.contains("##") || text.lines().any(|l| l.starts_with('#')) {
            score += 30;
        }
        if text.lines().any(|l| l.trim_start().starts_with("- ") || l.trim_start().starts_with("* "))
        {
            score += 20;
        }
        if text.lines().any(|l| {
            let t = l.trim_start();
            t.starts_with("1.") || t.starts_with("2.")
        }) {
            score += 15;
        }
        if text.contains('\n') {
            score += 15;
        }
        let labeled = ["requirements:", "goal:", "context:", "constraints:", "scope:"];
        if labeled.iter().any(|m| text.to_lowercase().contains(m)) {
            score += 20;
        }
        // A short single-sentence ask does not need structure to be readable.
        if score == 0 && text.split_whitespace().count() <= 15 {
            score = 35;
        }
        clamp_score(score)
    }

    /// Tech stack, constraints, success criteria and context each contribute
    /// a quarter of the dimension.
    fn completeness(lower: &str) -> u8 {
        let mut score: i64 = 0;
        if hit_count(lower, TECH_MARKERS) > 0 {
            score += 25;
        }
        if hit_count(lower, CONSTRAINT_MARKERS) > 0 {
            score += 25;
        }
        if hit_count(lower, SUCCESS_MARKERS) > 0 {
            score += 25;
        }
        if hit_count(lower, CONTEXT_MARKERS) > 0 {
            score += 25;
        }
        clamp_score(score)
    }

    /// Concrete executable verbs up, vague requests down.
    fn actionability(lower: &str, words: &[&str]) -> u8 {
        let mut score: i64 = 20;
        if hit_count(lower, ACTION_VERBS) > 0 {
            score += 40;
        }
        if words
            .first()
            .map(|w| ACTION_VERBS.contains(&w.to_lowercase().as_str()))
            .unwrap_or(false)
        {
            score += 20;
        }
        let vague = hit_count(lower, VAGUE_REQUESTS) as i64;
        score -= (vague * 15).min(30);
        clamp_score(score)
    }

    /// Concrete nouns, versions, identifiers and paths.
    fn specificity(text: &str, lower: &str, _intent: &IntentAnalysis) -> u8 {
        let mut score: i64 = 10;
        if text.chars().any(|c| c.is_ascii_digit()) {
            score += 15;
        }
        if text.contains('`') {
            score += 15;
        }
        if text.contains('_') || text.split_whitespace().any(|w| {
            w.len() > 2 && w.chars().any(|c| c.is_uppercase()) && w.chars().any(|c| c.is_lowercase()) && !w.chars().next().map(char::is_uppercase).unwrap_or(false)
        }) {
            score += 15;
        }
        if text.split_whitespace().any(|w| w.contains('/') || w.contains(".rs") || w.contains(".ts") || w.contains(".py") || w.contains(".md")) {
            score += 15;
        }
        if hit_count(lower, TECH_MARKERS) > 0 {
            score += 20;
        }
        if text.contains('"') || text.contains('\'') {
            score += 10;
        }
        clamp_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::IntentDetector;

    fn score(text: &str) -> QualityScore {
        let intent = IntentDetector::analyze(text);
        QualityAssessor::assess_text(text, &intent)
    }

    #[test]
    fn weights_sum_to_one_hundred() {
        let total: u32 = QualityDimension::all().iter().map(|d| d.weight()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn overall_is_weighted_rounded_sum() {
        let q = QualityScore::from_dimensions(70, 60, 50, 80, 90, 40);
        let expected = (80.0_f64 * 0.25 + 70.0 * 0.20 + 90.0 * 0.20 + 50.0 * 0.15 + 60.0 * 0.10
            + 40.0 * 0.10)
            .round() as u8;
        assert_eq!(q.overall, expected);
    }

    #[test]
    fn rating_bands() {
        assert_eq!(QualityRating::from_overall(80), QualityRating::Excellent);
        assert_eq!(QualityRating::from_overall(79), QualityRating::Good);
        assert_eq!(QualityRating::from_overall(65), QualityRating::Good);
        assert_eq!(QualityRating::from_overall(64), QualityRating::NeedsImprovement);
        assert_eq!(QualityRating::from_overall(50), QualityRating::NeedsImprovement);
        assert_eq!(QualityRating::from_overall(49), QualityRating::Poor);
    }

    #[test]
    fn empty_text_scores_zero_everywhere() {
        let q = score("");
        assert_eq!(q.overall, 0);
        assert_eq!(q.rating, QualityRating::Poor);
    }

    #[test]
    fn whitespace_only_scores_zero() {
        let q = score("   \n\t  ");
        assert_eq!(q.overall, 0);
    }

    #[test]
    fn bare_feature_request_is_incomplete() {
        let q = score("Build a login page");
        assert!(q.completeness < 60, "completeness was {}", q.completeness);
    }

    #[test]
    fn rich_prompt_scores_higher_than_bare_one() {
        let bare = score("Build a login page");
        let rich = score(
            "Build a login page in React with our existing Postgres user table.\n\n\
             ## Constraints\n- must support SSO\n\n## Success Criteria\n- form should return a session token",
        );
        assert!(rich.overall > bare.overall);
        assert!(rich.completeness >= 75);
    }

    #[test]
    fn filler_heavy_prompt_loses_efficiency() {
        let polite = score("hello please could you just really basically make a page thanks");
        let direct = score("Create the settings page component");
        assert!(polite.efficiency < direct.efficiency);
    }

    #[test]
    fn scoring_is_deterministic() {
        let a = score("Refactor the parser module to remove duplicate error paths");
        let b = score("Refactor the parser module to remove duplicate error paths");
        assert_eq!(a.overall, b.overall);
        assert_eq!(a.clarity, b.clarity);
        assert_eq!(a.specificity, b.specificity);
    }
}
