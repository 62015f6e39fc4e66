//! Prompt intent classification
//!
//! Scans a raw prompt for category-specific keyword sets, tallies weighted
//! matches per category and picks the strongest one. Total over any input,
//! including the empty string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why a prompt was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptIntent {
    CodeGeneration,
    Planning,
    Refinement,
    Debugging,
    Documentation,
    PrdGeneration,
    Summarization,
    Migration,
    SecurityReview,
}

impl PromptIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptIntent::CodeGeneration => "code-generation",
            PromptIntent::Planning => "planning",
            PromptIntent::Refinement => "refinement",
            PromptIntent::Debugging => "debugging",
            PromptIntent::Documentation => "documentation",
            PromptIntent::PrdGeneration => "prd-generation",
            PromptIntent::Summarization => "summarization",
            PromptIntent::Migration => "migration",
            PromptIntent::SecurityReview => "security-review",
        }
    }

    pub fn all() -> &'static [PromptIntent] {
        &[
            PromptIntent::CodeGeneration,
            PromptIntent::Planning,
            PromptIntent::Refinement,
            PromptIntent::Debugging,
            PromptIntent::Documentation,
            PromptIntent::PrdGeneration,
            PromptIntent::Summarization,
            PromptIntent::Migration,
            PromptIntent::SecurityReview,
        ]
    }
}

impl fmt::Display for PromptIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PromptIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "code-generation" => Ok(PromptIntent::CodeGeneration),
            "planning" => Ok(PromptIntent::Planning),
            "refinement" => Ok(PromptIntent::Refinement),
            "debugging" => Ok(PromptIntent::Debugging),
            "documentation" => Ok(PromptIntent::Documentation),
            "prd-generation" => Ok(PromptIntent::PrdGeneration),
            "summarization" => Ok(PromptIntent::Summarization),
            "migration" => Ok(PromptIntent::Migration),
            "security-review" => Ok(PromptIntent::SecurityReview),
            other => Err(format!("unsupported intent tag: '{}'", other)),
        }
    }
}

/// Structural traits of the prompt, independent of its category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IntentCharacteristics {
    /// Exploratory phrasing or no concrete deliverable noun.
    pub is_open_ended: bool,
    /// Long single-block text with no line breaks, bullets or headers.
    pub needs_structure: bool,
}

/// Result of one classification pass. Immutable once produced; callers that
/// want to force a category override `primary_intent` and keep the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentAnalysis {
    pub primary_intent: PromptIntent,
    /// 0-100. Below [`IntentDetector::SIGNAL_THRESHOLD`] matches this is the
    /// catch-all default and stays at or below 40.
    pub confidence: u8,
    pub characteristics: IntentCharacteristics,
}

impl IntentAnalysis {
    pub fn with_intent(mut self, intent: PromptIntent) -> Self {
        self.primary_intent = intent;
        self
    }
}

/// Multi-word phrases count double: a phrase hit is a much stronger signal
/// than a lone word.
fn keyword_weight(keyword: &str) -> u32 {
    if keyword.contains(' ') {
        2
    } else {
        1
    }
}

const CATEGORY_KEYWORDS: &[(PromptIntent, &[&str])] = &[
    (
        PromptIntent::CodeGeneration,
        &[
            "build", "create", "implement", "write", "develop", "code", "function", "component",
            "page", "endpoint", "api", "script", "feature",
        ],
    ),
    (
        PromptIntent::Planning,
        &[
            "plan", "roadmap", "strategy", "architecture", "approach", "milestone", "outline",
            "phases", "break down", "high level",
        ],
    ),
    (
        PromptIntent::Refinement,
        &[
            "improve", "refine", "optimize", "refactor", "enhance", "polish", "simplify",
            "clean up", "tighten",
        ],
    ),
    (
        PromptIntent::Debugging,
        &[
            "fix", "bug", "error", "crash", "broken", "fails", "debug", "exception", "stack trace",
            "not working",
        ],
    ),
    (
        PromptIntent::Documentation,
        &[
            "document", "docs", "readme", "explain", "describe", "guide", "tutorial", "comment",
            "changelog",
        ],
    ),
    (
        PromptIntent::PrdGeneration,
        &[
            "prd", "product requirements", "requirements document", "user stories", "feature spec",
            "product spec",
        ],
    ),
    (
        PromptIntent::Summarization,
        &["summarize", "summary", "tldr", "condense", "recap", "digest", "boil down"],
    ),
    (
        PromptIntent::Migration,
        &[
            "migrate", "migration", "port over", "upgrade from", "convert from", "move from",
            "transition to",
        ],
    ),
    (
        PromptIntent::SecurityReview,
        &[
            "security", "vulnerability", "audit", "exploit", "pentest", "cve", "xss", "injection",
            "csrf", "hardening",
        ],
    ),
];

const EXPLORATORY_PHRASES: &[&str] = &[
    "maybe",
    "thinking about",
    "what if",
    "not sure",
    "wondering",
    "could we",
    "some ideas",
    "explore",
    "somehow",
    "or something",
];

const DELIVERABLE_NOUNS: &[&str] = &[
    "page", "endpoint", "api", "function", "component", "schema", "script", "dashboard",
    "service", "module", "table", "form", "report", "pipeline", "cli", "app", "library",
    "database", "query", "test",
];

/// Stateless keyword classifier. Deterministic for identical input.
pub struct IntentDetector;

impl IntentDetector {
    /// Minimum weighted hits the winning category must reach before it is
    /// trusted over the catch-all default.
    pub const SIGNAL_THRESHOLD: u32 = 1;

    /// Confidence assigned when no category reaches the signal threshold.
    pub const DEFAULT_CONFIDENCE: u8 = 25;

    /// Classify a prompt. Never fails; the empty string yields the catch-all
    /// intent at low confidence.
    pub fn analyze(prompt: &str) -> IntentAnalysis {
        let lower = prompt.to_lowercase();
        let characteristics = Self::characteristics(prompt, &lower);

        let mut tallies: Vec<(PromptIntent, u32)> = CATEGORY_KEYWORDS
            .iter()
            .map(|(intent, keywords)| {
                let score: u32 = keywords
                    .iter()
                    .filter(|kw| lower.contains(*kw))
                    .map(|kw| keyword_weight(kw))
                    .sum();
                (*intent, score)
            })
            .collect();
        tallies.sort_by(|a, b| b.1.cmp(&a.1));

        let (winner, winner_score) = tallies[0];
        let runner_up_score = tallies[1].1;

        if winner_score < Self::SIGNAL_THRESHOLD {
            return IntentAnalysis {
                primary_intent: PromptIntent::CodeGeneration,
                confidence: Self::DEFAULT_CONFIDENCE,
                characteristics,
            };
        }

        let margin = winner_score.saturating_sub(runner_up_score);
        let confidence = (40 + winner_score * 12 + margin * 8).min(100) as u8;

        IntentAnalysis {
            primary_intent: winner,
            confidence,
            characteristics,
        }
    }

    fn characteristics(prompt: &str, lower: &str) -> IntentCharacteristics {
        let word_count = prompt.split_whitespace().count();

        let exploratory = EXPLORATORY_PHRASES.iter().any(|p| lower.contains(p));
        let has_deliverable = DELIVERABLE_NOUNS.iter().any(|n| lower.contains(n));
        let is_open_ended = exploratory || !has_deliverable;

        let has_breaks = prompt.contains('\n');
        let has_bullets = prompt.contains("- ") || prompt.contains("* ");
        let has_sections = prompt.contains('#') || prompt.contains("1.");
        let needs_structure = word_count > 40 && !has_breaks && !has_bullets && !has_sections;

        IntentCharacteristics {
            is_open_ended,
            needs_structure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_code_generation() {
        let analysis = IntentDetector::analyze("Build a login page");
        assert_eq!(analysis.primary_intent, PromptIntent::CodeGeneration);
        assert!(analysis.confidence > 60);
    }

    #[test]
    fn classifies_security_review() {
        let analysis =
            IntentDetector::analyze("Audit this handler for XSS and injection vulnerabilities");
        assert_eq!(analysis.primary_intent, PromptIntent::SecurityReview);
    }

    #[test]
    fn classifies_migration() {
        let analysis = IntentDetector::analyze("Migrate the service from Express to Axum");
        assert_eq!(analysis.primary_intent, PromptIntent::Migration);
    }

    #[test]
    fn empty_prompt_defaults_with_low_confidence() {
        let analysis = IntentDetector::analyze("");
        assert_eq!(analysis.primary_intent, PromptIntent::CodeGeneration);
        assert!(analysis.confidence <= 40);
    }

    #[test]
    fn no_signal_defaults_with_low_confidence() {
        let analysis = IntentDetector::analyze("hmm things and stuff");
        assert_eq!(analysis.primary_intent, PromptIntent::CodeGeneration);
        assert!(analysis.confidence <= 40);
    }

    #[test]
    fn open_ended_detected_from_exploratory_phrasing() {
        let analysis = IntentDetector::analyze("maybe we could build an api endpoint, not sure");
        assert!(analysis.characteristics.is_open_ended);
    }

    #[test]
    fn concrete_deliverable_is_not_open_ended() {
        let analysis = IntentDetector::analyze("Build a login page with email validation");
        assert!(!analysis.characteristics.is_open_ended);
    }

    #[test]
    fn long_unbroken_text_needs_structure() {
        let prompt = "please build something that ".repeat(12);
        let analysis = IntentDetector::analyze(prompt.trim());
        assert!(analysis.characteristics.needs_structure);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let a = IntentDetector::analyze("Fix the crash in the checkout flow");
        let b = IntentDetector::analyze("Fix the crash in the checkout flow");
        assert_eq!(a.primary_intent, b.primary_intent);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn intent_tags_round_trip() {
        for intent in PromptIntent::all() {
            assert_eq!(intent.as_str().parse::<PromptIntent>().unwrap(), *intent);
        }
        assert!("spellcasting".parse::<PromptIntent>().is_err());
    }
}
