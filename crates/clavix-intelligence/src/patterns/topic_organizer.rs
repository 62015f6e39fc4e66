//! Topic organizer
//!
//! When a prompt mixes several topic areas with no headings, groups matched
//! sentences under per-topic headers and keeps the full original text
//! beneath a "Full Context" marker.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::sentences;
use crate::patterns::{
    ImprovementImpact, OptimizationMode, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("UI", &["ui", "interface", "screen", "layout", "button", "styling", "css", "frontend"]),
    ("Backend", &["backend", "server", "endpoint", "api", "service", "handler"]),
    ("Database", &["database", "schema", "table", "query", "sql", "migration", "storage"]),
    ("Auth", &["auth", "login", "signup", "password", "permission", "role", "session"]),
    ("Performance", &["performance", "slow", "latency", "cache", "scale", "throughput"]),
    ("Testing", &["test", "testing", "coverage", "assertion", "mock", "fixture"]),
    ("Deployment", &["deploy", "deployment", "ci", "docker", "release", "hosting"]),
    ("UX", &["ux", "usability", "accessibility", "onboarding", "flow", "experience"]),
    ("Business Logic", &["business", "pricing", "billing", "workflow", "rules", "policy"]),
    ("Integration", &["integration", "webhook", "third-party", "sync", "import", "export"]),
];

pub struct TopicOrganizer;

impl TopicOrganizer {
    fn matched_topics(lower: &str) -> Vec<&'static str> {
        TOPIC_KEYWORDS
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
            .map(|(topic, _)| *topic)
            .collect()
    }

    fn topic_for_sentence(sentence: &str) -> Option<&'static str> {
        let lower = sentence.to_lowercase();
        TOPIC_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
            .map(|(topic, _)| *topic)
    }
}

impl Pattern for TopicOrganizer {
    fn id(&self) -> &'static str {
        "topic-organizer"
    }

    fn name(&self) -> &'static str {
        "Topic Organizer"
    }

    fn description(&self) -> &'static str {
        "Groups multi-topic prompts under per-topic headings"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        &[
            PromptIntent::CodeGeneration,
            PromptIntent::Planning,
            PromptIntent::PrdGeneration,
            PromptIntent::Summarization,
            PromptIntent::Documentation,
        ]
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Deep
    }

    fn workflows(&self) -> &'static [OptimizationMode] {
        &[OptimizationMode::Conversational]
    }

    fn priority(&self) -> i32 {
        85
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        // Existing topic headers mean the author already organized the text.
        if text.contains("## ") {
            return Ok(PatternResult::unchanged(text));
        }

        let lower = text.to_lowercase();
        let topics = Self::matched_topics(&lower);
        if topics.len() < 2 {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from("## Topics Covered\n");
        for topic in &topics {
            out.push_str(&format!("- {}\n", topic));
        }
        out.push('\n');

        for topic in &topics {
            let matched: Vec<&str> = sentences(text)
                .into_iter()
                .filter(|s| Self::topic_for_sentence(s) == Some(*topic))
                .collect();
            if matched.is_empty() {
                continue;
            }
            out.push_str(&format!("## {}\n", topic));
            for sentence in matched {
                out.push_str(&format!("- {}\n", sentence));
            }
            out.push('\n');
        }

        out.push_str("## Full Context\n\n");
        out.push_str(text);

        Ok(PatternResult::applied(
            out,
            QualityDimension::Structure,
            format!("Organized content under {} topic headings", topics.len()),
            ImprovementImpact::High,
        ))
    }
}
