//! Conversation summarizer
//!
//! Turns rambling conversational prose into a Goals / Requirements /
//! Constraints document, keeping the original text verbatim underneath.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::intent::PromptIntent;
use crate::patterns::textutil::{
    dedup_keep_order, has_bullets, hit_count, sentences, structure_indicator_count,
};
use crate::patterns::{
    ImprovementImpact, OptimizationMode, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const CONVERSATIONAL_MARKERS: &[&str] = &[
    "i think",
    "i want",
    "i need",
    "we need",
    "we should",
    "also",
    "maybe we",
    "oh and",
    "actually",
    "by the way",
    "another thing",
    "let's",
    "what about",
];

const MAX_GOALS: usize = 10;
const MAX_REQUIREMENTS: usize = 5;
const MAX_CONSTRAINTS: usize = 3;

static GOAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:i need|we need|i want|we want|need to|want to|goal is to|trying to|would like to)\s+([^,.;\n]+)").expect("goal regex")
});

static REQUIREMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:must|should|has to|have to)\s+(?:be\s+|have\s+|support\s+)?([^,.;\n]+)")
        .expect("requirement regex")
});

static CONSTRAINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:can't|cannot|won't|shouldn't|must not|no more than|at most|within)\s+([^,.;\n]+)")
        .expect("constraint regex")
});

fn extract(re: &Regex, text: &str, cap: usize) -> Vec<String> {
    let items: Vec<String> = re
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    dedup_keep_order(items).into_iter().take(cap).collect()
}

pub struct ConversationSummarizer;

impl ConversationSummarizer {
    fn is_conversational(text: &str, lower: &str) -> bool {
        let marker_hits = hit_count(lower, CONVERSATIONAL_MARKERS);
        let long_unstructured = sentences(text).len() > 3 && !has_bullets(text);
        marker_hits >= 2 || long_unstructured
    }
}

impl Pattern for ConversationSummarizer {
    fn id(&self) -> &'static str {
        "conversation-summarizer"
    }

    fn name(&self) -> &'static str {
        "Conversation Summarizer"
    }

    fn description(&self) -> &'static str {
        "Extracts goals, requirements and constraints from conversational prose"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        &[
            PromptIntent::CodeGeneration,
            PromptIntent::Planning,
            PromptIntent::Refinement,
            PromptIntent::PrdGeneration,
            PromptIntent::Summarization,
        ]
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Deep
    }

    fn workflows(&self) -> &'static [OptimizationMode] {
        &[OptimizationMode::Conversational]
    }

    fn priority(&self) -> i32 {
        90
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        let lower = text.to_lowercase();

        // Already structured content is left alone.
        if structure_indicator_count(text) >= 3 {
            return Ok(PatternResult::unchanged(text));
        }
        if !Self::is_conversational(text, &lower) {
            return Ok(PatternResult::unchanged(text));
        }

        let goals = extract(&GOAL_RE, text, MAX_GOALS);
        let requirements = extract(&REQUIREMENT_RE, text, MAX_REQUIREMENTS);
        let constraints = extract(&CONSTRAINT_RE, text, MAX_CONSTRAINTS);

        if goals.is_empty() && requirements.is_empty() && constraints.is_empty() {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::new();
        if !goals.is_empty() {
            out.push_str("## Goals\n");
            for g in &goals {
                out.push_str(&format!("- {}\n", g));
            }
            out.push('\n');
        }
        if !requirements.is_empty() {
            out.push_str("## Requirements\n");
            for r in &requirements {
                out.push_str(&format!("- {}\n", r));
            }
            out.push('\n');
        }
        if !constraints.is_empty() {
            out.push_str("## Constraints\n");
            for c in &constraints {
                out.push_str(&format!("- {}\n", c));
            }
            out.push('\n');
        }
        out.push_str("## Original Notes\n\n");
        out.push_str(text);

        Ok(PatternResult::applied(
            out,
            QualityDimension::Structure,
            "Summarized conversational notes into goals, requirements and constraints",
            ImprovementImpact::High,
        ))
    }
}
