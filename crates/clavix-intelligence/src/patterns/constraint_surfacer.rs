//! Constraint surfacer
//!
//! Prompts that state no limits at all get a constraints section to fill in.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::{contains_any, word_count};
use crate::patterns::{
    ImprovementImpact, OptimizationMode, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const CONSTRAINT_MARKERS: &[&str] = &[
    "must",
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
];

const SECTION: &str = "## Constraints\n\
- Hard limits (time, budget, compatibility):\n\
- Things that must not change:\n";

pub struct ConstraintSurfacer;

impl Pattern for ConstraintSurfacer {
    fn id(&self) -> &'static str {
        "constraint-surfacer"
    }

    fn name(&self) -> &'static str {
        "Constraint Surfacer"
    }

    fn description(&self) -> &'static str {
        "Adds a constraints section when the prompt states no limits"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        &[
            PromptIntent::CodeGeneration,
            PromptIntent::Planning,
            PromptIntent::PrdGeneration,
            PromptIntent::Migration,
        ]
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Deep
    }

    fn workflows(&self) -> &'static [OptimizationMode] {
        &[OptimizationMode::Prd]
    }

    fn priority(&self) -> i32 {
        50
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        let lower = text.to_lowercase();
        if word_count(text) < 4
            || contains_any(&lower, CONSTRAINT_MARKERS)
            || text.contains("## Constraints")
        {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from(text);
        out.push_str("\n\n");
        out.push_str(SECTION);

        Ok(PatternResult::applied(
            out,
            QualityDimension::Completeness,
            "Added a constraints section to fill in",
            ImprovementImpact::Medium,
        ))
    }
}
