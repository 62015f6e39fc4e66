//! Scope boundary marker
//!
//! Planning-flavored prompts with no stated scope get an in/out-of-scope
//! section.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::{contains_any, word_count};
use crate::patterns::{
    ImprovementImpact, OptimizationMode, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const SCOPE_MARKERS: &[&str] = &[
    "in scope",
    "out of scope",
    "non-goal",
    "not include",
    "excluding",
    "scope:",
];

const SECTION: &str = "## Scope\n\
In scope:\n- \n\nOut of scope:\n- \n";

pub struct ScopeBoundaryMarker;

impl Pattern for ScopeBoundaryMarker {
    fn id(&self) -> &'static str {
        "scope-boundary"
    }

    fn name(&self) -> &'static str {
        "Scope Boundary Marker"
    }

    fn description(&self) -> &'static str {
        "Adds an in/out-of-scope section when none is stated"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        &[
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
        40
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        let lower = text.to_lowercase();
        if word_count(text) < 4 || contains_any(&lower, SCOPE_MARKERS) || text.contains("## Scope")
        {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from(text);
        out.push_str("\n\n");
        out.push_str(SECTION);

        Ok(PatternResult::applied(
            out,
            QualityDimension::Completeness,
            "Added a scope boundary section to fill in",
            ImprovementImpact::Low,
        ))
    }
}
