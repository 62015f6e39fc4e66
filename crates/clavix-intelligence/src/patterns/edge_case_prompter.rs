//! Edge-case prompter
//!
//! Code and debugging prompts that never mention failure paths get a short
//! list of edge cases to consider.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::{contains_any, word_count};
use crate::patterns::{
    ImprovementImpact, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const EDGE_MARKERS: &[&str] = &[
    "edge case",
    "error handling",
    "failure",
    "invalid input",
    "empty input",
    "timeout",
    "race",
];

const SECTION: &str = "## Edge Cases To Consider\n\
- Empty or malformed input\n\
- The failure path (what the user sees when this breaks)\n\
- Limits: concurrent use, large payloads, slow dependencies\n";

pub struct EdgeCasePrompter;

impl Pattern for EdgeCasePrompter {
    fn id(&self) -> &'static str {
        "edge-case-prompter"
    }

    fn name(&self) -> &'static str {
        "Edge Case Prompter"
    }

    fn description(&self) -> &'static str {
        "Reminds the author to specify failure-path behavior"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        &[
            PromptIntent::CodeGeneration,
            PromptIntent::Debugging,
            PromptIntent::SecurityReview,
        ]
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Deep
    }

    fn priority(&self) -> i32 {
        35
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        let lower = text.to_lowercase();
        if word_count(text) < 4
            || contains_any(&lower, EDGE_MARKERS)
            || text.contains("## Edge Cases")
        {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from(text);
        out.push_str("\n\n");
        out.push_str(SECTION);

        Ok(PatternResult::applied(
            out,
            QualityDimension::Completeness,
            "Added edge cases to specify",
            ImprovementImpact::Low,
        ))
    }
}
