//! Output-format specifier
//!
//! Asks for the expected deliverable shape when the prompt never says what
//! the answer should look like.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::{contains_any, word_count};
use crate::patterns::{
    ImprovementImpact, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const FORMAT_MARKERS: &[&str] = &[
    "format",
    "markdown",
    "json",
    "table",
    "bullet list",
    "as a list",
    "diff",
    "patch",
];

const SECTION: &str = "## Expected Output\n\
Describe the deliverable shape (file diff, markdown doc, code block, table).\n";

pub struct OutputFormatSpecifier;

impl Pattern for OutputFormatSpecifier {
    fn id(&self) -> &'static str {
        "output-format"
    }

    fn name(&self) -> &'static str {
        "Output Format Specifier"
    }

    fn description(&self) -> &'static str {
        "Adds an expected-output section when the prompt names no format"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        &[
            PromptIntent::Documentation,
            PromptIntent::Summarization,
            PromptIntent::CodeGeneration,
        ]
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Fast
    }

    fn priority(&self) -> i32 {
        30
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        let lower = text.to_lowercase();
        if word_count(text) < 4
            || contains_any(&lower, FORMAT_MARKERS)
            || text.contains("## Expected Output")
        {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from(text);
        out.push_str("\n\n");
        out.push_str(SECTION);

        Ok(PatternResult::applied(
            out,
            QualityDimension::Actionability,
            "Added an expected-output section",
            ImprovementImpact::Low,
        ))
    }
}
