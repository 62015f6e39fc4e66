//! Success-criteria scaffold
//!
//! Prompts with no definition of done get a success-criteria section.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::{contains_any, word_count};
use crate::patterns::{
    ImprovementImpact, OptimizationMode, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const SUCCESS_MARKERS: &[&str] = &[
    "success",
    "acceptance",
    "done when",
    "should return",
    "should display",
    "expected",
    "criteria",
    "verify",
];

const SECTION: &str = "## Success Criteria\n\
- Observable behavior that proves this works:\n\
- What a reviewer checks before calling it done:\n";

pub struct SuccessCriteriaScaffold;

impl Pattern for SuccessCriteriaScaffold {
    fn id(&self) -> &'static str {
        "success-criteria"
    }

    fn name(&self) -> &'static str {
        "Success Criteria Scaffold"
    }

    fn description(&self) -> &'static str {
        "Adds a definition-of-done section when none is stated"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        &[
            PromptIntent::CodeGeneration,
            PromptIntent::Planning,
            PromptIntent::PrdGeneration,
        ]
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Deep
    }

    fn workflows(&self) -> &'static [OptimizationMode] {
        &[OptimizationMode::Prd]
    }

    fn priority(&self) -> i32 {
        45
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        let lower = text.to_lowercase();
        if word_count(text) < 4
            || contains_any(&lower, SUCCESS_MARKERS)
            || text.contains("## Success Criteria")
        {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from(text);
        out.push_str("\n\n");
        out.push_str(SECTION);

        Ok(PatternResult::applied(
            out,
            QualityDimension::Completeness,
            "Added a success-criteria section to fill in",
            ImprovementImpact::Medium,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::IntentDetector;
    use crate::patterns::OptimizationMode;

    fn ctx(text: &str) -> PatternContext {
        PatternContext::new(IntentDetector::analyze(text), OptimizationMode::Deep)
    }

    #[test]
    fn adds_section_when_no_done_definition() {
        let text = "Build the export feature for reports";
        let result = SuccessCriteriaScaffold.apply(text, &ctx(text)).unwrap();
        assert!(result.applied);
        assert!(result.enhanced_prompt.contains("## Success Criteria"));
    }

    #[test]
    fn skips_when_criteria_present() {
        let text = "Build the export feature, done when a CSV downloads with all columns";
        let result = SuccessCriteriaScaffold.apply(text, &ctx(text)).unwrap();
        assert!(!result.applied);
    }

    #[test]
    fn idempotent_on_own_output() {
        let text = "Build the export feature for reports";
        let first = SuccessCriteriaScaffold.apply(text, &ctx(text)).unwrap();
        let second = SuccessCriteriaScaffold
            .apply(&first.enhanced_prompt, &ctx(&first.enhanced_prompt))
            .unwrap();
        assert!(!second.applied);
    }
}
