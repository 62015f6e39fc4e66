//! Objective clarifier
//!
//! Prompts with no explicit goal statement get an inferred objective section
//! derived from the first sentence, flagged for the author to confirm.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::{contains_any, sentences, word_count};
use crate::patterns::{
    ImprovementImpact, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

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

pub struct ObjectiveClarifier;

impl Pattern for ObjectiveClarifier {
    fn id(&self) -> &'static str {
        "objective-clarifier"
    }

    fn name(&self) -> &'static str {
        "Objective Clarifier"
    }

    fn description(&self) -> &'static str {
        "Adds an explicit objective section when the prompt states none"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        PromptIntent::all()
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Both
    }

    fn priority(&self) -> i32 {
        75
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        let lower = text.to_lowercase();
        if word_count(text) < 6 || contains_any(&lower, OBJECTIVE_MARKERS) {
            return Ok(PatternResult::unchanged(text));
        }
        let first = match sentences(text).first() {
            Some(s) => s.to_string(),
            None => return Ok(PatternResult::unchanged(text)),
        };

        let mut out = String::from(text);
        out.push_str("\n\n## Objective\n");
        out.push_str(&format!("{} (inferred from the request; adjust if wrong)\n", first));

        Ok(PatternResult::applied(
            out,
            QualityDimension::Clarity,
            "Added an explicit objective statement inferred from the opening sentence",
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
        PatternContext::new(IntentDetector::analyze(text), OptimizationMode::Fast)
    }

    #[test]
    fn adds_objective_when_missing() {
        let text = "Build a settings page with profile editing and a dark mode toggle";
        let result = ObjectiveClarifier.apply(text, &ctx(text)).unwrap();
        assert!(result.applied);
        assert!(result.enhanced_prompt.contains("## Objective"));
        assert!(result.enhanced_prompt.starts_with(text));
    }

    #[test]
    fn skips_when_objective_stated() {
        let text = "The goal is to reduce login latency below 200ms for mobile clients";
        let result = ObjectiveClarifier.apply(text, &ctx(text)).unwrap();
        assert!(!result.applied);
        assert_eq!(result.enhanced_prompt, text);
    }

    #[test]
    fn skips_very_short_prompts() {
        let text = "Fix the bug";
        let result = ObjectiveClarifier.apply(text, &ctx(text)).unwrap();
        assert!(!result.applied);
    }

    #[test]
    fn idempotent_on_own_output() {
        let text = "Build a settings page with profile editing and a dark mode toggle";
        let first = ObjectiveClarifier.apply(text, &ctx(text)).unwrap();
        let second = ObjectiveClarifier
            .apply(&first.enhanced_prompt, &ctx(&first.enhanced_prompt))
            .unwrap();
        assert!(!second.applied);
    }
}
