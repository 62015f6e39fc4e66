//! Answer expander
//!
//! PRD question-validation helper: terse interview answers get a nudge that
//! lists the specifics a useful answer carries.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::word_count;
use crate::patterns::{
    ImprovementImpact, OptimizationMode, Pattern, PatternContext, PatternMode, PatternPhase,
    PatternResult,
};
use crate::quality::QualityDimension;

const MIN_WORDS: usize = 12;
const SECTION: &str = "## Expand Your Answer\n\
A useful answer names who is affected, what happens today, and what should\n\
happen instead. One concrete example beats three adjectives.\n";

pub struct AnswerExpander;

impl Pattern for AnswerExpander {
    fn id(&self) -> &'static str {
        "answer-expander"
    }

    fn name(&self) -> &'static str {
        "Answer Expander"
    }

    fn description(&self) -> &'static str {
        "Nudges terse PRD interview answers toward specifics"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        &[PromptIntent::PrdGeneration]
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Deep
    }

    fn workflows(&self) -> &'static [OptimizationMode] {
        &[OptimizationMode::Prd]
    }

    fn phases(&self) -> &'static [PatternPhase] {
        &[PatternPhase::QuestionValidation]
    }

    fn priority(&self) -> i32 {
        20
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        if word_count(text) >= MIN_WORDS || text.contains("## Expand Your Answer") {
            return Ok(PatternResult::unchanged(text));
        }
        if text.trim().is_empty() {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from(text);
        out.push_str("\n\n");
        out.push_str(SECTION);

        Ok(PatternResult::applied(
            out,
            QualityDimension::Completeness,
            "Nudged a terse answer toward concrete specifics",
            ImprovementImpact::Medium,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::{IntentDetector, PromptIntent};
    use crate::patterns::{OptimizationMode, PatternPhase};

    fn ctx(text: &str) -> PatternContext {
        PatternContext::new(
            IntentDetector::analyze(text).with_intent(PromptIntent::PrdGeneration),
            OptimizationMode::Prd,
        )
        .with_phase(PatternPhase::QuestionValidation)
    }

    #[test]
    fn nudges_terse_answer() {
        let text = "idk";
        let result = AnswerExpander.apply(text, &ctx(text)).unwrap();
        assert!(result.applied);
        assert!(result.enhanced_prompt.contains("## Expand Your Answer"));
        assert!(result.enhanced_prompt.starts_with("idk"));
    }

    #[test]
    fn leaves_substantial_answer_alone() {
        let text = "Support agents spend ten minutes per ticket copying order data between two dashboards";
        let result = AnswerExpander.apply(text, &ctx(text)).unwrap();
        assert!(!result.applied);
    }

    #[test]
    fn empty_answer_is_unchanged() {
        let result = AnswerExpander.apply("", &ctx("")).unwrap();
        assert!(!result.applied);
        assert_eq!(result.enhanced_prompt, "");
    }
}
