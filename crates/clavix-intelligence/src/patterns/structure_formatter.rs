//! Structure formatter
//!
//! Breaks a long unbroken wall of text into a bulleted key-point list,
//! keeping the original underneath.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::{has_bullets, sentences, word_count};
use crate::patterns::{
    ImprovementImpact, OptimizationMode, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const MIN_WORDS: usize = 40;
const MAX_POINTS: usize = 8;

pub struct StructureFormatter;

impl Pattern for StructureFormatter {
    fn id(&self) -> &'static str {
        "structure-formatter"
    }

    fn name(&self) -> &'static str {
        "Structure Formatter"
    }

    fn description(&self) -> &'static str {
        "Splits long unbroken prose into a key-point list"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        PromptIntent::all()
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Both
    }

    fn workflows(&self) -> &'static [OptimizationMode] {
        &[OptimizationMode::Conversational]
    }

    fn priority(&self) -> i32 {
        80
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        if word_count(text) <= MIN_WORDS
            || text.contains('\n')
            || has_bullets(text)
            || text.contains('#')
        {
            return Ok(PatternResult::unchanged(text));
        }

        let points: Vec<&str> = sentences(text).into_iter().take(MAX_POINTS).collect();
        if points.len() < 2 {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from("## Key Points\n");
        for point in &points {
            out.push_str(&format!("- {}\n", point));
        }
        out.push_str("\n## Original\n\n");
        out.push_str(text);

        Ok(PatternResult::applied(
            out,
            QualityDimension::Structure,
            format!("Split unbroken prose into {} key points", points.len()),
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
    fn formats_long_unbroken_prose() {
        let text = "We have an existing billing service that keeps timing out under load and nobody knows why. \
                    The retry logic was bolted on last year and interacts badly with the queue consumer. \
                    I would like the consumer rewritten so that retries are idempotent and observable. \
                    It also needs a dead letter path so bad messages stop cycling forever.";
        let result = StructureFormatter.apply(text, &ctx(text)).unwrap();
        assert!(result.applied);
        assert!(result.enhanced_prompt.contains("## Key Points"));
        assert!(result.enhanced_prompt.contains(text));
    }

    #[test]
    fn skips_short_prompt() {
        let text = "Build a login page";
        let result = StructureFormatter.apply(text, &ctx(text)).unwrap();
        assert!(!result.applied);
        assert_eq!(result.enhanced_prompt, text);
    }

    #[test]
    fn skips_already_broken_text() {
        let long = "word ".repeat(50);
        let text = format!("- {}\n- more", long);
        let result = StructureFormatter.apply(&text, &ctx(&text)).unwrap();
        assert!(!result.applied);
    }
}
