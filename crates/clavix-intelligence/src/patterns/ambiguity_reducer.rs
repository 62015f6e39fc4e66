//! Ambiguity reducer
//!
//! Collects hedged phrases ("maybe", "sort of", ...) into an explicit list of
//! ambiguities the author should resolve.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::dedup_keep_order;
use crate::patterns::{
    ImprovementImpact, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const HEDGE_WORDS: &[&str] = &[
    "maybe",
    "probably",
    "kind of",
    "sort of",
    "somehow",
    "i guess",
    "something like",
    "or whatever",
    "not sure",
];

const MAX_ITEMS: usize = 5;
const SECTION_HEADER: &str = "## Ambiguities To Resolve";

pub struct AmbiguityReducer;

impl Pattern for AmbiguityReducer {
    fn id(&self) -> &'static str {
        "ambiguity-reducer"
    }

    fn name(&self) -> &'static str {
        "Ambiguity Reducer"
    }

    fn description(&self) -> &'static str {
        "Lists hedged phrases so the author can firm them up"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        PromptIntent::all()
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Both
    }

    fn priority(&self) -> i32 {
        25
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        if text.contains(SECTION_HEADER) {
            return Ok(PatternResult::unchanged(text));
        }
        let lower = text.to_lowercase();
        let hits: Vec<String> = HEDGE_WORDS
            .iter()
            .filter(|h| lower.contains(*h))
            .map(|h| h.to_string())
            .collect();
        if hits.len() < 2 {
            return Ok(PatternResult::unchanged(text));
        }
        let hits: Vec<String> = dedup_keep_order(hits).into_iter().take(MAX_ITEMS).collect();

        let mut out = String::from(text);
        out.push_str(&format!("\n\n{}\n", SECTION_HEADER));
        for hit in &hits {
            out.push_str(&format!("- \"{}\" — replace with a concrete choice\n", hit));
        }

        Ok(PatternResult::applied(
            out,
            QualityDimension::Clarity,
            format!("Flagged {} hedged phrase(s) to firm up", hits.len()),
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
    fn flags_hedged_prompt() {
        let text = "Maybe add caching, sort of like the old service did";
        let result = AmbiguityReducer.apply(text, &ctx(text)).unwrap();
        assert!(result.applied);
        assert!(result.enhanced_prompt.contains(SECTION_HEADER));
        assert!(result.enhanced_prompt.contains("maybe"));
    }

    #[test]
    fn single_hedge_is_tolerated() {
        let text = "Maybe add caching to the session lookup";
        let result = AmbiguityReducer.apply(text, &ctx(text)).unwrap();
        assert!(!result.applied);
    }

    #[test]
    fn idempotent_on_own_output() {
        let text = "Maybe add caching, sort of like the old service did";
        let first = AmbiguityReducer.apply(text, &ctx(text)).unwrap();
        let second = AmbiguityReducer
            .apply(&first.enhanced_prompt, &ctx(&first.enhanced_prompt))
            .unwrap();
        assert!(!second.applied);
    }
}
