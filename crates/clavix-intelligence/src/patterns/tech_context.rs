//! Tech-context prompter
//!
//! Code-oriented prompts that never name a stack get a fill-in section
//! asking for language, framework and versions.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::{contains_any, word_count};
use crate::patterns::{
    ImprovementImpact, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const TECH_MARKERS: &[&str] = &[
    "rust", "react", "python", "node", "typescript", "javascript", "postgres", "mysql",
    "sqlite", "java", "golang", "aws", "docker", "kubernetes", "vue", "django", "rails",
    "axum", "tokio", "next.js", "tailwind", "graphql",
];

const SECTION: &str = "## Tech Context (fill in)\n\
- Language / framework:\n\
- Versions that matter:\n\
- Existing code this touches:\n";

pub struct TechContextPrompter;

impl Pattern for TechContextPrompter {
    fn id(&self) -> &'static str {
        "tech-context"
    }

    fn name(&self) -> &'static str {
        "Tech Context Prompter"
    }

    fn description(&self) -> &'static str {
        "Asks for the tech stack when a code prompt names none"
    }

    fn applicable_intents(&self) -> &'static [PromptIntent] {
        &[
            PromptIntent::CodeGeneration,
            PromptIntent::Migration,
            PromptIntent::Debugging,
        ]
    }

    fn mode(&self) -> PatternMode {
        PatternMode::Deep
    }

    fn priority(&self) -> i32 {
        55
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        let lower = text.to_lowercase();
        if word_count(text) < 4
            || contains_any(&lower, TECH_MARKERS)
            || text.contains("## Tech Context")
        {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from(text);
        out.push_str("\n\n");
        out.push_str(SECTION);

        Ok(PatternResult::applied(
            out,
            QualityDimension::Completeness,
            "Added a tech-stack section to fill in",
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
    fn prompts_for_stack_when_absent() {
        let text = "Build a login page";
        let result = TechContextPrompter.apply(text, &ctx(text)).unwrap();
        assert!(result.applied);
        assert!(result.enhanced_prompt.contains("## Tech Context"));
    }

    #[test]
    fn skips_when_stack_is_named() {
        let text = "Build a login page in React with Postgres sessions";
        let result = TechContextPrompter.apply(text, &ctx(text)).unwrap();
        assert!(!result.applied);
        assert_eq!(result.enhanced_prompt, text);
    }

    #[test]
    fn idempotent_on_own_output() {
        let text = "Build a login page";
        let first = TechContextPrompter.apply(text, &ctx(text)).unwrap();
        let second = TechContextPrompter
            .apply(&first.enhanced_prompt, &ctx(&first.enhanced_prompt))
            .unwrap();
        assert!(!second.applied);
    }
}
