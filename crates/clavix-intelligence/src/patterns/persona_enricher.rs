//! User-persona enricher
//!
//! Feature requests that never mention an audience get a Target Users
//! section with a persona inferred from domain keywords.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::contains_any;
use crate::patterns::{
    ImprovementImpact, OptimizationMode, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const FEATURE_MARKERS: &[&str] = &[
    "feature",
    "require",
    "build",
    "create",
    "implement",
    "product",
    "launch",
];

const AUDIENCE_MARKERS: &[&str] = &[
    "user",
    "customer",
    "audience",
    "persona",
    "stakeholder",
    "visitor",
    "client",
    "developer",
    "admin",
];

/// Domain keyword families checked in order; first match wins.
const PERSONA_RULES: &[(&[&str], &str)] = &[
    (&["api", "sdk", "library", "cli"], "Developers integrating against the API/SDK"),
    (&["dashboard", "analytics", "metrics"], "Administrators monitoring the system"),
    (&["e-commerce", "shop", "checkout", "cart"], "Customers completing purchases"),
    (&["cms", "blog", "article", "publishing"], "Content creators managing published material"),
    (&["mobile", "ios", "android"], "Mobile users on small screens and flaky networks"),
];

const DEFAULT_PERSONA: &str = "(describe who uses this and what they are trying to accomplish)";

pub struct PersonaEnricher;

impl PersonaEnricher {
    fn infer_persona(lower: &str) -> &'static str {
        PERSONA_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
            .map(|(_, persona)| *persona)
            .unwrap_or(DEFAULT_PERSONA)
    }
}

impl Pattern for PersonaEnricher {
    fn id(&self) -> &'static str {
        "persona-enricher"
    }

    fn name(&self) -> &'static str {
        "User Persona Enricher"
    }

    fn description(&self) -> &'static str {
        "Adds a Target Users section when a feature request names no audience"
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
        65
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        let lower = text.to_lowercase();
        if !contains_any(&lower, FEATURE_MARKERS) || contains_any(&lower, AUDIENCE_MARKERS) {
            return Ok(PatternResult::unchanged(text));
        }

        let persona = Self::infer_persona(&lower);
        let mut out = String::from(text);
        out.push_str("\n\n## Target Users\n");
        out.push_str(&format!("- {}\n", persona));
        out.push_str("(inferred from domain keywords; confirm before building)\n");

        Ok(PatternResult::applied(
            out,
            QualityDimension::Completeness,
            "Added an inferred target-user persona",
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
    fn infers_developer_persona_for_api_work() {
        let text = "Build a rate-limited public api for the catalog";
        let result = PersonaEnricher.apply(text, &ctx(text)).unwrap();
        assert!(result.applied);
        assert!(result.enhanced_prompt.contains("## Target Users"));
        assert!(result.enhanced_prompt.contains("Developers integrating"));
    }

    #[test]
    fn falls_back_to_placeholder_persona() {
        let text = "Build the quarterly forecasting feature";
        let result = PersonaEnricher.apply(text, &ctx(text)).unwrap();
        assert!(result.applied);
        assert!(result.enhanced_prompt.contains("describe who uses this"));
    }

    #[test]
    fn skips_when_audience_already_named() {
        let text = "Build an onboarding flow for new customers";
        let result = PersonaEnricher.apply(text, &ctx(text)).unwrap();
        assert!(!result.applied);
        assert_eq!(result.enhanced_prompt, text);
    }

    #[test]
    fn idempotent_on_own_output() {
        let text = "Build a rate-limited public api for the catalog";
        let first = PersonaEnricher.apply(text, &ctx(text)).unwrap();
        let second = PersonaEnricher
            .apply(&first.enhanced_prompt, &ctx(&first.enhanced_prompt))
            .unwrap();
        assert!(!second.applied);
    }
}
