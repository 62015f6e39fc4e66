//! End-to-end tests for the optimization pipeline.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use clavix_intelligence::{
    OptimizationMode, Pattern, PatternContext, PatternLibrary, PatternMode, PatternResult,
    PromptIntent, UniversalOptimizer,
};

#[test]
fn bare_feature_request_scores_incomplete() {
    let optimizer = UniversalOptimizer::new();
    let result = optimizer.optimize("Build a login page", OptimizationMode::Fast);

    assert_eq!(result.intent.primary_intent, PromptIntent::CodeGeneration);
    assert!(result.original_quality.completeness < 60);
}

#[test]
fn empty_prompt_produces_a_valid_result() {
    let optimizer = UniversalOptimizer::new();
    for mode in [
        OptimizationMode::Fast,
        OptimizationMode::Deep,
        OptimizationMode::Prd,
        OptimizationMode::Conversational,
    ] {
        let result = optimizer.optimize("", mode);
        assert_eq!(result.quality.overall, 0);
        assert!(result.applied_patterns.is_empty());
        assert_eq!(result.enhanced_prompt, "");
    }
}

#[test]
fn conversational_prompt_in_deep_mode_extracts_structure_and_implicit_requirements() {
    let optimizer = UniversalOptimizer::new();
    let prompt = "I need a dashboard, also I want real-time updates, and we need user management with admin roles";
    let result = optimizer.optimize(prompt, OptimizationMode::Deep);

    let applied: Vec<&str> = result.applied_patterns.iter().map(|p| p.id.as_str()).collect();
    assert!(applied.contains(&"conversation-summarizer"), "applied: {:?}", applied);
    assert!(applied.contains(&"implicit-requirements"), "applied: {:?}", applied);

    assert!(result
        .enhanced_prompt
        .contains("Real-time updates infrastructure needed"));
    assert!(result
        .enhanced_prompt
        .contains("User authentication system (implied by user roles)"));
    // Non-destructive: the original text survives verbatim.
    assert!(result.enhanced_prompt.contains(prompt));
}

#[test]
fn optimization_is_deterministic() {
    let optimizer = UniversalOptimizer::new();
    let prompt = "Plan the migration of our billing service off the legacy queue";
    let a = optimizer.optimize(prompt, OptimizationMode::Deep);
    let b = optimizer.optimize(prompt, OptimizationMode::Deep);

    assert_eq!(a.enhanced_prompt, b.enhanced_prompt);
    assert_eq!(a.quality.overall, b.quality.overall);
    assert_eq!(a.intent.primary_intent, b.intent.primary_intent);
    assert_eq!(a.applied_patterns.len(), b.applied_patterns.len());
}

#[test]
fn intent_override_keeps_detected_characteristics() {
    let optimizer = UniversalOptimizer::new();
    let prompt = "Build a login page";
    let detected = optimizer.optimize(prompt, OptimizationMode::Fast);
    let overridden = optimizer.optimize_with(
        prompt,
        OptimizationMode::Fast,
        clavix_intelligence::optimizer::ContextOverride {
            intent: Some(PromptIntent::SecurityReview),
            phase: None,
        },
    );

    assert_eq!(overridden.intent.primary_intent, PromptIntent::SecurityReview);
    assert_eq!(overridden.intent.confidence, detected.intent.confidence);
    assert_eq!(
        overridden.intent.characteristics.is_open_ended,
        detected.intent.characteristics.is_open_ended
    );
}

struct AlwaysFails;

impl Pattern for AlwaysFails {
    fn id(&self) -> &'static str {
        "always-fails"
    }
    fn name(&self) -> &'static str {
        "Always Fails"
    }
    fn description(&self) -> &'static str {
        "test stub that errors on every call"
    }
    fn applicable_intents(&self) -> &'static [PromptIntent] {
        PromptIntent::all()
    }
    fn mode(&self) -> PatternMode {
        PatternMode::Both
    }
    fn priority(&self) -> i32 {
        1_000
    }
    fn apply(&self, _text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        Err(anyhow!("synthetic pattern failure"))
    }
}

#[test]
fn one_failing_pattern_does_not_abort_the_pipeline() {
    let mut library = PatternLibrary::with_defaults();
    library.register(Arc::new(AlwaysFails));
    let optimizer = UniversalOptimizer::with_library(library);

    let prompt = "I need a dashboard, also I want real-time updates, and we need user management with admin roles";
    let result = optimizer.optimize(prompt, OptimizationMode::Deep);

    // The failing pattern ran first (highest priority) yet the rest of the
    // pipeline still contributed its improvements.
    let applied: Vec<&str> = result.applied_patterns.iter().map(|p| p.id.as_str()).collect();
    assert!(!applied.contains(&"always-fails"));
    assert!(applied.contains(&"conversation-summarizer"));
    assert!(result.enhanced_prompt.contains(prompt));
}

#[test]
fn already_prioritized_prompt_skips_the_prioritizer() {
    let optimizer = UniversalOptimizer::new();
    let prompt = "Build the portal features\n\n## Must-Have\n- search\n\n## Nice-to-Have\n- export";
    let result = optimizer.optimize(prompt, OptimizationMode::Deep);

    assert!(!result
        .applied_patterns
        .iter()
        .any(|p| p.id == "requirement-prioritizer"));
}

#[test]
fn terse_prd_answer_needs_clarification() {
    let optimizer = UniversalOptimizer::new();
    let validation = optimizer.validate_prd_answer("idk", "q1");

    assert!(validation.needs_clarification);
    let suggestion = validation.suggestion.expect("suggestion for a terse answer");
    assert!(
        suggestion.contains("the problem you're solving"),
        "suggestion was: {}",
        suggestion
    );
    assert!(validation.quality.overall < 50);
}

#[test]
fn substantial_prd_answer_passes_validation() {
    let optimizer = UniversalOptimizer::new();
    let answer = "Support agents currently copy order data between two dashboards by hand. \
                  It takes about ten minutes per ticket and produces transcription errors. \
                  We want a single review screen that pulls from the existing Postgres orders table \
                  so agents verify a refund in under one minute.";
    let validation = optimizer.validate_prd_answer(answer, "q1");

    assert!(!validation.needs_clarification, "quality: {:?}", validation.quality);
    assert!(validation.suggestion.is_none());
}

#[test]
fn fast_mode_selects_fewer_patterns_than_deep() {
    let optimizer = UniversalOptimizer::new();
    let intent = clavix_intelligence::IntentDetector::analyze("Build a login page");
    let fast = optimizer.library().select_patterns(&intent, PatternMode::Fast);
    let deep = optimizer.library().select_patterns(&intent, PatternMode::Deep);
    assert!(fast.len() < deep.len());
}
