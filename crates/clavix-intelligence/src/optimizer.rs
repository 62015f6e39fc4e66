//! Universal optimizer
//!
//! Orchestrates the pipeline: detect intent, select patterns, apply them
//! sequentially, assess quality, and aggregate everything into an
//! [`OptimizationResult`]. One pattern's failure never aborts the pipeline or
//! loses prior improvements; `optimize` always returns a result.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::escalation::{self, EscalationAnalysis};
use crate::intent::{IntentAnalysis, IntentDetector, PromptIntent};
use crate::patterns::{
    Improvement, ImprovementImpact, OptimizationMode, PatternContext, PatternLibrary, PatternMode,
    PatternPhase,
};
use crate::quality::{QualityAssessor, QualityScore};

/// Short record of one applied pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSummary {
    pub id: String,
    pub name: String,
    pub impact: ImprovementImpact,
}

/// Aggregate output of one `optimize` call. Value object: no identity, no
/// persistence; callers decide whether to write it to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub original_prompt: String,
    pub enhanced_prompt: String,
    pub intent: IntentAnalysis,
    /// Quality of the enhanced prompt.
    pub quality: QualityScore,
    /// Quality of what the user actually wrote. Escalation scoring reads
    /// this, never the enhanced score.
    pub original_quality: QualityScore,
    pub improvements: Vec<Improvement>,
    pub applied_patterns: Vec<PatternSummary>,
    pub mode: OptimizationMode,
    pub processing_time_ms: u64,
}

/// Advisory context supplied by the caller. An explicit intent overrides the
/// detected category while keeping detected confidence and characteristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextOverride {
    pub intent: Option<PromptIntent>,
    pub phase: Option<PatternPhase>,
}

/// Outcome of validating one PRD interview answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrdAnswerValidation {
    pub needs_clarification: bool,
    pub suggestion: Option<String>,
    pub quality: QualityScore,
}

/// Human-readable escalation guidance for rendering layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedRecommendation {
    pub headline: String,
    pub reasons: Vec<String>,
    pub deep_mode_value: String,
    pub escalation: EscalationAnalysis,
}

/// Per-question suggestion phrases: `[default, completeness-gap,
/// specificity-gap]`. Every phrase stays on topic for its question so the
/// user is nudged toward the same answer regardless of which gap fired.
fn question_suggestions(question_id: &str) -> [&'static str; 3] {
    match question_id {
        "q1" => [
            "Try describing the problem you're solving in a sentence or two",
            "Add detail about the problem you're solving: what breaks today, and for whom?",
            "Ground the problem you're solving in one concrete example or workflow",
        ],
        "q2" => [
            "Describe who will use this and what they're trying to get done",
            "Add detail about your users: role, context, and how often they hit this",
            "Name a specific user group instead of a general audience",
        ],
        "q3" => [
            "List the core capabilities this needs on day one",
            "Add the features you consider non-negotiable for a first version",
            "Name concrete features rather than broad goals",
        ],
        "q4" => [
            "Mention any constraints: stack, timeline, integrations, compliance",
            "Add the constraints that bound this work, even rough ones",
            "Name the specific systems or limits this must fit within",
        ],
        "q5" => [
            "Describe what success looks like once this ships",
            "Add how you'll know this worked: a behavior or number to check",
            "Name one measurable outcome instead of a general improvement",
        ],
        _ => [
            "Add a bit more detail so the answer can stand on its own",
            "Expand the answer with what happens today and what should change",
            "Replace general terms with the specific thing you mean",
        ],
    }
}

/// Stateless orchestration facade. Holds only stateless collaborators, so a
/// single instance can serve concurrent callers.
pub struct UniversalOptimizer {
    library: PatternLibrary,
}

impl UniversalOptimizer {
    /// Optimizer over the built-in pattern catalog.
    pub fn new() -> Self {
        Self {
            library: PatternLibrary::with_defaults(),
        }
    }

    /// Optimizer over a caller-supplied library. Used by tests to inject
    /// failing or synthetic patterns.
    pub fn with_library(library: PatternLibrary) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Run the full pipeline with no caller-supplied context.
    pub fn optimize(&self, prompt: &str, mode: OptimizationMode) -> OptimizationResult {
        self.optimize_with(prompt, mode, ContextOverride::default())
    }

    /// Run the full pipeline. Total over any input, including empty text.
    pub fn optimize_with(
        &self,
        prompt: &str,
        mode: OptimizationMode,
        ctx_override: ContextOverride,
    ) -> OptimizationResult {
        let start = Instant::now();

        let mut intent = IntentDetector::analyze(prompt);
        if let Some(explicit) = ctx_override.intent {
            debug!("intent override: {} -> {}", intent.primary_intent, explicit);
            intent.primary_intent = explicit;
        }

        let patterns = match mode {
            OptimizationMode::Prd | OptimizationMode::Conversational => self
                .library
                .select_patterns_for_mode(mode, &intent, ctx_override.phase),
            OptimizationMode::Fast => self.library.select_patterns(&intent, PatternMode::Fast),
            OptimizationMode::Deep => self.library.select_patterns(&intent, PatternMode::Deep),
        };

        let ctx = PatternContext {
            intent: intent.clone(),
            mode,
            phase: ctx_override.phase,
        };

        let mut enhanced = prompt.to_string();
        let mut improvements = Vec::new();
        let mut applied_patterns = Vec::new();

        for pattern in patterns {
            match pattern.apply(&enhanced, &ctx) {
                Ok(result) if result.applied => {
                    enhanced = result.enhanced_prompt;
                    let impact = result
                        .improvement
                        .as_ref()
                        .map(|i| i.impact)
                        .unwrap_or(ImprovementImpact::Low);
                    applied_patterns.push(PatternSummary {
                        id: pattern.id().to_string(),
                        name: pattern.name().to_string(),
                        impact,
                    });
                    if let Some(improvement) = result.improvement {
                        improvements.push(improvement);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    // Degradation contract: log and move on with the prior
                    // enhanced text untouched by this pattern.
                    warn!("pattern {} failed: {}; continuing", pattern.id(), e);
                }
            }
        }

        let original_quality = QualityAssessor::assess_text(prompt, &intent);
        let quality = QualityAssessor::assess(prompt, &enhanced, &intent);

        OptimizationResult {
            original_prompt: prompt.to_string(),
            enhanced_prompt: enhanced,
            intent,
            quality,
            original_quality,
            improvements,
            applied_patterns,
            mode,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Score whether this prompt deserves a deeper workflow. Reads the
    /// original prompt's quality, not the enhanced one.
    pub fn analyze_escalation(&self, result: &OptimizationResult) -> EscalationAnalysis {
        escalation::analyze(result)
    }

    /// Backward-compatible boolean view of [`Self::analyze_escalation`].
    pub fn should_recommend_deep_mode(&self, result: &OptimizationResult) -> bool {
        self.analyze_escalation(result).should_escalate
    }

    /// Validate one PRD interview answer, producing a friendly suggestion
    /// when the answer is too thin to build on.
    pub fn validate_prd_answer(&self, answer: &str, question_id: &str) -> PrdAnswerValidation {
        let result = self.optimize_with(
            answer,
            OptimizationMode::Prd,
            ContextOverride {
                intent: Some(PromptIntent::PrdGeneration),
                phase: Some(PatternPhase::QuestionValidation),
            },
        );

        let quality = result.quality;
        if quality.overall >= 50 {
            return PrdAnswerValidation {
                needs_clarification: false,
                suggestion: None,
                quality,
            };
        }

        let suggestions = question_suggestions(question_id);
        let suggestion = if quality.completeness < 40 {
            suggestions[1]
        } else if quality.specificity < 40 {
            suggestions[2]
        } else {
            suggestions[0]
        };

        PrdAnswerValidation {
            needs_clarification: true,
            suggestion: Some(suggestion.to_string()),
            quality,
        }
    }

    /// One-line guidance for the CLI, or `None` when the prompt is fine as
    /// is.
    pub fn get_recommendation(&self, result: &OptimizationResult) -> Option<String> {
        let escalation = self.analyze_escalation(result);
        if !escalation.should_escalate {
            return None;
        }
        Some(format!(
            "Consider deep mode: it would add {}.",
            escalation.deep_mode_value
        ))
    }

    /// Structured guidance for rendering layers that want the reasons too.
    pub fn get_detailed_recommendation(&self, result: &OptimizationResult) -> DetailedRecommendation {
        let escalation = self.analyze_escalation(result);
        let headline = if escalation.should_escalate {
            format!(
                "Deep mode recommended (score {})",
                escalation.escalation_score
            )
        } else {
            format!(
                "Current mode is sufficient (score {})",
                escalation.escalation_score
            )
        };
        let reasons = escalation
            .reasons
            .iter()
            .map(|r| format!("{} (+{})", r.description, r.contribution))
            .collect();
        DetailedRecommendation {
            headline,
            reasons,
            deep_mode_value: escalation.deep_mode_value.clone(),
            escalation,
        }
    }
}

impl Default for UniversalOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
