//! Prompt intelligence engine
//!
//! Rule-based pipeline that classifies a prompt's intent, applies an ordered
//! sequence of text-transformation patterns, scores the result across weighted
//! quality dimensions and decides whether to recommend a deeper workflow.
//! Synchronous, deterministic, no I/O.

pub mod escalation;
pub mod intent;
pub mod optimizer;
pub mod patterns;
pub mod quality;

pub use escalation::{EscalationAnalysis, EscalationConfidence, EscalationReason};
pub use intent::{IntentAnalysis, IntentCharacteristics, IntentDetector, PromptIntent};
pub use optimizer::{
    ContextOverride, DetailedRecommendation, OptimizationResult, PatternSummary,
    PrdAnswerValidation, UniversalOptimizer,
};
pub use patterns::{
    ImprovementImpact, OptimizationMode, Pattern, PatternContext, PatternLibrary, PatternMode,
    PatternPhase, PatternResult,
};
pub use quality::{QualityAssessor, QualityDimension, QualityRating, QualityScore};
