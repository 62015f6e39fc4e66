//! Text-transformation patterns
//!
//! Each pattern is a stateless rule with a two-phase contract: an
//! applicability check over the prompt text, then a deterministic
//! transformation that appends or restructures content without ever deleting
//! the source text. Inapplicable patterns return the input unchanged.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::intent::{IntentAnalysis, PromptIntent};
use crate::quality::QualityDimension;

pub mod library;
pub(crate) mod textutil;

pub mod ambiguity_reducer;
pub mod answer_expander;
pub mod constraint_surfacer;
pub mod conversation_summarizer;
pub mod edge_case_prompter;
pub mod implicit_requirements;
pub mod objective_clarifier;
pub mod output_format;
pub mod persona_enricher;
pub mod requirement_prioritizer;
pub mod scope_boundary;
pub mod structure_formatter;
pub mod success_criteria;
pub mod tech_context;
pub mod topic_organizer;

pub use library::PatternLibrary;

/// Workflow context an optimization run executes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizationMode {
    Fast,
    Deep,
    Prd,
    Conversational,
}

impl OptimizationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationMode::Fast => "fast",
            OptimizationMode::Deep => "deep",
            OptimizationMode::Prd => "prd",
            OptimizationMode::Conversational => "conversational",
        }
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OptimizationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Ok(OptimizationMode::Fast),
            "deep" => Ok(OptimizationMode::Deep),
            "prd" => Ok(OptimizationMode::Prd),
            "conversational" => Ok(OptimizationMode::Conversational),
            other => Err(format!("unsupported mode: '{}'", other)),
        }
    }
}

/// Which fast/deep pipeline a pattern participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternMode {
    Fast,
    Deep,
    Both,
}

impl PatternMode {
    /// Whether a pattern with this marker runs in the requested pipeline.
    pub fn matches(&self, requested: PatternMode) -> bool {
        matches!(self, PatternMode::Both) || *self == requested
    }
}

/// Phase tag inside a prd/conversational workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternPhase {
    QuestionValidation,
    Drafting,
    Review,
}

/// Rough size of a single improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementImpact {
    Low,
    Medium,
    High,
}

/// Human-readable record of one applied transformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    pub dimension: QualityDimension,
    pub description: String,
    pub impact: ImprovementImpact,
}

/// Outcome of one `Pattern::apply` call.
#[derive(Debug, Clone)]
pub struct PatternResult {
    pub enhanced_prompt: String,
    pub applied: bool,
    pub improvement: Option<Improvement>,
}

impl PatternResult {
    /// The pattern recognized it was inapplicable or already satisfied.
    /// Input text is returned unchanged; this arm must be idempotent.
    pub fn unchanged(text: &str) -> Self {
        Self {
            enhanced_prompt: text.to_string(),
            applied: false,
            improvement: None,
        }
    }

    pub fn applied(
        enhanced: String,
        dimension: QualityDimension,
        description: impl Into<String>,
        impact: ImprovementImpact,
    ) -> Self {
        Self {
            enhanced_prompt: enhanced,
            applied: true,
            improvement: Some(Improvement {
                dimension,
                description: description.into(),
                impact,
            }),
        }
    }
}

/// Read-only context handed to every pattern invocation.
#[derive(Debug, Clone)]
pub struct PatternContext {
    pub intent: IntentAnalysis,
    pub mode: OptimizationMode,
    pub phase: Option<PatternPhase>,
}

impl PatternContext {
    pub fn new(intent: IntentAnalysis, mode: OptimizationMode) -> Self {
        Self {
            intent,
            mode,
            phase: None,
        }
    }

    pub fn with_phase(mut self, phase: PatternPhase) -> Self {
        self.phase = Some(phase);
        self
    }
}

/// A single stateless text-transformation rule.
///
/// Implementations hold no mutable state between invocations: `apply` is a
/// pure function of `(text, ctx)`. Higher `priority` applies first; ties are
/// broken by registration order in the library.
pub trait Pattern: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn applicable_intents(&self) -> &'static [PromptIntent];
    fn mode(&self) -> PatternMode;
    fn priority(&self) -> i32;

    /// Prd/conversational workflows this pattern additionally participates
    /// in. Empty means fast/deep pipelines only.
    fn workflows(&self) -> &'static [OptimizationMode] {
        &[]
    }

    /// Phase affinity inside a workflow. Empty means any phase.
    fn phases(&self) -> &'static [PatternPhase] {
        &[]
    }

    fn apply(&self, text: &str, ctx: &PatternContext) -> Result<PatternResult>;
}
