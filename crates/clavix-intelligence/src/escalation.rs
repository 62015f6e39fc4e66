//! Escalation scoring
//!
//! Weighted multi-factor score over an optimization result that decides
//! whether to recommend a deeper workflow. All factors read the original
//! prompt's quality: escalation reflects what the user actually wrote, not
//! what the patterns made of it.
//!
//! Contributions accumulate uncapped; only the reported score clamps to 100.
//! The itemized reasons can therefore sum past the displayed score. That is
//! intentional, observed behavior, exercised by a test rather than "fixed".

use serde::{Deserialize, Serialize};

use crate::intent::PromptIntent;
use crate::optimizer::OptimizationResult;

/// Threshold at which escalation is recommended.
pub const ESCALATION_THRESHOLD: u32 = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscalationConfidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationReason {
    pub factor: String,
    pub contribution: u32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationAnalysis {
    pub should_escalate: bool,
    /// Clamped to 0-100 for display.
    pub escalation_score: u32,
    pub escalation_confidence: EscalationConfidence,
    pub reasons: Vec<EscalationReason>,
    /// What a deep run would add, built from the factors that fired.
    pub deep_mode_value: String,
}

pub fn analyze(result: &OptimizationResult) -> EscalationAnalysis {
    let quality = &result.original_quality;
    let intent = &result.intent;
    let mut reasons: Vec<EscalationReason> = Vec::new();

    if matches!(
        intent.primary_intent,
        PromptIntent::Planning | PromptIntent::PrdGeneration
    ) {
        reasons.push(EscalationReason {
            factor: "intent-type".to_string(),
            contribution: 30,
            description: format!("{} work benefits from a structured plan", intent.primary_intent),
        });
    }

    if intent.confidence < 60 {
        let contribution = (((60 - intent.confidence as u32) as f64) / 3.0).round() as u32;
        reasons.push(EscalationReason {
            factor: "low-confidence".to_string(),
            contribution: contribution.min(20),
            description: format!("intent detection is uncertain ({}%)", intent.confidence),
        });
    }

    if quality.overall < 65 {
        let contribution = (((65 - quality.overall as u32) as f64) / 2.6).round() as u32;
        reasons.push(EscalationReason {
            factor: "low-quality".to_string(),
            contribution,
            description: format!("overall prompt quality is low ({})", quality.overall),
        });
    }

    if quality.completeness < 60 {
        reasons.push(EscalationReason {
            factor: "missing-completeness".to_string(),
            contribution: 15,
            description: "key context (stack, constraints, success criteria) is missing"
                .to_string(),
        });
    }

    if quality.specificity < 60 {
        reasons.push(EscalationReason {
            factor: "low-specificity".to_string(),
            contribution: 15,
            description: "few concrete identifiers, versions or paths".to_string(),
        });
    }

    if intent.characteristics.is_open_ended && intent.characteristics.needs_structure {
        reasons.push(EscalationReason {
            factor: "high-ambiguity".to_string(),
            contribution: 20,
            description: "open-ended and unstructured at the same time".to_string(),
        });
    }

    if result.original_prompt.len() < 50 && quality.completeness < 70 {
        reasons.push(EscalationReason {
            factor: "length-mismatch".to_string(),
            contribution: 15,
            description: "very short prompt for the amount of context the task needs".to_string(),
        });
    }

    if matches!(
        intent.primary_intent,
        PromptIntent::Migration | PromptIntent::SecurityReview
    ) {
        reasons.push(EscalationReason {
            factor: "complex-intent".to_string(),
            contribution: 20,
            description: format!("{} work carries extra risk", intent.primary_intent),
        });
    }

    let total: u32 = reasons.iter().map(|r| r.contribution).sum();

    let escalation_confidence = if total >= 75 {
        EscalationConfidence::High
    } else if total >= 60 {
        EscalationConfidence::Medium
    } else {
        EscalationConfidence::Low
    };

    EscalationAnalysis {
        should_escalate: total >= ESCALATION_THRESHOLD,
        escalation_score: total.min(100),
        escalation_confidence,
        reasons,
        deep_mode_value: deep_mode_value(result),
    }
}

fn deep_mode_value(result: &OptimizationResult) -> String {
    let quality = &result.original_quality;
    let intent = &result.intent;
    let mut parts: Vec<&str> = Vec::new();

    if matches!(
        intent.primary_intent,
        PromptIntent::Planning | PromptIntent::PrdGeneration
    ) {
        parts.push("a structured implementation plan");
    }
    if quality.completeness < 60 || quality.overall < 65 {
        parts.push("comprehensive requirements extraction");
    }
    if intent.characteristics.is_open_ended && intent.characteristics.needs_structure {
        parts.push("alternative approaches and trade-offs");
    }
    parts.push("a validation checklist");

    parts.join(", ")
}
