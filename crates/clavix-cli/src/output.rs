//! Terminal rendering for optimization results

use owo_colors::OwoColorize;

use clavix_intelligence::{
    EscalationAnalysis, OptimizationResult, QualityDimension, QualityRating,
};

fn rating_label(rating: QualityRating) -> String {
    match rating {
        QualityRating::Excellent => rating.as_str().green().to_string(),
        QualityRating::Good => rating.as_str().cyan().to_string(),
        QualityRating::NeedsImprovement => rating.as_str().yellow().to_string(),
        QualityRating::Poor => rating.as_str().red().to_string(),
    }
}

/// Print the run summary: intent, quality table, applied patterns,
/// escalation guidance when present.
pub fn print_result(result: &OptimizationResult, escalation: Option<&EscalationAnalysis>) {
    println!(
        "{} {} ({}% confidence), {} mode",
        "Intent:".bold(),
        result.intent.primary_intent,
        result.intent.confidence,
        result.mode
    );
    println!(
        "{} {} -> {} ({})",
        "Quality:".bold(),
        result.original_quality.overall,
        result.quality.overall,
        rating_label(result.quality.rating)
    );

    for dimension in QualityDimension::all() {
        println!(
            "  {:<14} {:>3} -> {:>3}",
            format!("{}:", dimension),
            result.original_quality.dimension(*dimension),
            result.quality.dimension(*dimension)
        );
    }

    if result.applied_patterns.is_empty() {
        println!("\n{}", "No patterns applied; prompt left unchanged.".dimmed());
    } else {
        println!("\n{}", "Applied:".bold());
        for improvement in &result.improvements {
            println!("  - {}", improvement.description);
        }
    }

    if let Some(escalation) = escalation {
        if escalation.should_escalate {
            println!(
                "\n{} score {} ({:?} confidence). Deep mode would add {}.",
                "Escalation:".yellow().bold(),
                escalation.escalation_score,
                escalation.escalation_confidence,
                escalation.deep_mode_value
            );
        }
    }

    println!("\n{}\n", "Enhanced prompt:".bold());
    println!("{}", result.enhanced_prompt);
}
