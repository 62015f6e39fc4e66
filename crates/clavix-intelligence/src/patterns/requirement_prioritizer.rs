//! Requirement prioritizer
//!
//! Feature lists with no priority markers get a Must-Have / Nice-to-Have
//! framework appended, anchored to an existing bulleted list when one can be
//! identified.

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
    "need",
    "want",
    "should",
    "functionality",
    "capability",
];

const PRIORITY_MARKERS: &[&str] = &[
    "must-have",
    "must have",
    "nice-to-have",
    "nice to have",
    "p0",
    "p1",
    "p2",
    "mvp",
    "phase 1",
    "phase-1",
    "critical",
    "optional",
    "priority",
];

const GENERIC_TEMPLATE: &str = "## Prioritization\n\n\
Must-Have:\n- (core capability this request cannot ship without)\n\n\
Nice-to-Have:\n- (enhancement that can wait for a later pass)\n";

pub struct RequirementPrioritizer;

impl RequirementPrioritizer {
    /// A feature list we can anchor to: at least two bullet lines.
    fn has_feature_list(text: &str) -> bool {
        text.lines()
            .filter(|l| l.trim_start().starts_with("- ") || l.trim_start().starts_with("* "))
            .count()
            >= 2
    }
}

impl Pattern for RequirementPrioritizer {
    fn id(&self) -> &'static str {
        "requirement-prioritizer"
    }

    fn name(&self) -> &'static str {
        "Requirement Prioritizer"
    }

    fn description(&self) -> &'static str {
        "Adds a Must-Have / Nice-to-Have framework to unprioritized feature lists"
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
        70
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        let lower = text.to_lowercase();
        if !contains_any(&lower, FEATURE_MARKERS) || contains_any(&lower, PRIORITY_MARKERS) {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from(text);
        out.push_str("\n\n");
        if Self::has_feature_list(text) {
            out.push_str(
                "## Prioritization\n\n\
                 Rank the feature list above: mark each item Must-Have (blocks launch) or \
                 Nice-to-Have (can follow later). Unranked lists tend to get built breadth-first.\n",
            );
        } else {
            out.push_str(GENERIC_TEMPLATE);
        }

        Ok(PatternResult::applied(
            out,
            QualityDimension::Actionability,
            "Added a priority framework for the stated requirements",
            ImprovementImpact::Medium,
        ))
    }
}
