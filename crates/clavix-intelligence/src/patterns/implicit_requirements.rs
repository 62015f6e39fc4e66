//! Implicit-requirement extractor
//!
//! Scans for indirect signals ("real-time", "save", "admin", ...) and turns
//! them into an explicit, capped list of inferred requirements with a
//! verification caveat.

use anyhow::Result;

use crate::intent::PromptIntent;
use crate::patterns::textutil::dedup_keep_order;
use crate::patterns::{
    ImprovementImpact, OptimizationMode, Pattern, PatternContext, PatternMode, PatternResult,
};
use crate::quality::QualityDimension;

const MAX_ITEMS: usize = 8;
const SECTION_HEADER: &str = "## Implicit Requirements (Inferred)";

pub struct ImplicitRequirementExtractor;

impl ImplicitRequirementExtractor {
    fn collect_signals(lower: &str) -> Vec<String> {
        let mut items: Vec<String> = Vec::new();
        let has = |kw: &str| lower.contains(kw);

        if has("mobile") || has("ios") || has("android") {
            items.push("Responsive/mobile-friendly design required".to_string());
        }
        if has("real-time") || has("realtime") || has("live updates") {
            items.push("Real-time updates infrastructure needed".to_string());
        }
        if (has("user") || has("admin")) && !has("authentication") && !has("auth ") && !lower.ends_with("auth") {
            items.push("User authentication system (implied by user roles)".to_string());
        }
        if (has("save") || has("store")) && !has("database") {
            items.push("Persistent storage layer implied (database or equivalent)".to_string());
        }
        if has("scale") || has("scalab") || has("thousands of") {
            items.push("Scalability planning needed (expected load, growth path)".to_string());
        }
        if has("secure") || has("security") {
            items.push("Security hardening beyond framework defaults implied".to_string());
        }
        if has("fast") || has("performance") || has("snappy") {
            items.push("Performance budget implied (define latency targets)".to_string());
        }
        if has("easy") || has("simple") || has("intuitive") {
            items.push("Usability bar stated (define what 'simple' means here)".to_string());
        }
        if has("notify") || has("notification") || has("alert") || has("email") {
            items.push("Notification delivery mechanism implied".to_string());
        }
        if has("search") {
            items.push("Search/indexing capability implied".to_string());
        }
        if has("report") || has("analytics") {
            items.push("Reporting/analytics pipeline implied".to_string());
        }
        if has("integrat") || has("connect to") || has("sync with") {
            items.push("Third-party integration contract implied".to_string());
        }
        if has("always ") || has("never ") {
            items.push("Hard operational constraint stated (capture it as an explicit requirement)".to_string());
        }

        dedup_keep_order(items).into_iter().take(MAX_ITEMS).collect()
    }
}

impl Pattern for ImplicitRequirementExtractor {
    fn id(&self) -> &'static str {
        "implicit-requirements"
    }

    fn name(&self) -> &'static str {
        "Implicit Requirement Extractor"
    }

    fn description(&self) -> &'static str {
        "Surfaces requirements implied but never stated by the prompt"
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
        &[OptimizationMode::Prd, OptimizationMode::Conversational]
    }

    fn priority(&self) -> i32 {
        60
    }

    fn apply(&self, text: &str, _ctx: &PatternContext) -> Result<PatternResult> {
        if text.contains(SECTION_HEADER) {
            return Ok(PatternResult::unchanged(text));
        }
        let lower = text.to_lowercase();
        let items = Self::collect_signals(&lower);
        if items.is_empty() {
            return Ok(PatternResult::unchanged(text));
        }

        let mut out = String::from(text);
        out.push_str(&format!("\n\n{}\n", SECTION_HEADER));
        for item in &items {
            out.push_str(&format!("- {}\n", item));
        }
        out.push_str("\nThese are inferred, not stated. Verify each one before treating it as scope.\n");

        Ok(PatternResult::applied(
            out,
            QualityDimension::Completeness,
            format!("Surfaced {} implicit requirement(s) from indirect signals", items.len()),
            ImprovementImpact::High,
        ))
    }
}
