//! Pattern registry and selection
//!
//! Holds all registered patterns and selects the ordered subset for a given
//! intent and mode. Registration order is preserved for deterministic
//! tie-breaking between equal priorities.

use std::sync::Arc;

use crate::intent::IntentAnalysis;
use crate::patterns::{OptimizationMode, Pattern, PatternMode, PatternPhase};

pub struct PatternLibrary {
    patterns: Vec<Arc<dyn Pattern>>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Library preloaded with the full built-in catalog. Structural patterns
    /// are registered (and prioritized) ahead of stylistic ones.
    pub fn with_defaults() -> Self {
        let mut library = Self::new();
        library.register(Arc::new(super::conversation_summarizer::ConversationSummarizer));
        library.register(Arc::new(super::topic_organizer::TopicOrganizer));
        library.register(Arc::new(super::structure_formatter::StructureFormatter));
        library.register(Arc::new(super::objective_clarifier::ObjectiveClarifier));
        library.register(Arc::new(super::requirement_prioritizer::RequirementPrioritizer));
        library.register(Arc::new(super::persona_enricher::PersonaEnricher));
        library.register(Arc::new(super::implicit_requirements::ImplicitRequirementExtractor));
        library.register(Arc::new(super::tech_context::TechContextPrompter));
        library.register(Arc::new(super::constraint_surfacer::ConstraintSurfacer));
        library.register(Arc::new(super::success_criteria::SuccessCriteriaScaffold));
        library.register(Arc::new(super::scope_boundary::ScopeBoundaryMarker));
        library.register(Arc::new(super::edge_case_prompter::EdgeCasePrompter));
        library.register(Arc::new(super::output_format::OutputFormatSpecifier));
        library.register(Arc::new(super::ambiguity_reducer::AmbiguityReducer));
        library.register(Arc::new(super::answer_expander::AnswerExpander));
        library
    }

    pub fn register(&mut self, pattern: Arc<dyn Pattern>) {
        self.patterns.push(pattern);
    }

    /// Patterns applicable to `intent` in the fast/deep pipeline `mode`,
    /// sorted descending by priority, stable on registration order.
    pub fn select_patterns(
        &self,
        intent: &IntentAnalysis,
        mode: PatternMode,
    ) -> Vec<Arc<dyn Pattern>> {
        let mut selected: Vec<Arc<dyn Pattern>> = self
            .patterns
            .iter()
            .filter(|p| p.mode().matches(mode))
            .filter(|p| p.applicable_intents().contains(&intent.primary_intent))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.priority().cmp(&a.priority()));
        selected
    }

    /// Patterns participating in a prd/conversational workflow, optionally
    /// scoped to a phase. Patterns with no declared phase affinity run in
    /// every phase.
    pub fn select_patterns_for_mode(
        &self,
        mode: OptimizationMode,
        intent: &IntentAnalysis,
        phase: Option<PatternPhase>,
    ) -> Vec<Arc<dyn Pattern>> {
        let mut selected: Vec<Arc<dyn Pattern>> = self
            .patterns
            .iter()
            .filter(|p| p.workflows().contains(&mode))
            .filter(|p| p.applicable_intents().contains(&intent.primary_intent))
            .filter(|p| match phase {
                Some(phase) => p.phases().is_empty() || p.phases().contains(&phase),
                None => true,
            })
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.priority().cmp(&a.priority()));
        selected
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn patterns_by_mode(&self, mode: PatternMode) -> Vec<Arc<dyn Pattern>> {
        self.patterns
            .iter()
            .filter(|p| p.mode().matches(mode))
            .cloned()
            .collect()
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::with_defaults()
    }
}
