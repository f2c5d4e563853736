//! ReviewSession - the session controller owning one authoring flow.
//!
//! Owns the wizard state, the branding context and the composition policy
//! for a single session; nothing here is ambient or global. All mutation
//! happens synchronously in response to discrete interaction events. The
//! only asynchronous operation is branding resolution, which merges its
//! result into the session when (and if) it completes.

use chrono::{DateTime, Utc};

use crate::config::{CompositionTrigger, WizardConfig};
use crate::domain::branding::BrandingContext;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::review::{compose, IndexPicker, PhraseBank, ThreadRngPicker};
use crate::domain::wizard::{
    AdvanceOutcome, Highlight, RecommendationLevel, RepairProblem, ServiceType, StepKind,
    WizardState, WizardTopology,
};
use crate::ports::BrandingProvider;

/// One review-authoring session from first step to generated review.
pub struct ReviewSession {
    id: SessionId,
    created_at: DateTime<Utc>,
    topology: WizardTopology,
    state: WizardState,
    branding: BrandingContext,
    bank: &'static PhraseBank,
    picker: Box<dyn IndexPicker + Send>,
    trigger: CompositionTrigger,
    keep_selections_on_restart: bool,
    generated_review: Option<String>,
}

impl ReviewSession {
    /// Creates a session from wizard configuration, using the built-in
    /// phrase bank and the thread-local RNG.
    pub fn new(config: &WizardConfig) -> Self {
        Self::with_picker(config, Box::new(ThreadRngPicker))
    }

    /// Creates a session with an injected index picker (reproducible
    /// composition in tests).
    pub fn with_picker(config: &WizardConfig, picker: Box<dyn IndexPicker + Send>) -> Self {
        Self {
            id: SessionId::new(),
            created_at: Utc::now(),
            topology: config.topology.build(),
            state: WizardState::new(),
            branding: BrandingContext::default(),
            bank: PhraseBank::builtin(),
            picker,
            trigger: config.composition_trigger,
            keep_selections_on_restart: !config.reset_selections_on_restart,
            generated_review: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The current 1-based step index.
    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    /// The semantic kind of the current step.
    pub fn current_step_kind(&self) -> Option<StepKind> {
        self.topology.kind_at(self.state.current_step())
    }

    pub fn branding(&self) -> &BrandingContext {
        &self.branding
    }

    pub fn values(&self) -> &crate::domain::wizard::FieldValues {
        self.state.values()
    }

    /// The generated review, if the terminal step has been reached.
    pub fn generated_review(&self) -> Option<&str> {
        self.generated_review.as_deref()
    }

    // ----- field selection events -----

    /// Selects the service. The state realigns the current step if the
    /// change makes it inapplicable.
    pub fn select_service(&mut self, service: ServiceType) {
        self.state.select_service(service, &self.topology);
        self.recompose_if_live();
    }

    pub fn select_problem(&mut self, problem: RepairProblem) -> Result<(), DomainError> {
        self.state.set_problem(problem)?;
        self.recompose_if_live();
        Ok(())
    }

    pub fn select_highlight(&mut self, highlight: Highlight) {
        self.state.set_highlight(highlight);
        self.recompose_if_live();
    }

    pub fn set_recommendation(&mut self, level: RecommendationLevel) {
        self.state.set_recommendation(level);
        self.recompose_if_live();
    }

    pub fn set_additional_comments(&mut self, comments: impl Into<String>) {
        self.state.set_additional_comments(comments);
        self.recompose_if_live();
    }

    // ----- navigation events -----

    /// Attempts to advance; composes the review on reaching the terminal
    /// step.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, DomainError> {
        let outcome = self.state.advance(&self.topology)?;
        if matches!(outcome, AdvanceOutcome::ReachedTerminal(_)) {
            self.compose_now();
        }
        Ok(outcome)
    }

    /// Moves back one applicable step, if not already at the start.
    pub fn retreat(&mut self) -> Option<usize> {
        self.state.retreat(&self.topology)
    }

    /// Restarts the flow, e.g. after the guided tour completes. Selection
    /// retention follows the configured policy; any generated review is
    /// discarded either way.
    pub fn restart_after_tour(&mut self) {
        self.state.reset(self.keep_selections_on_restart);
        self.generated_review = None;
    }

    // ----- branding -----

    /// Resolves branding through the provider and merges it in. On failure
    /// the session keeps its fallback values; the failure is logged for
    /// diagnostics only. Returns true when remote branding was applied.
    pub async fn resolve_branding(
        &mut self,
        provider: &dyn BrandingProvider,
        client_key: &str,
    ) -> bool {
        match provider.fetch(client_key).await {
            Ok(file) => {
                self.branding = self.branding.merged_with(&file);
                tracing::debug!(
                    client_key,
                    display_name = %self.branding.display_name,
                    "branding resolved"
                );
                // An already generated review was built on fallback
                // branding; refresh it.
                if self.generated_review.is_some() {
                    self.compose_now();
                }
                true
            }
            Err(err) => {
                tracing::warn!(client_key, error = %err, "branding fetch failed, using fallbacks");
                false
            }
        }
    }

    // ----- composition -----

    fn compose_now(&mut self) {
        self.generated_review = Some(compose(
            self.state.values(),
            &self.branding,
            self.bank,
            self.picker.as_mut(),
        ));
    }

    fn recompose_if_live(&mut self) {
        if self.trigger == CompositionTrigger::LivePreview
            && self.state.at_terminal(&self.topology)
        {
            self.compose_now();
        }
    }
}
