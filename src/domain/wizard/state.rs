//! WizardState - the mutable record of one review-authoring session.

use serde::{Deserialize, Serialize};

use super::field::{FieldValues, Highlight, RecommendationLevel, RepairProblem, ServiceType};
use super::topology::WizardTopology;
use super::validator::{validate_step, ValidationRefusal};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Outcome of an [`WizardState::advance`] attempt.
///
/// A refusal is expected control flow: the caller keeps the user on the
/// current step and renders the attention cue ("shake").
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Moved to a non-terminal step.
    Moved(usize),
    /// Moved onto the terminal step; the review should now be composed.
    ReachedTerminal(usize),
    /// The current step's requirements are not met; step unchanged.
    Refused(ValidationRefusal),
    /// Already at the terminal step; nothing to advance to.
    AlreadyTerminal,
}

/// Current step plus all user selections.
///
/// `current_step` only changes through [`advance`](Self::advance),
/// [`retreat`](Self::retreat) and [`reset`](Self::reset), which keeps it on
/// steps reachable by valid transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    current_step: usize,
    values: FieldValues,
}

impl WizardState {
    /// Creates a session at the first step with default selections.
    pub fn new() -> Self {
        Self {
            current_step: 1,
            values: FieldValues::new(),
        }
    }

    /// The current 1-based step index.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The current selections.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Sets the service. If the change leaves the current step
    /// inapplicable (switching off the repair service while on the
    /// problem-detail step), the step falls back to the nearest
    /// applicable one so the flow can always advance again.
    pub fn select_service(&mut self, service: ServiceType, topology: &WizardTopology) {
        self.values.set_service(service);
        if !topology.is_applicable(self.current_step, &self.values) {
            let fallback = topology
                .previous_from(self.current_step, &self.values)
                .unwrap_or(1);
            tracing::debug!(
                from = self.current_step,
                to = fallback,
                "current step no longer applicable, realigning"
            );
            self.current_step = fallback;
        }
    }

    /// Sets the repair problem. Refused unless the repair service is
    /// selected.
    pub fn set_problem(&mut self, problem: RepairProblem) -> Result<(), DomainError> {
        self.values.set_problem(problem)
    }

    /// Sets the highlighted strength.
    pub fn set_highlight(&mut self, highlight: Highlight) {
        self.values.set_highlight(highlight);
    }

    /// Sets the satisfaction rating.
    pub fn set_recommendation(&mut self, level: RecommendationLevel) {
        self.values.set_recommendation(level);
    }

    /// Sets the optional free-text comment.
    pub fn set_additional_comments(&mut self, comments: impl Into<String>) {
        self.values.set_additional_comments(comments);
    }

    /// Returns true once the terminal step has been reached.
    pub fn at_terminal(&self, topology: &WizardTopology) -> bool {
        self.current_step == topology.terminal()
    }

    /// Attempts to advance past the current step.
    ///
    /// The current step is validated first; on refusal the step is left
    /// unchanged. On success the next applicable step is resolved through
    /// the topology, skipping inapplicable steps.
    pub fn advance(&mut self, topology: &WizardTopology) -> Result<AdvanceOutcome, DomainError> {
        let kind = topology.kind_at(self.current_step).ok_or_else(|| {
            DomainError::new(ErrorCode::StepNotFound, "Current step is outside the topology")
                .with_detail("step", self.current_step.to_string())
        })?;

        if let Err(refusal) = validate_step(kind, &self.values, topology) {
            tracing::debug!(step = %kind, missing = ?refusal.missing, "advance refused");
            return Ok(AdvanceOutcome::Refused(refusal));
        }

        match topology.next_from(self.current_step, &self.values) {
            Some(next) => {
                self.current_step = next;
                if next == topology.terminal() {
                    Ok(AdvanceOutcome::ReachedTerminal(next))
                } else {
                    Ok(AdvanceOutcome::Moved(next))
                }
            }
            None => Ok(AdvanceOutcome::AlreadyTerminal),
        }
    }

    /// Moves back to the previous applicable step. Always permitted while
    /// above the first step; returns the new step, or `None` when already
    /// at the start.
    pub fn retreat(&mut self, topology: &WizardTopology) -> Option<usize> {
        let previous = topology.previous_from(self.current_step, &self.values)?;
        self.current_step = previous;
        Some(previous)
    }

    /// Returns to the first step, e.g. after the guided tour restarts the
    /// flow. Whether selections survive is the caller's configured policy.
    pub fn reset(&mut self, keep_selections: bool) {
        self.current_step = 1;
        if !keep_selections {
            self.values = FieldValues::new();
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::field::{
        FieldKind, Highlight, RecommendationLevel, RepairProblem, ServiceType,
    };

    #[test]
    fn new_state_starts_on_step_one() {
        let state = WizardState::new();
        assert_eq!(state.current_step(), 1);
        assert!(state.values().service().is_none());
    }

    #[test]
    fn advance_refused_without_service() {
        let topology = WizardTopology::branching_standard();
        let mut state = WizardState::new();
        match state.advance(&topology).unwrap() {
            AdvanceOutcome::Refused(refusal) => {
                assert_eq!(refusal.missing, vec![FieldKind::Service]);
            }
            other => panic!("expected refusal, got {:?}", other),
        }
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn repair_path_walks_every_step() {
        let topology = WizardTopology::branching_standard();
        let mut state = WizardState::new();
        state.select_service(ServiceType::AcRepair, &topology);

        assert_eq!(state.advance(&topology).unwrap(), AdvanceOutcome::Moved(2));

        state.set_problem(RepairProblem::WarmAir).unwrap();
        assert_eq!(state.advance(&topology).unwrap(), AdvanceOutcome::Moved(3));

        state.set_highlight(Highlight::FastResponse);
        assert_eq!(
            state.advance(&topology).unwrap(),
            AdvanceOutcome::ReachedTerminal(4)
        );
        assert!(state.at_terminal(&topology));
    }

    #[test]
    fn non_repair_path_skips_problem_step() {
        let topology = WizardTopology::branching_standard();
        let mut state = WizardState::new();
        state.select_service(ServiceType::AcMaintenance, &topology);

        assert_eq!(state.advance(&topology).unwrap(), AdvanceOutcome::Moved(3));
    }

    #[test]
    fn retreat_from_skipped_transition_returns_to_origin() {
        let topology = WizardTopology::branching_standard();
        let mut state = WizardState::new();
        state.select_service(ServiceType::DuctCleaning, &topology);
        state.advance(&topology).unwrap();
        assert_eq!(state.current_step(), 3);

        assert_eq!(state.retreat(&topology), Some(1));
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn retreat_at_first_step_is_a_no_op() {
        let topology = WizardTopology::branching_standard();
        let mut state = WizardState::new();
        assert_eq!(state.retreat(&topology), None);
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn switching_to_non_repair_on_problem_step_realigns_the_step() {
        let topology = WizardTopology::branching_standard();
        let mut state = WizardState::new();
        state.select_service(ServiceType::AcRepair, &topology);
        state.advance(&topology).unwrap();
        assert_eq!(state.current_step(), 2);

        // The problem step no longer applies; the state must not stay
        // parked on it, or advancing would be refused forever.
        state.select_service(ServiceType::DuctCleaning, &topology);
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.advance(&topology).unwrap(), AdvanceOutcome::Moved(3));
    }

    #[test]
    fn switching_back_to_repair_keeps_the_current_step() {
        let topology = WizardTopology::branching_standard();
        let mut state = WizardState::new();
        state.select_service(ServiceType::DuctCleaning, &topology);
        state.advance(&topology).unwrap();
        assert_eq!(state.current_step(), 3);

        state.select_service(ServiceType::AcRepair, &topology);
        assert_eq!(state.current_step(), 3);
    }

    #[test]
    fn advance_at_terminal_reports_already_terminal() {
        let topology = WizardTopology::linear_compact();
        let mut state = WizardState::new();
        state.select_service(ServiceType::AcInstallation, &topology);
        state.advance(&topology).unwrap();
        state.advance(&topology).unwrap();
        assert!(state.at_terminal(&topology));

        assert_eq!(
            state.advance(&topology).unwrap(),
            AdvanceOutcome::AlreadyTerminal
        );
    }

    #[test]
    fn reset_keeping_selections_preserves_values() {
        let topology = WizardTopology::branching_standard();
        let mut state = WizardState::new();
        state.select_service(ServiceType::AcRepair, &topology);
        state.set_problem(RepairProblem::WaterLeak).unwrap();
        state.advance(&topology).unwrap();

        state.reset(true);
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.values().service(), Some(ServiceType::AcRepair));
        assert_eq!(state.values().problem(), Some(RepairProblem::WaterLeak));
    }

    #[test]
    fn reset_discarding_selections_restores_defaults() {
        let topology = WizardTopology::branching_standard();
        let mut state = WizardState::new();
        state.select_service(ServiceType::AcRepair, &topology);
        state.set_recommendation(RecommendationLevel::HighlyRecommended);

        state.reset(false);
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.values(), &FieldValues::new());
    }
}
