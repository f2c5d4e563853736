//! Wizard topology - the step graph including branch and skip rules.
//!
//! Deployments differ only in step count and which steps collect which
//! fields, so the step graph is a declarative descriptor consumed by one
//! generic engine rather than a state machine per deployment.
//!
//! Navigation scans for the nearest *applicable* step in either direction.
//! A step can be inapplicable given the current selections (the
//! problem-detail step does not apply to non-repair services), which makes
//! skipping and the symmetric return over a skip fall out of the same rule.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::FieldValues;

/// The semantic role of a wizard step.
///
/// Validation keys off this, not off step position, so the same rules hold
/// across topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    ServiceSelection,
    ProblemDetail,
    HighlightSelection,
    RatingAndComments,
    ReviewPreview,
}

impl StepKind {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            StepKind::ServiceSelection => "Service Selection",
            StepKind::ProblemDetail => "Problem Detail",
            StepKind::HighlightSelection => "Highlight Selection",
            StepKind::RatingAndComments => "Rating & Comments",
            StepKind::ReviewPreview => "Review Preview",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ordered step list for one wizard deployment.
///
/// Steps are addressed with 1-based indices to match how the progress UI
/// numbers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardTopology {
    steps: Vec<StepKind>,
}

impl WizardTopology {
    /// Builds a topology from an explicit step list.
    ///
    /// Returns `None` for an empty list or one that does not end in the
    /// review preview step.
    pub fn new(steps: Vec<StepKind>) -> Option<Self> {
        if steps.is_empty() || *steps.last()? != StepKind::ReviewPreview {
            return None;
        }
        Some(Self { steps })
    }

    /// The standard four-step wizard: the problem-detail step is skipped
    /// for non-repair services.
    pub fn branching_standard() -> Self {
        Self {
            steps: vec![
                StepKind::ServiceSelection,
                StepKind::ProblemDetail,
                StepKind::HighlightSelection,
                StepKind::ReviewPreview,
            ],
        }
    }

    /// The compact three-step wizard that merges detail collection into
    /// the service-selection step.
    pub fn linear_compact() -> Self {
        Self {
            steps: vec![
                StepKind::ServiceSelection,
                StepKind::RatingAndComments,
                StepKind::ReviewPreview,
            ],
        }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; a topology has at least one step by construction.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The first step index.
    pub fn first(&self) -> usize {
        1
    }

    /// The terminal step index.
    pub fn terminal(&self) -> usize {
        self.steps.len()
    }

    /// Returns the step kind at a 1-based index.
    pub fn kind_at(&self, step: usize) -> Option<StepKind> {
        if step == 0 {
            return None;
        }
        self.steps.get(step - 1).copied()
    }

    /// Returns true if this topology contains a dedicated problem-detail
    /// step. The compact variant collects the problem on the service step
    /// instead.
    pub fn has_problem_step(&self) -> bool {
        self.steps.contains(&StepKind::ProblemDetail)
    }

    /// Returns whether a step applies given the current selections.
    ///
    /// The problem-detail step only applies while the repair service is
    /// selected; every other step always applies.
    pub fn is_applicable(&self, step: usize, values: &FieldValues) -> bool {
        match self.kind_at(step) {
            Some(StepKind::ProblemDetail) => values.is_repair_selected(),
            Some(_) => true,
            None => false,
        }
    }

    /// Returns the next applicable step after `step`, or `None` at the end.
    pub fn next_from(&self, step: usize, values: &FieldValues) -> Option<usize> {
        ((step + 1)..=self.terminal()).find(|&s| self.is_applicable(s, values))
    }

    /// Returns the previous applicable step before `step`, or `None` at
    /// the start. Skipped steps are skipped symmetrically, so retreating
    /// over a skip lands on the step the skip originated from.
    pub fn previous_from(&self, step: usize, values: &FieldValues) -> Option<usize> {
        (1..step).rev().find(|&s| self.is_applicable(s, values))
    }
}

impl Default for WizardTopology {
    fn default() -> Self {
        Self::branching_standard()
    }
}
