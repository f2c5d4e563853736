//! Per-step validation gating wizard progression.
//!
//! Rules key off step semantics (`StepKind`), never off step position, so
//! one validator serves every topology. A refusal is a normal control-flow
//! outcome, not an error: the caller renders an attention cue and stays on
//! the current step.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::{FieldKind, FieldValues};
use super::topology::{StepKind, WizardTopology};

/// Refused advancement: the step whose requirement failed and the fields
/// still missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRefusal {
    pub step: StepKind,
    pub missing: Vec<FieldKind>,
}

impl fmt::Display for ValidationRefusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self.missing.iter().map(|m| m.to_string()).collect();
        write!(f, "{} requires: {}", self.step, fields.join(", "))
    }
}

/// Returns the fields a step requires before the wizard may advance past it.
///
/// The service-selection step additionally requires a problem when the
/// repair service is selected and the topology has no dedicated
/// problem-detail step (the compact variant collects both together).
pub fn required_fields(
    kind: StepKind,
    values: &FieldValues,
    topology: &WizardTopology,
) -> Vec<FieldKind> {
    match kind {
        StepKind::ServiceSelection => {
            let mut required = vec![FieldKind::Service];
            if values.is_repair_selected() && !topology.has_problem_step() {
                required.push(FieldKind::Problem);
            }
            required
        }
        StepKind::ProblemDetail => vec![FieldKind::Problem],
        StepKind::HighlightSelection => vec![FieldKind::Highlight],
        // Rating and free text carry defaults, so these never block.
        StepKind::RatingAndComments | StepKind::ReviewPreview => vec![],
    }
}

/// Validates the given step against the current selections.
pub fn validate_step(
    kind: StepKind,
    values: &FieldValues,
    topology: &WizardTopology,
) -> Result<(), ValidationRefusal> {
    let missing: Vec<FieldKind> = required_fields(kind, values, topology)
        .into_iter()
        .filter(|field| match field {
            FieldKind::Service => values.service().is_none(),
            FieldKind::Problem => values.problem().is_none(),
            FieldKind::Highlight => values.highlight().is_none(),
            FieldKind::Recommendation | FieldKind::AdditionalComments => false,
        })
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationRefusal { step: kind, missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::field::{Highlight, RepairProblem, ServiceType};

    #[test]
    fn service_step_refused_while_service_empty() {
        let topology = WizardTopology::branching_standard();
        let values = FieldValues::new();
        let refusal =
            validate_step(StepKind::ServiceSelection, &values, &topology).unwrap_err();
        assert_eq!(refusal.step, StepKind::ServiceSelection);
        assert_eq!(refusal.missing, vec![FieldKind::Service]);
    }

    #[test]
    fn service_step_permitted_once_service_selected() {
        let topology = WizardTopology::branching_standard();
        let mut values = FieldValues::new();
        values.set_service(ServiceType::AcInstallation);
        assert!(validate_step(StepKind::ServiceSelection, &values, &topology).is_ok());
    }

    #[test]
    fn compact_topology_requires_problem_on_service_step_for_repairs() {
        let topology = WizardTopology::linear_compact();
        let mut values = FieldValues::new();
        values.set_service(ServiceType::AcRepair);

        let refusal =
            validate_step(StepKind::ServiceSelection, &values, &topology).unwrap_err();
        assert_eq!(refusal.missing, vec![FieldKind::Problem]);

        values.set_problem(RepairProblem::StrangeNoise).unwrap();
        assert!(validate_step(StepKind::ServiceSelection, &values, &topology).is_ok());
    }

    #[test]
    fn standard_topology_defers_problem_to_its_own_step() {
        let topology = WizardTopology::branching_standard();
        let mut values = FieldValues::new();
        values.set_service(ServiceType::AcRepair);

        // Service step passes; the dedicated problem step gates instead.
        assert!(validate_step(StepKind::ServiceSelection, &values, &topology).is_ok());
        assert!(validate_step(StepKind::ProblemDetail, &values, &topology).is_err());

        values.set_problem(RepairProblem::WontTurnOn).unwrap();
        assert!(validate_step(StepKind::ProblemDetail, &values, &topology).is_ok());
    }

    #[test]
    fn highlight_step_requires_highlight() {
        let topology = WizardTopology::branching_standard();
        let mut values = FieldValues::new();
        assert!(validate_step(StepKind::HighlightSelection, &values, &topology).is_err());

        values.set_highlight(Highlight::CleanWork);
        assert!(validate_step(StepKind::HighlightSelection, &values, &topology).is_ok());
    }

    #[test]
    fn rating_and_preview_steps_never_block() {
        let topology = WizardTopology::linear_compact();
        let values = FieldValues::new();
        assert!(validate_step(StepKind::RatingAndComments, &values, &topology).is_ok());
        assert!(validate_step(StepKind::ReviewPreview, &values, &topology).is_ok());
    }

    #[test]
    fn refusal_displays_step_and_missing_fields() {
        let refusal = ValidationRefusal {
            step: StepKind::ServiceSelection,
            missing: vec![FieldKind::Service, FieldKind::Problem],
        };
        assert_eq!(
            refusal.to_string(),
            "Service Selection requires: service, problem"
        );
    }
}
