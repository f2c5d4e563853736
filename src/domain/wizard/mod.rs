//! The wizard state machine: selectable fields, step topology, per-step
//! validation and navigation.

mod field;
mod state;
mod topology;
mod validator;

pub use field::{
    FieldKind, FieldValues, Highlight, RecommendationLevel, RepairProblem, ServiceType,
};
pub use state::{AdvanceOutcome, WizardState};
pub use topology::{StepKind, WizardTopology};
pub use validator::{required_fields, validate_step, ValidationRefusal};
