//! Selectable field value objects for the review wizard.
//!
//! Every selectable field is a closed enumeration so an unregistered value
//! is a compile error rather than a runtime lookup miss.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// The kind of service the customer received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    AcRepair,
    AcInstallation,
    AcMaintenance,
    DuctCleaning,
}

impl ServiceType {
    /// Returns all service types in display order.
    pub fn all() -> &'static [ServiceType] {
        &[
            ServiceType::AcRepair,
            ServiceType::AcInstallation,
            ServiceType::AcMaintenance,
            ServiceType::DuctCleaning,
        ]
    }

    /// Returns true for the designated repair category.
    ///
    /// The problem-detail step only applies to repairs.
    pub fn is_repair(&self) -> bool {
        matches!(self, ServiceType::AcRepair)
    }

    /// Returns the display name used inside composed review text.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceType::AcRepair => "AC repair",
            ServiceType::AcInstallation => "AC installation",
            ServiceType::AcMaintenance => "AC maintenance",
            ServiceType::DuctCleaning => "duct cleaning",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The specific problem reported for a repair service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairProblem {
    WarmAir,
    StrangeNoise,
    WaterLeak,
    WontTurnOn,
}

impl RepairProblem {
    /// Returns all repair problems in display order.
    pub fn all() -> &'static [RepairProblem] {
        &[
            RepairProblem::WarmAir,
            RepairProblem::StrangeNoise,
            RepairProblem::WaterLeak,
            RepairProblem::WontTurnOn,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            RepairProblem::WarmAir => "blowing warm air",
            RepairProblem::StrangeNoise => "making a strange noise",
            RepairProblem::WaterLeak => "leaking water",
            RepairProblem::WontTurnOn => "not turning on",
        }
    }
}

impl fmt::Display for RepairProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The strength the customer chose to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    FastResponse,
    FairPricing,
    CleanWork,
    ClearCommunication,
}

impl Highlight {
    /// Returns all highlights in display order.
    pub fn all() -> &'static [Highlight] {
        &[
            Highlight::FastResponse,
            Highlight::FairPricing,
            Highlight::CleanWork,
            Highlight::ClearCommunication,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Highlight::FastResponse => "Fast response",
            Highlight::FairPricing => "Fair pricing",
            Highlight::CleanWork => "Clean work",
            Highlight::ClearCommunication => "Clear communication",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ordinal satisfaction rating: Likely < VeryLikely < HighlyRecommended.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RecommendationLevel {
    Likely = 1,
    /// Mid-scale default for a fresh session.
    #[default]
    VeryLikely = 2,
    HighlyRecommended = 3,
}

impl RecommendationLevel {
    /// Creates a level from a 1..=3 slider value.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(RecommendationLevel::Likely),
            2 => Ok(RecommendationLevel::VeryLikely),
            3 => Ok(RecommendationLevel::HighlyRecommended),
            _ => Err(ValidationError::out_of_range(
                "recommendation",
                1,
                3,
                value as i32,
            )),
        }
    }

    /// Returns all levels in ascending order.
    pub fn all() -> &'static [RecommendationLevel] {
        &[
            RecommendationLevel::Likely,
            RecommendationLevel::VeryLikely,
            RecommendationLevel::HighlyRecommended,
        ]
    }

    /// Returns the numeric slider value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationLevel::Likely => "Likely",
            RecommendationLevel::VeryLikely => "Very Likely",
            RecommendationLevel::HighlyRecommended => "Highly Recommended",
        }
    }
}

impl fmt::Display for RecommendationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Discriminant for the selectable fields, used in validation reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Service,
    Problem,
    Highlight,
    Recommendation,
    AdditionalComments,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Service => "service",
            FieldKind::Problem => "problem",
            FieldKind::Highlight => "highlight",
            FieldKind::Recommendation => "recommendation",
            FieldKind::AdditionalComments => "additional_comments",
        };
        write!(f, "{}", s)
    }
}

/// All user selections for one authoring session.
///
/// Invariant: `problem` is only ever set while `service` is the repair
/// category. Assigning a non-repair service clears any previous problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValues {
    service: Option<ServiceType>,
    problem: Option<RepairProblem>,
    highlight: Option<Highlight>,
    recommendation: RecommendationLevel,
    additional_comments: String,
}

impl FieldValues {
    /// Creates a fresh set of selections (no service, mid-scale rating).
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected service, if any.
    pub fn service(&self) -> Option<ServiceType> {
        self.service
    }

    /// The selected repair problem, if any.
    pub fn problem(&self) -> Option<RepairProblem> {
        self.problem
    }

    /// The selected highlighted strength, if any.
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    /// The satisfaction rating.
    pub fn recommendation(&self) -> RecommendationLevel {
        self.recommendation
    }

    /// The free-text comment, possibly empty.
    pub fn additional_comments(&self) -> &str {
        &self.additional_comments
    }

    /// Sets the service, clearing the problem when the service is not
    /// the repair category. Idempotent for repeated assignments.
    pub fn set_service(&mut self, service: ServiceType) {
        self.service = Some(service);
        if !service.is_repair() {
            self.problem = None;
        }
    }

    /// Sets the repair problem. Refused while the service is missing or
    /// not the repair category.
    pub fn set_problem(&mut self, problem: RepairProblem) -> Result<(), DomainError> {
        match self.service {
            Some(service) if service.is_repair() => {
                self.problem = Some(problem);
                Ok(())
            }
            _ => Err(DomainError::new(
                ErrorCode::ValidationRefused,
                "A problem can only be set for the repair service",
            )
            .with_detail("field", FieldKind::Problem.to_string())),
        }
    }

    /// Sets the highlighted strength.
    pub fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = Some(highlight);
    }

    /// Sets the satisfaction rating.
    pub fn set_recommendation(&mut self, level: RecommendationLevel) {
        self.recommendation = level;
    }

    /// Sets the optional free-text comment.
    pub fn set_additional_comments(&mut self, comments: impl Into<String>) {
        self.additional_comments = comments.into();
    }

    /// Returns true when the selected service is the repair category.
    pub fn is_repair_selected(&self) -> bool {
        self.service.map(|s| s.is_repair()).unwrap_or(false)
    }
}
