//! Wizard behavior configuration
//!
//! Behaviors that vary across deployments are explicit settings here:
//! which step topology to run, whether a restart keeps previous
//! selections, and when the review is (re)composed.

use serde::Deserialize;

use crate::domain::wizard::WizardTopology;

/// Which built-in step topology the deployment runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyChoice {
    /// Four steps with a conditional problem-detail step.
    #[default]
    BranchingStandard,
    /// Three steps with merged detail collection.
    LinearCompact,
}

impl TopologyChoice {
    /// Builds the topology for this choice.
    pub fn build(&self) -> WizardTopology {
        match self {
            TopologyChoice::BranchingStandard => WizardTopology::branching_standard(),
            TopologyChoice::LinearCompact => WizardTopology::linear_compact(),
        }
    }
}

/// When the generated review is recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionTrigger {
    /// Compose once on reaching the terminal step.
    #[default]
    OnTerminalEntry,
    /// Additionally recompose on every field edit while at the terminal
    /// step.
    LivePreview,
}

/// Wizard behavior settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WizardConfig {
    /// Step topology variant.
    #[serde(default)]
    pub topology: TopologyChoice,

    /// Whether restarting the flow (after the guided tour) keeps the
    /// user's previous selections.
    #[serde(default)]
    pub reset_selections_on_restart: bool,

    /// Composition trigger policy.
    #[serde(default)]
    pub composition_trigger: CompositionTrigger,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_deployment() {
        let config = WizardConfig::default();
        assert_eq!(config.topology, TopologyChoice::BranchingStandard);
        assert!(!config.reset_selections_on_restart);
        assert_eq!(config.composition_trigger, CompositionTrigger::OnTerminalEntry);
    }

    #[test]
    fn topology_choice_builds_matching_topology() {
        assert_eq!(TopologyChoice::BranchingStandard.build().len(), 4);
        assert_eq!(TopologyChoice::LinearCompact.build().len(), 3);
    }

    #[test]
    fn deserializes_snake_case_variants() {
        let json = r#"{
            "topology": "linear_compact",
            "reset_selections_on_restart": true,
            "composition_trigger": "live_preview"
        }"#;
        let config: WizardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.topology, TopologyChoice::LinearCompact);
        assert!(config.reset_selections_on_restart);
        assert_eq!(config.composition_trigger, CompositionTrigger::LivePreview);
    }
}
