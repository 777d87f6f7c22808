use contracts::shared::tabs_config::ConfigError;
use thiserror::Error;

/// Errors raised while setting up tab groups.
#[derive(Debug, Error)]
pub enum TabsError {
    #[error("Tab group #{group}: control {control} has no '{attribute}' attribute")]
    MissingPanelReference {
        group: usize,
        control: String,
        attribute: String,
    },

    #[error("Tab group #{group}: control {control} references panel '{panel_id}', which does not exist")]
    MissingPanel {
        group: usize,
        control: String,
        panel_id: String,
    },

    #[error(
        "Tab group #{group}: controls {} all reference panel {panel}",
        .controls.join(", ")
    )]
    SharedPanel {
        group: usize,
        controls: Vec<String>,
        panel: String,
    },

    #[error(
        "Tab group #{group}: {} controls are pre-marked active ({}). Only one was expected, so the first has been activated",
        .controls.len(),
        .controls.join(", ")
    )]
    AmbiguousActiveTab { group: usize, controls: Vec<String> },

    #[error("Tab group #{group} has no tab #{index} (it has {len})")]
    UnknownTab {
        group: usize,
        index: usize,
        len: usize,
    },

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
