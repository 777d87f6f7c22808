//! Marker configuration for tab groups.
//!
//! The widget never styles anything itself: it reads a few input markers from
//! the markup and writes two state classes that page CSS keys on. All of those
//! names live here so that the page and the widget agree on them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONTAINER_CLASS: &str = "tabpanel";
pub const DEFAULT_CONTROLS_LIST_CLASS: &str = "tab_titles";
pub const DEFAULT_CONTROL_ROLE: &str = "tab";
pub const DEFAULT_PANEL_REF_ATTRIBUTE: &str = "aria-controls";
pub const DEFAULT_ACTIVE_CONTROL_CLASS: &str = "active-tab-control";
pub const DEFAULT_ACTIVE_PANEL_CLASS: &str = "active-tab-panel";

/// Errors in the marker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse tabs config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Marker '{field}' must be a CSS identifier, got {value:?}")]
    InvalidMarker { field: &'static str, value: String },

    #[error("Active control and active panel classes must differ (both are '{0}')")]
    SameActiveClasses(String),
}

/// Names of the classes and attributes the widget reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Class marking a tab group container
    pub container_class: String,
    /// Class of the wrapper holding a group's controls
    pub controls_list_class: String,
    /// Value of the `role` attribute on controls
    pub control_role: String,
    /// Control attribute holding the id of the governed panel
    pub panel_ref_attribute: String,
    /// Class toggled on the active control (may be pre-set in markup)
    pub active_control_class: String,
    /// Class toggled on the visible panel
    pub active_panel_class: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            controls_list_class: DEFAULT_CONTROLS_LIST_CLASS.to_string(),
            control_role: DEFAULT_CONTROL_ROLE.to_string(),
            panel_ref_attribute: DEFAULT_PANEL_REF_ATTRIBUTE.to_string(),
            active_control_class: DEFAULT_ACTIVE_CONTROL_CLASS.to_string(),
            active_panel_class: DEFAULT_ACTIVE_PANEL_CLASS.to_string(),
        }
    }
}

impl TabsConfig {
    /// Parse an override document. Keys that are absent keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TabsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every marker is a plain CSS identifier, so it can be
    /// used verbatim as a class name, attribute name or attribute value in
    /// a selector.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markers = [
            ("container_class", &self.container_class),
            ("controls_list_class", &self.controls_list_class),
            ("control_role", &self.control_role),
            ("panel_ref_attribute", &self.panel_ref_attribute),
            ("active_control_class", &self.active_control_class),
            ("active_panel_class", &self.active_panel_class),
        ];

        for (field, value) in markers {
            if !is_css_identifier(value) {
                return Err(ConfigError::InvalidMarker {
                    field,
                    value: value.clone(),
                });
            }
        }

        if self.active_control_class == self.active_panel_class {
            return Err(ConfigError::SameActiveClasses(
                self.active_control_class.clone(),
            ));
        }

        Ok(())
    }
}

/// `[A-Za-z_-][A-Za-z0-9_-]*`, not starting with a digit or `-` + digit,
/// and not a lone `-`.
fn is_css_identifier(value: &str) -> bool {
    let bytes = value.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    if !bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'-')
    {
        return false;
    }
    match (first, bytes.get(1)) {
        (b'0'..=b'9', _) => false,
        (b'-', None) => false,
        (b'-', Some(second)) => !second.is_ascii_digit(),
        _ => true,
    }
}
