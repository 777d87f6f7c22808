//! A single control/panel pair.
//!
//! A tab is either active (both markers set, no click handler) or inactive
//! (markers cleared, click handler registered on the control). Which tab is
//! active is bookkept by the owning [`TabGroup`](super::group::TabGroup).

use super::error::TabsError;
use crate::shared::dom::Dom;
use contracts::shared::tabs_config::TabsConfig;

pub struct Tab<D: Dom> {
    control: D::Element,
    panel: D::Element,
    on_click: D::ClickHandler,
}

/// Looks up the panel a control governs via the configured linking attribute.
pub(crate) fn resolve_panel<D: Dom>(
    dom: &D,
    config: &TabsConfig,
    group: usize,
    control: &D::Element,
) -> Result<D::Element, TabsError> {
    let panel_id = dom
        .attribute(control, &config.panel_ref_attribute)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| TabsError::MissingPanelReference {
            group,
            control: dom.describe(control),
            attribute: config.panel_ref_attribute.clone(),
        })?;

    dom.element_by_id(&panel_id)
        .ok_or_else(|| TabsError::MissingPanel {
            group,
            control: dom.describe(control),
            panel_id,
        })
}

impl<D: Dom> Tab<D> {
    pub(crate) fn new(control: D::Element, panel: D::Element, on_click: D::ClickHandler) -> Self {
        Self {
            control,
            panel,
            on_click,
        }
    }

    pub fn control(&self) -> &D::Element {
        &self.control
    }

    /// Whether the control currently carries the active marker.
    pub fn is_marked_active(&self, dom: &D, config: &TabsConfig) -> bool {
        dom.has_class(&self.control, &config.active_control_class)
    }

    /// Shows the panel, highlights the control and stops listening for clicks:
    /// an active tab cannot be re-activated by clicking it.
    pub(crate) fn mark_active(&self, dom: &D, config: &TabsConfig) {
        dom.add_class(&self.panel, &config.active_panel_class);
        dom.add_class(&self.control, &config.active_control_class);
        dom.detach_click(&self.control, &self.on_click);
    }

    /// Inverse of [`mark_active`](Self::mark_active): clears both markers and
    /// makes the control clickable again.
    pub(crate) fn mark_inactive(&self, dom: &D, config: &TabsConfig) {
        dom.remove_class(&self.control, &config.active_control_class);
        dom.remove_class(&self.panel, &config.active_panel_class);
        dom.attach_click(&self.control, &self.on_click);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::memory::{MemoryDom, NodeId};

    fn control_with_panel(dom: &MemoryDom) -> (NodeId, NodeId) {
        let control = dom.append(dom.root(), "button");
        dom.set_attribute(control, "aria-controls", "panel-1");
        let panel = dom.append(dom.root(), "div");
        dom.set_attribute(panel, "id", "panel-1");
        (control, panel)
    }

    #[test]
    fn test_resolve_panel() {
        let dom = MemoryDom::new();
        let (control, panel) = control_with_panel(&dom);
        let resolved = resolve_panel(&dom, &TabsConfig::default(), 0, &control).unwrap();
        assert_eq!(resolved, panel);
    }

    #[test]
    fn test_resolve_panel_missing_attribute() {
        let dom = MemoryDom::new();
        let control = dom.append(dom.root(), "button");
        let err = resolve_panel(&dom, &TabsConfig::default(), 2, &control).unwrap_err();
        assert!(matches!(
            err,
            TabsError::MissingPanelReference { group: 2, ref attribute, .. } if attribute == "aria-controls"
        ));
    }

    #[test]
    fn test_resolve_panel_unknown_id() {
        let dom = MemoryDom::new();
        let control = dom.append(dom.root(), "button");
        dom.set_attribute(control, "id", "c1");
        dom.set_attribute(control, "aria-controls", "nowhere");
        let err = resolve_panel(&dom, &TabsConfig::default(), 0, &control).unwrap_err();
        match err {
            TabsError::MissingPanel { control, panel_id, .. } => {
                assert_eq!(control, "button#c1");
                assert_eq!(panel_id, "nowhere");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mark_active_and_inactive() {
        let dom = MemoryDom::new();
        let config = TabsConfig::default();
        let (control, panel) = control_with_panel(&dom);
        let handler = dom.click_handler(Box::new(|| {}));
        let tab = Tab::<MemoryDom>::new(control, panel, handler);

        tab.mark_inactive(&dom, &config);
        assert!(!tab.is_marked_active(&dom, &config));
        assert!(dom.classes(panel).is_empty());
        assert_eq!(dom.listener_count(control), 1);

        tab.mark_active(&dom, &config);
        assert!(tab.is_marked_active(&dom, &config));
        assert_eq!(dom.classes(panel), vec!["active-tab-panel".to_string()]);
        assert_eq!(dom.listener_count(control), 0);
    }
}
