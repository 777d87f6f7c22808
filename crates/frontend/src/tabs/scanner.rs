//! Finds every tab group container in the document and sets each one up.

use super::error::TabsError;
use super::group::{TabGroup, TabGroupHandle};
use crate::shared::dom::Dom;
use contracts::shared::tabs_config::TabsConfig;

/// Outcome of a scan. Each container is set up independently: a failing
/// container lands in `errors` and never prevents its siblings from working.
pub struct ScanReport<D: Dom> {
    pub groups: Vec<TabGroupHandle<D>>,
    pub errors: Vec<TabsError>,
    /// Containers without any controls
    pub empty: usize,
}

impl<D: Dom> ScanReport<D> {
    fn new() -> Self {
        Self {
            groups: Vec::new(),
            errors: Vec::new(),
            empty: 0,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Sets up every container in the document.
pub fn scan<D: Dom>(dom: &D, config: &TabsConfig) -> ScanReport<D> {
    scan_within(dom, config, None)
}

/// Sets up the containers below `root` (the root itself is not considered),
/// or in the whole document without one.
pub fn scan_within<D: Dom>(
    dom: &D,
    config: &TabsConfig,
    root: Option<&D::Element>,
) -> ScanReport<D> {
    let mut report = ScanReport::new();

    if let Err(e) = config.validate() {
        log::warn!("{}", e);
        report.errors.push(e.into());
        return report;
    }

    let containers = dom.elements_with_class(root, &config.container_class);
    for (index, container) in containers.into_iter().enumerate() {
        match TabGroup::build(dom, config, index, &container) {
            Ok(Some(group)) => report.groups.push(group),
            Ok(None) => report.empty += 1,
            Err(e) => {
                log::warn!("{}", e);
                report.errors.push(e);
            }
        }
    }

    log::info!(
        "Tabs: {} groups ready, {} empty, {} failed",
        report.groups.len(),
        report.empty,
        report.errors.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::memory::MemoryDom;
    use crate::tabs::fixtures::{append_tab_container, is_active, is_inactive};

    #[test]
    fn test_no_containers() {
        let dom = MemoryDom::new();
        let report = scan(&dom, &TabsConfig::default());
        assert!(report.groups.is_empty());
        assert!(report.is_ok());
        assert_eq!(report.empty, 0);
    }

    #[test]
    fn test_empty_container_counted() {
        let dom = MemoryDom::new();
        append_tab_container(&dom, dom.root(), "a", 0, &[]);
        let report = scan(&dom, &TabsConfig::default());
        assert!(report.groups.is_empty());
        assert!(report.is_ok());
        assert_eq!(report.empty, 1);
    }

    #[test]
    fn test_failure_does_not_abort_later_containers() {
        let dom = MemoryDom::new();
        let first = append_tab_container(&dom, dom.root(), "a", 2, &[0, 1]);
        let second = append_tab_container(&dom, dom.root(), "b", 2, &[]);
        let third = append_tab_container(&dom, dom.root(), "c", 2, &[]);
        dom.set_attribute(third.controls[0], "aria-controls", "missing");

        let report = scan(&dom, &TabsConfig::default());

        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.errors.len(), 2);
        assert!(matches!(report.errors[0], TabsError::AmbiguousActiveTab { group: 0, .. }));
        assert!(matches!(report.errors[1], TabsError::MissingPanel { group: 2, .. }));

        assert!(is_active(&dom, &first, 0));
        assert!(is_inactive(&dom, &first, 1));

        assert!(is_active(&dom, &second, 0));
        dom.click(second.controls[1]);
        assert!(is_active(&dom, &second, 1));
        assert!(is_inactive(&dom, &second, 0));
    }

    #[test]
    fn test_nested_containers_are_separate_groups() {
        let dom = MemoryDom::new();
        let outer = append_tab_container(&dom, dom.root(), "outer", 2, &[]);
        let inner = append_tab_container(&dom, outer.panels[1], "inner", 2, &[1]);

        let report = scan(&dom, &TabsConfig::default());
        assert_eq!(report.groups.len(), 2);
        assert!(report.is_ok());

        assert!(is_active(&dom, &outer, 0));
        assert!(is_active(&dom, &inner, 1));

        dom.click(outer.controls[1]);
        assert!(is_active(&dom, &outer, 1));
        assert!(is_active(&dom, &inner, 1));
    }

    #[test]
    fn test_custom_markers() {
        let dom = MemoryDom::new();
        let container = dom.append(dom.root(), "section");
        dom.add_class(&container, "tabs");
        let nav = dom.append(container, "nav");
        dom.add_class(&nav, "switches");
        let mut controls = Vec::new();
        for i in 0..2 {
            let control = dom.append(nav, "a");
            dom.set_attribute(control, "role", "switch");
            dom.set_attribute(control, "data-target", &format!("p{}", i));
            controls.push(control);
        }
        let panels: Vec<_> = (0..2)
            .map(|i| {
                let panel = dom.append(container, "div");
                dom.set_attribute(panel, "id", &format!("p{}", i));
                panel
            })
            .collect();

        let config = TabsConfig {
            container_class: "tabs".to_string(),
            controls_list_class: "switches".to_string(),
            control_role: "switch".to_string(),
            panel_ref_attribute: "data-target".to_string(),
            active_control_class: "on".to_string(),
            active_panel_class: "shown".to_string(),
        };
        let report = scan(&dom, &config);
        assert_eq!(report.groups.len(), 1);

        dom.click(controls[1]);
        assert!(dom.has_class(&controls[1], "on"));
        assert!(dom.has_class(&panels[1], "shown"));
        assert!(!dom.has_class(&controls[0], "on"));
        assert!(!dom.has_class(&panels[0], "shown"));
    }

    #[test]
    fn test_scan_within_root() {
        let dom = MemoryDom::new();
        let post = dom.append(dom.root(), "article");
        let inside = append_tab_container(&dom, post, "in", 2, &[]);
        let outside = append_tab_container(&dom, dom.root(), "out", 2, &[]);

        let report = scan_within(&dom, &TabsConfig::default(), Some(&post));
        assert_eq!(report.groups.len(), 1);
        assert!(is_active(&dom, &inside, 0));
        assert!(dom.classes(outside.controls[0]).is_empty());
        assert_eq!(dom.listener_count(outside.controls[1]), 0);
    }

    #[test]
    fn test_invalid_marker_reported() {
        let dom = MemoryDom::new();
        append_tab_container(&dom, dom.root(), "a", 2, &[]);
        let config = TabsConfig {
            container_class: "md:tabs".to_string(),
            ..TabsConfig::default()
        };

        let report = scan(&dom, &config);
        assert!(report.groups.is_empty());
        assert!(matches!(report.errors.as_slice(), [TabsError::InvalidConfig(_)]));
    }

    #[test]
    fn test_invalid_config_reported() {
        let dom = MemoryDom::new();
        let fixture = append_tab_container(&dom, dom.root(), "a", 2, &[]);
        let config = TabsConfig {
            active_panel_class: "active-tab-control".to_string(),
            ..TabsConfig::default()
        };

        let report = scan(&dom, &config);
        assert!(report.groups.is_empty());
        assert!(matches!(report.errors.as_slice(), [TabsError::InvalidConfig(_)]));
        assert!(dom.classes(fixture.controls[0]).is_empty());
    }
}
