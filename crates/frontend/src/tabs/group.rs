//! Tab group: the tabs of one container and the active/previous bookkeeping.

use super::error::TabsError;
use super::tab::{resolve_panel, Tab};
use crate::shared::dom::Dom;
use contracts::shared::tabs_config::TabsConfig;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Shared handle to a live group. Click handlers only hold a [`Weak`] to it,
/// so whoever keeps this handle keeps the group interactive.
pub type TabGroupHandle<D> = Rc<RefCell<TabGroup<D>>>;

pub struct TabGroup<D: Dom> {
    dom: D,
    config: TabsConfig,
    index: usize,
    tabs: Vec<Tab<D>>,
    active: Option<usize>,
    previous: Option<usize>,
}

impl<D: Dom> std::fmt::Debug for TabGroup<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabGroup")
            .field("config", &self.config)
            .field("index", &self.index)
            .field("tabs", &self.tabs.len())
            .field("active", &self.active)
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}

/// Controls of `container` in document order: `role` elements inside a
/// controls list whose nearest container is `container`. Controls of a group
/// nested in one of the panels belong to that inner group only, and `role`
/// elements in panel content outside any controls list are ignored.
pub(crate) fn discover_controls<D: Dom>(
    dom: &D,
    config: &TabsConfig,
    container: &D::Element,
) -> Vec<D::Element> {
    dom.elements_with_attribute(container, "role", &config.control_role)
        .into_iter()
        .filter(|control| {
            dom.closest_with_class(control, &config.controls_list_class)
                .and_then(|list| dom.closest_with_class(&list, &config.container_class))
                .as_ref()
                == Some(container)
        })
        .collect()
}

fn activate_from_click<D: Dom>(group: &Weak<RefCell<TabGroup<D>>>, index: usize) {
    let Some(group) = group.upgrade() else {
        log::debug!("Click on tab #{} of a group that was not kept alive", index);
        return;
    };
    let Ok(mut group) = group.try_borrow_mut() else {
        log::error!("Tab group is busy, ignoring click on tab #{}", index);
        return;
    };
    if let Err(e) = group.activate(index) {
        log::error!("{}", e);
    }
}

impl<D: Dom> TabGroup<D> {
    /// Builds the group for `container` and puts it into its initial state.
    ///
    /// Returns `Ok(None)` when the container holds no controls. Panels are
    /// resolved and checked before anything is touched, so a missing panel or
    /// a panel claimed by two controls leaves the container's markup unchanged.
    ///
    /// With several pre-marked controls the first one is activated and the
    /// rest deactivated, then [`TabsError::AmbiguousActiveTab`] is returned.
    /// The group is dropped with the error, which leaves the markup showing
    /// the first tab but stops further switching in that container.
    pub fn build(
        dom: &D,
        config: &TabsConfig,
        index: usize,
        container: &D::Element,
    ) -> Result<Option<TabGroupHandle<D>>, TabsError> {
        let controls = discover_controls(dom, config, container);
        if controls.is_empty() {
            return Ok(None);
        }

        let mut pairs: Vec<(D::Element, D::Element)> = Vec::with_capacity(controls.len());
        for control in controls {
            let panel = resolve_panel(dom, config, index, &control)?;
            if let Some((other, _)) = pairs.iter().find(|(_, p)| *p == panel) {
                return Err(TabsError::SharedPanel {
                    group: index,
                    controls: vec![dom.describe(other), dom.describe(&control)],
                    panel: dom.describe(&panel),
                });
            }
            pairs.push((control, panel));
        }

        let pre_marked: Vec<usize> = pairs
            .iter()
            .enumerate()
            .filter(|(_, (control, _))| dom.has_class(control, &config.active_control_class))
            .map(|(i, _)| i)
            .collect();
        let initial = pre_marked.first().copied().unwrap_or(0);

        let group = Rc::new_cyclic(|this: &Weak<RefCell<TabGroup<D>>>| {
            let tabs = pairs
                .into_iter()
                .enumerate()
                .map(|(i, (control, panel))| {
                    let this = this.clone();
                    let on_click = dom.click_handler(Box::new(move || activate_from_click(&this, i)));
                    Tab::new(control, panel, on_click)
                })
                .collect();

            RefCell::new(TabGroup {
                dom: dom.clone(),
                config: config.clone(),
                index,
                tabs,
                active: None,
                previous: None,
            })
        });

        {
            let mut state = group.borrow_mut();
            state.activate_tab(initial);
            for (i, tab) in state.tabs.iter().enumerate() {
                if i != initial {
                    tab.mark_inactive(&state.dom, &state.config);
                }
            }
        }

        if pre_marked.len() > 1 {
            let state = group.borrow();
            return Err(TabsError::AmbiguousActiveTab {
                group: index,
                controls: pre_marked
                    .iter()
                    .map(|&i| state.dom.describe(state.tabs[i].control()))
                    .collect(),
            });
        }

        log::debug!(
            "Tab group #{}: {} tabs, tab #{} active",
            index,
            group.borrow().len(),
            initial
        );
        Ok(Some(group))
    }

    /// Makes tab `index` the active one and deactivates the one it replaces.
    /// Activating the tab that is already active changes nothing.
    pub fn activate(&mut self, index: usize) -> Result<(), TabsError> {
        if index >= self.tabs.len() {
            return Err(TabsError::UnknownTab {
                group: self.index,
                index,
                len: self.tabs.len(),
            });
        }
        if self.active == Some(index) {
            return Ok(());
        }
        self.activate_tab(index);
        Ok(())
    }

    fn activate_tab(&mut self, index: usize) {
        if let Some(active) = self.active {
            self.previous = Some(active);
        }

        self.tabs[index].mark_active(&self.dom, &self.config);

        if let Some(previous) = self.previous {
            self.tabs[previous].mark_inactive(&self.dom, &self.config);
        }

        self.active = Some(index);
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tab(&self, index: usize) -> Option<&Tab<D>> {
        self.tabs.get(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.previous
    }
}
