//! Page-level configuration for the tab widget.
//!
//! Search order:
//! 1. Inline JSON block `<script type="application/json" id="tabs-config">`
//! 2. Falls back to the embedded defaults

use crate::shared::dom::Dom;
use contracts::shared::tabs_config::TabsConfig;

pub const CONFIG_ELEMENT_ID: &str = "tabs-config";

pub fn load_config<D: Dom>(dom: &D) -> TabsConfig {
    let Some(element) = dom.element_by_id(CONFIG_ELEMENT_ID) else {
        log::debug!("Using default tabs configuration");
        return TabsConfig::default();
    };

    let json = dom.text_content(&element).unwrap_or_default();
    match TabsConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Loaded tabs configuration from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("Ignoring #{}: {}. Using defaults", CONFIG_ELEMENT_ID, e);
            TabsConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::memory::MemoryDom;

    fn with_config_block(json: &str) -> MemoryDom {
        let dom = MemoryDom::new();
        let script = dom.append(dom.root(), "script");
        dom.set_attribute(script, "type", "application/json");
        dom.set_attribute(script, "id", CONFIG_ELEMENT_ID);
        dom.set_text(script, json);
        dom
    }

    #[test]
    fn test_defaults_without_block() {
        let dom = MemoryDom::new();
        assert_eq!(load_config(&dom), TabsConfig::default());
    }

    #[test]
    fn test_block_overrides_defaults() {
        let dom = with_config_block(r#"{ "active_panel_class": "is-visible" }"#);
        let config = load_config(&dom);
        assert_eq!(config.active_panel_class, "is-visible");
        assert_eq!(config.container_class, "tabpanel");
    }

    #[test]
    fn test_broken_block_falls_back() {
        let dom = with_config_block("not json");
        assert_eq!(load_config(&dom), TabsConfig::default());
    }

    #[test]
    fn test_empty_block_falls_back() {
        let dom = with_config_block("");
        assert_eq!(load_config(&dom), TabsConfig::default());
    }
}
