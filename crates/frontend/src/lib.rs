pub mod shared;
pub mod tabs;

use shared::config::load_config;
use shared::dom::web::WebDom;
use shared::dom::Dom;
use std::cell::{Cell, RefCell};
use tabs::{ScanReport, TabGroupHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Groups stay alive for the page lifetime; click handlers only hold weak references
thread_local! {
    static TAB_GROUPS: RefCell<Vec<TabGroupHandle<WebDom>>> = RefCell::new(Vec::new());
    static INITIALIZED: Cell<bool> = Cell::new(false);
}

/// Loads the configuration and sets up every tab group in the document.
pub fn setup_tabs<D: Dom>(dom: &D) -> ScanReport<D> {
    let config = load_config(dom);
    tabs::scan(dom, &config)
}

/// Runs [`setup_tabs`] only on the first call for `initialized`; later calls
/// are ignored with a warning and return `None`.
pub fn setup_tabs_once<D: Dom>(initialized: &Cell<bool>, dom: &D) -> Option<ScanReport<D>> {
    if initialized.replace(true) {
        log::warn!("Tabs are already initialized, ignoring repeated setup");
        return None;
    }
    Some(setup_tabs(dom))
}

fn setup_page() {
    let Some(dom) = WebDom::current() else {
        log::warn!("No document available, tabs not initialized");
        return;
    };

    let Some(report) = INITIALIZED.with(|flag| setup_tabs_once(flag, &dom)) else {
        return;
    };
    TAB_GROUPS.with(|groups| groups.borrow_mut().extend(report.groups));
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "complete" {
        setup_page();
        return;
    }

    let on_load = Closure::once_into_js(setup_page);
    if window
        .add_event_listener_with_callback("load", on_load.unchecked_ref())
        .is_err()
    {
        log::warn!("Failed to subscribe to window load, initializing tabs now");
        setup_page();
    }
}
