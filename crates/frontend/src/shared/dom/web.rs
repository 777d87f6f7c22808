//! [`Dom`] over the browser document via `web-sys`.

use super::Dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, NodeList};

#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window, if there is one.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

fn collect_elements(selector: &str, list: Result<NodeList, JsValue>) -> Vec<Element> {
    let list = match list {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Query '{}' failed: {:?}", selector, e);
            return Vec::new();
        }
    };

    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }
    elements
}

impl Dom for WebDom {
    type Element = Element;
    type ClickHandler = js_sys::Function;

    fn elements_with_class(&self, scope: Option<&Element>, class: &str) -> Vec<Element> {
        let selector = format!(".{}", class);
        match scope {
            Some(scope) => collect_elements(&selector, scope.query_selector_all(&selector)),
            None => collect_elements(&selector, self.document.query_selector_all(&selector)),
        }
    }

    fn elements_with_attribute(&self, scope: &Element, name: &str, value: &str) -> Vec<Element> {
        let selector = format!("[{}=\"{}\"]", name, value);
        collect_elements(&selector, scope.query_selector_all(&selector))
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn closest_with_class(&self, element: &Element, class: &str) -> Option<Element> {
        let selector = format!(".{}", class);
        match element.closest(&selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("closest('{}') failed: {:?}", selector, e);
                None
            }
        }
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn text_content(&self, element: &Element) -> Option<String> {
        element.text_content()
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn click_handler(&self, mut callback: Box<dyn FnMut()>) -> js_sys::Function {
        // Handlers live for the page lifetime: the JS GC owns the closure from here on
        let closure = Closure::wrap(Box::new(move |_: MouseEvent| callback())
            as Box<dyn FnMut(MouseEvent)>);
        closure.into_js_value().unchecked_into()
    }

    fn attach_click(&self, element: &Element, handler: &js_sys::Function) {
        let _ = element.add_event_listener_with_callback("click", handler);
    }

    fn detach_click(&self, element: &Element, handler: &js_sys::Function) {
        let _ = element.remove_event_listener_with_callback("click", handler);
    }

    fn describe(&self, element: &Element) -> String {
        let tag = element.tag_name().to_lowercase();
        let id = element.id();
        if id.is_empty() {
            tag
        } else {
            format!("{}#{}", tag, id)
        }
    }
}
