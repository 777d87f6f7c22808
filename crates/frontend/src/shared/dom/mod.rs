//! Document abstraction used by the tab widget.
//!
//! The widget only needs a handful of DOM capabilities: locating elements by
//! marker, toggling classes and (un)registering click handlers. Keeping them
//! behind [`Dom`] lets the same state machine drive the browser document
//! ([`web::WebDom`]) and an in-memory tree ([`memory::MemoryDom`]).

pub mod memory;
pub mod web;

use std::fmt::Debug;

pub trait Dom: Clone + 'static {
    /// Element handle. Equality is element identity.
    type Element: Clone + PartialEq + Debug + 'static;
    /// A persistent click handler that can be attached and detached repeatedly.
    type ClickHandler: 'static;

    /// Elements carrying `class`, in document order. With a scope, only its
    /// descendants are searched (the scope itself is excluded).
    fn elements_with_class(&self, scope: Option<&Self::Element>, class: &str)
        -> Vec<Self::Element>;

    /// Descendants of `scope` whose attribute `name` equals `value`, in document order.
    fn elements_with_attribute(
        &self,
        scope: &Self::Element,
        name: &str,
        value: &str,
    ) -> Vec<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Nearest ancestor-or-self carrying `class`.
    fn closest_with_class(&self, element: &Self::Element, class: &str) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn text_content(&self, element: &Self::Element) -> Option<String>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    fn click_handler(&self, callback: Box<dyn FnMut()>) -> Self::ClickHandler;

    /// Registers `handler` for clicks on `element`. Registering the same
    /// handler twice keeps a single registration.
    fn attach_click(&self, element: &Self::Element, handler: &Self::ClickHandler);

    /// Unregisters `handler`; does nothing if it is not registered.
    fn detach_click(&self, element: &Self::Element, handler: &Self::ClickHandler);

    /// Short human-readable label for log and error messages, e.g. `button#tab-1`.
    fn describe(&self, element: &Self::Element) -> String;
}
