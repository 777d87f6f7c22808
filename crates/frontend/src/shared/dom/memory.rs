//! In-memory document tree implementing [`Dom`].
//!
//! Mirrors the parts of browser semantics the widget relies on: document-order
//! queries, `closest`, class lists and `addEventListener`/`removeEventListener`
//! de-duplication. [`MemoryDom::click`] dispatches to the registered handlers.

use super::Dom;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

type Callback = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Clone)]
pub struct MemoryHandler {
    id: u64,
    callback: Callback,
}

struct NodeData {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: Option<String>,
    listeners: Vec<MemoryHandler>,
}

impl NodeData {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_string(),
            parent,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            text: None,
            listeners: Vec::new(),
        }
    }
}

struct Tree {
    nodes: Vec<NodeData>,
    next_handler: u64,
}

#[derive(Clone)]
pub struct MemoryDom {
    tree: Rc<RefCell<Tree>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            tree: Rc::new(RefCell::new(Tree {
                nodes: vec![NodeData::new("#document", None)],
                next_handler: 0,
            })),
        }
    }

    /// The document node. It never matches a query itself.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn append(&self, parent: NodeId, tag: &str) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let id = NodeId(tree.nodes.len());
        tree.nodes.push(NodeData::new(tag, Some(parent)));
        tree.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.tree.borrow_mut().nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_text(&self, node: NodeId, text: &str) {
        self.tree.borrow_mut().nodes[node.0].text = Some(text.to_string());
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.tree.borrow().nodes[node.0].classes.clone()
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.tree.borrow().nodes[node.0].listeners.len()
    }

    /// Dispatches a click to the handlers registered on `node` at dispatch time.
    pub fn click(&self, node: NodeId) {
        let callbacks: Vec<Callback> = self.tree.borrow().nodes[node.0]
            .listeners
            .iter()
            .map(|h| h.callback.clone())
            .collect();

        for callback in callbacks {
            (&mut *callback.borrow_mut())();
        }
    }

    /// Descendants of `scope` in document (pre-)order.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = tree.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(tree.nodes[node.0].children.iter().rev().copied());
        }
        out
    }
}

impl Dom for MemoryDom {
    type Element = NodeId;
    type ClickHandler = MemoryHandler;

    fn elements_with_class(&self, scope: Option<&NodeId>, class: &str) -> Vec<NodeId> {
        let scope = scope.copied().unwrap_or_else(|| self.root());
        self.descendants(scope)
            .into_iter()
            .filter(|node| self.has_class(node, class))
            .collect()
    }

    fn elements_with_attribute(&self, scope: &NodeId, name: &str, value: &str) -> Vec<NodeId> {
        self.descendants(*scope)
            .into_iter()
            .filter(|node| self.attribute(node, name).as_deref() == Some(value))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|node| self.attribute(node, "id").as_deref() == Some(id))
    }

    fn closest_with_class(&self, element: &NodeId, class: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        let mut current = Some(*element);
        while let Some(node) = current {
            let data = &tree.nodes[node.0];
            if data.classes.iter().any(|c| c == class) {
                return Some(node);
            }
            current = data.parent;
        }
        None
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.tree.borrow().nodes[element.0].attributes.get(name).cloned()
    }

    fn text_content(&self, element: &NodeId) -> Option<String> {
        self.tree.borrow().nodes[element.0].text.clone()
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.tree.borrow().nodes[element.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        let mut tree = self.tree.borrow_mut();
        let classes = &mut tree.nodes[element.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.tree.borrow_mut().nodes[element.0]
            .classes
            .retain(|c| c != class);
    }

    fn click_handler(&self, callback: Box<dyn FnMut()>) -> MemoryHandler {
        let mut tree = self.tree.borrow_mut();
        tree.next_handler += 1;
        MemoryHandler {
            id: tree.next_handler,
            callback: Rc::new(RefCell::new(callback)),
        }
    }

    fn attach_click(&self, element: &NodeId, handler: &MemoryHandler) {
        let mut tree = self.tree.borrow_mut();
        let listeners = &mut tree.nodes[element.0].listeners;
        if !listeners.iter().any(|h| h.id == handler.id) {
            listeners.push(handler.clone());
        }
    }

    fn detach_click(&self, element: &NodeId, handler: &MemoryHandler) {
        self.tree.borrow_mut().nodes[element.0]
            .listeners
            .retain(|h| h.id != handler.id);
    }

    fn describe(&self, element: &NodeId) -> String {
        let tree = self.tree.borrow();
        let data = &tree.nodes[element.0];
        match data.attributes.get("id") {
            Some(id) => format!("{}#{}", data.tag, id),
            None => data.tag.clone(),
        }
    }
}
