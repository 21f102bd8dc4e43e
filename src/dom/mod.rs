//! Headless document model.
//!
//! A small arena-backed element tree standing in for the browser DOM: nodes
//! are addressed by [`NodeId`], elements carry attributes, a class list and
//! inline style declarations. Detached subtrees stay in the arena but are
//! unreachable from the root, so lookups never see them.
//!
//! ```text
//! Document
//!  └── nodes: Vec<Node>          NodeId(n) indexes here
//!       ├── Element { tag, attrs, classes, style }
//!       └── Text(String)
//! ```

mod html;
pub mod shell;

pub use html::to_html;

use compact_str::CompactString;
use smallvec::SmallVec;

/// Elements that never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Whether `tag` is a void element.
#[inline]
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

#[derive(Debug, Clone)]
pub enum NodeData {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

// ============================================================================
// Element
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    tag: CompactString,
    attrs: SmallVec<[(CompactString, String); 4]>,
    classes: SmallVec<[CompactString; 2]>,
    style: SmallVec<[(CompactString, String); 2]>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase().into(),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set an attribute. `class` and `style` are split into their structured forms.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match name {
            "class" => {
                self.classes = value.split_whitespace().map(CompactString::from).collect();
            }
            "style" => {
                self.style.clear();
                for decl in value.split(';') {
                    if let Some((prop, val)) = decl.split_once(':') {
                        self.set_style(prop.trim(), val.trim());
                    }
                }
            }
            _ => match self.attrs.iter_mut().find(|(key, _)| key.as_str() == name) {
                Some((_, existing)) => value.clone_into(existing),
                None => self.attrs.push((name.into(), value.to_owned())),
            },
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(key, _)| key.as_str() != name);
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(CompactString::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c.as_str() == class)
    }

    /// Returns `false` if the class was already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.into());
        true
    }

    /// Returns `false` if the class was not present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c.as_str() != class);
        before != self.classes.len()
    }

    /// Flip a class; returns whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.classes.push(class.into());
            true
        }
    }

    pub fn style(&self, prop: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(key, _)| key.as_str() == prop)
            .map(|(_, value)| value.as_str())
    }

    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.style.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_style(&mut self, prop: &str, value: &str) {
        match self.style.iter_mut().find(|(key, _)| key.as_str() == prop) {
            Some((_, existing)) => value.clone_into(existing),
            None => self.style.push((prop.into(), value.to_owned())),
        }
    }

    /// Serialized `class` attribute value, if any class is set.
    pub fn class_attr(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes().collect::<Vec<_>>().join(" "))
    }

    /// Serialized `style` attribute value, if any declaration is set.
    pub fn style_attr(&self) -> Option<String> {
        (!self.style.is_empty()).then(|| {
            self.style
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; ")
        })
    }
}

// ============================================================================
// Document
// ============================================================================

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document whose root is an `<html>` element.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.push(NodeData::Element(Element::new("html")));
        doc
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(Element::new(tag)))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_owned()))
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.node(id).data
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.node(id).data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.node_mut(id).data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(Element::tag)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Element children only (text nodes skipped).
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.element(*child).is_some())
            .collect()
    }

    /// Move `child` under `parent`, detaching it from any previous parent.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Append text, merging into a trailing text node when there is one.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        if let Some(&last) = self.children(parent).last()
            && let NodeData::Text(existing) = &mut self.node_mut(last).data
        {
            existing.push_str(text);
            return;
        }
        let node = self.create_text(text);
        self.append(parent, node);
    }

    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|child| *child != id);
        }
    }

    pub fn clear_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
    }

    /// Replace all children with a single text node (`textContent = ...`).
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        if !text.is_empty() {
            let node = self.create_text(text);
            self.append(id, node);
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.node(id).data {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element(_) => {
                for child in self.children(id) {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    /// Pre-order traversal below `id` (excluding `id`).
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// Whether `id` is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Elements in document order (root included) matching `pred`.
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .filter(|id| self.element(*id).is_some_and(&pred))
            .collect()
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_all(|el| el.attr("id") == Some(id)).first().copied()
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.find_all(|el| el.tag() == tag)
    }

    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.find_all(|el| el.has_class(class))
    }

    pub fn closest_ancestor(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if self.tag(node) == Some(tag) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    // ------------------------------------------------------------------------
    // Element shorthands (no-ops on text nodes)
    // ------------------------------------------------------------------------

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.attr(name))
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_attr(name, value);
        }
    }

    /// `element.dataset[key] = value`, stored as `data-{key}`.
    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) {
        self.set_attr(id, &format!("data-{key}"), value);
    }

    pub fn data_attr(&self, id: NodeId, key: &str) -> Option<&str> {
        self.attr(id, &format!("data-{key}"))
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.remove_class(class);
        }
    }

    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        self.element_mut(id).is_some_and(|el| el.toggle_class(class))
    }

    pub fn style(&self, id: NodeId, prop: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.style(prop))
    }

    pub fn set_style(&mut self, id: NodeId, prop: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_style(prop, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_query() {
        let mut doc = Document::new();
        let body = doc.create_element("body");
        let list = doc.create_element("div");
        doc.set_attr(list, "id", "skills-list");
        doc.append(doc.root(), body);
        doc.append(body, list);

        assert_eq!(doc.get_element_by_id("skills-list"), Some(list));
        assert_eq!(doc.elements_by_tag("div"), [list]);
        assert!(doc.is_attached(list));
    }

    #[test]
    fn test_detached_nodes_are_invisible() {
        let mut doc = Document::new();
        let item = doc.create_element("span");
        doc.set_attr(item, "id", "floating");

        assert_eq!(doc.get_element_by_id("floating"), None);

        doc.append(doc.root(), item);
        doc.clear_children(doc.root());
        assert_eq!(doc.get_element_by_id("floating"), None);
        assert!(!doc.is_attached(item));
    }

    #[test]
    fn test_set_text_replaces_children() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        doc.append(doc.root(), p);
        doc.append_text(p, "Loading");
        doc.append_text(p, "…");
        assert_eq!(doc.children(p).len(), 1);
        assert_eq!(doc.text_content(p), "Loading…");

        doc.set_text(p, "Systems engineer.");
        assert_eq!(doc.text_content(p), "Systems engineer.");
        assert_eq!(doc.children(p).len(), 1);
    }

    #[test]
    fn test_class_list_operations() {
        let mut el = Element::new("DIV");
        assert_eq!(el.tag(), "div");

        assert!(el.add_class("item"));
        assert!(!el.add_class("item"));
        assert!(el.toggle_class("dark"));
        assert!(!el.toggle_class("dark"));
        assert!(el.remove_class("item"));
        assert_eq!(el.class_attr(), None);
    }

    #[test]
    fn test_class_and_style_attrs_are_structured() {
        let mut el = Element::new("article");
        el.set_attr("class", "project  fade-in");
        el.set_attr("style", "opacity: 0.3; pointer-events:none;");

        assert!(el.has_class("fade-in"));
        assert_eq!(el.style("pointer-events"), Some("none"));
        assert_eq!(el.attr("class"), None);

        el.set_style("opacity", "1");
        assert_eq!(el.style_attr().as_deref(), Some("opacity: 1; pointer-events: none"));
    }

    #[test]
    fn test_append_moves_between_parents() {
        let mut doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let child = doc.create_element("span");
        doc.append(doc.root(), a);
        doc.append(doc.root(), b);
        doc.append(a, child);
        doc.append(b, child);

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), [child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn test_descendants_document_order() {
        let mut doc = Document::new();
        let nav = doc.create_element("nav");
        let first = doc.create_element("a");
        let second = doc.create_element("a");
        let main = doc.create_element("main");
        doc.append(doc.root(), nav);
        doc.append(nav, first);
        doc.append(nav, second);
        doc.append(doc.root(), main);

        assert_eq!(doc.descendants(doc.root()), [nav, first, second, main]);
        assert_eq!(doc.closest_ancestor(second, "nav"), Some(nav));
    }
}
