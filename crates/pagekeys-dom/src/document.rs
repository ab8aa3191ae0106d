//! Document - High-level document API

use crate::{DomTree, Node, NodeId};

/// HTML Document
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Element holding input focus, if any was focused explicitly
    focused: Option<NodeId>,
}

impl Document {
    /// Create a new empty document
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        // Create basic document structure
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            focused: None,
        }
    }

    /// Create an empty document (no structure).
    ///
    /// Call [`Document::finalize`] once the tree has been filled in.
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            focused: None,
        }
    }

    /// Locate <html>, <head> and <body> after the tree was built externally
    pub fn finalize(&mut self) {
        let find_child = |tree: &DomTree, parent: NodeId, tag: &str| {
            tree.children(parent)
                .find(|(_, node)| node.as_element().is_some_and(|e| e.tag == tag))
                .map_or(NodeId::NONE, |(id, _)| id)
        };

        self.html_element = find_child(&self.tree, self.tree.root(), "html");
        if self.html_element.is_valid() {
            self.head_element = find_child(&self.tree, self.html_element, "head");
            self.body_element = find_child(&self.tree, self.html_element, "body");
        }
        tracing::debug!(
            html = self.html_element.is_valid(),
            body = self.body_element.is_valid(),
            "Document finalized"
        );
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get document title
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }

        self.tree
            .children(self.head_element)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.tag == "title"))
            .and_then(|(id, _)| self.tree.children(id).find_map(|(_, child)| child.as_text()))
            .map(|t| t.trim().to_string())
            .unwrap_or_default()
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get the first element with the given id, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|(_, node)| node.as_element().is_some_and(|e| e.id.as_deref() == Some(id)))
            .map(|(node_id, _)| node_id)
    }

    /// All elements carrying `class`, in document order
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.elements_with_class(self.tree.root(), class)
    }

    fn elements_with_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.tree
            .descendants(root)
            .filter(|(_, node)| node.as_element().is_some_and(|e| e.has_class(class)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Elements with `class` nested anywhere inside an element with
    /// `container_class`, in document order.
    ///
    /// Matches jQuery's `$(".container").find(".class")`: nested containers
    /// do not produce duplicates.
    pub fn find_by_class_within(&self, container_class: &str, class: &str) -> Vec<NodeId> {
        self.elements_with_class(self.tree.root(), class)
            .into_iter()
            .filter(|&id| self.has_ancestor_with_class(id, container_class))
            .collect()
    }

    fn has_ancestor_with_class(&self, id: NodeId, class: &str) -> bool {
        let mut cursor = self.tree.get(id).map_or(NodeId::NONE, |n| n.parent);
        while let Some(node) = self.tree.get(cursor) {
            if node.as_element().is_some_and(|e| e.has_class(class)) {
                return true;
            }
            cursor = node.parent;
        }
        false
    }

    /// Lowercased tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.tree.get(id).and_then(Node::as_element).map(|e| e.tag.as_str())
    }

    /// Attribute value of an element
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.tree.get(id).and_then(Node::as_element).and_then(|e| e.get_attr(name))
    }

    /// Move input focus to an element. Returns false for non-elements.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if !self.tree.get(id).is_some_and(Node::is_element) {
            return false;
        }
        tracing::debug!(node = id.0, "Focus moved");
        self.focused = Some(id);
        true
    }

    /// Drop focus back to the body
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// The focused element, falling back to <body> like `document.activeElement`
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
            .or_else(|| self.body_element.is_valid().then_some(self.body_element))
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
