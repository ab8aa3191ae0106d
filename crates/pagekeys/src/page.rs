//! Page state seam
//!
//! The dispatcher never touches a global document. Everything it reads or
//! changes goes through this trait, so a page can be a parsed
//! [`Document`](pagekeys_dom::Document) or a hand-written double.

use pagekeys_dom::{Document, NodeId};

use crate::{KeyboardEvent, KeyboardEventType};

/// What the shortcut dispatcher needs from a rendered page
pub trait PageState {
    /// Handle to an element of the page
    type Element: Copy;

    /// First element with the given id
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Whether any element carries `class`
    fn has_class(&self, class: &str) -> bool;

    /// Elements with `class` inside any `container_class` element, in document order
    fn find_in(&self, container_class: &str, class: &str) -> Vec<Self::Element>;

    /// Lowercased tag name
    fn tag_name(&self, element: Self::Element) -> Option<&str>;

    fn attribute(&self, element: Self::Element, name: &str) -> Option<&str>;

    /// Move input focus. Returns false if the element cannot take focus.
    fn focus(&mut self, element: Self::Element) -> bool;

    /// Element currently holding focus
    fn active_element(&self) -> Option<Self::Element>;

    /// The event a key press for `c` produces on this page, targeted at the
    /// focused element
    fn key_event(&self, event_type: KeyboardEventType, c: char) -> KeyboardEvent {
        let tag = self
            .active_element()
            .and_then(|el| self.tag_name(el))
            .unwrap_or_default();
        KeyboardEvent::from_char(event_type, c, tag)
    }
}

impl PageState for Document {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn has_class(&self, class: &str) -> bool {
        !self.get_elements_by_class_name(class).is_empty()
    }

    fn find_in(&self, container_class: &str, class: &str) -> Vec<NodeId> {
        self.find_by_class_within(container_class, class)
    }

    fn tag_name(&self, element: NodeId) -> Option<&str> {
        Document::tag_name(self, element)
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        Document::attribute(self, element, name)
    }

    fn focus(&mut self, element: NodeId) -> bool {
        Document::focus(self, element)
    }

    fn active_element(&self) -> Option<NodeId> {
        Document::active_element(self)
    }
}
