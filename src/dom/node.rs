use std::fmt;

use super::DomError;

/// Operations [`ElementUi`](super::ElementUi) needs from a DOM element.
///
/// Implementations are cheap handles: cloning yields another reference to
/// the same element, as with `web_sys::Element`.
pub trait DomNode: Clone + fmt::Debug {
    /// Append `child` as the last child, moving it if already attached.
    fn append_child(&self, child: &Self) -> Result<(), DomError>;

    /// Insert `child` as the first child, moving it if already attached.
    fn prepend_child(&self, child: &Self) -> Result<(), DomError>;

    /// Remove `child`, which must be a direct child.
    fn remove_child(&self, child: &Self) -> Result<(), DomError>;

    /// Remove the last child node of any kind. Returns `false` when there
    /// was none or removal failed.
    fn remove_last_child(&self) -> bool;

    /// Detach this element from its parent. No-op when detached.
    fn detach(&self);

    /// Number of child elements.
    fn child_element_count(&self) -> usize;

    /// Content attribute value.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set a content attribute.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// Read a scripting property as a string.
    fn property(&self, name: &str) -> Option<String>;

    /// Write a scripting property.
    fn set_property(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// Add a token to the class list.
    fn add_class(&self, name: &str) -> Result<(), DomError>;

    /// Remove a token from the class list.
    fn remove_class(&self, name: &str) -> Result<(), DomError>;

    /// Set an inline style property. `name` is kebab-case.
    fn set_style(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// Resolved style value. `name` is kebab-case.
    fn computed_style(&self, name: &str) -> Option<String>;

    /// Replace content with parsed markup.
    fn set_inner_html(&self, html: &str);

    /// Replace content with a single text node.
    fn set_text_content(&self, text: &str);
}

/// Factory for elements of one backend.
pub trait Document {
    /// Element handle type.
    type Node: DomNode;

    /// Create a detached element.
    fn create_element(&self, tag: &str) -> Result<Self::Node, DomError>;
}
