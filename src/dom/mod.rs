//! Chainable wrapper over a single DOM element for building editor panels.
//!
//! [`ElementUi`] is generic over a [`DomNode`] backend: the in-memory
//! [`memory`] backend runs anywhere, and with the `web` feature
//! `web_sys::Element` implements [`DomNode`] directly.
//!
//! Mutators take `&self` (elements are shared handles) and return `&Self`
//! so calls chain:
//!
//! ```
//! use scenekit::dom::memory::MemoryDocument;
//! use scenekit::dom::ElementUi;
//!
//! let doc = MemoryDocument::new();
//! let panel = ElementUi::new(&doc, "div").unwrap();
//! let title = ElementUi::new(&doc, "h2").unwrap();
//! title.text("Transform").add_class("panel-title");
//! panel
//!     .set_css("backgroundColor", "#222")
//!     .add_class("panel")
//!     .append(&[&title]);
//! assert_eq!(panel.dom().children().len(), 1);
//! assert!(panel.id().is_some());
//! ```

mod id;
pub mod memory;
mod node;
#[cfg(feature = "web")]
mod web;

use std::fmt;

pub use id::{generate_uuid, generate_uuid_with, uuid_from_words};
pub use node::{Document, DomNode};

use crate::util::naming::css_property_name;

/// Names that [`ElementUi::attr`] and [`ElementUi::set_attr`] read and
/// write as element properties. Every other name goes through content
/// attributes.
pub const PROPERTY_NAMES: &[&str] = &[
    "id",
    "className",
    "htmlFor",
    "title",
    "lang",
    "dir",
    "tabIndex",
    "value",
    "checked",
    "disabled",
    "hidden",
];

fn is_property(name: &str) -> bool {
    PROPERTY_NAMES.contains(&name)
}

/// Errors reported by a DOM backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// Insertion would make a node its own ancestor.
    HierarchyRequest,
    /// The node is not a child of the target.
    NotFound,
    /// Tag, attribute or class name the platform refuses.
    InvalidName(String),
    /// Any other platform exception, by message.
    Platform(String),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HierarchyRequest => {
                f.write_str("node cannot be inserted at this point in the hierarchy")
            }
            Self::NotFound => f.write_str("node is not a child of this element"),
            Self::InvalidName(name) => write!(f, "invalid name '{name}'"),
            Self::Platform(msg) => write!(f, "platform error: {msg}"),
        }
    }
}

impl std::error::Error for DomError {}

/// A child argument that [`ElementUi::try_append`] or
/// [`ElementUi::try_remove_children`] skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Position in the argument slice.
    pub index: usize,
    /// Why the backend rejected it.
    pub error: DomError,
}

/// Wrapper around one DOM element.
#[derive(Debug, Clone)]
pub struct ElementUi<N: DomNode> {
    dom: N,
}

impl<N: DomNode> ElementUi<N> {
    /// Create a `tag` element with a generated id.
    pub fn new<D>(document: &D, tag: &str) -> Result<Self, DomError>
    where
        D: Document<Node = N>,
    {
        Self::with_attributes(document, tag, std::iter::empty::<(&str, &str)>())
    }

    /// Create a `tag` element and apply `attributes` in order.
    ///
    /// A generated id is assigned unless `attributes` supplies `id`.
    pub fn with_attributes<D, I, K, V>(
        document: &D,
        tag: &str,
        attributes: I,
    ) -> Result<Self, DomError>
    where
        D: Document<Node = N>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let ui = Self {
            dom: document.create_element(tag)?,
        };
        let mut has_id = false;
        for (name, value) in attributes {
            has_id |= name.as_ref() == "id";
            let _ = ui.set_attr(name.as_ref(), value.as_ref());
        }
        if !has_id {
            let _ = ui.set_attr("id", &generate_uuid());
        }
        Ok(ui)
    }

    /// Wrap an existing element. A generated id is assigned only if the
    /// element has none.
    pub fn from_node(dom: N) -> Self {
        let ui = Self { dom };
        if ui.id().is_none_or(|id| id.is_empty()) {
            let _ = ui.set_attr("id", &generate_uuid());
        }
        ui
    }

    /// The wrapped element.
    pub fn dom(&self) -> &N {
        &self.dom
    }

    /// Unwrap into the element handle.
    pub fn into_inner(self) -> N {
        self.dom
    }

    /// The element id.
    pub fn id(&self) -> Option<String> {
        self.attr("id")
    }

    /// Append each child's element in order. Children the backend rejects
    /// are logged and skipped.
    pub fn append(&self, children: &[&Self]) -> &Self {
        let _ = self.try_append(children);
        self
    }

    /// [`append`](Self::append), returning the skipped children.
    pub fn try_append(&self, children: &[&Self]) -> Vec<Skipped> {
        self.for_each_child(children, "append", |parent, child| {
            parent.append_child(child)
        })
    }

    /// Insert this element as the last child of `parent`.
    pub fn append_to(&self, parent: &N) -> &Self {
        if let Err(e) = parent.append_child(&self.dom) {
            log::error!("ElementUi: appendTo failed: {e}");
        }
        self
    }

    /// Insert this element as the first child of `parent`.
    pub fn prepend_to(&self, parent: &N) -> &Self {
        if let Err(e) = parent.prepend_child(&self.dom) {
            log::error!("ElementUi: prependTo failed: {e}");
        }
        self
    }

    /// Detach this element from its parent.
    pub fn remove(&self) -> &Self {
        self.dom.detach();
        self
    }

    /// Remove each child that is a direct child of this element. Others
    /// are logged and skipped.
    pub fn remove_children(&self, children: &[&Self]) -> &Self {
        let _ = self.try_remove_children(children);
        self
    }

    /// [`remove_children`](Self::remove_children), returning the skipped
    /// children.
    pub fn try_remove_children(&self, children: &[&Self]) -> Vec<Skipped> {
        self.for_each_child(children, "remove", |parent, child| {
            parent.remove_child(child)
        })
    }

    fn for_each_child(
        &self,
        children: &[&Self],
        op: &str,
        f: impl Fn(&N, &N) -> Result<(), DomError>,
    ) -> Vec<Skipped> {
        let mut skipped = Vec::new();
        for (index, child) in children.iter().enumerate() {
            if let Err(error) = f(&self.dom, &child.dom) {
                log::error!(
                    "ElementUi: {op} skipped child {index} ({:?}): {error}",
                    child.id()
                );
                skipped.push(Skipped { index, error });
            }
        }
        skipped
    }

    /// Remove every child node, last first.
    pub fn clear(&self) -> &Self {
        while self.dom.remove_last_child() {}
        self
    }

    /// Read `name`: as a property if it is in [`PROPERTY_NAMES`], else as a
    /// content attribute.
    pub fn attr(&self, name: &str) -> Option<String> {
        if is_property(name) {
            self.dom.property(name)
        } else {
            self.dom.attribute(name)
        }
    }

    /// Write `name`, by the same property/attribute rule as
    /// [`attr`](Self::attr).
    pub fn set_attr(&self, name: &str, value: &str) -> &Self {
        let result = if is_property(name) {
            self.dom.set_property(name, value)
        } else {
            self.dom.set_attribute(name, value)
        };
        if let Err(e) = result {
            log::error!("ElementUi: set '{name}' failed: {e}");
        }
        self
    }

    /// Apply several [`set_attr`](Self::set_attr) calls in order.
    pub fn set_attrs<I, K, V>(&self, attributes: I) -> &Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in attributes {
            let _ = self.set_attr(name.as_ref(), value.as_ref());
        }
        self
    }

    /// Add a class.
    pub fn add_class(&self, name: &str) -> &Self {
        if let Err(e) = self.dom.add_class(name) {
            log::error!("ElementUi: addClass '{name}' failed: {e}");
        }
        self
    }

    /// Remove a class.
    pub fn remove_class(&self, name: &str) -> &Self {
        if let Err(e) = self.dom.remove_class(name) {
            log::error!("ElementUi: removeClass '{name}' failed: {e}");
        }
        self
    }

    /// Resolved (computed) style value. Accepts camelCase or kebab-case.
    pub fn css(&self, name: &str) -> Option<String> {
        self.dom.computed_style(&css_property_name(name))
    }

    /// Set one inline style property. An empty value removes it.
    pub fn set_css(&self, name: &str, value: &str) -> &Self {
        if let Err(e) = self.dom.set_style(&css_property_name(name), value) {
            log::error!("ElementUi: css '{name}' failed: {e}");
        }
        self
    }

    /// Apply several [`set_css`](Self::set_css) calls in order.
    pub fn set_css_map<I, K, V>(&self, styles: I) -> &Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in styles {
            let _ = self.set_css(name.as_ref(), value.as_ref());
        }
        self
    }

    /// Replace content with `markup`, unescaped. Never pass untrusted
    /// input.
    pub fn html(&self, markup: &str) -> &Self {
        self.dom.set_inner_html(markup);
        self
    }

    /// Replace content with plain text.
    pub fn text(&self, text: &str) -> &Self {
        self.dom.set_text_content(text);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::memory::{MemoryDocument, MemoryElement};
    use super::*;

    const DOC: MemoryDocument = MemoryDocument::new();

    fn ui(tag: &str) -> ElementUi<MemoryElement> {
        ElementUi::new(&DOC, tag).unwrap()
    }

    fn is_uuid(s: &str) -> bool {
        s.len() == 36 && s.as_bytes()[14] == b'4' && s.matches('-').count() == 4
    }

    #[test]
    fn generated_id_when_none_supplied() {
        let el = ui("div");
        let id = el.attr("id").unwrap();
        assert!(is_uuid(&id), "{id}");
    }

    #[test]
    fn supplied_id_is_kept() {
        let el = ElementUi::with_attributes(
            &DOC,
            "div",
            [("id", "viewport"), ("data-role", "panel")],
        )
        .unwrap();
        assert_eq!(el.attr("id").as_deref(), Some("viewport"));
        assert_eq!(el.attr("data-role").as_deref(), Some("panel"));
    }

    #[test]
    fn from_node_keeps_existing_id() {
        let node = DOC.create_element("section").unwrap();
        node.set_attribute("id", "main").unwrap();
        let el = ElementUi::from_node(node);
        assert_eq!(el.id().as_deref(), Some("main"));

        let fresh = ElementUi::from_node(DOC.create_element("p").unwrap());
        assert!(is_uuid(&fresh.id().unwrap()));
    }

    #[test]
    fn append_in_argument_order() {
        let (parent, a, b) = (ui("ul"), ui("li"), ui("li"));
        let _ = parent.append(&[&a, &b]);
        assert_eq!(
            parent.dom().children(),
            vec![a.dom().clone(), b.dom().clone()]
        );
    }

    #[test]
    fn rejected_append_is_reported_and_tree_unchanged() {
        let (parent, child) = (ui("div"), ui("div"));
        let _ = parent.append(&[&child]);
        let ok = ui("span");

        let skipped = child.try_append(&[&parent, &ok]);
        assert_eq!(
            skipped,
            vec![Skipped {
                index: 0,
                error: DomError::HierarchyRequest,
            }]
        );
        assert_eq!(parent.dom().children(), vec![child.dom().clone()]);
        assert_eq!(child.dom().children(), vec![ok.dom().clone()]);
        assert_eq!(parent.dom().parent(), None);
    }

    #[test]
    fn remove_children_skips_non_children() {
        let (parent, a, stranger) = (ui("div"), ui("p"), ui("p"));
        let _ = parent.append(&[&a]);
        let skipped = parent.try_remove_children(&[&stranger, &a]);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].index, 0);
        assert_eq!(skipped[0].error, DomError::NotFound);
        assert!(parent.dom().children().is_empty());
    }

    #[test]
    fn remove_detaches_self() {
        let (parent, child) = (ui("div"), ui("div"));
        let _ = parent.append(&[&child]);
        let _ = child.remove();
        assert!(parent.dom().children().is_empty());
        assert_eq!(child.dom().parent(), None);
        // Removing a detached element is harmless.
        let _ = child.remove();
    }

    #[test]
    fn append_to_and_prepend_to_raw_container() {
        let container = DOC.create_element("body").unwrap();
        let (first, last) = (ui("header"), ui("footer"));
        let _ = last.append_to(&container);
        let _ = first.prepend_to(&container);
        assert_eq!(
            container.children(),
            vec![first.dom().clone(), last.dom().clone()]
        );
    }

    #[test]
    fn clear_removes_any_number_of_children() {
        for n in 0..6 {
            let parent = ui("div");
            for _ in 0..n {
                let _ = parent.append(&[&ui("span")]);
            }
            let _ = parent.clear();
            assert_eq!(parent.dom().child_node_count(), 0);
        }
    }

    #[test]
    fn clear_with_element_and_text_children() {
        let parent = ui("div");
        let _ = parent.text("leading text");
        let child = ui("span");
        let _ = parent.append(&[&child]);
        assert_eq!(parent.dom().child_node_count(), 2);
        let _ = parent.clear();
        assert_eq!(parent.dom().child_node_count(), 0);
        assert_eq!(parent.dom().child_element_count(), 0);
        assert_eq!(child.dom().parent(), None);
    }

    #[test]
    fn property_and_attribute_paths() {
        let el = ui("input");
        let _ = el.set_attr("className", "field wide").set_attr("value", "3");
        assert_eq!(el.attr("className").as_deref(), Some("field wide"));
        assert_eq!(el.dom().attribute("class").as_deref(), Some("field wide"));
        assert_eq!(el.attr("value").as_deref(), Some("3"));
        assert_eq!(el.dom().attribute("value"), None);

        let _ = el.set_attr("aria-label", "Width");
        assert_eq!(el.dom().attribute("aria-label").as_deref(), Some("Width"));
    }

    #[test]
    fn bulk_attributes_from_map() {
        let el = ui("a");
        let attrs = BTreeMap::from([("href", "#x"), ("title", "X")]);
        let _ = el.set_attrs(attrs);
        assert_eq!(el.attr("href").as_deref(), Some("#x"));
        assert_eq!(el.attr("title").as_deref(), Some("X"));
    }

    #[test]
    fn invalid_attribute_name_is_logged_not_fatal() {
        let el = ui("div");
        let _ = el.set_attr("bad name", "x").set_attr("ok", "y");
        assert_eq!(el.attr("ok").as_deref(), Some("y"));
    }

    #[test]
    fn class_toggling() {
        let el = ui("div");
        let _ = el.add_class("a").add_class("b").add_class("a");
        assert_eq!(el.attr("className").as_deref(), Some("a b"));
        let _ = el.remove_class("a");
        assert!(!el.dom().has_class("a"));
        assert!(el.dom().has_class("b"));
    }

    #[test]
    fn css_set_get_and_bulk() {
        let el = ui("div");
        let _ = el
            .set_css("backgroundColor", "red")
            .set_css_map([("marginTop", "4px"), ("font-size", "12px")]);
        assert_eq!(el.dom().inline_style("background-color").as_deref(), Some("red"));
        assert_eq!(el.css("marginTop").as_deref(), Some("4px"));
        assert_eq!(el.css("font-size").as_deref(), Some("12px"));
        // Resolved, not just inline.
        assert_eq!(el.css("display").as_deref(), Some("block"));
        let _ = el.set_css("backgroundColor", "");
        assert_eq!(el.dom().inline_style("background-color"), None);
    }

    #[test]
    fn html_and_text_replace_content() {
        let el = ui("div");
        let _ = el.append(&[&ui("span")]);
        let _ = el.html("<em>x</em>");
        assert_eq!(el.dom().inner_html(), "<em>x</em>");
        assert!(el.dom().children().is_empty());
        let _ = el.text("<em>x</em>");
        assert_eq!(el.dom().text_content(), "<em>x</em>");
    }
}
