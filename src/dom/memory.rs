//! In-memory DOM backend.
//!
//! Implements just enough of the element model for [`ElementUi`] to run
//! outside a browser: a tree with parent links, attributes, reflected
//! properties, a class list, inline styles and text/markup content. Markup
//! is stored verbatim, not parsed.
//!
//! [`ElementUi`]: super::ElementUi

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::node::{Document, DomNode};
use super::DomError;

/// Tags whose initial `display` resolves to `block`.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "details", "dialog", "div",
    "dl", "fieldset", "figure", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre",
    "section", "table", "ul",
];

/// Properties that reflect a content attribute of a different or equal
/// name.
const REFLECTED: &[(&str, &str)] = &[
    ("id", "id"),
    ("className", "class"),
    ("htmlFor", "for"),
    ("title", "title"),
    ("lang", "lang"),
    ("dir", "dir"),
    ("tabIndex", "tabindex"),
];

fn reflected_attribute(property: &str) -> Option<&'static str> {
    REFLECTED
        .iter()
        .find_map(|(prop, attr)| (*prop == property).then_some(*attr))
}

fn validate_name(name: &str) -> Result<(), DomError> {
    let bad = name.is_empty()
        || name.chars().any(|c| {
            c.is_whitespace() || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
        });
    if bad {
        Err(DomError::InvalidName(name.to_owned()))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Child {
    Element(MemoryElement),
    Text(String),
    Markup(String),
}

#[derive(Default)]
struct ElementData {
    tag: String,
    attributes: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    children: Vec<Child>,
    parent: Weak<RefCell<ElementData>>,
}

/// Handle to an in-memory element.
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoryElement {}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &data.tag)
            .field("id", &data.attributes.get("id"))
            .field("children", &data.children.len())
            .finish()
    }
}

impl MemoryElement {
    fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_ascii_lowercase(),
            ..ElementData::default()
        })))
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// Parent element, if attached.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(Self)
    }

    /// Element children in document order.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.0
            .borrow()
            .children
            .iter()
            .filter_map(|c| match c {
                Child::Element(e) => Some(e.clone()),
                Child::Text(_) | Child::Markup(_) => None,
            })
            .collect()
    }

    /// Number of child nodes of any kind.
    #[must_use]
    pub fn child_node_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    /// Inline style value. `name` is kebab-case.
    #[must_use]
    pub fn inline_style(&self, name: &str) -> Option<String> {
        self.0.borrow().style.get(name).cloned()
    }

    /// Whether the class list contains `name`.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.attribute("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|t| t == name))
    }

    /// Serialized content. Text is escaped, markup is emitted verbatim.
    #[must_use]
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.0.borrow().children {
            match child {
                Child::Element(e) => e.outer_html_into(&mut out),
                Child::Text(t) => escape_into(t, &mut out),
                Child::Markup(m) => out.push_str(m),
            }
        }
        out
    }

    /// Concatenated text of all descendants. Markup contributes its text
    /// with tags stripped.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.0.borrow().children {
            match child {
                Child::Element(e) => out.push_str(&e.text_content()),
                Child::Text(t) => out.push_str(t),
                Child::Markup(m) => strip_tags_into(m, &mut out),
            }
        }
        out
    }

    fn outer_html_into(&self, out: &mut String) {
        let data = self.0.borrow();
        out.push('<');
        out.push_str(&data.tag);
        for (name, value) in &data.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
        if !data.style.is_empty() {
            let style: Vec<String> =
                data.style.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            out.push_str(" style=\"");
            escape_into(&style.join("; "), out);
            out.push('"');
        }
        out.push('>');
        drop(data);
        out.push_str(&self.inner_html());
        out.push_str("</");
        out.push_str(&self.0.borrow().tag);
        out.push('>');
    }

    /// Whether `self` is `other` or one of its ancestors.
    fn is_inclusive_ancestor_of(&self, other: &Self) -> bool {
        let mut cursor = Some(other.clone());
        while let Some(node) = cursor {
            if node == *self {
                return true;
            }
            cursor = node.parent();
        }
        false
    }

    fn check_insert(&self, child: &Self) -> Result<(), DomError> {
        if child.is_inclusive_ancestor_of(self) {
            return Err(DomError::HierarchyRequest);
        }
        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        Ok(())
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

fn strip_tags_into(markup: &str, out: &mut String) {
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
}

impl DomNode for MemoryElement {
    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        self.check_insert(child)?;
        self.0.borrow_mut().children.push(Child::Element(child.clone()));
        Ok(())
    }

    fn prepend_child(&self, child: &Self) -> Result<(), DomError> {
        self.check_insert(child)?;
        self.0
            .borrow_mut()
            .children
            .insert(0, Child::Element(child.clone()));
        Ok(())
    }

    fn remove_child(&self, child: &Self) -> Result<(), DomError> {
        let mut data = self.0.borrow_mut();
        let idx = data
            .children
            .iter()
            .position(|c| matches!(c, Child::Element(e) if e == child))
            .ok_or(DomError::NotFound)?;
        let _ = data.children.remove(idx);
        drop(data);
        child.0.borrow_mut().parent = Weak::new();
        Ok(())
    }

    fn remove_last_child(&self) -> bool {
        let removed = self.0.borrow_mut().children.pop();
        match removed {
            Some(Child::Element(e)) => {
                e.0.borrow_mut().parent = Weak::new();
                true
            }
            Some(Child::Text(_) | Child::Markup(_)) => true,
            None => false,
        }
    }

    fn detach(&self) {
        if let Some(parent) = self.parent() {
            // Parent link guarantees membership.
            let _ = parent.remove_child(self);
        }
    }

    fn child_element_count(&self) -> usize {
        self.0
            .borrow()
            .children
            .iter()
            .filter(|c| matches!(c, Child::Element(_)))
            .count()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .get(&name.to_ascii_lowercase())
            .cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        validate_name(name)?;
        let _ = self
            .0
            .borrow_mut()
            .attributes
            .insert(name.to_ascii_lowercase(), value.to_owned());
        Ok(())
    }

    fn property(&self, name: &str) -> Option<String> {
        match reflected_attribute(name) {
            Some(attr) => self.attribute(attr),
            None => self.0.borrow().properties.get(name).cloned(),
        }
    }

    fn set_property(&self, name: &str, value: &str) -> Result<(), DomError> {
        if let Some(attr) = reflected_attribute(name) {
            return self.set_attribute(attr, value);
        }
        let _ = self
            .0
            .borrow_mut()
            .properties
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn add_class(&self, name: &str) -> Result<(), DomError> {
        validate_name(name)?;
        if self.has_class(name) {
            return Ok(());
        }
        let classes = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {name}", existing.trim())
            }
            _ => name.to_owned(),
        };
        self.set_attribute("class", &classes)
    }

    fn remove_class(&self, name: &str) -> Result<(), DomError> {
        validate_name(name)?;
        let Some(existing) = self.attribute("class") else {
            return Ok(());
        };
        let remaining: Vec<&str> = existing
            .split_ascii_whitespace()
            .filter(|t| *t != name)
            .collect();
        self.set_attribute("class", &remaining.join(" "))
    }

    fn set_style(&self, name: &str, value: &str) -> Result<(), DomError> {
        let mut data = self.0.borrow_mut();
        if value.is_empty() {
            let _ = data.style.remove(name);
        } else {
            let _ = data.style.insert(name.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn computed_style(&self, name: &str) -> Option<String> {
        if let Some(value) = self.inline_style(name) {
            return Some(value);
        }
        (name == "display").then(|| {
            let tag = self.tag();
            if BLOCK_TAGS.contains(&tag.as_str()) {
                "block".to_owned()
            } else {
                "inline".to_owned()
            }
        })
    }

    fn set_inner_html(&self, html: &str) {
        while self.remove_last_child() {}
        if !html.is_empty() {
            self.0
                .borrow_mut()
                .children
                .push(Child::Markup(html.to_owned()));
        }
    }

    fn set_text_content(&self, text: &str) {
        while self.remove_last_child() {}
        if !text.is_empty() {
            self.0
                .borrow_mut()
                .children
                .push(Child::Text(text.to_owned()));
        }
    }
}

/// Factory for [`MemoryElement`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryDocument;

impl MemoryDocument {
    /// Create a factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Document for MemoryDocument {
    type Node = MemoryElement;

    fn create_element(&self, tag: &str) -> Result<MemoryElement, DomError> {
        let valid = tag
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(DomError::InvalidName(tag.to_owned()));
        }
        Ok(MemoryElement::new(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str) -> MemoryElement {
        MemoryDocument.create_element(tag).unwrap()
    }

    #[test]
    fn append_moves_between_parents() {
        let (a, b, c) = (el("div"), el("div"), el("span"));
        a.append_child(&c).unwrap();
        b.append_child(&c).unwrap();
        assert_eq!(a.child_element_count(), 0);
        assert_eq!(b.children(), vec![c.clone()]);
        assert_eq!(c.parent(), Some(b));
    }

    #[test]
    fn cycles_are_rejected() {
        let (a, b) = (el("div"), el("div"));
        a.append_child(&b).unwrap();
        assert_eq!(b.append_child(&a), Err(DomError::HierarchyRequest));
        assert_eq!(a.append_child(&a), Err(DomError::HierarchyRequest));
        assert_eq!(b.child_element_count(), 0);
        assert_eq!(a.children(), vec![b]);
    }

    #[test]
    fn remove_non_child_is_not_found() {
        let (a, b) = (el("div"), el("div"));
        assert_eq!(a.remove_child(&b), Err(DomError::NotFound));
    }

    #[test]
    fn reflected_properties_share_attribute_storage() {
        let a = el("label");
        a.set_property("className", "x y").unwrap();
        a.set_property("htmlFor", "field").unwrap();
        assert_eq!(a.attribute("class").as_deref(), Some("x y"));
        assert_eq!(a.attribute("for").as_deref(), Some("field"));
        a.set_property("value", "42").unwrap();
        assert_eq!(a.property("value").as_deref(), Some("42"));
        assert_eq!(a.attribute("value"), None);
    }

    #[test]
    fn invalid_attribute_names_rejected() {
        let a = el("div");
        assert!(matches!(
            a.set_attribute("bad name", "x"),
            Err(DomError::InvalidName(_))
        ));
        assert!(matches!(
            MemoryDocument.create_element("1div"),
            Err(DomError::InvalidName(_))
        ));
    }

    #[test]
    fn html_is_verbatim_and_text_is_escaped() {
        let a = el("div");
        a.set_inner_html("<b>hi</b>");
        assert_eq!(a.inner_html(), "<b>hi</b>");
        assert_eq!(a.text_content(), "hi");
        a.set_text_content("<b>hi</b>");
        assert_eq!(a.inner_html(), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(a.child_node_count(), 1);
    }

    #[test]
    fn computed_display_defaults_by_tag() {
        assert_eq!(el("div").computed_style("display").as_deref(), Some("block"));
        assert_eq!(
            el("span").computed_style("display").as_deref(),
            Some("inline")
        );
        assert_eq!(el("span").computed_style("color"), None);
    }

    #[test]
    fn outer_html_serializes_children() {
        let a = el("ul");
        let b = el("li");
        b.set_attribute("id", "x").unwrap();
        b.set_style("color", "red").unwrap();
        b.set_text_content("one");
        a.append_child(&b).unwrap();
        assert_eq!(
            a.inner_html(),
            "<li id=\"x\" style=\"color: red\">one</li>"
        );
    }
}
