//! `web-sys` backend: [`DomNode`] for `web_sys::Element`.
//!
//! Inherent `web-sys` methods share names with [`DomNode`], so every call
//! below is path-qualified.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Element, HtmlElement, Node};

use super::node::{Document, DomNode};
use super::DomError;

fn dom_error(err: &JsValue, name: &str) -> DomError {
    let Some(exception) = err.dyn_ref::<DomException>() else {
        return DomError::Platform(format!("{err:?}"));
    };
    match exception.name().as_str() {
        "HierarchyRequestError" => DomError::HierarchyRequest,
        "NotFoundError" => DomError::NotFound,
        "InvalidCharacterError" => DomError::InvalidName(name.to_owned()),
        _ => DomError::Platform(exception.message()),
    }
}

fn js_to_string(value: &JsValue) -> Option<String> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    value
        .as_string()
        .or_else(|| value.as_bool().map(|b| b.to_string()))
        .or_else(|| value.as_f64().map(|n| n.to_string()))
}

impl DomNode for Element {
    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        Node::append_child(self, child)
            .map(drop)
            .map_err(|e| dom_error(&e, "appendChild"))
    }

    fn prepend_child(&self, child: &Self) -> Result<(), DomError> {
        let first = Node::first_child(self);
        Node::insert_before(self, child, first.as_ref())
            .map(drop)
            .map_err(|e| dom_error(&e, "insertBefore"))
    }

    fn remove_child(&self, child: &Self) -> Result<(), DomError> {
        Node::remove_child(self, child)
            .map(drop)
            .map_err(|e| dom_error(&e, "removeChild"))
    }

    fn remove_last_child(&self) -> bool {
        Node::last_child(self).is_some_and(|last| Node::remove_child(self, &last).is_ok())
    }

    fn detach(&self) {
        Element::remove(self);
    }

    fn child_element_count(&self) -> usize {
        Element::child_element_count(self) as usize
    }

    fn attribute(&self, name: &str) -> Option<String> {
        Element::get_attribute(self, name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        Element::set_attribute(self, name, value).map_err(|e| dom_error(&e, name))
    }

    fn property(&self, name: &str) -> Option<String> {
        Reflect::get(self, &JsValue::from_str(name))
            .ok()
            .as_ref()
            .and_then(js_to_string)
    }

    fn set_property(&self, name: &str, value: &str) -> Result<(), DomError> {
        let key = JsValue::from_str(name);
        let current = Reflect::get(self, &key).unwrap_or(JsValue::UNDEFINED);
        // Keep the property's JS type so `checked = "false"` is not truthy.
        let js_value = if current.as_bool().is_some() {
            JsValue::from_bool(!matches!(value, "" | "false"))
        } else if current.as_f64().is_some() {
            value
                .parse::<f64>()
                .map_or_else(|_| JsValue::from_str(value), JsValue::from_f64)
        } else {
            JsValue::from_str(value)
        };
        match Reflect::set(self, &key, &js_value) {
            Ok(true) => Ok(()),
            Ok(false) => Err(DomError::Platform(format!("property '{name}' is read-only"))),
            Err(e) => Err(dom_error(&e, name)),
        }
    }

    fn add_class(&self, name: &str) -> Result<(), DomError> {
        Element::class_list(self)
            .add_1(name)
            .map_err(|e| dom_error(&e, name))
    }

    fn remove_class(&self, name: &str) -> Result<(), DomError> {
        Element::class_list(self)
            .remove_1(name)
            .map_err(|e| dom_error(&e, name))
    }

    fn set_style(&self, name: &str, value: &str) -> Result<(), DomError> {
        let Some(html) = self.dyn_ref::<HtmlElement>() else {
            return Err(DomError::Platform(format!(
                "<{}> has no inline style",
                Element::tag_name(self)
            )));
        };
        let style = html.style();
        let result = if value.is_empty() {
            style.remove_property(name).map(drop)
        } else {
            style.set_property(name, value)
        };
        result.map_err(|e| dom_error(&e, name))
    }

    fn computed_style(&self, name: &str) -> Option<String> {
        let window = web_sys::window()?;
        let style = window.get_computed_style(self).ok()??;
        style
            .get_property_value(name)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn set_inner_html(&self, html: &str) {
        Element::set_inner_html(self, html);
    }

    fn set_text_content(&self, text: &str) {
        Node::set_text_content(self, Some(text));
    }
}

impl Document for web_sys::Document {
    type Node = Element;

    fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        web_sys::Document::create_element(self, tag).map_err(|e| dom_error(&e, tag))
    }
}
