//! An in-memory DOM.
//!
//! [`MemDocument`] and [`MemElement`] implement the [`Document`] and [`Element`] contracts without a
//! browser. Server-side rendering builds on them, and so do tests that want to look at what a modifier did.
//!
//! The semantics follow the DOM where it matters for inspection: the class list is a token set, attributes
//! keep their insertion order and are overwritten in place, and `set_inner_html` replaces the content.
//! The `class` and `style` attributes are views of the class list and the inline declarations.

use std::fmt::{self, Debug, Formatter};

use crate::{Document, Element, Result};

/// A document that builds [`MemElement`] trees.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemDocument;

impl MemDocument {
    /// Create a new in-memory document.
    pub fn new() -> Self {
        Self
    }
}

impl Document for MemDocument {
    type Element = MemElement;

    fn create_element(&self, tag: &str, namespace: Option<&str>) -> Result<MemElement> {
        Ok(MemElement::new(tag, namespace))
    }

    fn append_child(&self, parent: &mut MemElement, child: MemElement) -> Result<()> {
        parent.children.push(MemNode::Element(child));
        Ok(())
    }
}

/// A child of a [`MemElement`].
#[derive(Debug)]
pub enum MemNode {
    /// A nested element.
    Element(MemElement),

    /// A text node.
    Text(String),

    /// Raw markup assigned through `set_inner_html`.
    Html(String),
}

enum Callback {
    Plain(Box<dyn FnMut()>),
    Key(Box<dyn FnMut(u32)>),
}

struct Listener {
    event: String,
    once: bool,
    callback: Callback,
}

impl Debug for Listener {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let kind = match self.callback {
            Callback::Plain(_) => "plain",
            Callback::Key(_) => "key",
        };
        f.debug_struct("Listener")
            .field("event", &self.event)
            .field("once", &self.once)
            .field("kind", &kind)
            .finish()
    }
}

/// An element living in memory.
#[derive(Debug)]
pub struct MemElement {
    tag: String,
    namespace: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    properties: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    children: Vec<MemNode>,
    listeners: Vec<Listener>,
}

impl MemElement {
    /// Create an empty element.
    pub fn new(tag: &str, namespace: Option<&str>) -> Self {
        Self {
            tag: tag.to_string(),
            namespace: namespace.map(str::to_string),
            classes: Vec::new(),
            attributes: Vec::new(),
            properties: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The class tokens, in the order they were added.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The class list joined by single spaces, as the `className` property reads it.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        lookup(&self.attributes, name)
    }

    /// Attributes in insertion order. The class list and inline styles are not included.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        lookup(&self.properties, name)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        lookup(&self.styles, property)
    }

    /// Inline style declarations in the order they were first set.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[MemNode] {
        &self.children
    }

    /// Child elements, skipping text and markup.
    pub fn child_elements(&self) -> impl Iterator<Item = &MemElement> {
        self.children.iter().filter_map(|child| match child {
            MemNode::Element(el) => Some(el),
            _ => None,
        })
    }

    /// The concatenated text of every descendant text node.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                MemNode::Element(el) => el.collect_text(out),
                MemNode::Text(text) => out.push_str(text),
                MemNode::Html(_) => {}
            }
        }
    }

    /// Depth-first search for the first element (including `self`) with the given tag.
    pub fn find(&self, tag: &str) -> Option<&MemElement> {
        if self.tag == tag {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find(tag))
    }

    /// Mutable version of [`MemElement::find`].
    pub fn find_mut(&mut self, tag: &str) -> Option<&mut MemElement> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            MemNode::Element(el) => el.find_mut(tag),
            _ => None,
        })
    }

    /// Number of listeners registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.iter().filter(|l| l.event == event).count()
    }

    /// Fire `event`, calling each plain listener for it in registration order.
    ///
    /// One-shot listeners are removed after they run. Returns the number of listeners called.
    pub fn dispatch(&mut self, event: &str) -> usize {
        let mut fired = 0;
        self.listeners.retain_mut(|listener| {
            if listener.event != event {
                return true;
            }
            match &mut listener.callback {
                Callback::Plain(callback) => {
                    callback();
                    fired += 1;
                    !listener.once
                }
                Callback::Key(_) => true,
            }
        });
        fired
    }

    /// Fire a keyboard `event` carrying `key_code` to each key listener for it.
    ///
    /// Returns the number of listeners called.
    pub fn dispatch_key(&mut self, event: &str, key_code: u32) -> usize {
        let mut fired = 0;
        for listener in self.listeners.iter_mut().filter(|l| l.event == event) {
            if let Callback::Key(callback) = &mut listener.callback {
                callback(key_code);
                fired += 1;
            }
        }
        fired
    }
}

impl MemElement {
    // Assigning the style attribute replaces every inline declaration.
    fn set_style_text(&mut self, text: &str) {
        self.styles.clear();
        for declaration in text.split(';') {
            match declaration.split_once(':') {
                Some((property, value)) => self.set_style_property(property.trim(), value.trim()),
                None if declaration.trim().is_empty() => {}
                None => tracing::warn!(declaration, "ignoring malformed style declaration"),
            }
        }
    }
}

impl Element for MemElement {
    fn set_id(&mut self, id: &str) {
        self.set_attribute("id", id);
    }

    fn set_class_name(&mut self, class: &str) {
        self.classes.clear();
        for token in class.split_whitespace() {
            if !self.has_class(token) {
                self.classes.push(token.to_string());
            }
        }
    }

    fn add_class(&mut self, class: &str) {
        if !valid_token(class) {
            tracing::warn!(class, "ignoring invalid class token");
            return;
        }
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        if !valid_token(class) {
            tracing::warn!(class, "ignoring invalid class token");
            return;
        }
        self.classes.retain(|c| c != class);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if name == "class" {
            self.set_class_name(value);
            return;
        }
        if name == "style" {
            self.set_style_text(value);
            return;
        }
        upsert(&mut self.attributes, name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        if name == "class" {
            self.classes.clear();
            return;
        }
        if name == "style" {
            self.styles.clear();
            return;
        }
        self.attributes.retain(|(k, _)| k != name);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        upsert(&mut self.properties, name, value);
    }

    fn set_style_property(&mut self, property: &str, value: &str) {
        if property.is_empty() {
            return;
        }
        if value.is_empty() {
            self.styles.retain(|(k, _)| k != property);
            return;
        }
        upsert(&mut self.styles, property, value);
    }

    fn append_text_node(&mut self, text: &str) {
        self.children.push(MemNode::Text(text.to_string()));
    }

    fn set_inner_html(&mut self, html: &str) {
        self.children.clear();
        if !html.is_empty() {
            self.children.push(MemNode::Html(html.to_string()));
        }
    }

    fn add_event_listener(&mut self, event: &str, once: bool, callback: Box<dyn FnMut()>) {
        self.listeners.push(Listener {
            event: event.to_string(),
            once,
            callback: Callback::Plain(callback),
        });
    }

    fn add_key_listener(&mut self, event: &str, callback: Box<dyn FnMut(u32)>) {
        self.listeners.push(Listener {
            event: event.to_string(),
            once: false,
            callback: Callback::Key(callback),
        });
    }
}

// DOMTokenList rejects empty tokens and tokens containing whitespace.
fn valid_token(token: &str) -> bool {
    !token.is_empty() && !token.contains(char::is_whitespace)
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

fn upsert(pairs: &mut Vec<(String, String)>, name: &str, value: &str) {
    match pairs.iter_mut().find(|(k, _)| k == name) {
        Some((_, existing)) => *existing = value.to_string(),
        None => pairs.push((name.to_string(), value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn class_list_behaves_like_a_token_set() {
        let mut el = MemElement::new("div", None);
        el.set_class_name("a  b a");
        assert_eq!(el.classes(), ["a", "b"]);

        el.add_class("b");
        el.add_class("c");
        el.remove_class("a");
        assert_eq!(el.class_name(), "b c");

        el.add_class("");
        el.remove_class("");
        assert_eq!(el.class_name(), "b c");
    }

    #[test]
    fn attributes_overwrite_in_place() {
        let mut el = MemElement::new("a", None);
        el.set_attribute("href", "/one");
        el.set_id("link");
        el.set_attribute("href", "/two");

        let attrs: Vec<_> = el.attributes().collect();
        assert_eq!(attrs, [("href", "/two"), ("id", "link")]);

        el.remove_attribute("href");
        assert_eq!(el.attribute("href"), None);
    }

    #[test]
    fn inner_html_replaces_children() {
        let mut el = MemElement::new("div", None);
        el.append_text_node("gone");
        el.set_inner_html("<b>kept</b>");

        assert_eq!(el.children().len(), 1);
        assert!(matches!(&el.children()[0], MemNode::Html(html) if html == "<b>kept</b>"));
        assert_eq!(el.text_content(), "");
    }

    #[test]
    fn once_listeners_fire_a_single_time() {
        let hits = Rc::new(Cell::new(0));
        let mut el = MemElement::new("button", None);

        let h = hits.clone();
        el.add_event_listener("click", true, Box::new(move || h.set(h.get() + 1)));
        let h = hits.clone();
        el.add_event_listener("click", false, Box::new(move || h.set(h.get() + 10)));

        assert_eq!(el.dispatch("click"), 2);
        assert_eq!(el.dispatch("click"), 1);
        assert_eq!(hits.get(), 21);
        assert_eq!(el.listener_count("click"), 1);
    }

    #[test]
    fn key_listeners_receive_the_code() {
        let seen = Rc::new(Cell::new(0));
        let mut el = MemElement::new("input", None);

        let s = seen.clone();
        el.add_key_listener("keyup", Box::new(move |code| s.set(code)));

        assert_eq!(el.dispatch("keyup"), 0);
        assert_eq!(el.dispatch_key("keyup", 13), 1);
        assert_eq!(seen.get(), 13);
    }

    #[test]
    fn key_dispatch_skips_plain_listeners() {
        let plain = Rc::new(Cell::new(0));
        let keys = Rc::new(Cell::new(0));
        let mut el = MemElement::new("input", None);

        let p = plain.clone();
        el.add_event_listener("keydown", false, Box::new(move || p.set(p.get() + 1)));
        let k = keys.clone();
        el.add_key_listener("keydown", Box::new(move |code| k.set(code)));

        assert_eq!(el.dispatch_key("keydown", 27), 1);
        assert_eq!(plain.get(), 0);
        assert_eq!(keys.get(), 27);
        assert_eq!(el.listener_count("keydown"), 2);
    }

    #[test]
    fn empty_style_value_removes_the_declaration() {
        let mut el = MemElement::new("p", None);
        el.set_style_property("color", "red");
        el.set_style_property("margin", "0");
        el.set_style_property("color", "");

        assert_eq!(el.style("color"), None);
        assert_eq!(el.styles().collect::<Vec<_>>(), [("margin", "0")]);
    }

    #[test]
    fn style_attribute_is_the_inline_declaration_list() {
        let mut el = MemElement::new("p", None);
        el.set_style_property("color", "red");
        el.set_attribute("style", "margin: 0; padding:1px;");

        assert_eq!(el.attribute("style"), None);
        assert_eq!(el.styles().collect::<Vec<_>>(), [("margin", "0"), ("padding", "1px")]);

        el.set_style_property("color", "blue");
        el.remove_attribute("style");
        assert_eq!(el.styles().count(), 0);
    }

    #[test]
    fn find_mut_reaches_nested_elements() {
        let clicks = Rc::new(Cell::new(0));
        let mut form = MemElement::new("form", None);
        let mut button = MemElement::new("button", None);
        let c = clicks.clone();
        button.add_event_listener("click", false, Box::new(move || c.set(c.get() + 1)));
        form.children.push(MemNode::Element(button));

        assert!(form.find_mut("select").is_none());
        let button = form.find_mut("button").unwrap();
        assert_eq!(button.dispatch("click"), 1);
        assert_eq!(clicks.get(), 1);
    }
}
