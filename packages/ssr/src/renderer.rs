use std::fmt::Write;

use weft_core::{
    mem::{MemDocument, MemElement, MemNode},
    Node, Result,
};

/// HTML elements that never have content and are written as `<tag/>`.
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

/// Serializes in-memory elements to HTML.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Declare the namespace with an `xmlns` attribute on every element whose namespace differs from its
    /// parent's, so the markup also parses standalone.
    pub xmlns: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { xmlns: true }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `node` into a fresh in-memory document and serialize the result.
    pub fn render_node(&self, node: Node) -> Result<String> {
        let element = node.render(&MemDocument::new())?;
        self.render_element(&element)
    }

    pub fn render_element(&self, element: &MemElement) -> Result<String> {
        let mut buf = String::new();
        self.render_to(&mut buf, element)?;
        Ok(buf)
    }

    pub fn render_to(&self, buf: &mut impl Write, element: &MemElement) -> Result<()> {
        tracing::trace!(tag = element.tag(), "serializing element");
        self.write_element(buf, element, None)?;
        Ok(())
    }

    fn write_element(
        &self,
        buf: &mut impl Write,
        element: &MemElement,
        parent_namespace: Option<&str>,
    ) -> std::fmt::Result {
        let tag = element.tag();
        write!(buf, "<{tag}")?;

        if let Some(namespace) = element.namespace() {
            if self.xmlns && Some(namespace) != parent_namespace && element.attribute("xmlns").is_none() {
                write!(buf, " xmlns=\"{namespace}\"")?;
            }
        }

        if !element.classes().is_empty() {
            write_attribute(buf, "class", &element.class_name())?;
        }

        for (name, value) in element.attributes() {
            write_attribute(buf, name, value)?;
        }

        // properties reflect onto attributes of the same name
        for (name, value) in element.properties() {
            if element.attribute(name).is_none() {
                write_attribute(buf, name, value)?;
            }
        }

        let mut styles = element.styles().peekable();
        if styles.peek().is_some() {
            write!(buf, " style=\"")?;
            for (property, value) in styles {
                if !valid_name(property) || property.contains([':', ';']) {
                    tracing::warn!(property, "skipping style property with an invalid name");
                    continue;
                }
                write!(buf, "{property}:{};", askama_escape::escape(value, askama_escape::Html))?;
            }
            write!(buf, "\"")?;
        }

        if element.namespace().is_none() && VOID_ELEMENTS.contains(&tag) {
            return write!(buf, "/>");
        }

        write!(buf, ">")?;

        for child in element.children() {
            match child {
                MemNode::Element(child) => self.write_element(buf, child, element.namespace())?,
                MemNode::Text(text) => write!(buf, "{}", askama_escape::escape(text, askama_escape::Html))?,
                MemNode::Html(html) => write!(buf, "{html}")?,
            }
        }

        write!(buf, "</{tag}>")
    }
}

fn write_attribute(buf: &mut impl Write, name: &str, value: &str) -> std::fmt::Result {
    if !valid_name(name) {
        tracing::warn!(name, "skipping attribute with an invalid name");
        return Ok(());
    }
    write!(buf, " {name}=\"{}\"", askama_escape::escape(value, askama_escape::Html))
}

// Names that would end the attribute or the tag early cannot be written.
fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}
