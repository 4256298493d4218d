use crate::{Document, Modifier, Result};

/// Anything that can appear in an element's child list.
#[derive(Debug)]
pub enum Renderable {
    /// A child element.
    Node(Node),

    /// A mutation of the parent element.
    Modifier(Modifier),

    /// A run of renderables spliced into the parent in order.
    Fragment(Vec<Renderable>),
}

impl Renderable {
    /// An empty fragment. Renders to nothing.
    pub fn empty() -> Self {
        Renderable::Fragment(Vec::new())
    }

    fn render_into<D: Document>(self, document: &D, parent: &mut D::Element) -> Result<()> {
        match self {
            Renderable::Node(node) => {
                let child = node.render(document)?;
                document.append_child(parent, child)
            }
            Renderable::Modifier(modifier) => {
                modifier.apply(parent);
                Ok(())
            }
            Renderable::Fragment(children) => {
                for child in children {
                    child.render_into(document, parent)?;
                }
                Ok(())
            }
        }
    }
}

impl From<Node> for Renderable {
    fn from(node: Node) -> Self {
        Renderable::Node(node)
    }
}

impl From<Modifier> for Renderable {
    fn from(modifier: Modifier) -> Self {
        Renderable::Modifier(modifier)
    }
}

impl<T: Into<Renderable>> From<Vec<T>> for Renderable {
    fn from(children: Vec<T>) -> Self {
        Renderable::Fragment(children.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Renderable>> From<Option<T>> for Renderable {
    fn from(child: Option<T>) -> Self {
        match child {
            Some(child) => Renderable::Fragment(vec![child.into()]),
            None => Renderable::empty(),
        }
    }
}

/// An element description: a tag, an optional XML namespace, and the children to apply to it.
///
/// Nodes are inert until [`Node::render`] hands them to a [`Document`].
#[derive(Debug)]
pub struct Node {
    tag: &'static str,
    namespace: Option<&'static str>,
    children: Vec<Renderable>,
}

impl Node {
    /// The tag name this node renders as.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The XML namespace, if this is not an HTML element.
    pub fn namespace(&self) -> Option<&'static str> {
        self.namespace
    }

    /// The children in the order they will be applied.
    pub fn children(&self) -> &[Renderable] {
        &self.children
    }

    /// Append one more child.
    pub fn with(mut self, child: impl Into<Renderable>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Create the element in `document` and apply every child in order.
    ///
    /// Modifiers run against the new element; child nodes are rendered recursively and appended at the
    /// position they appear in.
    pub fn render<D: Document>(self, document: &D) -> Result<D::Element> {
        tracing::trace!(tag = self.tag, namespace = ?self.namespace, "rendering node");

        let mut element = document.create_element(self.tag, self.namespace)?;
        for child in self.children {
            child.render_into(document, &mut element)?;
        }
        Ok(element)
    }
}

/// Build an HTML element node with the given tag.
pub fn element<I>(tag: &'static str, children: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Renderable>,
{
    Node {
        tag,
        namespace: None,
        children: children.into_iter().map(Into::into).collect(),
    }
}

/// Build an element node bound to an XML namespace.
pub fn element_ns<I>(namespace: &'static str, tag: &'static str, children: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Renderable>,
{
    Node {
        tag,
        namespace: Some(namespace),
        children: children.into_iter().map(Into::into).collect(),
    }
}
