use crate::Result;

/// A handle to one renderable document node.
///
/// This is the full set of mutations a [`Modifier`](crate::Modifier) can perform. The trait is object
/// safe: modifiers receive a `&mut dyn Element` and never learn which DOM they are talking to.
///
/// None of the methods report failure. An implementation backed by a real DOM decides what to do
/// with a rejected mutation (the browser binding logs it and moves on).
pub trait Element {
    /// Set the element's id.
    fn set_id(&mut self, id: &str);

    /// Replace the whole class list with `class`.
    fn set_class_name(&mut self, class: &str);

    /// Add a single class token.
    fn add_class(&mut self, class: &str);

    /// Remove a single class token.
    fn remove_class(&mut self, class: &str);

    /// Set (or overwrite) an attribute.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Remove an attribute. Removing a missing attribute does nothing.
    fn remove_attribute(&mut self, name: &str);

    /// Assign a property on the element object, as in `element[name] = value`.
    ///
    /// For reflected properties such as `src` or `href` this also updates the attribute.
    fn set_property(&mut self, name: &str, value: &str);

    /// Set one CSS property in the element's inline style.
    fn set_style_property(&mut self, property: &str, value: &str);

    /// Append a text node containing `text`.
    fn append_text_node(&mut self, text: &str);

    /// Replace the element's content with the given markup.
    fn set_inner_html(&mut self, html: &str);

    /// Register `callback` for `event`. A `once` listener is dropped after its first call.
    fn add_event_listener(&mut self, event: &str, once: bool, callback: Box<dyn FnMut()>);

    /// Register a keyboard listener for `event` that receives the key code of each event.
    fn add_key_listener(&mut self, event: &str, callback: Box<dyn FnMut(u32)>);
}

/// Creates elements and assembles them into a tree.
///
/// This is the half of the DOM that [`Node::render`](crate::Node::render) needs; the
/// [`Element`] half is what modifiers see.
pub trait Document {
    /// The element type this document produces.
    type Element: Element;

    /// Create an element with the given tag. `None` means an HTML element; `Some(ns)` creates the element
    /// in that XML namespace.
    fn create_element(&self, tag: &str, namespace: Option<&str>) -> Result<Self::Element>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&self, parent: &mut Self::Element, child: Self::Element) -> Result<()>;
}
