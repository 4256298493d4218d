//! [`Document`] and [`Element`] over web-sys.
//!
//! Element mutations cannot report errors through the [`Element`] contract. When the browser rejects one
//! (an empty class token, an invalid attribute name) the failure is logged at `warn` and the mutation is
//! skipped.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{AddEventListenerOptions, CssStyleDeclaration, HtmlElement, KeyboardEvent, SvgElement};
use weft_core::{Document, Element, Error, Result};

/// The browser document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    inner: web_sys::Document,
}

impl WebDocument {
    pub fn new(inner: web_sys::Document) -> Self {
        Self { inner }
    }

    /// The document of the current window.
    pub fn current() -> Result<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or(Error::MissingDocument)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<WebElement> {
        self.inner.get_element_by_id(id).map(WebElement::new)
    }

    pub fn as_document(&self) -> &web_sys::Document {
        &self.inner
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn create_element(&self, tag: &str, namespace: Option<&str>) -> Result<WebElement> {
        let created = match namespace {
            Some(namespace) => self.inner.create_element_ns(Some(namespace), tag),
            None => self.inner.create_element(tag),
        };

        created.map(WebElement::new).map_err(|err| Error::CreateElement {
            tag: tag.to_string(),
            reason: format!("{err:?}"),
        })
    }

    fn append_child(&self, parent: &mut WebElement, child: WebElement) -> Result<()> {
        parent
            .inner
            .append_child(&child.inner)
            .map(|_| ())
            .map_err(|err| Error::AppendChild {
                parent: parent.inner.tag_name(),
                reason: format!("{err:?}"),
            })
    }
}

/// A browser element.
///
/// Cloning is cheap and yields another handle to the same DOM node.
#[derive(Debug, Clone, PartialEq)]
pub struct WebElement {
    inner: web_sys::Element,
}

impl WebElement {
    pub fn new(inner: web_sys::Element) -> Self {
        Self { inner }
    }

    pub fn as_element(&self) -> &web_sys::Element {
        &self.inner
    }

    pub fn into_inner(self) -> web_sys::Element {
        self.inner
    }

    fn style(&self) -> Option<CssStyleDeclaration> {
        if let Some(el) = self.inner.dyn_ref::<HtmlElement>() {
            return Some(el.style());
        }
        self.inner.dyn_ref::<SvgElement>().map(SvgElement::style)
    }
}

impl From<web_sys::Element> for WebElement {
    fn from(inner: web_sys::Element) -> Self {
        Self::new(inner)
    }
}

fn warn_on_err<T>(op: &'static str, result: std::result::Result<T, JsValue>) {
    if let Err(err) = result {
        tracing::warn!(op, ?err, "DOM mutation rejected");
    }
}

impl Element for WebElement {
    fn set_id(&mut self, id: &str) {
        self.inner.set_id(id);
    }

    fn set_class_name(&mut self, class: &str) {
        self.inner.set_class_name(class);
    }

    fn add_class(&mut self, class: &str) {
        warn_on_err("add_class", self.inner.class_list().add_1(class));
    }

    fn remove_class(&mut self, class: &str) {
        warn_on_err("remove_class", self.inner.class_list().remove_1(class));
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        warn_on_err("set_attribute", self.inner.set_attribute(name, value));
    }

    fn remove_attribute(&mut self, name: &str) {
        warn_on_err("remove_attribute", self.inner.remove_attribute(name));
    }

    fn set_property(&mut self, name: &str, value: &str) {
        warn_on_err(
            "set_property",
            js_sys::Reflect::set(&self.inner, &JsValue::from_str(name), &JsValue::from_str(value)),
        );
    }

    fn set_style_property(&mut self, property: &str, value: &str) {
        match self.style() {
            Some(style) => warn_on_err("set_style_property", style.set_property(property, value)),
            None => tracing::warn!(
                tag = %self.inner.tag_name(),
                property,
                "element has no inline style"
            ),
        }
    }

    fn append_text_node(&mut self, text: &str) {
        warn_on_err("append_text_node", self.inner.append_with_str_1(text));
    }

    fn set_inner_html(&mut self, html: &str) {
        self.inner.set_inner_html(html);
    }

    fn add_event_listener(&mut self, event: &str, once: bool, callback: Box<dyn FnMut()>) {
        let closure = Closure::wrap(callback);

        let options = AddEventListenerOptions::new();
        options.set_once(once);

        warn_on_err(
            "add_event_listener",
            self.inner.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            ),
        );

        // the listener lives as long as the page; the browser owns it from here
        closure.forget();
    }

    fn add_key_listener(&mut self, event: &str, mut callback: Box<dyn FnMut(u32)>) {
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            callback(ev.key_code())
        });

        warn_on_err(
            "add_key_listener",
            self.inner
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()),
        );

        closure.forget();
    }
}
