use std::{cell::RefCell, rc::Rc};

use weft_core::{
    children, element, element_ns,
    mem::{MemDocument, MemNode},
    Document, Element, Error, Modifier, Result, SVG_NAMESPACE,
};

fn log(events: &Rc<RefCell<Vec<String>>>, label: &str) -> Modifier {
    let events = events.clone();
    let label = label.to_string();
    Modifier::new(move |el| {
        events.borrow_mut().push(label.clone());
        el.append_text_node(&label);
    })
}

#[test]
fn modifiers_and_children_apply_in_caller_order() {
    let events = Rc::new(RefCell::new(Vec::new()));

    let div = element(
        "div",
        children![
            log(&events, "first"),
            element("span", children![log(&events, "inner")]),
            log(&events, "last"),
        ],
    )
    .render(&MemDocument::new())
    .unwrap();

    assert_eq!(*events.borrow(), ["first", "inner", "last"]);

    let kinds: Vec<&str> = div
        .children()
        .iter()
        .map(|child| match child {
            MemNode::Element(el) => el.tag(),
            MemNode::Text(text) => text.as_str(),
            MemNode::Html(_) => "html",
        })
        .collect();
    assert_eq!(kinds, ["first", "span", "last"]);
}

#[test]
fn fragments_flatten_into_the_parent() {
    let items: Vec<_> = (0..3).map(|_| element("li", children![])).collect();
    let ul = element("ul", children![items]).render(&MemDocument::new()).unwrap();

    assert_eq!(ul.child_elements().count(), 3);
}

#[test]
fn namespaces_carry_through_to_the_document() {
    let svg = element_ns(SVG_NAMESPACE, "svg", children![element_ns(SVG_NAMESPACE, "path", children![])])
        .render(&MemDocument::new())
        .unwrap();

    assert_eq!(svg.namespace(), Some(SVG_NAMESPACE));
    assert_eq!(svg.find("path").and_then(|p| p.namespace()), Some(SVG_NAMESPACE));

    let div = element("div", children![]).render(&MemDocument::new()).unwrap();
    assert_eq!(div.namespace(), None);
}

/// A document that refuses to create one particular tag.
struct Picky;

impl Document for Picky {
    type Element = weft_core::mem::MemElement;

    fn create_element(&self, tag: &str, namespace: Option<&str>) -> Result<Self::Element> {
        if tag == "blink" {
            return Err(Error::CreateElement {
                tag: tag.to_string(),
                reason: "not supported".to_string(),
            });
        }
        MemDocument.create_element(tag, namespace)
    }

    fn append_child(&self, parent: &mut Self::Element, child: Self::Element) -> Result<()> {
        MemDocument.append_child(parent, child)
    }
}

#[test]
fn document_failures_surface_from_render() {
    let err = element("div", children![element("blink", children![])])
        .render(&Picky)
        .unwrap_err();

    assert!(matches!(err, Error::CreateElement { ref tag, .. } if tag == "blink"));
    assert_eq!(err.to_string(), "failed to create <blink>: not supported");
}

#[test]
fn modifiers_only_see_the_element_contract() {
    fn touch(el: &mut dyn Element) {
        el.set_style_property("color", "red");
    }

    let p = element("p", children![Modifier::new(touch)])
        .render(&MemDocument::new())
        .unwrap();
    assert_eq!(p.style("color"), Some("red"));
}
