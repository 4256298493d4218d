//! Tests that ensure nodes become the right DOM elements.
//!
//! These run in a browser:
//!
//! wasm-pack test packages/web --chrome --headless
#![cfg(target_arch = "wasm32")]

use std::{cell::Cell, rc::Rc};

use wasm_bindgen_test::*;
use web_sys::{Event, EventTarget};
use weft_core::{children, Error, Node};
use weft_html::prelude::*;
use weft_core::Document;
use weft_web::{Config, WebDocument};

wasm_bindgen_test_configure!(run_in_browser);

fn render(node: Node) -> web_sys::Element {
    weft_web::render(node).unwrap().into_inner()
}

#[wasm_bindgen_test]
fn nested_divs() {
    let el = render(div(children![div(children![div(children![])])]));
    assert_eq!(&el.inner_html(), "<div><div></div></div>");
}

#[wasm_bindgen_test]
fn div_with_attributes() {
    let el = render(div(children![id("id-here"), class(["two classes"]), aria_label("box")]));

    assert_eq!(&el.id(), "id-here");
    assert!(el.class_list().contains("two"));
    assert!(el.class_list().contains("classes"));
    assert_eq!(el.class_list().length(), 2);
    assert_eq!(el.get_attribute("aria-label").as_deref(), Some("box"));
}

#[wasm_bindgen_test]
fn empty_class_tokens_are_ignored() {
    let el = render(div(children![add_class(["a b"]), remove_class(["a  x"])]));
    assert_eq!(el.class_name(), "b");
}

#[wasm_bindgen_test]
fn svg_elements_use_the_svg_namespace() {
    let el = render(weft_svg::svg(children![weft_svg::circle(children![weft_svg::r("5")])]));

    assert_eq!(el.namespace_uri().as_deref(), Some(weft_core::SVG_NAMESPACE));
    assert_eq!(el.inner_html(), r#"<circle r="5"></circle>"#);
}

#[wasm_bindgen_test]
fn style_and_text() {
    let el = render(p(children![style("color", "red"), text("hi")]));
    assert_eq!(el.outer_html(), r#"<p style="color: red;">hi</p>"#);
}

#[wasm_bindgen_test]
fn click_event() {
    let clicked = Rc::new(Cell::new(0));
    let c = clicked.clone();

    let el = render(div(children![add_click_listener(move || c.set(c.get() + 1))]));
    let target = EventTarget::from(el);
    target.dispatch_event(&Event::new("click").unwrap()).unwrap();
    target.dispatch_event(&Event::new("click").unwrap()).unwrap();

    assert_eq!(clicked.get(), 2);
}

#[wasm_bindgen_test]
fn once_listener_fires_once() {
    let clicked = Rc::new(Cell::new(0));
    let c = clicked.clone();

    let el = render(div(children![add_event_listener_once("ping", move || c.set(c.get() + 1))]));
    let target = EventTarget::from(el);
    target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
    target.dispatch_event(&Event::new("ping").unwrap()).unwrap();

    assert_eq!(clicked.get(), 1);
}

#[wasm_bindgen_test]
fn mount_appends_to_the_root() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_id("weft-root");
    root.set_inner_html("<span>old</span>");
    document.body().unwrap().append_child(&root).unwrap();

    weft_web::mount_with_config(p(children![text("one")]), Config::new().rootname("weft-root")).unwrap();
    assert_eq!(root.inner_html(), "<span>old</span><p>one</p>");

    weft_web::mount_with_config(
        p(children![text("two")]),
        Config::new().rootname("weft-root").replace(true),
    )
    .unwrap();
    assert_eq!(root.inner_html(), "<p>two</p>");

    root.remove();
}

#[wasm_bindgen_test]
fn mount_without_root_fails() {
    let err = weft_web::mount_with_config(div(children![]), Config::new().rootname("nope")).unwrap_err();
    assert!(matches!(err, Error::MissingRoot(ref id) if id == "nope"));
}

#[wasm_bindgen_test]
fn document_wraps_the_window_document() {
    let document = WebDocument::current().unwrap();
    let el = document.create_element("section", None).unwrap().into_inner();
    el.set_id("weft-section");
    document.as_document().body().unwrap().append_child(&el).unwrap();

    assert!(document.get_element_by_id("weft-section").is_some());
    el.remove();
}
