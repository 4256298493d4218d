//! weft for the browser.
//!
//! ## Overview
//! ------------
//! This crate implements the weft [`Document`](weft_core::Document) and [`Element`](weft_core::Element)
//! contracts with web-sys, so nodes built with `weft-html` and `weft-svg` render straight into the page.
//! Modifiers run against real DOM elements, SVG elements are created with `createElementNS`, and listeners
//! are registered with `addEventListener` and kept alive for the lifetime of the page.
//!
//! ```rust, ignore
//! use weft_html::prelude::*;
//!
//! fn main() {
//!     weft_web::init_logger(tracing::Level::DEBUG);
//!
//!     let app = div(children![
//!         class(["counter"]),
//!         button(children![text("Click me"), add_click_listener(|| tracing::info!("clicked"))]),
//!     ]);
//!
//!     weft_web::mount(app).expect("failed to mount");
//! }
//! ```
//!
//! ## Tracing
//! -----------
//! DOM mutations the browser rejects are logged at `warn` instead of being raised. [`init_logger`] forwards
//! `tracing` events to the browser console.

pub use crate::cfg::Config;
pub use crate::dom::{WebDocument, WebElement};

use weft_core::{Document, Error, Node, Result};

mod cfg;
mod dom;

/// Render `node` into the current document without attaching it anywhere.
pub fn render(node: Node) -> Result<WebElement> {
    let document = WebDocument::current()?;
    node.render(&document)
}

/// Render `node` and append it to the element with id `main`.
///
/// Returns a handle to the mounted element.
pub fn mount(node: Node) -> Result<WebElement> {
    mount_with_config(node, Config::default())
}

/// Render `node` and append it to the root element named by `cfg`.
pub fn mount_with_config(node: Node, cfg: Config) -> Result<WebElement> {
    let document = WebDocument::current()?;
    let mut root = document
        .get_element_by_id(&cfg.rootname)
        .ok_or_else(|| Error::MissingRoot(cfg.rootname.clone()))?;

    if cfg.replace {
        root.as_element().set_inner_html("");
    }

    let element = node.render(&document)?;
    document.append_child(&mut root, element.clone())?;

    tracing::debug!(root = %cfg.rootname, replace = cfg.replace, "mounted node");
    Ok(element)
}

/// Send `tracing` events up to `level` to the browser console.
///
/// This installs a global subscriber and panics if one is already set, so call it once at startup.
pub fn init_logger(level: tracing::Level) {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
