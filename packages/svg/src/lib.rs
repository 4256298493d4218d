//! # weft-svg
//!
//! Factories for SVG elements and modifiers for SVG presentation attributes.
//!
//! Every element built here is bound to the SVG namespace, so the host document creates a real SVG element
//! instead of an unknown HTML one.
//!
//! ```rust
//! use weft_core::{children, mem::MemDocument, SVG_NAMESPACE};
//! use weft_svg::*;
//!
//! let icon = svg(children![
//!     view_box("0 0 24 24"),
//!     fill("none"),
//!     path(children![d("M4 12h16"), stroke("currentColor"), stroke_width("2")]),
//! ]);
//!
//! let el = icon.render(&MemDocument::new()).unwrap();
//! assert_eq!(el.namespace(), Some(SVG_NAMESPACE));
//! assert_eq!(el.attribute("viewBox"), Some("0 0 24 24"));
//! ```

mod attributes;
mod elements;

pub use attributes::*;
pub use elements::*;
