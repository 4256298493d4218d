//! # weft-html
//!
//! Factories for HTML elements and the modifiers that configure them.
//!
//! Every element function takes a list of children and returns a [`Node`] tagged with the element's name.
//! Every modifier function returns a [`Modifier`] that performs a single mutation when the node is rendered.
//!
//! ```rust
//! use weft_core::mem::MemDocument;
//! use weft_html::prelude::*;
//!
//! let nav = nav(children![
//!     class(["menu", "dark"]),
//!     aria_label("main"),
//!     ul(children![
//!         li(children![a(children![href("/"), text("Home")])]),
//!         li(children![a(children![href("/about"), text("About")])]),
//!     ]),
//! ]);
//!
//! let el = nav.render(&MemDocument::new()).unwrap();
//! assert_eq!(el.class_name(), "menu dark");
//! assert_eq!(el.text_content(), "HomeAbout");
//! ```
//!
//! HTML element names that would collide with a modifier (`title`, `style`) are not generated. Build them
//! with [`weft_core::element`] if you need them.

mod attributes;
mod class;
mod elements;
mod events;

pub use attributes::*;
pub use class::*;
pub use elements::*;
pub use events::*;

pub use weft_core::{children, Modifier, Node, Renderable};

pub mod prelude {
    pub use crate::attributes::*;
    pub use crate::class::*;
    pub use crate::elements::*;
    pub use crate::events::*;
    pub use weft_core::{children, Modifier, Node, Renderable};
}
