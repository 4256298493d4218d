//! # weft
//!
//! Declarative builders for HTML and SVG elements.
//!
//! Element functions such as [`html::div`] take a list of children and return a
//! [`Node`](prelude::Node). Modifier functions such as [`html::class`] or [`svg::fill`] return a
//! [`Modifier`](prelude::Modifier) that sets one thing on the element when the node is rendered.
//! Rendering is left to a document: the in-memory one in [`core::mem`], the `ssr` feature's string
//! renderer, or the `web` feature's browser binding.
//!
//! ```rust
//! use weft::prelude::*;
//!
//! let card = div(children![
//!     class(["card"]),
//!     p(children![text("Saved")]),
//!     svg::svg(children![svg::view_box("0 0 16 16"), svg::path(children![svg::d("M2 8l4 4 8-8")])]),
//! ]);
//!
//! let el = card.render(&weft::core::mem::MemDocument::new()).unwrap();
//! assert_eq!(el.text_content(), "Saved");
//! ```

pub use weft_core as core;

#[cfg(feature = "html")]
pub use weft_html as html;

#[cfg(feature = "svg")]
pub use weft_svg as svg;

#[cfg(feature = "ssr")]
pub use weft_ssr as ssr;

#[cfg(feature = "web")]
pub use weft_web as web;

pub mod prelude {
    pub use weft_core::prelude::*;

    #[cfg(feature = "html")]
    pub use weft_html::prelude::*;

    // SVG names overlap with HTML ones (`width`, `height`, `href`), so they stay behind a path.
    #[cfg(feature = "svg")]
    pub use weft_svg as svg;
}
