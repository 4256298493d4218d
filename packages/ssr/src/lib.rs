//! Render weft nodes to HTML strings.
//!
//! Nodes are rendered into the in-memory DOM from `weft-core` and then serialized. Listeners have nowhere to
//! go in a string and are dropped.
//!
//! ```rust
//! use weft_core::children;
//! use weft_html::{class, p, text};
//!
//! let html = weft_ssr::render(p(children![class(["lead"]), text("Hello")])).unwrap();
//! assert_eq!(html, r#"<p class="lead">Hello</p>"#);
//! ```

pub mod renderer;

use weft_core::{Node, Result};

pub use crate::renderer::Renderer;

/// A convenience function to render a node to a string with the default [`Renderer`].
pub fn render(node: Node) -> Result<String> {
    Renderer::new().render_node(node)
}
