//! weft-core: the seam between weft's builder functions and whatever DOM they end up mutating.
//!
//! Two contracts live here:
//! - [`Element`]: a handle to one renderable node, exposing the mutations a [`Modifier`] may perform.
//! - [`Document`]: the factory that creates elements (optionally bound to an XML namespace) and appends
//!   them to each other.
//!
//! Builder functions in `weft-html` and `weft-svg` produce [`Node`]s made of [`Renderable`]s. Nothing
//! touches a DOM until [`Node::render`] is called with a concrete [`Document`]: [`mem::MemDocument`]
//! in this crate, or the browser document in `weft-web`.
//!
//! ```rust
//! use weft_core::{children, element, mem::MemDocument, Modifier};
//!
//! let node = element(
//!     "p",
//!     children![Modifier::new(|el| el.append_text_node("hello"))],
//! );
//! let p = node.render(&MemDocument::new()).unwrap();
//! assert_eq!(p.text_content(), "hello");
//! ```

mod element;
mod error;
pub mod mem;
mod modifier;
mod node;

pub use crate::element::{Document, Element};
pub use crate::error::{Error, Result};
pub use crate::modifier::Modifier;
pub use crate::node::{element, element_ns, Node, Renderable};

/// The XML namespace SVG elements are created in.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// The XML namespace of HTML elements.
///
/// Elements without an explicit namespace are HTML elements, so the factories never pass this one.
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Collect a heterogeneous list of children into a `Vec<Renderable>`.
///
/// ```rust
/// use weft_core::{children, element, Modifier, Renderable};
///
/// let list: Vec<Renderable> = children![
///     Modifier::new(|el| el.set_id("x")),
///     element("span", children![]),
/// ];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! children {
    () => {
        ::std::vec::Vec::<$crate::Renderable>::new()
    };
    ($($child:expr),+ $(,)?) => {
        ::std::vec![$($crate::Renderable::from($child)),+]
    };
}

pub mod prelude {
    //! Common imports for code that composes nodes by hand.
    pub use crate::children;
    pub use crate::{element, element_ns, Document, Element, Modifier, Node, Renderable};
    pub use crate::{HTML_NAMESPACE, SVG_NAMESPACE};
}
