use std::fmt::{self, Debug, Formatter};

use crate::Element;

/// A deferred mutation of one element.
///
/// A modifier closes over the arguments it was built with and runs exactly once, when the node it belongs
/// to is rendered.
pub struct Modifier(Box<dyn FnOnce(&mut dyn Element)>);

impl Modifier {
    /// Wrap a closure as a modifier.
    pub fn new(f: impl FnOnce(&mut dyn Element) + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Run the mutation against `element`, consuming the modifier.
    pub fn apply(self, element: &mut dyn Element) {
        (self.0)(element)
    }
}

impl Debug for Modifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier").finish_non_exhaustive()
    }
}
