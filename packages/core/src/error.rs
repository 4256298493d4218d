/// Errors raised while composing nodes into a document.
///
/// Modifiers never fail; only creating and attaching elements can, and only because the host DOM said no.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document refused to create an element.
    #[error("failed to create <{tag}>: {reason}")]
    CreateElement {
        /// The tag that was requested.
        tag: String,
        /// What the document reported.
        reason: String,
    },

    /// The document refused to append a child element.
    #[error("failed to append a child to <{parent}>: {reason}")]
    AppendChild {
        /// The tag of the parent element.
        parent: String,
        /// What the document reported.
        reason: String,
    },

    /// There is no document to render into.
    #[error("no document is available")]
    MissingDocument,

    /// The element nodes should be mounted under does not exist.
    #[error("no element with id `{0}` to mount into")]
    MissingRoot(String),

    /// Writing rendered output failed.
    #[error("failed to write rendered output: {0}")]
    Format(#[from] std::fmt::Error),
}

/// A `Result` defaulting to weft's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
