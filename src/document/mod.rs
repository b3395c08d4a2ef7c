//! Document tree capability
//!
//! The rewriter only needs to query elements by selector, read and write
//! attributes, and serialize the result. Hosts with their own DOM implement
//! [`DocumentTree`]; [`HtmlDocument`] covers raw HTML parsed with kuchiki.

pub mod html_document;

pub use html_document::{HtmlDocument, HtmlElement};

/// Errors raised by document tree operations
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// A selector could not be parsed
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Writing the tree back to text failed
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8
    #[error("Serialized document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// An element handle inside a [`DocumentTree`]
///
/// Attribute writes go through a shared handle, mirroring how a live DOM
/// is mutated in place.
pub trait DocumentElement: Sized {
    /// Attribute value, if present
    fn attr(&self, name: &str) -> Option<String>;

    /// Set or replace an attribute value
    fn set_attr(&self, name: &str, value: &str);

    /// Descendant elements matching `selector`, in document order
    fn select(&self, selector: &str) -> Result<Vec<Self>, DocumentError>;
}

/// A mutable document tree
pub trait DocumentTree {
    type Element: DocumentElement;

    /// Elements matching `selector`, in document order
    fn select(&self, selector: &str) -> Result<Vec<Self::Element>, DocumentError>;

    /// Serialize the (possibly rewritten) tree to text
    fn serialize(&self) -> Result<String, DocumentError>;
}
