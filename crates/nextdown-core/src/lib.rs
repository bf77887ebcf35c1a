//! nextdown-core - serialized UI tree to Markdown
//!
//! This crate provides the node model and the Markdown converter for the
//! component trees that statically generated pages embed as JSON. It does no
//! I/O; fetching and extracting pages lives in the `nextdown` crate.
//!
//! # Architecture
//!
//! ```text
//! JSON content ──decode──▶ ┌───────────┐
//!                          │ Node tree │ ──convert──▶ Markdown String
//! Node constructors ──────▶└───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use nextdown_core::{convert, Element, Node};
//!
//! let doc = Node::sequence(vec![
//!     Element::new("h1").with_children("Title").into(),
//!     Element::new("p")
//!         .with_children(vec![
//!             Node::text("Body "),
//!             Element::new("strong").with_children("text").into(),
//!         ])
//!         .into(),
//! ]);
//!
//! assert_eq!(convert(&doc), "\n# Title\n\nBody **text**\n");
//! ```

mod convert;
mod decode;
pub mod node;
pub mod rules;

pub use convert::convert;
pub use decode::from_str;
pub use node::{Element, Node, Props, ELEMENT_MARKER};
pub use rules::Rule;

/// Error type for decoding serialized trees
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
