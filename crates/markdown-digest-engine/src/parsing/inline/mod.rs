//! # Inline Nodes
//!
//! Inline content of leaf blocks (paragraphs, headings, text blocks).
//! Tokenizing is done by `pulldown-cmark`; this module only owns the
//! node type and the plain-text projection used by the snippet extractor.

pub mod types;

pub use types::{InlineNode, alt_text};
