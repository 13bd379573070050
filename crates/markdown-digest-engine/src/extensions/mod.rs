//! Extensions that publish per-document values into the parse context.

pub mod buffer;
pub mod metadata;
pub mod snippet;

pub use buffer::SnippetBuffer;
pub use metadata::{MetadataExtension, MetadataRecognizer};
pub use snippet::{SnippetExtension, SnippetExtractor};
