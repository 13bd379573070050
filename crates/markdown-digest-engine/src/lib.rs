pub mod context;
pub mod error;
pub mod extensions;
pub mod parsing;
pub mod pipeline;
pub mod render;

// Re-export key types for easier usage
pub use context::{ContextKey, ParseContext};
pub use error::ContextError;
pub use extensions::{
    MetadataExtension, MetadataRecognizer, SnippetBuffer, SnippetExtension, SnippetExtractor,
    metadata,
};
pub use parsing::blocks::{BlockKind, BlockNode, Document};
pub use parsing::inline::InlineNode;
pub use pipeline::{DocumentTransform, Extension, Markdown, MarkdownBuilder, ParsedDoc};
