//! Plain-text snippet built from a document's paragraphs.
//!
//! The extractor walks the finished tree once per parse, as a
//! [`DocumentTransform`], so the snippet exists whether or not the document
//! is ever rendered.

use crate::context::{ContextKey, ParseContext};
use crate::parsing::blocks::{BlockNode, Document};
use crate::pipeline::{DocumentTransform, Extension, MarkdownBuilder};

use super::buffer::{SEPARATOR, SnippetBuffer};

/// Fills `buf` from the paragraphs of `doc`.
///
/// Blocks are read as siblings at document level: paragraphs nested inside
/// quotes or lists, and every non-paragraph block, contribute nothing. The
/// walk ends as soon as the buffer is full.
pub fn extract(doc: &Document, buf: &mut SnippetBuffer) {
    let mut walk = doc.walk();
    while let Some(node) = walk.next() {
        if buf.is_full() {
            break;
        }
        walk.skip_children();
        if node.is_paragraph() {
            write_paragraph(node, buf);
        }
    }
}

fn write_paragraph(node: &BlockNode, buf: &mut SnippetBuffer) {
    let mut text = String::new();
    for inline in &node.inlines {
        inline.push_plain_text(&mut text);
    }
    // Dropped images leave stray separators behind.
    let sep = SEPARATOR.to_string();
    let words: Vec<&str> = text.split(SEPARATOR).filter(|w| !w.is_empty()).collect();
    buf.write(&words.join(sep.as_str()));
    buf.write_separator();
}

/// Post-parse transform publishing the snippet under [`ContextKey::Snippet`].
///
/// Holds only the capacity; each document gets a fresh [`SnippetBuffer`].
#[derive(Debug, Clone, Copy)]
pub struct SnippetExtractor {
    max: usize,
}

impl SnippetExtractor {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    /// Snippet of `doc` without going through a pipeline.
    pub fn snippet(&self, doc: &Document) -> String {
        let mut buf = SnippetBuffer::new(self.max);
        extract(doc, &mut buf);
        buf.to_snippet()
    }
}

impl DocumentTransform for SnippetExtractor {
    fn transform(&self, doc: &mut Document, ctx: &mut ParseContext) {
        let snippet = self.snippet(doc);
        log::debug!("snippet published: {} bytes", snippet.len());
        ctx.set_snippet(snippet);
    }
}

/// Installs a [`SnippetExtractor`] of capacity `max` bytes.
#[derive(Debug, Clone, Copy)]
pub struct SnippetExtension {
    max: usize,
}

impl SnippetExtension {
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Extension for SnippetExtension {
    fn extend(self, builder: MarkdownBuilder) -> MarkdownBuilder {
        builder
            .transform(SnippetExtractor::new(self.max))
            .produces(ContextKey::Snippet)
    }
}
