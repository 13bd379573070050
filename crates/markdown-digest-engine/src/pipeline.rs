//! The host pipeline: recognizers, body parsing, transforms, rendering.

use xi_rope::Rope;

use crate::context::{ContextKey, ParseContext};
use crate::parsing::{
    blocks::{BlockRecognizer, Document},
    parse_document,
};
use crate::render;

/// Whole-tree hook run once per parse, after the tree is complete.
pub trait DocumentTransform: Send + Sync {
    fn transform(&self, doc: &mut Document, ctx: &mut ParseContext);
}

/// A bundle of hooks installed into a pipeline in one step.
pub trait Extension {
    fn extend(self, builder: MarkdownBuilder) -> MarkdownBuilder;
}

#[derive(Default)]
pub struct MarkdownBuilder {
    recognizers: Vec<Box<dyn BlockRecognizer>>,
    transforms: Vec<Box<dyn DocumentTransform>>,
    produces: Vec<ContextKey>,
}

impl MarkdownBuilder {
    /// Adds a block recognizer. Earlier recognizers are offered lines first.
    pub fn recognizer(mut self, r: impl BlockRecognizer + 'static) -> Self {
        self.recognizers.push(Box::new(r));
        self
    }

    /// Adds a transform. Transforms run in the order they were added.
    pub fn transform(mut self, t: impl DocumentTransform + 'static) -> Self {
        self.transforms.push(Box::new(t));
        self
    }

    /// Declares that an installed hook publishes `key`.
    pub fn produces(mut self, key: ContextKey) -> Self {
        if !self.produces.contains(&key) {
            self.produces.push(key);
        }
        self
    }

    pub fn extension(self, ext: impl Extension) -> Self {
        ext.extend(self)
    }

    pub fn build(self) -> Markdown {
        Markdown {
            recognizers: self.recognizers,
            transforms: self.transforms,
            produces: self.produces,
        }
    }
}

/// A configured markdown pipeline.
///
/// Holds hooks and their configuration only. Every call to [`Markdown::parse`]
/// builds its own context and per-document state, so one pipeline can serve
/// any number of documents, from any number of threads.
pub struct Markdown {
    recognizers: Vec<Box<dyn BlockRecognizer>>,
    transforms: Vec<Box<dyn DocumentTransform>>,
    produces: Vec<ContextKey>,
}

impl Markdown {
    /// A plain CommonMark pipeline with no extensions.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> MarkdownBuilder {
        MarkdownBuilder::default()
    }

    /// Context keys the installed extensions publish.
    pub fn produces(&self) -> &[ContextKey] {
        &self.produces
    }

    pub fn parse(&self, source: &str) -> ParsedDoc {
        let rope = Rope::from(source);
        let mut context = ParseContext::with_keys(&self.produces);
        let mut document = parse_document(&rope, &self.recognizers, &mut context);
        for t in &self.transforms {
            t.transform(&mut document, &mut context);
        }
        ParsedDoc {
            rope,
            document,
            context,
        }
    }

    /// Parses and renders in one call.
    pub fn convert(&self, source: &str) -> (String, ParseContext) {
        let parsed = self.parse(source);
        (parsed.to_html(), parsed.context)
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one parse.
#[derive(Clone)]
pub struct ParsedDoc {
    /// The full source, metadata region included; block spans index into it.
    pub rope: Rope,
    pub document: Document,
    pub context: ParseContext,
}

impl ParsedDoc {
    pub fn to_html(&self) -> String {
        render::html(&self.document)
    }
}
