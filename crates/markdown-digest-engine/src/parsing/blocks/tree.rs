//! Builds the block tree from `pulldown-cmark` events.
//!
//! The body parser runs with plain CommonMark options, so the only tags that
//! appear are paragraphs, headings, block quotes, code blocks, HTML blocks,
//! lists, items, emphasis, strong, links and images.
//!
//! # Event flow for tight lists
//!
//! ```markdown
//! - Parent
//!   - Child
//! ```
//! Events: `Start(List)`, `Start(Item)`, `Text("Parent")`, `Start(List)`,
//! `Start(Item)`, `Text("Child")`, `End(Item)`, `End(List)`, `End(Item)`,
//! `End(List)`.
//!
//! Tight items carry text without a paragraph around it. That text is
//! collected into a `TextBlock` child so containers only ever hold blocks.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::parsing::{inline::InlineNode, rope::Span};

use super::types::{BlockKind, BlockNode};

/// Parses one body chunk. `base` is the chunk's byte offset in the document.
pub fn parse_body(text: &str, base: usize) -> Vec<BlockNode> {
    let mut builder = TreeBuilder::new(base);
    for (event, range) in Parser::new_ext(text, Options::empty()).into_offset_iter() {
        builder.process_event(event, range);
    }
    builder.finish()
}

/// An inline container waiting for its end tag.
enum InlineFrame {
    Emphasis(Vec<InlineNode>),
    Strong(Vec<InlineNode>),
    Link {
        dest: String,
        title: String,
        children: Vec<InlineNode>,
    },
    Image {
        dest: String,
        title: String,
        alt: Vec<InlineNode>,
    },
}

impl InlineFrame {
    fn children_mut(&mut self) -> &mut Vec<InlineNode> {
        match self {
            InlineFrame::Emphasis(c)
            | InlineFrame::Strong(c)
            | InlineFrame::Link { children: c, .. }
            | InlineFrame::Image { alt: c, .. } => c,
        }
    }

    fn into_node(self) -> InlineNode {
        match self {
            InlineFrame::Emphasis(c) => InlineNode::Emphasis(c),
            InlineFrame::Strong(c) => InlineNode::Strong(c),
            InlineFrame::Link {
                dest,
                title,
                children,
            } => InlineNode::Link {
                dest,
                title,
                children,
            },
            InlineFrame::Image { dest, title, alt } => InlineNode::Image { dest, title, alt },
        }
    }
}

struct TreeBuilder {
    base: usize,
    /// Open blocks, innermost last.
    stack: Vec<BlockNode>,
    /// Open inline containers of the innermost leaf block.
    inline_stack: Vec<InlineFrame>,
    out: Vec<BlockNode>,
}

impl TreeBuilder {
    fn new(base: usize) -> Self {
        Self {
            base,
            stack: vec![],
            inline_stack: vec![],
            out: vec![],
        }
    }

    fn span(&self, range: Range<usize>) -> Span {
        Span::from(range).offset(self.base)
    }

    fn process_event(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => self.start_tag(tag, range),
            Event::End(end) => self.end_tag(end),
            Event::Text(text) => {
                let text = text.into_string();
                if self.in_raw_block() {
                    self.append_raw(text, InlineNode::Text);
                } else {
                    self.push_inline(InlineNode::Text(text), range);
                }
            }
            Event::Code(code) => self.push_inline(InlineNode::Code(code.into_string()), range),
            Event::Html(html) | Event::InlineHtml(html) => {
                let html = html.into_string();
                if self.in_raw_block() {
                    self.append_raw(html, InlineNode::Html);
                } else {
                    self.push_inline(InlineNode::Html(html), range);
                }
            }
            Event::SoftBreak => self.push_inline(InlineNode::SoftBreak, range),
            Event::HardBreak => self.push_inline(InlineNode::HardBreak, range),
            Event::Rule => {
                self.close_text_block();
                let node = BlockNode::new(BlockKind::ThematicBreak, self.span(range));
                self.attach(node);
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>, range: Range<usize>) {
        let kind = match tag {
            Tag::Emphasis => return self.open_inline(InlineFrame::Emphasis(vec![]), range),
            Tag::Strong => return self.open_inline(InlineFrame::Strong(vec![]), range),
            Tag::Link {
                dest_url, title, ..
            } => {
                let frame = InlineFrame::Link {
                    dest: dest_url.into_string(),
                    title: title.into_string(),
                    children: vec![],
                };
                return self.open_inline(frame, range);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                let frame = InlineFrame::Image {
                    dest: dest_url.into_string(),
                    title: title.into_string(),
                    alt: vec![],
                };
                return self.open_inline(frame, range);
            }
            Tag::Paragraph => BlockKind::Paragraph,
            Tag::Heading { level, .. } => BlockKind::Heading { level: level as u8 },
            Tag::BlockQuote(_) => BlockKind::BlockQuote,
            Tag::CodeBlock(kind) => BlockKind::CodeBlock {
                info: match kind {
                    CodeBlockKind::Fenced(info) if !info.trim().is_empty() => {
                        Some(info.trim().to_string())
                    }
                    _ => None,
                },
            },
            Tag::HtmlBlock => BlockKind::HtmlBlock,
            Tag::List(start) => BlockKind::List { start },
            Tag::Item => BlockKind::ListItem,
            _ => return,
        };
        self.close_text_block();
        let node = BlockNode::new(kind, self.span(range));
        self.stack.push(node);
    }

    fn end_tag(&mut self, end: TagEnd) {
        if matches!(
            end,
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link | TagEnd::Image
        ) {
            if let Some(frame) = self.inline_stack.pop() {
                self.push_finished_inline(frame.into_node());
            }
            return;
        }
        self.close_text_block();
        if let Some(node) = self.stack.pop() {
            self.attach(node);
        }
    }

    fn in_raw_block(&self) -> bool {
        matches!(
            self.stack.last().map(|b| &b.kind),
            Some(BlockKind::CodeBlock { .. } | BlockKind::HtmlBlock)
        )
    }

    /// Code and HTML blocks keep their literal as one merged inline.
    fn append_raw(&mut self, text: String, wrap: fn(String) -> InlineNode) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        match top.inlines.last_mut() {
            Some(InlineNode::Text(existing) | InlineNode::Html(existing)) => {
                existing.push_str(&text)
            }
            _ => top.inlines.push(wrap(text)),
        }
    }

    fn open_inline(&mut self, frame: InlineFrame, range: Range<usize>) {
        if self.inline_stack.is_empty() {
            let span = self.span(range);
            self.ensure_leaf(span);
        }
        self.inline_stack.push(frame);
    }

    fn push_inline(&mut self, node: InlineNode, range: Range<usize>) {
        let span = self.span(range);
        if self.inline_stack.is_empty() {
            self.ensure_leaf(span);
        }
        if let Some(top) = self.stack.last_mut() {
            top.span = top.span.cover(span);
        }
        self.push_finished_inline(node);
    }

    fn push_finished_inline(&mut self, node: InlineNode) {
        let target = match self.inline_stack.last_mut() {
            Some(frame) => frame.children_mut(),
            None => match self.stack.last_mut() {
                Some(top) => &mut top.inlines,
                None => return,
            },
        };
        if let (Some(InlineNode::Text(prev)), InlineNode::Text(next)) = (target.last_mut(), &node)
        {
            prev.push_str(next);
            return;
        }
        target.push(node);
    }

    /// Opens a `TextBlock` when inline content arrives outside a leaf block.
    fn ensure_leaf(&mut self, span: Span) {
        let needs_text_block = match self.stack.last() {
            Some(top) => top.kind.is_container(),
            None => true,
        };
        if needs_text_block {
            self.stack.push(BlockNode::new(BlockKind::TextBlock, span));
        }
    }

    fn close_text_block(&mut self) {
        if matches!(
            self.stack.last().map(|b| &b.kind),
            Some(BlockKind::TextBlock)
        ) && let Some(node) = self.stack.pop()
        {
            self.attach(node);
        }
    }

    fn attach(&mut self, node: BlockNode) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.out.push(node),
        }
    }

    fn finish(mut self) -> Vec<BlockNode> {
        while let Some(node) = self.stack.pop() {
            self.attach(node);
        }
        self.out
    }
}
