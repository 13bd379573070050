//! HTML rendering of a parsed [`Document`].
//!
//! Output follows the CommonMark reference renderer's layout: one block per
//! line, tight list items without `<p>`, `<br />` for hard breaks.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::blocks::{BlockKind, BlockNode, Document};
use crate::parsing::inline::{InlineNode, alt_text};

/// Renders the document to an HTML string.
pub fn html(doc: &Document) -> String {
    let mut r = HtmlRenderer::default();
    for b in &doc.children {
        r.block(b);
    }
    r.out
}

#[derive(Default)]
struct HtmlRenderer {
    out: String,
}

impl HtmlRenderer {
    /// Starts a new line unless already at the start of one.
    fn fresh_line(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn block(&mut self, b: &BlockNode) {
        match &b.kind {
            BlockKind::Paragraph => {
                self.fresh_line();
                self.out.push_str("<p>");
                self.inlines(&b.inlines);
                self.out.push_str("</p>\n");
            }
            BlockKind::Heading { level } => {
                self.fresh_line();
                self.out.push_str(&format!("<h{level}>"));
                self.inlines(&b.inlines);
                self.out.push_str(&format!("</h{level}>\n"));
            }
            BlockKind::BlockQuote => {
                self.fresh_line();
                self.out.push_str("<blockquote>\n");
                self.children(b);
                self.fresh_line();
                self.out.push_str("</blockquote>\n");
            }
            BlockKind::List { start } => {
                self.fresh_line();
                let tag = match start {
                    Some(1) => {
                        self.out.push_str("<ol>\n");
                        "ol"
                    }
                    Some(n) => {
                        self.out.push_str(&format!("<ol start=\"{n}\">\n"));
                        "ol"
                    }
                    None => {
                        self.out.push_str("<ul>\n");
                        "ul"
                    }
                };
                self.children(b);
                self.fresh_line();
                self.out.push_str(&format!("</{tag}>\n"));
            }
            BlockKind::ListItem => {
                self.fresh_line();
                self.out.push_str("<li>");
                self.children(b);
                self.out.push_str("</li>\n");
            }
            BlockKind::TextBlock => self.inlines(&b.inlines),
            BlockKind::CodeBlock { info } => {
                self.fresh_line();
                match info.as_deref().and_then(|i| i.split_whitespace().next()) {
                    Some(lang) => self.out.push_str(&format!(
                        "<pre><code class=\"language-{}\">",
                        encode_double_quoted_attribute(lang)
                    )),
                    None => self.out.push_str("<pre><code>"),
                }
                for n in &b.inlines {
                    if let InlineNode::Text(t) = n {
                        self.out.push_str(&encode_text(t));
                    }
                }
                self.out.push_str("</code></pre>\n");
            }
            BlockKind::ThematicBreak => {
                self.fresh_line();
                self.out.push_str("<hr />\n");
            }
            BlockKind::HtmlBlock => {
                self.fresh_line();
                for n in &b.inlines {
                    if let InlineNode::Html(h) = n {
                        self.out.push_str(h);
                    }
                }
            }
        }
    }

    fn children(&mut self, b: &BlockNode) {
        for c in &b.children {
            self.block(c);
        }
    }

    fn inlines(&mut self, nodes: &[InlineNode]) {
        for n in nodes {
            self.inline(n);
        }
    }

    fn inline(&mut self, n: &InlineNode) {
        match n {
            InlineNode::Text(t) => self.out.push_str(&encode_text(t)),
            InlineNode::Code(c) => {
                self.out.push_str("<code>");
                self.out.push_str(&encode_text(c));
                self.out.push_str("</code>");
            }
            InlineNode::SoftBreak => self.out.push('\n'),
            InlineNode::HardBreak => self.out.push_str("<br />\n"),
            InlineNode::Html(h) => self.out.push_str(h),
            InlineNode::Emphasis(children) => {
                self.out.push_str("<em>");
                self.inlines(children);
                self.out.push_str("</em>");
            }
            InlineNode::Strong(children) => {
                self.out.push_str("<strong>");
                self.inlines(children);
                self.out.push_str("</strong>");
            }
            InlineNode::Link {
                dest,
                title,
                children,
            } => {
                self.out.push_str("<a href=\"");
                self.out.push_str(&encode_double_quoted_attribute(dest));
                self.title(title);
                self.out.push_str("\">");
                self.inlines(children);
                self.out.push_str("</a>");
            }
            InlineNode::Image { dest, title, alt } => {
                self.out.push_str("<img src=\"");
                self.out.push_str(&encode_double_quoted_attribute(dest));
                self.out.push_str("\" alt=\"");
                self.out
                    .push_str(&encode_double_quoted_attribute(&alt_text(alt)));
                self.title(title);
                self.out.push_str("\" />");
            }
        }
    }

    /// Closes the previous attribute and writes `title` when present.
    fn title(&mut self, title: &str) {
        if !title.is_empty() {
            self.out.push_str("\" title=\"");
            self.out.push_str(&encode_double_quoted_attribute(title));
        }
    }
}
