/// An inline node inside a leaf block.
///
/// Text is stored already unescaped (entities decoded, backslash escapes
/// removed), as produced by the CommonMark parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// A run of plain text.
    Text(String),
    /// A code span; holds the content between the backticks.
    Code(String),
    /// A line wrap inside a block that does not end the block.
    SoftBreak,
    /// A forced line break (trailing double space or backslash).
    HardBreak,
    /// Raw inline HTML, passed through to output untouched.
    Html(String),
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
        /// Alternative text, kept as inline nodes the way it was written.
        alt: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// Appends the readable text of this node to `out`.
    ///
    /// Images contribute nothing, at any depth. Line breaks nested inside
    /// links or emphasis become a single space. Raw HTML is dropped.
    pub fn push_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text(t) | InlineNode::Code(t) => out.push_str(t),
            InlineNode::SoftBreak | InlineNode::HardBreak => out.push(' '),
            InlineNode::Html(_) | InlineNode::Image { .. } => {}
            InlineNode::Emphasis(children)
            | InlineNode::Strong(children)
            | InlineNode::Link { children, .. } => {
                for c in children {
                    c.push_plain_text(out);
                }
            }
        }
    }

    /// Readable text of this node as an owned string.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut s = String::new();
        self.push_plain_text(&mut s);
        s
    }
}

/// Readable text of a sequence of inline nodes, images included.
///
/// Used for the `alt` attribute of rendered images, where the alt content is
/// the only text there is.
pub fn alt_text(nodes: &[InlineNode]) -> String {
    let mut s = String::new();
    for n in nodes {
        match n {
            InlineNode::Image { alt, .. } => s.push_str(&alt_text(alt)),
            other => other.push_plain_text(&mut s),
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> InlineNode {
        InlineNode::Text(s.to_string())
    }

    #[test]
    fn plain_text_flattens_nested_markup() {
        let n = InlineNode::Link {
            dest: "x".into(),
            title: String::new(),
            children: vec![text("a "), InlineNode::Strong(vec![text("b")])],
        };
        assert_eq!(n.plain_text(), "a b");
    }

    #[test]
    fn plain_text_skips_images_at_any_depth() {
        let n = InlineNode::Emphasis(vec![
            text("see"),
            InlineNode::Image {
                dest: "i.png".into(),
                title: String::new(),
                alt: vec![text("alt")],
            },
        ]);
        assert_eq!(n.plain_text(), "see");
    }

    #[test]
    fn nested_break_becomes_space() {
        let n = InlineNode::Emphasis(vec![text("a"), InlineNode::SoftBreak, text("b")]);
        assert_eq!(n.plain_text(), "a b");
    }

    #[test]
    fn alt_text_keeps_code_and_nested_images() {
        let nodes = vec![
            text("a "),
            InlineNode::Code("b".into()),
            InlineNode::Image {
                dest: String::new(),
                title: String::new(),
                alt: vec![text(" c")],
            },
        ];
        assert_eq!(alt_text(&nodes), "a b c");
    }
}
