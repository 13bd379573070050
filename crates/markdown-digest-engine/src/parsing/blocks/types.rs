use crate::parsing::{inline::InlineNode, rope::span::Span};

/// The kind of a block node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph: narrative text, the only block the snippet reads.
    Paragraph,
    /// An ATX or setext heading.
    Heading {
        /// 1 through 6.
        level: u8,
    },
    /// A `>` container holding nested blocks.
    BlockQuote,
    /// A list container holding `ListItem`s.
    List {
        /// Start number for ordered lists, `None` for bullet lists.
        start: Option<u64>,
    },
    /// A list item holding nested blocks.
    ListItem,
    /// Inline content held directly by a tight list item.
    TextBlock,
    /// A fenced or indented code block; the literal is a single `Text` inline.
    CodeBlock {
        /// Info string of a fenced block, `None` when indented or empty.
        info: Option<String>,
    },
    /// `***`, `---` or `___` on a line of its own.
    ThematicBreak,
    /// Raw HTML block; content is `Html` inlines.
    HtmlBlock,
}

impl BlockKind {
    /// Containers hold child blocks; every other kind holds inlines.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            BlockKind::BlockQuote | BlockKind::List { .. } | BlockKind::ListItem
        )
    }
}

/// A parsed block with its source span and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Absolute byte span in the source document.
    pub span: Span,
    /// Nested blocks (containers only).
    pub children: Vec<BlockNode>,
    /// Inline content (leaf blocks only).
    pub inlines: Vec<InlineNode>,
}

impl BlockNode {
    pub fn new(kind: BlockKind, span: Span) -> Self {
        Self {
            kind,
            span,
            children: vec![],
            inlines: vec![],
        }
    }

    #[must_use]
    pub fn is_paragraph(&self) -> bool {
        matches!(self.kind, BlockKind::Paragraph)
    }
}

/// Root of the block tree produced by one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<BlockNode>,
}

impl Document {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Lazy pre-order walk over every block in document order.
    pub fn walk(&self) -> super::walk::Walk<'_> {
        super::walk::Walk::new(self)
    }
}
