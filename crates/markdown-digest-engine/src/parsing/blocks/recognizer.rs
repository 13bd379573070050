//! Block-level recognizer hook.
//!
//! A recognizer claims raw source lines before CommonMark parsing sees
//! them. The host offers it each line whose first significant byte is one of
//! its trigger bytes; once open, the recognizer sees every following line
//! until it closes. Claimed lines never reach the body parser.

use xi_rope::Rope;

use crate::context::ParseContext;
use crate::parsing::rope::{LineRef, Span};

use super::types::BlockNode;

/// Decision of an open recognizer about the line it was just shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// The line is consumed and the block stays open.
    Continue,
    /// The line is consumed and the block closes.
    Close,
}

/// Per-parse state of a block a recognizer has opened.
///
/// Owned by the scanner for the duration of one parse; recognizers only
/// hold configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenBlock {
    /// Every line claimed so far, delimiters included.
    pub span: Span,
    /// Lines the recognizer chose to keep as content.
    pub lines: Vec<Span>,
}

impl OpenBlock {
    pub fn starting_at(line: &LineRef) -> Self {
        Self {
            span: line.span,
            lines: vec![],
        }
    }
}

pub trait BlockRecognizer: Send + Sync {
    /// Bytes that may start a block of this kind.
    fn trigger(&self) -> &[u8];

    /// Tries to open a block on `line`. Returning `Some` consumes the line.
    fn open(&self, line: &LineRef, ctx: &mut ParseContext) -> Option<OpenBlock>;

    /// Shows the next line to an open block. The line is always consumed.
    fn continue_block(
        &self,
        block: &mut OpenBlock,
        line: &LineRef,
        ctx: &mut ParseContext,
    ) -> BlockState;

    /// Finishes a block. `None` removes it from the document tree.
    fn close(&self, block: OpenBlock, rope: &Rope, ctx: &mut ParseContext) -> Option<BlockNode>;

    fn can_interrupt_paragraph(&self) -> bool {
        false
    }

    /// Whether lines indented four or more columns may open this block.
    fn can_accept_indented_line(&self) -> bool {
        false
    }

    /// Whether end of input closes an open block. When false, an unclosed
    /// block is abandoned and its lines go back to the body.
    fn closes_at_eof(&self) -> bool {
        true
    }
}
