use xi_rope::Rope;

use crate::context::ParseContext;
use crate::parsing::rope::{LineRef, Span, lines_with_spans};

use super::{
    recognizer::{BlockRecognizer, BlockState, OpenBlock},
    types::BlockNode,
};

/// Lines indented this far are indented code, never a block opener.
const CODE_INDENT: usize = 4;

/// Output of the line scan, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    /// Ordinary markdown handed to the body parser.
    Body(Span),
    /// A block a recognizer closed and chose to keep.
    Claimed(BlockNode),
}

struct Active<'r> {
    recognizer: &'r dyn BlockRecognizer,
    block: OpenBlock,
}

/// Offers source lines to block recognizers ahead of body parsing.
///
/// Tracks just enough paragraph state (last line non-blank and unclaimed) to
/// honour `can_interrupt_paragraph`.
pub struct LineScanner<'r> {
    recognizers: &'r [Box<dyn BlockRecognizer>],
}

impl<'r> LineScanner<'r> {
    pub fn new(recognizers: &'r [Box<dyn BlockRecognizer>]) -> Self {
        Self { recognizers }
    }

    pub fn scan(&self, rope: &Rope, ctx: &mut ParseContext) -> Vec<Region> {
        let mut out = vec![];
        let mut body: Option<Span> = None;
        let mut in_paragraph = false;
        let mut active: Option<Active<'r>> = None;

        for line in lines_with_spans(rope) {
            if let Some(mut a) = active.take() {
                a.block.span = a.block.span.cover(line.span);
                match a.recognizer.continue_block(&mut a.block, &line, ctx) {
                    BlockState::Continue => active = Some(a),
                    BlockState::Close => {
                        if let Some(b) = body.take() {
                            out.push(Region::Body(b));
                        }
                        if let Some(node) = a.recognizer.close(a.block, rope, ctx) {
                            out.push(Region::Claimed(node));
                        }
                        in_paragraph = false;
                    }
                }
                continue;
            }

            if let Some(a) = self.try_open(&line, in_paragraph, ctx) {
                active = Some(a);
                continue;
            }

            body = Some(body.map_or(line.span, |b| b.cover(line.span)));
            in_paragraph = !line.is_blank();
        }

        if let Some(a) = active {
            if a.recognizer.closes_at_eof() {
                if let Some(b) = body.take() {
                    out.push(Region::Body(b));
                }
                if let Some(node) = a.recognizer.close(a.block, rope, ctx) {
                    out.push(Region::Claimed(node));
                }
            } else {
                log::debug!(
                    "unterminated block at {:?} returned to the body",
                    a.block.span
                );
                body = Some(body.map_or(a.block.span, |b| b.cover(a.block.span)));
            }
        }

        if let Some(b) = body {
            out.push(Region::Body(b));
        }
        out
    }

    fn try_open(
        &self,
        line: &LineRef,
        in_paragraph: bool,
        ctx: &mut ParseContext,
    ) -> Option<Active<'r>> {
        let first = line.first_significant_byte()?;
        let indented = line.indent() >= CODE_INDENT;
        for r in self.recognizers {
            if !r.trigger().contains(&first) {
                continue;
            }
            if indented && !r.can_accept_indented_line() {
                continue;
            }
            if in_paragraph && !r.can_interrupt_paragraph() {
                continue;
            }
            if let Some(block) = r.open(line, ctx) {
                return Some(Active {
                    recognizer: r.as_ref(),
                    block,
                });
            }
        }
        None
    }
}
