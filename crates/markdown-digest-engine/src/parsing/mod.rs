pub mod blocks;
pub mod inline;
pub mod rope;

use xi_rope::Rope;

use crate::context::ParseContext;

use blocks::{BlockRecognizer, Document, LineScanner, Region, parse_body};
use rope::slice::slice_to_string;

/// Parses `rope` into a block tree, running `recognizers` over its lines
/// first. Recognizers publish into `ctx` as they close.
pub fn parse_document(
    rope: &Rope,
    recognizers: &[Box<dyn BlockRecognizer>],
    ctx: &mut ParseContext,
) -> Document {
    let mut doc = Document::default();
    for region in LineScanner::new(recognizers).scan(rope, ctx) {
        match region {
            Region::Body(span) => {
                log::trace!("parsing body region {span:?}");
                let text = slice_to_string(rope, span);
                doc.children.extend(parse_body(&text, span.start));
            }
            Region::Claimed(node) => doc.children.push(node),
        }
    }
    doc
}
