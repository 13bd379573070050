//! Leading metadata block.
//!
//! A document may open with a region fenced by separator lines:
//!
//! ```markdown
//! ---
//! title: Hello
//! tags: [a, b]
//! ---
//! # Body starts here
//! ```
//!
//! The region is only recognized when its opening separator is the very
//! first line. Its raw bytes are published under [`ContextKey::Metadata`]
//! and the region is removed from the document tree. Decoding is YAML via
//! `serde_yaml`, on demand, through [`unmarshal`] or [`get`].

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use xi_rope::Rope;

use crate::context::{ContextKey, ParseContext};
use crate::error::ContextError;
use crate::parsing::blocks::{BlockNode, BlockRecognizer, BlockState, OpenBlock};
use crate::parsing::rope::{LineRef, join_spans};
use crate::pipeline::{Extension, MarkdownBuilder};

/// True for a line that, trimmed, is three or more `-` and nothing else.
///
/// `line` must not include its terminator.
pub fn is_separator(line: &str) -> bool {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR
        .get_or_init(|| Regex::new(r"^\s*-{3,}\s*$").expect("Invalid separator regex"))
        .is_match(line)
}

/// Block recognizer for the leading metadata region.
///
/// Stateless: the captured lines live in the scanner's [`OpenBlock`] for the
/// duration of one parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataRecognizer;

impl BlockRecognizer for MetadataRecognizer {
    fn trigger(&self) -> &[u8] {
        b"-"
    }

    fn open(&self, line: &LineRef, _ctx: &mut ParseContext) -> Option<OpenBlock> {
        if line.number != 0 || !is_separator(line.content()) {
            return None;
        }
        log::debug!("metadata region opened");
        Some(OpenBlock::starting_at(line))
    }

    fn continue_block(
        &self,
        block: &mut OpenBlock,
        line: &LineRef,
        _ctx: &mut ParseContext,
    ) -> BlockState {
        if is_separator(line.content()) {
            return BlockState::Close;
        }
        block.lines.push(line.span);
        BlockState::Continue
    }

    fn close(&self, block: OpenBlock, rope: &Rope, ctx: &mut ParseContext) -> Option<BlockNode> {
        let raw = join_spans(rope, &block.lines);
        log::debug!(
            "metadata region closed: {} lines, {} bytes",
            block.lines.len(),
            raw.len()
        );
        ctx.set_metadata(raw);
        None
    }
}

/// Installs [`MetadataRecognizer`] and declares the `metadata` result.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataExtension;

impl Extension for MetadataExtension {
    fn extend(self, builder: MarkdownBuilder) -> MarkdownBuilder {
        builder
            .recognizer(MetadataRecognizer)
            .produces(ContextKey::Metadata)
    }
}

/// Decodes the metadata region into `T`.
///
/// A document without a region, or with an empty one, yields `T::default()`.
/// Malformed YAML is returned as [`ContextError::Decode`].
pub fn unmarshal<T>(ctx: &ParseContext) -> Result<T, ContextError>
where
    T: DeserializeOwned + Default,
{
    match ctx.metadata_raw()? {
        None => Ok(T::default()),
        Some(raw) if raw.iter().all(u8::is_ascii_whitespace) => Ok(T::default()),
        Some(raw) => Ok(serde_yaml::from_slice::<Option<T>>(raw)?.unwrap_or_default()),
    }
}

/// The region's top-level mapping, empty when there is no region.
pub fn get(ctx: &ParseContext) -> Result<serde_yaml::Mapping, ContextError> {
    unmarshal(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Markdown;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("-----", true)]
    #[case("  ---  ", true)]
    #[case("\t---", true)]
    #[case("--", false)]
    #[case("--- x", false)]
    #[case("- - -", false)]
    #[case("***", false)]
    #[case("", false)]
    fn separator_lines(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_separator(line), expected);
    }

    fn parse(src: &str) -> ParseContext {
        Markdown::builder()
            .extension(MetadataExtension)
            .build()
            .parse(src)
            .context
    }

    #[test]
    fn captures_lines_verbatim() {
        let ctx = parse("---\ntitle: a\r\nlist:\n  - x\n---\nbody\n");
        assert_eq!(
            ctx.metadata_raw().unwrap(),
            Some(&b"title: a\r\nlist:\n  - x\n"[..])
        );
    }

    #[test]
    fn separator_after_first_line_is_content() {
        let ctx = parse("\n---\ntitle: a\n---\n");
        assert_eq!(ctx.metadata_raw().unwrap(), None);
    }

    #[test]
    fn indented_opener_is_ignored() {
        let ctx = parse("    ---\ntitle: a\n---\n");
        assert_eq!(ctx.metadata_raw().unwrap(), None);
    }

    #[test]
    fn unterminated_region_runs_to_end_of_input() {
        let md = Markdown::builder().extension(MetadataExtension).build();
        let parsed = md.parse("---\ntitle: a\n# Heading\nText\n");
        assert_eq!(
            parsed.context.metadata_raw().unwrap(),
            Some(&b"title: a\n# Heading\nText\n"[..])
        );
        assert!(parsed.document.is_empty());
    }

    #[test]
    fn whitespace_only_region_decodes_to_default() {
        let ctx = parse("---\n   \n---\n");
        let m = get(&ctx).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn get_returns_mapping() {
        let ctx = parse("---\ntitle: a\nn: 2\n---\n");
        let m = get(&ctx).unwrap();
        assert_eq!(m.get("title").and_then(|v| v.as_str()), Some("a"));
        assert_eq!(m.get("n").and_then(|v| v.as_u64()), Some(2));
    }

    #[test]
    fn not_installed_is_an_error() {
        let ctx = Markdown::new().parse("---\na: 1\n---\n").context;
        assert!(matches!(
            get(&ctx),
            Err(ContextError::NotConfigured(ContextKey::Metadata))
        ));
    }
}
