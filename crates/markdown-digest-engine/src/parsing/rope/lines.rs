use xi_rope::Rope;

use super::span::Span;

/// A reference to a single source line with its position in the document.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Zero-based line number.
    pub number: usize,
    /// Byte span of this line (includes the line terminator if present).
    pub span: Span,
    /// The line text, terminator included.
    pub text: String,
}

impl LineRef {
    /// The line without its `\n` / `\r\n` terminator.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// True when the line holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.content().trim().is_empty()
    }

    /// Leading indentation in columns, tabs expanding to the next multiple of 4.
    pub fn indent(&self) -> usize {
        let mut cols = 0;
        for b in self.text.bytes() {
            match b {
                b' ' => cols += 1,
                b'\t' => cols += 4 - (cols % 4),
                _ => break,
            }
        }
        cols
    }

    /// First byte that is not a space or tab, if any.
    pub fn first_significant_byte(&self) -> Option<u8> {
        self.content().bytes().find(|b| *b != b' ' && *b != b'\t')
    }
}

/// Returns an iterator over lines with their numbers and byte spans.
///
/// Uses `lines_raw` to preserve newline characters, so spans tile the rope
/// exactly and captured regions keep their terminators.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..)
        .enumerate()
        .map(move |(number, line)| {
            let start = offset;
            offset += line.len();
            LineRef {
                number,
                span: Span { start, end: offset },
                text: line.into_owned(),
            }
        })
}
