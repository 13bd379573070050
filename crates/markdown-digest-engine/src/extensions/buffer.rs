/// Character written between words, paragraphs and wrapped lines.
pub const SEPARATOR: char = ' ';

/// A text buffer that never grows past `max` bytes.
///
/// Overflow is the normal way a snippet ends, not an error: the write that
/// does not fit is cut at the last character boundary that does, and the
/// buffer stops accepting data from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetBuffer {
    max: usize,
    buf: String,
    full: bool,
}

impl SnippetBuffer {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            buf: String::with_capacity(max.min(4096)),
            full: false,
        }
    }

    /// Appends `segment`, first inserting a separator when the segment would
    /// otherwise run into the previous word.
    pub fn write(&mut self, segment: &str) {
        if segment.is_empty() || self.is_full() {
            return;
        }
        let joins_previous_word = !self.buf.is_empty()
            && !self.buf.ends_with(SEPARATOR)
            && !segment.starts_with(char::is_whitespace);
        if joins_previous_word {
            self.push_str(SEPARATOR.encode_utf8(&mut [0; 4]));
        }
        self.push_str(segment);
    }

    /// Appends a single separator unless the buffer is empty or already ends
    /// with one.
    pub fn write_separator(&mut self) {
        if self.buf.is_empty() || self.buf.ends_with(SEPARATOR) {
            return;
        }
        self.push_str(SEPARATOR.encode_utf8(&mut [0; 4]));
    }

    fn push_str(&mut self, s: &str) {
        if self.is_full() {
            return;
        }
        let room = self.max - self.buf.len();
        if s.len() <= room {
            self.buf.push_str(s);
            if s.len() == room {
                self.full = true;
            }
            return;
        }
        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buf.push_str(&s[..cut]);
        self.full = true;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// True once `max` bytes are used or a write had to be cut short.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.full || self.buf.len() >= self.max
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Current content, trailing separators included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// The snippet: current content without trailing separators.
    #[must_use]
    pub fn to_snippet(&self) -> String {
        self.buf.trim_end_matches(SEPARATOR).to_string()
    }

    /// Clears content so the buffer can serve another document.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.full = false;
    }
}
