use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Concatenates the text of several spans, in order, as raw bytes.
pub fn join_spans(rope: &Rope, spans: &[Span]) -> Vec<u8> {
    let mut out = Vec::with_capacity(spans.iter().map(|s| s.len()).sum());
    for sp in spans {
        out.extend_from_slice(rope.slice_to_cow(sp.start..sp.end).as_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("hello world");
        assert_eq!(slice_to_string(&rope, Span::new(6, 11)), "world");
    }

    #[test]
    fn join_spans_keeps_order_and_terminators() {
        let rope = Rope::from("a: 1\nskip\nb: 2\n");
        let joined = join_spans(&rope, &[Span::new(0, 5), Span::new(10, 15)]);
        assert_eq!(joined, b"a: 1\nb: 2\n");
    }

    #[test]
    fn join_no_spans_is_empty() {
        let rope = Rope::from("abc");
        assert!(join_spans(&rope, &[]).is_empty());
    }
}
