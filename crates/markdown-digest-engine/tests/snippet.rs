use markdown_digest_engine::{
    ContextError, ContextKey, Markdown, MetadataExtension, SnippetBuffer, SnippetExtension,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn markdown() -> Markdown {
    Markdown::builder().extension(SnippetExtension::new(100)).build()
}

#[rstest]
fn paragraphs_are_joined(markdown: Markdown) {
    let source = "# Hello\nParagraph text here.\n\nAnother one.\nAnd continued here.";
    let (html, ctx) = markdown.convert(source);

    assert_eq!(
        ctx.snippet().unwrap(),
        "Paragraph text here. Another one. And continued here."
    );
    assert_eq!(
        html,
        "<h1>Hello</h1>\n<p>Paragraph text here.</p>\n<p>Another one.\nAnd continued here.</p>\n"
    );
}

#[rstest]
fn heading_only_gives_empty_snippet(markdown: Markdown) {
    let (html, ctx) = markdown.convert("# Hello");

    assert_eq!(ctx.snippet().unwrap(), "");
    assert_eq!(html, "<h1>Hello</h1>\n");
}

#[rstest]
fn mixed_blocks(markdown: Markdown) {
    let source = concat!(
        "# Heading\n",
        "[Link](link) *italics*\n",
        "![image](image)continued.\n",
        "\n",
        "**Bold** [link.](link)\n",
        "> Block quote.\n",
        "\n",
        "    Code.\n",
        "1. Ordered.\n",
        "- Unordered\n",
        "continued.\n",
        "\n",
        "## Subheading\n",
        "\n",
        "![Image](image)`Inline.`",
    );
    let (_, ctx) = markdown.convert(source);

    assert_eq!(
        ctx.snippet().unwrap(),
        "Link italics continued. Bold link. Inline."
    );
}

#[test]
fn truncated_to_capacity() {
    let md = Markdown::builder().extension(SnippetExtension::new(5)).build();
    let (html, ctx) = md.convert("# Hello\nParagraph text here.");

    assert_eq!(ctx.snippet().unwrap(), "Parag");
    assert_eq!(html, "<h1>Hello</h1>\n<p>Paragraph text here.</p>\n");
}

#[test]
fn truncation_keeps_whole_characters() {
    let md = Markdown::builder().extension(SnippetExtension::new(4)).build();
    let (_, ctx) = md.convert("aé€b");

    assert_eq!(ctx.snippet().unwrap(), "aé");
}

#[test]
fn query_without_extension() {
    let (_, ctx) = Markdown::new().convert("# Hello");

    assert!(matches!(
        ctx.snippet(),
        Err(ContextError::NotConfigured(ContextKey::Snippet))
    ));
}

#[rstest]
fn documents_do_not_leak_into_each_other(markdown: Markdown) {
    let first = markdown.parse("First document text.");
    let second = markdown.parse("# Only a heading");

    assert_eq!(first.context.snippet().unwrap(), "First document text.");
    assert_eq!(second.context.snippet().unwrap(), "");
}

#[test]
fn pipeline_shared_between_threads() {
    let md = Markdown::builder().extension(SnippetExtension::new(100)).build();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let md = &md;
                s.spawn(move || {
                    let src = format!("document {i}");
                    md.parse(&src).context.snippet().unwrap().to_string()
                })
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), format!("document {i}"));
        }
    });
}

#[test]
fn metadata_and_snippet_together() {
    let md = Markdown::builder()
        .extension(MetadataExtension)
        .extension(SnippetExtension::new(100))
        .build();
    let (html, ctx) = md.convert("---\ntitle: t\n---\nBody text.\n");

    assert_eq!(ctx.metadata_raw().unwrap(), Some(&b"title: t\n"[..]));
    assert_eq!(ctx.snippet().unwrap(), "Body text.");
    assert_eq!(html, "<p>Body text.</p>\n");
}

#[test]
fn buffer_fill_and_reset() {
    let mut b = SnippetBuffer::new(10);
    assert!(b.is_empty());
    b.write("");
    assert!(b.is_empty());
    b.write("12345");
    assert!(!b.is_empty() && !b.is_full());
    b.write("67890");
    assert!(b.is_full());
    b.reset();
    assert!(b.is_empty());
    assert_eq!(b.to_snippet(), "");
}
