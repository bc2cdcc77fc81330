use docspyer_engine::markdown::{BlockKind, MarkdownParser, make_doc_html};
use docspyer_engine::{Error, MarkdownOptions};

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[test]
fn fixture_guide() {
    let md = read_fixture("guide.md");
    let doc = make_doc_html(&md, &MarkdownOptions::default()).unwrap();

    insta::assert_snapshot!("guide_html", doc.text);
    insta::assert_snapshot!("guide_toc", doc.toc);
}

#[test]
fn guide_block_kinds() {
    let md = read_fixture("guide.md");
    let blocks = MarkdownParser::new().parse(&md).unwrap();
    let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();

    assert_eq!(
        kinds,
        vec![
            BlockKind::Heading,
            BlockKind::Paragraph,
            BlockKind::Heading,
            BlockKind::List,
            BlockKind::Heading,
            BlockKind::Table,
            BlockKind::HorizontalRule,
            BlockKind::Code,
            BlockKind::Paragraph,
        ]
    );
}

/// Every block is separated by exactly one blank line in the output.
#[test]
fn one_html_chunk_per_block() {
    let md = "# A\n\ntext\n\n---\n\n- x";
    let doc = make_doc_html(md, &MarkdownOptions::default()).unwrap();
    let blocks = MarkdownParser::new().parse(md).unwrap();
    assert_eq!(doc.text.split("\n\n").count(), blocks.len());
}

#[test]
fn unclosed_fence_fails_whole_document() {
    let md = "# Title\n\nSome text.\n\n```\nnever closed";
    assert_eq!(
        make_doc_html(md, &MarkdownOptions::default()).unwrap_err(),
        Error::UnclosedCodeFence { line: 5 }
    );
}
