//! Document-level behavior of the parse and grouping stages.

use aplomb::ast::{Block, BlockKind, Document, Inline, Node};
use aplomb::{converter, parser};

fn parse_flat(lines: &[&str]) -> Document {
    parser::parse_lines(lines)
}

fn parse_grouped(lines: &[&str]) -> Document {
    converter::convert(parser::parse_lines(lines))
}

fn inline_plain(text: &str) -> Node {
    Node::Inline(Inline::Plain {
        text: text.to_string(),
    })
}

#[test]
fn fenced_code_parses_to_head_plus_body_then_groups_into_one() {
    let flat = parse_flat(&["```Python", "x=1", "```"]);
    assert_eq!(
        flat.content,
        vec![
            Block::new(
                BlockKind::CodeBlock {
                    language: "Python".to_string()
                },
                vec![]
            ),
            Block::new(BlockKind::CodeChild, vec![inline_plain("x=1")]),
        ]
    );

    let grouped = converter::convert(flat);
    assert_eq!(
        grouped.content,
        vec![Block::new(
            BlockKind::CodeBlock {
                language: "Python".to_string()
            },
            vec![Node::Block(Block::new(
                BlockKind::Plain { indent_depth: 0 },
                vec![inline_plain("x=1")]
            ))]
        )]
    );
}

#[test]
fn list_lines_group_into_items() {
    let grouped = parse_grouped(&["* a", "* b"]);
    assert_eq!(
        grouped.content,
        vec![Block::new(
            BlockKind::List { indent_depth: 0 },
            vec![
                Node::Block(Block::new(
                    BlockKind::ListItem { indent_depth: 1 },
                    vec![inline_plain("a")]
                )),
                Node::Block(Block::new(
                    BlockKind::ListItem { indent_depth: 1 },
                    vec![inline_plain("b")]
                )),
            ]
        )]
    );
}

#[test]
fn unterminated_fence_consumes_every_remaining_line() {
    let flat = parse_flat(&["```", "a", "b"]);
    assert_eq!(
        flat.content,
        vec![
            Block::new(
                BlockKind::CodeBlock {
                    language: String::new()
                },
                vec![]
            ),
            Block::new(BlockKind::CodeChild, vec![inline_plain("a")]),
            Block::new(BlockKind::CodeChild, vec![inline_plain("b")]),
        ]
    );
}

#[test]
fn quote_lines_become_paragraphs_inside_one_quote() {
    let grouped = parse_grouped(&["> I said", "> go home", "> end quote"]);
    assert_eq!(grouped.content.len(), 1);
    let quote = &grouped.content[0];
    assert_eq!(quote.kind, BlockKind::Quote);
    assert_eq!(quote.children.len(), 3);
    for child in &quote.children {
        match child {
            Node::Block(paragraph) => {
                assert_eq!(paragraph.kind, BlockKind::Paragraph { indent_depth: 1 });
            }
            Node::Inline(_) => panic!("grouped quote children must be blocks"),
        }
    }
}

#[test]
fn grouped_document_has_no_adjacent_mergeable_kinds() {
    let grouped = parse_grouped(&[
        "# title", "> a", "> b", "* one", "* two", "- three", "```rust", "fn main() {}", "```",
        "tail",
    ]);
    for pair in grouped.content.windows(2) {
        let mergeable = matches!(
            pair[0].kind,
            BlockKind::Quote | BlockKind::List { .. } | BlockKind::CodeBlock { .. }
        );
        if mergeable {
            assert!(
                !pair[0].is_same_kind(&pair[1]),
                "adjacent mergeable blocks survived grouping: {:?}",
                pair
            );
        }
    }
}

#[test]
fn display_text_matches_stripped_line_texts_in_order() {
    let lines = ["# title", "> quoted words", "* item one", "plain prose", "---"];
    let stripped = ["title", "quoted words", "item one", "plain prose", ""];

    let flat = parse_flat(&lines);
    let document_text: String = flat
        .content
        .iter()
        .map(|block| block.display_text())
        .collect();
    assert_eq!(document_text, stripped.concat());
}

#[test]
fn classification_priority_keeps_notation_lines_apart() {
    let flat = parse_flat(&["# heading", "---", "[toc]", "```", "body"]);
    let kinds: Vec<&BlockKind> = flat.content.iter().map(|block| &block.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &BlockKind::Heading { size: 1 },
            &BlockKind::HorizontalRule,
            &BlockKind::TableOfContents,
            &BlockKind::CodeBlock {
                language: String::new()
            },
            &BlockKind::CodeChild,
        ]
    );
}
