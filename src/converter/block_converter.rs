//! Merging of same-kind block runs into composite nodes.

use crate::ast::{Block, BlockKind, Node};

// Quote children render inside the blockquote tag, one level down.
const QUOTE_CHILD_INDENT: usize = 1;
// List items render inside the list tag, one level down.
const LIST_ITEM_INDENT: usize = 1;
// Code lines must not pick up leading spaces in the emitted HTML.
const CODE_CHILD_INDENT: usize = 0;

/// Fold one same-kind run into its composite form. Kinds with no composite
/// form pass through unchanged.
pub(crate) fn convert(run: Vec<Block>) -> Vec<Block> {
    let Some(first) = run.first() else {
        return run;
    };
    match first.kind {
        BlockKind::Quote => vec![merge_quote_run(run)],
        BlockKind::List { .. } => vec![merge_list_run(run)],
        BlockKind::CodeBlock { .. } | BlockKind::CodeChild => vec![merge_code_run(run)],
        _ => run,
    }
}

/// A quote run becomes one quote whose children are per-line paragraphs.
fn merge_quote_run(run: Vec<Block>) -> Block {
    let children = run
        .into_iter()
        .map(|line| {
            Node::Block(Block::new(
                BlockKind::Paragraph {
                    indent_depth: QUOTE_CHILD_INDENT,
                },
                line.children,
            ))
        })
        .collect();
    Block::new(BlockKind::Quote, children)
}

/// A list run becomes one list whose children are per-line items.
fn merge_list_run(run: Vec<Block>) -> Block {
    let children = run
        .into_iter()
        .map(|line| {
            Node::Block(Block::new(
                BlockKind::ListItem {
                    indent_depth: LIST_ITEM_INDENT,
                },
                line.children,
            ))
        })
        .collect();
    Block::new(BlockKind::List { indent_depth: 0 }, children)
}

/// A code run becomes one code block: the language comes from the head
/// element, the body lines carry their text through verbatim.
fn merge_code_run(run: Vec<Block>) -> Block {
    let mut blocks = run.into_iter();
    let language = match blocks.next() {
        Some(Block {
            kind: BlockKind::CodeBlock { language },
            ..
        }) => language,
        _ => String::new(),
    };
    let children = blocks
        .map(|body| {
            Node::Block(Block::new(
                BlockKind::Plain {
                    indent_depth: CODE_CHILD_INDENT,
                },
                body.children,
            ))
        })
        .collect();
    Block::new(BlockKind::CodeBlock { language }, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Inline;

    fn inline_plain(text: &str) -> Node {
        Node::Inline(Inline::Plain {
            text: text.to_string(),
        })
    }

    #[test]
    fn test_quote_run_becomes_per_line_paragraphs() {
        let run = vec![
            Block::new(BlockKind::Quote, vec![inline_plain("a")]),
            Block::new(BlockKind::Quote, vec![inline_plain("b")]),
        ];
        let merged = convert(run);
        assert_eq!(
            merged,
            vec![Block::new(
                BlockKind::Quote,
                vec![
                    Node::Block(Block::new(
                        BlockKind::Paragraph { indent_depth: 1 },
                        vec![inline_plain("a")]
                    )),
                    Node::Block(Block::new(
                        BlockKind::Paragraph { indent_depth: 1 },
                        vec![inline_plain("b")]
                    )),
                ]
            )]
        );
    }

    #[test]
    fn test_list_run_becomes_items() {
        let run = vec![
            Block::new(BlockKind::List { indent_depth: 0 }, vec![inline_plain("a")]),
            Block::new(BlockKind::List { indent_depth: 0 }, vec![inline_plain("b")]),
        ];
        let merged = convert(run);
        assert_eq!(
            merged,
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
    fn test_code_run_keeps_language_and_verbatim_body() {
        let run = vec![
            Block::new(
                BlockKind::CodeBlock {
                    language: "Python".to_string(),
                },
                vec![],
            ),
            Block::new(BlockKind::CodeChild, vec![inline_plain("x=1")]),
        ];
        let merged = convert(run);
        assert_eq!(
            merged,
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
    fn test_non_composite_kinds_pass_through() {
        let run = vec![Block::new(
            BlockKind::Heading { size: 2 },
            vec![inline_plain("t")],
        )];
        assert_eq!(convert(run.clone()), run);
    }
}
