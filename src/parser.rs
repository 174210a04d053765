//! Document assembly.
//!
//! Walks the source lines once, front to back. A fence opener hands the
//! remaining lines to the multi-line capture in
//! [`block_parser::code_blocks`], which reports how many it consumed; every
//! other line is classified on its own. The result is the flat document the
//! converter stage groups afterwards.

pub(crate) mod block_parser;
pub(crate) mod inline_parser;

use crate::ast::{Block, Document, Node};

/// Parse source lines into a flat document, order preserved exactly.
pub fn parse_lines(lines: &[&str]) -> Document {
    let mut content = Vec::new();
    let mut pos = 0;

    while pos < lines.len() {
        let line = lines[pos];
        log::debug!("Parsing line {}: {:?}", pos + 1, line);

        if block_parser::code_blocks::try_parse_fence_open(line).is_some() {
            let (blocks, consumed) = block_parser::code_blocks::parse_fenced_code_block(&lines[pos..]);
            content.extend(blocks);
            pos += consumed;
            continue;
        }

        content.push(parse_line(line));
        pos += 1;
    }

    Document { content }
}

/// Classify one line, feeding its notation-stripped text through the inline
/// tokenizer first.
fn parse_line(line: &str) -> Block {
    let inline_text = block_parser::extract_inline_text(line);
    let children = inline_parser::parse(inline_text)
        .into_iter()
        .map(Node::Inline)
        .collect();
    block_parser::classify(line, children)
}
