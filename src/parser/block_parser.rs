//! Per-line block classification.
//!
//! One notation module per construct; [`classify`] and
//! [`extract_inline_text`] try them in the same fixed order. The order is
//! load-bearing: the first notation that matches decides the line's kind,
//! and anything unmatched falls through to a paragraph.

pub(crate) mod code_blocks;
mod headings;
mod horizontal_rules;
mod lists;
mod quotes;
mod toc_marker;

use crate::ast::{Block, BlockKind, Node};

use code_blocks::try_parse_fence_open;
use headings::try_parse_heading;
use horizontal_rules::is_horizontal_rule;
use lists::try_parse_list_item;
use quotes::try_parse_quote;
use toc_marker::is_toc_marker;

/// Strip the block notation from a line, leaving the text the inline
/// tokenizer should see. Notations with no inline payload (fence, rule,
/// toc marker) yield the empty string.
pub(crate) fn extract_inline_text(line: &str) -> &str {
    if let Some((_, text)) = try_parse_heading(line) {
        return text;
    }
    if let Some(text) = try_parse_quote(line) {
        return text;
    }
    if let Some(text) = try_parse_list_item(line) {
        return text;
    }
    if try_parse_fence_open(line).is_some() || is_horizontal_rule(line) || is_toc_marker(line) {
        return "";
    }
    line
}

/// Classify one source line into a block holding the given inline children.
/// Total: a line matching no notation becomes a paragraph.
pub(crate) fn classify(line: &str, children: Vec<Node>) -> Block {
    if let Some((size, _)) = try_parse_heading(line) {
        return Block::new(BlockKind::Heading { size }, children);
    }
    if try_parse_quote(line).is_some() {
        return Block::new(BlockKind::Quote, children);
    }
    if try_parse_list_item(line).is_some() {
        return Block::new(BlockKind::List { indent_depth: 0 }, children);
    }
    if let Some(language) = try_parse_fence_open(line) {
        return Block::new(
            BlockKind::CodeBlock {
                language: language.to_string(),
            },
            children,
        );
    }
    if is_horizontal_rule(line) {
        return Block::new(BlockKind::HorizontalRule, children);
    }
    if is_toc_marker(line) {
        return Block::new(BlockKind::TableOfContents, children);
    }
    Block::new(BlockKind::Paragraph { indent_depth: 0 }, children)
}
