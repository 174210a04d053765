//! Fenced code block parsing utilities.
//!
//! A fence opener hands control to [`parse_fenced_code_block`], which consumes
//! a variable number of following lines verbatim. Body lines never pass
//! through the block classifier or the inline tokenizer; keeping them out of
//! those stages is the whole point of handling the fence as a unit.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{Block, BlockKind, Inline, Node};

// ``` plus an optional language tag and nothing else
static FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^```(\w*)$").unwrap());

/// Try to parse a fence line, returning the language tag (possibly empty).
pub(crate) fn try_parse_fence_open(line: &str) -> Option<&str> {
    let caps = FENCE.captures(line)?;
    Some(caps.get(1)?.as_str())
}

/// Parse a fenced code block starting at `lines[0]`, which must be a fence
/// opener. Returns the emitted blocks and the number of lines consumed,
/// counting the opener and, when present, the closer.
///
/// A fence with no closing line consumes the rest of the input; that is
/// defined behavior, not an error.
pub(crate) fn parse_fenced_code_block(lines: &[&str]) -> (Vec<Block>, usize) {
    let language = lines
        .first()
        .and_then(|line| try_parse_fence_open(line))
        .unwrap_or_default();

    let (body, consumed) = match lines[1..].iter().position(|line| FENCE.is_match(line)) {
        // close found: body sits strictly between opener and closer
        Some(close) => (&lines[1..close + 1], close + 2),
        None => (&lines[1..], lines.len()),
    };

    log::debug!(
        "fenced code block: language={:?}, body={} lines, consumed={}",
        language,
        body.len(),
        consumed
    );

    let mut blocks = vec![Block::new(
        BlockKind::CodeBlock {
            language: language.to_string(),
        },
        Vec::new(),
    )];
    blocks.extend(body.iter().map(|line| {
        Block::new(
            BlockKind::CodeChild,
            vec![Node::Inline(Inline::Plain {
                text: line.to_string(),
            })],
        )
    }));

    (blocks, consumed)
}
