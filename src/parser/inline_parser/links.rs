//! Parsing for inline links (`[text](href)`).

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Inline;

// The head group must not end in `!`, so an image's bracket never reads as a
// link. Greedy groups split around the last eligible bracket pair; the head
// is re-tokenized by the caller, which restores left-to-right order.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*[^!]|)\[(.*)\]\((.*)\)(.*)$").unwrap());

/// Try to split `text` around a link span, returning (head, node, tail).
pub(crate) fn try_parse_link(text: &str) -> Option<(&str, Inline, &str)> {
    let caps = LINK.captures(text)?;
    let head = caps.get(1)?.as_str();
    let label = caps.get(2)?.as_str();
    let href = caps.get(3)?.as_str();
    let tail = caps.get(4)?.as_str();
    Some((
        head,
        Inline::Link {
            text: label.to_string(),
            href: href.to_string(),
        },
        tail,
    ))
}
