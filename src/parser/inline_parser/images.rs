//! Parsing for inline images (`![alt](src)`).

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Inline;

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)!\[(.*)\]\((.*)\)(.*)$").unwrap());

/// Try to split `text` around an image span, returning (head, node, tail).
pub(crate) fn try_parse_image(text: &str) -> Option<(&str, Inline, &str)> {
    let caps = IMAGE.captures(text)?;
    let head = caps.get(1)?.as_str();
    let alt = caps.get(2)?.as_str();
    let src = caps.get(3)?.as_str();
    let tail = caps.get(4)?.as_str();
    Some((
        head,
        Inline::Image {
            alt: alt.to_string(),
            src: src.to_string(),
        },
        tail,
    ))
}
