//! Parsing for inline code spans (`` `code` ``).

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Inline;

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.*)`(.*)`(.*)$").unwrap());

/// Try to split `text` around a code span, returning (head, node, tail).
pub(crate) fn try_parse_code_span(text: &str) -> Option<(&str, Inline, &str)> {
    let caps = CODE_SPAN.captures(text)?;
    let head = caps.get(1)?.as_str();
    let code = caps.get(2)?.as_str();
    let tail = caps.get(3)?.as_str();
    Some((
        head,
        Inline::Code {
            text: code.to_string(),
        },
        tail,
    ))
}
