//! Blockquote line parsing utilities.

use std::sync::LazyLock;

use regex::Regex;

static QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^> (.*)$").unwrap());

/// Try to parse a quote line, returning the notation-stripped text.
pub(crate) fn try_parse_quote(line: &str) -> Option<&str> {
    let caps = QUOTE.captures(line)?;
    Some(caps.get(1)?.as_str())
}
