//! Heading parsing utilities.

use std::sync::LazyLock;

use regex::Regex;

// 1-6 marker characters, then a mandatory space
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6}) (.*)$").unwrap());

/// Try to parse a heading line, returning (size, notation-stripped text).
pub(crate) fn try_parse_heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING.captures(line)?;
    let marker = caps.get(1)?.as_str();
    let text = caps.get(2)?.as_str();
    Some((marker.len(), text))
}
