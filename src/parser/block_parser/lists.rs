//! List item line parsing utilities.

use std::sync::LazyLock;

use regex::Regex;

// Both bullet markers the dialect accepts
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*-] (.*)$").unwrap());

/// Try to parse a list item line, returning the notation-stripped text.
pub(crate) fn try_parse_list_item(line: &str) -> Option<&str> {
    let caps = LIST_ITEM.captures(line)?;
    Some(caps.get(1)?.as_str())
}
