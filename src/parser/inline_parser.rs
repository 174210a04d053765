//! Recursive inline tokenization.
//!
//! A fragment is split around the first notation that matches, in priority
//! order link, code span, image; the pieces on either side are tokenized
//! again. Each notation strictly shrinks the fragment, so the recursion
//! terminates. A fragment matching nothing, malformed spans included,
//! becomes a single plain node.

mod code_spans;
mod images;
mod links;

use crate::ast::Inline;

use code_spans::try_parse_code_span;
use images::try_parse_image;
use links::try_parse_link;

fn split_first_match(text: &str) -> Option<(&str, Inline, &str)> {
    if let Some(hit) = try_parse_link(text) {
        return Some(hit);
    }
    if let Some(hit) = try_parse_code_span(text) {
        return Some(hit);
    }
    try_parse_image(text)
}

/// Tokenize a notation-stripped text fragment into inline nodes whose
/// concatenated display text reconstructs the fragment with markup removed.
/// Always returns at least one node.
pub(crate) fn parse(text: &str) -> Vec<Inline> {
    let Some((head, inline, tail)) = split_first_match(text) else {
        return vec![Inline::Plain {
            text: text.to_string(),
        }];
    };

    let mut nodes = Vec::new();
    if !head.is_empty() {
        nodes.extend(parse(head));
    }
    nodes.push(inline);
    if !tail.is_empty() {
        nodes.extend(parse(tail));
    }
    nodes
}
