//! HTML fragments for block nodes.
//!
//! Each builder substitutes into a fixed tag template. `child_text` arrives
//! fully built: inline fragments concatenated, nested block fragments each
//! followed by the configured line break, so multi-line children land one
//! per line inside the enclosing tag.

use crate::ast::{Block, BlockKind, Node};
use crate::config::Settings;

/// Build the HTML fragment for one block given its built child text.
pub(crate) fn build(block: &Block, child_text: &str, settings: &Settings) -> String {
    match &block.kind {
        BlockKind::Plain { indent_depth } => {
            format!("{}{child_text}", indent_text(*indent_depth, settings))
        }
        BlockKind::Paragraph { indent_depth } => {
            build_paragraph(*indent_depth, child_text, settings)
        }
        BlockKind::Heading { size } => build_heading(block, *size, child_text, settings),
        BlockKind::Quote => build_quote(child_text, settings),
        BlockKind::List { indent_depth } => build_list(*indent_depth, child_text, settings),
        BlockKind::ListItem { indent_depth } => {
            build_list_item(block, *indent_depth, child_text, settings)
        }
        BlockKind::CodeBlock { language } => build_code_block(language, child_text, settings),
        // only reachable on an ungrouped document; emit the body as-is
        BlockKind::CodeChild => child_text.to_string(),
        BlockKind::HorizontalRule => {
            format!("<hr class=\"{}\">", settings.class_name.hr)
        }
        // an unexpanded marker has no HTML form
        BlockKind::TableOfContents => String::new(),
    }
}

fn indent_text(depth: usize, settings: &Settings) -> String {
    settings.indent.repeat(depth)
}

// <p class="...">
//     text
// </p>
fn build_paragraph(indent_depth: usize, child_text: &str, settings: &Settings) -> String {
    let indent = indent_text(indent_depth, settings);
    let nl = &settings.newline_code;
    format!(
        "{indent}<p class=\"{}\">{nl}{indent}{}{child_text}{nl}{indent}</p>",
        settings.class_name.p, settings.indent
    )
}

// <h2 id="..." class="...">
//     text
// </h2>
// The id lets the table of contents anchor to the heading.
fn build_heading(block: &Block, size: usize, child_text: &str, settings: &Settings) -> String {
    let nl = &settings.newline_code;
    format!(
        "<h{size} id=\"{}\" class=\"{}\">{nl}{}{child_text}{nl}</h{size}>",
        block.display_text(),
        settings.class_name.heading(size),
        settings.indent
    )
}

// <blockquote class="...">
//     <p>...</p>
// </blockquote>
// The per-line paragraphs carry their own indent and line breaks.
fn build_quote(child_text: &str, settings: &Settings) -> String {
    format!(
        "<blockquote class=\"{}\">{}{child_text}</blockquote>",
        settings.class_name.blockquote, settings.newline_code
    )
}

// <ul class="...">
//     <li>...</li>
// </ul>
// Item indentation is the item builder's job.
fn build_list(indent_depth: usize, child_text: &str, settings: &Settings) -> String {
    let indent = indent_text(indent_depth, settings);
    format!(
        "{indent}<ul class=\"{}\">{}{child_text}{indent}</ul>",
        settings.class_name.ul, settings.newline_code
    )
}

fn build_list_item(
    block: &Block,
    indent_depth: usize,
    child_text: &str,
    settings: &Settings,
) -> String {
    let indent = indent_text(indent_depth, settings);
    let nl = &settings.newline_code;

    // An item wrapping a nested list delegates indentation and line breaks
    // to that list and switches to the nested class.
    let is_nested = block.children.iter().any(|child| {
        matches!(child, Node::Block(inner) if matches!(inner.kind, BlockKind::List { .. }))
    });

    if is_nested {
        format!(
            "{indent}<li class=\"{}\">{nl}{child_text}{indent}</li>",
            settings.class_name.li_nested
        )
    } else {
        format!(
            "{indent}<li class=\"{}\">{nl}{indent}{}{child_text}{nl}{indent}</li>",
            settings.class_name.li, settings.indent
        )
    }
}

// <pre>
//     <code class="language-...">line
//     </code>
// </pre>
// The code tag opens flush against the first body line so the rendered
// block gains no leading blank. Only code bodies are escaped; everything
// else reached the emitter markup-free.
fn build_code_block(language: &str, child_text: &str, settings: &Settings) -> String {
    let nl = &settings.newline_code;
    format!(
        "<pre>{nl}{}<code class=\"{}\">{}{}</code>{nl}</pre>",
        settings.indent,
        settings.code_block_class(language),
        escape_html(child_text),
        settings.indent
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
