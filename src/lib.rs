pub mod ast;
pub mod config;
pub mod converter;
pub mod html;
pub mod parser;

pub use ast::{Block, BlockKind, Document, Inline, Node};
pub use config::{ClassNames, Settings};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a Markdown string into its converted document tree.
///
/// Line endings are normalized, the lines are classified into a flat
/// document, and same-kind runs are grouped into composite blocks with any
/// `[toc]` marker expanded. The result is what [`render`] hands to the HTML
/// emitter.
///
/// # Examples
///
/// ```rust
/// use aplomb::parse;
///
/// let document = parse("# Heading\nParagraph text.");
/// println!("{:#?}", document);
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown content to parse
pub fn parse(input: &str) -> Document {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let normalized_input = input.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized_input.lines().collect();

    let document = parser::parse_lines(&lines);
    converter::convert(document)
}

/// Converts a Markdown string to styled HTML.
///
/// Runs the full pipeline: parse, group, then emit with the given settings
/// (defaults when `None`).
///
/// # Examples
///
/// ```rust
/// use aplomb::render;
///
/// let html = render("# Heading\n\nParagraph text.", None);
/// assert!(html.contains("<h1"));
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown content to convert
/// * `settings` - Optional presentation settings (defaults when `None`)
pub fn render(input: &str, settings: Option<Settings>) -> String {
    let settings = settings.unwrap_or_default();
    let document = parse(input);
    html::HtmlBuilder::new(&settings).build(&document)
}
