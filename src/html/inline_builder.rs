//! HTML fragments for inline nodes.

use crate::ast::Inline;
use crate::config::Settings;

/// Build the HTML fragment for one inline node.
pub(crate) fn build(inline: &Inline, settings: &Settings) -> String {
    match inline {
        Inline::Plain { text } => text.clone(),
        Inline::Link { text, href } => {
            format!(
                "<a href=\"{href}\" class=\"{}\">{text}</a>",
                settings.class_name.a
            )
        }
        Inline::Code { text } => {
            format!("<code class=\"{}\">{text}</code>", settings.class_name.code)
        }
        Inline::Image { alt, src } => format!("<img src=\"{src}\" alt=\"{alt}\">"),
    }
}
