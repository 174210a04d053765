//! HTML emission.
//!
//! Walks the grouped document and substitutes each node into its tag
//! template. By the pipeline invariant every notation has been resolved
//! before this stage runs, so the emitter only ever sees finished block and
//! inline kinds; the one place raw text survives is a code block body,
//! which is escaped here.

pub(crate) mod block_builder;
pub(crate) mod inline_builder;

use crate::ast::{Block, Document, Node};
use crate::config::Settings;

/// Builds the output HTML for a converted document.
pub struct HtmlBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> HtmlBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Emit the whole document, one top-level block per line group.
    pub fn build(&self, document: &Document) -> String {
        let mut html = String::new();
        for block in &document.content {
            html.push_str(&self.build_block(block));
            html.push_str(&self.settings.newline_code);
        }
        html
    }

    fn build_block(&self, block: &Block) -> String {
        let mut child_text = String::new();
        for child in &block.children {
            match child {
                Node::Inline(inline) => {
                    child_text.push_str(&inline_builder::build(inline, self.settings));
                }
                Node::Block(inner) => {
                    child_text.push_str(&self.build_block(inner));
                    child_text.push_str(&self.settings.newline_code);
                }
            }
        }
        block_builder::build(block, &child_text, self.settings)
    }
}
