//! The semantic document tree produced by the parsing pipeline.
//!
//! Every pipeline stage consumes a [`Document`] and builds a fresh one; nodes
//! are never mutated after construction. Before grouping, a block's children
//! are inline nodes only; after grouping, the composite kinds (quote, list,
//! code block) hold nested blocks instead.

use std::mem;

use serde::Serialize;

/// A span of text within a block, with its markup already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "inline", rename_all = "snake_case")]
pub enum Inline {
    /// Text that belongs to no inline notation.
    Plain { text: String },
    /// An `[text](href)` link.
    Link { text: String, href: String },
    /// A backtick-delimited code span.
    Code { text: String },
    /// An `![alt](src)` image. Contributes nothing to display text.
    Image { alt: String, src: String },
}

impl Inline {
    /// The text this node contributes to the flattened display text.
    pub fn display_text(&self) -> &str {
        match self {
            Inline::Plain { text } | Inline::Link { text, .. } | Inline::Code { text } => text,
            Inline::Image { .. } => "",
        }
    }
}

/// Discriminates the block constructs of the dialect.
///
/// `indent_depth` is presentation bookkeeping consumed only by the HTML
/// emitter; it never influences parsing or grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockKind {
    /// Carries text that maps to no tag of its own, e.g. a code block body line.
    Plain { indent_depth: usize },
    Paragraph { indent_depth: usize },
    /// `size` mirrors the heading level, 1 through 6.
    Heading { size: usize },
    Quote,
    List { indent_depth: usize },
    ListItem { indent_depth: usize },
    /// The head of a fenced code block. `language` may be empty.
    CodeBlock { language: String },
    /// One verbatim body line of a fenced code block, before grouping.
    CodeChild,
    HorizontalRule,
    /// The `[toc]` marker; replaced by the rendered table of contents.
    TableOfContents,
}

/// Either child a block may hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Inline(Inline),
    Block(Block),
}

/// One structural unit of the document: a kind plus its ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    #[serde(flatten)]
    pub kind: BlockKind,
    pub children: Vec<Node>,
}

impl Block {
    pub fn new(kind: BlockKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    /// Whether two blocks belong to the same grouping run.
    ///
    /// A code block head and its body lines count as one kind, so a whole
    /// fence forms a single run; every other kind must match exactly.
    pub fn is_same_kind(&self, other: &Block) -> bool {
        use BlockKind::{CodeBlock, CodeChild};
        match (&self.kind, &other.kind) {
            (CodeBlock { .. } | CodeChild, CodeBlock { .. } | CodeChild) => true,
            (left, right) => mem::discriminant(left) == mem::discriminant(right),
        }
    }

    /// Flattened text of all inline leaves in order, markup removed.
    pub fn display_text(&self) -> String {
        let mut text = String::new();
        collect_display_text(&self.children, &mut text);
        text
    }
}

fn collect_display_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Inline(inline) => out.push_str(inline.display_text()),
            Node::Block(block) => collect_display_text(&block.children, out),
        }
    }
}

/// The ordered sequence of top-level blocks; order equals source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub content: Vec<Block>,
}
