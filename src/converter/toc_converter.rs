//! Table-of-contents construction.
//!
//! The flat heading sequence is split into runs, one tree per run; a heading
//! at the same level as the current root, or shallower, starts a new tree.
//! Inside a run each heading walks from the root into the last-opened node:
//! deeper level means child of the most recently opened node, equal level to
//! an existing child group means new sibling in that group. That walk is how
//! the nesting markdown never spells out is recovered.

use crate::ast::{Block, BlockKind, Document, Inline, Node};

/// One node of the heading tree. Lives only between the tree builder and
/// the renderer below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TocNode {
    pub(crate) depth: usize,
    pub(crate) text: String,
    pub(crate) children: Vec<TocNode>,
}

impl TocNode {
    fn leaf(depth: usize, text: &str) -> Self {
        Self {
            depth,
            text: text.to_string(),
            children: Vec::new(),
        }
    }
}

/// The (depth, flattened text) of every heading, in document order.
pub(crate) fn collect_headings(document: &Document) -> Vec<(usize, String)> {
    document
        .content
        .iter()
        .filter_map(|block| match block.kind {
            BlockKind::Heading { size } => Some((size, block.display_text())),
            _ => None,
        })
        .collect()
}

/// Render the table of contents for the given heading sequence.
pub(crate) fn convert(headings: &[(usize, String)]) -> Vec<Block> {
    render(&build_forest(headings))
}

/// Build one tree per root run. Empty input yields an empty forest.
pub(crate) fn build_forest(headings: &[(usize, String)]) -> Vec<TocNode> {
    split_per_root(headings).into_iter().map(build_tree).collect()
}

/// Split the sequence wherever a heading is at most as deep as the current
/// root; each piece becomes one tree.
fn split_per_root<'a>(headings: &'a [(usize, String)]) -> Vec<&'a [(usize, String)]> {
    let mut runs = Vec::new();
    if headings.is_empty() {
        return runs;
    }

    let mut root = 0;
    for current in 1..headings.len() {
        if headings[root].0 >= headings[current].0 {
            runs.push(&headings[root..current]);
            root = current;
        }
    }
    runs.push(&headings[root..]);
    runs
}

fn build_tree(run: &[(usize, String)]) -> TocNode {
    let mut root = TocNode::leaf(run[0].0, &run[0].1);
    for (depth, text) in &run[1..] {
        attach(&mut root, *depth, text);
    }
    root
}

/// Walk into the last child until reaching a node with no children, or one
/// whose first child sits at the new heading's level, and attach there.
fn attach(node: &mut TocNode, depth: usize, text: &str) {
    let is_tail = node.children.is_empty();
    let has_sibling = node
        .children
        .first()
        .is_some_and(|child| child.depth == depth);

    if is_tail || has_sibling {
        node.children.push(TocNode::leaf(depth, text));
        return;
    }

    if let Some(last) = node.children.last_mut() {
        attach(last, depth, text);
    }
}

// The root list starts flush left; its item sits one level in. Every
// nesting level injects a list and an item, so both counters advance by 2.
const ROOT_UL_INDENT: usize = 0;
const ROOT_LI_INDENT: usize = 1;
const INDENT_INCREMENT: usize = 2;

/// Render each tree to a list block of anchor links, nesting a child list
/// under a wrapper item wherever a node has children.
fn render(forest: &[TocNode]) -> Vec<Block> {
    forest
        .iter()
        .map(|node| {
            let mut children = vec![Node::Block(link_item(node, ROOT_LI_INDENT))];
            if !node.children.is_empty() {
                children.push(Node::Block(render_children(
                    &node.children,
                    ROOT_LI_INDENT,
                    ROOT_UL_INDENT + INDENT_INCREMENT,
                )));
            }
            Block::new(
                BlockKind::List {
                    indent_depth: ROOT_UL_INDENT,
                },
                children,
            )
        })
        .collect()
}

/// A wrapper item holding the nested list for one node's children.
fn render_children(children: &[TocNode], li_indent: usize, ul_indent: usize) -> Block {
    let child_li_indent = li_indent + INDENT_INCREMENT;
    let child_ul_indent = ul_indent + INDENT_INCREMENT;

    let mut items = Vec::new();
    for child in children {
        items.push(Node::Block(link_item(child, child_li_indent)));
        if !child.children.is_empty() {
            items.push(Node::Block(render_children(
                &child.children,
                child_li_indent,
                child_ul_indent,
            )));
        }
    }

    Block::new(
        BlockKind::ListItem {
            indent_depth: li_indent,
        },
        vec![Node::Block(Block::new(
            BlockKind::List {
                indent_depth: ul_indent,
            },
            items,
        ))],
    )
}

/// An item holding the `#text` anchor for one node.
fn link_item(node: &TocNode, indent_depth: usize) -> Block {
    Block::new(
        BlockKind::ListItem { indent_depth },
        vec![Node::Inline(Inline::Link {
            text: node.text.clone(),
            href: format!("#{}", node.text),
        })],
    )
}
