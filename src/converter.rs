//! Block grouping and composite conversion.
//!
//! The classifier works one line at a time, so at line N it cannot know
//! whether line N+1 continues the same quote, list, or fence. This stage
//! sees the whole flat document, folds maximal same-kind runs into composite
//! blocks, and expands any `[toc]` marker against the document's headings.

pub(crate) mod block_converter;
pub(crate) mod toc_converter;

use crate::ast::{Block, BlockKind, Document};

/// Produce the grouped document the HTML emitter consumes.
pub fn convert(document: Document) -> Document {
    // The marker expands against the ungrouped heading sequence, collected
    // before the runs are consumed.
    let headings = toc_converter::collect_headings(&document);

    let mut content = Vec::new();
    for run in split_into_runs(document.content) {
        if matches!(run[0].kind, BlockKind::TableOfContents) {
            for _ in &run {
                content.extend(toc_converter::convert(&headings));
            }
            continue;
        }
        content.extend(block_converter::convert(run));
    }

    Document { content }
}

/// Split into maximal runs of adjacent same-kind blocks, where a code head
/// and its body lines count as one kind. Every run is non-empty.
fn split_into_runs(blocks: Vec<Block>) -> Vec<Vec<Block>> {
    let mut runs: Vec<Vec<Block>> = Vec::new();
    for block in blocks {
        let continues_run = runs
            .last()
            .is_some_and(|run| run[0].is_same_kind(&block));
        if continues_run {
            let last = runs.len() - 1;
            runs[last].push(block);
        } else {
            runs.push(vec![block]);
        }
    }
    runs
}
