use tracing::info;

use crate::models::RawDocument;
use crate::stages::{ProcessedBlock, assemble, reindent_block, segment, unwrap_block};

/// Result of a full normalization pass
#[derive(Debug)]
pub struct NormalizationResult<'a> {
    /// Blocks in document order with their reindented lines
    pub blocks: Vec<ProcessedBlock<'a>>,
    /// The cleaned text
    pub output: String,
}

/// Clean a loosely formatted feature document
///
/// Total over any input: text without a `Feature:` marker, including the
/// empty string, yields an empty string.
pub fn clean(raw: &str) -> String {
    let document = RawDocument::from_text(raw);
    normalize(&document).output
}

/// Run every stage over `document`, keeping the per-block results
///
/// Stages run in order for each block:
/// 1. Segment the document at `Feature:` markers
/// 2. Trim the block and strip artifact quotes from its ends
/// 3. Collapse doubled quotes and reindent each line by keyword
/// 4. Join lines, then join blocks with one blank line
pub fn normalize(document: &RawDocument) -> NormalizationResult<'_> {
    let blocks: Vec<ProcessedBlock<'_>> = segment(document)
        .iter()
        .map(|block| {
            let unwrapped = unwrap_block(block);
            let lines = reindent_block(&unwrapped);
            ProcessedBlock { unwrapped, lines }
        })
        .collect();

    let output = assemble(&blocks);

    info!(
        "Normalized {} blocks ({} bytes in, {} bytes out)",
        blocks.len(),
        document.as_str().len(),
        output.len()
    );

    NormalizationResult { blocks, output }
}
