use tracing::debug;

use crate::models::{ARTIFACT_QUOTE, Block, FEATURE_MARKER, RawDocument};

/// Perform Stage 0: Block segmentation
///
/// Every block starts at a `Feature:` marker, or at an artifact quote directly
/// before it, and runs up to the start of the next marker or the end of the
/// document. Text before the first marker belongs to no block. The scan is not
/// line-anchored, so a marker in the middle of a line still opens a block.
pub fn segment(document: &RawDocument) -> Vec<Block<'_>> {
    let text = document.as_str();
    let starts = block_starts(text);

    let blocks: Vec<Block<'_>> = starts
        .iter()
        .enumerate()
        .map(|(index, &start)| {
            let end = starts.get(index + 1).copied().unwrap_or(text.len());
            Block {
                index,
                text: &text[start..end],
            }
        })
        .collect();

    debug!("Segmented {} blocks", blocks.len());
    blocks
}

/// Byte offsets at which blocks begin, in ascending order
fn block_starts(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut starts = Vec::new();
    // Earliest offset the next block may start at: a block always keeps its own marker
    let mut floor = 0;

    for (marker_at, _) in text.match_indices(FEATURE_MARKER) {
        let quoted = marker_at > floor && bytes[marker_at - 1] == ARTIFACT_QUOTE as u8;
        starts.push(if quoted { marker_at - 1 } else { marker_at });
        floor = marker_at + FEATURE_MARKER.len();
    }

    starts
}
