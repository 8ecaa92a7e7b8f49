use tracing::debug;

use crate::models::{ReindentedLine, UnwrappedBlock};

/// Separator placed between consecutive blocks (one blank line)
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// A block that has been through unwrapping and reindentation
#[derive(Debug, Clone)]
pub struct ProcessedBlock<'a> {
    pub unwrapped: UnwrappedBlock<'a>,
    pub lines: Vec<ReindentedLine>,
}

impl ProcessedBlock<'_> {
    /// Whether the block contributes to the output
    pub fn has_content(&self) -> bool {
        !self.lines.is_empty() || !self.unwrapped.text.is_empty()
    }

    /// The block's lines joined with `\n`
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Perform Stage 3: Assembly
///
/// Joins every contributing block, in document order, with [`BLOCK_SEPARATOR`].
/// No separator is added before the first block or after the last.
pub fn assemble(blocks: &[ProcessedBlock<'_>]) -> String {
    let rendered: Vec<String> = blocks
        .iter()
        .filter(|b| b.has_content())
        .map(ProcessedBlock::render)
        .collect();

    debug!("Assembled {} of {} blocks", rendered.len(), blocks.len());

    rendered.join(BLOCK_SEPARATOR)
}
