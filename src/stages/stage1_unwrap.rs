use tracing::debug;

use crate::models::{
    ARTIFACT_QUOTE, Block, FEATURE_MARKER, QuoteArtifact, UnwrappedBlock, is_edge_whitespace,
};

/// Perform Stage 1: Block unwrapping
///
/// Trims surrounding whitespace from the block, then removes at most one
/// artifact quote from each end. A trailing quote is only treated as an
/// artifact when the block ends with one; a leading quote alone is left in place.
pub fn unwrap_block<'a>(block: &Block<'a>) -> UnwrappedBlock<'a> {
    let trimmed = block.text.trim_matches(is_edge_whitespace);
    let (text, quote_artifact) = strip_artifact_quotes(trimmed);

    if quote_artifact != QuoteArtifact::None {
        debug!("Block {}: stripped {:?} artifact quotes", block.index, quote_artifact);
    }

    UnwrappedBlock {
        index: block.index,
        text,
        quote_artifact,
    }
}

fn strip_artifact_quotes(trimmed: &str) -> (&str, QuoteArtifact) {
    if !trimmed.ends_with(ARTIFACT_QUOTE) {
        return (trimmed, QuoteArtifact::None);
    }

    let without_trailing = &trimmed[..trimmed.len() - ARTIFACT_QUOTE.len_utf8()];

    match trimmed.strip_prefix(ARTIFACT_QUOTE) {
        Some(rest) if rest.starts_with(FEATURE_MARKER) => {
            // `rest` still ends with the trailing quote
            (&rest[..rest.len() - ARTIFACT_QUOTE.len_utf8()], QuoteArtifact::Enclosing)
        }
        _ if trimmed.starts_with(FEATURE_MARKER) => (without_trailing, QuoteArtifact::Trailing),
        _ => (trimmed, QuoteArtifact::None),
    }
}
