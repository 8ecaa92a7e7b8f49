use tracing::debug;

use crate::models::{Category, ReindentedLine, UnwrappedBlock, is_edge_whitespace};

/// Perform Stage 2: Line classification and reindentation
///
/// Each line is handled on its own:
/// 1. Trailing whitespace is removed
/// 2. Every `""` collapses to `"`
/// 3. The line is classified by its leading keyword (after spaces and tabs)
/// 4. Keyword lines get their canonical indent, blank lines become empty,
///    anything else is kept as it is after steps 1 and 2
pub fn reindent_block(block: &UnwrappedBlock<'_>) -> Vec<ReindentedLine> {
    let lines: Vec<ReindentedLine> = block.text.split('\n').map(reindent_line).collect();

    debug!(
        "Block {}: reindented {} lines ({} fallback)",
        block.index,
        lines.len(),
        lines
            .iter()
            .filter(|l| l.category == Category::Fallback)
            .count()
    );

    lines
}

/// Classify and reindent a single line
pub fn reindent_line(line: &str) -> ReindentedLine {
    let content = collapse_doubled_quotes(line.trim_end_matches(is_edge_whitespace));
    let token = content.trim_start_matches([' ', '\t']);
    let category = Category::classify(token);

    let text = match (category, category.indent()) {
        (Category::Empty, _) => String::new(),
        (_, Some(indent)) => format!("{indent}{token}"),
        (_, None) => content,
    };

    ReindentedLine { category, text }
}

/// Replace each non-overlapping `""` with `"`, scanning left to right
///
/// Runs of three or more quotes are reduced pairwise, so `"""` becomes `""`.
pub fn collapse_doubled_quotes(line: &str) -> String {
    line.replace("\"\"", "\"")
}
