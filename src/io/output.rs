use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use super::DocumentIoError;
use crate::models::{Category, QuoteArtifact};
use crate::normalizer::NormalizationResult;

/// Where cleaned text goes
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Echo the cleaned document on stdout
    pub print_to_stdout: bool,
    /// Persist the cleaned document to the output path
    pub write_output: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            print_to_stdout: true,
            write_output: true,
        }
    }
}

/// Write cleaned text to disk, replacing any existing file
pub fn write_document(path: &Path, text: &str) -> Result<(), DocumentIoError> {
    std::fs::write(path, text).map_err(|e| DocumentIoError::from_io(path, e))?;
    debug!("Wrote {} bytes to {:?}", text.len(), path);
    Ok(())
}

/// Per-document summary of what the normalizer did
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub blocks: Vec<BlockReport>,
    /// Lines across all blocks
    pub total_lines: usize,
    /// Lines that matched no keyword and kept their own indentation
    pub fallback_lines: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockReport {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub quote_artifact: QuoteArtifact,
    pub line_count: usize,
    pub categories: BTreeMap<Category, usize>,
}

impl DocumentReport {
    pub fn from_result(result: &NormalizationResult<'_>) -> Self {
        let blocks: Vec<BlockReport> = result
            .blocks
            .iter()
            .map(|block| {
                let mut categories = BTreeMap::new();
                for line in &block.lines {
                    *categories.entry(line.category).or_insert(0) += 1;
                }
                BlockReport {
                    index: block.unwrapped.index,
                    title: block.unwrapped.title().map(str::to_string),
                    quote_artifact: block.unwrapped.quote_artifact,
                    line_count: block.lines.len(),
                    categories,
                }
            })
            .collect();

        let total_lines: usize = blocks.iter().map(|b| b.line_count).sum();
        let fallback_lines: usize = blocks
            .iter()
            .filter_map(|b| b.categories.get(&Category::Fallback))
            .sum();

        Self {
            blocks,
            total_lines,
            fallback_lines,
        }
    }

    /// Format the report as plain text
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str("Document Analysis\n");
        output.push_str("=================\n");
        output.push_str(&format!("Blocks: {}\n", self.blocks.len()));
        output.push_str(&format!("Lines: {}\n", self.total_lines));
        output.push_str(&format!("Fallback lines: {}\n", self.fallback_lines));

        for block in &self.blocks {
            output.push('\n');
            output.push_str(&format!(
                "Block {}: {}\n",
                block.index,
                block.title.as_deref().unwrap_or("(untitled)")
            ));
            output.push_str(&format!("  artifact quotes: {:?}\n", block.quote_artifact));
            for (category, count) in &block.categories {
                output.push_str(&format!("  {}: {}\n", category.as_str(), count));
            }
        }

        output
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawDocument;
    use crate::normalizer::normalize;

    fn report(raw: &str) -> DocumentReport {
        let document = RawDocument::from_text(raw);
        DocumentReport::from_result(&normalize(&document))
    }

    #[test]
    fn test_clean_config_default() {
        let config = CleanConfig::default();
        assert!(config.print_to_stdout);
        assert!(config.write_output);
    }

    #[test]
    fn test_report_counts() {
        let report = report(
            "\"Feature: A\n  Scenario: s\n  Given x\n  # note\"\nFeature: B\n\n| a |",
        );

        assert_eq!(report.blocks.len(), 2);
        assert_eq!(report.total_lines, 7);
        assert_eq!(report.fallback_lines, 1);

        let first = &report.blocks[0];
        assert_eq!(first.title.as_deref(), Some("A"));
        assert_eq!(first.quote_artifact, QuoteArtifact::Enclosing);
        assert_eq!(first.categories[&Category::Step], 1);
        assert_eq!(first.categories[&Category::Fallback], 1);

        let second = &report.blocks[1];
        assert_eq!(second.categories[&Category::Empty], 1);
        assert_eq!(second.categories[&Category::TableRow], 1);
    }

    #[test]
    fn test_report_json_uses_category_names() {
        let report = report("Feature: A\n  Given x");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["blocks"][0]["categories"]["step"], 1);
        assert_eq!(json["blocks"][0]["quote_artifact"], "none");
    }

    #[test]
    fn test_write_document_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned_output.md");

        write_document(&path, "Feature: A\n    Given \u{a0}x").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Feature: A\n    Given \u{a0}x"
        );
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report("Feature: A").write_json(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"title\": \"A\""));
    }
}
