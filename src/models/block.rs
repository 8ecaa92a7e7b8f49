use serde::Serialize;

/// Marker that opens a block
pub const FEATURE_MARKER: &str = "Feature:";

/// Artifact quote character left behind by lossy extraction
pub const ARTIFACT_QUOTE: char = '"';

/// Input buffer with line terminators normalized to `\n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    text: String,
}

impl RawDocument {
    /// Create a document from raw text, replacing every CRLF pair with LF
    pub fn from_text(raw: &str) -> Self {
        Self {
            text: raw.replace("\r\n", "\n"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Whitespace removed from the ends of blocks and lines
///
/// Unicode `White_Space` plus the ASCII information separators `\x1c`..=`\x1f`.
pub fn is_edge_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// A span of the document governed by one `Feature:` marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Position of the block in document order
    pub index: usize,
    /// The block text, still carrying artifact quotes and surrounding whitespace
    pub text: &'a str,
}

/// Which artifact quotes were removed from the ends of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteArtifact {
    /// `"Feature: ... "` - leading and trailing quote removed
    Enclosing,
    /// `Feature: ... "` - trailing quote removed
    Trailing,
    /// Nothing removed
    None,
}

/// A block after trimming and block-level quote removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrappedBlock<'a> {
    pub index: usize,
    /// Text handed to the line classifier
    pub text: &'a str,
    pub quote_artifact: QuoteArtifact,
}

impl UnwrappedBlock<'_> {
    /// Feature title taken from the first line, if the block still starts with the marker
    pub fn title(&self) -> Option<&str> {
        let first_line = self.text.lines().next()?;
        first_line
            .strip_prefix(FEATURE_MARKER)
            .map(|rest| rest.trim_matches(is_edge_whitespace))
    }
}
