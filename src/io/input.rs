use std::path::Path;

use tracing::debug;

use super::DocumentIoError;
use crate::models::RawDocument;

/// Read a feature document from disk
///
/// The file must be valid UTF-8. A missing file is reported as
/// [`DocumentIoError::NotFound`], anything else as [`DocumentIoError::Io`].
pub fn read_document(path: &Path) -> Result<RawDocument, DocumentIoError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| DocumentIoError::from_io(path, e))?;
    debug!("Read {} bytes from {:?}", content.len(), path);
    Ok(RawDocument::from_text(&content))
}
