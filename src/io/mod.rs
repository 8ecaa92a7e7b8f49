pub mod input;
pub mod output;

pub use input::*;
pub use output::*;

use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing a document
#[derive(Debug, Error)]
pub enum DocumentIoError {
    /// Source file does not exist
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    /// Any other I/O failure
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentIoError {
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
