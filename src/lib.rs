pub mod io;
pub mod models;
pub mod normalizer;
pub mod stages;

pub use io::{
    BlockReport, CleanConfig, DocumentIoError, DocumentReport, read_document, write_document,
};
pub use models::{Block, Category, QuoteArtifact, RawDocument, ReindentedLine, UnwrappedBlock};
pub use normalizer::{NormalizationResult, clean, normalize};
pub use stages::{ProcessedBlock, assemble, reindent_block, reindent_line, segment, unwrap_block};
