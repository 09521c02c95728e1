// Tue Jan 13 2026 - Alex

pub mod writer;
pub mod report;

pub use writer::{ArtifactPaths, ArtifactWriter, MAPPING_COLUMNS};
pub use report::RunReport;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write mapping {path:?}: {source}")]
    Mapping {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
