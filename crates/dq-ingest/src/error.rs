use std::path::PathBuf;

use thiserror::Error;

use dq_model::Dataset;

/// Load failures. Every variant is fatal to the whole run: the pipeline
/// never cleans a partially loaded bundle.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },
    #[error("read csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{dataset}: missing required columns: {}", columns.join(", "))]
    MissingColumns {
        dataset: Dataset,
        columns: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
