//! Pipeline errors

use std::path::PathBuf;
use thiserror::Error;

/// Why a fit did not produce a model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainError {
    #[error("data source not found: {}", .path.display())]
    DataSourceMissing { path: PathBuf },

    #[error("malformed data source: {0}")]
    DataSourceMalformed(String),
}

/// Caller-visible failures of the pipeline interface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("model is offline")]
    ModelOffline,

    #[error("record not found: {0}")]
    RecordNotFound(String),
}
