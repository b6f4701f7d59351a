use std::io;

use thiserror::Error;

use crate::engine::AnalyzeError;

/// IO-level errors for dataset loading and report writing
#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] AnalyzeError),
}
