use std::io;

use thiserror::Error;

use crate::engine::AnalyzeError;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Dataset error: {0}")]
    Dataset(#[from] IoError),

    #[error("Analyze error: {0}")]
    Analyze(#[from] AnalyzeError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
