use thiserror::Error;

/// Input-gate errors raised before any aggregation begins
///
/// All four kinds fail fast: `analyze` produces no partial results.
/// Unresolved seller/product references during the join are deliberately
/// not represented here; they are warnings, not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Invalid structure: {0} is not an array")]
    InvalidStructure(&'static str),

    #[error("Empty input: {0} contains no records")]
    EmptyInput(&'static str),

    #[error("Invalid options: expected an options record")]
    InvalidOptions,

    #[error("Missing strategy: {0}")]
    MissingStrategy(String),
}
