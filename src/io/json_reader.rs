use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::error::IoError;
use crate::domain::SalesData;
use crate::engine::validate_shape;

/// Read a raw dataset document from a file
pub fn read_document(path: impl AsRef<Path>) -> Result<Value, IoError> {
    let file = File::open(path)?;
    document_from_reader(BufReader::new(file))
}

/// Read a raw dataset document from any reader
pub fn document_from_reader<R: Read>(reader: R) -> Result<Value, IoError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Turn a raw document into the typed dataset
///
/// The shape gate runs first so a misshapen document fails with the
/// validator's error kinds rather than a deserialization error.
pub fn dataset_from_value(raw: &Value) -> Result<SalesData, IoError> {
    validate_shape(raw)?;
    Ok(SalesData::deserialize(raw)?)
}

/// Convenience: read and type a dataset document in one step
pub fn read_dataset(path: impl AsRef<Path>) -> Result<SalesData, IoError> {
    let raw = read_document(path)?;
    dataset_from_value(&raw)
}
