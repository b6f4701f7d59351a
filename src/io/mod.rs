pub mod error;
pub mod json_reader;
pub mod json_writer;

// Re-export commonly used types
pub use error::IoError;
pub use json_reader::{dataset_from_value, document_from_reader, read_dataset, read_document};
pub use json_writer::write_reports;
