use std::io::Write;

use super::error::IoError;
use crate::engine::SellerReport;

/// Write the report sequence as pretty-printed JSON
///
/// Appends a trailing newline and flushes, so the writer is ready for the
/// process to exit right after.
pub fn write_reports<W: Write>(reports: &[SellerReport], mut writer: W) -> Result<(), IoError> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
