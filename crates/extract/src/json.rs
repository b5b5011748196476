//! Artifact writing: one keyed JSON document per extracted sheet.

use crate::error::{ExtractError, Result};
use crate::extract::SheetRecords;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize the mapping as a pretty-printed keyed object.
///
/// Record fields keep their declared column order; ids keep row order.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn to_json_vec(records: &SheetRecords) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(records)
        .map_err(|e| ExtractError::Serialize(format!("JSON write error: {e}")))
}

/// Write the extracted mapping to `path` and return the hex SHA-256 digest
/// of the written bytes.
///
/// Serialization happens before the file is created, so a failed sheet
/// never leaves an empty or truncated artifact behind.
///
/// # Errors
///
/// Returns error if serialization or the write fails.
pub fn write_artifact<P: AsRef<Path>>(path: P, records: &SheetRecords) -> Result<String> {
    let bytes = to_json_vec(records)?;

    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    writer.write_all(&bytes)?;
    writer.flush()?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}
