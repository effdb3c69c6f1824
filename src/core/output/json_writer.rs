//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{ChatstatsError, Result};

/// Writes a report (or any serializable value) to a pretty-printed JSON file.
pub fn write_json<T: Serialize + ?Sized>(value: &T, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let json = to_json(value)?;
    let mut file = File::create(output_path).map_err(|e| ChatstatsError::io_at(e, output_path))?;
    file.write_all(json.as_bytes())
        .map_err(|e| ChatstatsError::io_at(e, output_path))?;
    Ok(())
}

/// Converts a report (or any serializable value) to a pretty-printed JSON string.
///
/// Same format as [`write_json`], returned as a `String`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
