//! JSON file output.

use crate::WhoopError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize `value` as pretty-printed JSON to `path`, overwriting any
/// existing file. No atomic replace, no retry; an unwritable path surfaces
/// as [`WhoopError::Io`].
pub fn save_to_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), WhoopError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    tracing::debug!(path = %path.as_ref().display(), "wrote JSON output");
    Ok(())
}
