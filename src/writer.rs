use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{InterlinearError, Result};

/// Writes `value` as two-space indented JSON, replacing any existing file.
///
/// Parent directories are created. Non-ASCII text is written as-is.
pub fn write_json_pretty<T: Serialize>(value: &T, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| InterlinearError::io(parent, e))?;
    }

    let file = File::create(file_path).map_err(|e| InterlinearError::io(file_path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| InterlinearError::Json { path: file_path.to_path_buf(), source: e })?;
    writer.flush().map_err(|e| InterlinearError::io(file_path, e))?;

    Ok(())
}
