//! Writing the weekly report to disk.

mod fs_utils;

use crate::errors::AppResult;
use fs_utils::ensure_writable;
use std::fs;
use std::path::Path;

/// Write `text` to `file`, creating parent directories. An existing file
/// is only replaced with `force` or after confirmation.
pub fn write_report(file: &Path, text: &str, force: bool) -> AppResult<()> {
    ensure_writable(file, force)?;

    if let Some(parent) = file.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(file, text)?;
    Ok(())
}
