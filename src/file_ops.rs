//! Reading the target file as lines and writing it back atomically.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{BumpError, Result};

/// Read `path` into lines that keep their terminators.
///
/// Concatenating the returned lines reproduces the file exactly.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| BumpError::read_failed(path, e))?;
    let lines = split_lines(&content);
    debug!(path = %path.display(), lines = lines.len(), "read target file");
    Ok(lines)
}

/// Split text into lines, each keeping its `\n` or `\r\n` terminator.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Replace `path` with the concatenated `lines`.
///
/// The content goes to a temporary file in the same directory which is then
/// renamed over the target, so a failure leaves the original in place. An
/// existing symlink is followed and the file it points at is replaced.
pub fn write_lines_atomic<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let write_failed = |source: std::io::Error| BumpError::FileWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_failed)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    for line in lines {
        temp.write_all(line.as_ref().as_bytes())
            .map_err(write_failed)?;
    }
    temp.flush().map_err(write_failed)?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_failed)?;
    }

    temp.persist(&target).map_err(|e| write_failed(e.error))?;
    debug!(path = %path.display(), target = %target.display(), "wrote target file");
    Ok(())
}

/// The file a write to `path` should land on: the canonical path when
/// `path` exists (following symlinks), otherwise `path` itself.
fn resolve_target(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(_) => fs::canonicalize(path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}
