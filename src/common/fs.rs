//! File system helpers with unified error handling

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{self, Result};

/// Read a file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, e))
}

/// Replace the contents of `path` atomically.
///
/// The new content goes to a temporary file in the same directory, which is
/// then renamed over the original. Readers see either the old or the new file.
/// A symlinked `path` is written through: the link stays and its target is
/// replaced.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target: PathBuf = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| error::fs::write_failed(path, e))?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| error::fs::write_failed(path, e))?;

    // Keep the original permissions on the replacement
    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(temp.path(), metadata.permissions())
            .map_err(|e| error::fs::write_failed(path, e))?;
    }

    temp.persist(&target)
        .map_err(|e| error::fs::write_failed(path, e.error))?;
    Ok(())
}
