//! Snapshot file I/O

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{DuoError, Result};

/// Replace the file at `path` with `bytes` without ever exposing a
/// half-written file.
///
/// The temporary file lives in the same directory as `path` so the final
/// rename stays on one filesystem.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    // On failure the temp file is dropped and removed
    tmp.persist(path).map_err(|e| DuoError::Io(e.error))?;

    Ok(())
}

/// Read a whole snapshot file, `NotFound` if it is absent
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(DuoError::NotFound(format!(
            "snapshot file {}",
            path.display()
        ))),
        Err(e) => Err(e.into()),
    }
}
