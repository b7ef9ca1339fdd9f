use std::io::Write;
use std::path::Path;

use crate::error::{MemsplitError, Result};

/// Write `contents` to a uniquely named hidden file next to `path`, then
/// rename it over `path`. Readers never observe a half-written file, and the
/// temporary name cannot coincide with another output in the same directory.
pub fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".memsplit-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| MemsplitError::io(dir, e))?;
    temp.write_all(contents)
        .map_err(|e| MemsplitError::io(temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| MemsplitError::io(path, e.error))?;

    Ok(())
}
