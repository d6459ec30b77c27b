use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{CounterSnapshot, StorageError};

/// Reads the persisted snapshot.
///
/// A missing file is the empty store, not an error; an unreadable or
/// unparseable file is surfaced as-is so recorded data is never silently
/// discarded.
pub fn load_snapshot(path: &Path) -> Result<CounterSnapshot, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(CounterSnapshot::new());
        }
        Err(err) => return Err(StorageError::Io(err)),
    };

    serde_json::from_str(&content).map_err(|err| StorageError::Corrupt {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Writes the full snapshot to `path` by writing a temp file in the same
/// directory and renaming it into place. An interrupted write leaves the
/// previous file intact, never a truncated one.
pub fn write_snapshot_atomic(path: &Path, snapshot: &CounterSnapshot) -> Result<(), StorageError> {
    let dir = parent_dir(path);
    fs::create_dir_all(&dir)?;

    let content =
        serde_json::to_string(snapshot).map_err(|err| StorageError::Serialize(err.to_string()))?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|err| StorageError::Io(err.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
